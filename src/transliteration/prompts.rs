/*!
 * Prompt assembly for Hinglish conversion requests.
 *
 * The conversion contract lives here: the model receives one chunk of SRT
 * text (one or more blocks joined by blank lines) and must return the same
 * structure with only the Hindi dialogue replaced by its Hinglish rendering.
 */

/// Default system prompt for Hindi to Hinglish conversion.
///
/// Index numbers and timecodes must survive untouched; common English and
/// technical terms keep their standard English spelling rather than a raw
/// phonetic transliteration.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an expert in converting Hindi text to Hinglish (Hindi transliterated into the Roman alphabet).
You will receive the content of an SRT subtitle file, which contains subtitles in Hindi.
Convert all Hindi text within the SRT content to Hinglish, while maintaining the SRT file structure.

Guidelines for transliteration:
- Preserve the SRT format: each subtitle entry consists of a number, a timecode, and the text. You must not change these.
- Convert only the Hindi text: leave the numbers and timecodes untouched.
- For general Hindi phrases, provide a standard Hinglish transliteration. For example, \"मैं नहीं करूँगा\" should become \"Mai Nahi Karunga\".
- For words that are common in English or are technical terms, use their standard English spelling, not a direct phonetic transliteration. For example, \"पियानो\" should become \"Piano\", not \"piyaano\". Similarly, \"गिटार\" should be \"Guitar\" and \"स्टूडियो\" should be \"Studio\".
- Reply with the converted SRT content only, without commentary.";

/// Builder assembling the system and user prompts for one chunk request
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    /// Base system prompt (from configuration)
    system_prompt: String,

    /// Words to keep in their original Devanagari form
    retained_words: Vec<String>,
}

impl PromptBuilder {
    /// Create a builder around a configured system prompt
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            retained_words: Vec::new(),
        }
    }

    /// Add words the word-choice strategy decided to retain
    pub fn with_retained_words(mut self, words: Vec<String>) -> Self {
        self.retained_words = words;
        self
    }

    /// Build the full system prompt, appending retain instructions if any
    pub fn build_system_prompt(&self) -> String {
        if self.retained_words.is_empty() {
            return self.system_prompt.clone();
        }

        let mut prompt = self.system_prompt.clone();
        prompt.push_str(
            "\n\nKeep the following words exactly as written, in their original script, without transliterating them: ",
        );
        prompt.push_str(&self.retained_words.join(", "));
        prompt.push('.');
        prompt
    }

    /// Build the user prompt carrying one chunk's serialized text
    pub fn build_user_prompt(&self, chunk_text: &str) -> String {
        format!("The SRT content is as follows:\n\n{}", chunk_text)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}
