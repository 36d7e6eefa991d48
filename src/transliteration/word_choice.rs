/*!
 * Pluggable retain-vs-transliterate word decisions.
 *
 * The transliteration service may consult a word-choice strategy to decide,
 * per Hindi word, whether the word should be transliterated to Roman script
 * or kept in Devanagari. The pipeline itself never sees these decisions;
 * they only shape the instructions sent alongside a chunk.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Devanagari word regex (covers the main Devanagari block)
static DEVANAGARI_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ऀ-ॿ]+").unwrap()
});

/// Decision for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordDecision {
    /// Convert the word to its Hinglish rendering
    Transliterate,
    /// Keep the word in its original Devanagari form
    Retain,
}

/// Strategy deciding how a single Hindi word should be handled.
///
/// One pure decision operation, so strategies can be swapped freely and
/// driven deterministically in tests.
pub trait WordChoiceStrategy: Send + Sync {
    fn decide(&self, word: &str) -> WordDecision;
}

/// Default strategy: transliterate everything
#[derive(Debug, Default)]
pub struct TransliterateAll;

impl WordChoiceStrategy for TransliterateAll {
    fn decide(&self, _word: &str) -> WordDecision {
        WordDecision::Transliterate
    }
}

/// Retain words at or below a character threshold.
///
/// Very short Hindi words often have no meaningful Roman rendering; keeping
/// them in the original script reads better than a one-letter transliteration.
#[derive(Debug)]
pub struct RetainShortWords {
    /// Words with this many characters or fewer are retained
    pub max_chars: usize,
}

impl WordChoiceStrategy for RetainShortWords {
    fn decide(&self, word: &str) -> WordDecision {
        if word.chars().count() <= self.max_chars {
            WordDecision::Retain
        } else {
            WordDecision::Transliterate
        }
    }
}

/// Extract all Devanagari words from a text, in order of appearance
pub fn devanagari_words(text: &str) -> Vec<&str> {
    DEVANAGARI_WORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Collect the distinct words of a text that a strategy says to retain,
/// preserving first-appearance order
pub fn retained_words(text: &str, strategy: &dyn WordChoiceStrategy) -> Vec<String> {
    let mut seen = Vec::new();
    for word in devanagari_words(text) {
        if strategy.decide(word) == WordDecision::Retain && !seen.iter().any(|w| w == word) {
            seen.push(word.to_string());
        }
    }
    seen
}
