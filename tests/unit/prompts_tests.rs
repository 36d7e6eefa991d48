/*!
 * Tests for prompt assembly
 */

use hinglify::transliteration::PromptBuilder;
use hinglify::transliteration::prompts::DEFAULT_SYSTEM_PROMPT;

/// Test that the default system prompt carries the core conversion rules
#[test]
fn test_default_system_prompt_shouldContainConversionRules() {
    assert!(DEFAULT_SYSTEM_PROMPT.contains("Hinglish"));
    assert!(DEFAULT_SYSTEM_PROMPT.contains("Preserve the SRT format"));
    assert!(DEFAULT_SYSTEM_PROMPT.contains("Mai Nahi Karunga"));
    assert!(DEFAULT_SYSTEM_PROMPT.contains("Piano"));
}

/// Test that without retained words the system prompt passes through untouched
#[test]
fn test_build_system_prompt_withoutRetainedWords_shouldReturnBasePrompt() {
    let builder = PromptBuilder::new("Base prompt");
    assert_eq!(builder.build_system_prompt(), "Base prompt");
}

/// Test that retained words are appended as an explicit instruction
#[test]
fn test_build_system_prompt_withRetainedWords_shouldAppendRetainInstruction() {
    let builder = PromptBuilder::new("Base prompt")
        .with_retained_words(vec!["हाँ".to_string(), "जी".to_string()]);

    let prompt = builder.build_system_prompt();
    assert!(prompt.starts_with("Base prompt"));
    assert!(prompt.contains("Keep the following words exactly as written"));
    assert!(prompt.contains("हाँ, जी"));
}

/// Test the user prompt wrapping of chunk text
#[test]
fn test_build_user_prompt_withChunkText_shouldWrapContent() {
    let builder = PromptBuilder::default();
    let chunk = "1\n00:00:01,000 --> 00:00:02,000\nनमस्ते";

    let prompt = builder.build_user_prompt(chunk);
    assert!(prompt.starts_with("The SRT content is as follows:"));
    assert!(prompt.ends_with(chunk));
}

/// Test the default builder uses the default system prompt
#[test]
fn test_default_builder_shouldUseDefaultSystemPrompt() {
    let builder = PromptBuilder::default();
    assert_eq!(builder.build_system_prompt(), DEFAULT_SYSTEM_PROMPT);
}
