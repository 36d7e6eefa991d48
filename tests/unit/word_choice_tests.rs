/*!
 * Tests for word-choice strategies
 */

use hinglify::transliteration::word_choice::{
    RetainShortWords, TransliterateAll, WordDecision, devanagari_words, retained_words,
};
use hinglify::transliteration::WordChoiceStrategy;

/// Test Devanagari word extraction from mixed-script text
#[test]
fn test_devanagari_words_withMixedText_shouldExtractOnlyDevanagari() {
    let text = "1\n00:00:01,000 --> 00:00:02,000\nमैं Piano बजाता हूँ";
    let words = devanagari_words(text);

    assert_eq!(words, vec!["मैं", "बजाता", "हूँ"]);
}

/// Test extraction from text with no Devanagari at all
#[test]
fn test_devanagari_words_withLatinOnlyText_shouldReturnEmpty() {
    assert!(devanagari_words("Hello world 123").is_empty());
}

/// Test that the default strategy transliterates everything
#[test]
fn test_transliterate_all_withAnyWord_shouldTransliterate() {
    let strategy = TransliterateAll;

    assert_eq!(strategy.decide("मैं"), WordDecision::Transliterate);
    assert_eq!(strategy.decide("करूँगा"), WordDecision::Transliterate);
}

/// Test the short-word retention threshold
#[test]
fn test_retain_short_words_withThreshold_shouldRetainAtOrBelowIt() {
    let strategy = RetainShortWords { max_chars: 2 };

    assert_eq!(strategy.decide("न"), WordDecision::Retain);
    assert_eq!(strategy.decide("ना"), WordDecision::Retain);
    assert_eq!(strategy.decide("नहीं"), WordDecision::Transliterate);
}

/// Test that retained words are distinct and preserve first-appearance order
#[test]
fn test_retained_words_withRepeatedWords_shouldBeDistinctAndOrdered() {
    let strategy = RetainShortWords { max_chars: 4 };
    let text = "हाँ नहीं हाँ जी नहीं";

    let words = retained_words(text, &strategy);
    assert_eq!(words, vec!["हाँ".to_string(), "नहीं".to_string(), "जी".to_string()]);
}

/// Test that no retained words come back when the strategy never retains
#[test]
fn test_retained_words_withTransliterateAll_shouldReturnEmpty() {
    let words = retained_words("मैं नहीं करूँगा", &TransliterateAll);
    assert!(words.is_empty());
}
