/*!
 * Tests for application configuration
 */

use std::str::FromStr;
use hinglify::app_config::{Config, TransliterationProvider};

/// Test the shipped defaults
#[test]
fn test_default_config_shouldUseOllamaWithFiftyBlocksPerChunk() {
    let config = Config::default();

    assert_eq!(config.transliteration.provider, TransliterationProvider::Ollama);
    assert_eq!(config.conversion.max_blocks_per_chunk, 50);
    assert_eq!(config.transliteration.available_providers.len(), 3);
    assert_eq!(config.transliteration.get_model(), "llama3.2:3b");
    assert_eq!(config.transliteration.get_endpoint(), "http://localhost:11434");
    assert_eq!(config.transliteration.get_timeout_secs(), 60);
}

/// Test that a default config validates
#[test]
fn test_validate_withDefaultConfig_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

/// Test that a zero chunk bound fails validation
#[test]
fn test_validate_withZeroChunkBound_shouldFail() {
    let mut config = Config::default();
    config.conversion.max_blocks_per_chunk = 0;

    assert!(config.validate().is_err());
}

/// Test that a remote provider without an API key fails validation
#[test]
fn test_validate_withOpenAiAndNoApiKey_shouldFail() {
    let mut config = Config::default();
    config.transliteration.provider = TransliterationProvider::OpenAI;

    assert!(config.validate().is_err());
}

/// Test that an Anthropic config with an API key validates
#[test]
fn test_validate_withAnthropicAndApiKey_shouldPass() {
    let mut config = Config::default();
    config.transliteration.provider = TransliterationProvider::Anthropic;
    for provider in &mut config.transliteration.available_providers {
        if provider.provider_type == "anthropic" {
            provider.api_key = "sk-test-key".to_string();
        }
    }

    assert!(config.validate().is_ok());
    assert_eq!(config.transliteration.get_api_key(), "sk-test-key");
    assert_eq!(config.transliteration.get_timeout_secs(), 120);
}

/// Test parsing a minimal JSON config relying on serde defaults
#[test]
fn test_config_parse_withMinimalJson_shouldFillDefaults() {
    let json = r#"{
        "transliteration": {
            "provider": "ollama"
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.transliteration.provider, TransliterationProvider::Ollama);
    assert_eq!(config.conversion.max_blocks_per_chunk, 50);
    assert!(!config.transliteration.common.system_prompt.is_empty());
}

/// Test parsing an explicit provider table
#[test]
fn test_config_parse_withProviderTable_shouldReadModelAndEndpoint() {
    let json = r#"{
        "conversion": { "max_blocks_per_chunk": 25 },
        "transliteration": {
            "provider": "openai",
            "available_providers": [
                {
                    "type": "openai",
                    "model": "gpt-4o",
                    "api_key": "sk-test",
                    "endpoint": "https://api.openai.com/v1"
                }
            ]
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.conversion.max_blocks_per_chunk, 25);
    assert_eq!(config.transliteration.get_model(), "gpt-4o");
    assert_eq!(config.transliteration.get_api_key(), "sk-test");
    assert!(config.validate().is_ok());
}

/// Test the provider string round trip
#[test]
fn test_provider_fromStr_withValidNames_shouldParse() {
    assert_eq!(TransliterationProvider::from_str("ollama").unwrap(), TransliterationProvider::Ollama);
    assert_eq!(TransliterationProvider::from_str("OpenAI").unwrap(), TransliterationProvider::OpenAI);
    assert_eq!(TransliterationProvider::from_str("ANTHROPIC").unwrap(), TransliterationProvider::Anthropic);
    assert!(TransliterationProvider::from_str("gemini").is_err());
}

/// Test display names
#[test]
fn test_provider_display_shouldUseLowercaseIdentifier() {
    assert_eq!(TransliterationProvider::OpenAI.to_string(), "openai");
    assert_eq!(TransliterationProvider::Anthropic.display_name(), "Anthropic");
}

/// Test that a config survives a serialize/deserialize cycle
#[test]
fn test_config_serialization_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.transliteration.provider, config.transliteration.provider);
    assert_eq!(parsed.conversion.max_blocks_per_chunk, config.conversion.max_blocks_per_chunk);
}
