use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::transliteration::prompts::DEFAULT_SYSTEM_PROMPT;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Conversion pipeline settings
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Transliteration service config
    #[serde(default)]
    pub transliteration: TransliterationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Transliteration provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationProvider {
    // @provider: Ollama
    #[default]
    Ollama,
    // @provider: OpenAI
    OpenAI,
    // @provider: Anthropic
    Anthropic,
}

impl TransliterationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Ollama => "Ollama",
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Ollama => "ollama".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Anthropic => "anthropic".to_string(),
        }
    }
}

impl std::fmt::Display for TransliterationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TransliterationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "String::new")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TransliterationProvider) -> Self {
        match provider_type {
            TransliterationProvider::Ollama => Self {
                provider_type: "ollama".to_string(),
                model: default_ollama_model(),
                api_key: String::new(),
                endpoint: default_ollama_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TransliterationProvider::OpenAI => Self {
                provider_type: "openai".to_string(),
                model: default_openai_model(),
                api_key: String::new(),
                endpoint: default_openai_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TransliterationProvider::Anthropic => Self {
                provider_type: "anthropic".to_string(),
                model: default_anthropic_model(),
                api_key: String::new(),
                endpoint: default_anthropic_endpoint(),
                timeout_secs: default_anthropic_timeout_secs(),
            },
        }
    }
}

/// Transliteration service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransliterationConfig {
    /// Transliteration provider to use
    #[serde(default)]
    pub provider: TransliterationProvider,

    /// Available transliteration providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,

    /// Common transliteration settings
    #[serde(default)]
    pub common: TransliterationCommonConfig,
}

/// Common transliteration settings applicable to all providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransliterationCommonConfig {
    /// System prompt describing the Hinglish conversion contract
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Temperature parameter for text generation (0.0 to 1.0)
    /// Lower values make output more deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum number of tokens a single chunk response may use
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for TransliterationCommonConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Conversion pipeline configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConversionConfig {
    /// Maximum number of subtitle blocks dispatched per service call.
    /// Bounds chunk size against the provider's input limits; must be >= 1.
    #[serde(default = "default_max_blocks_per_chunk")]
    pub max_blocks_per_chunk: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_blocks_per_chunk: default_max_blocks_per_chunk(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_blocks_per_chunk() -> usize {
    50
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_anthropic_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-haiku".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Chunk bound of zero would make the partition undefined
        if self.conversion.max_blocks_per_chunk == 0 {
            return Err(anyhow!("conversion.max_blocks_per_chunk must be at least 1"));
        }

        // Validate API key for all providers except Ollama
        match self.transliteration.provider {
            TransliterationProvider::OpenAI => {
                if self.transliteration.get_api_key().is_empty() {
                    return Err(anyhow!("API key is required for the OpenAI provider"));
                }
            }
            TransliterationProvider::Anthropic => {
                if self.transliteration.get_api_key().is_empty() {
                    return Err(anyhow!("API key is required for the Anthropic provider"));
                }
            }
            TransliterationProvider::Ollama => {}
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conversion: ConversionConfig::default(),
            transliteration: TransliterationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TransliterationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a specific provider configuration by type for testing
    pub fn get_provider_config(&self, provider_type: &TransliterationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the model for the active provider
    pub fn get_model(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.model.is_empty() {
                return provider_config.model.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TransliterationProvider::Ollama => default_ollama_model(),
            TransliterationProvider::OpenAI => default_openai_model(),
            TransliterationProvider::Anthropic => default_anthropic_model(),
        }
    }

    /// Get the API key for the active provider
    pub fn get_api_key(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.api_key.is_empty() {
                return provider_config.api_key.clone();
            }
        }

        // Default fallback - Ollama doesn't use API keys
        String::new()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TransliterationProvider::Ollama => default_ollama_endpoint(),
            TransliterationProvider::OpenAI => default_openai_endpoint(),
            TransliterationProvider::Anthropic => default_anthropic_endpoint(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.timeout_secs > 0 {
                return provider_config.timeout_secs;
            }
        }

        match self.provider {
            TransliterationProvider::Anthropic => default_anthropic_timeout_secs(),
            _ => default_timeout_secs(),
        }
    }
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: TransliterationProvider::default(),
            available_providers: Vec::new(),
            common: TransliterationCommonConfig::default(),
        };

        // Add default providers
        config.available_providers.push(ProviderConfig::new(TransliterationProvider::Ollama));
        config.available_providers.push(ProviderConfig::new(TransliterationProvider::OpenAI));
        config.available_providers.push(ProviderConfig::new(TransliterationProvider::Anthropic));

        config
    }
}
