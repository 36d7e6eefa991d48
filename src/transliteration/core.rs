/*!
 * Core transliteration service implementation.
 *
 * This module contains the main TransliterationService struct and its
 * implementation, which turns one chunk of Hindi SRT text into its Hinglish
 * rendering using a configured AI provider. The service is the external
 * boundary of the conversion pipeline: one call per chunk, one failure event
 * per call, no retries.
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use url::Url;

use crate::app_config::{TransliterationConfig, TransliterationProvider as ConfigProvider};
use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{Ollama, GenerationRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};
use super::prompts::PromptBuilder;
use super::word_choice::{WordChoiceStrategy, retained_words};

/// Capability of transforming one chunk's serialized text.
///
/// The pipeline depends only on this trait, so a conversion run can be
/// driven by the real provider-backed service or by a deterministic fake in
/// tests. Implementations must behave as a single suspension point per call
/// and surface any failure as one `ProviderError`.
#[async_trait]
pub trait ChunkTransliterator: Send + Sync {
    /// Transform one chunk of SRT text, returning the converted text
    async fn transliterate_chunk(&self, chunk_text: &str) -> Result<String, ProviderError>;
}

/// Parse an endpoint string into host and port
fn parse_endpoint(endpoint: &str) -> Result<(String, u16)> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("http://{}", endpoint))?
    };

    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("Invalid host in endpoint: {}", endpoint))?
        .to_string();

    let port = url.port().unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    Ok((host, port))
}

/// Transliteration provider implementation variants
enum TransliterationProviderImpl {
    /// Ollama LLM service
    Ollama {
        /// Client instance
        client: Ollama,
    },

    /// OpenAI API service
    OpenAI {
        /// Client instance
        client: OpenAI,
    },

    /// Anthropic API service
    Anthropic {
        /// Client instance
        client: Anthropic,
    },
}

/// Main transliteration service for Hinglish conversion
pub struct TransliterationService {
    /// Provider implementation
    provider: TransliterationProviderImpl,

    /// Configuration for the transliteration service
    pub config: TransliterationConfig,

    /// Optional per-word retain-vs-transliterate strategy
    word_choice: Option<Arc<dyn WordChoiceStrategy>>,
}

impl TransliterationService {
    /// Create a new transliteration service with the given configuration
    pub fn new(config: TransliterationConfig) -> Result<Self> {
        let timeout_secs = config.get_timeout_secs();

        let provider = match config.provider {
            ConfigProvider::Ollama => {
                let (host, port) = parse_endpoint(&config.get_endpoint())?;
                TransliterationProviderImpl::Ollama {
                    client: Ollama::new(&host, port, config.get_model(), timeout_secs),
                }
            }
            ConfigProvider::OpenAI => TransliterationProviderImpl::OpenAI {
                client: OpenAI::new(
                    config.get_api_key(),
                    config.get_endpoint(),
                    config.get_model(),
                    timeout_secs,
                ),
            },
            ConfigProvider::Anthropic => TransliterationProviderImpl::Anthropic {
                client: Anthropic::new(
                    config.get_api_key(),
                    config.get_endpoint(),
                    config.get_model(),
                    timeout_secs,
                ),
            },
        };

        Ok(Self {
            provider,
            config,
            word_choice: None,
        })
    }

    /// Attach a word-choice strategy consulted when building chunk prompts.
    /// Without one, every word is left to the model's own judgement.
    pub fn with_word_choice(mut self, strategy: Arc<dyn WordChoiceStrategy>) -> Self {
        self.word_choice = Some(strategy);
        self
    }

    /// Test the connection to the transliteration provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            TransliterationProviderImpl::Ollama { client } => client.test_connection().await,
            TransliterationProviderImpl::OpenAI { client } => client.test_connection().await,
            TransliterationProviderImpl::Anthropic { client } => client.test_connection().await,
        }
    }

    /// Assemble the system and user prompts for one chunk
    fn build_prompts(&self, chunk_text: &str) -> (String, String) {
        let mut builder = PromptBuilder::new(&self.config.common.system_prompt);

        if let Some(strategy) = &self.word_choice {
            let retained = retained_words(chunk_text, strategy.as_ref());
            if !retained.is_empty() {
                debug!("Retaining {} words in original script", retained.len());
                builder = builder.with_retained_words(retained);
            }
        }

        (builder.build_system_prompt(), builder.build_user_prompt(chunk_text))
    }
}

#[async_trait]
impl ChunkTransliterator for TransliterationService {
    async fn transliterate_chunk(&self, chunk_text: &str) -> Result<String, ProviderError> {
        let (system_prompt, user_prompt) = self.build_prompts(chunk_text);
        let temperature = self.config.common.temperature;

        let text = match &self.provider {
            TransliterationProviderImpl::Ollama { client } => {
                let request = GenerationRequest::new(client.model(), user_prompt)
                    .system(system_prompt)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                Ollama::extract_text(&response)
            }
            TransliterationProviderImpl::OpenAI { client } => {
                let request = OpenAIRequest::new(client.model())
                    .add_message("system", system_prompt)
                    .add_message("user", user_prompt)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                OpenAI::extract_text(&response)
            }
            TransliterationProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(client.model(), self.config.common.max_tokens)
                    .system(system_prompt)
                    .add_message("user", user_prompt)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                Anthropic::extract_text(&response)
            }
        };

        // Models tend to pad their answer with blank lines; trimming keeps
        // the accumulated document's block separators canonical
        Ok(text.trim().to_string())
    }
}
