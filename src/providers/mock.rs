/*!
 * Mock transliteration services for testing.
 *
 * This module provides fakes that simulate different service behaviors:
 * - `MockTransliterator::working()` - Always succeeds with converted text
 * - `MockTransliterator::failing()` - Always fails with an error
 * - `MockTransliterator::fail_on_call(n)` - Fails deterministically on the
 *   nth call, so partial-failure behavior can be driven chunk by chunk
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::transliteration::ChunkTransliterator;

/// Behavior mode for the mock transliterator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, tagging the input text
    Working,
    /// Always fails with an error
    Failing,
    /// Fails on the nth call (1-based), succeeding before and never after
    FailOnCall(usize),
    /// Returns empty converted text
    Empty,
    /// Simulates a slow service call (for suspension-point testing)
    Slow { delay_ms: u64 },
}

/// Mock service for driving the conversion pipeline in tests
#[derive(Debug)]
pub struct MockTransliterator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls received so far
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockTransliterator {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that fails on the nth call (1-based)
    pub fn fail_on_call(n: usize) -> Self {
        Self::new(MockBehavior::FailOnCall(n))
    }

    /// Create a mock that returns empty converted text
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of service calls received so far
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn convert(&self, chunk_text: &str) -> String {
        if let Some(generator) = self.custom_response {
            generator(chunk_text)
        } else {
            format!("[HINGLISH] {}", chunk_text)
        }
    }
}

impl Clone for MockTransliterator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl ChunkTransliterator for MockTransliterator {
    async fn transliterate_chunk(&self, chunk_text: &str) -> Result<String, ProviderError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Working => Ok(self.convert(chunk_text)),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated service failure".to_string(),
            }),

            MockBehavior::FailOnCall(n) => {
                if call == n {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure on call #{}", call),
                    })
                } else {
                    Ok(self.convert(chunk_text))
                }
            }

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.convert(chunk_text))
            }
        }
    }
}
