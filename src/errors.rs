/*!
 * Error types for the hinglify application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a transliteration provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors terminating a conversion run.
///
/// A failed chunk is never retried; the run stops at the failing chunk and
/// the outcome keeps whatever output the earlier chunks produced. An empty
/// input document is not an error (it converts trivially to empty output).
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The transliteration service rejected or failed a single chunk's call.
    #[error("transliteration service failed on chunk {chunk_index} of {total_chunks}: {source}")]
    ServiceInvocation {
        /// 1-based index of the chunk whose service call failed
        chunk_index: usize,
        /// Total number of chunks in the run
        total_chunks: usize,
        /// The underlying provider failure
        #[source]
        source: ProviderError,
    },
}

impl ConversionError {
    /// 1-based index of the chunk that failed
    pub fn chunk_index(&self) -> usize {
        match self {
            Self::ServiceInvocation { chunk_index, .. } => *chunk_index,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a conversion run
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
