/*!
 * # hinglify - Hindi to Hinglish subtitle converter
 *
 * A Rust library for converting Hindi SRT subtitle files to Hinglish
 * (Hindi transliterated into the Roman alphabet) using AI.
 *
 * ## Features
 *
 * - Split SRT documents into timing-addressed blocks and size-bounded chunks
 * - Convert chunks sequentially through AI providers:
 *   - Ollama (local LLM)
 *   - OpenAI API
 *   - Anthropic API
 * - Preserve subtitle timing structure exactly
 * - Report fractional progress after each converted chunk
 * - Keep partial output when a conversion fails midway
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_document`: Subtitle document model, block splitting and chunk assembly
 * - `transliteration`: AI-powered Hinglish conversion:
 *   - `transliteration::pipeline`: Sequential chunked conversion orchestrator
 *   - `transliteration::core`: Transliteration service and provider dispatch
 *   - `transliteration::progress`: Progress fraction computation
 *   - `transliteration::prompts`: Conversion prompt assembly
 *   - `transliteration::word_choice`: Retain-vs-transliterate word decisions
 * - `file_utils`: File system operations and output naming
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for the LLM providers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod subtitle_document;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_document::{Block, Chunk, SubtitleDocument};
pub use transliteration::{ConversionOutcome, ConversionPipeline, TransliterationService};
pub use errors::{AppError, ConversionError, ProviderError};
