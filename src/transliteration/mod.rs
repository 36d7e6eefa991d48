/*!
 * Hindi to Hinglish conversion using AI providers.
 *
 * This module contains the chunked conversion pipeline and its service
 * boundary. It is split into several submodules:
 *
 * - `core`: Transliteration service definition and provider dispatch
 * - `pipeline`: Sequential chunked conversion orchestrator
 * - `progress`: Completion fraction computation
 * - `prompts`: Prompt templates and builders for conversion requests
 * - `word_choice`: Pluggable retain-vs-transliterate word decisions
 */

// Re-export main types for easier usage
pub use self::core::{ChunkTransliterator, TransliterationService};
pub use self::pipeline::{ConversionOutcome, ConversionPipeline};
pub use self::progress::completion_fraction;
pub use self::prompts::PromptBuilder;
pub use self::word_choice::{WordChoiceStrategy, WordDecision};

// Submodules
pub mod core;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod word_choice;
