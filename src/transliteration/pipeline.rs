/*!
 * Chunked conversion pipeline.
 *
 * The orchestrator at the center of hinglify: it splits a subtitle document
 * into blocks, groups them into size-bounded chunks, dispatches each chunk
 * to the transliteration service strictly in order, and assembles a running
 * output document while reporting fractional progress.
 *
 * Dispatch is deliberately sequential with a single outstanding call:
 * chunk i+1 is issued only after chunk i has fully resolved, so the
 * accumulated output preserves the original block ordering without any
 * reordering buffer, and the provider never sees concurrent requests.
 */

use log::{debug, error, info};

use crate::errors::ConversionError;
use crate::subtitle_document::{BLOCK_SEPARATOR, assemble_chunks, split_blocks};
use super::core::ChunkTransliterator;
use super::progress::completion_fraction;

/// Final result of one conversion run.
///
/// On success `output` holds the complete converted document. On failure it
/// holds the output accumulated from every chunk that completed before the
/// failing one; nothing from the failed chunk or later appears.
#[derive(Debug)]
pub struct ConversionOutcome {
    /// Accumulated output document
    pub output: String,

    /// Number of chunks whose service calls completed
    pub completed_chunks: usize,

    /// Total number of chunks in the run
    pub total_chunks: usize,

    /// Failure that terminated the run, if any
    pub error: Option<ConversionError>,
}

impl ConversionOutcome {
    /// Whether the run converted every chunk
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the run failed after at least one chunk had completed,
    /// leaving partial output behind
    pub fn is_partial_failure(&self) -> bool {
        self.error.is_some() && self.completed_chunks > 0
    }

    /// Final progress fraction of the run
    pub fn progress(&self) -> f64 {
        completion_fraction(self.completed_chunks, self.total_chunks)
    }
}

/// Orchestrator for chunked Hindi to Hinglish conversion
pub struct ConversionPipeline {
    /// Maximum number of blocks per service call
    max_blocks_per_chunk: usize,
}

impl ConversionPipeline {
    /// Create a pipeline with the given chunk size bound (minimum 1)
    pub fn new(max_blocks_per_chunk: usize) -> Self {
        Self {
            max_blocks_per_chunk: max_blocks_per_chunk.max(1),
        }
    }

    /// Convert a whole subtitle document through the given service.
    ///
    /// The document is split into blocks and assembled into chunks of at
    /// most the configured size; each chunk is sent to the service in
    /// original order, one outstanding call at a time. After each completed
    /// chunk `on_progress` receives the updated completion fraction, ending
    /// at exactly 1.0 when the run succeeds.
    ///
    /// An empty or whitespace-only document is a trivial success: empty
    /// output, zero service calls, and no progress callbacks at all.
    ///
    /// On a chunk failure the run stops immediately. The outcome keeps the
    /// output accumulated from all previously completed chunks and carries
    /// the chunk's error; no retry is attempted and no later chunk is
    /// dispatched. The service's responses are trusted as-is: the pipeline
    /// does not verify that returned text has the same block count or
    /// timing lines as its input.
    pub async fn run<S, F>(&self, document: &str, service: &S, mut on_progress: F) -> ConversionOutcome
    where
        S: ChunkTransliterator + ?Sized,
        F: FnMut(f64),
    {
        let blocks = split_blocks(document);
        let chunks = assemble_chunks(&blocks, self.max_blocks_per_chunk);

        if chunks.is_empty() {
            info!("Document contains no subtitle blocks, nothing to convert");
            return ConversionOutcome {
                output: String::new(),
                completed_chunks: 0,
                total_chunks: 0,
                error: None,
            };
        }

        let total_chunks = chunks.len();
        debug!(
            "Converting {} blocks in {} chunks (max {} blocks per chunk)",
            blocks.len(),
            total_chunks,
            self.max_blocks_per_chunk
        );

        let mut output = String::new();
        let mut completed = 0;

        for (index, chunk) in chunks.iter().enumerate() {
            debug!(
                "Dispatching chunk {} of {} ({} blocks, {} chars)",
                index + 1,
                total_chunks,
                chunk.block_count,
                chunk.text.len()
            );

            match service.transliterate_chunk(&chunk.text).await {
                Ok(converted) => {
                    // Never lead with a separator, and never glue two
                    // non-empty chunk outputs together without one
                    if !output.is_empty() && !converted.is_empty() {
                        output.push_str(BLOCK_SEPARATOR);
                    }
                    output.push_str(&converted);

                    completed += 1;
                    on_progress(completion_fraction(completed, total_chunks));
                }
                Err(e) => {
                    error!(
                        "Chunk {} of {} failed, keeping output of {} completed chunks: {}",
                        index + 1,
                        total_chunks,
                        completed,
                        e
                    );
                    return ConversionOutcome {
                        output,
                        completed_chunks: completed,
                        total_chunks,
                        error: Some(ConversionError::ServiceInvocation {
                            chunk_index: index + 1,
                            total_chunks,
                            source: e,
                        }),
                    };
                }
            }
        }

        ConversionOutcome {
            output,
            completed_chunks: completed,
            total_chunks,
            error: None,
        }
    }
}
