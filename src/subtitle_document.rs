use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{warn, debug};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle document model - block splitting and chunk assembly

/// Canonical separator between two subtitle blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

// @const: Blank-line delimiter regex - one or more consecutive line breaks
// with only horizontal whitespace between them
static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").unwrap()
});

/// A raw subtitle document as loaded from an SRT file.
///
/// Immutable once read; the splitter consumes its text. The document's
/// encoding is assumed to be UTF-8 (reading fails otherwise).
#[derive(Debug, Clone)]
pub struct SubtitleDocument {
    /// Source filename
    pub source_file: PathBuf,

    /// Full raw text of the document
    pub text: String,
}

impl SubtitleDocument {
    /// Create a document from already-loaded text
    pub fn new(source_file: PathBuf, text: String) -> Self {
        SubtitleDocument { source_file, text }
    }

    /// Load a document from an SRT file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
        Ok(SubtitleDocument {
            source_file: path.to_path_buf(),
            text,
        })
    }

    /// Split this document into its ordered block sequence
    pub fn blocks(&self) -> Vec<Block> {
        split_blocks(&self.text)
    }
}

/// The atomic, order-preserving unit of a subtitle document.
///
/// Conventionally an index line, a timing line and one or more content
/// lines, but the conversion pipeline never looks inside: a block is opaque
/// text, preserved byte-for-byte until the service's output replaces its
/// whole chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Exact block text, including internal line breaks
    pub text: String,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        Block { text: text.into() }
    }
}

/// An ordered, non-empty, bounded-size group of consecutive blocks,
/// serialized back into transformable text. Each chunk is dispatched to the
/// transliteration service as exactly one call.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Blocks joined with the canonical blank-line separator
    pub text: String,

    /// Number of blocks serialized into this chunk
    pub block_count: usize,
}

/// Split a raw subtitle document into an ordered sequence of opaque blocks.
///
/// The whole document is trimmed first; blocks are then cut on blank-line
/// delimiters (one or more consecutive line breaks with only whitespace
/// between them). A block's own content passes through unmodified.
///
/// An empty or whitespace-only document yields an empty sequence, and a
/// document without any blank line yields exactly one block holding the
/// entire trimmed text. Rejoining the result with [`BLOCK_SEPARATOR`]
/// reproduces the trimmed document (exactly so for canonically separated
/// input; non-canonical blank runs are normalized to the separator).
pub fn split_blocks(document: &str) -> Vec<Block> {
    let trimmed = document.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    BLANK_LINE_REGEX
        .split(trimmed)
        .map(Block::new)
        .collect()
}

/// Join blocks back into a single document with the canonical separator
pub fn join_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Group blocks into ordered, size-bounded chunks.
///
/// Produces `ceil(blocks.len() / max_blocks)` chunks covering the block
/// sequence in original order without overlap or gaps; every chunk except
/// possibly the last holds exactly `max_blocks` blocks. Empty input yields
/// an empty chunk sequence, which the pipeline treats as trivial success.
pub fn assemble_chunks(blocks: &[Block], max_blocks: usize) -> Vec<Chunk> {
    if blocks.is_empty() {
        debug!("No subtitle blocks to assemble into chunks");
        return Vec::new();
    }

    // A bound of zero would never terminate a partition; clamp it
    let effective_max = if max_blocks == 0 {
        warn!("Chunk size bound of 0 is invalid, using 1");
        1
    } else {
        max_blocks
    };

    let chunks: Vec<Chunk> = blocks
        .chunks(effective_max)
        .map(|group| Chunk {
            text: join_blocks(group),
            block_count: group.len(),
        })
        .collect();

    debug!(
        "Assembled {} blocks into {} chunks (max {} blocks per chunk)",
        blocks.len(),
        chunks.len(),
        effective_max
    );

    chunks
}
