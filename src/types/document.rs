//! Document and chunk types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document handed to the engine for ingestion.
///
/// Ephemeral: exists only for the duration of `ingest`. The extracted text
/// lives on in the chunks; the document itself is not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// Opaque source identifier (filename, URL, ...) used in diagnostics
    pub source: String,
    /// Raw extracted text
    pub text: String,
}

impl Document {
    /// Create a new document from extracted text
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A contiguous slice of a document's text, the unit of retrieval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sequence index within the document (stable, 0-based)
    pub index: u32,
    /// Start offset into the source text, in characters
    pub char_start: usize,
    /// End offset into the source text, in characters (exclusive)
    pub char_end: usize,
    /// Text content
    pub content: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(index: u32, char_start: usize, char_end: usize, content: String) -> Self {
        Self {
            index,
            char_start,
            char_end,
            content,
        }
    }

    /// Chunk length in characters
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }
}

/// A chunk paired with its embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    /// The source chunk
    pub chunk: Chunk,
    /// Embedding vector; all vectors in one index share the same length
    pub embedding: Vec<f32>,
}

impl EmbeddedChunk {
    /// Pair a chunk with its embedding
    pub fn new(chunk: Chunk, embedding: Vec<f32>) -> Self {
        Self { chunk, embedding }
    }
}
