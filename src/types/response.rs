//! Retrieval and session status types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Chunk;

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Similarity score (0.0-1.0, higher is more similar)
    pub similarity: f32,
}

/// Ordered retrieval output: descending by similarity, insertion-order
/// stable on ties
pub type RetrievalResult = Vec<ScoredChunk>;

/// Snapshot of a session's state, for callers rendering progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether a corpus is loaded and answering is enabled
    pub ready: bool,
    /// Source identifier of the ingested document, if any
    pub source: Option<String>,
    /// Number of chunks in the index
    pub chunks: usize,
    /// Embedding dimensionality of the index, once established
    pub dimensions: Option<usize>,
    /// When the current corpus was ingested
    pub ingested_at: Option<DateTime<Utc>>,
}

impl SessionStatus {
    /// Status of a session with no corpus
    pub fn empty() -> Self {
        Self {
            ready: false,
            source: None,
            chunks: 0,
            dimensions: None,
            ingested_at: None,
        }
    }
}
