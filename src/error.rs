//! Error types for the RAG engine

use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG engine errors
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration (bad chunking or retrieval parameters).
    /// Fatal at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The document could not be read or yielded no text
    #[error("failed to read document '{source_name}': {message}")]
    UnreadableDocument { source_name: String, message: String },

    /// A vector's dimensionality does not match the index.
    /// Signals mixed embedding models; never coerced.
    #[error("embedding dimension mismatch: index holds {expected}-dimensional vectors, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The embedding capability failed (transient, recoverable)
    #[error("embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// The generation capability failed (transient, recoverable)
    #[error("generation unavailable: {0}")]
    GenerationUnavailable(String),

    /// Ingestion failed; no partial index is left in place
    #[error("document ingestion failed")]
    IngestFailed(#[source] Box<Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an unreadable document error
    pub fn unreadable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnreadableDocument {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::EmbeddingUnavailable(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::GenerationUnavailable(message.into())
    }

    /// Wrap an ingest-time failure
    pub fn ingest_failed(cause: Error) -> Self {
        Self::IngestFailed(Box::new(cause))
    }
}
