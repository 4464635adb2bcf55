//! Core data types

pub mod document;
pub mod response;

pub use document::{Chunk, Document, EmbeddedChunk};
pub use response::{RetrievalResult, ScoredChunk, SessionStatus};
