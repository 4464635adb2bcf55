//! chatdoc: single-document retrieval-augmented question answering
//!
//! Ingest one document, split it into overlapping chunks, embed them into an
//! in-memory vector index, and answer questions by retrieving the most
//! similar chunks and prompting a language model with them. Embedding, text
//! extraction, and generation are consumed through provider traits; Ollama
//! and pdf-extract adapters are included.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod session;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use session::{RagSession, INGEST_FIRST_ADVISORY};
pub use types::{Chunk, Document, EmbeddedChunk, RetrievalResult, ScoredChunk, SessionStatus};
