//! Provider abstractions for document text extraction, embeddings, and
//! answer generation
//!
//! The core pipeline only ever sees these traits; concrete backends (Ollama,
//! pdf-extract) plug in behind them.

pub mod document;
pub mod embedding;
pub mod llm;
pub mod ollama;
pub mod pdf;

pub use document::DocumentSource;
pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::{ollama_providers, OllamaClient, OllamaEmbedder, OllamaGenerator};
pub use pdf::PdfSource;
