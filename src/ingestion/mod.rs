//! Document ingestion: splitting text into embedding-ready chunks

pub mod chunker;

pub use chunker::Chunker;
