//! Query-time retrieval: embed the question, search the index

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::providers::EmbeddingProvider;
use crate::types::RetrievalResult;

use super::index::VectorIndex;

/// Wraps the embedding step and the top-k/threshold policy around an index
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    top_k: usize,
    score_threshold: f32,
}

impl Retriever {
    /// Create a retriever with the configured policy
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, config: &RetrievalConfig) -> Self {
        Self {
            embedder,
            top_k: config.top_k,
            score_threshold: config.score_threshold,
        }
    }

    /// Retrieve the chunks most relevant to a question.
    ///
    /// An embedder failure surfaces as `EmbeddingUnavailable`; it is
    /// recoverable and leaves the index untouched.
    pub async fn retrieve(&self, index: &VectorIndex, question: &str) -> Result<RetrievalResult> {
        let query_embedding = self.embedder.embed(question).await?;

        let hits = index.query(&query_embedding, self.top_k, self.score_threshold)?;
        tracing::debug!(
            hits = hits.len(),
            top_k = self.top_k,
            threshold = self.score_threshold,
            "retrieval complete"
        );

        Ok(hits)
    }
}
