//! Embedding provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Maps a passage of text to a fixed-length numeric vector.
///
/// All vectors produced by one provider share the same dimensionality; the
/// index learns it from the first insert rather than asking up front.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    ///
    /// Fails with `EmbeddingUnavailable` when the backing service errors.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    ///
    /// Default implementation calls `embed` sequentially; implementations
    /// with native batch support should override.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
