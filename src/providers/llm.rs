//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Invokes a language model with a composed prompt and returns its text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// Fails with `GenerationUnavailable` when the backing service errors.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
