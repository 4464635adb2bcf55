//! Deterministic prompt template for grounded answering

use crate::config::PromptConfig;
use crate::types::RetrievalResult;

/// Merges retrieved passages and the user question into a generation request.
///
/// The template is fixed: instruction text, then the retrieved chunk texts in
/// retrieval order joined by a stable delimiter, then the question. When
/// retrieval came back empty the context section carries the configured
/// no-context text instead, so the model is told explicitly rather than left
/// to answer from its own knowledge.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    config: PromptConfig,
}

impl PromptComposer {
    /// Create a composer with the given template configuration
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    /// Compose the full generation prompt
    pub fn compose(&self, question: &str, retrieved: &RetrievalResult) -> String {
        let context = if retrieved.is_empty() {
            self.config.no_context_text.clone()
        } else {
            self.build_context(retrieved)
        };

        format!(
            "{}\n\nContext:\n{}\n\nQuestion: {}\n\nAnswer:",
            self.config.instructions, context, question
        )
    }

    /// Concatenate retrieved passages in retrieval order.
    ///
    /// No truncation happens here; the generator's own context limit is the
    /// adapter's concern.
    fn build_context(&self, retrieved: &RetrievalResult) -> String {
        retrieved
            .iter()
            .map(|hit| hit.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(self.config.context_delimiter.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Chunk, ScoredChunk};

    fn hit(index: u32, content: &str, similarity: f32) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk::new(index, 0, 0, content.to_string()),
            similarity,
        }
    }

    #[test]
    fn test_compose_keeps_retrieval_order() {
        let composer = PromptComposer::new(PromptConfig::default());
        let retrieved = vec![hit(2, "beta", 0.9), hit(0, "alpha", 0.8)];

        let prompt = composer.compose("what is it?", &retrieved);
        let beta = prompt.find("beta").unwrap();
        let alpha = prompt.find("alpha").unwrap();
        assert!(beta < alpha);
        assert!(prompt.contains("beta\n\n---\n\nalpha"));
        assert!(prompt.contains("Question: what is it?"));
    }

    #[test]
    fn test_empty_retrieval_carries_no_context_marker() {
        let config = PromptConfig::default();
        let marker = config.no_context_text.clone();
        let composer = PromptComposer::new(config);

        let prompt = composer.compose("anything?", &Vec::new());
        assert!(prompt.contains(&marker));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let composer = PromptComposer::new(PromptConfig::default());
        let retrieved = vec![hit(0, "one", 0.7), hit(1, "two", 0.6)];

        let a = composer.compose("q?", &retrieved);
        let b = composer.compose("q?", &retrieved);
        assert_eq!(a, b);
    }
}
