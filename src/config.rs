//! Configuration for the RAG engine

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main RAG engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// Ollama/LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Prompt template configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter constraints
    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        self.retrieval.validate()?;
        Ok(())
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Chunk size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    1024
}

fn default_chunk_overlap() -> usize {
    100
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            chunk_overlap: 100,
        }
    }
}

impl ChunkingConfig {
    /// Check the `chunk_size > overlap >= 0` constraint
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::invalid_config("chunk_size must be greater than zero"));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::invalid_config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Minimum similarity score (0.0-1.0) for a chunk to qualify
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,
}

fn default_top_k() -> usize {
    3
}

fn default_score_threshold() -> f32 {
    0.5
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            score_threshold: 0.5,
        }
    }
}

impl RetrievalConfig {
    /// Check retrieval parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::invalid_config("top_k must be greater than zero"));
        }
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(Error::invalid_config(format!(
                "score_threshold ({}) must be within 0.0..=1.0",
                self.score_threshold
            )));
        }
        Ok(())
    }
}

/// LLM (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            generate_model: "llama2:latest".to_string(),
            temperature: 0.3,
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

/// Prompt template configuration
///
/// The template text is a product choice, so it lives here as configuration
/// rather than hard-coded in the composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Instruction text placed before the retrieved context
    #[serde(default = "default_instructions")]
    pub instructions: String,
    /// Delimiter between retrieved passages
    #[serde(default = "default_context_delimiter")]
    pub context_delimiter: String,
    /// Text substituted for the context section when retrieval is empty
    #[serde(default = "default_no_context_text")]
    pub no_context_text: String,
}

fn default_instructions() -> String {
    "You are an assistant for question-answering tasks. \
     Use the following pieces of retrieved context to answer the question. \
     If you don't know the answer, just say that you don't know. \
     Make a long, comprehensive answer."
        .to_string()
}

fn default_context_delimiter() -> String {
    "\n\n---\n\n".to_string()
}

fn default_no_context_text() -> String {
    "No relevant context was found in the ingested document.".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
            context_delimiter: default_context_delimiter(),
            no_context_text: default_no_context_text(),
        }
    }
}
