//! Ollama-backed providers for embeddings and generation
//!
//! A single HTTP client is shared by both provider implementations. Retry
//! policy lives here, in the adapter, never in the core pipeline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::config::LlmConfig;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;
use super::llm::LlmProvider;

/// Ollama API client with automatic retry
pub struct OllamaClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: LlmConfig,
    /// Maximum retries
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    prompt: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl OllamaClient {
    /// Create a new Ollama client.
    ///
    /// The request timeout bounds the otherwise unbounded-latency embedding
    /// and generation calls.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            config: config.clone(),
        })
    }

    /// Retry a request with exponential backoff
    async fn retry_request<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        let delay = Duration::from_secs(2u64.pow(attempt));
                        tracing::warn!(
                            "request failed (attempt {}/{}), retrying in {:?}",
                            attempt + 1,
                            self.max_retries + 1,
                            delay
                        );
                        sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::generation("unknown error")))
    }

    /// Check if Ollama is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.config.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Generate an embedding with retry
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.config.base_url);
        let text = text.to_string();
        let model = self.config.embed_model.clone();
        let client = self.client.clone();

        self.retry_request(|| {
            let url = url.clone();
            let text = text.clone();
            let model = model.clone();
            let client = client.clone();

            async move {
                let request = EmbedRequest {
                    model,
                    prompt: text,
                };

                let response = client
                    .post(&url)
                    .json(&request)
                    .send()
                    .await
                    .map_err(|e| Error::embedding(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(Error::embedding(format!(
                        "Ollama returned status {}",
                        response.status()
                    )));
                }

                let body: EmbedResponse = response
                    .json()
                    .await
                    .map_err(|e| Error::embedding(e.to_string()))?;

                if body.embedding.is_empty() {
                    return Err(Error::embedding("Ollama returned an empty embedding"));
                }

                Ok(body.embedding)
            }
        })
        .await
    }

    /// Generate text for a prompt with retry
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        let prompt = prompt.to_string();
        let model = self.config.generate_model.clone();
        let temperature = self.config.temperature;
        let client = self.client.clone();

        self.retry_request(|| {
            let url = url.clone();
            let prompt = prompt.clone();
            let model = model.clone();
            let client = client.clone();

            async move {
                let request = GenerateRequest {
                    model,
                    prompt,
                    stream: false,
                    options: GenerateOptions { temperature },
                };

                let response = client
                    .post(&url)
                    .json(&request)
                    .send()
                    .await
                    .map_err(|e| Error::generation(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(Error::generation(format!(
                        "Ollama returned status {}",
                        response.status()
                    )));
                }

                let body: GenerateResponse = response
                    .json()
                    .await
                    .map_err(|e| Error::generation(e.to_string()))?;

                Ok(body.response)
            }
        })
        .await
    }
}

/// Ollama embedding provider (nomic-embed-text or similar models)
pub struct OllamaEmbedder {
    client: Arc<OllamaClient>,
}

impl OllamaEmbedder {
    /// Create an embedder from a shared client
    pub fn from_client(client: Arc<OllamaClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.client.embed(text).await
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.health_check().await
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama generation provider
pub struct OllamaGenerator {
    client: Arc<OllamaClient>,
    model: String,
}

impl OllamaGenerator {
    /// Create a generator from a shared client
    pub fn from_client(client: Arc<OllamaClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl LlmProvider for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.client.generate(prompt).await
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.health_check().await
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Build both providers over one shared client
pub fn ollama_providers(config: &LlmConfig) -> Result<(Arc<OllamaEmbedder>, Arc<OllamaGenerator>)> {
    let client = Arc::new(OllamaClient::new(config)?);
    let embedder = Arc::new(OllamaEmbedder::from_client(Arc::clone(&client)));
    let generator = Arc::new(OllamaGenerator::from_client(
        client,
        config.generate_model.clone(),
    ));
    Ok((embedder, generator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_reports_unreachable_server_as_unhealthy() {
        let config = LlmConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            ..Default::default()
        };
        let client = OllamaClient::new(&config).unwrap();

        let healthy = tokio_test::block_on(client.health_check()).unwrap();
        assert!(!healthy);
    }
}
