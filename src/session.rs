//! Stateful session coordinating ingest -> index -> ask -> clear
//!
//! One session owns one corpus exclusively. `ingest` and `ask` never
//! interleave: both take the session mutex for their full duration, since
//! ingest replaces the index that ask's retrieval reads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::config::RagConfig;
use crate::error::{Error, Result};
use crate::generation::PromptComposer;
use crate::ingestion::Chunker;
use crate::providers::{EmbeddingProvider, LlmProvider};
use crate::retrieval::{Retriever, VectorIndex};
use crate::types::{Document, EmbeddedChunk, SessionStatus};

/// Advisory returned by `ask` before any document has been ingested
pub const INGEST_FIRST_ADVISORY: &str = "Please ingest a document first.";

/// Advisory returned for an empty question
pub const EMPTY_QUESTION_ADVISORY: &str = "Please enter a question.";

/// Advisory returned for a question below the minimum length
pub const SHORT_QUESTION_ADVISORY: &str = "The question is too short.";

/// Minimum question length in characters
const MIN_QUESTION_CHARS: usize = 3;

/// The ingested corpus and everything derived from it
struct Corpus {
    index: VectorIndex,
    source: String,
    ingested_at: DateTime<Utc>,
}

/// A single-document question-answering session
pub struct RagSession {
    chunker: Chunker,
    retriever: Retriever,
    composer: PromptComposer,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn LlmProvider>,
    /// `None` is the Empty state; `Some` is Ready
    corpus: Mutex<Option<Corpus>>,
}

impl RagSession {
    /// Create a session; fails with `InvalidConfig` on bad parameters
    pub fn new(
        config: RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            chunker: Chunker::new(&config.chunking)?,
            retriever: Retriever::new(Arc::clone(&embedder), &config.retrieval),
            composer: PromptComposer::new(config.prompt),
            embedder,
            generator,
            corpus: Mutex::new(None),
        })
    }

    /// Ingest a document, replacing any previous corpus wholesale.
    ///
    /// On any failure the session reverts to the Empty state: no partial
    /// index is retained, and the error is surfaced as `IngestFailed`.
    pub async fn ingest(&self, document: Document) -> Result<()> {
        let mut corpus = self.corpus.lock().await;

        // The old index is torn down before ingestion starts, so a failure
        // below leaves the session Empty rather than serving stale chunks.
        *corpus = None;

        let chunks = self.chunker.split(&document.text);
        if chunks.is_empty() {
            return Err(Error::ingest_failed(Error::unreadable(
                &document.source,
                "document contains no text",
            )));
        }

        tracing::info!(
            source = %document.source,
            chunks = chunks.len(),
            embedder = self.embedder.name(),
            "ingesting document"
        );

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = self
            .embedder
            .embed_batch(&texts)
            .await
            .map_err(Error::ingest_failed)?;

        if embeddings.len() != chunks.len() {
            return Err(Error::ingest_failed(Error::embedding(format!(
                "embedder returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            ))));
        }

        let embedded: Vec<EmbeddedChunk> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| EmbeddedChunk::new(chunk, embedding))
            .collect();

        let mut index = VectorIndex::new();
        index.add(embedded).map_err(Error::ingest_failed)?;

        tracing::info!(
            entries = index.len(),
            dimensions = ?index.dimensions(),
            "index built"
        );

        *corpus = Some(Corpus {
            index,
            source: document.source,
            ingested_at: Utc::now(),
        });

        Ok(())
    }

    /// Answer a question from the ingested document.
    ///
    /// Before ingestion this returns a fixed advisory, not an error, and
    /// invokes neither the embedder nor the generator. When retrieval comes
    /// back empty the generator still runs, on a prompt that explicitly
    /// signals the missing context.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(EMPTY_QUESTION_ADVISORY.to_string());
        }
        if question.chars().count() < MIN_QUESTION_CHARS {
            return Ok(SHORT_QUESTION_ADVISORY.to_string());
        }

        let corpus = self.corpus.lock().await;
        let Some(corpus) = corpus.as_ref() else {
            return Ok(INGEST_FIRST_ADVISORY.to_string());
        };

        let retrieved = self.retriever.retrieve(&corpus.index, question).await?;
        if retrieved.is_empty() {
            tracing::debug!("no chunk met the similarity threshold");
        }

        let prompt = self.composer.compose(question, &retrieved);
        let answer = self.generator.generate(&prompt).await?;

        tracing::info!(
            retrieved = retrieved.len(),
            model = self.generator.model(),
            "question answered"
        );

        Ok(answer)
    }

    /// Discard the corpus; the session returns to Empty. Idempotent.
    pub async fn clear(&self) {
        let mut corpus = self.corpus.lock().await;
        *corpus = None;
    }

    /// Snapshot the session state
    pub async fn status(&self) -> SessionStatus {
        let corpus = self.corpus.lock().await;
        match corpus.as_ref() {
            None => SessionStatus::empty(),
            Some(corpus) => SessionStatus {
                ready: true,
                source: Some(corpus.source.clone()),
                chunks: corpus.index.len(),
                dimensions: corpus.index.dimensions(),
                ingested_at: Some(corpus.ingested_at),
            },
        }
    }
}
