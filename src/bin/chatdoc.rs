//! One-shot CLI: extract a PDF, ingest it, answer questions

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatdoc::providers::{ollama_providers, DocumentSource, EmbeddingProvider, PdfSource};
use chatdoc::{RagConfig, RagSession};

#[derive(Parser)]
#[command(name = "chatdoc", about = "Ask questions answered from a PDF's content")]
struct Args {
    /// PDF file to ingest
    file: PathBuf,

    /// Questions to ask, in order
    #[arg(required = true)]
    questions: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RagConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RagConfig::default(),
    };

    let (embedder, generator) = ollama_providers(&config.llm)?;
    if !embedder.health_check().await.unwrap_or(false) {
        bail!(
            "cannot reach Ollama at {} — start it with `ollama serve` and pull \
             the {} and {} models",
            config.llm.base_url,
            config.llm.embed_model,
            config.llm.generate_model
        );
    }

    let document = PdfSource::new().extract_text(&args.file)?;
    tracing::info!(source = %document.source, "document extracted");

    let session = RagSession::new(config, embedder, generator)?;
    session.ingest(document).await?;

    for question in &args.questions {
        println!("Q: {question}");
        let answer = session.ask(question).await?;
        println!("A: {answer}\n");
    }

    Ok(())
}
