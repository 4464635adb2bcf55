//! PDF document source backed by pdf-extract

use std::path::Path;

use crate::error::{Error, Result};
use crate::providers::DocumentSource;
use crate::types::Document;

/// Extracts plain text from PDF files
#[derive(Debug, Default)]
pub struct PdfSource;

impl PdfSource {
    /// Create a new PDF source
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for PdfSource {
    fn extract_text(&self, path: &Path) -> Result<Document> {
        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let raw = pdf_extract::extract_text(path)
            .map_err(|e| Error::unreadable(&source_name, e.to_string()))?;

        let text = cleanup_text(&raw);
        if text.is_empty() {
            return Err(Error::unreadable(
                &source_name,
                "no text content could be extracted",
            ));
        }

        tracing::debug!(source = %source_name, chars = text.chars().count(), "extracted PDF text");
        Ok(Document::new(source_name, text))
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

/// Strip null chars and collapse the whitespace noise PDF extraction leaves
/// behind
fn cleanup_text(raw: &str) -> String {
    raw.replace('\0', "")
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
