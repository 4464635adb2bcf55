//! Document source trait

use std::path::Path;

use crate::error::Result;
use crate::types::Document;

/// Extracts plain text from a file into a `Document`.
///
/// Parsing, file IO, and temp-file lifecycle are entirely this collaborator's
/// concern; the core only sees the extracted text.
pub trait DocumentSource: Send + Sync {
    /// Extract text from the file at `path`.
    ///
    /// Fails with `UnreadableDocument` on malformed input or when no text
    /// can be extracted.
    fn extract_text(&self, path: &Path) -> Result<Document>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
