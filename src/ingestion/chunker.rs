//! Sliding-window text chunking
//!
//! Splits text into overlapping fixed-size passages. Sizes and offsets are
//! measured in characters, not bytes; slicing always lands on char
//! boundaries, so multi-byte text is safe.

use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::types::Chunk;

/// Text chunker with configurable size and overlap
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Chunk size in characters
    chunk_size: usize,
    /// Overlap between consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker; fails if `overlap >= chunk_size`
    pub fn new(config: &ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            chunk_size: config.chunk_size,
            overlap: config.chunk_overlap,
        })
    }

    /// Split text into overlapping chunks.
    ///
    /// Scans from offset 0; each chunk spans `chunk_size` characters (the
    /// final chunk may be shorter), stepping by `chunk_size - overlap`.
    /// Deterministic: identical input and config yield identical output.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        // Byte offset of every character, so windows can be sliced cheaply
        let char_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let total_chars = char_offsets.len();

        let mut chunks = Vec::new();
        let step = self.chunk_size - self.overlap;
        let mut start = 0usize;

        while start < total_chars {
            let end = (start + self.chunk_size).min(total_chars);
            let byte_start = char_offsets[start];
            let byte_end = if end == total_chars {
                text.len()
            } else {
                char_offsets[end]
            };

            chunks.push(Chunk::new(
                chunks.len() as u32,
                start,
                end,
                text[byte_start..byte_end].to_string(),
            ));

            if end == total_chars {
                break;
            }
            start += step;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chunker(chunk_size: usize, overlap: usize) -> Chunker {
        Chunker::new(&ChunkingConfig {
            chunk_size,
            chunk_overlap: overlap,
        })
        .unwrap()
    }

    /// Re-concatenating chunks with the overlap removed reconstructs the
    /// original text
    fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
        let mut text = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                text.push_str(&chunk.content);
            } else {
                text.extend(chunk.content.chars().skip(overlap));
            }
        }
        text
    }

    #[test]
    fn test_rejects_overlap_not_smaller_than_size() {
        let result = Chunker::new(&ChunkingConfig {
            chunk_size: 10,
            chunk_overlap: 10,
        });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_reconstruction_and_count() {
        let text = "abcdefghijklmnopqrstuvwxyz0123456789";
        for (size, overlap) in [(10, 3), (7, 0), (5, 4), (36, 10), (50, 10)] {
            let chunks = chunker(size, overlap).split(text);
            assert_eq!(reconstruct(&chunks, overlap), text, "size={size} overlap={overlap}");

            let len = text.chars().count();
            if len > overlap {
                let expected = (len - overlap).div_ceil(size - overlap);
                assert_eq!(chunks.len(), expected, "size={size} overlap={overlap}");
            }
        }
    }

    #[test]
    fn test_exact_chunk_size_text_yields_one_chunk() {
        let text = "x".repeat(64);
        let chunks = chunker(64, 16).split(&text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, text);
        assert_eq!(chunks[0].char_start, 0);
        assert_eq!(chunks[0].char_end, 64);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunker(64, 16).split("").is_empty());
    }

    #[test]
    fn test_offsets_and_overlap_invariant() {
        let text: String = ('a'..='z').cycle().take(100).collect();
        let chunks = chunker(30, 10).split(&text);

        for pair in chunks.windows(2) {
            // Consecutive chunks overlap by exactly the configured amount
            assert_eq!(pair[0].char_end - pair[1].char_start, 10);
        }
        for chunk in &chunks {
            assert!(chunk.char_len() <= 30);
            assert_eq!(chunk.content.chars().count(), chunk.char_len());
        }
    }

    #[test]
    fn test_multibyte_text_is_split_on_char_boundaries() {
        let text = "日本語のテキストを分割する。".repeat(20);
        let chunks = chunker(32, 8).split(&text);
        assert_eq!(reconstruct(&chunks, 8), text);
        for chunk in &chunks {
            assert!(chunk.content.chars().count() <= 32);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(30);
        let a = chunker(100, 20).split(&text);
        let b = chunker(100, 20).split(&text);
        assert_eq!(a, b);
    }
}
