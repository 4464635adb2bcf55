//! In-memory vector index with cosine similarity search
//!
//! Append-only for the lifetime of one corpus. At single-document scale
//! (hundreds of chunks) a full linear scan meets the ordering and threshold
//! contract without an approximate structure.

use crate::error::{Error, Result};
use crate::types::{EmbeddedChunk, RetrievalResult, ScoredChunk};

/// Append-only store of embedded chunks, searchable by cosine similarity
#[derive(Debug, Default)]
pub struct VectorIndex {
    /// Stored entries, in insertion order
    entries: Vec<EmbeddedChunk>,
    /// Dimensionality established by the first insert
    dimensions: Option<usize>,
}

impl VectorIndex {
    /// Create an empty, dimensionality-unconstrained index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append embedded chunks.
    ///
    /// Every vector must match the index's established dimensionality (set
    /// by the first insert). On `DimensionMismatch` the index is unchanged.
    pub fn add(&mut self, chunks: Vec<EmbeddedChunk>) -> Result<()> {
        let mut dimensions = self.dimensions;

        // Validate the whole batch before touching the entries
        for chunk in &chunks {
            match dimensions {
                None => dimensions = Some(chunk.embedding.len()),
                Some(expected) if chunk.embedding.len() != expected => {
                    return Err(Error::DimensionMismatch {
                        expected,
                        actual: chunk.embedding.len(),
                    });
                }
                Some(_) => {}
            }
        }

        self.dimensions = dimensions;
        self.entries.extend(chunks);
        Ok(())
    }

    /// Search for the most similar entries.
    ///
    /// Returns up to `k` entries with similarity >= `threshold`, descending
    /// by similarity, ties broken by insertion order. An empty result is not
    /// an error.
    pub fn query(&self, vector: &[f32], k: usize, threshold: f32) -> Result<RetrievalResult> {
        if let Some(expected) = self.dimensions {
            if vector.len() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
        }

        let mut hits: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                similarity: similarity(vector, &entry.embedding),
            })
            .filter(|hit| hit.similarity >= threshold)
            .collect();

        // Stable sort keeps insertion order on equal scores
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        hits.truncate(k);

        Ok(hits)
    }

    /// Discard all entries; the index becomes dimensionality-unconstrained
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dimensions = None;
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Established dimensionality, if any vectors are stored
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}

/// Cosine similarity rescaled from [-1, 1] to [0, 1].
///
/// Zero-norm vectors score 0.0 so they never qualify above a positive
/// threshold.
fn similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let cosine = dot / (norm_a * norm_b);
    ((cosine + 1.0) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chunk;

    fn entry(index: u32, embedding: Vec<f32>) -> EmbeddedChunk {
        let chunk = Chunk::new(index, 0, 0, format!("chunk {index}"));
        EmbeddedChunk::new(chunk, embedding)
    }

    #[test]
    fn test_cosine_similarity_range() {
        assert_eq!(similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(similarity(&[1.0, 0.0], &[-1.0, 0.0]), 0.0);
        assert!((similarity(&[1.0, 0.0], &[0.0, 1.0]) - 0.5).abs() < 1e-6);
        assert_eq!(similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_query_respects_k_and_threshold() {
        let mut index = VectorIndex::new();
        index
            .add(vec![
                entry(0, vec![1.0, 0.0]),
                entry(1, vec![0.9, 0.1]),
                entry(2, vec![0.8, 0.2]),
                entry(3, vec![-1.0, 0.0]),
            ])
            .unwrap();

        let hits = index.query(&[1.0, 0.0], 2, 0.5).unwrap();
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!(hit.similarity >= 0.5);
        }
        assert_eq!(hits[0].chunk.index, 0);
    }

    #[test]
    fn test_query_empty_result_is_not_an_error() {
        let mut index = VectorIndex::new();
        index.add(vec![entry(0, vec![1.0, 0.0])]).unwrap();

        let hits = index.query(&[-1.0, 0.0], 3, 0.5).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut index = VectorIndex::new();
        index
            .add(vec![
                entry(0, vec![2.0, 0.0]),
                entry(1, vec![1.0, 0.0]),
                entry(2, vec![3.0, 0.0]),
            ])
            .unwrap();

        // All three are colinear with the query, so all scores tie at 1.0
        let hits = index.query(&[1.0, 0.0], 3, 0.0).unwrap();
        let order: Vec<u32> = hits.iter().map(|h| h.chunk.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_query_is_order_stable() {
        let mut index = VectorIndex::new();
        index
            .add(vec![
                entry(0, vec![0.7, 0.3]),
                entry(1, vec![0.6, 0.4]),
                entry(2, vec![0.9, 0.1]),
            ])
            .unwrap();

        let first = index.query(&[1.0, 0.0], 3, 0.0).unwrap();
        let second = index.query(&[1.0, 0.0], 3, 0.0).unwrap();
        let order = |hits: &RetrievalResult| hits.iter().map(|h| h.chunk.index).collect::<Vec<_>>();
        assert_eq!(order(&first), order(&second));
    }

    #[test]
    fn test_dimension_mismatch_leaves_index_unchanged() {
        let mut index = VectorIndex::new();
        index.add(vec![entry(0, vec![0.0; 768])]).unwrap();

        let result = index.add(vec![entry(1, vec![0.0; 384])]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 768,
                actual: 384
            })
        ));
        assert_eq!(index.len(), 1);
        assert_eq!(index.dimensions(), Some(768));
    }

    #[test]
    fn test_mismatch_within_one_batch_rejects_whole_batch() {
        let mut index = VectorIndex::new();
        let result = index.add(vec![entry(0, vec![0.0; 4]), entry(1, vec![0.0; 8])]);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
        assert!(index.is_empty());
        assert_eq!(index.dimensions(), None);
    }

    #[test]
    fn test_clear_resets_dimensionality() {
        let mut index = VectorIndex::new();
        index.add(vec![entry(0, vec![1.0, 0.0, 0.0])]).unwrap();
        assert_eq!(index.dimensions(), Some(3));

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.dimensions(), None);

        // A different dimensionality is accepted after clear
        index.add(vec![entry(0, vec![1.0, 0.0])]).unwrap();
        assert_eq!(index.dimensions(), Some(2));
    }
}
