//! Similarity graph builder
//!
//! Computes pairwise cosine similarity between sentence term vectors and
//! assembles the weighted undirected graph the ranker runs on. Edges below
//! the similarity floor are omitted, so the graph is sparse wherever the
//! vocabulary is.

use crate::graph::csr::CsrGraph;
use crate::nlp::term_vector::TermVector;
use rayon::prelude::*;

/// Sentence count above which pairwise rows are computed in parallel.
/// Below this, thread spawn overhead outweighs the O(n²) row work.
const PARALLEL_THRESHOLD: usize = 256;

/// Builds a [`CsrGraph`] from sentence term vectors
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    /// Similarities below this value are dropped
    similarity_floor: f64,
    /// Sentence count at which row computation fans out to rayon
    parallel_threshold: usize,
}

impl Default for SimilarityGraphBuilder {
    fn default() -> Self {
        Self {
            similarity_floor: 1e-3,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SimilarityGraphBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity floor
    pub fn with_similarity_floor(mut self, floor: f64) -> Self {
        self.similarity_floor = floor;
        self
    }

    /// Set the parallelization threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the similarity graph over the given sentence vectors.
    ///
    /// Node `i` corresponds to `vectors[i]`. Rows are independent, so the
    /// parallel and sequential paths produce identical graphs.
    pub fn build(&self, vectors: &[TermVector]) -> CsrGraph {
        let rows: Vec<Vec<(u32, f64)>> = if vectors.len() >= self.parallel_threshold {
            (0..vectors.len())
                .into_par_iter()
                .map(|i| self.row(i, vectors))
                .collect()
        } else {
            (0..vectors.len()).map(|i| self.row(i, vectors)).collect()
        };

        CsrGraph::from_rows(rows)
    }

    /// Compute the adjacency row for node `i`: every other node whose
    /// similarity clears the floor, in ascending target order. Skipping
    /// `j == i` keeps the graph free of self-loops.
    fn row(&self, i: usize, vectors: &[TermVector]) -> Vec<(u32, f64)> {
        let mut row = Vec::new();
        for (j, other) in vectors.iter().enumerate() {
            if j == i {
                continue;
            }
            let similarity = vectors[i].cosine_similarity(other);
            if similarity >= self.similarity_floor {
                row.push((j as u32, similarity));
            }
        }
        row
    }
}
