//! LexRank centrality
//!
//! Power iteration over the Markov chain derived from row-normalized
//! similarity weights, with a damping factor mixing a uniform random jump
//! against graph-weighted transitions:
//!
//! ```text
//! score[i] = (1-d)/N + d * Σ_j ( sim(i,j) / Σ_k sim(j,k) ) * score[j]
//! ```
//!
//! Updates are synchronous (the whole next vector is computed from the whole
//! previous vector), so results are independent of iteration order. One
//! update is exposed as the pure function [`LexRank::step`]; [`LexRank::run`]
//! loops it to convergence.

use super::RankResult;
use crate::graph::csr::CsrGraph;
use crate::types::SummarizerConfig;

/// LexRank power-iteration ranker
#[derive(Debug, Clone)]
pub struct LexRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

impl Default for LexRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl LexRank {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from a pipeline config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// One synchronous update: previous scores in, next scores out.
    ///
    /// Preserves the probability-mass invariant: if `scores` sums to 1, so
    /// does the result. Mass held by dangling nodes (no surviving edges) is
    /// redistributed uniformly.
    pub fn step(&self, graph: &CsrGraph, scores: &[f64]) -> Vec<f64> {
        let mut next = vec![0.0; graph.num_nodes];
        self.step_into(graph, scores, &mut next);
        next
    }

    /// Run the power iteration to convergence or the iteration cap.
    ///
    /// Hitting the cap is not an error: the result carries the last iterate
    /// with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            self.step_into(graph, &scores, &mut next);

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        // The sum is already ~1; renormalize to absorb float drift.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        RankResult::new(scores, iterations, delta, delta <= self.threshold)
    }

    fn step_into(&self, graph: &CsrGraph, scores: &[f64], next: &mut [f64]) {
        let n = graph.num_nodes;
        let teleport = (1.0 - self.damping) / n as f64;

        let dangling_mass: f64 = graph
            .dangling_nodes()
            .iter()
            .map(|&d| scores[d as usize])
            .sum();
        let dangling_contribution = self.damping * dangling_mass / n as f64;

        next.fill(teleport + dangling_contribution);

        for (node, &node_score) in scores.iter().enumerate() {
            let total_weight = graph.node_total_weight(node as u32);
            if total_weight > 0.0 {
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    next[neighbor as usize] += self.damping * node_score * weight / total_weight;
                }
            }
        }
    }
}
