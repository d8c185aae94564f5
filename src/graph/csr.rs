//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, making iteration over neighbors very fast.
//! This is ideal for the centrality ranker, which repeatedly sweeps all edges
//! during power iteration.

/// A sentence similarity graph in Compressed Sparse Row format
///
/// Node `i` is sentence `i`; edges carry the pairwise similarity weight.
/// The graph is undirected (each edge stored in both rows), has no
/// self-loops, and keeps each row's targets sorted for deterministic
/// iteration.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Assemble a graph from per-node adjacency rows.
    ///
    /// `rows[i]` holds `(target, weight)` pairs for node `i`, already sorted
    /// by target. Symmetry is the builder's responsibility.
    pub fn from_rows(rows: Vec<Vec<(u32, f64)>>) -> Self {
        let num_nodes = rows.len();
        let num_edges: usize = rows.iter().map(|r| r.len()).sum();

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(num_edges);
        let mut weights = Vec::with_capacity(num_edges);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for row in rows {
            total_weight.push(row.iter().map(|(_, w)| w).sum());
            for (target, weight) in row {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Number of edges leaving a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of stored edges (each undirected edge counts twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no edges (e.g. sentences with no vocabulary overlap)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
