use crate::graph::Graph;
use crate::Result;
use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Distance from the source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Source vertex ID
    pub source: usize,
}

/// An n x n matrix of shortest-path costs; row i holds the distances
/// from vertex i, with `None` for unreachable pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix<W>
where
    W: PrimInt + Signed + Debug,
{
    costs: Vec<Vec<Option<W>>>,
}

impl<W> CostMatrix<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Builds a matrix from per-source distance rows
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        CostMatrix { costs: rows }
    }

    /// The number of vertices the matrix covers
    pub fn n(&self) -> usize {
        self.costs.len()
    }

    /// The cost from `i` to `j`, `None` if `j` is unreachable from `i`
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        self.costs[i][j]
    }

    /// Row `i`: distances from vertex `i` to every vertex
    pub fn row(&self, i: usize) -> &[Option<W>] {
        &self.costs[i]
    }

    /// True if any diagonal entry is negative, i.e. some vertex lies on
    /// a negative cycle. Meaningful on Floyd-Warshall output, whose
    /// engine leaves the evidence on the diagonal instead of aborting.
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.n()).any(|i| matches!(self.costs[i][i], Some(cost) if cost < W::zero()))
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices.
    ///
    /// A negative cycle reachable from the source surfaces as
    /// `Error::NegativeCycle`; no partial distances are returned.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;
}
