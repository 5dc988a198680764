use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{CostMatrix, ShortestPathAlgorithm};
use crate::graph::{Digraph, Graph};
use crate::{Error, Result};
use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Johnson's all-pairs algorithm: one Bellman-Ford run to compute
/// reweighting potentials, then Dijkstra from every vertex on the
/// reweighted graph. O(n * m + n^2 log n)-class, handles negative edge
/// weights as long as no negative cycle exists.
///
/// The engine works on internal copies: the caller's graph is borrowed
/// immutably, the virtual source vertex and the reweighted weights never
/// leak out of the run.
#[derive(Debug, Default)]
pub struct Johnson;

impl Johnson {
    /// Creates a new Johnson algorithm instance
    pub fn new() -> Self {
        Johnson
    }

    /// Computes the full n x n cost matrix, or `Error::NegativeCycle`
    /// if the graph contains a negative cycle (no matrix is produced).
    pub fn cost_matrix<W>(&self, graph: &Digraph<W>) -> Result<CostMatrix<W>>
    where
        W: PrimInt + Signed + Debug,
    {
        let n = graph.vertex_count();

        // Augmented copy: virtual vertex n with a zero-weight edge to
        // every real vertex, so every vertex is reachable from it.
        let mut augmented: Digraph<W> = Digraph::new(n + 1);
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                augmented.connect(u, v, weight)?;
            }
        }
        for v in 0..n {
            augmented.connect(n, v, W::zero())?;
        }

        let potentials = BellmanFord::new().run(&augmented, n)?;
        if potentials.negative_cycle {
            return Err(Error::NegativeCycle);
        }

        // The virtual source reaches every real vertex, so each
        // potential is finite.
        let h: Vec<W> = (0..n)
            .map(|v| potentials.distances[v].unwrap_or_else(W::zero))
            .collect();

        // Reweighted copy: w' = w + h(u) - h(v) is non-negative for
        // every edge once no negative cycle exists.
        let mut reweighted: Digraph<W> = Digraph::new(n);
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                reweighted.connect(u, v, weight + h[u] - h[v])?;
            }
        }

        debug_assert!(!reweighted.has_negative_edge());

        let dijkstra = Dijkstra::new();
        let mut rows: Vec<Vec<Option<W>>> = Vec::with_capacity(n);
        for source in 0..n {
            let result = dijkstra.compute_shortest_paths(&reweighted, source)?;

            // Undo the reweighting per entry to recover true distances.
            let row = result
                .distances
                .iter()
                .enumerate()
                .map(|(target, dist)| dist.map(|d| d - h[source] + h[target]))
                .collect();
            rows.push(row);
        }

        Ok(CostMatrix::from_rows(rows))
    }
}
