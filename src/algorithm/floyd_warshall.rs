use crate::algorithm::CostMatrix;
use crate::graph::Graph;
use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Floyd-Warshall dense all-pairs algorithm. O(n^3), handles negative
/// edge weights.
///
/// The engine never aborts on negative cycles: it leaves a negative
/// entry on the matrix diagonal for every vertex on one, and callers
/// must check [`CostMatrix::has_negative_diagonal`] before trusting
/// the result.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full n x n cost matrix
    pub fn cost_matrix<W, G>(&self, graph: &G) -> CostMatrix<W>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut costs: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];

        for i in 0..n {
            costs[i][i] = Some(W::zero());
        }

        // Direct edges; parallel edges collapse to the minimum weight so
        // the initialization agrees with what relaxation-based engines
        // compute on the same graph.
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if costs[u][v].map_or(true, |cost| weight < cost) {
                    costs[u][v] = Some(weight);
                }
            }
        }

        // In-place relaxation; k must be the outermost loop.
        for k in 0..n {
            for j in 0..n {
                for i in 0..n {
                    let (Some(ik), Some(kj)) = (costs[i][k], costs[k][j]) else {
                        continue;
                    };

                    let candidate = ik + kj;
                    if costs[i][j].map_or(true, |cost| candidate < cost) {
                        costs[i][j] = Some(candidate);
                    }
                }
            }
        }

        CostMatrix::from_rows(costs)
    }
}
