use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Single-source distances plus the negative-cycle verdict of the
/// verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellmanFordResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Distance from the source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Source vertex ID
    pub source: usize,

    /// True if some edge still relaxed after all rounds, i.e. a negative
    /// cycle is reachable from the source. Distances are then meaningless.
    pub negative_cycle: bool,
}

/// Bellman-Ford single-source algorithm with negative-cycle detection.
///
/// Handles negative edge weights; runs in O(n * m).
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// Runs the algorithm and reports the negative-cycle flag alongside
    /// the distance vector.
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BellmanFordResult<W>>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());

        // n relaxation rounds over every edge. Edges whose tail is still
        // unreachable relax nothing, so infinity never enters arithmetic.
        for _ in 0..n {
            for u in 0..n {
                let Some(dist_u) = distances[u] else {
                    continue;
                };

                for (v, weight) in graph.outgoing_edges(u) {
                    let candidate = dist_u + weight;
                    if distances[v].map_or(true, |dist_v| candidate < dist_v) {
                        distances[v] = Some(candidate);
                    }
                }
            }
        }

        // Verification pass: any edge that still relaxes lies on or
        // behind a negative cycle.
        let mut negative_cycle = false;
        'verify: for u in 0..n {
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(u) {
                if distances[v].map_or(true, |dist_v| dist_u + weight < dist_v) {
                    negative_cycle = true;
                    break 'verify;
                }
            }
        }

        Ok(BellmanFordResult {
            distances,
            source,
            negative_cycle,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let result = self.run(graph, source)?;

        if result.negative_cycle {
            return Err(Error::NegativeCycle);
        }

        Ok(ShortestPathResult {
            distances: result.distances,
            source: result.source,
        })
    }
}
