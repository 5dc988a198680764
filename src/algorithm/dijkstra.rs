use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Classic Dijkstra's algorithm over an indexed min-heap.
///
/// Precondition: the graph contains no negative edge weights. The engine
/// does not re-validate this; callers check with
/// [`Graph::has_negative_edge`] where the input is untrusted.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());

        // Every vertex starts in the heap, keyed by the shared distance
        // slice; the heap orders the keys, it never owns them.
        let mut heap = IndexedMinHeap::new(n);
        for vertex in 0..n {
            heap.insert(vertex, &distances);
        }

        while !heap.is_empty() {
            let u = heap.extract_min(&distances);

            // Once the minimum is unreachable, so is everything left.
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                if distances[v].map_or(true, |dist_v| candidate < dist_v) {
                    distances[v] = Some(candidate);
                    if heap.contains(v) {
                        heap.decrease_key(v, &distances);
                    }
                }
            }
        }

        Ok(ShortestPathResult { distances, source })
    }
}
