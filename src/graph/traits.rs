use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph with integer weights
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as
    /// (destination, weight) pairs
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Scans every edge and returns true on the first negative weight. O(m).
    fn has_negative_edge(&self) -> bool {
        for u in 0..self.vertex_count() {
            for (_, weight) in self.outgoing_edges(u) {
                if weight < W::zero() {
                    return true;
                }
            }
        }
        false
    }
}
