use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// A directed edge: destination vertex and signed weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub to: usize,
    pub weight: W,
}

/// A directed graph over dense vertex ids `0..n`, stored as per-vertex
/// adjacency lists kept in ascending destination order.
///
/// Parallel edges between the same ordered pair are allowed and all of
/// them persist; among edges with equal destination the most recently
/// inserted one sits last in the list. Callers must not rely on
/// duplicates being merged.
#[derive(Debug, Clone)]
pub struct Digraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of edges, maintained incrementally by `connect`
    edge_count: usize,

    /// Incoming-edge count per vertex
    in_degree: Vec<usize>,

    /// Outgoing edges per vertex, ascending by destination
    outgoing: Vec<Vec<Edge<W>>>,
}

impl<W> Digraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a graph with `n` vertices and no edges
    pub fn new(n: usize) -> Self {
        Digraph {
            vertex_count: n,
            edge_count: 0,
            in_degree: vec![0; n],
            outgoing: vec![Vec::new(); n],
        }
    }

    /// Inserts the directed edge `u -> v` with the given weight.
    ///
    /// Both endpoints must be valid vertex ids; otherwise the graph is
    /// left untouched and `Error::InvalidVertex` names the offending id.
    /// Returns a reference to the edge as stored.
    pub fn connect(&mut self, u: usize, v: usize, weight: W) -> Result<&Edge<W>> {
        if u >= self.vertex_count {
            return Err(Error::InvalidVertex(u));
        }
        if v >= self.vertex_count {
            return Err(Error::InvalidVertex(v));
        }

        self.in_degree[v] += 1;
        self.edge_count += 1;

        // Keep the list sorted by destination; equal destinations keep
        // insertion order, so the newest duplicate lands last.
        let list = &mut self.outgoing[u];
        let position = list.partition_point(|edge| edge.to <= v);
        list.insert(position, Edge { to: v, weight });

        Ok(&list[position])
    }

    /// Number of edges entering `vertex`
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree[vertex]
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.outgoing[vertex].len()
    }

    /// The outgoing edges of `vertex` in ascending destination order
    pub fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        &self.outgoing[vertex]
    }
}

impl<W> Graph<W> for Digraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex < self.vertex_count {
            Box::new(self.outgoing[vertex].iter().map(|edge| (edge.to, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}
