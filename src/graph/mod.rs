pub mod digraph;
pub mod traits;

pub use digraph::{Digraph, Edge};
pub use traits::Graph;
