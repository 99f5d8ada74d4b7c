//! Breadth-first and depth-first traversal over a [`DirectedGraph`].
//!
//! Both algorithms take the graph by shared reference and repaint vertex
//! marks through `&mut GhostToken`, so the graph may hold borrowed vertices.
//! Results go into a caller-supplied [`List`] that borrows the graph's
//! vertices.
//!
//! [`DirectedGraph`]: crate::graph::DirectedGraph
//! [`List`]: crate::collections::List

pub mod bfs;
pub mod dfs;

pub use bfs::bfs;
pub use dfs::dfs;
