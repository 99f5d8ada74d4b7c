//! Directed graph over an ordered adjacency list, plus BFS and DFS.
//!
//! - `directed`: [`DirectedGraph`], the adjacency list of vertices and edges
//! - `adjacency`: [`AdjacencyView`], the per-vertex record lookup
//! - `vertex`: the traversal mark contract BFS and DFS paint through
//! - `trace`: a vertex that records its transitions for later replay
//! - `traversal`: the algorithms

pub mod adjacency;
pub mod directed;
pub mod trace;
pub mod traversal;
pub mod vertex;

use crate::alloc::NodeKey;

/// Stable handle to a vertex of a [`DirectedGraph`].
///
/// Keys stay valid until their vertex is removed, across any other insertion
/// or removal.
pub type VertexKey = NodeKey;

pub use adjacency::{AdjacencyView, Neighbors};
pub use directed::{Adjacencies, DirectedGraph, Edges, Vertices};
pub use trace::{TracedVertex, TraversalEvent, TraversalLog};
pub use traversal::{bfs, dfs};
pub use vertex::{Color, TraversalNode, TraversalVertex, VertexMarks, UNREACHED};
