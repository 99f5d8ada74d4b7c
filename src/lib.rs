//! # `graphwalk` - Generic Containers and a Traversable Directed Graph
//!
//! A small library of arena-backed containers (list, set, queue) and a
//! directed graph built on them, with breadth-first and depth-first traversal.
//!
//! ## Ownership
//!
//! Every container decides per element whether it *adopts* the element (takes
//! it by value and destroys it with the container) or *borrows* it (holds
//! `&'a E`; the borrow checker makes the element outlive the container).
//! Adopted elements live in the container's [`OwnershipLedger`]. Removing an
//! element hands it back as an [`Element`]: adopted elements are released to
//! the caller, never dropped on removal.
//!
//! ## Equality
//!
//! Containers never compare addresses to decide membership. They use an
//! [`Equivalence`] predicate: [`ValueEq`] by default, any
//! `Fn(&E, &E) -> bool`, or [`ByKey`] to compare a projected field.
//!
//! ## Traversal marks
//!
//! BFS and DFS paint vertices white, gray and black and record hop counts.
//! Those marks live in [`GhostCell`]s branded by a [`GhostToken`], so the
//! algorithms take the graph by shared reference and repaint it through the
//! token. Overriding the mark setters of [`TraversalVertex`] turns them into
//! observation points; [`TracedVertex`] records every transition.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{bfs, DirectedGraph, GhostToken, List, TraversalNode, TraversalVertex};
//!
//! GhostToken::new(|mut token| {
//!     let mut graph = DirectedGraph::new();
//!     for label in ["A", "B", "C"] {
//!         graph.insert_vertex(TraversalNode::new(label)).unwrap();
//!     }
//!     graph.insert_edge(&TraversalNode::new("A"), &TraversalNode::new("B")).unwrap();
//!     graph.insert_edge(&TraversalNode::new("B"), &TraversalNode::new("C")).unwrap();
//!
//!     let mut reached = List::new();
//!     bfs(&graph, &mut token, &TraversalNode::new("A"), &mut reached).unwrap();
//!
//!     let hops: Vec<i64> = reached.iter().map(|v| v.hops(&token)).collect();
//!     assert_eq!(hops, vec![0, 1, 2]);
//! });
//! ```
//!
//! ## Features
//!
//! - `tracing`: logs graph mutations at `debug` and traversal steps at `trace`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Logs at `debug` when the `tracing` feature is enabled.
macro_rules! debug_op {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}

/// Logs at `trace` when the `tracing` feature is enabled.
macro_rules! trace_op {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    }};
}

pub mod alloc;
pub mod cell;
pub mod collections;
pub mod error;
pub mod graph;
mod invariants;
pub mod token;

pub use alloc::{NodeKey, NodePool};
pub use cell::GhostCell;
pub use collections::{
    ByKey, Collection, Element, Equivalence, List, OwnedKey, OwnershipLedger, Queue, Set, ValueEq,
};
pub use error::{status_code, GraphError, GraphResult};
pub use graph::{
    bfs, dfs, AdjacencyView, Color, DirectedGraph, TracedVertex, TraversalEvent, TraversalLog,
    TraversalNode, TraversalVertex, VertexKey, VertexMarks, UNREACHED,
};
pub use token::GhostToken;

const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // A ghost cell is exactly its value.
    assert!(mem::size_of::<GhostCell<'static, i64>>() == mem::size_of::<i64>());
};
