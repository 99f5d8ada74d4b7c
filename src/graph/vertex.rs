//! The traversal vertex contract: color and hop marks behind a ghost token.
//!
//! A vertex type used with [`bfs`](crate::graph::bfs) or
//! [`dfs`](crate::graph::dfs) embeds a [`VertexMarks`] and implements
//! [`TraversalVertex`]. The marks live in [`GhostCell`]s, so the algorithms
//! repaint vertices through a shared borrow of the graph while holding the
//! `&mut GhostToken`.
//!
//! The setters are observation points. Overriding `set_color`/`set_hops`
//! lets a host watch a traversal as it happens; see
//! [`TracedVertex`](crate::graph::TracedVertex).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{GhostCell, GhostToken};

/// Hop count of a vertex the last BFS did not reach.
pub const UNREACHED: i64 = -1;

/// Traversal coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered, not finished.
    Gray,
    /// Finished.
    Black,
}

/// Per-vertex traversal state.
pub struct VertexMarks<'brand> {
    color: GhostCell<'brand, Color>,
    hops: GhostCell<'brand, i64>,
}

impl<'brand> VertexMarks<'brand> {
    /// White and unreached.
    pub const fn new() -> Self {
        Self {
            color: GhostCell::new(Color::White),
            hops: GhostCell::new(UNREACHED),
        }
    }

    /// Current color.
    #[inline]
    pub fn color(&self, token: &GhostToken<'brand>) -> Color {
        self.color.get(token)
    }

    /// Overwrites the color.
    #[inline]
    pub fn set_color(&self, token: &mut GhostToken<'brand>, color: Color) {
        self.color.set(token, color);
    }

    /// Current hop count.
    #[inline]
    pub fn hops(&self, token: &GhostToken<'brand>) -> i64 {
        self.hops.get(token)
    }

    /// Overwrites the hop count.
    #[inline]
    pub fn set_hops(&self, token: &mut GhostToken<'brand>, hops: i64) {
        self.hops.set(token, hops);
    }
}

impl<'brand> Default for VertexMarks<'brand> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'brand> fmt::Debug for VertexMarks<'brand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexMarks").finish_non_exhaustive()
    }
}

/// A vertex that BFS and DFS can paint.
///
/// Only [`marks`](TraversalVertex::marks) is required. The provided accessors
/// read and write those marks; override the setters to observe transitions.
pub trait TraversalVertex<'brand> {
    /// The vertex's mark storage.
    fn marks(&self) -> &VertexMarks<'brand>;

    /// Current color.
    fn color(&self, token: &GhostToken<'brand>) -> Color {
        self.marks().color(token)
    }

    /// Paints the vertex.
    fn set_color(&self, token: &mut GhostToken<'brand>, color: Color) {
        self.marks().set_color(token, color);
    }

    /// BFS distance from the last source, or [`UNREACHED`].
    fn hops(&self, token: &GhostToken<'brand>) -> i64 {
        self.marks().hops(token)
    }

    /// Records the BFS distance.
    fn set_hops(&self, token: &mut GhostToken<'brand>, hops: i64) {
        self.marks().set_hops(token, hops);
    }
}

/// A payload plus traversal marks. Equality compares payloads only.
pub struct TraversalNode<'brand, T> {
    data: T,
    marks: VertexMarks<'brand>,
}

impl<'brand, T> TraversalNode<'brand, T> {
    /// Wraps `data` with fresh (white, unreached) marks.
    pub const fn new(data: T) -> Self {
        Self {
            data,
            marks: VertexMarks::new(),
        }
    }

    /// The payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Unwraps the payload, discarding the marks.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<'brand, T> TraversalVertex<'brand> for TraversalNode<'brand, T> {
    #[inline]
    fn marks(&self) -> &VertexMarks<'brand> {
        &self.marks
    }
}

impl<'brand, T: PartialEq> PartialEq for TraversalNode<'brand, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'brand, T: Eq> Eq for TraversalNode<'brand, T> {}

impl<'brand, T: fmt::Debug> fmt::Debug for TraversalNode<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TraversalNode").field(&self.data).finish()
    }
}
