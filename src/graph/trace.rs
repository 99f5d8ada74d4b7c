//! Recording traversal observer.
//!
//! [`TracedVertex`] overrides the mark setters of [`TraversalVertex`] and
//! appends a [`TraversalEvent`] for every transition to a shared
//! [`TraversalLog`]. The log lives in a `GhostCell` of the same brand as the
//! marks, so recording needs nothing beyond the token the algorithm already
//! holds. An animation layer replays the log, or reads it as JSON.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::vertex::{Color, TraversalVertex, VertexMarks};
use crate::{GhostCell, GhostToken};

/// One observed transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TraversalEvent<L> {
    /// The vertex was painted.
    Color {
        /// Label of the painted vertex.
        vertex: L,
        /// The new color.
        color: Color,
    },
    /// The vertex's hop count was written.
    Hops {
        /// Label of the vertex.
        vertex: L,
        /// The new hop count.
        hops: i64,
    },
}

impl<L> TraversalEvent<L> {
    /// Label of the vertex the event is about.
    pub fn vertex(&self) -> &L {
        match self {
            TraversalEvent::Color { vertex, .. } | TraversalEvent::Hops { vertex, .. } => vertex,
        }
    }
}

/// Transitions in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalLog<L> {
    events: Vec<TraversalEvent<L>>,
}

impl<L> TraversalLog<L> {
    /// An empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: TraversalEvent<L>) {
        self.events.push(event);
    }

    /// Every recorded event.
    pub fn events(&self) -> &[TraversalEvent<L>] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forgets every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<L: PartialEq> TraversalLog<L> {
    /// The colors `vertex` was painted, in order.
    pub fn colors_of<'l>(&'l self, vertex: &'l L) -> impl Iterator<Item = Color> + 'l {
        self.events.iter().filter_map(move |event| match event {
            TraversalEvent::Color { vertex: v, color } if v == vertex => Some(*color),
            _ => None,
        })
    }
}

impl<L: Serialize> TraversalLog<L> {
    /// Renders the events as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }
}

impl<L> Default for TraversalLog<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// A traversal vertex that records its transitions into a shared log.
///
/// The payload doubles as the event label, and equality compares payloads.
pub struct TracedVertex<'brand, 'log, T> {
    data: T,
    marks: VertexMarks<'brand>,
    log: &'log GhostCell<'brand, TraversalLog<T>>,
}

impl<'brand, 'log, T> TracedVertex<'brand, 'log, T> {
    /// Wraps `data`; its transitions go to `log`.
    pub const fn new(data: T, log: &'log GhostCell<'brand, TraversalLog<T>>) -> Self {
        Self {
            data,
            marks: VertexMarks::new(),
            log,
        }
    }

    /// The payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<'brand, 'log, T: Clone> TraversalVertex<'brand> for TracedVertex<'brand, 'log, T> {
    #[inline]
    fn marks(&self) -> &VertexMarks<'brand> {
        &self.marks
    }

    fn set_color(&self, token: &mut GhostToken<'brand>, color: Color) {
        self.marks.set_color(token, color);
        self.log.borrow_mut(token).push(TraversalEvent::Color {
            vertex: self.data.clone(),
            color,
        });
    }

    fn set_hops(&self, token: &mut GhostToken<'brand>, hops: i64) {
        self.marks.set_hops(token, hops);
        self.log.borrow_mut(token).push(TraversalEvent::Hops {
            vertex: self.data.clone(),
            hops,
        });
    }
}

impl<'brand, 'log, T: PartialEq> PartialEq for TracedVertex<'brand, 'log, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'brand, 'log, T: fmt::Debug> fmt::Debug for TracedVertex<'brand, 'log, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TracedVertex").field(&self.data).finish()
    }
}
