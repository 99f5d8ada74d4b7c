//! Adjacency records and the read-only view handed out for them.

use core::fmt;
use core::iter::{Copied, FusedIterator};

use crate::alloc::NodeKey;
use crate::collections::list::Iter;
use crate::collections::ownership::Slot;
use crate::collections::{Set, ValueEq};
use crate::graph::directed::DirectedGraph;
use crate::graph::VertexKey;

/// One vertex and the keys of its out-neighbors.
///
/// The record never owns its vertex: an adopted vertex lives in the graph's
/// ownership ledger and the slot only names it.
pub(crate) struct AdjacencyRecord<'a, V> {
    pub(crate) vertex: Slot<'a, V>,
    pub(crate) neighbors: Set<'static, VertexKey>,
}

impl<'a, V> AdjacencyRecord<'a, V> {
    pub(crate) fn new(vertex: Slot<'a, V>) -> Self {
        Self {
            vertex,
            neighbors: Set::new(),
        }
    }
}

/// A borrowed view of one adjacency record.
///
/// Returned by [`DirectedGraph::adjacency`] (the adjacent-list lookup) and
/// friends. Neighbor order is the order edges were inserted.
pub struct AdjacencyView<'g, 'a, V, Q> {
    graph: &'g DirectedGraph<'a, V, Q>,
    key: VertexKey,
    record: &'g AdjacencyRecord<'a, V>,
}

impl<'g, 'a, V, Q> AdjacencyView<'g, 'a, V, Q> {
    pub(crate) fn new(
        graph: &'g DirectedGraph<'a, V, Q>,
        key: VertexKey,
        record: &'g AdjacencyRecord<'a, V>,
    ) -> Self {
        Self { graph, key, record }
    }

    /// Key of the viewed vertex.
    #[inline]
    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// The viewed vertex.
    #[inline]
    pub fn vertex(&self) -> &'g V {
        self.graph.resolve(&self.record.vertex)
    }

    /// Number of out-edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.record.neighbors.len()
    }

    /// Returns `true` if an edge to `target` leaves this vertex.
    #[inline]
    pub fn has_neighbor(&self, target: VertexKey) -> bool {
        self.record.neighbors.is_member(&target)
    }

    /// Keys of the out-neighbors.
    pub fn neighbor_keys(&self) -> Copied<Iter<'g, 'static, VertexKey, ValueEq>> {
        self.record.neighbors.iter().copied()
    }

    /// The out-neighbor vertices.
    pub fn neighbors(&self) -> Neighbors<'g, 'a, V, Q> {
        Neighbors {
            graph: self.graph,
            keys: self.neighbor_keys(),
        }
    }

    /// Cursor to the first out-neighbor entry.
    #[inline]
    pub fn first_neighbor(&self) -> Option<NodeKey> {
        self.record.neighbors.head()
    }

    /// Cursor to the entry after `cursor`.
    #[inline]
    pub fn neighbor_after(&self, cursor: NodeKey) -> Option<NodeKey> {
        self.record.neighbors.next(cursor)
    }

    /// The neighbor key stored at `cursor`.
    #[inline]
    pub fn neighbor_at(&self, cursor: NodeKey) -> Option<VertexKey> {
        self.record.neighbors.get(cursor).copied()
    }
}

impl<'g, 'a, V, Q> Clone for AdjacencyView<'g, 'a, V, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, 'a, V, Q> Copy for AdjacencyView<'g, 'a, V, Q> {}

impl<'g, 'a, V: fmt::Debug, Q> fmt::Debug for AdjacencyView<'g, 'a, V, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyView")
            .field("vertex", self.vertex())
            .field("neighbors", &self.neighbors().collect::<Vec<_>>())
            .finish()
    }
}

/// Out-neighbor vertices of one adjacency record.
pub struct Neighbors<'g, 'a, V, Q> {
    graph: &'g DirectedGraph<'a, V, Q>,
    keys: Copied<Iter<'g, 'static, VertexKey, ValueEq>>,
}

impl<'g, 'a, V, Q> Iterator for Neighbors<'g, 'a, V, Q> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.keys.by_ref().find_map(|key| graph.vertex(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.keys.size_hint().1)
    }
}

impl<'g, 'a, V, Q> FusedIterator for Neighbors<'g, 'a, V, Q> {}
