//! `DirectedGraph` - an ordered adjacency list of vertices and out-neighbor sets.
//!
//! Vertices are kept in insertion order in a [`List`] of adjacency records.
//! Each record's out-neighbor set holds [`VertexKey`]s of other records, so an
//! edge is one key in one set and removing a vertex never leaves a dangling
//! element reference behind.
//!
//! Vertices are unique under the graph's [`Equivalence`]. Like the containers,
//! the graph either adopts a vertex (`insert_vertex`) or borrows it
//! (`insert_vertex_ref`).

use core::fmt;
use core::iter::{Copied, FusedIterator};

use crate::collections::list::{Iter, Nodes};
use crate::collections::ownership::Slot;
use crate::collections::{Collection, Element, Equivalence, List, OwnershipLedger, ValueEq};
use crate::error::{GraphError, GraphResult};
use crate::graph::adjacency::{AdjacencyRecord, AdjacencyView};
use crate::graph::VertexKey;
use crate::invariants::invariant;

/// A directed graph over adopted or borrowed vertices.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_vertex` | \(O(V)\) | Duplicate scan under the predicate |
/// | `insert_edge` | \(O(V + d)\) | Two vertex lookups, then a neighbor-set scan |
/// | `*_by_key` edge operations | \(O(d)\) | No vertex lookup |
/// | `remove_vertex` | \(O(V + E)\) | Incoming-edge check walks every neighbor set |
/// | `is_adjacent` | \(O(V + d)\) | |
pub struct DirectedGraph<'a, V, Q = ValueEq> {
    records: List<'a, AdjacencyRecord<'a, V>>,
    edge_count: usize,
    // Declared last: records go before the ledger destroys adopted vertices.
    core: Collection<'a, V, Q>,
}

impl<'a, V> DirectedGraph<'a, V, ValueEq> {
    /// Creates an empty graph using value equality.
    pub fn new() -> Self {
        Self::with_equivalence(ValueEq)
    }
}

impl<'a, V, Q> DirectedGraph<'a, V, Q> {
    /// Creates an empty graph with a custom vertex equality predicate.
    pub fn with_equivalence(equivalence: Q) -> Self {
        Self {
            records: List::new(),
            edge_count: 0,
            core: Collection::new(equivalence),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.core.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// The vertex equality predicate.
    #[inline]
    pub fn equivalence(&self) -> &Q {
        self.core.equivalence()
    }

    /// Read-only view of the adopted vertices.
    #[inline]
    pub fn ownership(&self) -> &OwnershipLedger<V> {
        self.core.ownership()
    }

    /// Returns `true` if the graph adopted `vertex` (compared by address).
    #[inline]
    pub fn has_ownership(&self, vertex: &V) -> bool {
        self.core.has_ownership(vertex)
    }

    /// The first adjacency record in insertion order.
    pub fn adjacency_head(&self) -> Option<AdjacencyView<'_, 'a, V, Q>> {
        self.adjacency_by_key(self.records.head()?)
    }

    /// The adjacency record of the vertex at `key`.
    pub fn adjacency_by_key(&self, key: VertexKey) -> Option<AdjacencyView<'_, 'a, V, Q>> {
        let record = self.records.get(key)?;
        Some(AdjacencyView::new(self, key, record))
    }

    /// The vertex at `key`.
    pub fn vertex(&self, key: VertexKey) -> Option<&V> {
        let record = self.records.get(key)?;
        Some(self.core.resolve(&record.vertex))
    }

    /// Returns `true` if `key` names a vertex of this graph.
    #[inline]
    pub fn contains_key(&self, key: VertexKey) -> bool {
        self.records.contains_node(key)
    }

    /// Every adjacency record, in vertex insertion order.
    pub fn adjacencies(&self) -> Adjacencies<'_, 'a, V, Q> {
        Adjacencies {
            graph: self,
            records: self.records.nodes(),
        }
    }

    /// Every vertex, in insertion order.
    pub fn vertices(&self) -> Vertices<'_, 'a, V, Q> {
        Vertices {
            adjacencies: self.adjacencies(),
        }
    }

    /// Every edge as `(from, to)`, grouped by source in vertex order.
    pub fn edges(&self) -> Edges<'_, 'a, V, Q> {
        Edges {
            adjacencies: self.adjacencies(),
            current: None,
        }
    }

    /// Adds the edge `from -> to` between two existing vertices.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either key is not a vertex of this
    /// graph, [`GraphError::DuplicateEdge`] if the edge exists.
    pub fn insert_edge_by_key(&mut self, from: VertexKey, to: VertexKey) -> GraphResult<()> {
        if !self.records.contains_node(to) {
            return Err(GraphError::VertexNotFound);
        }
        let record = self.records.get_mut(from).ok_or(GraphError::VertexNotFound)?;
        if !record.neighbors.insert(to) {
            return Err(GraphError::DuplicateEdge);
        }
        self.edge_count += 1;
        debug_op!("edge inserted, {} edges", self.edge_count);
        Ok(())
    }

    /// Removes the edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `from` is not a vertex,
    /// [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn remove_edge_by_key(&mut self, from: VertexKey, to: VertexKey) -> GraphResult<()> {
        let record = self.records.get_mut(from).ok_or(GraphError::VertexNotFound)?;
        if record.neighbors.remove(&to).is_none() {
            return Err(GraphError::EdgeNotFound);
        }
        self.edge_count -= 1;
        debug_op!("edge removed, {} edges", self.edge_count);
        Ok(())
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn is_adjacent_by_key(&self, from: VertexKey, to: VertexKey) -> bool {
        self.records
            .get(from)
            .is_some_and(|record| record.neighbors.is_member(&to))
    }

    /// Number of edges leaving the vertex at `key`.
    pub fn out_degree_by_key(&self, key: VertexKey) -> Option<usize> {
        self.records.get(key).map(|record| record.neighbors.len())
    }

    /// Number of edges landing on the vertex at `key`.
    pub fn in_degree_by_key(&self, key: VertexKey) -> Option<usize> {
        if !self.records.contains_node(key) {
            return None;
        }
        Some(
            self.records
                .iter()
                .filter(|record| record.neighbors.is_member(&key))
                .count(),
        )
    }

    /// Removes the vertex at `key`, which must have no incident edges.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for an unknown key,
    /// [`GraphError::IncidentEdges`] if any edge enters or leaves the vertex.
    pub fn remove_vertex_by_key(&mut self, key: VertexKey) -> GraphResult<Element<'a, V>> {
        let incoming = self.in_degree_by_key(key).ok_or(GraphError::VertexNotFound)?;
        let outgoing = self.out_degree_by_key(key).unwrap_or(0);
        if incoming > 0 || outgoing > 0 {
            return Err(GraphError::IncidentEdges { incoming, outgoing });
        }
        self.unlink_vertex(key)
    }

    /// Removes the vertex at `key` together with every incident edge.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for an unknown key.
    pub fn remove_vertex_with_edges_by_key(&mut self, key: VertexKey) -> GraphResult<Element<'a, V>> {
        if !self.records.contains_node(key) {
            return Err(GraphError::VertexNotFound);
        }
        let sources: Vec<VertexKey> = self.records.nodes().map(|(source, _)| source).collect();
        for source in sources {
            if let Some(record) = self.records.get_mut(source) {
                if source == key {
                    self.edge_count -= record.neighbors.len();
                    record.neighbors.clear();
                } else if record.neighbors.remove(&key).is_some() {
                    self.edge_count -= 1;
                }
            }
        }
        self.unlink_vertex(key)
    }

    /// Removes every vertex and edge. Adopted vertices are dropped.
    pub fn clear(&mut self) {
        self.records.clear();
        self.core.reset();
        self.edge_count = 0;
        debug_op!("graph cleared");
    }

    pub(crate) fn resolve<'s>(&'s self, slot: &Slot<'a, V>) -> &'s V {
        self.core.resolve(slot)
    }

    fn attach(&mut self, slot: Slot<'a, V>) -> VertexKey {
        let key = self.records.push_back(AdjacencyRecord::new(slot));
        self.core.grow();
        debug_op!("vertex inserted, {} vertices", self.vertex_count());
        key
    }

    fn unlink_vertex(&mut self, key: VertexKey) -> GraphResult<Element<'a, V>> {
        let record = self
            .records
            .remove_node(key)
            .and_then(Element::into_owned)
            .ok_or(GraphError::VertexNotFound)?;
        self.core.shrink();
        debug_op!("vertex removed, {} vertices", self.vertex_count());
        Ok(self.core.release(record.vertex))
    }
}

impl<'a, V, Q: Equivalence<V>> DirectedGraph<'a, V, Q> {
    /// Key of the vertex equivalent to `vertex`.
    pub fn find_vertex(&self, vertex: &V) -> Option<VertexKey> {
        let equivalence = self.core.equivalence();
        self.records
            .nodes()
            .find(|(_, record)| equivalence.equivalent(vertex, self.core.resolve(&record.vertex)))
            .map(|(key, _)| key)
    }

    /// Returns `true` if some vertex is equivalent to `vertex`.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.find_vertex(vertex).is_some()
    }

    /// Adopts `vertex` as a new vertex with no edges.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if an equivalent vertex exists; the
    /// rejected `vertex` is dropped.
    pub fn insert_vertex(&mut self, vertex: V) -> GraphResult<VertexKey> {
        if self.contains_vertex(&vertex) {
            return Err(GraphError::DuplicateVertex);
        }
        let slot = self.core.adopt(vertex);
        Ok(self.attach(slot))
    }

    /// Borrows `vertex` as a new vertex with no edges.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if an equivalent vertex exists.
    pub fn insert_vertex_ref(&mut self, vertex: &'a V) -> GraphResult<VertexKey> {
        if self.contains_vertex(vertex) {
            return Err(GraphError::DuplicateVertex);
        }
        Ok(self.attach(Slot::Borrowed(vertex)))
    }

    /// Adds the edge `from -> to`; both endpoints must already be vertices.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for a missing endpoint,
    /// [`GraphError::DuplicateEdge`] if the edge exists (the edge count is
    /// left unchanged).
    pub fn insert_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let (from, to) = self.endpoints(from, to)?;
        self.insert_edge_by_key(from, to)
    }

    /// Removes the edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for a missing endpoint,
    /// [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let (from, to) = self.endpoints(from, to)?;
        self.remove_edge_by_key(from, to)
    }

    /// Removes `vertex`, handing it back. Incident edges must be removed first.
    ///
    /// An adopted vertex is released to the caller, not dropped.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] or [`GraphError::IncidentEdges`].
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<Element<'a, V>> {
        let key = self.find_vertex(vertex).ok_or(GraphError::VertexNotFound)?;
        self.remove_vertex_by_key(key)
    }

    /// Removes `vertex` and every edge entering or leaving it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`].
    pub fn remove_vertex_with_edges(&mut self, vertex: &V) -> GraphResult<Element<'a, V>> {
        let key = self.find_vertex(vertex).ok_or(GraphError::VertexNotFound)?;
        self.remove_vertex_with_edges_by_key(key)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn is_adjacent(&self, from: &V, to: &V) -> bool {
        match self.endpoints(from, to) {
            Ok((from, to)) => self.is_adjacent_by_key(from, to),
            Err(_) => false,
        }
    }

    /// The adjacency record of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`].
    pub fn adjacency(&self, vertex: &V) -> GraphResult<AdjacencyView<'_, 'a, V, Q>> {
        self.find_vertex(vertex)
            .and_then(|key| self.adjacency_by_key(key))
            .ok_or(GraphError::VertexNotFound)
    }

    /// Number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.out_degree_by_key(self.find_vertex(vertex)?)
    }

    /// Number of edges landing on `vertex`.
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.in_degree_by_key(self.find_vertex(vertex)?)
    }

    /// Checks the structural invariants: vertices are unique under the
    /// predicate, every edge lands on a vertex, and both counters match the
    /// records.
    pub fn validate_invariants(&self) -> bool {
        if !self.records.validate_invariants() {
            return false;
        }

        let mut edges = 0usize;
        let mut adopted = 0usize;
        for (key, record) in self.records.nodes() {
            if !record.neighbors.validate_invariants() {
                return false;
            }
            edges += record.neighbors.len();
            if !record.neighbors.iter().all(|&target| self.records.contains_node(target)) {
                return invariant(false, "every edge must land on a vertex");
            }
            if let Slot::Owned(_) = record.vertex {
                adopted += 1;
                if !self.core.holds(&record.vertex) {
                    return invariant(false, "adopted vertices must be recorded in the ledger");
                }
            }
            let vertex = self.core.resolve(&record.vertex);
            let duplicated = self.records.nodes().any(|(other_key, other)| {
                other_key != key
                    && self
                        .core
                        .equivalence()
                        .equivalent(vertex, self.core.resolve(&other.vertex))
            });
            if duplicated {
                return invariant(false, "vertices must be unique under the predicate");
            }
        }

        invariant(edges == self.edge_count, "edge count must equal summed out-degrees")
            && invariant(
                self.records.len() == self.vertex_count(),
                "vertex count must equal the number of adjacency records",
            )
            && invariant(
                adopted == self.core.ownership().len(),
                "ledger must only record present vertices",
            )
    }

    fn endpoints(&self, from: &V, to: &V) -> GraphResult<(VertexKey, VertexKey)> {
        let from = self.find_vertex(from).ok_or(GraphError::VertexNotFound)?;
        let to = self.find_vertex(to).ok_or(GraphError::VertexNotFound)?;
        Ok((from, to))
    }
}

impl<'a, V, Q: Default> Default for DirectedGraph<'a, V, Q> {
    fn default() -> Self {
        Self::with_equivalence(Q::default())
    }
}

impl<'a, V: fmt::Debug, Q> fmt::Debug for DirectedGraph<'a, V, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.adjacencies()).finish()
    }
}

/// Iterator over the adjacency records of a [`DirectedGraph`].
pub struct Adjacencies<'g, 'a, V, Q> {
    graph: &'g DirectedGraph<'a, V, Q>,
    records: Nodes<'g, 'a, AdjacencyRecord<'a, V>, ValueEq>,
}

impl<'g, 'a, V, Q> Iterator for Adjacencies<'g, 'a, V, Q> {
    type Item = AdjacencyView<'g, 'a, V, Q>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, record) = self.records.next()?;
        Some(AdjacencyView::new(self.graph, key, record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<'g, 'a, V, Q> ExactSizeIterator for Adjacencies<'g, 'a, V, Q> {}
impl<'g, 'a, V, Q> FusedIterator for Adjacencies<'g, 'a, V, Q> {}

/// Iterator over the vertices of a [`DirectedGraph`].
pub struct Vertices<'g, 'a, V, Q> {
    adjacencies: Adjacencies<'g, 'a, V, Q>,
}

impl<'g, 'a, V, Q> Iterator for Vertices<'g, 'a, V, Q> {
    type Item = &'g V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.adjacencies.next().map(|view| view.vertex())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.adjacencies.size_hint()
    }
}

impl<'g, 'a, V, Q> ExactSizeIterator for Vertices<'g, 'a, V, Q> {}
impl<'g, 'a, V, Q> FusedIterator for Vertices<'g, 'a, V, Q> {}

/// Iterator over the edges of a [`DirectedGraph`].
pub struct Edges<'g, 'a, V, Q> {
    adjacencies: Adjacencies<'g, 'a, V, Q>,
    current: Option<(&'g V, Copied<Iter<'g, 'static, VertexKey, ValueEq>>)>,
}

impl<'g, 'a, V, Q> Iterator for Edges<'g, 'a, V, Q> {
    type Item = (&'g V, &'g V);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.adjacencies.graph;
        loop {
            if let Some((from, targets)) = &mut self.current {
                if let Some(to) = targets.by_ref().find_map(|key| graph.vertex(key)) {
                    return Some((*from, to));
                }
            }
            let view = self.adjacencies.next()?;
            self.current = Some((view.vertex(), view.neighbor_keys()));
        }
    }
}

impl<'g, 'a, V, Q> FusedIterator for Edges<'g, 'a, V, Q> {}
