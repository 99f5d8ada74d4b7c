//! `List` - an insertion-ordered singly-linked list with head and tail.
//!
//! Nodes live in a [`NodePool`] and are addressed by [`NodeKey`]. Insertion and
//! removal are positional, relative to a node *before* the affected position:
//! `None` means "at the head".
//!
//! Elements are either adopted (`insert`, `push_back`) or borrowed
//! (`insert_ref`, `push_back_ref`). Removing a node hands the element back as
//! an [`Element`]; an adopted element is released to the caller, not dropped.

use core::fmt;
use core::iter::FusedIterator;

use crate::alloc::{NodeKey, NodePool};
use crate::collections::base::Collection;
use crate::collections::equivalence::{Equivalence, ValueEq};
use crate::collections::node::Link;
use crate::collections::ownership::{Element, OwnershipLedger, Slot};
use crate::invariants::invariant;

/// An ordered list of adopted or borrowed elements.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` / `insert_ref` | \(O(1)\) | `after` is validated by pool lookup |
/// | `remove` | \(O(1)\) + ledger release | Release scans the ownership chain |
/// | `remove_node` | \(O(n)\) | Scans for the predecessor |
/// | `position` | \(O(n)\) | Linear search under the predicate |
pub struct List<'a, E, Q = ValueEq> {
    nodes: NodePool<Link<Slot<'a, E>>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    // Declared last: nodes are gone before the ledger destroys adopted elements.
    core: Collection<'a, E, Q>,
}

impl<'a, E> List<'a, E, ValueEq> {
    /// Creates an empty list using value equality.
    pub fn new() -> Self {
        Self::with_equivalence(ValueEq)
    }
}

impl<'a, E, Q> List<'a, E, Q> {
    /// Creates an empty list with a custom equality predicate.
    pub fn with_equivalence(equivalence: Q) -> Self {
        Self {
            nodes: NodePool::new(),
            head: None,
            tail: None,
            core: Collection::new(equivalence),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Key of the first node.
    #[inline]
    pub fn head(&self) -> Option<NodeKey> {
        self.head
    }

    /// Key of the last node.
    #[inline]
    pub fn tail(&self) -> Option<NodeKey> {
        self.tail
    }

    /// Key of the node following `key`.
    #[inline]
    pub fn next(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.next
    }

    /// Returns `true` if `key` names a node of this list.
    #[inline]
    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.nodes.contains(key)
    }

    /// The element stored at `key`.
    pub fn get(&self, key: NodeKey) -> Option<&E> {
        let link = self.nodes.get(key)?;
        Some(self.core.resolve(&link.payload))
    }

    /// Mutable access to the element at `key`. Borrowed elements yield `None`.
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut E> {
        let slot = self.nodes.get(key)?.payload;
        self.core.resolve_mut(&slot)
    }

    /// The equality predicate.
    #[inline]
    pub fn equivalence(&self) -> &Q {
        self.core.equivalence()
    }

    /// Read-only view of the adopted elements.
    #[inline]
    pub fn ownership(&self) -> &OwnershipLedger<E> {
        self.core.ownership()
    }

    /// Returns `true` if this list adopted `element` (compared by address).
    #[inline]
    pub fn has_ownership(&self, element: &E) -> bool {
        self.core.has_ownership(element)
    }

    /// Adopts `element` and links it after `after` (`None` = at the head).
    ///
    /// An `after` key that does not belong to this list is treated as `None`.
    pub fn insert(&mut self, after: Option<NodeKey>, element: E) -> NodeKey {
        let slot = self.core.adopt(element);
        self.link(after, slot)
    }

    /// Borrows `element` and links it after `after` (`None` = at the head).
    pub fn insert_ref(&mut self, after: Option<NodeKey>, element: &'a E) -> NodeKey {
        self.link(after, Slot::Borrowed(element))
    }

    /// Links an element handed back by another container, keeping its
    /// adopted/borrowed status.
    pub fn insert_element(&mut self, after: Option<NodeKey>, element: Element<'a, E>) -> NodeKey {
        let slot = self.core.slot(element);
        self.link(after, slot)
    }

    /// Adopts `element` at the tail.
    #[inline]
    pub fn push_back(&mut self, element: E) -> NodeKey {
        self.insert(self.tail, element)
    }

    /// Borrows `element` at the tail.
    #[inline]
    pub fn push_back_ref(&mut self, element: &'a E) -> NodeKey {
        self.insert_ref(self.tail, element)
    }

    /// Unlinks the node after `after` (`None` = the head) and returns its element.
    ///
    /// Returns `None`, leaving the list untouched, when the list is empty,
    /// when `after` is the tail, or when `after` is not a node of this list.
    pub fn remove(&mut self, after: Option<NodeKey>) -> Option<Element<'a, E>> {
        let target = match after {
            None => self.head?,
            Some(prev) => self.nodes.get(prev)?.next?,
        };
        let link = self.nodes.remove(target)?;

        match after {
            None => self.head = link.next,
            Some(prev) => {
                if let Some(prev_link) = self.nodes.get_mut(prev) {
                    prev_link.next = link.next;
                }
            }
        }
        if self.tail == Some(target) {
            self.tail = after;
        }

        self.core.shrink();
        Some(self.core.release(link.payload))
    }

    /// Removes the head element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Element<'a, E>> {
        self.remove(None)
    }

    /// Unlinks the node named by `key` itself. \(O(n)\): scans for its predecessor.
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Element<'a, E>> {
        if !self.nodes.contains(key) {
            return None;
        }
        let prev = self.predecessor(key);
        self.remove(prev)
    }

    /// Removes every element head-first. Adopted elements are dropped.
    pub fn clear(&mut self) {
        while self.remove(None).is_some() {}
    }

    /// Iterates elements from head to tail.
    pub fn iter(&self) -> Iter<'_, 'a, E, Q> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Iterates `(key, element)` pairs from head to tail.
    pub fn nodes(&self) -> Nodes<'_, 'a, E, Q> {
        Nodes {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Checks the structural invariants: the size counter matches the
    /// reachable chain, the tail is its last node, and the ledger records
    /// exactly the adopted elements still linked.
    pub fn validate_invariants(&self) -> bool {
        let mut reachable = 0usize;
        let mut last = None;
        let mut adopted = 0usize;
        let mut recorded = true;

        let mut cursor = self.head;
        while let Some(key) = cursor {
            let Some(link) = self.nodes.get(key) else {
                return invariant(false, "list chain must only link live nodes");
            };
            reachable += 1;
            last = Some(key);
            if let Slot::Owned(_) = link.payload {
                adopted += 1;
                recorded &= self.core.holds(&link.payload);
            }
            cursor = link.next;
        }

        invariant(reachable == self.len(), "list size must equal reachable node count")
            && invariant(reachable == self.nodes.len(), "every pooled node must be reachable from head")
            && invariant(last == self.tail, "tail must be the last reachable node")
            && invariant(recorded, "adopted slots must be recorded in the ledger")
            && invariant(adopted == self.core.ownership().len(), "ledger must only record linked elements")
    }

    fn link(&mut self, after: Option<NodeKey>, slot: Slot<'a, E>) -> NodeKey {
        let after = after.filter(|&key| self.nodes.contains(key));

        let key = match after {
            None => {
                let key = self.nodes.insert(Link::new(slot, self.head));
                self.head = Some(key);
                if self.tail.is_none() {
                    self.tail = Some(key);
                }
                key
            }
            Some(prev) => {
                let next = self.nodes.get(prev).and_then(|link| link.next);
                let key = self.nodes.insert(Link::new(slot, next));
                if let Some(prev_link) = self.nodes.get_mut(prev) {
                    prev_link.next = Some(key);
                }
                if self.tail == Some(prev) {
                    self.tail = Some(key);
                }
                key
            }
        };

        self.core.grow();
        key
    }

    fn predecessor(&self, key: NodeKey) -> Option<NodeKey> {
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let next = self.nodes.get(current)?.next;
            if next == Some(key) {
                return Some(current);
            }
            cursor = next;
        }
        None
    }
}

impl<'a, E, Q: Equivalence<E>> List<'a, E, Q> {
    /// Key of the first node whose element is equivalent to `element`.
    pub fn position(&self, element: &E) -> Option<NodeKey> {
        let equivalence = self.core.equivalence();
        self.nodes()
            .find(|(_, item)| equivalence.equivalent(element, item))
            .map(|(key, _)| key)
    }

    /// Returns `true` if some element is equivalent to `element`.
    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }
}

impl<'a, E, Q: Default> Default for List<'a, E, Q> {
    fn default() -> Self {
        Self::with_equivalence(Q::default())
    }
}

impl<'a, E: fmt::Debug, Q> fmt::Debug for List<'a, E, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'l, 'a, E, Q> IntoIterator for &'l List<'a, E, Q> {
    type Item = &'l E;
    type IntoIter = Iter<'l, 'a, E, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, element)` pairs of a [`List`].
pub struct Nodes<'l, 'a, E, Q> {
    list: &'l List<'a, E, Q>,
    cursor: Option<NodeKey>,
    remaining: usize,
}

impl<'l, 'a, E, Q> Iterator for Nodes<'l, 'a, E, Q> {
    type Item = (NodeKey, &'l E);

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let key = self.cursor?;
        let link = list.nodes.get(key)?;
        self.cursor = link.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((key, list.core.resolve(&link.payload)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, 'a, E, Q> ExactSizeIterator for Nodes<'l, 'a, E, Q> {}
impl<'l, 'a, E, Q> FusedIterator for Nodes<'l, 'a, E, Q> {}

impl<'l, 'a, E, Q> Clone for Nodes<'l, 'a, E, Q> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// Iterator over the elements of a [`List`].
pub struct Iter<'l, 'a, E, Q> {
    nodes: Nodes<'l, 'a, E, Q>,
}

impl<'l, 'a, E, Q> Iterator for Iter<'l, 'a, E, Q> {
    type Item = &'l E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(_, element)| element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'l, 'a, E, Q> ExactSizeIterator for Iter<'l, 'a, E, Q> {}
impl<'l, 'a, E, Q> FusedIterator for Iter<'l, 'a, E, Q> {}

impl<'l, 'a, E, Q> Clone for Iter<'l, 'a, E, Q> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}
