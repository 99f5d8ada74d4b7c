//! Ownership tracking for adopted elements.
//!
//! A container either *adopts* an element (takes it by value and promises to
//! destroy it) or *borrows* it (holds `&'a E`, never destroys it). Adopted
//! elements live in the container's [`OwnershipLedger`]; the container's nodes
//! refer to them through [`OwnedKey`]s.
//!
//! The ledger is itself a singly-linked chain: adoption prepends a record,
//! release unlinks it, and dropping the ledger walks the chain destroying
//! every element still recorded.

use core::fmt;
use core::iter;
use core::ops::Deref;
use core::ptr;

use crate::alloc::{NodeKey, NodePool};
use crate::collections::node::Link;

/// Handle to an element recorded in an [`OwnershipLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnedKey(NodeKey);

/// The per-container record of adopted elements.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `take` | \(O(1)\) | Prepends to the chain |
/// | `release` | \(O(n)\) | Scans for the predecessor record |
/// | `holds` / `holds_element` | \(O(n)\) | Linear chain scan |
/// | `get` | \(O(1)\) | Direct pool lookup |
pub struct OwnershipLedger<E> {
    records: NodePool<Link<E>>,
    head: Option<NodeKey>,
}

impl<E> OwnershipLedger<E> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            records: NodePool::new(),
            head: None,
        }
    }

    /// Number of adopted elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is adopted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adopts `element`, prepending a record for it.
    pub fn take(&mut self, element: E) -> OwnedKey {
        let key = self.records.insert(Link::new(element, self.head));
        self.head = Some(key);
        OwnedKey(key)
    }

    /// Unlinks the record for `key` and hands the element back without
    /// destroying it.
    pub fn release(&mut self, key: OwnedKey) -> Option<E> {
        let target = key.0;
        if !self.records.contains(target) {
            return None;
        }

        if self.head == Some(target) {
            let link = self.records.remove(target)?;
            self.head = link.next;
            return Some(link.payload);
        }

        let mut cursor = self.head;
        while let Some(current) = cursor {
            let next = self.records.get(current)?.next;
            if next == Some(target) {
                let link = self.records.remove(target)?;
                if let Some(prev) = self.records.get_mut(current) {
                    prev.next = link.next;
                }
                return Some(link.payload);
            }
            cursor = next;
        }
        None
    }

    /// Returns `true` if `key` is recorded in the chain.
    pub fn holds(&self, key: OwnedKey) -> bool {
        self.chain().any(|k| k == key.0)
    }

    /// Returns `true` if `element` is (by address) one of the adopted elements.
    pub fn holds_element(&self, element: &E) -> bool {
        self.iter().any(|owned| ptr::eq(owned, element))
    }

    /// Shared access to an adopted element.
    #[inline]
    pub fn get(&self, key: OwnedKey) -> Option<&E> {
        self.records.get(key.0).map(|link| &link.payload)
    }

    /// Mutable access to an adopted element.
    #[inline]
    pub fn get_mut(&mut self, key: OwnedKey) -> Option<&mut E> {
        self.records.get_mut(key.0).map(|link| &mut link.payload)
    }

    /// Adopted elements, most recently adopted first.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.chain()
            .filter_map(move |key| self.records.get(key).map(|link| &link.payload))
    }

    /// Destroys every adopted element.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(key) = cursor {
            cursor = self.records.remove(key).and_then(|link| link.next);
        }
        debug_assert!(self.records.is_empty(), "ledger chain must reach every record");
    }

    fn chain(&self) -> impl Iterator<Item = NodeKey> + '_ {
        iter::successors(self.head, move |&key| self.records.get(key).and_then(|link| link.next))
    }
}

impl<E> Default for OwnershipLedger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for OwnershipLedger<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> fmt::Debug for OwnershipLedger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnershipLedger").field("len", &self.len()).finish()
    }
}

/// What a container node holds: an adopted element (by ledger key) or a borrow.
pub(crate) enum Slot<'a, E> {
    Owned(OwnedKey),
    Borrowed(&'a E),
}

impl<'a, E> Clone for Slot<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for Slot<'a, E> {}

/// An element handed back by a removal.
///
/// `Owned` means the container had adopted the element; ownership has been
/// released to the caller and nothing was destroyed. `Borrowed` returns the
/// caller's own reference.
pub enum Element<'a, E> {
    /// The element was adopted by the container.
    Owned(E),
    /// The element was borrowed by the container.
    Borrowed(&'a E),
}

impl<'a, E> Element<'a, E> {
    /// Returns `true` if the container had adopted the element.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Element::Owned(_))
    }

    /// The adopted element, if this was one.
    pub fn into_owned(self) -> Option<E> {
        match self {
            Element::Owned(element) => Some(element),
            Element::Borrowed(_) => None,
        }
    }

    /// The borrowed reference, if this was one.
    pub fn into_borrowed(self) -> Option<&'a E> {
        match self {
            Element::Owned(_) => None,
            Element::Borrowed(element) => Some(element),
        }
    }
}

impl<'a, E> Deref for Element<'a, E> {
    type Target = E;

    #[inline]
    fn deref(&self) -> &E {
        match self {
            Element::Owned(element) => element,
            Element::Borrowed(element) => element,
        }
    }
}

impl<'a, E: fmt::Debug> fmt::Debug for Element<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Owned(element) => f.debug_tuple("Owned").field(element).finish(),
            Element::Borrowed(element) => f.debug_tuple("Borrowed").field(element).finish(),
        }
    }
}
