//! State shared by every container: ledger, size counter, equality predicate.

use core::marker::PhantomData;

use crate::collections::equivalence::ValueEq;
use crate::collections::ownership::{Element, OwnershipLedger, Slot};

/// The common core of lists, sets, queues and graphs.
///
/// `'a` bounds every borrowed element; adopted elements live in the ledger
/// and are destroyed with it.
pub struct Collection<'a, E, Q = ValueEq> {
    ledger: OwnershipLedger<E>,
    size: usize,
    equivalence: Q,
    _borrows: PhantomData<&'a E>,
}

impl<'a, E, Q> Collection<'a, E, Q> {
    pub(crate) fn new(equivalence: Q) -> Self {
        Self {
            ledger: OwnershipLedger::new(),
            size: 0,
            equivalence,
            _borrows: PhantomData,
        }
    }

    /// Number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the container is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The configured equality predicate.
    #[inline]
    pub fn equivalence(&self) -> &Q {
        &self.equivalence
    }

    /// Read-only view of the adopted elements.
    #[inline]
    pub fn ownership(&self) -> &OwnershipLedger<E> {
        &self.ledger
    }

    /// Returns `true` if this container adopted `element` (compared by address).
    #[inline]
    pub fn has_ownership(&self, element: &E) -> bool {
        self.ledger.holds_element(element)
    }

    #[inline]
    pub(crate) fn adopt(&mut self, element: E) -> Slot<'a, E> {
        Slot::Owned(self.ledger.take(element))
    }

    pub(crate) fn slot(&mut self, element: Element<'a, E>) -> Slot<'a, E> {
        match element {
            Element::Owned(element) => self.adopt(element),
            Element::Borrowed(element) => Slot::Borrowed(element),
        }
    }

    /// Resolves a node payload to its element.
    ///
    /// # Panics
    /// Panics if an owned slot is missing from the ledger, which would mean a
    /// node outlived its ownership record.
    pub(crate) fn resolve<'s>(&'s self, slot: &Slot<'a, E>) -> &'s E {
        match *slot {
            Slot::Owned(key) => self
                .ledger
                .get(key)
                .expect("owned slot missing from ownership ledger"),
            Slot::Borrowed(element) => element,
        }
    }

    /// Mutable access; only adopted elements can be mutated.
    pub(crate) fn resolve_mut(&mut self, slot: &Slot<'a, E>) -> Option<&mut E> {
        match *slot {
            Slot::Owned(key) => self.ledger.get_mut(key),
            Slot::Borrowed(_) => None,
        }
    }

    /// Releases ownership of a slot's element to the caller.
    ///
    /// # Panics
    /// Panics if an owned slot is missing from the ledger.
    pub(crate) fn release(&mut self, slot: Slot<'a, E>) -> Element<'a, E> {
        match slot {
            Slot::Owned(key) => Element::Owned(
                self.ledger
                    .release(key)
                    .expect("owned slot missing from ownership ledger"),
            ),
            Slot::Borrowed(element) => Element::Borrowed(element),
        }
    }

    pub(crate) fn holds(&self, slot: &Slot<'a, E>) -> bool {
        match *slot {
            Slot::Owned(key) => self.ledger.holds(key),
            Slot::Borrowed(_) => true,
        }
    }

    #[inline]
    pub(crate) fn grow(&mut self) {
        self.size += 1;
    }

    #[inline]
    pub(crate) fn shrink(&mut self) {
        self.size -= 1;
    }

    /// Destroys every adopted element and resets the size counter.
    pub(crate) fn reset(&mut self) {
        self.ledger.clear();
        self.size = 0;
    }
}
