//! Node carriers.
//!
//! A node is one payload plus the key of its successor. Lists and the
//! membership chain of sets both link `Link<Slot>` records; the ownership
//! ledger links `Link<E>` records holding the adopted elements themselves.

use crate::alloc::NodeKey;

/// A singly-linked node record.
pub(crate) struct Link<T> {
    pub(crate) payload: T,
    pub(crate) next: Option<NodeKey>,
}

impl<T> Link<T> {
    #[inline]
    pub(crate) fn new(payload: T, next: Option<NodeKey>) -> Self {
        Self { payload, next }
    }
}
