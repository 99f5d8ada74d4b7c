//! `Set` - an insertion-ordered collection unique under its predicate.
//!
//! Membership is decided only by the set's [`Equivalence`], never by address:
//! two distinct elements that the predicate calls equal collapse into one.
//! The set algebra (`union`, `intersection`, `difference`) builds a fresh set
//! that *borrows* from its inputs; it never adopts.

use core::fmt;

use crate::alloc::NodeKey;
use crate::collections::equivalence::{Equivalence, ValueEq};
use crate::collections::list::{Iter, List, Nodes};
use crate::collections::ownership::{Element, OwnershipLedger};
use crate::invariants::invariant;

/// A set of adopted or borrowed elements.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(n)\) | Membership scan, then append at tail |
/// | `remove` | \(O(n)\) | Linear search under the predicate |
/// | `is_member` | \(O(n)\) | Linear search under the predicate |
/// | `union` / `intersection` / `difference` | \(O(n \cdot m)\) | Pairwise membership |
pub struct Set<'a, E, Q = ValueEq> {
    chain: List<'a, E, Q>,
}

impl<'a, E> Set<'a, E, ValueEq> {
    /// Creates an empty set using value equality.
    pub fn new() -> Self {
        Self::with_equivalence(ValueEq)
    }
}

impl<'a, E, Q> Set<'a, E, Q> {
    /// Creates an empty set with a custom equality predicate.
    pub fn with_equivalence(equivalence: Q) -> Self {
        Self {
            chain: List::with_equivalence(equivalence),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Key of the first (oldest) member.
    #[inline]
    pub fn head(&self) -> Option<NodeKey> {
        self.chain.head()
    }

    /// Key of the last (newest) member.
    #[inline]
    pub fn tail(&self) -> Option<NodeKey> {
        self.chain.tail()
    }

    /// Key of the member following `key`.
    #[inline]
    pub fn next(&self, key: NodeKey) -> Option<NodeKey> {
        self.chain.next(key)
    }

    /// The member stored at `key`.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&E> {
        self.chain.get(key)
    }

    /// The equality predicate.
    #[inline]
    pub fn equivalence(&self) -> &Q {
        self.chain.equivalence()
    }

    /// Read-only view of the adopted elements.
    #[inline]
    pub fn ownership(&self) -> &OwnershipLedger<E> {
        self.chain.ownership()
    }

    /// Returns `true` if this set adopted `element` (compared by address).
    #[inline]
    pub fn has_ownership(&self, element: &E) -> bool {
        self.chain.has_ownership(element)
    }

    /// Members in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, 'a, E, Q> {
        self.chain.iter()
    }

    /// `(key, member)` pairs in insertion order.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, 'a, E, Q> {
        self.chain.nodes()
    }

    /// Removes every member. Adopted members are dropped.
    pub fn clear(&mut self) {
        self.chain.clear();
    }
}

impl<'a, E, Q: Equivalence<E>> Set<'a, E, Q> {
    /// Returns `true` if some member is equivalent to `element`.
    #[inline]
    pub fn is_member(&self, element: &E) -> bool {
        self.chain.contains(element)
    }

    /// Key of the member equivalent to `element`.
    #[inline]
    pub fn find(&self, element: &E) -> Option<NodeKey> {
        self.chain.position(element)
    }

    /// Adopts `element` unless an equivalent member exists.
    ///
    /// Returns `false` (and drops `element`) for a duplicate.
    pub fn insert(&mut self, element: E) -> bool {
        if self.is_member(&element) {
            return false;
        }
        self.chain.push_back(element);
        true
    }

    /// Borrows `element` unless an equivalent member exists.
    pub fn insert_ref(&mut self, element: &'a E) -> bool {
        if self.is_member(element) {
            return false;
        }
        self.chain.push_back_ref(element);
        true
    }

    /// Inserts an element handed back by another container.
    pub fn insert_element(&mut self, element: Element<'a, E>) -> bool {
        if self.is_member(&element) {
            return false;
        }
        self.chain.insert_element(self.chain.tail(), element);
        true
    }

    /// Removes the member equivalent to `element`.
    ///
    /// `Some` hands the member back (an adopted member is released, not
    /// dropped); `None` means nothing matched.
    pub fn remove(&mut self, element: &E) -> Option<Element<'a, E>> {
        let equivalence = self.chain.equivalence();
        let mut prev = None;
        let mut found = false;
        for (key, member) in self.chain.nodes() {
            if equivalence.equivalent(element, member) {
                found = true;
                break;
            }
            prev = Some(key);
        }
        if !found {
            return None;
        }
        self.chain.remove(prev)
    }

    /// Checks the list invariants plus pairwise uniqueness under the predicate.
    pub fn validate_invariants(&self) -> bool {
        if !self.chain.validate_invariants() {
            return false;
        }
        let equivalence = self.chain.equivalence();
        let unique = self.nodes().all(|(key, member)| {
            self.nodes()
                .filter(|&(other_key, _)| other_key != key)
                .all(|(_, other)| !equivalence.equivalent(member, other))
        });
        invariant(unique, "set members must be pairwise distinct")
    }
}

impl<'a, E, Q: Default> Default for Set<'a, E, Q> {
    fn default() -> Self {
        Self::with_equivalence(Q::default())
    }
}

impl<'a, E: fmt::Debug, Q> fmt::Debug for Set<'a, E, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'s, 'a, E, Q> IntoIterator for &'s Set<'a, E, Q> {
    type Item = &'s E;
    type IntoIter = Iter<'s, 'a, E, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every member of `a`, then the members of `b` not in `a`.
pub fn union<'s, E, Q>(a: &'s Set<'_, E, Q>, b: &'s Set<'_, E, Q>) -> Set<'s, E, Q>
where
    Q: Equivalence<E> + Clone,
{
    let mut result = Set::with_equivalence(a.equivalence().clone());
    for member in a {
        result.insert_ref(member);
    }
    for member in b {
        if !a.is_member(member) {
            result.insert_ref(member);
        }
    }
    result
}

/// Members of `a` that are also members of `b`.
pub fn intersection<'s, E, Q>(a: &'s Set<'_, E, Q>, b: &'s Set<'_, E, Q>) -> Set<'s, E, Q>
where
    Q: Equivalence<E> + Clone,
{
    let mut result = Set::with_equivalence(a.equivalence().clone());
    for member in a {
        if b.is_member(member) {
            result.insert_ref(member);
        }
    }
    result
}

/// Members of `a` that are not members of `b`.
pub fn difference<'s, E, Q>(a: &'s Set<'_, E, Q>, b: &'s Set<'_, E, Q>) -> Set<'s, E, Q>
where
    Q: Equivalence<E> + Clone,
{
    let mut result = Set::with_equivalence(a.equivalence().clone());
    for member in a {
        if !b.is_member(member) {
            result.insert_ref(member);
        }
    }
    result
}

/// `true` if every member of `a` is a member of `b`.
pub fn is_subset<E, Q: Equivalence<E>>(a: &Set<'_, E, Q>, b: &Set<'_, E, Q>) -> bool {
    if a.len() > b.len() {
        return false;
    }
    a.iter().all(|member| b.is_member(member))
}

/// `true` if `a` and `b` hold the same members under the predicate.
pub fn is_equal<E, Q: Equivalence<E>>(a: &Set<'_, E, Q>, b: &Set<'_, E, Q>) -> bool {
    a.len() == b.len() && is_subset(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[i32]) -> Set<'static, i32> {
        let mut set = Set::new();
        for &v in values {
            set.insert(v);
        }
        set
    }

    fn sorted<Q>(set: &Set<'_, i32, Q>) -> Vec<i32> {
        let mut values: Vec<i32> = set.iter().copied().collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut set = Set::new();
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_head_middle_and_tail() {
        let mut set = set_of(&[1, 2, 3, 4]);
        assert!(set.remove(&1).is_some());
        assert!(set.remove(&3).is_some());
        assert!(set.remove(&4).is_some());
        assert!(set.remove(&9).is_none());
        assert_eq!(sorted(&set), vec![2]);
        assert_eq!(set.head(), set.tail());
        assert!(set.validate_invariants());
    }

    #[test]
    fn algebra_on_small_sets() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[3, 4, 5]);
        assert_eq!(sorted(&union(&a, &b)), vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted(&intersection(&a, &b)), vec![3]);
        assert_eq!(sorted(&difference(&a, &b)), vec![1, 2]);
        assert_eq!(sorted(&difference(&b, &a)), vec![4, 5]);
    }

    #[test]
    fn union_keeps_left_order_first() {
        let a = set_of(&[3, 1]);
        let b = set_of(&[2, 1]);
        let u = union(&a, &b);
        assert_eq!(u.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert!(u.ownership().is_empty());
    }

    #[test]
    fn membership_ignores_address() {
        let mut set = Set::with_equivalence(|a: &(u8, &'static str), b: &(u8, &'static str)| a.0 == b.0);
        assert!(set.insert((1, "one")));
        assert!(!set.insert((1, "uno")));
        assert!(set.is_member(&(1, "ein")));
        assert_eq!(set.iter().next().map(|m| m.1), Some("one"));
    }
}
