//! Equality predicates for containers.
//!
//! Containers never look inside their elements except through an
//! [`Equivalence`]. It is the only way a set decides membership and the only
//! way a graph decides that two vertices are "the same" vertex.

/// A binary equivalence relation over `E`.
///
/// Implementations must be reflexive, symmetric and transitive.
pub trait Equivalence<E: ?Sized> {
    /// Returns `true` if `a` and `b` designate the same element.
    fn equivalent(&self, a: &E, b: &E) -> bool;
}

/// Value equality through `PartialEq`. The default predicate of every container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValueEq;

impl<E: PartialEq + ?Sized> Equivalence<E> for ValueEq {
    #[inline]
    fn equivalent(&self, a: &E, b: &E) -> bool {
        a == b
    }
}

impl<E: ?Sized, F> Equivalence<E> for F
where
    F: Fn(&E, &E) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &E, b: &E) -> bool {
        self(a, b)
    }
}

/// Compares elements by a projected key.
///
/// ```rust
/// use graphwalk::collections::{ByKey, Equivalence};
///
/// struct Course { id: u32, title: &'static str }
///
/// let by_id = ByKey(|c: &Course| c.id);
/// let a = Course { id: 100, title: "Intro" };
/// let b = Course { id: 100, title: "Introduction" };
/// assert!(by_id.equivalent(&a, &b));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<E: ?Sized, K: PartialEq, F> Equivalence<E> for ByKey<F>
where
    F: Fn(&E) -> K,
{
    #[inline]
    fn equivalent(&self, a: &E, b: &E) -> bool {
        (self.0)(a) == (self.0)(b)
    }
}
