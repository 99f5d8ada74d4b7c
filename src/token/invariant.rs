use core::marker::PhantomData;

/// A marker that is invariant in its lifetime parameter `'id`.
///
/// Brands built from it cannot be shrunk or widened by subtyping, so the marks
/// of two traversal sessions can never be unified under one token.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
