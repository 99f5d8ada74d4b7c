//! `GhostCell` - interior mutability gated by a branded token.
//!
//! The cell is a thin wrapper over `UnsafeCell`: the token argument carries no
//! data and optimizes away, while the borrow checker enforces the aliasing
//! rules on the token instead of on the cell.

use core::cell::UnsafeCell;
use core::fmt;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A branded cell that can only be accessed using a token of the same brand.
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: InvariantLifetime<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: InvariantLifetime::new(),
            value: UnsafeCell::new(value),
        }
    }

    /// Consumes the cell, returning the wrapped value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Replaces the contained value, returning the old value.
    #[inline]
    pub fn replace(&self, token: &mut GhostToken<'brand>, value: T) -> T {
        core::mem::replace(self.borrow_mut(token), value)
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: the shared token borrow lives as long as the returned
        // reference, so no `&mut GhostToken<'brand>` (and thus no mutable
        // borrow of any cell of this brand) can coexist with it.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the token is linear; holding `&mut` to it for `'a` excludes
        // every other access path to cells of this brand for `'a`.
        unsafe { &mut *self.value.get() }
    }

    /// Mutable access through exclusive ownership of the cell; no token needed.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

impl<'brand, T: Copy> GhostCell<'brand, T> {
    /// Copies the contained value.
    #[inline(always)]
    pub fn get(&self, token: &GhostToken<'brand>) -> T {
        *self.borrow(token)
    }

    /// Overwrites the contained value.
    #[inline(always)]
    pub fn set(&self, token: &mut GhostToken<'brand>, value: T) {
        *self.borrow_mut(token) = value;
    }
}

impl<'brand, T: Default> Default for GhostCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'brand, T> From<T> for GhostCell<'brand, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<'brand, T: ?Sized> fmt::Debug for GhostCell<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents need a token to read.
        f.debug_struct("GhostCell").finish_non_exhaustive()
    }
}

// SAFETY: safe access is token-gated; sending the cell sends its value.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}
// SAFETY: shared access hands out `&T` only under `&GhostToken`, mutable
// access only under `&mut GhostToken`, so `T: Send + Sync` suffices.
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
