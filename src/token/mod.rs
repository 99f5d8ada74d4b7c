//! `GhostToken` - the capability that gates traversal marks.
//!
//! Every vertex used with [`bfs`](crate::graph::bfs) or [`dfs`](crate::graph::dfs)
//! keeps its color and hop count in [`GhostCell`](crate::GhostCell)s branded
//! with `'brand`. Reading a mark needs `&GhostToken<'brand>`, writing one needs
//! `&mut GhostToken<'brand>`. The graph itself stays behind a shared borrow
//! while a traversal repaints it, which is what lets a graph hold borrowed
//! vertices and still be traversed.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is not `Copy`/`Clone`. Any API that can hand out
//! `&mut T` for a branded cell requires `&mut GhostToken<'brand>`, and Rust
//! rejects two live mutable borrows of the same token.

/// Invariant lifetime definitions for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token controlling access to the `GhostCell`s of one brand.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// ```rust
    /// use graphwalk::{GhostCell, GhostToken};
    ///
    /// let hops = GhostToken::new(|mut token| {
    ///     let cell = GhostCell::new(-1i64);
    ///     cell.set(&mut token, 3);
    ///     cell.get(&token)
    /// });
    /// assert_eq!(hops, 3);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}
