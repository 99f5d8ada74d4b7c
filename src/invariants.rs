//! Debug-only invariant assertion helpers.
//!
//! `validate_invariants` methods on containers and graphs route every check
//! through here so a violation names itself in debug builds while release
//! builds just report `false`.

/// Debug-asserts a structural invariant with a message and returns it.
#[inline(always)]
pub(crate) fn invariant(condition: bool, message: &str) -> bool {
    debug_assert!(condition, "Structural invariant violated: {message}");
    condition
}
