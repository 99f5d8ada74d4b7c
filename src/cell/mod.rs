//! Token-gated cells.
//!
//! Only [`GhostCell`] is needed here: traversal marks are small `Copy` values
//! that one token writes while the containers holding the vertices stay
//! immutably borrowed.

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
