//! Arena-backed containers with adopt-or-borrow element ownership.
//!
//! - `list`: insertion-ordered singly-linked list with positional insert/remove
//! - `set`: list with uniqueness under an [`Equivalence`], plus set algebra
//! - `queue`: FIFO view over a list
//! - `ownership`: the ledger of adopted elements every container carries
//! - `base`: the shared core (ledger, size, predicate)

pub mod base;
pub mod equivalence;
pub mod list;
pub(crate) mod node;
pub mod ownership;
pub mod queue;
pub mod set;

pub use base::Collection;
pub use equivalence::{ByKey, Equivalence, ValueEq};
pub use list::List;
pub use ownership::{Element, OwnedKey, OwnershipLedger};
pub use queue::Queue;
pub use set::{difference, intersection, is_equal, is_subset, union, Set};
