//! Node storage shared by every container.

pub mod pool;

pub use pool::{NodeKey, NodePool};
