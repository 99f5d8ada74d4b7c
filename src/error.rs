//! Error types for graph operations.
//!
//! Container operations never fail: they answer with `Option`/`bool`. Graph
//! mutations and traversals return [`GraphResult`], and [`status_code`] folds
//! a result into the integer convention hosts branch on: `0` for success, `1`
//! for a duplicate insertion, `-1` for everything else.

use thiserror::Error;

use crate::graph::VertexKey;

/// Everything that can go wrong in a graph operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex equivalent to the one being inserted is already present.
    #[error("an equivalent vertex is already present")]
    DuplicateVertex,

    /// The edge being inserted already exists.
    #[error("edge already exists")]
    DuplicateEdge,

    /// No vertex is equivalent to the one given.
    #[error("vertex not found")]
    VertexNotFound,

    /// The edge to remove does not exist.
    #[error("edge not found")]
    EdgeNotFound,

    /// The vertex still has incident edges and cannot be removed.
    #[error("vertex has {incoming} incoming and {outgoing} outgoing edges")]
    IncidentEdges {
        /// Edges landing on the vertex.
        incoming: usize,
        /// Edges leaving the vertex.
        outgoing: usize,
    },

    /// A neighbor set names a vertex that has no adjacency record.
    #[error("neighbor {0:?} has no adjacency record")]
    DanglingNeighbor(VertexKey),
}

impl GraphError {
    /// Integer status for this error: `1` for duplicates, `-1` otherwise.
    pub fn status(&self) -> i32 {
        match self {
            GraphError::DuplicateVertex | GraphError::DuplicateEdge => 1,
            GraphError::VertexNotFound
            | GraphError::EdgeNotFound
            | GraphError::IncidentEdges { .. }
            | GraphError::DanglingNeighbor(_) => -1,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Folds a result into its integer status (`0` on success).
pub fn status_code<T>(result: &GraphResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(error) => error.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_map_to_one() {
        assert_eq!(GraphError::DuplicateVertex.status(), 1);
        assert_eq!(GraphError::DuplicateEdge.status(), 1);
    }

    #[test]
    fn failures_map_to_minus_one() {
        let incident = GraphError::IncidentEdges { incoming: 1, outgoing: 0 };
        assert_eq!(incident.status(), -1);
        assert_eq!(status_code::<()>(&Err(GraphError::VertexNotFound)), -1);
        assert_eq!(status_code(&Ok(7)), 0);
    }

    #[test]
    fn incident_message_names_both_sides() {
        let error = GraphError::IncidentEdges { incoming: 2, outgoing: 3 };
        assert_eq!(error.to_string(), "vertex has 2 incoming and 3 outgoing edges");
    }
}
