//! Error types for graph adaptation
//!
//! The solver itself cannot fail once it holds a well-formed working graph;
//! every error originates in the adapter reading the caller's graph.

use thiserror::Error;

/// Errors raised while reading a [`LinkSource`](crate::LinkSource)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HitsError {
    /// An edge names an endpoint that node enumeration never yielded
    #[error("edge {from} -> {to} references node {missing} which is not in the graph")]
    InvalidEdgeReference {
        /// Debug rendering of the edge source
        from: String,
        /// Debug rendering of the edge target
        to: String,
        /// Debug rendering of the unknown endpoint
        missing: String,
    },

    /// Node enumeration yielded the same identity twice
    #[error("node {0} was enumerated more than once")]
    DuplicateNode(String),
}

/// Result alias for HITS operations
pub type Result<T> = std::result::Result<T, HitsError>;
