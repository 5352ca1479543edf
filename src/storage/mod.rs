//! Graph collaborator layer
//!
//! Defines the read-only contract the HITS adapter consumes ([`LinkSource`])
//! and a small in-memory graph keyed by caller identities ([`LabeledGraph`]).

pub mod labeled;

pub use labeled::LabeledGraph;

use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph the HITS adapter can read
///
/// Implementors expose three capabilities: a node count, a single pass over
/// every node identity, and a single pass over every directed edge as a
/// `(source, target)` pair of identities. Weights, labels and reverse lookups
/// are never requested.
///
/// Parallel edges are reported once per edge; self-loops are legal.
pub trait LinkSource {
    /// Stable, comparable node identity
    type Id: Clone + Eq + Hash + Debug;

    /// Number of nodes `nodes()` will yield
    fn node_count(&self) -> usize;

    /// Every node identity, each exactly once
    fn nodes(&self) -> impl Iterator<Item = &Self::Id>;

    /// Every directed edge as `(source, target)`, each exactly once
    fn links(&self) -> impl Iterator<Item = (&Self::Id, &Self::Id)>;
}
