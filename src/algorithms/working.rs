//! Dense working graph for HITS iteration
//!
//! Caller identities are mapped once to dense indices; the solver loop only
//! touches `Vec<WorkingNode>` and integer adjacency lists.
//!
//! ```text
//! a -> b, a -> c, b -> a
//!
//!   index:  {a: 0, b: 1, c: 2}
//!   nodes[0]: in = [1],  out = [1, 2]
//!   nodes[1]: in = [0],  out = [0]
//!   nodes[2]: in = [0],  out = []
//! ```

use crate::error::{HitsError, Result};
use crate::storage::LinkSource;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Per-node scores and adjacency
///
/// `prev_*` hold the previous round's values and are read only by the
/// convergence test.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingNode {
    /// Current authority score
    pub authority: f64,
    /// Current hub score
    pub hub: f64,
    /// Authority score from the previous round
    pub prev_authority: f64,
    /// Hub score from the previous round
    pub prev_hub: f64,
    /// Indices of nodes with an edge into this node (one entry per edge)
    pub in_neighbors: Vec<usize>,
    /// Indices of nodes this node points to (one entry per edge)
    pub out_neighbors: Vec<usize>,
}

impl WorkingNode {
    fn new(initial: f64) -> Self {
        Self {
            authority: initial,
            hub: initial,
            prev_authority: initial,
            prev_hub: initial,
            in_neighbors: Vec::new(),
            out_neighbors: Vec::new(),
        }
    }
}

/// Dense index-based copy of a [`LinkSource`]
///
/// Topology is fixed after [`WorkingGraph::build`]; only scores change.
#[derive(Debug, Clone)]
pub struct WorkingGraph<K> {
    pub(crate) nodes: Vec<WorkingNode>,
    index: HashMap<K, usize>,
}

impl<K> WorkingGraph<K>
where
    K: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    /// Build the working graph
    ///
    /// Nodes are indexed in enumeration order. Every score starts at `1.0`,
    /// including the previous-round shadows, so the first convergence delta
    /// is measured against a neutral baseline.
    ///
    /// A graph reporting zero nodes yields an empty working graph without
    /// being enumerated.
    ///
    /// # Errors
    ///
    /// - [`HitsError::DuplicateNode`] if node enumeration repeats an identity
    /// - [`HitsError::InvalidEdgeReference`] if an edge endpoint was never
    ///   enumerated as a node
    pub fn build<G>(graph: &G) -> Result<Self>
    where
        G: LinkSource<Id = K>,
    {
        let total = graph.node_count();
        if total == 0 {
            return Ok(Self {
                nodes: Vec::new(),
                index: HashMap::new(),
            });
        }

        let mut nodes = Vec::with_capacity(total);
        let mut index = HashMap::with_capacity(total);

        for id in graph.nodes() {
            match index.entry(id.clone()) {
                Entry::Occupied(_) => return Err(HitsError::DuplicateNode(format!("{id:?}"))),
                Entry::Vacant(slot) => {
                    slot.insert(nodes.len());
                    nodes.push(WorkingNode::new(1.0));
                }
            }
        }

        let mut num_links = 0_usize;
        for (src, dst) in graph.links() {
            let (Some(&from), Some(&to)) = (index.get(src), index.get(dst)) else {
                let missing = if index.contains_key(src) { dst } else { src };
                return Err(HitsError::InvalidEdgeReference {
                    from: format!("{src:?}"),
                    to: format!("{dst:?}"),
                    missing: format!("{missing:?}"),
                });
            };

            nodes[from].out_neighbors.push(to);
            nodes[to].in_neighbors.push(from);
            num_links += 1;
        }

        debug!(nodes = nodes.len(), links = num_links, "built HITS working graph");

        Ok(Self { nodes, index })
    }

    /// Dense index of a caller identity
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node record at a dense index
    #[must_use]
    pub fn node(&self, idx: usize) -> Option<&WorkingNode> {
        self.nodes.get(idx)
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
