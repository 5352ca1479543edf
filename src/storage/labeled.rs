//! Edge-list graph keyed by caller identities
//!
//! Nodes are stored densely in insertion order and edges as index pairs, so
//! enumeration order is always first-seen order.
//!
//! ```text
//! add_edge("a", "b"), add_edge("a", "c"), add_edge("b", "a")
//!
//!   nodes: ["a", "b", "c"]
//!   edges: [(0, 1), (0, 2), (1, 0)]
//! ```

use super::LinkSource;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Directed multigraph with arbitrary node identities
///
/// # Example
///
/// ```
/// use hits_graph::LabeledGraph;
///
/// let mut graph = LabeledGraph::new();
/// graph.add_edge("main", "parse_args");
/// graph.add_edge("main", "validate");
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<K> {
    /// Node identities in first-seen order
    nodes: Vec<K>,

    /// Identity -> position in `nodes`
    index: HashMap<K, usize>,

    /// (source, target) positions, one entry per edge
    edges: Vec<(usize, usize)>,
}

impl<K> LabeledGraph<K>
where
    K: Clone + Eq + Hash,
{
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Create empty graph with room for `nodes` nodes and `edges` edges
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Create graph from edge list
    ///
    /// Endpoints are registered in the order they first appear.
    ///
    /// # Example
    ///
    /// ```
    /// use hits_graph::LabeledGraph;
    ///
    /// let graph = LabeledGraph::from_edge_list(&[("a", "b"), ("b", "c")]);
    /// assert_eq!(graph.num_nodes(), 3);
    /// ```
    #[must_use]
    pub fn from_edge_list(edges: &[(K, K)]) -> Self {
        let mut graph = Self::with_capacity(edges.len(), edges.len());
        for (src, dst) in edges {
            graph.add_edge(src.clone(), dst.clone());
        }
        graph
    }

    /// Add a node, returning `false` if it already exists
    pub fn add_node(&mut self, node: K) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.intern(node);
        true
    }

    /// Add a directed edge `src -> dst`
    ///
    /// Unknown endpoints are added as nodes. Parallel edges are kept as
    /// separate entries.
    pub fn add_edge(&mut self, src: K, dst: K) {
        let src_idx = self.intern(src);
        let dst_idx = self.intern(dst);
        self.edges.push((src_idx, dst_idx));
    }

    /// Check whether a node is present
    #[must_use]
    pub fn contains_node(&self, node: &K) -> bool {
        self.index.contains_key(node)
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over edges as `(source, target)` identities
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.edges
            .iter()
            .map(move |&(src, dst)| (&self.nodes[src], &self.nodes[dst]))
    }

    fn intern(&mut self, node: K) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        idx
    }
}

impl<K> Default for LabeledGraph<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<(K, K)> for LabeledGraph<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (src, dst) in iter {
            graph.add_edge(src, dst);
        }
        graph
    }
}

impl<K> LinkSource for LabeledGraph<K>
where
    K: Clone + Eq + Hash + Debug,
{
    type Id = K;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &K> {
        self.nodes.iter()
    }

    fn links(&self) -> impl Iterator<Item = (&K, &K)> {
        self.edges()
    }
}
