//! Hubs and authorities (HITS) via alternating power iteration
//!
//! Based on Kleinberg (1999) "Authoritative Sources in a Hyperlinked Environment".
//!
//! # Algorithm
//!
//! Every node starts with `hub = authority = 1.0`. Each round:
//!
//! ```text
//! hub(v)       = Σ authority(w)   for v → w     (authorities of the previous round)
//! hub          = hub / max(hub)
//! authority(v) = Σ hub(u)         for u → v     (hubs of this round)
//! authority    = authority / max(authority)
//! ```
//!
//! The round's change for each vector is the L1 distance to the previous
//! round. Iteration stops once both changes are `<= epsilon`.
//!
//! There is no built-in iteration bound. Graphs whose score vectors oscillate,
//! or that have no edges at all (the round maximum is zero and every score
//! becomes `NaN`), iterate forever under the default configuration; use
//! [`HitsConfig::with_max_iterations`] or [`Normalization::Guarded`] when
//! such input is possible.

use super::working::{WorkingGraph, WorkingNode};
use crate::config::{sanitize_epsilon, HitsConfig, Normalization};
use crate::error::Result;
use crate::storage::LinkSource;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, instrument, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final scores of one node
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeScore {
    /// How strongly the node is pointed to by good hubs
    pub authority: f64,
    /// How strongly the node points to good authorities
    pub hub: f64,
}

/// Result of a HITS run, keyed by the caller's node identities
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitsResult<K: Eq + Hash> {
    /// One entry per input node
    pub scores: HashMap<K, NodeScore>,
    /// Number of rounds performed
    pub iterations: usize,
    /// Whether both changes fell to `epsilon` (false only when capped)
    pub converged: bool,
}

impl<K: Eq + Hash> HitsResult<K> {
    /// Scores of a node
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&NodeScore> {
        self.scores.get(id)
    }

    /// Number of scored nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check whether no nodes were scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(id, scores)` in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &NodeScore)> + '_ {
        self.scores.iter()
    }

    /// The `n` nodes with the highest authority, descending
    ///
    /// `NaN` scores rank last; ties are returned in unspecified order.
    #[must_use]
    pub fn top_authorities(&self, n: usize) -> Vec<(&K, f64)> {
        self.top_by(n, |score| score.authority)
    }

    /// The `n` nodes with the highest hub score, descending
    ///
    /// `NaN` scores rank last; ties are returned in unspecified order.
    #[must_use]
    pub fn top_hubs(&self, n: usize) -> Vec<(&K, f64)> {
        self.top_by(n, |score| score.hub)
    }

    /// Consume the result, keeping only the score map
    #[must_use]
    pub fn into_scores(self) -> HashMap<K, NodeScore> {
        self.scores
    }

    fn top_by(&self, n: usize, key: impl Fn(&NodeScore) -> f64) -> Vec<(&K, f64)> {
        let mut ranked: Vec<(&K, f64)> = self.scores.iter().map(|(id, s)| (id, key(s))).collect();
        ranked.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));
        ranked.truncate(n);
        ranked
    }
}

fn rank_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}

/// Compute hub and authority scores for every node
///
/// `epsilon` bounds the summed per-node change of each score vector between
/// rounds. `None` or a non-finite value selects [`DEFAULT_EPSILON`]. Zero or
/// negative values are accepted, but may never be satisfied.
///
/// Runs without an iteration cap and with [`Normalization::Verbatim`]; see
/// [`hits_with_config`] to change either.
///
/// [`DEFAULT_EPSILON`]: crate::DEFAULT_EPSILON
///
/// # Errors
///
/// Returns [`HitsError`](crate::HitsError) if the graph repeats a node or has
/// an edge to an unknown node.
///
/// # Example
///
/// ```
/// use hits_graph::{hits, LabeledGraph};
///
/// let graph = LabeledGraph::from_edge_list(&[("a", "b"), ("a", "c"), ("b", "c")]);
/// let result = hits(&graph, None).unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert!((result.get(&"a").unwrap().hub - 1.0).abs() < 1e-6);
/// assert!((result.get(&"c").unwrap().authority - 1.0).abs() < 1e-6);
/// ```
pub fn hits<G>(graph: &G, epsilon: Option<f64>) -> Result<HitsResult<G::Id>>
where
    G: LinkSource,
{
    let config = HitsConfig {
        epsilon: sanitize_epsilon(epsilon),
        ..HitsConfig::default()
    };
    hits_with_config(graph, &config)
}

/// Compute hub and authority scores with explicit settings
///
/// When `config.max_iterations` is reached before convergence the current
/// scores are returned with `converged == false`.
///
/// # Errors
///
/// Returns [`HitsError`](crate::HitsError) if the graph repeats a node or has
/// an edge to an unknown node.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn hits_with_config<G>(graph: &G, config: &HitsConfig) -> Result<HitsResult<G::Id>>
where
    G: LinkSource,
{
    let mut working = WorkingGraph::build(graph)?;
    let (iterations, converged) = iterate(&mut working.nodes, config);

    Ok(project(graph, &working, iterations, converged))
}

/// Run rounds until converged or capped, returning `(iterations, converged)`
fn iterate(nodes: &mut [WorkingNode], config: &HitsConfig) -> (usize, bool) {
    if nodes.is_empty() {
        return (0, true);
    }

    let epsilon = sanitize_epsilon(Some(config.epsilon));
    let mut iterations = 0;

    loop {
        if config.max_iterations.is_some_and(|cap| iterations >= cap) {
            warn!(iterations, epsilon, "HITS stopped at iteration cap before converging");
            return (iterations, false);
        }
        iterations += 1;

        let hub_change = update(nodes, Score::Hub, config.normalization);
        let authority_change = update(nodes, Score::Authority, config.normalization);
        trace!(iteration = iterations, hub_change, authority_change, "HITS round");

        if authority_change <= epsilon && hub_change <= epsilon {
            debug!(iterations, "HITS converged");
            return (iterations, true);
        }
    }
}

/// Which score a pass writes
#[derive(Debug, Clone, Copy)]
enum Score {
    Hub,
    Authority,
}

impl Score {
    /// Neighbors whose opposite score feeds this one
    fn neighbors(self, node: &WorkingNode) -> &[usize] {
        match self {
            Self::Hub => &node.out_neighbors,
            Self::Authority => &node.in_neighbors,
        }
    }

    /// The opposite score, read from a neighbor
    fn input(self, node: &WorkingNode) -> f64 {
        match self {
            Self::Hub => node.authority,
            Self::Authority => node.hub,
        }
    }

    /// (current, previous) slots of this score
    fn slots(self, node: &mut WorkingNode) -> (&mut f64, &mut f64) {
        match self {
            Self::Hub => (&mut node.hub, &mut node.prev_hub),
            Self::Authority => (&mut node.authority, &mut node.prev_authority),
        }
    }
}

/// Recompute one score vector in place, normalize it, and return its change
///
/// A hub pass reads only authorities and an authority pass reads only hubs,
/// so writing in place never feeds a fresh value back into the same pass.
fn update(nodes: &mut [WorkingNode], score: Score, normalization: Normalization) -> f64 {
    let mut max = f64::NEG_INFINITY;

    for i in 0..nodes.len() {
        let sum: f64 = score
            .neighbors(&nodes[i])
            .iter()
            .map(|&j| score.input(&nodes[j]))
            .sum();

        if sum > max {
            max = sum;
        }

        let (value, prev) = score.slots(&mut nodes[i]);
        *prev = *value;
        *value = sum;
    }

    normalize(nodes, score, normalization.divisor(max))
}

/// Divide by the round maximum and sum `|value - prev|`
fn normalize(nodes: &mut [WorkingNode], score: Score, divisor: Option<f64>) -> f64 {
    let mut change = 0.0;

    for node in nodes.iter_mut() {
        let (value, prev) = score.slots(node);
        if let Some(divisor) = divisor {
            *value /= divisor;
        }
        change += (*value - *prev).abs();
    }

    change
}

/// Map dense scores back onto the caller's identities
fn project<G>(
    graph: &G,
    working: &WorkingGraph<G::Id>,
    iterations: usize,
    converged: bool,
) -> HitsResult<G::Id>
where
    G: LinkSource,
{
    let mut scores = HashMap::with_capacity(working.num_nodes());

    for id in graph.nodes() {
        if let Some(node) = working.index_of(id).and_then(|idx| working.node(idx)) {
            scores.insert(
                id.clone(),
                NodeScore {
                    authority: node.authority,
                    hub: node.hub,
                },
            );
        }
    }

    HitsResult {
        scores,
        iterations,
        converged,
    }
}
