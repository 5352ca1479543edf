//! Integration tests for hits-graph
//!
//! Tests real-world usage scenarios (link graphs, citation graphs, custom graph stores)

use hits_graph::{hits, hits_with_config, HitsConfig, HitsError, LabeledGraph, LinkSource};
use std::collections::HashMap;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_mmds_textbook_example() {
    // Example 5.15 from Mining of Massive Datasets
    let graph: LabeledGraph<String> = [
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "a"),
        ("b", "d"),
        ("c", "e"),
        ("d", "b"),
        ("d", "c"),
    ]
    .into_iter()
    .map(|(s, t)| (s.to_string(), t.to_string()))
    .collect();

    let result = hits(&graph, None).unwrap();

    let score = |id: &str| *result.get(&id.to_string()).unwrap();

    assert_close(score("a").authority, 0.2087);
    assert_close(score("a").hub, 1.0);
    assert_close(score("b").authority, 1.0);
    assert_close(score("b").hub, 0.3583);
    assert_close(score("c").authority, 1.0);
    assert_close(score("c").hub, 0.0);
    assert_close(score("d").authority, 0.7913);
    assert_close(score("d").hub, 0.7165);
    assert_close(score("e").authority, 0.0);
    assert_close(score("e").hub, 0.0);
}

#[test]
fn test_empty_graph_has_result() {
    let graph: LabeledGraph<String> = LabeledGraph::new();
    let result = hits(&graph, None).unwrap();

    assert!(result.is_empty());
    assert!(result.converged);
    assert_eq!(result.iterations, 0);
}

#[test]
fn test_citation_graph() {
    // Survey papers cite many originals; originals are cited by surveys
    let mut graph = LabeledGraph::new();
    for survey in ["survey-2019", "survey-2021"] {
        for paper in ["kleinberg-99", "page-98", "brin-98"] {
            graph.add_edge(survey, paper);
        }
    }
    graph.add_edge("blog-post", "kleinberg-99");

    let result = hits(&graph, None).unwrap();
    assert!(result.converged);

    let top_authority = result.top_authorities(1);
    assert_eq!(*top_authority[0].0, "kleinberg-99");

    let surveys = result.get(&"survey-2019").unwrap();
    let blog = result.get(&"blog-post").unwrap();
    assert_close(surveys.hub, 1.0);
    assert!(blog.hub < surveys.hub);
    assert_close(surveys.authority, 0.0);
}

#[test]
fn test_scores_keyed_by_caller_identity() {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Page {
        host: &'static str,
        path: &'static str,
    }

    let home = Page { host: "example.org", path: "/" };
    let docs = Page { host: "example.org", path: "/docs" };
    let mirror = Page { host: "mirror.net", path: "/docs" };

    let graph = LabeledGraph::from_edge_list(&[
        (home.clone(), docs.clone()),
        (mirror.clone(), docs.clone()),
    ]);

    let result = hits(&graph, Some(1e-10)).unwrap();

    assert_eq!(result.len(), 3);
    assert_close(result.get(&docs).unwrap().authority, 1.0);
    assert_close(result.get(&home).unwrap().hub, 1.0);
    assert_close(result.get(&mirror).unwrap().hub, 1.0);
}

/// Adjacency-map store owned by the caller
struct AdjacencyStore {
    order: Vec<u64>,
    out: HashMap<u64, Vec<u64>>,
    flat: Vec<(u64, u64)>,
}

impl AdjacencyStore {
    fn new(order: Vec<u64>, out: HashMap<u64, Vec<u64>>) -> Self {
        let flat = order
            .iter()
            .flat_map(|src| {
                out.get(src)
                    .into_iter()
                    .flatten()
                    .map(move |dst| (*src, *dst))
            })
            .collect();
        Self { order, out, flat }
    }
}

impl LinkSource for AdjacencyStore {
    type Id = u64;

    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &u64> {
        self.order.iter()
    }

    fn links(&self) -> impl Iterator<Item = (&u64, &u64)> {
        self.flat.iter().map(|(s, t)| (s, t))
    }
}

#[test]
fn test_custom_link_source() {
    let mut out = HashMap::new();
    out.insert(1, vec![2, 3]);
    out.insert(2, vec![3]);
    out.insert(3, vec![1]);
    let store = AdjacencyStore::new(vec![1, 2, 3], out);
    assert_eq!(store.out.len(), 3);

    let result = hits(&store, None).unwrap();
    assert!(result.converged);
    assert_eq!(result.len(), 3);

    // Node 3 has the most incoming links
    let top = result.top_authorities(1);
    assert_eq!(*top[0].0, 3);
    // Node 1 points at both of the strongest authorities
    let top_hub = result.top_hubs(1);
    assert_eq!(*top_hub[0].0, 1);
}

#[test]
fn test_custom_link_source_dangling_edge() {
    let mut out = HashMap::new();
    out.insert(1, vec![42]);
    let store = AdjacencyStore::new(vec![1], out);

    let err = hits(&store, None).unwrap_err();
    assert_eq!(
        err,
        HitsError::InvalidEdgeReference {
            from: "1".to_string(),
            to: "42".to_string(),
            missing: "42".to_string(),
        }
    );
}

#[test]
fn test_capped_run_reports_not_converged() {
    let graph = LabeledGraph::from_edge_list(&[
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "a"),
        ("b", "d"),
        ("c", "e"),
        ("d", "b"),
        ("d", "c"),
    ]);

    let config = HitsConfig::new().with_max_iterations(3);
    let result = hits_with_config(&graph, &config).unwrap();

    assert_eq!(result.iterations, 3);
    assert!(!result.converged);
    assert_eq!(result.len(), 5);
}

#[test]
fn test_chain_scores() {
    // 0 → 1 → 2 → 3
    let edges: Vec<_> = (0_u32..3).map(|i| (i, i + 1)).collect();
    let graph = LabeledGraph::from_edge_list(&edges);

    let result = hits(&graph, None).unwrap();

    assert_close(result.get(&0).unwrap().authority, 0.0);
    assert_close(result.get(&3).unwrap().hub, 0.0);
    for i in 0..3 {
        assert_close(result.get(&i).unwrap().hub, 1.0);
        assert_close(result.get(&(i + 1)).unwrap().authority, 1.0);
    }
}
