//! hits-graph: hubs and authorities for directed graphs
//!
//! # Overview
//!
//! hits-graph computes Kleinberg's HITS scores for any directed graph that can
//! enumerate its nodes and edges. Every node receives an *authority* score
//! (pointed to by good hubs) and a *hub* score (points to good authorities),
//! each normalized so the largest value of a round is `1.0`.
//!
//! # Quick Start
//!
//! ```
//! use hits_graph::{hits, LabeledGraph};
//!
//! let mut graph = LabeledGraph::new();
//! graph.add_edge("index", "guide");   // index links to guide
//! graph.add_edge("index", "api");     // index links to api
//! graph.add_edge("blog", "guide");    // blog links to guide
//!
//! let result = hits(&graph, None).unwrap();
//!
//! let guide = result.get(&"guide").unwrap();
//! assert!((guide.authority - 1.0).abs() < 1e-6);
//! assert!((result.get(&"index").unwrap().hub - 1.0).abs() < 1e-6);
//! ```
//!
//! # Architecture
//!
//! - **Storage**: [`LinkSource`] trait for caller-owned graphs, plus
//!   [`LabeledGraph`] as a ready-made edge-list implementation
//! - **Adapter**: [`WorkingGraph`] maps identities to dense indices once
//! - **Solver**: [`hits`] / [`hits_with_config`] run the power iteration and
//!   project scores back onto the caller's identities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{hits, hits_with_config, HitsResult, NodeScore, WorkingGraph, WorkingNode};
pub use config::{sanitize_epsilon, HitsConfig, Normalization, DEFAULT_EPSILON};
pub use error::{HitsError, Result};
pub use storage::{LabeledGraph, LinkSource};
