//! Link analysis algorithms
//!
//! `working` builds the dense index-based graph; `hits` iterates on it.

pub mod hits;
pub mod working;

pub use hits::{hits, hits_with_config, HitsResult, NodeScore};
pub use working::{WorkingGraph, WorkingNode};
