//! HITS on the MMDS textbook graph (Example 5.15)
//!
//! Run with: `RUST_LOG=hits_graph=debug cargo run --example mmds_example`

use anyhow::Result;
use hits_graph::{hits_with_config, HitsConfig, LabeledGraph};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== hits-graph: MMDS Example 5.15 ===\n");

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
    println!("Graph: {} nodes, {} edges", graph.num_nodes(), graph.num_edges());

    // Cap guards against non-converging input; this graph needs ~22 rounds
    let config = HitsConfig::new().with_max_iterations(1_000);
    let result = hits_with_config(&graph, &config)?;

    println!(
        "Converged: {} after {} iterations\n",
        result.converged, result.iterations
    );

    println!("Authorities:");
    for (id, score) in result.top_authorities(result.len()) {
        println!("  {id}: {score:.4}");
    }

    println!("\nHubs:");
    for (id, score) in result.top_hubs(result.len()) {
        println!("  {id}: {score:.4}");
    }

    Ok(())
}
