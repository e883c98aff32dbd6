//! Path command: shortest path between two vertices

use std::path::Path;
use std::time::Instant;

use super::helpers::{advance_or_interrupt, install_interrupt_flag, load_graph};
use crate::cli::{Cli, OutputFormat, SearchArgs};
use pathwalk_core::error::Result;
use pathwalk_core::graph::{Direction, PathResult, ShortestPathIterator};
use pathwalk_core::trace_time;

/// Execute the path command
pub fn execute(cli: &Cli, file: &Path, from: &str, to: &str, args: &SearchArgs) -> Result<()> {
    let loaded = load_graph(file)?;
    let source = loaded.graph.require_vertex(from)?;
    let target = loaded.graph.require_vertex(to)?;
    let search = args.apply(&loaded.search);

    let mut iter = ShortestPathIterator::new(&loaded.graph, source, loaded.options(&search));
    let interrupted = install_interrupt_flag();
    let start = Instant::now();
    while !iter.is_settled(target) {
        if advance_or_interrupt(&mut iter, &interrupted)?.is_none() {
            break;
        }
    }

    let result = PathResult::from_traversal(&loaded.graph, &iter, target);
    trace_time!(start, "path", settled = iter.settled_count());

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_human(cli, &result),
    }

    Ok(())
}

fn output_human(cli: &Cli, result: &PathResult) {
    if !result.found {
        println!("No path found from {} to {}", result.from, result.to);
        return;
    }

    let arrow = if result.direction == Direction::In.to_string() {
        " <- "
    } else {
        " -> "
    };
    println!("{}", result.vertices.join(arrow));

    if cli.quiet {
        return;
    }

    for edge in &result.edges {
        let label = edge
            .label
            .as_ref()
            .map(|l| format!(" [{}]", l))
            .unwrap_or_default();
        println!("  {} -> {}  {}{}", edge.from, edge.to, edge.weight, label);
    }
    println!();
    println!(
        "Cost {} over {} edges",
        result.cost.unwrap_or_default(),
        result.path_length
    );
}
