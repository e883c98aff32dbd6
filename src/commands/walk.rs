//! Walk command: settle vertices in order of distance from a source

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use serde::Serialize;

use super::helpers::{advance_or_interrupt, install_interrupt_flag, load_graph};
use crate::cli::{Cli, OutputFormat, SearchArgs};
use pathwalk_core::bail_usage;
use pathwalk_core::error::Result;
use pathwalk_core::graph::{DiGraph, ShortestPathIterator, VertexId};
use pathwalk_core::trace_time;

/// One settled vertex, in settle order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkEntry {
    pub step: usize,
    pub vertex: String,
    pub cost: f64,
    /// Vertex the best edge arrived from; absent for the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_label: Option<String>,
}

/// Execute the walk command
pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    limit: Option<usize>,
    args: &SearchArgs,
) -> Result<()> {
    if limit == Some(0) {
        bail_usage!("--limit must be at least 1");
    }

    let loaded = load_graph(file)?;
    let source = loaded.graph.require_vertex(from)?;
    let search = args.apply(&loaded.search);

    let mut iter = ShortestPathIterator::new(&loaded.graph, source, loaded.options(&search));
    let interrupted = install_interrupt_flag();
    let start = Instant::now();
    let entries = collect_walk(&mut iter, limit, &interrupted)?;
    let exhausted = iter.is_exhausted();
    trace_time!(start, "walk", settled = entries.len(), exhausted = exhausted);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": from,
                "direction": search.direction,
                "settled": entries,
                "exhausted": exhausted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, &entries, exhausted, iter.frontier_len()),
    }

    Ok(())
}

/// Settle up to `limit` vertices, recording each with its cost and best edge
pub fn collect_walk(
    iter: &mut ShortestPathIterator<'_, DiGraph>,
    limit: Option<usize>,
    interrupted: &AtomicBool,
) -> Result<Vec<WalkEntry>> {
    let graph = iter.graph();
    let direction = iter.direction();
    let label = |v: VertexId| graph.label(v).unwrap_or_default().to_string();

    let mut entries = Vec::new();
    while limit.map_or(true, |max| entries.len() < max) {
        let Some(vertex) = advance_or_interrupt(iter, interrupted)? else {
            break;
        };

        let edge = iter.incoming_edge(vertex);
        entries.push(WalkEntry {
            step: entries.len() + 1,
            vertex: label(vertex),
            cost: iter.cost(vertex).unwrap_or_default(),
            via: edge.map(|e| label(direction.origin(e))),
            edge_label: edge.and_then(|e| e.label.clone()),
        });
    }

    Ok(entries)
}

fn output_human(cli: &Cli, entries: &[WalkEntry], exhausted: bool, queued: usize) {
    for entry in entries {
        let via = entry
            .via
            .as_ref()
            .map(|v| format!("  (via {})", v))
            .unwrap_or_default();
        let label = entry
            .edge_label
            .as_ref()
            .map(|l| format!(" [{}]", l))
            .unwrap_or_default();
        println!("{:>4}  {}  {}{}{}", entry.step, entry.vertex, entry.cost, via, label);
    }

    if !cli.quiet {
        println!();
        if exhausted {
            println!("Settled {} vertices", entries.len());
        } else {
            println!(
                "Settled {} vertices ({} still queued)",
                entries.len(),
                queued
            );
        }
    }
}
