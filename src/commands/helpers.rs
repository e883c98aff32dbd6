//! Shared helpers for graph commands

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pathwalk_core::config::{GraphFile, LoadedGraph};
use pathwalk_core::error::{PathwalkError, Result};
use pathwalk_core::graph::{DiGraph, ShortestPathIterator};

/// Load, validate and build a graph file
pub fn load_graph(file: &Path) -> Result<LoadedGraph> {
    let loaded = GraphFile::load(file)?.build()?;
    tracing::debug!(
        vertices = loaded.graph.vertex_count(),
        edges = loaded.graph.edge_count(),
        "build_graph"
    );
    Ok(loaded)
}

/// Flag set by Ctrl-C; traversals poll it between steps
pub fn install_interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    // A second handler in the same process is refused; the first one still covers us
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    interrupted
}

/// Advance once unless an interrupt is pending
pub fn advance_or_interrupt(
    iter: &mut ShortestPathIterator<'_, DiGraph>,
    interrupted: &AtomicBool,
) -> Result<Option<pathwalk_core::graph::VertexId>> {
    if interrupted.load(Ordering::SeqCst) {
        tracing::warn!(settled = iter.settled_count(), "traversal interrupted");
        return Err(PathwalkError::Interrupted {
            settled: iter.settled_count(),
        });
    }
    Ok(iter.advance())
}
