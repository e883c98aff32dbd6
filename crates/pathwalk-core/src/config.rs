//! Graph file loading
//!
//! A graph file declares vertices, weighted edges and default search
//! settings. The format follows the file extension: `.toml`, `.json`,
//! `.yaml` or `.yml`.

pub mod types;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::graph::{DiGraph, DijkstraOptions, EdgeRef, VertexId};
use crate::{bail_invalid, bail_unsupported};

pub use types::{EdgeSpec, GraphFile, SearchConfig, VertexSpec};

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(GraphFormat::Toml),
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            other => bail_unsupported!("graph file extension", other, "toml, json, yaml, yml"),
        }
    }
}

/// A built graph plus the per-vertex data the search needs
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: DiGraph,
    pub heuristics: HashMap<VertexId, f64>,
    pub search: SearchConfig,
}

impl GraphFile {
    /// Read and parse a graph file
    pub fn load(path: &Path) -> Result<Self> {
        let format = GraphFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            crate::error::PathwalkError::io_operation("read graph file", path.display(), e)
        })?;

        let file = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            vertices = file.vertices.len(),
            edges = file.edges.len(),
            "load_graph_file"
        );
        Ok(file)
    }

    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        let file: GraphFile = match format {
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Json => serde_json::from_str(content)?,
            GraphFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    /// Reject values the traversal cannot work with: empty ids, duplicate
    /// vertex declarations, negative or non-finite weights and heuristics
    pub fn validate(&self) -> Result<()> {
        let mut declared = HashSet::new();
        for vertex in &self.vertices {
            if vertex.id.trim().is_empty() {
                bail_invalid!("vertex id", "empty id");
            }
            if !declared.insert(vertex.id.as_str()) {
                bail_invalid!("vertex list", format!("duplicate id '{}'", vertex.id));
            }
            if let Some(h) = vertex.heuristic {
                if !h.is_finite() || h < 0.0 {
                    bail_invalid!("heuristic", format!("{} for vertex '{}'", h, vertex.id));
                }
            }
        }

        for edge in &self.edges {
            if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
                bail_invalid!(
                    "edge endpoint",
                    format!("'{}' -> '{}'", edge.from, edge.to)
                );
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                bail_invalid!(
                    "edge weight",
                    format!("{} on '{}' -> '{}'", edge.weight, edge.from, edge.to)
                );
            }
        }

        Ok(())
    }

    /// Validate and build the in-memory graph
    pub fn build(&self) -> Result<LoadedGraph> {
        self.validate()?;

        let mut graph = DiGraph::new();
        let mut heuristics = HashMap::new();

        for vertex in &self.vertices {
            let id = graph.add_vertex(vertex.id.as_str());
            if let Some(h) = vertex.heuristic {
                heuristics.insert(id, h);
            }
        }

        for edge in &self.edges {
            let from = graph.add_vertex(edge.from.as_str());
            let to = graph.add_vertex(edge.to.as_str());
            if self.directed {
                graph.add_labeled_edge(from, to, edge.weight, edge.label.clone())?;
            } else {
                graph.add_undirected_edge(from, to, edge.weight, edge.label.clone())?;
            }
        }

        Ok(LoadedGraph {
            graph,
            heuristics,
            search: self.search.clone(),
        })
    }
}

impl LoadedGraph {
    /// Traversal options for `search`, borrowing this graph's heuristic table
    pub fn options<'a>(&'a self, search: &SearchConfig) -> DijkstraOptions<'a, DiGraph> {
        let mut options = DijkstraOptions::new().with_direction(search.direction);

        if search.weighted {
            options = options.with_edge_cost(|edge: &EdgeRef, _| edge.weight);
        }

        if search.heuristic {
            let table = &self.heuristics;
            options = options.with_heuristic(move |v| table.get(&v).copied().unwrap_or(0.0));
        }

        if !search.exclude_labels.is_empty() {
            let excluded: HashSet<String> = search.exclude_labels.iter().cloned().collect();
            options = options.with_edge_filter(move |edge: &EdgeRef| {
                edge.label
                    .as_ref()
                    .map_or(true, |label| !excluded.contains(label))
            });
        }

        options
    }
}
