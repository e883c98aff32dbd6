//! Graph file type definitions

use serde::{Deserialize, Serialize};

use crate::graph::Direction;

/// A graph described in a TOML, JSON or YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    /// Edges are one-way when true; otherwise each edge is walkable both ways
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Declared vertices. Vertices mentioned only by edges are created implicitly.
    #[serde(default)]
    pub vertices: Vec<VertexSpec>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    /// Default traversal settings for this graph
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for GraphFile {
    fn default() -> Self {
        Self {
            directed: default_directed(),
            vertices: Vec::new(),
            edges: Vec::new(),
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSpec {
    pub id: String,

    /// Lower-bound estimate of the remaining cost from this vertex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,

    #[serde(default = "default_weight")]
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Traversal settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub direction: Direction,

    /// Use edge weights as costs (otherwise every edge costs 1)
    #[serde(default)]
    pub weighted: bool,

    /// Guide the search with the per-vertex heuristic values
    #[serde(default)]
    pub heuristic: bool,

    /// Skip edges carrying any of these labels
    #[serde(default)]
    pub exclude_labels: Vec<String>,
}

fn default_directed() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}
