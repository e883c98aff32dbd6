//! In-memory adjacency-list graph
//!
//! Vertices carry a string label, edges a weight and an optional label.
//! Each edge is stored once and indexed from both endpoints, so outbound and
//! inbound incidence queries are both a slice walk.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{PathwalkError, Result};
use crate::graph::traversal::{EdgePredicate, Graph, GraphEdge};
use crate::graph::types::Direction;

/// Vertex handle into a [`DiGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub usize);

/// Edge handle into a [`DiGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub usize);

/// A stored edge. Cloned out of incidence queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRef {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphEdge<VertexId> for EdgeRef {
    fn from(&self) -> VertexId {
        self.from
    }

    fn to(&self) -> VertexId {
        self.to
    }
}

#[derive(Debug, Clone, Default)]
struct VertexEntry {
    label: String,
    outbound: Vec<EdgeId>,
    inbound: Vec<EdgeId>,
}

/// Directed graph with labelled vertices and weighted edges.
/// Undirected edges are stored as one directed edge per orientation.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    vertices: Vec<VertexEntry>,
    edges: Vec<EdgeRef>,
    by_label: HashMap<String, VertexId>,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, or return the existing one with the same label
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.by_label.get(&label) {
            return id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexEntry {
            label: label.clone(),
            ..Default::default()
        });
        self.by_label.insert(label, id);
        id
    }

    /// Add a directed edge `from -> to`
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<EdgeId> {
        self.add_labeled_edge(from, to, weight, None)
    }

    pub fn add_labeled_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
        label: Option<String>,
    ) -> Result<EdgeId> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRef {
            id,
            from,
            to,
            weight,
            label,
        });
        self.vertices[from.0].outbound.push(id);
        self.vertices[to.0].inbound.push(id);
        Ok(id)
    }

    /// Add an undirected edge as the pair `a -> b`, `b -> a`
    pub fn add_undirected_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
        label: Option<String>,
    ) -> Result<(EdgeId, EdgeId)> {
        let forward = self.add_labeled_edge(a, b, weight, label.clone())?;
        let backward = self.add_labeled_edge(b, a, weight, label)?;
        Ok((forward, backward))
    }

    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    /// Resolve a label, failing with [`PathwalkError::VertexNotFound`]
    pub fn require_vertex(&self, label: &str) -> Result<VertexId> {
        self.vertex_by_label(label)
            .ok_or_else(|| PathwalkError::vertex_not_found(label))
    }

    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.get(vertex.0).map(|v| v.label.as_str())
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&EdgeRef> {
        self.edges.get(edge.0)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(PathwalkError::vertex_not_found(format!("#{}", vertex.0)))
        }
    }
}

impl Graph for DiGraph {
    type Vertex = VertexId;
    type Edge = EdgeRef;

    fn for_each_vertex(&self, visitor: &mut dyn FnMut(VertexId)) {
        (0..self.vertices.len()).for_each(|i| visitor(VertexId(i)));
    }

    fn incident_edges(
        &self,
        vertex: VertexId,
        direction: Direction,
        filter: Option<EdgePredicate<'_, EdgeRef>>,
    ) -> Vec<EdgeRef> {
        let Some(entry) = self.vertices.get(vertex.0) else {
            return Vec::new();
        };

        let ids = match direction {
            Direction::Out => &entry.outbound,
            Direction::In => &entry.inbound,
        };

        ids.iter()
            .map(|id| &self.edges[id.0])
            .filter(|&edge| filter.map_or(true, |accept| accept(edge)))
            .cloned()
            .collect()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertices.len()
    }
}
