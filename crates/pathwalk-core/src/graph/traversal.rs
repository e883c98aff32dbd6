use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::types::Direction;

/// Endpoint access for a graph edge
pub trait GraphEdge<V> {
    fn from(&self) -> V;
    fn to(&self) -> V;
}

/// Predicate used to exclude edges from an incidence query
pub type EdgePredicate<'a, E> = &'a dyn Fn(&E) -> bool;

/// Read-only view of a graph, as consumed by the traversal engine
pub trait Graph {
    /// Cheap vertex handle
    type Vertex: Copy + Eq + Hash + Debug;
    /// Cheap edge handle; cloned into traversal state as the incoming edge
    type Edge: GraphEdge<Self::Vertex> + Clone + Debug;

    /// Visit every vertex, in no particular order
    fn for_each_vertex(&self, visitor: &mut dyn FnMut(Self::Vertex));

    /// Edges incident to `vertex` in `direction`: edges whose `from` is the
    /// vertex for [`Direction::Out`], edges whose `to` is the vertex for
    /// [`Direction::In`]. Edges rejected by `filter` are left out.
    fn incident_edges(
        &self,
        vertex: Self::Vertex,
        direction: Direction,
        filter: Option<EdgePredicate<'_, Self::Edge>>,
    ) -> Vec<Self::Edge>;

    fn contains_vertex(&self, vertex: Self::Vertex) -> bool {
        let mut found = false;
        self.for_each_vertex(&mut |v| found |= v == vertex);
        found
    }
}
