//! Path reconstruction from a traversal's incoming-edge records
//!
//! The iterator only records, per vertex, the edge that produced its best
//! cost. Following those records from a target back to the source yields the
//! shortest path once the target is settled.

use serde::Serialize;

use crate::graph::adjacency::{DiGraph, VertexId};
use crate::graph::algos::ShortestPathIterator;
use crate::graph::frontier::PriorityFrontier;
use crate::graph::traversal::Graph;

/// Edges leading from the traversal source to `target`, in traversal order.
///
/// For [`Direction::In`](crate::graph::Direction::In) traversals each edge
/// points towards the source. Returns `None` when `target` was never reached
/// and an empty path for the source itself. Called before `target` settles,
/// this is the best path known so far.
pub fn reconstruct_path<G, F>(
    iter: &ShortestPathIterator<'_, G, F>,
    target: G::Vertex,
) -> Option<Vec<G::Edge>>
where
    G: Graph,
    F: PriorityFrontier<G::Vertex>,
{
    iter.state(target)?;

    let direction = iter.direction();
    let mut edges = Vec::new();
    let mut current = target;
    while let Some(edge) = iter.incoming_edge(current) {
        current = direction.origin(edge);
        edges.push(edge.clone());
    }

    edges.reverse();
    Some(edges)
}

/// Advance until `target` is settled or the traversal is exhausted.
///
/// Returns the settled cost of `target`, or `None` if it is unreachable.
pub fn settle_until<G, F>(
    iter: &mut ShortestPathIterator<'_, G, F>,
    target: G::Vertex,
) -> Option<f64>
where
    G: Graph,
    F: PriorityFrontier<G::Vertex>,
{
    while !iter.is_settled(target) {
        iter.advance()?;
    }
    iter.cost(target)
}

/// One edge of a rendered path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Path result over a labelled graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub direction: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub vertices: Vec<String>,
    pub edges: Vec<PathEdge>,
    pub path_length: usize,
}

impl PathResult {
    /// Run `iter` until `target` settles and render the path with vertex labels
    pub fn search<F>(
        graph: &DiGraph,
        iter: &mut ShortestPathIterator<'_, DiGraph, F>,
        target: VertexId,
    ) -> Self
    where
        F: PriorityFrontier<VertexId>,
    {
        settle_until(iter, target);
        Self::from_traversal(graph, iter, target)
    }

    /// Render the path to `target` from a traversal that has already been
    /// driven. The path counts as found only once `target` is settled.
    pub fn from_traversal<F>(
        graph: &DiGraph,
        iter: &ShortestPathIterator<'_, DiGraph, F>,
        target: VertexId,
    ) -> Self
    where
        F: PriorityFrontier<VertexId>,
    {
        let label = |v: VertexId| graph.label(v).unwrap_or_default().to_string();
        let edges = if iter.is_settled(target) {
            reconstruct_path(iter, target)
        } else {
            None
        };

        let mut result = PathResult {
            from: label(iter.source()),
            to: label(target),
            direction: iter.direction().to_string(),
            found: edges.is_some(),
            cost: edges.as_ref().and_then(|_| iter.cost(target)),
            vertices: Vec::new(),
            edges: Vec::new(),
            path_length: 0,
        };

        if let Some(edges) = edges {
            let direction = iter.direction();
            result.vertices.push(label(iter.source()));
            for edge in &edges {
                result.vertices.push(label(direction.neighbor(edge)));
                result.edges.push(PathEdge {
                    from: label(edge.from),
                    to: label(edge.to),
                    weight: edge.weight,
                    label: edge.label.clone(),
                });
            }
            result.path_length = edges.len();
        }

        tracing::debug!(
            from = %result.from,
            to = %result.to,
            found = result.found,
            settled = iter.settled_count(),
            "path_search"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency::EdgeRef;
    use crate::graph::{DijkstraOptions, Direction};

    fn chain() -> (DiGraph, Vec<VertexId>) {
        let mut graph = DiGraph::new();
        let ids: Vec<VertexId> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|l| graph.add_vertex(*l))
            .collect();
        graph.add_edge(ids[0], ids[1], 1.0).unwrap();
        graph.add_edge(ids[1], ids[2], 1.0).unwrap();
        graph.add_edge(ids[0], ids[2], 5.0).unwrap();
        graph.add_edge(ids[2], ids[3], 1.0).unwrap();
        // E is isolated
        (graph, ids)
    }

    fn weighted<'a>() -> DijkstraOptions<'a, DiGraph> {
        DijkstraOptions::new().with_edge_cost(|e: &EdgeRef, _| e.weight)
    }

    #[test]
    fn test_reconstruct_path_follows_incoming_edges() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());
        while iter.advance().is_some() {}

        let path = reconstruct_path(&iter, ids[3]).unwrap();
        let hops: Vec<(VertexId, VertexId)> = path.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            hops,
            vec![(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[3])]
        );
    }

    #[test]
    fn test_reconstruct_path_for_source_and_unreached() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());
        while iter.advance().is_some() {}

        assert_eq!(reconstruct_path(&iter, ids[0]), Some(Vec::new()));
        assert_eq!(reconstruct_path(&iter, ids[4]), None);
    }

    #[test]
    fn test_reconstruct_path_in_direction() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(
            &graph,
            ids[3],
            weighted().with_direction(Direction::In),
        );
        while iter.advance().is_some() {}

        let path = reconstruct_path(&iter, ids[0]).unwrap();
        let hops: Vec<(VertexId, VertexId)> = path.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            hops,
            vec![(ids[2], ids[3]), (ids[1], ids[2]), (ids[0], ids[1])]
        );
    }

    #[test]
    fn test_settle_until_stops_early() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());

        assert_eq!(settle_until(&mut iter, ids[1]), Some(1.0));
        assert_eq!(iter.settled_count(), 2);
        assert!(!iter.is_exhausted());

        // Already settled: no further advancing
        assert_eq!(settle_until(&mut iter, ids[1]), Some(1.0));
        assert_eq!(iter.settled_count(), 2);

        assert_eq!(settle_until(&mut iter, ids[4]), None);
        assert!(iter.is_exhausted());
    }

    #[test]
    fn test_path_result_renders_labels() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());
        let result = PathResult::search(&graph, &mut iter, ids[3]);

        assert!(result.found);
        assert_eq!(result.cost, Some(3.0));
        assert_eq!(result.vertices, vec!["A", "B", "C", "D"]);
        assert_eq!(result.path_length, 3);
        assert_eq!(result.edges[2].from, "C");
        assert_eq!(result.edges[2].to, "D");
        assert_eq!(result.direction, "out");
    }

    #[test]
    fn test_path_result_not_found() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());
        let result = PathResult::search(&graph, &mut iter, ids[4]);

        assert!(!result.found);
        assert_eq!(result.cost, None);
        assert!(result.vertices.is_empty());
        assert_eq!(result.path_length, 0);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("cost").is_none());
        assert_eq!(json["found"], false);
    }

    #[test]
    fn test_from_traversal_does_not_advance() {
        let (graph, ids) = chain();
        let mut iter = ShortestPathIterator::new(&graph, ids[0], weighted());
        iter.advance();

        // B is reached but not settled yet
        let pending = PathResult::from_traversal(&graph, &iter, ids[1]);
        assert!(!pending.found);
        assert_eq!(pending.cost, None);
        assert_eq!(iter.settled_count(), 1);

        settle_until(&mut iter, ids[3]);
        let settled = iter.settled_count();
        let result = PathResult::from_traversal(&graph, &iter, ids[3]);
        assert!(result.found);
        assert_eq!(result.cost, Some(3.0));
        assert_eq!(iter.settled_count(), settled);
    }
}
