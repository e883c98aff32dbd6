//! Resumable Dijkstra / A* traversal
//!
//! [`ShortestPathIterator`] settles one vertex per [`advance`] call, in
//! non-decreasing cost order, so callers can stop as soon as they have what
//! they need (a target settled, a cost bound crossed, a deadline passed).
//!
//! Each vertex moves through unvisited → reached → settled and never back.
//! Reached vertices sit in the frontier with a tentative cost that the
//! update policy may lower; settled vertices are frozen.
//!
//! Preconditions that are not checked: edge costs must be non-negative and
//! the heuristic admissible, otherwise settle order and optimality silently
//! degrade.
//!
//! [`advance`]: ShortestPathIterator::advance

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{PathwalkError, Result};
use crate::graph::frontier::{BinaryFrontier, PriorityFrontier};
use crate::graph::traversal::Graph;
use crate::graph::types::{Direction, NodeState, NodeStatus};

/// Label used for traversals that do not set their own
pub const DEFAULT_STATE_TAG: &str = "_dijkstra";

/// Decides whether a candidate path replaces the best known path to a reached vertex.
/// Arguments: previous cost, candidate cost, previous incoming edge, candidate edge.
pub type UpdatePolicy<'a, E> = Box<dyn Fn(f64, f64, Option<&E>, &E) -> bool + 'a>;
/// Cost of traversing one edge, given the cost accumulated so far
pub type EdgeCostFn<'a, E> = Box<dyn Fn(&E, f64) -> f64 + 'a>;
/// Additive lookahead estimate for a vertex
pub type HeuristicFn<'a, V> = Box<dyn Fn(V) -> f64 + 'a>;
/// Fired on every reach and re-reach: vertex, incoming edge, cost
pub type ReachHook<'a, V, E> = Box<dyn FnMut(V, Option<&E>, f64) + 'a>;
/// Fired once per settled vertex
pub type SettleHook<'a, V> = Box<dyn FnMut(V) + 'a>;
/// Edges for which this returns false are not relaxed
pub type EdgeFilterFn<'a, E> = Box<dyn Fn(&E) -> bool + 'a>;

fn strictly_lower<E>(prev_cost: f64, new_cost: f64, _prev: Option<&E>, _candidate: &E) -> bool {
    new_cost < prev_cost
}

fn unit_edge_cost<E>(_edge: &E, _cost_so_far: f64) -> f64 {
    1.0
}

fn zero_heuristic<V>(_vertex: V) -> f64 {
    0.0
}

/// Traversal policy: direction, cost model, heuristic, filter and hooks
pub struct DijkstraOptions<'a, G: Graph> {
    /// Label carried into log events to tell interleaved traversals apart
    pub state_tag: String,
    pub direction: Direction,
    /// Default: candidate cost strictly lower than the current one. The edge
    /// arguments are ignored by the default.
    pub should_update_key: UpdatePolicy<'a, G::Edge>,
    /// Default: every edge costs 1
    pub edge_cost: EdgeCostFn<'a, G::Edge>,
    /// Default: 0 for every vertex (plain Dijkstra)
    pub heuristic: HeuristicFn<'a, G::Vertex>,
    pub on_reach: Option<ReachHook<'a, G::Vertex, G::Edge>>,
    pub on_settle: Option<SettleHook<'a, G::Vertex>>,
    pub edge_filter: Option<EdgeFilterFn<'a, G::Edge>>,
}

impl<'a, G: Graph> Default for DijkstraOptions<'a, G>
where
    G::Edge: 'a,
    G::Vertex: 'a,
{
    fn default() -> Self {
        Self {
            state_tag: DEFAULT_STATE_TAG.to_string(),
            direction: Direction::Out,
            should_update_key: Box::new(strictly_lower::<G::Edge>),
            edge_cost: Box::new(unit_edge_cost::<G::Edge>),
            heuristic: Box::new(zero_heuristic::<G::Vertex>),
            on_reach: None,
            on_settle: None,
            edge_filter: None,
        }
    }
}

impl<'a, G: Graph> DijkstraOptions<'a, G>
where
    G::Edge: 'a,
    G::Vertex: 'a,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state_tag(mut self, tag: impl Into<String>) -> Self {
        self.state_tag = tag.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_update_policy(
        mut self,
        policy: impl Fn(f64, f64, Option<&G::Edge>, &G::Edge) -> bool + 'a,
    ) -> Self {
        self.should_update_key = Box::new(policy);
        self
    }

    pub fn with_edge_cost(mut self, cost: impl Fn(&G::Edge, f64) -> f64 + 'a) -> Self {
        self.edge_cost = Box::new(cost);
        self
    }

    pub fn with_heuristic(mut self, heuristic: impl Fn(G::Vertex) -> f64 + 'a) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    pub fn on_reach(mut self, hook: impl FnMut(G::Vertex, Option<&G::Edge>, f64) + 'a) -> Self {
        self.on_reach = Some(Box::new(hook));
        self
    }

    pub fn on_settle(mut self, hook: impl FnMut(G::Vertex) + 'a) -> Self {
        self.on_settle = Some(Box::new(hook));
        self
    }

    pub fn with_edge_filter(mut self, filter: impl Fn(&G::Edge) -> bool + 'a) -> Self {
        self.edge_filter = Some(Box::new(filter));
        self
    }
}

impl<G: Graph> fmt::Debug for DijkstraOptions<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DijkstraOptions")
            .field("state_tag", &self.state_tag)
            .field("direction", &self.direction)
            .field("on_reach", &self.on_reach.is_some())
            .field("on_settle", &self.on_settle.is_some())
            .field("edge_filter", &self.edge_filter.is_some())
            .finish_non_exhaustive()
    }
}

/// Step-wise single-source shortest-path search over a [`Graph`]
pub struct ShortestPathIterator<'a, G: Graph, F = BinaryFrontier<<G as Graph>::Vertex>> {
    graph: &'a G,
    source: G::Vertex,
    options: DijkstraOptions<'a, G>,
    frontier: F,
    states: HashMap<G::Vertex, NodeState<G::Edge>>,
    settled: usize,
}

impl<'a, G: Graph> ShortestPathIterator<'a, G> {
    /// Start a traversal from `source` with the default frontier.
    ///
    /// `source` must be a vertex of `graph`; debug builds assert it.
    pub fn new(graph: &'a G, source: G::Vertex, options: DijkstraOptions<'a, G>) -> Self {
        Self::with_frontier(graph, source, options, BinaryFrontier::new())
    }

    /// Like [`new`](Self::new), but reports a foreign source as an error in all builds
    pub fn try_new(graph: &'a G, source: G::Vertex, options: DijkstraOptions<'a, G>) -> Result<Self> {
        if !graph.contains_vertex(source) {
            return Err(PathwalkError::vertex_not_found(format!("{:?}", source)));
        }
        Ok(Self::new(graph, source, options))
    }
}

impl<'a, G, F> ShortestPathIterator<'a, G, F>
where
    G: Graph,
    F: PriorityFrontier<G::Vertex>,
{
    /// Start a traversal driving a caller-supplied frontier. The frontier
    /// should be empty; anything already queued is discarded.
    pub fn with_frontier(
        graph: &'a G,
        source: G::Vertex,
        options: DijkstraOptions<'a, G>,
        frontier: F,
    ) -> Self {
        debug_assert!(
            graph.contains_vertex(source),
            "traversal source {:?} is not a vertex of the graph",
            source
        );

        let mut iter = Self {
            graph,
            source,
            options,
            frontier,
            states: HashMap::new(),
            settled: 0,
        };
        iter.init_traversal();
        iter
    }

    fn init_traversal(&mut self) {
        self.states.clear();
        while self.frontier.pop().is_some() {}
        self.settled = 0;

        tracing::debug!(
            tag = %self.options.state_tag,
            source = ?self.source,
            direction = %self.options.direction,
            "init_traversal"
        );

        self.frontier.insert(self.source, 0.0);
        self.reach(self.source, None, 0.0);
    }

    /// Settle the next vertex and relax its edges.
    ///
    /// Returns `None` once the frontier is exhausted, and keeps returning
    /// `None` without touching any state on later calls.
    pub fn advance(&mut self) -> Option<G::Vertex> {
        let (current, total_cost) = self.frontier.pop()?;
        self.settle(current, total_cost);

        let direction = self.options.direction;
        let edges = self
            .graph
            .incident_edges(current, direction, self.options.edge_filter.as_deref());

        for edge in edges {
            let neighbor = direction.neighbor(&edge);
            let candidate = total_cost
                + (self.options.edge_cost)(&edge, total_cost)
                + (self.options.heuristic)(neighbor);

            match self.states.get(&neighbor) {
                Some(state) if state.is_settled() => {}
                None => {
                    self.frontier.insert(neighbor, candidate);
                    self.reach(neighbor, Some(edge), candidate);
                }
                Some(state) => {
                    let improves = (self.options.should_update_key)(
                        state.cost,
                        candidate,
                        state.incoming_edge.as_ref(),
                        &edge,
                    );
                    if improves {
                        self.frontier.update_key(neighbor, candidate);
                        self.reach(neighbor, Some(edge), candidate);
                    }
                }
            }
        }

        Some(current)
    }

    fn reach(&mut self, vertex: G::Vertex, incoming_edge: Option<G::Edge>, cost: f64) {
        let state = self.states.entry(vertex).or_insert_with(|| NodeState {
            status: NodeStatus::Reached,
            cost,
            incoming_edge: None,
        });
        state.status = NodeStatus::Reached;
        state.cost = cost;
        state.incoming_edge = incoming_edge;

        tracing::trace!(tag = %self.options.state_tag, vertex = ?vertex, cost, "reach");

        if let Some(hook) = self.options.on_reach.as_mut() {
            hook(vertex, state.incoming_edge.as_ref(), cost);
        }
    }

    fn settle(&mut self, vertex: G::Vertex, cost: f64) {
        let state = self.states.entry(vertex).or_insert_with(|| NodeState {
            status: NodeStatus::Reached,
            cost,
            incoming_edge: None,
        });
        state.status = NodeStatus::Settled;
        self.settled += 1;

        tracing::trace!(tag = %self.options.state_tag, vertex = ?vertex, cost, "settle");

        if let Some(hook) = self.options.on_settle.as_mut() {
            hook(vertex);
        }
    }

    pub fn source(&self) -> G::Vertex {
        self.source
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn state_tag(&self) -> &str {
        &self.options.state_tag
    }

    /// Recorded state of a vertex; `None` means unvisited
    pub fn state(&self, vertex: G::Vertex) -> Option<&NodeState<G::Edge>> {
        self.states.get(&vertex)
    }

    pub fn status(&self, vertex: G::Vertex) -> Option<NodeStatus> {
        self.state(vertex).map(|s| s.status)
    }

    /// Best known cost, final once the vertex is settled
    pub fn cost(&self, vertex: G::Vertex) -> Option<f64> {
        self.state(vertex).map(|s| s.cost)
    }

    pub fn incoming_edge(&self, vertex: G::Vertex) -> Option<&G::Edge> {
        self.state(vertex).and_then(|s| s.incoming_edge.as_ref())
    }

    pub fn is_settled(&self, vertex: G::Vertex) -> bool {
        self.state(vertex).is_some_and(NodeState::is_settled)
    }

    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Number of reached-but-unsettled vertices
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }
}

impl<G, F> Iterator for ShortestPathIterator<'_, G, F>
where
    G: Graph,
    F: PriorityFrontier<G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl<G, F> FusedIterator for ShortestPathIterator<'_, G, F>
where
    G: Graph,
    F: PriorityFrontier<G::Vertex>,
{
}

impl<G: Graph, F> fmt::Debug for ShortestPathIterator<'_, G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathIterator")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("visited", &self.states.len())
            .field("settled", &self.settled)
            .finish_non_exhaustive()
    }
}
