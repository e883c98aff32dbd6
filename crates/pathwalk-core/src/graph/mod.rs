//! Graph interfaces and shortest-path traversal
//!
//! - `traversal`: the read-only [`Graph`] interface the engine consumes
//! - `frontier`: the decrease-key priority queue contract and default heap
//! - `algos`: the resumable Dijkstra / A* iterator
//! - `adjacency`: an in-memory labelled graph implementing [`Graph`]
//! - `path`: caller-side path reconstruction from incoming-edge records

pub mod adjacency;
pub mod algos;
pub mod frontier;
pub mod path;
pub mod traversal;
pub mod types;

pub use adjacency::{DiGraph, EdgeId, EdgeRef, VertexId};
pub use algos::{DijkstraOptions, ShortestPathIterator, DEFAULT_STATE_TAG};
pub use frontier::{BinaryFrontier, PriorityFrontier};
pub use path::{reconstruct_path, settle_until, PathEdge, PathResult};
pub use traversal::{EdgePredicate, Graph, GraphEdge};
pub use types::{Direction, NodeState, NodeStatus};
