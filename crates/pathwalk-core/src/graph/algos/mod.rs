//! Graph algorithm implementations
//!
//! - `dijkstra`: step-wise shortest-path iterator with optional A* heuristic

pub mod dijkstra;

pub use dijkstra::{
    DijkstraOptions, EdgeCostFn, EdgeFilterFn, HeuristicFn, ReachHook, SettleHook,
    ShortestPathIterator, UpdatePolicy, DEFAULT_STATE_TAG,
};
