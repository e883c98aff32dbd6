//! Pathwalk Core Library
//!
//! Resumable single-source shortest-path traversal (Dijkstra, with optional
//! A* heuristic guidance) over any graph implementing [`graph::Graph`].

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
