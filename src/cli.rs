//! CLI argument parsing for pathwalk
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pathwalk_core::config::SearchConfig;
use pathwalk_core::error::PathwalkError;
pub use pathwalk_core::format::OutputFormat;
use pathwalk_core::graph::Direction;

/// Pathwalk - step-wise shortest-path traversal over graph files
#[derive(Parser, Debug)]
#[command(name = "pathwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, env = "PATHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Settle vertices in shortest-distance order from a source
    Walk {
        /// Graph file (.toml, .json, .yaml)
        file: PathBuf,

        /// Source vertex id
        #[arg(long)]
        from: String,

        /// Stop after settling this many vertices
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Find the shortest path between two vertices
    Path {
        /// Graph file (.toml, .json, .yaml)
        file: PathBuf,

        /// Source vertex id
        #[arg(long)]
        from: String,

        /// Target vertex id
        #[arg(long)]
        to: String,

        #[command(flatten)]
        search: SearchArgs,
    },
}

/// Traversal flags; each one overrides the graph file's `[search]` table
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Edge direction to follow (out, in)
    #[arg(long, value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// Use edge weights as costs
    #[arg(long)]
    pub weighted: bool,

    /// Every edge costs 1, even if the graph file asks for weights
    #[arg(long, conflicts_with = "weighted")]
    pub unweighted: bool,

    /// Add per-vertex heuristic values to candidate costs
    #[arg(long)]
    pub heuristic: bool,

    /// Skip edges with this label (repeatable)
    #[arg(long = "exclude-label", action = clap::ArgAction::Append)]
    pub exclude_labels: Vec<String>,
}

impl SearchArgs {
    /// Layer these flags over the graph file's defaults
    pub fn apply(&self, base: &SearchConfig) -> SearchConfig {
        let mut search = base.clone();
        if let Some(direction) = self.direction {
            search.direction = direction;
        }
        if self.weighted {
            search.weighted = true;
        }
        if self.unweighted {
            search.weighted = false;
        }
        if self.heuristic {
            search.heuristic = true;
        }
        search
            .exclude_labels
            .extend(self.exclude_labels.iter().cloned());
        search
    }
}

/// Parse `--format`, reporting unknown values with the library's message
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: PathwalkError| e.to_string())
}

/// Parse `--direction` through [`Direction`]'s own parser
pub fn parse_direction(s: &str) -> Result<Direction, String> {
    s.parse()
}
