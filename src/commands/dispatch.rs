//! Command dispatch logic for pathwalk

use std::time::Instant;

use crate::cli::{Cli, Commands};
use pathwalk_core::error::Result;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Shown when no subcommand is given
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-wise shortest-path traversal over graph files.");
        println!();
        println!("Run `pathwalk --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Walk {
                file,
                from,
                limit,
                search,
            } => super::walk::execute(ctx.cli, file, from, *limit, search),
            Commands::Path {
                file,
                from,
                to,
                search,
            } => super::path::execute(ctx.cli, file, from, to, search),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?ctx.start.elapsed(), ok = result.is_ok(), "command_done");
    result
}
