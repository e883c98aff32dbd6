//! CLI commands for pathwalk

pub mod dispatch;
pub mod path;
pub mod walk;

mod helpers;
