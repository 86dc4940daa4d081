//! Command-line interface for profilecard.
//!
//! This module provides the CLI structure for the `profilecard` binary, a
//! terminal front end over the profile store and navigator.

mod commands;
mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, ReplayCommand, ShowCommand};
pub use replay::{replay, Replay, ReplayFrame};

/// profilecard - Browse user profiles
///
/// Renders the user list and profile detail screens in the terminal and
/// replays navigation sequences through the route table.
#[derive(Debug, Parser)]
#[command(name = "profilecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the user list screen
    List(ListCommand),

    /// Render the detail screen for one user
    Show(ShowCommand),

    /// Print the route table
    Routes,

    /// Apply navigation actions and render the screen after each one
    Replay(ReplayCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
