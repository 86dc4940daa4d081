//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the user to show
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Replay command arguments.
#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// Actions to apply in order: `back`, `select:<id>`, or a route
    /// such as `user_details/2`
    #[arg(required = true, value_name = "ACTION")]
    pub actions: Vec<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
