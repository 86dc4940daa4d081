//! `profilecard` - terminal front end for the profile browser
//!
//! Renders the list and detail screens and replays navigation sequences
//! against the embedded roster.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use profilecard::cli::{self, Cli, Command, ConfigCommand, ReplayCommand};
use profilecard::navigation::{ROUTES, START_ROUTE};
use profilecard::{init_logging, Config, NavigationState, ProfileStore, Screen};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command {
        Command::List(cmd) => {
            let config = load_config(cli.config)?;
            let store = ProfileStore::seeded()?;
            print_screen(NavigationState::List, &store, &config, cmd.json)?;
            if !cmd.json {
                if store.is_empty() {
                    println!("No profiles.");
                } else {
                    println!("{} profiles", store.len());
                }
            }
            Ok(())
        }
        Command::Show(cmd) => {
            let config = load_config(cli.config)?;
            let store = ProfileStore::seeded()?;
            print_screen(
                NavigationState::Detail { user_id: cmd.id },
                &store,
                &config,
                cmd.json,
            )
        }
        Command::Routes => {
            for route in ROUTES {
                let marker = if *route == START_ROUTE { " (start)" } else { "" };
                println!("{route}{marker}");
            }
            Ok(())
        }
        Command::Replay(cmd) => handle_replay(&cmd, &load_config(cli.config)?),
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

fn print_screen(
    state: NavigationState,
    store: &ProfileStore,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let screen = Screen::render(state, store, &config.display);
    if json {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        print!("{screen}");
    }
    Ok(())
}

fn handle_replay(cmd: &ReplayCommand, config: &Config) -> anyhow::Result<()> {
    let store = ProfileStore::seeded()?;
    let replay = cli::replay(&cmd.actions, &store, config)?;

    // Frames rendered before a rejected action are printed in both modes.
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&replay.frames)?);
    } else {
        for frame in &replay.frames {
            println!("{frame}");
        }
    }

    match replay.failure {
        Some((action, err)) => Err(err).with_context(|| format!("applying '{action}'")),
        None => Ok(()),
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Navigation]");
                println!(
                    "  Back from list:     {:?}",
                    config.navigation.back_from_list
                );
                println!();
                println!("[Display]");
                println!("  List avatar size:   {}", config.display.list_avatar_size);
                println!("  Detail avatar size: {}", config.display.detail_avatar_size);
                println!("  Online label:       {}", config.display.online_label);
                println!("  Offline label:      {}", config.display.offline_label);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("configuration {} is invalid", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
