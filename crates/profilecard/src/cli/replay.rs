//! Navigation replay for the `replay` command.
//!
//! Drives a [`Navigator`] through a list of actions the way a UI would,
//! listening on its subscription and rendering a frame after each action.

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::navigation::{Action, Navigator};
use crate::screen::Screen;
use crate::store::ProfileStore;

/// The screen after one applied action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFrame {
    /// The action as typed.
    pub action: String,
    /// Route after the action.
    pub route: String,
    /// Whether the navigator published a new state.
    pub changed: bool,
    /// What the render layer would draw.
    pub screen: Screen,
}

impl std::fmt::Display for ReplayFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let note = if self.changed { "" } else { " (unchanged)" };
        writeln!(f, "> {} => {}{note}", self.action, self.route)?;
        write!(f, "{}", self.screen)
    }
}

/// Frames rendered so far, and the action that stopped the replay, if any.
#[derive(Debug)]
pub struct Replay {
    /// One frame per successfully applied action.
    pub frames: Vec<ReplayFrame>,
    /// The rejected action and its error.
    pub failure: Option<(String, Error)>,
}

/// Apply `actions` to a fresh navigator configured from `config`.
///
/// Every action is parsed before any is applied. A rejected transition
/// stops the replay; the frames rendered before it are kept.
///
/// # Errors
///
/// Returns [`Error::InvalidAction`] if any action cannot be parsed.
pub fn replay(actions: &[String], store: &ProfileStore, config: &Config) -> Result<Replay> {
    let parsed = actions
        .iter()
        .map(|raw| raw.parse::<Action>())
        .collect::<Result<Vec<_>>>()?;

    let navigator = Navigator::with_back_policy(config.navigation.back_from_list);
    let mut updates = navigator.subscribe();
    let mut frames = Vec::with_capacity(parsed.len());

    for (raw, action) in actions.iter().zip(parsed) {
        if let Err(err) = navigator.apply(action) {
            return Ok(Replay {
                frames,
                failure: Some((raw.clone(), err)),
            });
        }

        // The navigator owns the sender, so the channel is never closed here.
        let changed = updates.has_changed().unwrap_or(false);
        let state = *updates.borrow_and_update();
        frames.push(ReplayFrame {
            action: raw.clone(),
            route: state.route(),
            changed,
            screen: Screen::render(state, store, &config.display),
        });
    }

    Ok(Replay {
        frames,
        failure: None,
    })
}
