//! Screen navigation for profilecard.
//!
//! The navigator is a two-state machine: the user list, or the detail screen
//! for one user id. Each state maps to an entry in the route table:
//!
//! ```text
//!     user_list ──select_profile(id)──► user_details/{userId}
//!         ▲                                   │
//!         └────────────── go_back ────────────┘
//! ```
//!
//! Every transition replaces the state wholesale and is published to
//! subscribers through a [`tokio::sync::watch`] channel, so a render layer can
//! redraw after each change.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::error::{Error, Result};

/// Route of the user list screen.
pub const LIST_ROUTE: &str = "user_list";

/// Route prefix of the detail screen; the user id follows the slash.
pub const DETAIL_ROUTE_PREFIX: &str = "user_details/";

/// Route the navigator starts on.
pub const START_ROUTE: &str = LIST_ROUTE;

/// Route templates, in registration order.
pub const ROUTES: &[&str] = &[LIST_ROUTE, "user_details/{userId}"];

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum NavigationState {
    /// The scrollable list of all profiles.
    #[default]
    List,
    /// The detail screen for a single user.
    Detail {
        /// Id of the user to show. Not guaranteed to exist in the store.
        user_id: i32,
    },
}

impl NavigationState {
    /// The concrete route string for this state.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Self::List => LIST_ROUTE.to_string(),
            Self::Detail { user_id } => format!("{DETAIL_ROUTE_PREFIX}{user_id}"),
        }
    }

    /// The user id carried by a detail state.
    #[must_use]
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::List => None,
            Self::Detail { user_id } => Some(*user_id),
        }
    }

    /// Check whether this is the list state.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}

impl std::fmt::Display for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.route())
    }
}

impl FromStr for NavigationState {
    type Err = Error;

    fn from_str(route: &str) -> Result<Self> {
        let route = route.trim();
        if route == LIST_ROUTE {
            return Ok(Self::List);
        }

        route
            .strip_prefix(DETAIL_ROUTE_PREFIX)
            .and_then(|id| id.parse::<i32>().ok())
            .map(|user_id| Self::Detail { user_id })
            .ok_or_else(|| Error::InvalidRoute {
                route: route.to_string(),
            })
    }
}

/// What `go_back` does when the list is already showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackPolicy {
    /// Stay on the list and report success.
    #[default]
    Ignore,
    /// Fail with [`Error::InvalidTransition`].
    Reject,
}

/// A user input the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A tap on a list row.
    Select(i32),
    /// A tap on the back icon.
    Back,
    /// Jump straight to a route.
    Navigate(NavigationState),
}

impl FromStr for Action {
    type Err = Error;

    /// Parse `back`, `select:<id>`, or a route string.
    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("back") {
            return Ok(Self::Back);
        }
        if let Some(id) = input.strip_prefix("select:") {
            return id
                .trim()
                .parse::<i32>()
                .map(Self::Select)
                .map_err(|_| Error::InvalidAction {
                    action: input.to_string(),
                });
        }
        input
            .parse::<NavigationState>()
            .map(Self::Navigate)
            .map_err(|_| Error::InvalidAction {
                action: input.to_string(),
            })
    }
}

/// Owner of the current navigation state.
#[derive(Debug)]
pub struct Navigator {
    state: watch::Sender<NavigationState>,
    back_policy: BackPolicy,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator on the list screen that ignores back on the list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_back_policy(BackPolicy::default())
    }

    /// Create a navigator on the list screen with the given back policy.
    #[must_use]
    pub fn with_back_policy(back_policy: BackPolicy) -> Self {
        let (state, _) = watch::channel(NavigationState::List);
        Self { state, back_policy }
    }

    /// The state currently shown.
    #[must_use]
    pub fn current(&self) -> NavigationState {
        *self.state.borrow()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts with the current state marked as seen; it is
    /// notified after every subsequent transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Show the detail screen for `user_id`.
    ///
    /// Valid from any state. The id is not checked against any store.
    pub fn select_profile(&self, user_id: i32) {
        self.transition(NavigationState::Detail { user_id });
    }

    /// Return to the list screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] when already on the list and the
    /// back policy is [`BackPolicy::Reject`].
    pub fn go_back(&self) -> Result<()> {
        let from = self.current();
        if from.is_list() {
            return match self.back_policy {
                BackPolicy::Ignore => {
                    debug!("Back on {LIST_ROUTE} ignored");
                    Ok(())
                }
                BackPolicy::Reject => Err(Error::invalid_transition(from, "back")),
            };
        }

        self.transition(NavigationState::List);
        Ok(())
    }

    /// Jump to the state named by a route string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if the route is not in the table.
    pub fn navigate(&self, route: &str) -> Result<()> {
        let target = route.parse::<NavigationState>()?;
        self.transition(target);
        Ok(())
    }

    /// Apply a single user action.
    ///
    /// # Errors
    ///
    /// Propagates the error of a rejected back action.
    pub fn apply(&self, action: Action) -> Result<()> {
        match action {
            Action::Select(user_id) => {
                self.select_profile(user_id);
                Ok(())
            }
            Action::Back => self.go_back(),
            Action::Navigate(target) => {
                self.transition(target);
                Ok(())
            }
        }
    }

    fn transition(&self, to: NavigationState) {
        let from = self.state.send_replace(to);
        debug!(%from, %to, "Navigation transition");
    }
}
