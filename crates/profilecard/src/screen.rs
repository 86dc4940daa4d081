//! Toolkit-independent screen model.
//!
//! A [`Screen`] describes what the host UI should draw for a navigation
//! state: the app bar, and one profile card per row (list) or a single large
//! card (detail). Producing it is a pure function of the state, the store and
//! the display configuration.

use serde::Serialize;
use tracing::warn;

use crate::config::DisplayConfig;
use crate::navigation::NavigationState;
use crate::profile::UserProfile;
use crate::store::ProfileStore;

/// Title of the list screen.
pub const LIST_TITLE: &str = "User List";

/// Title of the detail screen.
pub const DETAIL_TITLE: &str = "User Profile Details";

/// Icon shown at the leading edge of the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    /// Home icon; tapping it does nothing.
    Home,
    /// Back arrow; tapping it calls `Navigator::go_back`.
    Back,
}

/// Avatar ring colour reflecting online status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderColor {
    /// Online.
    Green,
    /// Offline.
    Red,
}

impl BorderColor {
    /// Colour for an online flag.
    #[must_use]
    pub fn for_status(online: bool) -> Self {
        if online {
            Self::Green
        } else {
            Self::Red
        }
    }
}

/// A circular avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    /// Image reference, passed through untouched.
    pub picture_url: String,
    /// Edge length of the image.
    pub size: u32,
    /// Ring colour.
    pub border: BorderColor,
}

/// One profile as drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Profile id; a tap on a list row selects it.
    pub user_id: i32,
    /// Display name.
    pub name: String,
    /// Status line under the name.
    pub status_label: String,
    /// Avatar image.
    pub avatar: Avatar,
}

impl ProfileCard {
    fn build(profile: &UserProfile, avatar_size: u32, display: &DisplayConfig) -> Self {
        Self {
            user_id: profile.id,
            name: profile.name.clone(),
            status_label: display.status_label(profile.status).to_string(),
            avatar: Avatar {
                picture_url: profile.picture_url.clone(),
                size: avatar_size,
                border: BorderColor::for_status(profile.status),
            },
        }
    }
}

/// A fully resolved screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// The profile list.
    List {
        /// App bar title.
        title: &'static str,
        /// App bar icon.
        nav_icon: NavIcon,
        /// Rows in display order.
        rows: Vec<ProfileCard>,
    },
    /// A single profile.
    Detail {
        /// App bar title.
        title: &'static str,
        /// App bar icon.
        nav_icon: NavIcon,
        /// The profile shown.
        profile: ProfileCard,
    },
}

impl Screen {
    /// Resolve the screen for a navigation state.
    ///
    /// A detail state whose id is not in the store falls back to the list.
    #[must_use]
    pub fn render(state: NavigationState, store: &ProfileStore, display: &DisplayConfig) -> Self {
        match state {
            NavigationState::List => Self::list(store, display),
            NavigationState::Detail { user_id } => match store.find_by_id(user_id) {
                Ok(profile) => Self::Detail {
                    title: DETAIL_TITLE,
                    nav_icon: NavIcon::Back,
                    profile: ProfileCard::build(profile, display.detail_avatar_size, display),
                },
                Err(err) => {
                    warn!("{err}; showing {LIST_TITLE} instead");
                    Self::list(store, display)
                }
            },
        }
    }

    fn list(store: &ProfileStore, display: &DisplayConfig) -> Self {
        Self::List {
            title: LIST_TITLE,
            nav_icon: NavIcon::Home,
            rows: store
                .all()
                .iter()
                .map(|profile| ProfileCard::build(profile, display.list_avatar_size, display))
                .collect(),
        }
    }

    /// App bar title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::List { title, .. } | Self::Detail { title, .. } => *title,
        }
    }

    /// App bar icon.
    #[must_use]
    pub fn nav_icon(&self) -> NavIcon {
        match self {
            Self::List { nav_icon, .. } | Self::Detail { nav_icon, .. } => *nav_icon,
        }
    }

    /// Cards on screen, top to bottom.
    #[must_use]
    pub fn cards(&self) -> &[ProfileCard] {
        match self {
            Self::List { rows, .. } => rows,
            Self::Detail { profile, .. } => std::slice::from_ref(profile),
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.nav_icon() {
            NavIcon::Home => "⌂",
            NavIcon::Back => "←",
        };
        writeln!(f, "{icon}  {}", self.title())?;
        writeln!(f, "{}", "-".repeat(self.title().chars().count() + 3))?;

        for card in self.cards() {
            let ring = match card.avatar.border {
                BorderColor::Green => "●",
                BorderColor::Red => "○",
            };
            writeln!(
                f,
                "{ring} [{:>3}] {:<24} {:<12} {}px {}",
                card.user_id, card.name, card.status_label, card.avatar.size, card.avatar.picture_url
            )?;
        }
        Ok(())
    }
}
