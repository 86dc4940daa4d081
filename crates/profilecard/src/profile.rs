//! Core profile types for profilecard.
//!
//! This module defines the user record shown on both the list and the
//! detail screen.

use serde::{Deserialize, Serialize};

/// A single user profile.
///
/// Profiles are immutable once loaded. The `id` is the only lookup key; the
/// remaining fields are presentational.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier, unique within a [`ProfileStore`](crate::ProfileStore).
    pub id: i32,

    /// Display name.
    pub name: String,

    /// Opaque reference to the avatar image (local path or remote URL).
    pub picture_url: String,

    /// Online (`true`) or offline (`false`).
    pub status: bool,
}

impl UserProfile {
    /// Create a new profile.
    #[must_use]
    pub fn new(
        id: i32,
        name: impl Into<String>,
        picture_url: impl Into<String>,
        status: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            picture_url: picture_url.into(),
            status,
        }
    }

    /// Check whether the user is currently online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status
    }
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let presence = if self.status { "online" } else { "offline" };
        write!(f, "#{} {} ({presence})", self.id, self.name)
    }
}
