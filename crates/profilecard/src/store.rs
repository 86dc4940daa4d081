//! Profile store for profilecard.
//!
//! The store is an ordered, immutable roster of profiles built once at
//! startup. Order determines display order; ids must be unique.

use std::collections::HashSet;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::profile::UserProfile;

/// Roster compiled into the binary.
pub const SEED_ROSTER: &str = include_str!("../data/profiles.toml");

/// Shape of a roster TOML document.
#[derive(Debug, Default, Deserialize)]
struct Roster {
    #[serde(default)]
    profiles: Vec<UserProfile>,
}

/// Immutable, ordered collection of user profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: Vec<UserProfile>,
}

impl ProfileStore {
    /// Build a store from an ordered list of profiles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProfileId`] if two profiles share an id.
    pub fn new(profiles: Vec<UserProfile>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id) {
                return Err(Error::DuplicateProfileId { id: profile.id });
            }
        }

        info!("Profile store built with {} profiles", profiles.len());
        Ok(Self { profiles })
    }

    /// Build the store from the roster compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded roster is malformed or contains
    /// duplicate ids.
    pub fn seeded() -> Result<Self> {
        Self::from_toml(SEED_ROSTER)
    }

    /// Build a store from a roster TOML document with `[[profiles]]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeedData`] if the document cannot be parsed, or
    /// [`Error::DuplicateProfileId`] if ids collide.
    pub fn from_toml(document: &str) -> Result<Self> {
        let roster: Roster = Figment::from(Toml::string(document))
            .extract()
            .map_err(|err| Error::SeedData(Box::new(err)))?;
        Self::new(roster.profiles)
    }

    /// All profiles in display order.
    #[must_use]
    pub fn all(&self) -> &[UserProfile] {
        &self.profiles
    }

    /// Find the first profile whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileNotFound`] if no profile has that id.
    pub fn find_by_id(&self, id: i32) -> Result<&UserProfile> {
        let found = self.profiles.iter().find(|profile| profile.id == id);
        debug!(id, found = found.is_some(), "Profile lookup");
        found.ok_or(Error::ProfileNotFound { id })
    }

    /// Number of profiles in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the store holds no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_user_store() -> ProfileStore {
        ProfileStore::new(vec![
            UserProfile::new(1, "Jim", "jim.png", true),
            UserProfile::new(2, "Ali", "ali.png", false),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id_returns_matching_profile() {
        let store = two_user_store();
        let profile = store.find_by_id(2).unwrap();

        assert_eq!(profile.id, 2);
        assert_eq!(profile.name, "Ali");
        assert!(!profile.status);
    }

    #[test]
    fn test_find_by_id_every_profile_round_trips() {
        let store = ProfileStore::seeded().unwrap();
        for profile in store.all() {
            assert_eq!(store.find_by_id(profile.id).unwrap(), profile);
        }
    }

    #[test]
    fn test_find_by_id_missing() {
        let store = two_user_store();
        let err = store.find_by_id(99).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_find_by_id_on_empty_store() {
        let store = ProfileStore::new(Vec::new()).unwrap();

        assert!(store.is_empty());
        assert!(store.find_by_id(0).unwrap_err().is_not_found());
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = ProfileStore::new(vec![
            UserProfile::new(9, "Zed", "", true),
            UserProfile::new(3, "Amy", "", false),
            UserProfile::new(5, "Bo", "", true),
        ])
        .unwrap();

        let ids: Vec<i32> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ProfileStore::new(vec![
            UserProfile::new(1, "Jim", "", true),
            UserProfile::new(1, "Jim Again", "", false),
        ]);

        assert!(matches!(result, Err(Error::DuplicateProfileId { id: 1 })));
    }

    #[test]
    fn test_len() {
        let store = two_user_store();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_seeded_roster() {
        let store = ProfileStore::seeded().unwrap();

        assert!(!store.is_empty());
        assert!(store.all().iter().any(|p| p.status));
        assert!(store.all().iter().any(|p| !p.status));
    }

    #[test]
    fn test_from_toml() {
        let doc = r#"
            [[profiles]]
            id = 1
            name = "Jim"
            picture_url = "jim.png"
            status = true

            [[profiles]]
            id = 2
            name = "Ali"
            picture_url = "ali.png"
            status = false
        "#;
        let store = ProfileStore::from_toml(doc).unwrap();

        assert_eq!(store, two_user_store());
    }

    #[test]
    fn test_from_toml_empty_document() {
        let store = ProfileStore::from_toml("").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_toml_missing_field() {
        let doc = r#"
            [[profiles]]
            id = 1
            name = "Jim"
        "#;
        let result = ProfileStore::from_toml(doc);

        assert!(matches!(result, Err(Error::SeedData(_))));
    }

    #[test]
    fn test_from_toml_duplicate_ids() {
        let doc = r#"
            [[profiles]]
            id = 4
            name = "A"
            picture_url = ""
            status = true

            [[profiles]]
            id = 4
            name = "B"
            picture_url = ""
            status = true
        "#;

        assert!(matches!(
            ProfileStore::from_toml(doc),
            Err(Error::DuplicateProfileId { id: 4 })
        ));
    }
}
