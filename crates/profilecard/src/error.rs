//! Error types for profilecard.
//!
//! This module defines all error types used throughout the profilecard crate.
//! Lookup and navigation failures are recoverable; the render layer falls
//! back to the list screen rather than aborting.

use thiserror::Error;

use crate::navigation::NavigationState;

/// The main error type for profilecard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// No profile has the requested id.
    #[error("no profile with id {id}")]
    ProfileNotFound {
        /// The id that was looked up.
        id: i32,
    },

    /// Two profiles in a roster share an id.
    #[error("duplicate profile id {id}")]
    DuplicateProfileId {
        /// The repeated id.
        id: i32,
    },

    /// The embedded roster could not be parsed.
    #[error("invalid profile roster: {0}")]
    SeedData(Box<figment::Error>),

    // === Navigation Errors ===
    /// A transition that is not allowed from the current state.
    #[error("cannot go {action} from {from}")]
    InvalidTransition {
        /// State the navigator was in.
        from: NavigationState,
        /// The rejected action.
        action: &'static str,
    },

    /// A route string that is not in the route table.
    #[error("unknown route '{route}'")]
    InvalidRoute {
        /// The route as given.
        route: String,
    },

    /// A user action that could not be parsed.
    #[error("unknown action '{action}' (expected 'back', 'select:<id>' or a route)")]
    InvalidAction {
        /// The action as given.
        action: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for profilecard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid transition error.
    #[must_use]
    pub fn invalid_transition(from: NavigationState, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a failed profile lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound { .. })
    }

    /// Check if this error is a rejected navigation transition.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ProfileNotFound { id: 99 };
        assert_eq!(err.to_string(), "no profile with id 99");

        let err = Error::DuplicateProfileId { id: 1 };
        assert_eq!(err.to_string(), "duplicate profile id 1");
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(Error::ProfileNotFound { id: 3 }.is_not_found());
        assert!(!Error::config_validation("x").is_not_found());
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = Error::invalid_transition(NavigationState::List, "back");
        assert!(err.is_invalid_transition());
        assert_eq!(err.to_string(), "cannot go back from user_list");
    }

    #[test]
    fn test_invalid_route_display() {
        let err = Error::InvalidRoute {
            route: "settings".to_string(),
        };
        assert_eq!(err.to_string(), "unknown route 'settings'");
    }

    #[test]
    fn test_invalid_action_display() {
        let err = Error::InvalidAction {
            action: "jump".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("jump"));
        assert!(msg.contains("select:<id>"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::config_validation("list_avatar_size must be greater than 0");
        assert!(err.to_string().contains("list_avatar_size"));
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("bad value"));
    }
}
