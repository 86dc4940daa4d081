//! `profilecard` - A two-screen profile browser core
//!
//! This library provides an immutable profile store, a two-state navigator
//! over the `user_list` / `user_details/{userId}` routes, and a
//! toolkit-independent screen model that a UI layer can draw from.
//!
//! ```
//! use profilecard::{NavigationState, Navigator, ProfileStore, UserProfile};
//!
//! let store = ProfileStore::new(vec![
//!     UserProfile::new(1, "Jim", "jim.png", true),
//!     UserProfile::new(2, "Ali", "ali.png", false),
//! ])?;
//! let navigator = Navigator::new();
//!
//! navigator.select_profile(2);
//! assert_eq!(navigator.current(), NavigationState::Detail { user_id: 2 });
//! assert_eq!(store.find_by_id(2)?.name, "Ali");
//!
//! navigator.go_back()?;
//! assert_eq!(navigator.current(), NavigationState::List);
//! # Ok::<(), profilecard::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod profile;
pub mod screen;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use navigation::{BackPolicy, NavigationState, Navigator};
pub use profile::UserProfile;
pub use screen::Screen;
pub use store::ProfileStore;
