//! Configuration management for profilecard.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::navigation::BackPolicy;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "profilecard";

/// Environment variable prefix.
const ENV_PREFIX: &str = "PROFILECARD_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PROFILECARD_`, sections split by `__`)
/// 2. TOML config file at `~/.config/profilecard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation configuration.
    pub navigation: NavigationConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Navigation-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// What a back action does on the list screen.
    pub back_from_list: BackPolicy,
}

/// Display-related configuration for the screen model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Avatar size on list rows, in density-independent pixels.
    pub list_avatar_size: u32,
    /// Avatar size on the detail screen.
    pub detail_avatar_size: u32,
    /// Status line for online users.
    pub online_label: String,
    /// Status line for offline users.
    pub offline_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_avatar_size: 70,
            detail_avatar_size: 240,
            online_label: "Active Now".to_string(),
            offline_label: "Offline".to_string(),
        }
    }
}

impl DisplayConfig {
    /// The status line for a given online flag.
    #[must_use]
    pub fn status_label(&self, online: bool) -> &str {
        if online {
            &self.online_label
        } else {
            &self.offline_label
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;

        if display.list_avatar_size == 0 || display.detail_avatar_size == 0 {
            return Err(Error::config_validation(
                "avatar sizes must be greater than 0",
            ));
        }

        if display.list_avatar_size > display.detail_avatar_size {
            return Err(Error::config_validation(format!(
                "list_avatar_size ({}) cannot be greater than detail_avatar_size ({})",
                display.list_avatar_size, display.detail_avatar_size
            )));
        }

        if display.online_label.trim().is_empty() || display.offline_label.trim().is_empty() {
            return Err(Error::config_validation("status labels must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.navigation.back_from_list, BackPolicy::Ignore);
        assert_eq!(config.display.list_avatar_size, 70);
        assert_eq!(config.display.detail_avatar_size, 240);
    }

    #[test]
    fn test_status_labels() {
        let display = DisplayConfig::default();

        assert_eq!(display.status_label(true), "Active Now");
        assert_eq!(display.status_label(false), "Offline");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_avatar_size() {
        let mut config = Config::default();
        config.display.list_avatar_size = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("avatar sizes"));
    }

    #[test]
    fn test_validate_list_larger_than_detail() {
        let mut config = Config::default();
        config.display.list_avatar_size = 300;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("list_avatar_size"));
    }

    #[test]
    fn test_validate_empty_label() {
        let mut config = Config::default();
        config.display.offline_label = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("status labels"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("profilecard"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    // Loading reads the process environment, so every load test runs inside
    // a `Jail`, which serializes them and restores the environment afterwards.

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("missing.toml");
            let config = Config::load_from(Some(path)).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [navigation]
                    back_from_list = "reject"

                    [display]
                    list_avatar_size = 48
                "#,
            )?;

            let path = jail.directory().join("config.toml");
            let config = Config::load_from(Some(path)).map_err(|e| e.to_string())?;

            assert_eq!(config.navigation.back_from_list, BackPolicy::Reject);
            assert_eq!(config.display.list_avatar_size, 48);
            assert_eq!(config.display.detail_avatar_size, 240);
            Ok(())
        });
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[display]\ndetail_avatar_size = 10\n")?;

            let result = Config::load_from(Some(jail.directory().join("config.toml")));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[display]\nlist_avatar_size = 48\n")?;
            jail.set_env("PROFILECARD_NAVIGATION__BACK_FROM_LIST", "reject");
            jail.set_env("PROFILECARD_DISPLAY__LIST_AVATAR_SIZE", "64");
            jail.set_env("PROFILECARD_DISPLAY__OFFLINE_LABEL", "Away");

            let path = jail.directory().join("config.toml");
            let config = Config::load_from(Some(path)).map_err(|e| e.to_string())?;

            assert_eq!(config.navigation.back_from_list, BackPolicy::Reject);
            assert_eq!(config.display.list_avatar_size, 64);
            assert_eq!(config.display.offline_label, "Away");
            assert_eq!(config.display.detail_avatar_size, 240);
            Ok(())
        });
    }

    #[test]
    fn test_env_invalid_value_fails_load() {
        Jail::expect_with(|jail| {
            jail.set_env("PROFILECARD_NAVIGATION__BACK_FROM_LIST", "sideways");

            let result = Config::load_from(Some(jail.directory().join("config.toml")));
            assert!(matches!(result, Err(Error::ConfigLoad(_))));
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"back_from_list\":\"ignore\""));
        assert!(json.contains("list_avatar_size"));
    }

    #[test]
    fn test_display_config_deserialize() {
        let json = r#"{"list_avatar_size": 64, "online_label": "Here"}"#;
        let display: DisplayConfig = serde_json::from_str(json).unwrap();

        assert_eq!(display.list_avatar_size, 64);
        assert_eq!(display.online_label, "Here");
        assert_eq!(display.offline_label, "Offline");
    }
}
