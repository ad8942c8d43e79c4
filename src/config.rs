//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.

use crate::constant::{APP_NAME, DEFAULT_DEBOUNCE_MS, DEFAULT_ROW_HEIGHT};
use crate::sync::SyncOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    pub fn sync_options(&self) -> SyncOptions {
        self.settings.sync_options()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Quiet period after the last edit before the diff is recomputed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Assumed height of one synchronized row, in pixels
    #[serde(default = "default_row_height")]
    pub row_height: f32,

    /// Whether toolbar transforms rewrite both panes or only the right one
    #[serde(default = "default_transform_both_sides")]
    pub transform_both_sides: bool,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_row_height() -> f32 {
    DEFAULT_ROW_HEIGHT
}

fn default_transform_both_sides() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            row_height: default_row_height(),
            transform_both_sides: default_transform_both_sides(),
        }
    }
}

impl Settings {
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            row_height: self.row_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"debounce_ms": 150}"#).unwrap();
        assert_eq!(settings.debounce_ms, 150);
        assert_eq!(settings.row_height, DEFAULT_ROW_HEIGHT);
        assert!(settings.transform_both_sides);
    }

    #[test]
    fn settings_map_to_sync_options() {
        let settings = Settings {
            debounce_ms: 200,
            row_height: 18.0,
            transform_both_sides: false,
        };
        let options = settings.sync_options();
        assert_eq!(options.debounce, Duration::from_millis(200));
        assert_eq!(options.row_height, 18.0);
    }

    #[test]
    fn default_settings_use_the_standard_debounce() {
        assert_eq!(
            Settings::default().sync_options().debounce,
            Duration::from_millis(DEFAULT_DEBOUNCE_MS)
        );
    }
}
