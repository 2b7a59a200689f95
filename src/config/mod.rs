// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! it to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, ToastConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep more toasts on screen
//! config.max_toasts = 8;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.max_toasts, 8);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{MaxToasts, ToastDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToasts";

/// Timing and capacity settings of a [`NotificationManager`](crate::notifications::NotificationManager).
///
/// Every field falls back to its default when missing from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub default_duration_ms: u64,
    pub error_duration_ms: u64,
    pub warning_duration_ms: u64,
    pub removal_delay_ms: u64,
    pub enter_delay_ms: u64,
    pub max_toasts: usize,
    pub container_id: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            error_duration_ms: ERROR_DURATION_MS,
            warning_duration_ms: WARNING_DURATION_MS,
            removal_delay_ms: REMOVAL_DELAY_MS,
            enter_delay_ms: ENTER_DELAY_MS,
            max_toasts: DEFAULT_MAX_TOASTS,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl ToastConfig {
    /// Capacity of the active list, clamped to the valid range.
    #[must_use]
    pub fn max_toasts(&self) -> MaxToasts {
        MaxToasts::new(self.max_toasts)
    }

    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.default_duration_ms)
    }

    #[must_use]
    pub fn error_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.error_duration_ms)
    }

    #[must_use]
    pub fn warning_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.warning_duration_ms)
    }

    #[must_use]
    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }

    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    /// Container identifier, falling back to the default when blank.
    #[must_use]
    pub fn container_id(&self) -> &str {
        if self.container_id.trim().is_empty() {
            DEFAULT_CONTAINER_ID
        } else {
            &self.container_id
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Malformed TOML yields the defaults; only I/O fails.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
