//! Persistent settings for the registry client
//!
//! Values come from `<config dir>/healthreg/config.toml`; command line flags
//! and environment variables are layered on top by the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ApiConfig, DEFAULT_API_BASE, DEFAULT_API_KEY};
use crate::interactive::constants::{MESSAGE_CLEAR_DELAY_MS, SEARCH_DEBOUNCE_MS};

const CONFIG_DIR_NAME: &str = "healthreg";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User configurable settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base address of the registry API
    pub api_base: String,
    /// Value sent in the `X-API-KEY` header
    pub api_key: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Quiet period before a search is sent, in milliseconds
    pub search_debounce_ms: u64,
    /// Status message lifetime in milliseconds, 0 keeps them until dismissed
    pub message_clear_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            request_timeout_secs: 10,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            message_clear_delay_ms: MESSAGE_CLEAR_DELAY_MS,
        }
    }
}

impl Settings {
    /// Replaces file values with whatever was given on the command line or
    /// in the environment.
    pub fn with_overrides(
        mut self,
        api_base: Option<String>,
        api_key: Option<String>,
        request_timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        if let Some(secs) = request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub struct SettingsManager {
    config_path: PathBuf,
}

impl SettingsManager {
    /// Create a new settings manager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
        })
    }

    /// Create a settings manager with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings from disk, writing the defaults if the file is missing
    pub fn load(&self) -> Result<Settings> {
        if self.config_path.exists() {
            let contents = fs::read_to_string(&self.config_path).with_context(|| {
                format!("Failed to read settings file {}", self.config_path.display())
            })?;
            let settings = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse settings file {}", self.config_path.display())
            })?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            // Try to save them, but don't fail if we can't
            if let Err(e) = self.save(&settings) {
                tracing::debug!(error = %e, "could not write default settings");
            }
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string =
            toml::to_string_pretty(settings).context("Failed to serialize settings")?;

        fs::write(&self.config_path, toml_string).context("Failed to write settings file")?;

        Ok(())
    }

    fn get_config_dir() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME))
        } else if let Some(home) = dirs::home_dir() {
            Ok(home.join(".config").join(CONFIG_DIR_NAME))
        } else {
            anyhow::bail!("Could not determine config directory")
        }
    }
}
