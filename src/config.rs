//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
const CONFIG_ENV: &str = "SIGNUP_TUI_CONFIG";

/// User configuration for the TUI
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Mask the password field while typing
    pub mask_password: Option<bool>,
    /// Show live validity hints under username, password and description
    pub show_hints: Option<bool>,
    /// Quit after the first accepted registration and print it to stdout
    pub quit_on_submit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }

    pub fn quit_on_submit(&self) -> bool {
        self.quit_on_submit.unwrap_or(false)
    }
}
