//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Brand shown on the banner and header when none is configured
pub const DEFAULT_BRAND_NAME: &str = "Feedback";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "feedback_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackConfig {
    /// Brand name shown on the banner and header
    pub brand_name: Option<String>,
    /// Play the banner slide-in animation
    pub animate_banner: Option<bool>,
    /// Log filter directive (e.g. "feedback_tui=debug")
    pub log_level: Option<String>,
}

impl FeedbackConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FeedbackConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn brand_name(&self) -> &str {
        self.brand_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_BRAND_NAME)
    }

    pub fn animate_banner(&self) -> bool {
        self.animate_banner.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
