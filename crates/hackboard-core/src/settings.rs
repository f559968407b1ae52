//! User settings persistence for hackboard
//!
//! Settings live in `<config_dir>/hackboard/config.json`. Every field is
//! optional; a missing or unreadable file yields defaults (graceful
//! degradation). Credentials fall back to environment variables, first
//! non-blank value wins.

use crate::error::CoreError;
use crate::models::FormulaConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_HACKATIME_API_KEY: &str = "HACKATIME_API_KEY";
pub const ENV_HACKATIME_USERNAME: &str = "HACKATIME_USERNAME";
pub const ENV_STORE_API_KEY: &str = "FT_API_KEY";

/// hackboard user settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Hackatime API key; falls back to `HACKATIME_API_KEY`
    #[serde(default)]
    pub hackatime_api_key: Option<String>,

    /// Hackatime username; falls back to `HACKATIME_USERNAME`
    #[serde(default)]
    pub hackatime_username: Option<String>,

    /// Store API key; falls back to `FT_API_KEY`. Absent disables the store.
    #[serde(default)]
    pub store_api_key: Option<String>,

    /// Store item to track progress toward
    #[serde(default)]
    pub target_item: Option<String>,

    /// Country code for per-country pricing
    #[serde(default)]
    pub country: Option<String>,

    /// Cookies formula tunables (`quality`, `k`, `beta` as top-level keys)
    #[serde(flatten)]
    pub formula: FormulaConfig,

    /// Fold "Text" language time into "Python" during normalization
    #[serde(default)]
    pub fold_text_into_python: bool,

    /// Stats window override (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,
}

impl Settings {
    /// Default settings path: `<config_dir>/hackboard/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("hackboard");
        Ok(dir.join("config.json"))
    }

    /// Load settings from a file.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable settings, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist settings, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory for settings")?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    /// Hackatime credentials with env fallback; both are required
    pub fn hackatime_credentials(&self) -> Result<(String, String), CoreError> {
        let api_key = first_non_blank(&self.hackatime_api_key, ENV_HACKATIME_API_KEY).ok_or(
            CoreError::MissingCredentials {
                what: format!("Hackatime API key (settings or {ENV_HACKATIME_API_KEY})"),
            },
        )?;
        let username = first_non_blank(&self.hackatime_username, ENV_HACKATIME_USERNAME).ok_or(
            CoreError::MissingCredentials {
                what: format!("Hackatime username (settings or {ENV_HACKATIME_USERNAME})"),
            },
        )?;
        Ok((api_key, username))
    }

    /// Store API key with env fallback; None just disables the store section
    pub fn store_api_key(&self) -> Option<String> {
        first_non_blank(&self.store_api_key, ENV_STORE_API_KEY)
    }

    /// Normalized country code, defaulting to "us"
    pub fn country(&self) -> String {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("us")
            .to_lowercase()
    }

    /// Trimmed target item name, if one is configured
    pub fn target_item(&self) -> Option<&str> {
        self.target_item
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Setting value if non-blank, else the environment variable if non-blank
fn first_non_blank(setting: &Option<String>, env_var: &str) -> Option<String> {
    setting
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}
