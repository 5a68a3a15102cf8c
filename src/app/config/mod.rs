// SPDX-License-Identifier: MPL-2.0
//! Application configuration loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[api]` - Search endpoint, API key and page size
//! - `[display]` - Theme mode
//! - `[notifications]` - Toast display duration
//! - `[gallery]` - In-memory image cache size
//!
//! Every key is optional; missing keys take their defaults and out-of-range
//! values are clamped when read through the accessor methods.
//!
//! # Path Resolution
//!
//! 1. Use [`load_from_path`] with an explicit path
//! 2. Use [`load_with_override`] with an explicit directory
//! 3. Otherwise the directory comes from [`paths`](crate::app::paths)
//!
//! # API Key Resolution
//!
//! `--api-key` argument, then the `ICED_GALLERY_API_KEY` environment variable,
//! then `[api] key` from the file. See [`Config::api_settings`].
//!
//! # Examples
//!
//! ```
//! use iced_gallery::app::config::Config;
//!
//! let config: Config = toml::from_str("[api]\nper_page = 40\n").unwrap();
//! assert_eq!(config.api.per_page(), 40);
//! assert_eq!(config.gallery.image_cache_capacity(), 600);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::ApiSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ICED_GALLERY_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// Search API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Results requested per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ApiConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NotificationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
}

impl NotificationsConfig {
    /// How long each toast stays on screen.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = self
            .duration_secs
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_SECS)
            .clamp(MIN_NOTIFICATION_DURATION_SECS, MAX_NOTIFICATION_DURATION_SECS);
        Duration::from_secs(secs)
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryConfig {
    /// Number of full-size preview images kept in memory.
    ///
    /// Thumbnails of the displayed results are always kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_cache_capacity: Option<usize>,
}

impl GalleryConfig {
    #[must_use]
    pub fn image_cache_capacity(&self) -> usize {
        self.image_cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .max(MIN_IMAGE_CACHE_CAPACITY)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Builds the search client settings.
    ///
    /// The first non-blank key wins among `cli_key`, [`ENV_API_KEY`] and the file.
    #[must_use]
    pub fn api_settings(&self, cli_key: Option<String>) -> ApiSettings {
        let env_key = std::env::var(ENV_API_KEY).ok();
        self.api_settings_with_env(cli_key, env_key)
    }

    fn api_settings_with_env(&self, cli_key: Option<String>, env_key: Option<String>) -> ApiSettings {
        let api_key = [cli_key, env_key, self.api.key.clone()]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .unwrap_or_default();

        ApiSettings {
            base_url: self.api.base_url().to_string(),
            api_key,
            per_page: self.api.per_page(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or invalid one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` (or the resolved directory when `None`).
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        tracing::debug!("no config directory available, using defaults");
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid configuration, using defaults");
            (
                Config::default(),
                Some(format!("Could not load {CONFIG_FILE}, using defaults ({err})")),
            )
        }
    }
}

/// Loads configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(Error::from)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
