//! # Registro Configuration
//!
//! Where the collections come from and how lists are displayed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     REGISTRO_API_URL=https://api.escuelajs.co/api/v1                   │
//! │     REGISTRO_PRODUCTS_PATH / REGISTRO_EMPLOYEES_PATH                   │
//! │     REGISTRO_TIMEOUT_SECS                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or ~/.config/registro/config.toml (Linux)         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "https://api.escuelajs.co/api/v1"
//! products_path = "products"
//! employees_path = "users"
//! # timeout_secs = 10   # unset = wait as long as the server takes
//!
//! [display]
//! skeleton_cards = 6
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// API Settings
// =============================================================================

/// Remote API location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL all collection paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_products_path")]
    pub products_path: String,

    #[serde(default = "default_employees_path")]
    pub employees_path: String,

    /// Per-request timeout. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.escuelajs.co/api/v1".to_string()
}

fn default_products_path() -> String {
    "products".to_string()
}

fn default_employees_path() -> String {
    "users".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            products_path: default_products_path(),
            employees_path: default_employees_path(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    /// Full URL for a collection path.
    ///
    /// Joins with exactly one `/`, whatever slashes the two halves carry.
    pub fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// How list views render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Placeholder rows shown while a list is loading.
    #[serde(default = "default_skeleton_cards")]
    pub skeleton_cards: usize,
}

fn default_skeleton_cards() -> usize {
    6
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            skeleton_cards: default_skeleton_cards(),
        }
    }
}

// =============================================================================
// Registro Config
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistroConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl RegistroConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        let base = Url::parse(&self.api.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.products_path.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "products_path must not be empty".into(),
            ));
        }

        if self.api.employees_path.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "employees_path must not be empty".into(),
            ));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.display.skeleton_cards == 0 {
            return Err(CatalogError::InvalidConfig(
                "skeleton_cards must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Overrides the API base URL (e.g. from a command-line flag).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> CatalogResult<Self> {
        self.api.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("REGISTRO_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Ok(path) = std::env::var("REGISTRO_PRODUCTS_PATH") {
            self.api.products_path = path;
        }

        if let Ok(path) = std::env::var("REGISTRO_EMPLOYEES_PATH") {
            self.api.employees_path = path;
        }

        if let Ok(secs) = std::env::var("REGISTRO_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring non-numeric REGISTRO_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "registro", "registro")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
