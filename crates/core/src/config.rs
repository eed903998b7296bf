//! Configuration for Catalog Admin
//!
//! Settings are resolved in layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`catalog-admin.toml` unless a path is given)
//! 3. the `CATALOG_API_URL` environment variable
//! 4. explicit overrides from the command line
//!
//! ```toml
//! api_base_url = "http://localhost:5000/api"
//!
//! [window]
//! title = "Catalog Admin"
//! width = 1200.0
//! height = 800.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AdminError, AdminResult};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "catalog-admin.toml";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

// ============================================================================
// Config Types
// ============================================================================

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base URL of the catalog REST service; resource paths are appended
    pub api_base_url: String,
    /// Desktop window settings
    pub window: WindowConfig,
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Catalog Admin".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl AdminConfig {
    /// Parse a TOML document
    pub fn from_toml_str(contents: &str, path: &Path) -> AdminResult<Self> {
        toml::from_str(contents).map_err(|e| AdminError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> AdminResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AdminError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Resolve the configuration from all layers
    ///
    /// An explicit `path` must exist. Without one, `catalog-admin.toml` in the
    /// working directory is used only if present.
    pub fn load(path: Option<&Path>, api_url_override: Option<&str>) -> AdminResult<Self> {
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::resolve(path, env_url.as_deref(), api_url_override)
    }

    /// Layer resolution with the environment value passed in
    pub fn resolve(
        path: Option<&Path>,
        env_url: Option<&str>,
        api_url_override: Option<&str>,
    ) -> AdminResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("API base URL taken from {}", API_URL_ENV);
            config.api_base_url = url.trim().to_string();
        }

        if let Some(url) = api_url_override {
            config.api_base_url = url.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is usable
    pub fn validate(&self) -> AdminResult<()> {
        let url = self.api_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AdminError::config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(AdminError::config("window size must be positive"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
