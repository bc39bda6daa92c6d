//! Application configuration.
//!
//! Configuration is optional and stored as TOML:
//! - Linux: `~/.config/dealcards/config.toml`
//! - Windows: `%APPDATA%/dealcards/config.toml`

use std::path::{Path, PathBuf};

use dealcards_catalog::Endpoints;
use dealcards_catalog::endpoints::{DEFAULT_API_BASE, DEFAULT_SITE_BASE};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the catalog JSON API.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,

    /// Base URL used for deal redirect links.
    #[serde(default = "default_site_base")]
    pub site_base_url: String,

    /// Whether result cards animate in.
    #[serde(default = "default_animations")]
    pub animations: bool,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}

fn default_site_base() -> String {
    DEFAULT_SITE_BASE.into()
}

fn default_animations() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            site_base_url: default_site_base(),
            animations: default_animations(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default location.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_dir().join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    ///
    /// Nothing is written back.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base_url, &self.site_base_url)
    }
}

/// Returns the platform-specific configuration directory.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("dealcards")
    }

    #[cfg(not(target_os = "windows"))]
    {
        config_dir_from(
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }
}

/// Unset and empty variables are treated alike, so an empty
/// `XDG_CONFIG_HOME` never yields a relative path.
#[cfg(not(target_os = "windows"))]
fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    let set = |v: &String| !v.is_empty();
    let base = xdg_config_home
        .filter(set)
        .map(PathBuf::from)
        .or_else(|| home.filter(set).map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    base.join("dealcards")
}
