//! Configuration management for Quantum.
//!
//! Handles loading, saving, and validating configuration from
//! platform-specific config directories.

use crate::error::ConfigError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Application name used for config directory.
const APP_NAME: &str = "Quantum";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote catalog settings.
    pub catalog: CatalogConfig,

    /// HTTP server settings.
    pub server: ServerConfig,

    /// Reader behavior settings.
    pub reader: ReaderConfig,
}

/// Remote catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL for the catalog REST API.
    pub api_base_url: String,

    /// Base URL for uploaded files (cover art).
    pub uploads_base_url: String,

    /// Request timeout in seconds.
    pub timeout_sec: u64,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Image shown when a cover can't be resolved.
    pub placeholder_cover_url: String,

    /// Author name shown when the author can't be resolved.
    pub unknown_author: String,

    /// Shown when a manga has no latest chapter.
    pub missing_chapter_text: String,

    /// Shown when no preferred locale has a description.
    pub missing_description_text: String,

    /// Locales tried in order when picking a description.
    pub description_locales: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.mangadex.org".to_string(),
            uploads_base_url: "https://uploads.mangadex.org".to_string(),
            timeout_sec: 30,
            user_agent: concat!("quantum/", env!("CARGO_PKG_VERSION")).to_string(),
            placeholder_cover_url: "https://source.unsplash.com/random".to_string(),
            unknown_author: "Desconhecido".to_string(),
            missing_chapter_text: "Não foi encontrado capítulos".to_string(),
            missing_description_text: "Não possui descrição.".to_string(),
            description_locales: vec!["pt-br".to_string(), "en".to_string()],
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Reader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Manga shown per catalog page.
    pub page_size: u32,

    /// Serve reduced-size page images.
    pub data_saver: bool,

    /// Theme applied until the user picks one.
    pub default_theme: Theme,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            data_saver: false,
            default_theme: Theme::System,
        }
    }
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from the default location.
    ///
    /// If the config file doesn't exist, creates a default one.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("catalog.api_base_url", &self.catalog.api_base_url),
            ("catalog.uploads_base_url", &self.catalog.uploads_base_url),
        ] {
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        for (key, value) in [
            ("catalog.placeholder_cover_url", &self.catalog.placeholder_cover_url),
            ("catalog.unknown_author", &self.catalog.unknown_author),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if self.catalog.description_locales.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.description_locales".to_string(),
                message: "must list at least one locale".to_string(),
            });
        }

        if self.reader.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "reader.page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
