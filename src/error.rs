//! Error types for the Quantum reader.
//!
//! Uses `thiserror` for structured error definitions that provide
//! clear context about what went wrong.

use thiserror::Error;

/// Error type for catalog API operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The requested resource doesn't exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body didn't match the expected shape
    #[error("Failed to parse catalog response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An endpoint URL couldn't be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Error type surfaced by page loaders at the route boundary.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Nothing to show for the requested route
    #[error("Not found: {0}")]
    NotFound(String),

    /// A catalog call failed while loading the page
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory not found
    #[error("Could not determine config directory")]
    NoConfigDir,
}
