//! Quantum - a web reader for a public manga catalog.
//!
//! This library provides:
//! - A catalog client that fetches and enriches manga, chapter, and page data
//! - Page loaders that turn route parameters into view data
//! - An axum front end rendering the loaders' output as HTML and JSON

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod loaders;
pub mod models;
pub mod server;
pub mod theme;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use catalog::{CatalogClient, Transport};
pub use config::Config;
pub use console::Console;
pub use error::{CatalogError, ConfigError, LoaderError};
pub use models::{Chapter, ChapterPages, MangaDetail, MangaPage, MangaSummary, PublicationStatus};
pub use theme::{Theme, ThemeStore};
