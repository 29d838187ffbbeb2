//! Shared theme preference.
//!
//! The current theme is held in a `watch` channel owned by [`ThemeStore`].
//! Views read it through [`ThemeStore::current`], the `/theme` route writes it
//! through [`ThemeStore::set`], and anything interested in changes holds a
//! receiver from [`ThemeStore::subscribe`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Color scheme applied to rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the browser's `prefers-color-scheme`.
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Label shown in the theme picker.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Application-wide theme state.
///
/// Cloning is cheap and every clone observes the same value.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: watch::Sender<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Updates the theme. Subscribers are only notified when the value changes.
    ///
    /// Returns `true` if the theme changed.
    pub fn set(&self, theme: Theme) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
