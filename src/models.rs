//! Display-ready records produced by the catalog client.
//!
//! These are rebuilt for every request and never mutated after construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Publication status reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PublicationStatus::Ongoing => "ongoing",
            PublicationStatus::Completed => "completed",
            PublicationStatus::Hiatus => "hiatus",
            PublicationStatus::Cancelled => "cancelled",
            PublicationStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A manga as shown in catalog listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaSummary {
    pub id: String,
    pub title: String,
    /// Never empty; falls back to the placeholder image.
    pub cover_url: String,
    /// Never empty; falls back to the unknown-author sentinel.
    pub author_name: String,
    /// Display names in catalog order.
    pub tags: Vec<String>,
    pub status: PublicationStatus,
    /// May be a placeholder sentence rather than a chapter number.
    pub latest_chapter: String,
    pub description: String,
    /// Catalog record type, e.g. `manga`.
    pub format: String,
}

/// A single manga with its full localized attribute set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaDetail {
    #[serde(flatten)]
    pub summary: MangaSummary,
    /// Localized titles keyed by locale.
    pub titles: BTreeMap<String, String>,
    /// Localized descriptions keyed by locale.
    pub descriptions: BTreeMap<String, String>,
    pub year: Option<u32>,
    pub original_language: Option<String>,
    pub content_rating: Option<String>,
}

impl MangaDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

/// A page of manga listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangaPage {
    pub items: Vec<MangaSummary>,
    /// Number of items actually returned for this page, not the catalog total.
    pub total: usize,
}

/// A chapter entry in a manga's chapter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub volume: Option<String>,
    pub chapter: Option<String>,
    pub title: String,
    /// ISO-8601 timestamp as returned by the catalog.
    pub publish_date: String,
    pub language: Option<String>,
}

/// Absolute page image URLs of a chapter, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ChapterPages(pub Vec<String>);

impl ChapterPages {
    pub fn urls(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
