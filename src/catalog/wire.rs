//! JSON shapes returned by the catalog API.
//!
//! Only the fields the reader uses are modelled; everything else is ignored.

use crate::models::PublicationStatus;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Locale code to text.
pub type LocalizedString = BTreeMap<String, String>;

/// The catalog sends an empty array instead of `{}` for empty localized strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedRepr {
    Map(LocalizedString),
    List(Vec<serde_json::Value>),
}

fn localized<'de, D>(deserializer: D) -> Result<LocalizedString, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LocalizedRepr::deserialize(deserializer)? {
        LocalizedRepr::Map(map) => map,
        LocalizedRepr::List(_) => LocalizedString::new(),
    })
}

/// Every catalog response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct MangaData {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub attributes: MangaAttributes,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl MangaData {
    /// Id of the first related entity of the given type.
    pub fn related_id(&self, kind: &str) -> Option<&str> {
        self.relationships
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.id.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaAttributes {
    #[serde(default, deserialize_with = "localized")]
    pub title: LocalizedString,
    #[serde(default)]
    pub alt_titles: Vec<LocalizedString>,
    #[serde(default, deserialize_with = "localized")]
    pub description: LocalizedString,
    pub status: Option<PublicationStatus>,
    pub last_chapter: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagData>,
    pub year: Option<u32>,
    pub original_language: Option<String>,
    pub content_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct TagData {
    #[serde(default)]
    pub id: String,
    pub attributes: TagAttributes,
}

#[derive(Debug, Deserialize)]
pub struct TagAttributes {
    #[serde(default, deserialize_with = "localized")]
    pub name: LocalizedString,
}

#[derive(Debug, Deserialize)]
pub struct CoverData {
    pub attributes: CoverAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverAttributes {
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthorData {
    pub attributes: AuthorAttributes,
}

#[derive(Debug, Deserialize)]
pub struct AuthorAttributes {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ChapterData {
    pub id: String,
    pub attributes: ChapterAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAttributes {
    pub volume: Option<String>,
    pub chapter: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub publish_at: String,
    pub translated_language: Option<String>,
}

/// Image server manifest for one chapter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtHomeResponse {
    pub base_url: String,
    pub chapter: AtHomeChapter,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtHomeChapter {
    pub hash: String,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub data_saver: Vec<String>,
}
