//! Client for the remote manga catalog.
//!
//! [`CatalogClient`] turns logical catalog operations into GET requests and
//! enriches the raw records into the display-ready types in [`crate::models`].
//! Cover and author lookups degrade to configured sentinel values; every other
//! failure is returned to the caller.

mod transport;
mod wire;

pub use transport::{HttpTransport, Transport, create_http_client};

use crate::config::{CatalogConfig, Config};
use crate::error::CatalogError;
use crate::models::{
    Chapter, ChapterPages, MangaDetail, MangaPage, MangaSummary, PublicationStatus,
};
use futures::future::join_all;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};
use url::Url;
use wire::{
    AtHomeResponse, AuthorData, ChapterData, CoverData, Envelope, LocalizedString, MangaData,
    TagData,
};

/// Catalog identifiers are UUIDs.
static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Title page URLs on the catalog's public site.
static TITLE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?mangadex\.org/title/([0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})(?:[/?#].*)?$",
    )
    .unwrap()
});

/// Prefix for generated chapter titles.
const CHAPTER_TITLE_PREFIX: &str = "Capítulo";

/// Title for chapters that have neither a title nor a number.
const UNNUMBERED_CHAPTER_TITLE: &str = "Capítulo sem número";

const COVER_ART: &str = "cover_art";
const AUTHOR: &str = "author";

/// Returns true if the string looks like a catalog identifier.
pub fn is_catalog_id(s: &str) -> bool {
    ID_PATTERN.is_match(s)
}

/// Extracts a manga id from a bare id or a catalog title URL.
pub fn parse_manga_id(input: &str) -> Option<String> {
    let input = input.trim();
    if is_catalog_id(input) {
        return Some(input.to_lowercase());
    }
    TITLE_URL_PATTERN
        .captures(input)
        .map(|caps| caps[1].to_lowercase())
}

/// Catalog endpoint URLs.
#[derive(Debug, Clone)]
struct Endpoints {
    api: Url,
    uploads: Url,
}

impl Endpoints {
    fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            api: Url::parse(&config.api_base_url)?,
            uploads: Url::parse(&config.uploads_base_url)?,
        })
    }

    fn join(base: &Url, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn manga_collection(&self, offset: u32, limit: u32) -> Result<Url, CatalogError> {
        let mut url = Self::join(&self.api, &["manga"])?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    fn manga(&self, manga_id: &str) -> Result<Url, CatalogError> {
        Self::join(&self.api, &["manga", manga_id])
    }

    fn cover(&self, cover_id: &str) -> Result<Url, CatalogError> {
        Self::join(&self.api, &["cover", cover_id])
    }

    fn cover_upload(&self, manga_id: &str, file_name: &str) -> Result<Url, CatalogError> {
        Self::join(&self.uploads, &["covers", manga_id, file_name])
    }

    fn author(&self, author_id: &str) -> Result<Url, CatalogError> {
        Self::join(&self.api, &["author", author_id])
    }

    fn chapters(&self, manga_id: &str) -> Result<Url, CatalogError> {
        let mut url = Self::join(&self.api, &["chapter"])?;
        url.query_pairs_mut().append_pair("manga", manga_id);
        Ok(url)
    }

    fn image_server(&self, chapter_id: &str) -> Result<Url, CatalogError> {
        Self::join(&self.api, &["at-home", "server", chapter_id])
    }
}

/// Client for the remote catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
    config: CatalogConfig,
    data_saver: bool,
}

impl CatalogClient {
    /// Creates a client that talks to the catalog over HTTP.
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let transport = HttpTransport::new(&config.catalog)?;
        Ok(Self::with_transport(Arc::new(transport), config.catalog.clone())?
            .with_data_saver(config.reader.data_saver))
    }

    /// Creates a client over any transport.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            transport,
            endpoints: Endpoints::new(&config)?,
            config,
            data_saver: false,
        })
    }

    /// Serve reduced-size page images from the image server.
    pub fn with_data_saver(mut self, enabled: bool) -> Self {
        self.data_saver = enabled;
        self
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, CatalogError> {
        let body = self.transport.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches up to `limit` manga starting at `offset`, enriched for display.
    ///
    /// Items are enriched concurrently and returned in catalog order. `total`
    /// is the number of items on this page, not the size of the catalog.
    pub async fn list_mangas(&self, offset: u32, limit: u32) -> Result<MangaPage, CatalogError> {
        let url = self.endpoints.manga_collection(offset, limit)?;
        let page: Envelope<Vec<MangaData>> = self.fetch(&url).await?;

        let items = join_all(page.data.iter().map(|manga| self.enrich(manga))).await;
        let total = items.len();

        Ok(MangaPage { items, total })
    }

    /// Fetches a single manga with its localized attributes.
    pub async fn get_manga(&self, manga_id: &str) -> Result<MangaDetail, CatalogError> {
        let url = self.endpoints.manga(manga_id)?;
        let manga: Envelope<MangaData> = self.fetch(&url).await?;
        let manga = manga.data;

        let summary = self.enrich(&manga).await;
        let attributes = manga.attributes;

        Ok(MangaDetail {
            summary,
            titles: attributes.title,
            descriptions: attributes.description,
            year: attributes.year,
            original_language: attributes.original_language,
            content_rating: attributes.content_rating,
        })
    }

    /// Resolves the cover image URL for a manga. Never fails.
    pub async fn resolve_cover_url(&self, cover_id: Option<&str>, manga_id: &str) -> String {
        let Some(cover_id) = cover_id else {
            return self.config.placeholder_cover_url.clone();
        };

        match self.fetch_cover_url(cover_id, manga_id).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Cover {} for manga {} unavailable: {}", cover_id, manga_id, e);
                self.config.placeholder_cover_url.clone()
            }
        }
    }

    async fn fetch_cover_url(&self, cover_id: &str, manga_id: &str) -> Result<String, CatalogError> {
        let url = self.endpoints.cover(cover_id)?;
        let cover: Envelope<CoverData> = self.fetch(&url).await?;
        let file_name = cover.data.attributes.file_name;

        if file_name.is_empty() {
            return Err(CatalogError::NotFound(format!("file name for cover {}", cover_id)));
        }

        Ok(self.endpoints.cover_upload(manga_id, &file_name)?.to_string())
    }

    /// Resolves an author's display name. Never fails.
    pub async fn resolve_author_name(&self, author_id: Option<&str>) -> String {
        let Some(author_id) = author_id else {
            return self.config.unknown_author.clone();
        };

        match self.fetch_author_name(author_id).await {
            Ok(name) => name,
            Err(e) => {
                log::warn!("Author {} unavailable: {}", author_id, e);
                self.config.unknown_author.clone()
            }
        }
    }

    async fn fetch_author_name(&self, author_id: &str) -> Result<String, CatalogError> {
        let url = self.endpoints.author(author_id)?;
        let author: Envelope<AuthorData> = self.fetch(&url).await?;
        let name = author.data.attributes.name;

        if name.trim().is_empty() {
            return Err(CatalogError::NotFound(format!("name for author {}", author_id)));
        }

        Ok(name)
    }

    /// Fetches every chapter of a manga in catalog order.
    pub async fn list_chapters(&self, manga_id: &str) -> Result<Vec<Chapter>, CatalogError> {
        let url = self.endpoints.chapters(manga_id)?;
        let chapters: Envelope<Vec<ChapterData>> = self.fetch(&url).await?;

        Ok(chapters.data.into_iter().map(to_chapter).collect())
    }

    /// Fetches a chapter's page image URLs in reading order.
    pub async fn list_chapter_images(&self, chapter_id: &str) -> Result<ChapterPages, CatalogError> {
        let url = self.endpoints.image_server(chapter_id)?;
        let manifest: AtHomeResponse = self.fetch(&url).await?;

        let (quality, files) = if self.data_saver {
            ("data-saver", &manifest.chapter.data_saver)
        } else {
            ("data", &manifest.chapter.data)
        };

        let base_url = manifest.base_url.trim_end_matches('/');
        let urls = files
            .iter()
            .map(|file_name| {
                format!("{}/{}/{}/{}", base_url, quality, manifest.chapter.hash, file_name)
            })
            .collect();

        Ok(ChapterPages(urls))
    }

    /// Resolves cover, tags, and author for one record, in that order.
    async fn enrich(&self, manga: &MangaData) -> MangaSummary {
        let cover_url = self
            .resolve_cover_url(manga.related_id(COVER_ART), &manga.id)
            .await;
        let tags = manga.attributes.tags.iter().map(tag_name).collect();
        let author_name = self.resolve_author_name(manga.related_id(AUTHOR)).await;

        let attributes = &manga.attributes;
        let latest_chapter = attributes
            .last_chapter
            .as_deref()
            .filter(|c| !c.is_empty())
            .map_or_else(|| self.config.missing_chapter_text.clone(), str::to_string);

        MangaSummary {
            id: manga.id.clone(),
            title: select_title(manga),
            cover_url,
            author_name,
            tags,
            status: attributes.status.unwrap_or(PublicationStatus::Unknown),
            latest_chapter,
            description: self.select_description(&attributes.description),
            format: manga.kind.clone(),
        }
    }

    /// First non-empty description among the preferred locales.
    fn select_description(&self, descriptions: &LocalizedString) -> String {
        self.config
            .description_locales
            .iter()
            .filter_map(|locale| descriptions.get(locale))
            .find(|text| !text.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| self.config.missing_description_text.clone())
    }
}

fn non_empty<'a>(map: &'a LocalizedString, locale: &str) -> Option<&'a String> {
    map.get(locale).filter(|s| !s.trim().is_empty())
}

fn first_non_empty(map: &LocalizedString) -> Option<&String> {
    map.values().find(|s| !s.trim().is_empty())
}

fn select_title(manga: &MangaData) -> String {
    let attributes = &manga.attributes;
    non_empty(&attributes.title, "en")
        .or_else(|| attributes.alt_titles.iter().find_map(|alt| non_empty(alt, "en")))
        .or_else(|| first_non_empty(&attributes.title))
        .cloned()
        .unwrap_or_else(|| manga.id.clone())
}

fn tag_name(tag: &TagData) -> String {
    let names = &tag.attributes.name;
    non_empty(names, "en")
        .or_else(|| first_non_empty(names))
        .cloned()
        .unwrap_or_else(|| tag.id.clone())
}

fn chapter_title(title: Option<&str>, number: Option<&str>) -> String {
    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    match number.filter(|n| !n.is_empty()) {
        Some(number) => format!("{} {}", CHAPTER_TITLE_PREFIX, number),
        None => UNNUMBERED_CHAPTER_TITLE.to_string(),
    }
}

fn to_chapter(chapter: ChapterData) -> Chapter {
    let attributes = chapter.attributes;
    let title = chapter_title(attributes.title.as_deref(), attributes.chapter.as_deref());

    Chapter {
        id: chapter.id,
        volume: attributes.volume,
        chapter: attributes.chapter,
        title,
        publish_date: attributes.publish_at,
        language: attributes.translated_language,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_manga_id() {
        assert_eq!(parse_manga_id(MANGA_ID).as_deref(), Some(MANGA_ID));
        assert_eq!(
            parse_manga_id(&format!("https://mangadex.org/title/{}/some-title", MANGA_ID)).as_deref(),
            Some(MANGA_ID)
        );
        assert_eq!(
            parse_manga_id(&format!("  https://mangadex.org/title/{}  ", MANGA_ID.to_uppercase()))
                .as_deref(),
            Some(MANGA_ID)
        );
        assert_eq!(parse_manga_id("one-piece"), None);
        assert_eq!(parse_manga_id("https://example.com/title/x"), None);
    }

    #[test]
    fn test_chapter_title_fallback() {
        assert_eq!(chapter_title(None, Some("12")), "Capítulo 12");
        assert_eq!(chapter_title(Some(""), Some("12")), "Capítulo 12");
        assert_eq!(chapter_title(Some("The Return"), Some("12")), "The Return");
        assert_eq!(chapter_title(None, None), "Capítulo sem número");
    }

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new(&CatalogConfig::default()).unwrap();
        assert_eq!(
            endpoints.manga_collection(9, 9).unwrap().as_str(),
            "https://api.mangadex.org/manga?offset=9&limit=9"
        );
        assert_eq!(
            endpoints.chapters("m1").unwrap().as_str(),
            "https://api.mangadex.org/chapter?manga=m1"
        );
        assert_eq!(
            endpoints.image_server("c1").unwrap().as_str(),
            "https://api.mangadex.org/at-home/server/c1"
        );
        assert_eq!(
            endpoints.cover_upload("m1", "cover.jpg").unwrap().as_str(),
            "https://uploads.mangadex.org/covers/m1/cover.jpg"
        );
    }

    #[tokio::test]
    async fn test_cover_without_id_is_placeholder() {
        let (client, stub) = client(StubTransport::new());

        let url = client.resolve_cover_url(None, "m1").await;
        assert_eq!(url, "https://source.unsplash.com/random");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cover_resolves_upload_url() {
        let (client, _) = client(
            StubTransport::new().with_json(&format!("{}/cover/c1", API), cover_json("vol1.png")),
        );

        let url = client.resolve_cover_url(Some("c1"), "m1").await;
        assert_eq!(url, "https://uploads.mangadex.org/covers/m1/vol1.png");
    }

    #[tokio::test]
    async fn test_cover_failures_degrade_to_placeholder() {
        let placeholder = CatalogConfig::default().placeholder_cover_url;
        let (client, _) = client(
            StubTransport::new()
                .with_status(&format!("{}/cover/c500", API), 500)
                .with_body(&format!("{}/cover/cbad", API), "<html>oops</html>")
                .with_json(&format!("{}/cover/cempty", API), cover_json(""))
                .with_json(&format!("{}/cover/cnodata", API), json!({"result": "error"})),
        );

        for cover_id in ["c500", "cbad", "cempty", "cnodata", "cmissing"] {
            let url = client.resolve_cover_url(Some(cover_id), "m1").await;
            assert_eq!(url, placeholder, "cover {}", cover_id);
            assert!(!url.is_empty());
        }
    }

    #[tokio::test]
    async fn test_author_resolution() {
        let (client, stub) = client(
            StubTransport::new()
                .with_json(&format!("{}/author/a1", API), author_json("Oda Eiichiro"))
                .with_status(&format!("{}/author/a2", API), 503)
                .with_json(&format!("{}/author/a3", API), json!({"data": {}}))
                .with_json(&format!("{}/author/a4", API), author_json(""))
                .with_json(&format!("{}/author/a5", API), author_json("   ")),
        );

        assert_eq!(client.resolve_author_name(Some("a1")).await, "Oda Eiichiro");
        assert_eq!(client.resolve_author_name(Some("a2")).await, "Desconhecido");
        assert_eq!(client.resolve_author_name(Some("a3")).await, "Desconhecido");
        assert_eq!(client.resolve_author_name(Some("a4")).await, "Desconhecido");
        assert_eq!(client.resolve_author_name(Some("a5")).await, "Desconhecido");
        assert_eq!(client.resolve_author_name(None).await, "Desconhecido");
        assert_eq!(stub.requests().len(), 5);
    }

    #[tokio::test]
    async fn test_list_mangas_enriches_in_order() {
        let stub = StubTransport::new()
            .with_json(
                &format!("{}/manga?offset=0&limit=3", API),
                json!({"data": [
                    manga_json("m1", "First", Some("c1"), Some("a1")),
                    manga_json("m2", "Second", None, Some("a-missing")),
                    manga_json("m3", "Third", Some("c3"), None),
                ], "total": 1000}),
            )
            .with_json(&format!("{}/cover/c1", API), cover_json("one.jpg"))
            .with_json(&format!("{}/cover/c3", API), cover_json("three.jpg"))
            .with_json(&format!("{}/author/a1", API), author_json("Author One"));
        let (client, _) = client(stub);

        let page = client.list_mangas(0, 3).await.unwrap();
        assert_eq!(page.total, 3);

        let ids: Vec<&str> = page.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);

        let first = &page.items[0];
        assert_eq!(first.title, "First");
        assert_eq!(first.cover_url, "https://uploads.mangadex.org/covers/m1/one.jpg");
        assert_eq!(first.author_name, "Author One");
        assert_eq!(first.tags, vec!["Action", "Drama"]);
        assert_eq!(first.status, PublicationStatus::Ongoing);
        assert_eq!(first.latest_chapter, "42");
        assert_eq!(first.format, "manga");

        assert_eq!(page.items[1].cover_url, "https://source.unsplash.com/random");
        assert_eq!(page.items[1].author_name, "Desconhecido");
        assert_eq!(page.items[2].author_name, "Desconhecido");
    }

    #[tokio::test]
    async fn test_list_mangas_keeps_order_when_first_item_finishes_last() {
        let stub = StubTransport::new()
            .with_json(
                &format!("{}/manga?offset=0&limit=3", API),
                json!({"data": [
                    manga_json("m1", "First", Some("c1"), Some("a1")),
                    manga_json("m2", "Second", Some("c2"), Some("a2")),
                    manga_json("m3", "Third", Some("c3"), Some("a3")),
                ]}),
            )
            .with_json(&format!("{}/cover/c1", API), cover_json("one.jpg"))
            .with_json(&format!("{}/cover/c2", API), cover_json("two.jpg"))
            .with_json(&format!("{}/cover/c3", API), cover_json("three.jpg"))
            .with_json(&format!("{}/author/a1", API), author_json("Author One"))
            .with_json(&format!("{}/author/a2", API), author_json("Author Two"))
            .with_json(&format!("{}/author/a3", API), author_json("Author Three"))
            .with_delay(&format!("{}/cover/c1", API), 80)
            .with_delay(&format!("{}/author/a1", API), 80)
            .with_delay(&format!("{}/cover/c2", API), 20);
        let (client, stub) = client(stub);

        let page = client.list_mangas(0, 3).await.unwrap();

        let ids: Vec<&str> = page.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
        let authors: Vec<&str> = page.items.iter().map(|m| m.author_name.as_str()).collect();
        assert_eq!(authors, vec!["Author One", "Author Two", "Author Three"]);
        assert_eq!(page.items[0].cover_url, "https://uploads.mangadex.org/covers/m1/one.jpg");
        assert_eq!(page.items[2].cover_url, "https://uploads.mangadex.org/covers/m3/three.jpg");

        // m1's author is requested after every other item has finished.
        let requests = stub.requests();
        assert_eq!(requests.last().map(String::as_str), Some(format!("{}/author/a1", API).as_str()));
        assert!(stub.max_in_flight() >= 2);
    }

    #[tokio::test]
    async fn test_list_mangas_propagates_collection_failure() {
        let (client, _) = client(
            StubTransport::new().with_status(&format!("{}/manga?offset=0&limit=9", API), 500),
        );

        let err = client.list_mangas(0, 9).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_get_manga_fallbacks() {
        let mut manga = manga_json(MANGA_ID, "", None, None);
        manga["attributes"]["title"] = json!({"ja-ro": "Romaji Title"});
        manga["attributes"]["altTitles"] = json!([{"ja": "日本語"}, {"en": "English Alt"}]);
        manga["attributes"]["description"] = json!([]);
        manga["attributes"]["lastChapter"] = json!("");
        manga["attributes"]["tags"] = json!([
            {"id": "t9", "attributes": {"name": {"pt-br": "Romance"}}},
            {"id": "t10", "attributes": {"name": {}}},
            {"id": "t11", "attributes": {"name": {"en": "Action"}}},
            {"id": "t12", "attributes": {"name": {"en": "Action"}}}
        ]);
        let (client, _) = client(
            StubTransport::new()
                .with_json(&format!("{}/manga/{}", API, MANGA_ID), json!({"data": manga})),
        );

        let detail = client.get_manga(MANGA_ID).await.unwrap();
        assert_eq!(detail.id(), MANGA_ID);
        assert_eq!(detail.summary.title, "English Alt");
        assert_eq!(detail.summary.description, "Não possui descrição.");
        assert_eq!(detail.summary.latest_chapter, "Não foi encontrado capítulos");
        assert_eq!(detail.summary.tags, vec!["Romance", "t10", "Action", "Action"]);
        assert_eq!(detail.year, Some(2020));
        assert!(detail.descriptions.is_empty());
    }

    #[tokio::test]
    async fn test_description_locale_order() {
        let mut manga = manga_json("m1", "Title", None, None);
        manga["attributes"]["description"] = json!({"en": "English", "pt-br": "Português"});
        let (client, _) = client(
            StubTransport::new().with_json(&format!("{}/manga/m1", API), json!({"data": manga})),
        );

        let detail = client.get_manga("m1").await.unwrap();
        assert_eq!(detail.summary.description, "Português");
        assert_eq!(detail.descriptions.len(), 2);
    }

    #[tokio::test]
    async fn test_get_manga_not_found() {
        let (client, _) = client(StubTransport::new());

        let err = client.get_manga("nope").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_chapters() {
        let (client, _) = client(StubTransport::new().with_json(
            &format!("{}/chapter?manga=m1", API),
            json!({"data": [
                {"id": "ch2", "attributes": {"volume": "1", "chapter": "2", "title": "Second", "publishAt": "2023-01-02T00:00:00+00:00", "translatedLanguage": "en"}},
                {"id": "ch1", "attributes": {"volume": null, "chapter": "12", "title": null, "publishAt": "2023-01-01T00:00:00+00:00"}}
            ]}),
        ));

        let chapters = client.list_chapters("m1").await.unwrap();
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].id, "ch2");
        assert_eq!(chapters[0].title, "Second");
        assert_eq!(chapters[0].volume.as_deref(), Some("1"));
        assert_eq!(chapters[1].title, "Capítulo 12");
        assert_eq!(chapters[1].volume, None);
        assert_eq!(chapters[1].publish_date, "2023-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_chapter_images_preserve_order() {
        let files = json!(["3.png", "1.png", "2.png", "1.png"]);
        let (client, _) = client(StubTransport::new().with_json(
            &format!("{}/at-home/server/ch1", API),
            json!({
                "baseUrl": "https://node.example/",
                "chapter": {"hash": "h4sh", "data": files, "dataSaver": ["s1.jpg"]}
            }),
        ));

        let pages = client.list_chapter_images("ch1").await.unwrap();
        assert_eq!(
            pages.urls(),
            [
                "https://node.example/data/h4sh/3.png",
                "https://node.example/data/h4sh/1.png",
                "https://node.example/data/h4sh/2.png",
                "https://node.example/data/h4sh/1.png",
            ]
        );

        let saver = client.with_data_saver(true);
        let pages = saver.list_chapter_images("ch1").await.unwrap();
        assert_eq!(pages.urls(), ["https://node.example/data-saver/h4sh/s1.jpg"]);
    }

    #[tokio::test]
    async fn test_chapter_images_empty_is_ok_here() {
        let (client, _) = client(StubTransport::new().with_json(
            &format!("{}/at-home/server/ch1", API),
            json!({"baseUrl": "https://node.example", "chapter": {"hash": "h", "data": []}}),
        ));

        let pages = client.list_chapter_images("ch1").await.unwrap();
        assert!(pages.is_empty());
    }
}
