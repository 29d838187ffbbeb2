//! Per-route page loaders.
//!
//! Each loader performs one intent against the catalog and returns the data
//! its view renders. Any failure is a [`LoaderError`], which the route
//! boundary turns into a not-found page.

use crate::catalog::{CatalogClient, is_catalog_id};
use crate::error::LoaderError;
use crate::models::{Chapter, ChapterPages, MangaDetail, MangaSummary};
use serde::Serialize;

/// Number of numbered links shown in the pager.
const PAGER_WIDTH: u32 = 3;

/// Data for the catalog listing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub mangas: Vec<MangaSummary>,
    pub current_page: u32,
    /// Item count of the current page; the catalog total is not requested.
    pub total_pages: u32,
}

impl HomeData {
    /// Target of the "previous" link.
    pub fn previous_page(&self) -> u32 {
        if self.current_page > 1 {
            self.current_page - 1
        } else {
            1
        }
    }

    /// Target of the "next" link.
    pub fn next_page(&self) -> u32 {
        if self.current_page < self.total_pages {
            self.current_page + 1
        } else {
            self.total_pages
        }
    }

    /// Numbered page links around the current page.
    pub fn page_window(&self) -> Vec<u32> {
        let first = self.current_page.saturating_sub((PAGER_WIDTH - 1) / 2).max(1);
        (first..first.saturating_add(PAGER_WIDTH.min(self.total_pages)))
            .filter(|page| *page <= self.total_pages)
            .collect()
    }
}

/// Data for a manga's detail page.
#[derive(Debug, Clone, Serialize)]
pub struct MangaData {
    pub manga: MangaDetail,
    pub chapters: Vec<Chapter>,
}

/// Data for the chapter reader.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterData {
    pub manga_id: Option<String>,
    pub chapter_id: String,
    pub pages: ChapterPages,
}

/// Parses a 1-based page number, defaulting to 1 when absent or invalid.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Zero-based catalog offset of a 1-based page, or `None` when it does not fit in a `u32`.
pub fn page_offset(page: u32, page_size: u32) -> Option<u32> {
    page_size.checked_mul(page.saturating_sub(1))
}

/// Loads one page of the catalog listing.
pub async fn load_home(
    catalog: &CatalogClient,
    page: Option<&str>,
    page_size: u32,
) -> Result<HomeData, LoaderError> {
    let current_page = parse_page(page);
    let offset = page_offset(current_page, page_size).ok_or_else(|| {
        LoaderError::NotFound(format!("catalog page {} is out of range", current_page))
    })?;

    log::debug!("Loading catalog page {} (offset {})", current_page, offset);
    let page = catalog.list_mangas(offset, page_size).await?;

    Ok(HomeData {
        total_pages: u32::try_from(page.total).unwrap_or(u32::MAX),
        mangas: page.items,
        current_page,
    })
}

/// Loads a manga and its chapter list.
pub async fn load_manga(catalog: &CatalogClient, manga_id: &str) -> Result<MangaData, LoaderError> {
    ensure_id(manga_id, "manga")?;

    let manga = catalog.get_manga(manga_id).await?;
    let chapters = catalog.list_chapters(manga_id).await?;

    Ok(MangaData { manga, chapters })
}

/// Loads a chapter's page images. An empty chapter is not found.
pub async fn load_chapter(
    catalog: &CatalogClient,
    manga_id: Option<&str>,
    chapter_id: &str,
) -> Result<ChapterData, LoaderError> {
    ensure_id(chapter_id, "chapter")?;

    let pages = catalog.list_chapter_images(chapter_id).await?;
    if pages.is_empty() {
        return Err(LoaderError::NotFound(format!(
            "chapter {} has no pages",
            chapter_id
        )));
    }

    Ok(ChapterData {
        manga_id: manga_id.map(str::to_string),
        chapter_id: chapter_id.to_string(),
        pages,
    })
}

fn ensure_id(id: &str, what: &str) -> Result<(), LoaderError> {
    if is_catalog_id(id) {
        Ok(())
    } else {
        Err(LoaderError::NotFound(format!("invalid {} id '{}'", what, id)))
    }
}
