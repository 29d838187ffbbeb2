//! Terminal rendering with ANSI color support.
//!
//! The CLI subcommands print loader output through [`Console`]. Colors are
//! disabled when stdout is not a TTY or `NO_COLOR` is set.

use crate::loaders::{ChapterData, HomeData, MangaData};
use crate::models::{Chapter, MangaSummary};
use crate::utils::format_publish_date;
use std::io::{self, IsTerminal};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Gray,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output handler with color support detection.
#[derive(Debug)]
pub struct Console {
    colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal();

        Self { colors_enabled }
    }

    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
        }
    }

    /// Applies ANSI styles to text if colors are enabled.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        let styled = self.style(label, &[color, Style::Bold]);
        format!("[{}]", styled)
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", self.label("INFO", Style::Blue), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", self.label("WARN", Style::Yellow), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.label("ERROR", Style::Red), message);
    }

    /// Prints a section header in magenta bold.
    pub fn section(&self, message: &str) {
        println!();
        println!("{}", self.style(message, &[Style::Magenta, Style::Bold]));
    }

    fn field(&self, name: &str, value: &str) -> String {
        format!("  {} {}", self.style(&format!("{}:", name), &[Style::Bold]), value)
    }

    /// Card-like block for one catalog entry.
    pub fn manga_card(&self, manga: &MangaSummary) -> String {
        [
            self.style(&manga.title, &[Style::Bold]),
            self.style(&format!("  {}", manga.id), &[Style::Gray, Style::Dim]),
            self.field("Autor", &manga.author_name),
            self.field("Status", &manga.status.to_string()),
            self.field("Último Capítulo", &manga.latest_chapter),
            self.field("Tags", &manga.tags.join(", ")),
        ]
        .join("\n")
    }

    /// One row of a chapter list.
    pub fn chapter_row(&self, chapter: &Chapter) -> String {
        format!(
            "  {}  {}  {}",
            self.style(&format_publish_date(&chapter.publish_date), &[Style::Gray]),
            chapter.title,
            self.style(&chapter.id, &[Style::Gray, Style::Dim])
        )
    }

    pub fn print_home(&self, data: &HomeData) {
        self.section(&format!("Catálogo - página {}", data.current_page));
        for manga in &data.mangas {
            println!("{}\n", self.manga_card(manga));
        }

        let window: Vec<String> = data
            .page_window()
            .iter()
            .map(|page| {
                if *page == data.current_page {
                    self.style(&format!("[{}]", page), &[Style::Green, Style::Bold])
                } else {
                    page.to_string()
                }
            })
            .collect();
        self.info(&format!(
            "Páginas: {} (anterior {}, próxima {})",
            window.join(" "),
            data.previous_page(),
            data.next_page()
        ));
    }

    pub fn print_manga(&self, data: &MangaData) {
        let summary = &data.manga.summary;
        self.section(&summary.title);
        println!("{}", self.field("Capa", &summary.cover_url));
        println!("{}", self.field("Formato", &summary.format));
        println!("{}", self.field("Status", &summary.status.to_string()));
        println!("{}", self.field("Autor", &summary.author_name));
        println!("{}", self.field("Tags", &summary.tags.join(", ")));
        println!("{}", self.field("Descrição", &summary.description));

        self.section(&format!("Capítulos ({})", data.chapters.len()));
        for chapter in &data.chapters {
            println!("{}", self.chapter_row(chapter));
        }
    }

    pub fn print_chapter(&self, data: &ChapterData) {
        self.section(&format!("Capítulo {} - {} páginas", data.chapter_id, data.pages.len()));
        for (index, url) in data.pages.urls().iter().enumerate() {
            println!("  {:>3}  {}", index + 1, url);
        }
    }
}
