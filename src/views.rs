//! HTML rendering of loader output.
//!
//! Views only format what loaders hand them. All catalog text is escaped.

use crate::loaders::{ChapterData, HomeData, MangaData};
use crate::models::MangaSummary;
use crate::theme::Theme;
use crate::utils::{format_publish_date, is_long_text};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const SITE_NAME: &str = "Quantum Mangás";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; font-size: 14px; background: #fdf8ee; color: #1f2937; }
a { color: inherit; text-decoration: none; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
header h1 { font-size: 1.1rem; margin: 0; }
header nav { display: flex; gap: 2rem; align-items: center; }
header form button { margin-left: .25rem; }
button.active { font-weight: bold; }
.grid { list-style: none; display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; padding: 1.5rem; margin: 0; }
.card { display: block; padding: 1rem; border-radius: .5rem; background: rgba(0,0,0,.04); }
.card img { width: 100%; height: auto; object-fit: cover; }
.card p { margin: .25rem 0; }
.pager { display: flex; justify-content: center; gap: .75rem; padding: 1.5rem; }
.pager .current { font-weight: bold; text-decoration: underline; }
.hero { position: relative; }
.hero img { width: 100%; height: 50vh; object-fit: cover; }
.hero h1 { position: absolute; bottom: 0; left: 0; right: 0; margin: 0; padding: 1rem; color: #fff; background: rgba(0,0,0,.5); }
.info, .chapters { padding: 1.5rem; }
.facts { display: flex; justify-content: space-between; }
.chapters ul { list-style: none; padding: 0; }
.chapters li a { display: flex; justify-content: space-between; padding: 1rem; margin-bottom: .5rem; border-radius: .5rem; background: rgba(0,0,0,.06); }
.reader { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 1.5rem; }
.reader img { width: 100%; max-width: 960px; height: auto; }
.close { position: fixed; top: 1rem; right: 1rem; font-size: 1.5rem; padding: .5rem .9rem; border-radius: 999px; background: #262626; color: #fff; }
.error { padding: 3rem 1.5rem; text-align: center; }
html.dark body { background: #171717; color: #f3f4f6; }
@media (prefers-color-scheme: dark) { html.system body { background: #171717; color: #f3f4f6; } }
"#;

/// Wraps a page body in the shared document shell.
pub fn layout(theme: Theme, title: &str, current_path: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLE.len() + 1024);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\" class=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        theme.as_str(),
        text(title),
        STYLE
    ));

    html.push_str(&format!(
        "<header>\n<a href=\"/\"><h1>{}.</h1></a>\n<nav>\n<a href=\"/\">Inicio</a>\n",
        SITE_NAME
    ));
    html.push_str(&theme_picker(theme, current_path));
    html.push_str("</nav>\n</header>\n<main>\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn theme_picker(current: Theme, current_path: &str) -> String {
    let mut html = format!(
        "<form method=\"post\" action=\"/theme\">\n<span>Tema:</span>\n\
         <input type=\"hidden\" name=\"redirect\" value=\"{}\">\n",
        attr(current_path)
    );
    for theme in Theme::ALL {
        let class = if theme == current { " class=\"active\"" } else { "" };
        html.push_str(&format!(
            "<button type=\"submit\" name=\"theme\" value=\"{}\"{}>{}</button>\n",
            theme.as_str(),
            class,
            theme.label()
        ));
    }
    html.push_str("</form>\n");
    html
}

fn manga_card(manga: &MangaSummary) -> String {
    format!(
        "<li>\n<a class=\"card\" href=\"/manga/{id}\">\n\
         <img src=\"{cover}\" alt=\"{alt}\">\n<h2>{title}</h2>\n\
         <p><strong>Autor:</strong> {author}</p>\n\
         <p><strong>Status:</strong> {status}</p>\n\
         <p><strong>Último Capítulo:</strong> {latest}</p>\n\
         <p><strong>Tags:</strong> {tags}</p>\n</a>\n</li>\n",
        id = attr(&manga.id),
        cover = attr(&manga.cover_url),
        alt = attr(&manga.title),
        title = text(&manga.title),
        author = text(&manga.author_name),
        status = manga.status,
        latest = text(&manga.latest_chapter),
        tags = text(&manga.tags.join(", ")),
    )
}

/// Catalog listing with pager.
pub fn home_page(data: &HomeData, theme: Theme, current_path: &str) -> String {
    let mut body = String::from("<ul class=\"grid\">\n");
    for manga in &data.mangas {
        body.push_str(&manga_card(manga));
    }
    body.push_str("</ul>\n<nav class=\"pager\">\n");

    body.push_str(&format!(
        "<a href=\"/?page={}\">Anterior</a>\n",
        data.previous_page()
    ));
    for page in data.page_window() {
        let class = if page == data.current_page {
            " class=\"current\""
        } else {
            ""
        };
        body.push_str(&format!("<a href=\"/?page={0}\"{1}>{0}</a>\n", page, class));
    }
    body.push_str(&format!(
        "<a href=\"/?page={}\">Próximo</a>\n</nav>\n",
        data.next_page()
    ));

    layout(theme, SITE_NAME, current_path, &body)
}

/// Manga detail with chapter list.
pub fn manga_page(data: &MangaData, theme: Theme, current_path: &str) -> String {
    let summary = &data.manga.summary;
    let mut body = format!(
        "<section class=\"hero\">\n<img src=\"{}\" alt=\"{}\">\n<h1>{}</h1>\n</section>\n",
        attr(&summary.cover_url),
        attr(&summary.title),
        text(&summary.title)
    );

    body.push_str(&format!(
        "<section class=\"info\">\n<div class=\"facts\">\n\
         <p><strong>Formato:</strong> {}</p>\n\
         <p><strong>Status:</strong> {}</p>\n\
         <p><strong>Autor:</strong> {}</p>\n</div>\n\
         <div><strong>Tags:</strong> {}</div>\n",
        text(&summary.format),
        summary.status,
        text(&summary.author_name),
        text(&summary.tags.join(", "))
    ));

    let description = text(&summary.description);
    if is_long_text(&summary.description) {
        body.push_str(&format!(
            "<div><strong>Descrição:</strong>\n<details>\n<summary>Mostrar mais</summary>\n<p>{}</p>\n</details>\n</div>\n",
            description
        ));
    } else {
        body.push_str(&format!(
            "<div><strong>Descrição:</strong>\n<p>{}</p>\n</div>\n",
            description
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"chapters\">\n<h2>Capítulos</h2>\n<ul>\n");
    for chapter in &data.chapters {
        body.push_str(&format!(
            "<li><a href=\"/manga/{}/capitulos/{}\"><span>{}</span><span>{}</span></a></li>\n",
            attr(summary.id.as_str()),
            attr(&chapter.id),
            text(&chapter.title),
            text(&format_publish_date(&chapter.publish_date))
        ));
    }
    body.push_str("</ul>\n</section>\n");

    layout(theme, &summary.title, current_path, &body)
}

/// Full-screen chapter reader.
pub fn chapter_page(data: &ChapterData, theme: Theme, current_path: &str) -> String {
    let back = match &data.manga_id {
        Some(manga_id) => format!("/manga/{}", manga_id),
        None => "/".to_string(),
    };

    let mut body = format!(
        "<a class=\"close\" href=\"{}\" aria-label=\"Fechar\">X</a>\n<div class=\"reader\">\n",
        attr(&back)
    );
    for (index, url) in data.pages.urls().iter().enumerate() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Page {}\" loading=\"lazy\">\n",
            attr(url),
            index + 1
        ));
    }
    body.push_str("</div>\n");

    layout(theme, SITE_NAME, current_path, &body)
}

/// Generic page shown for every route failure.
pub fn not_found_page(theme: Theme, message: &str) -> String {
    let body = format!(
        "<section class=\"error\">\n<h1>404</h1>\n<p>{}</p>\n<a href=\"/\">Voltar ao início</a>\n</section>\n",
        text(message)
    );
    layout(theme, SITE_NAME, "/", &body)
}
