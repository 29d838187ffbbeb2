//! HTTP front end.
//!
//! Routes call one loader each and render its output. Every loader failure
//! is answered with a 404: an HTML error page for browser routes and a JSON
//! body for `/api` routes.

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::error::LoaderError;
use crate::loaders::{self, ChapterData, HomeData, MangaData};
use crate::theme::{Theme, ThemeStore};
use crate::views;
use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub theme: ThemeStore,
    pub page_size: u32,
}

impl AppState {
    pub fn new(catalog: CatalogClient, config: &Config) -> Self {
        Self {
            catalog,
            theme: ThemeStore::new(config.reader.default_theme),
            page_size: config.reader.page_size,
        }
    }
}

/// Route-boundary failures.
#[derive(Debug)]
pub enum AppError {
    /// Rendered as the HTML error page.
    Page { theme: Theme, message: String },
    /// Rendered as a JSON error body.
    Api(String),
    BadRequest(String),
}

impl AppError {
    fn page(theme: Theme, message: &str, err: LoaderError) -> Self {
        log_failure(&err);
        AppError::Page {
            theme,
            message: message.to_string(),
        }
    }

    fn api(err: LoaderError) -> Self {
        log_failure(&err);
        AppError::Api(err.to_string())
    }
}

fn log_failure(err: &LoaderError) {
    match err {
        LoaderError::NotFound(msg) => log::warn!("Not found: {}", msg),
        LoaderError::Catalog(e) => log::error!("Catalog request failed: {}", e),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Page { theme, message } => (
                StatusCode::NOT_FOUND,
                Html(views::not_found_page(theme, &message)),
            )
                .into_response(),
            AppError::Api(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "status": "error", "message": message })),
            )
                .into_response(),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "status": "error", "message": message })),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ThemeForm {
    theme: String,
    redirect: Option<String>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/manga/{manga_id}", get(manga))
        .route("/manga/{manga_id}/capitulos/{chapter_id}", get(chapter))
        .route("/theme", post(set_theme))
        .route("/health", get(health_check))
        .route("/api/mangas", get(api_mangas))
        .route("/api/manga/{manga_id}", get(api_manga))
        .route("/api/chapter/{chapter_id}", get(api_chapter))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits.
pub async fn serve(config: &Config, catalog: CatalogClient) -> anyhow::Result<()> {
    let state = AppState::new(catalog, config);
    spawn_theme_logger(&state.theme);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    log::info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Logs every theme change until the store goes away.
fn spawn_theme_logger(store: &ThemeStore) {
    let mut rx = store.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let theme = *rx.borrow_and_update();
            log::info!("Theme changed to {}", theme);
        }
    });
}

fn current_path(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let theme = state.theme.current();
    let data: HomeData = loaders::load_home(&state.catalog, query.page.as_deref(), state.page_size)
        .await
        .map_err(|e| AppError::page(theme, "Página não encontrada", e))?;

    Ok(Html(views::home_page(&data, theme, current_path(&uri))))
}

async fn manga(
    State(state): State<AppState>,
    Path(manga_id): Path<String>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let theme = state.theme.current();
    let data: MangaData = loaders::load_manga(&state.catalog, &manga_id)
        .await
        .map_err(|e| AppError::page(theme, "Mangá não encontrado", e))?;

    Ok(Html(views::manga_page(&data, theme, current_path(&uri))))
}

async fn chapter(
    State(state): State<AppState>,
    Path((manga_id, chapter_id)): Path<(String, String)>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let theme = state.theme.current();
    let data: ChapterData = loaders::load_chapter(&state.catalog, Some(&manga_id), &chapter_id)
        .await
        .map_err(|e| AppError::page(theme, "Capítulo não encontrado", e))?;

    Ok(Html(views::chapter_page(&data, theme, current_path(&uri))))
}

async fn set_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, AppError> {
    let theme: Theme = form.theme.parse().map_err(AppError::BadRequest)?;
    state.theme.set(theme);

    // Only same-site paths are followed.
    let target = form
        .redirect
        .as_deref()
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or("/");

    Ok(Redirect::to(target))
}

async fn health_check() -> impl IntoResponse {
    "OK"
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> AppError {
    AppError::page(
        state.theme.current(),
        "Página não encontrada",
        LoaderError::NotFound(format!("no route for {}", uri.path())),
    )
}

async fn api_mangas(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<HomeData>, AppError> {
    loaders::load_home(&state.catalog, query.page.as_deref(), state.page_size)
        .await
        .map(Json)
        .map_err(AppError::api)
}

async fn api_manga(
    State(state): State<AppState>,
    Path(manga_id): Path<String>,
) -> Result<Json<MangaData>, AppError> {
    loaders::load_manga(&state.catalog, &manga_id)
        .await
        .map(Json)
        .map_err(AppError::api)
}

async fn api_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Result<Json<ChapterData>, AppError> {
    loaders::load_chapter(&state.catalog, None, &chapter_id)
        .await
        .map(Json)
        .map_err(AppError::api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    const CHAPTER_ID: &str = "0b9d4bfe-6b1c-4b2e-9a43-5d6c1f1a2b3c";

    fn app(stub: StubTransport) -> (Router, AppState, Arc<StubTransport>) {
        let (catalog, stub) = client(stub);
        let state = AppState::new(catalog, &Config::default());
        (router(state.clone()), state, stub)
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_chapter_stub() -> StubTransport {
        StubTransport::new().with_json(
            &format!("{}/at-home/server/{}", API, CHAPTER_ID),
            json!({"baseUrl": "https://node.example", "chapter": {"hash": "h", "data": []}}),
        )
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _, _) = app(StubTransport::new());

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn test_home_page_two() {
        let items: Vec<_> = (1..=5)
            .map(|i| manga_json(&format!("m{}", i), &format!("Manga {}", i), None, None))
            .collect();
        let (app, _, stub) = app(StubTransport::new().with_json(
            &format!("{}/manga?offset=9&limit=9", API),
            json!({"data": items}),
        ));

        let response = app.oneshot(get("/?page=2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.requests(), vec![format!("{}/manga?offset=9&limit=9", API)]);

        let html = body_string(response).await;
        assert!(html.contains("Manga 5"));
        assert!(html.contains("href=\"/?page=3\">Próximo"));
    }

    #[tokio::test]
    async fn test_empty_chapter_renders_not_found() {
        let (app, _, _) = app(empty_chapter_stub());

        let uri = format!("/manga/{}/capitulos/{}", MANGA_ID, CHAPTER_ID);
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Capítulo não encontrado"));
    }

    #[tokio::test]
    async fn test_missing_manga_renders_not_found() {
        let (app, _, _) = app(StubTransport::new());

        let response = app.oneshot(get(&format!("/manga/{}", MANGA_ID))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Mangá não encontrado"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _, _) = app(StubTransport::new());

        let response = app.oneshot(get("/obras")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_theme_redirects_back() {
        let (app, state, _) = app(StubTransport::new());

        let response = app
            .oneshot(post_form("/theme", "theme=dark&redirect=%2Fmanga%2Fabc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/manga/abc");
        assert_eq!(state.theme.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_set_theme_ignores_offsite_redirect() {
        let (app, _, _) = app(StubTransport::new());

        let response = app
            .oneshot(post_form("/theme", "theme=light&redirect=https%3A%2F%2Fevil.example"))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_set_theme_rejects_unknown() {
        let (app, state, _) = app(StubTransport::new());

        let response = app.oneshot(post_form("/theme", "theme=sepia")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.theme.current(), Theme::System);
    }

    #[tokio::test]
    async fn test_api_chapter() {
        let (app, _, _) = app(StubTransport::new().with_json(
            &format!("{}/at-home/server/{}", API, CHAPTER_ID),
            json!({"baseUrl": "https://node.example", "chapter": {"hash": "h", "data": ["1.png", "2.png"]}}),
        ));

        let response = app.oneshot(get(&format!("/api/chapter/{}", CHAPTER_ID))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body["pages"],
            json!(["https://node.example/data/h/1.png", "https://node.example/data/h/2.png"])
        );
    }

    #[tokio::test]
    async fn test_api_empty_chapter_is_not_found() {
        let (app, _, _) = app(empty_chapter_stub());

        let response = app.oneshot(get(&format!("/api/chapter/{}", CHAPTER_ID))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "error");
    }
}
