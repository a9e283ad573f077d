//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path as UrlPath, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use facade_catalog::{TemplateCard, TemplateCatalog};
use facade_model::ExportError;
use facade_render::{
    AssetPipeline, FilterCount, GalleryCard, GalleryContext, HtmlRenderer, PageContext,
    ViewportMode,
};
use facade_session::{EditingSession, SiteError, SiteFile};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site file to preview
    pub site_file: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            site_file: PathBuf::from("site.toml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Preview query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewQuery {
    /// Viewport override
    pub mode: Option<ViewportMode>,

    /// Selected header, footer or section id
    pub selected: Option<String>,
}

/// Everything the preview routes read.
pub struct ServerState {
    config: DevServerConfig,
    site: SiteFile,
    catalog: TemplateCatalog,
    session: EditingSession,
    renderer: HtmlRenderer,
    hub: ReloadHub,
}

impl ServerState {
    /// Load the site file named in `config`.
    pub fn load(config: DevServerConfig) -> Result<Self, ServerError> {
        let site = SiteFile::load(&config.site_file)?;
        let catalog = site.catalog()?;
        let session = site.session_in(&catalog)?;

        Ok(Self {
            config,
            site,
            catalog,
            session,
            renderer: HtmlRenderer::new(),
            hub: ReloadHub::new(),
        })
    }

    /// Re-read the site file. On failure the previous state is kept.
    pub fn reload(&mut self) -> Result<(), SiteError> {
        let site = SiteFile::load(&self.config.site_file)?;
        let catalog = site.catalog()?;
        let session = site.session_in(&catalog)?;

        self.site = site;
        self.catalog = catalog;
        self.session = session;
        Ok(())
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    pub fn hub(&self) -> &ReloadHub {
        &self.hub
    }

    /// Directories whose changes trigger a reload.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let root = match self.config.site_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut paths = vec![root.clone()];
        if let Some(dir) = &self.site.site.templates_dir {
            let escapes_root = dir.is_absolute()
                || dir.components().any(|c| matches!(c, Component::ParentDir));
            if escapes_root {
                paths.push(root.join(dir));
            }
        }
        paths
    }

    /// Render the edited document.
    pub fn preview(&self, query: &PreviewQuery) -> Result<String, ServerError> {
        self.render_session(self.session.clone(), query)
    }

    /// Render an unedited catalog template, if it exists.
    pub fn template_preview(
        &self,
        id: &str,
        query: &PreviewQuery,
    ) -> Option<Result<String, ServerError>> {
        let document = self.catalog.instantiate(id)?;
        let mut session = EditingSession::new(document);
        session.set_viewport(self.session.viewport());
        Some(self.render_session(session, query))
    }

    /// Render the catalog gallery.
    pub fn gallery(&self) -> Result<String, ServerError> {
        let context = GalleryContext {
            title: "Website Builder".to_string(),
            filters: self
                .catalog
                .category_counts()
                .into_iter()
                .map(|(filter, count)| FilterCount {
                    label: filter.label().to_string(),
                    count,
                })
                .collect(),
            cards: self
                .catalog
                .list()
                .iter()
                .map(|template| GalleryCard {
                    card: TemplateCard::from_document(template),
                    href: format!("/templates/{}", template.id),
                })
                .collect(),
            styles: vec!["/assets/gallery.css".to_string()],
            scripts: vec![format!("{}.js", RELOAD_PATH)],
            tailwind: true,
        };

        self.renderer
            .render_gallery(&context)
            .map_err(|e| ServerError::RenderError(e.to_string()))
    }

    /// Stylesheet for the edited document's palette.
    pub fn stylesheet(&self) -> String {
        AssetPipeline::generate_css(&self.session.document().colors)
    }

    /// JSON export of the edited document.
    pub fn export_json(&self) -> Result<String, ServerError> {
        Ok(self.session.export()?.contents)
    }

    fn render_session(
        &self,
        mut session: EditingSession,
        query: &PreviewQuery,
    ) -> Result<String, ServerError> {
        if let Some(mode) = query.mode {
            session.set_viewport(mode);
        }
        if let Some(selected) = &query.selected {
            session.select(selected);
        }

        let context = PageContext {
            title: session.document().name.clone(),
            page: session.render(),
            styles: vec!["/assets/site.css".to_string()],
            scripts: vec![format!("{}.js", RELOAD_PATH)],
            tailwind: true,
        };

        self.renderer
            .render_page(&context)
            .map_err(|e| ServerError::RenderError(e.to_string()))
    }
}

type SharedState = Arc<RwLock<ServerState>>;

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let state = ServerState::load(self.config.clone())?;
        tracing::info!("Previewing {}", state.session.document().name);

        let watch_paths = state.watch_paths();
        let state = Arc::new(RwLock::new(state));

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/gallery", get(gallery_handler))
        .route("/templates/{id}", get(template_handler))
        .route("/template.json", get(json_handler))
        .route("/assets/site.css", get(css_handler))
        .route("/assets/gallery.css", get(gallery_css_handler))
        .route(RELOAD_PATH, get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .with_state(state)
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    if !is_relevant(event.path()) {
        return;
    }
    tracing::info!("Changed: {}", event.path().display());

    let mut state = state.write().await;
    match state.reload() {
        Ok(()) => state.hub.send(ReloadMessage::Reload),
        Err(e) => {
            tracing::warn!("Keeping previous site: {}", e);
            state.hub.send(ReloadMessage::Error {
                message: e.to_string(),
            });
        }
    }
}

fn is_relevant(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("toml") | Some("json")
    )
}

fn respond(result: Result<String, ServerError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn index_handler(
    State(state): State<SharedState>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    respond(state.read().await.preview(&query))
}

async fn template_handler(
    State(state): State<SharedState>,
    UrlPath(id): UrlPath<String>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    match state.read().await.template_preview(&id, &query) {
        Some(result) => respond(result),
        None => (StatusCode::NOT_FOUND, format!("Template not found: {}", id)).into_response(),
    }
}

async fn gallery_handler(State(state): State<SharedState>) -> Response {
    respond(state.read().await.gallery())
}

async fn json_handler(State(state): State<SharedState>) -> Response {
    match state.read().await.export_json() {
        Ok(json) => ([("content-type", "application/json")], json).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn css_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let css = state.read().await.stylesheet();
    ([("content-type", "text/css")], css)
}

async fn gallery_css_handler() -> impl IntoResponse {
    ([("content-type", "text/css")], AssetPipeline::base_css())
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).map_err(|e| {
        tracing::warn!("Failed to encode reload message: {}", e);
    })?;
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| ())
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_model::from_json;
    use std::fs;
    use tempfile::tempdir;

    fn state_with(site: &str) -> (tempfile::TempDir, ServerState) {
        let temp = tempdir().unwrap();
        let site_file = temp.path().join("site.toml");
        fs::write(&site_file, site).unwrap();

        let state = ServerState::load(DevServerConfig {
            site_file,
            open: false,
            ..Default::default()
        })
        .unwrap();
        (temp, state)
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.site_file, PathBuf::from("site.toml"));
    }

    #[test]
    fn watches_templates_dir_outside_site_root() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("site");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(temp.path().join("shared")).unwrap();
        fs::create_dir_all(root.join("templates")).unwrap();

        let load = |templates_dir: &str| {
            let site_file = root.join("site.toml");
            fs::write(
                &site_file,
                format!("[site]\ntemplates_dir = \"{}\"\n", templates_dir),
            )
            .unwrap();
            ServerState::load(DevServerConfig {
                site_file,
                open: false,
                ..Default::default()
            })
            .unwrap()
        };

        assert_eq!(
            load("../shared").watch_paths(),
            vec![root.clone(), root.join("../shared")]
        );
        assert_eq!(load("templates").watch_paths(), vec![root.clone()]);
    }

    #[test]
    fn previews_edited_document() {
        let (_temp, state) = state_with(
            "[site]\ntemplate = \"biz-1\"\n\n[[edits]]\nfield = \"header_title\"\nvalue = \"Acme Partners\"\n",
        );

        let html = state.preview(&PreviewQuery::default()).unwrap();

        assert!(html.contains("Acme Partners"));
        assert!(html.contains("__reload.js"));
        assert!(!html.contains("Editing</div>"));
    }

    #[test]
    fn preview_honours_query() {
        let (_temp, state) = state_with("[site]\ntemplate = \"ecom-1\"\n");

        let html = state
            .preview(&PreviewQuery {
                mode: Some(ViewportMode::Mobile),
                selected: Some("products-1".to_string()),
            })
            .unwrap();

        assert!(html.contains("width: 375px"));
        assert_eq!(html.matches("Editing</div>").count(), 1);
        assert_eq!(state.session().selection(), None);
    }

    #[test]
    fn serves_catalog_pages() {
        let (_temp, state) = state_with("[site]\ntemplate = \"ecom-1\"\n");

        let gallery = state.gallery().unwrap();
        assert!(gallery.contains("Creative Portfolio"));
        assert!(gallery.contains("All Templates (5)"));

        let page = state
            .template_preview("blog-1", &PreviewQuery::default())
            .unwrap()
            .unwrap();
        assert!(page.contains("Stories Worth Reading"));
        assert!(state
            .template_preview("nope", &PreviewQuery::default())
            .is_none());
    }

    #[test]
    fn exports_json() {
        let (_temp, state) = state_with("[site]\ntemplate = \"port-1\"\n");

        let json = state.export_json().unwrap();

        assert_eq!(&from_json(&json).unwrap(), state.session().document());
        assert!(state.stylesheet().contains("--color-primary: #7C3AED;"));
    }

    #[test]
    fn reload_applies_changes_and_keeps_last_good_state() {
        let (temp, mut state) = state_with("[site]\ntemplate = \"ecom-1\"\n");
        let site_file = temp.path().join("site.toml");

        fs::write(&site_file, "[site]\ntemplate = \"ecom-2\"\n").unwrap();
        state.reload().unwrap();
        assert_eq!(state.session().document().name, "Fashion Hub");

        fs::write(&site_file, "[site]\ntemplate = \"shop-9\"\n").unwrap();
        assert!(state.reload().is_err());
        assert_eq!(state.session().document().name, "Fashion Hub");
    }

    #[test]
    fn watches_site_directory() {
        let (temp, state) = state_with("[site]\ntemplate = \"ecom-1\"\n");

        assert_eq!(state.watch_paths(), vec![temp.path().to_path_buf()]);
        assert!(is_relevant(Path::new("site.toml")));
        assert!(!is_relevant(Path::new("site.toml.swp")));
    }
}
