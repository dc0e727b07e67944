//! Wizard server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::RwLock;

use draftsite_preview::PreviewEngine;
use draftsite_wizard::{PreferenceUpdate, WizardSession};

use crate::generator::{Generator, DEFAULT_GENERATION_DELAY};
use crate::pages::{PageTemplates, WIZARD_CSS};

/// Configuration for the wizard server.
#[derive(Debug, Clone)]
pub struct WizardServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Open browser on start
    pub open: bool,

    /// Delay of the simulated generation run
    pub generation_delay: Duration,

    /// Minify the preview stylesheet
    pub minify_css: bool,
}

impl Default for WizardServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            open: true,
            generation_delay: DEFAULT_GENERATION_DELAY,
            minify_css: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared server state: one wizard session per process.
struct AppState {
    session: RwLock<WizardSession>,
    engine: PreviewEngine,
    generator: Generator,
    pages: PageTemplates,
}

/// Wizard web server.
pub struct WizardServer {
    config: WizardServerConfig,
}

impl WizardServer {
    /// Create a new wizard server.
    pub fn new(config: WizardServerConfig) -> Self {
        Self { config }
    }

    /// Start the server and block until it exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::InvalidAddress(addr_str.clone(), e.to_string())
            })?;

        let app = router(Arc::new(AppState {
            session: RwLock::new(WizardSession::new()),
            engine: PreviewEngine::new().with_minified_css(self.config.minify_css),
            generator: Generator::new(self.config.generation_delay),
            pages: PageTemplates::new(),
        }));

        tracing::info!("Starting website builder at http://{}", addr);

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

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/update", post(update_handler))
        .route("/next", post(next_handler))
        .route("/back", post(back_handler))
        .route("/jump/{index}", post(jump_handler))
        .route("/toggle/feature/{id}", post(toggle_feature_handler))
        .route("/toggle/content/{id}", post(toggle_content_handler))
        .route("/preview", get(preview_handler))
        .route("/generate", post(generate_handler))
        .route("/generate/status", get(generate_status_handler))
        .route("/assets/site.css", get(css_handler))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for the current step page.
async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;

    match state
        .pages
        .render_step(&session, state.generator.status())
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render step page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Merge a partial form post into the record.
async fn update_handler(
    State(state): State<Arc<AppState>>,
    Form(update): Form<PreferenceUpdate>,
) -> Redirect {
    let mut session = state.session.write().await;
    session.update(update);
    Redirect::to("/")
}

/// Advance to the next step. A failed gate leaves the index unchanged;
/// the redirect re-renders the same step from the top of the page.
async fn next_handler(State(state): State<Arc<AppState>>) -> Redirect {
    let mut session = state.session.write().await;
    let outcome = session.advance();
    tracing::debug!(?outcome, step = session.current_index(), "advance");
    Redirect::to("/")
}

/// Go back one step.
async fn back_handler(State(state): State<Arc<AppState>>) -> Redirect {
    let mut session = state.session.write().await;
    session.retreat();
    Redirect::to("/")
}

/// Jump straight to a step from a summary badge, bypassing gating.
async fn jump_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Redirect, (StatusCode, String)> {
    let mut session = state.session.write().await;
    session
        .jump_to(index)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(Redirect::to("/"))
}

async fn toggle_feature_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    let mut session = state.session.write().await;
    session.toggle_feature(&id);
    Redirect::to("/")
}

async fn toggle_content_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    let mut session = state.session.write().await;
    session.toggle_content_type(&id);
    Redirect::to("/")
}

/// Handler for the preview document shown in the iframe.
async fn preview_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;

    match state.engine.render(session.record()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render preview: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render preview").into_response()
        }
    }
}

/// Kick off the simulated generation run.
async fn generate_handler(State(state): State<Arc<AppState>>) -> Redirect {
    state.generator.start();
    Redirect::to("/")
}

/// Handler polled by the preview page while generation is pending.
async fn generate_status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": state.generator.status() }))
}

/// Handler for the wizard chrome stylesheet.
async fn css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], WIZARD_CSS)
}
