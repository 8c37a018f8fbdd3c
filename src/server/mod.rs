//! HTTP server: shared state, routes and the serve loop.

pub mod handlers;
pub mod locale;

pub use locale::Locale;

use crate::config::Config;
use crate::contact::Mailer;
use crate::content::ContentStore;
use crate::github::GitHubClient;
use crate::i18n::{Language, TranslationTable};
use crate::render::RenderContext;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Read-only state shared by all handlers. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub site_dir: PathBuf,
    pub static_dir: PathBuf,
    pub content: ContentStore,
    pub translations: &'static TranslationTable,
    pub skills: Arc<[String]>,
    pub github: GitHubClient,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            site_dir: config.site_dir.clone(),
            static_dir: config.static_dir(),
            content: ContentStore::new(config.data_dir()),
            translations: TranslationTable::global(),
            skills: config.skills.clone().into(),
            github: GitHubClient::new(config.github_api_url.clone(), config.github_token.clone()),
            mailer,
        }
    }

    pub fn render_context(&self, language: Language) -> RenderContext<'static> {
        RenderContext::new(language, self.translations)
    }
}

pub fn router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();
    let manifest = state.site_dir.join("manifest.json");
    let service_worker = state.site_dir.join("sw.js");

    Router::new()
        .route("/", get(handlers::index))
        .route("/cv/experience", get(handlers::experience))
        .route("/cv/experience/detail/:id", get(handlers::experience_detail))
        .route("/cv/experience/collapse/:id", get(handlers::experience_collapse))
        .route("/cv/education", get(handlers::education))
        .route("/cv/projects", get(handlers::projects))
        .route("/cv/skills", get(handlers::skills))
        .route("/contact", get(handlers::contact))
        .route("/contact-submit", post(handlers::contact_submit))
        .route("/api/github-stats/:repo", get(handlers::github_stats))
        .route(
            "/api/github-stats/:owner/:repo",
            get(handlers::github_stats_for_owner),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .route_service("/manifest.json", ServeFile::new(manifest))
        .route_service("/sw.js", ServeFile::new(service_worker))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Starting server on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
