//! # HTTP Module
//!
//! REST surface over the same tool layer the MCP server uses.
//!
//! ## Routes
//!
//! All routes live under `/api/documentation`:
//!
//! - `GET /components` - known components and their availability
//! - `GET /overview` - files and statistics across components
//! - `GET /search?q=&component=` - rate-limited content search
//! - `GET /health` - liveness and docs root status
//! - `GET /{component}/files` - file catalog of a component
//! - `GET /{component}/stats` - statistics of a component
//! - `GET /{component}/files/{filename}` - file metadata and content
//! - `GET /{component}/files/{filename}/download?format=md|txt` - attachment

pub mod client;
pub mod extract;
pub mod handlers;
pub mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::docs::storage::DocsStorage;
use crate::docs::tools::DocsTools;
use crate::rate_limit::RateLimiter;
use crate::search::tools::SearchTools;

pub use client::ClientId;
pub use response::{ApiError, ApiResponse};

pub const API_PREFIX: &str = "/api/documentation";

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub docs_tools: DocsTools,
    pub search_tools: SearchTools,
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(
        storage: Arc<DocsStorage>,
        rate_limiter: Arc<RateLimiter>,
        trust_forwarded_for: bool,
    ) -> Self {
        Self {
            docs_tools: DocsTools::new(storage.clone()),
            search_tools: SearchTools::new(storage, rate_limiter),
            trust_forwarded_for,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/components", get(handlers::list_components))
        .route("/overview", get(handlers::overview))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .route("/{component}/files", get(handlers::list_files))
        .route("/{component}/stats", get(handlers::component_stats))
        .route("/{component}/files/{filename}", get(handlers::get_file))
        .route(
            "/{component}/files/{filename}/download",
            get(handlers::download_file),
        );

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the REST API until Ctrl+C
pub async fn serve(state: AppState, bind: SocketAddr) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {bind}"))?;
    tracing::info!("HTTP server listening on {}", bind);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
