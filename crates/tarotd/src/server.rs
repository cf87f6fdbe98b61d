//! HTTP server for tarotd

use crate::config::ServerConfig;
use crate::pipeline::ReadingPipeline;
use crate::routes;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub pipeline: ReadingPipeline,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(pipeline: ReadingPipeline) -> Self {
        Self {
            pipeline,
            start_time: Instant::now(),
        }
    }
}

/// Assemble every route with tracing and the body limit applied
pub fn build_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(routes::reading_routes())
        .merge(routes::catalog_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until it fails
pub async fn run(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = build_router(state, config.body_limit_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("[BOOT] Listening on http://{}", config.bind);

    axum::serve(listener, app).await.context("HTTP server error")?;
    Ok(())
}
