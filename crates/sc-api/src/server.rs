//! Router construction and server startup
//!
//! The dataset is fully derived before the listener binds; handlers share
//! it read-only through an `Arc`, so concurrent requests need no locking.

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use sc_core::Dataset;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared read-only application state
pub struct AppState {
    pub dataset: Dataset,
}

/// Build the API router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/clusters", get(handlers::list_clusters))
        .route("/api/clusters/{id}", get(handlers::get_cluster))
        .route("/api/statistics", get(handlers::get_statistics))
        .route("/api/predictions", get(handlers::list_predictions))
        .route("/api/regions", get(handlers::get_regions))
        .route("/api/regions/list", get(handlers::list_regions))
        .route("/api/search", get(handlers::search))
        .route("/api/visualization", get(handlers::get_visualization))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(host: &str, port: u16, dataset: Dataset) -> Result<()> {
    let state = Arc::new(AppState { dataset });
    let app = router(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("Invalid host:port")?;

    log::info!("Serving API at http://{addr}/api");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}
