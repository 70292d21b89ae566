//! API Routes
//!
//! - `POST /api/files` - Upload a CSV file, replacing the dataset
//! - `GET /api/users?q=` - Search the current dataset
//! - `GET /api/health` - Health check

pub mod files;
pub mod health;
pub mod users;

use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the application router with tracing and CORS applied
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    info!("Creating application router");

    let origin = state.config.server.cors_allowed_origin.clone();
    let cors = cors_layer(&origin)
        .with_context(|| format!("invalid CORS origin: {}", origin))?;

    Ok(Router::new()
        .merge(files::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(health::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
