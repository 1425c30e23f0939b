//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/chat` - Chat forwarding endpoint
//! - `/api/automations/process-csv` - CSV ingestion and summarization
//! - `/api/health` - Health checks

pub mod automations;
pub mod chat;
pub mod health;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router. All routes live under `/api/`;
/// CORS and request tracing wrap the whole surface.
pub fn create_router(state: AppState) -> Router {
    info!(provider = state.llm.provider_name(), "creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(chat::router(state.clone()))
        .merge(automations::router(state))
        .merge(health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
