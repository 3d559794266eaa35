//! HTTP API Route Definitions

use axum::{
    routing::get,
    Router,
};

use super::handlers::{self, AppState};

/// Create the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/audits",
            get(handlers::list_audits).post(handlers::create_audit),
        )
        .route("/api/audits/recent", get(handlers::recent_audits))
        .route("/api/audits/:id", get(handlers::get_audit))
        .route("/api/competitors", get(handlers::list_competitors))
        .with_state(state)
}
