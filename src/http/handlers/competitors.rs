//! Competitor handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use super::AppState;
use crate::http::types::ErrorResponse;

/// List all competitors, newest first.
pub async fn list_competitors(State(state): State<AppState>) -> impl IntoResponse {
    match state.competitors.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            error!("failed to list competitors: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch competitors")),
            )
                .into_response()
        }
    }
}
