//! Audit handlers: create, get, list, recent

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use super::AppState;
use crate::audit::{AuditError, FetchError};
use crate::http::types::{AuditResponse, CreateAuditRequest, ErrorResponse, RecentParams};
use crate::integrations::{self, SyncCredentials};
use crate::storage::DEFAULT_RECENT_LIMIT;

/// Create a new audit: run the pipeline and return the persisted record.
pub async fn create_audit(
    State(state): State<AppState>,
    Json(request): Json<CreateAuditRequest>,
) -> impl IntoResponse {
    let Some(url) = request.url.as_deref().filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("URL is required")),
        )
            .into_response();
    };

    debug!(url, "HTTP audit request");

    match state.auditor.run(url).await {
        Ok(record) => {
            let credentials = SyncCredentials {
                notion_db_id: request.notion_db_id,
                notion_token: request.notion_token,
                airtable_base_id: request.airtable_base_id,
                airtable_token: request.airtable_token,
                project_id: request.project_id,
            };
            integrations::spawn_syncs(state.sync_client.clone(), credentials, &record);

            (StatusCode::OK, Json(AuditResponse::from(record))).into_response()
        }
        Err(e) => {
            error!(url, "audit failed: {e}");
            let (status, message) = map_error(&e);
            (status, Json(ErrorResponse::new(message))).into_response()
        }
    }
}

/// Map pipeline errors to client-facing status codes.
fn map_error(error: &AuditError) -> (StatusCode, String) {
    match error {
        AuditError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "Invalid URL format".to_string()),
        AuditError::Fetch(FetchError::Unreachable(_)) => (
            StatusCode::BAD_REQUEST,
            "Unable to reach the specified URL".to_string(),
        ),
        AuditError::Fetch(FetchError::Status(404)) => {
            (StatusCode::BAD_REQUEST, "URL not found (404)".to_string())
        }
        AuditError::Fetch(FetchError::Timeout(_)) => (
            StatusCode::REQUEST_TIMEOUT,
            "Request timeout - URL took too long to respond".to_string(),
        ),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

/// Get one audit by id.
pub async fn get_audit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Ok(id) = uuid::Uuid::parse_str(&id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid audit id")),
        )
            .into_response();
    };

    match state.audits.get(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(AuditResponse::from(record))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Audit not found")),
        )
            .into_response(),
        Err(e) => {
            error!("failed to load audit: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch audit")),
            )
                .into_response()
        }
    }
}

/// List all audits, newest first.
pub async fn list_audits(State(state): State<AppState>) -> impl IntoResponse {
    match state.audits.list_all() {
        Ok(records) => {
            let body: Vec<AuditResponse> = records.into_iter().map(AuditResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("failed to list audits: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch audits")),
            )
                .into_response()
        }
    }
}

/// List the most recent audits, capped at `limit` (default 10).
pub async fn recent_audits(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    match state.audits.list_recent(limit) {
        Ok(records) => {
            let body: Vec<AuditResponse> = records.into_iter().map(AuditResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("failed to list recent audits: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch recent audits")),
            )
                .into_response()
        }
    }
}
