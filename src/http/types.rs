//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API. Field names are camelCase to
//! match the dashboard's existing contract.

use serde::{Deserialize, Serialize};

use crate::audit::{opportunity_score, OpportunityLevel, ScoreInputs};
use crate::types::AuditRecord;

/// Create-audit request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditRequest {
    /// The URL to audit. Checked explicitly so a missing field reports 400,
    /// not a deserialization error.
    pub url: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub notion_db_id: Option<String>,
    #[serde(default)]
    pub notion_token: Option<String>,
    #[serde(default)]
    pub airtable_base_id: Option<String>,
    #[serde(default)]
    pub airtable_token: Option<String>,
}

/// A persisted audit plus its derived score fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    #[serde(flatten)]
    pub record: AuditRecord,
    pub opportunity_score: u8,
    pub opportunity_level: OpportunityLevel,
}

impl From<AuditRecord> for AuditResponse {
    fn from(record: AuditRecord) -> Self {
        let score = opportunity_score(&ScoreInputs::from_record(&record));
        Self {
            record,
            opportunity_score: score,
            opportunity_level: OpportunityLevel::from_score(score),
        }
    }
}

/// Query parameters for the recent-audits endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

/// Error response. Every failure yields `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
