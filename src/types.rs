//! Core record types shared across the pipeline, storage, and HTTP layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Keyword matches grouped by the four fixed StepLock categories.
///
/// Category vectors are always present, possibly empty, and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLockKeywords {
    pub emergency: Vec<String>,
    pub service: Vec<String>,
    pub local: Vec<String>,
    pub problem: Vec<String>,
}

impl StepLockKeywords {
    /// Total number of matched terms across all categories.
    pub fn total(&self) -> usize {
        self.emergency.len() + self.service.len() + self.local.len() + self.problem.len()
    }
}

/// One completed audit of a single URL. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: Uuid,
    pub url: String,
    /// Page title, falling back to the first h1. `None` when neither exists.
    pub title: Option<String>,
    /// Content of `<meta name="description">`, if present.
    pub description: Option<String>,
    /// Text of the first `<h1>`, if present.
    pub h1: Option<String>,
    pub word_count: u32,
    pub images_count: u32,
    pub scripts_count: u32,
    pub links_count: u32,
    pub has_webp: bool,
    /// Distinct absolute link targets in document order, capped at a sample size.
    pub links: Vec<String>,
    pub step_lock_keywords: StepLockKeywords,
    pub created_at: DateTime<Utc>,
    /// Reserved. No update path exists today, so this always equals `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Audit fields as produced by the pipeline, before the repository assigns
/// an id and timestamps.
#[derive(Debug, Clone)]
pub struct NewAudit {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Option<String>,
    pub word_count: u32,
    pub images_count: u32,
    pub scripts_count: u32,
    pub links_count: u32,
    pub has_webp: bool,
    pub links: Vec<String>,
    pub step_lock_keywords: StepLockKeywords,
}

/// A tracked competitor. Reference data with no derived computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub industry: Option<String>,
    pub score: Option<u8>,
    pub last_analyzed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Competitor fields before the repository assigns id and creation time.
#[derive(Debug, Clone)]
pub struct NewCompetitor {
    pub name: String,
    pub url: String,
    pub industry: Option<String>,
    pub score: Option<u8>,
    pub last_analyzed: Option<DateTime<Utc>>,
}
