//! HTTP API Request Handlers

mod audits;
mod competitors;
mod system;

use std::sync::Arc;

use crate::audit::Auditor;
use crate::storage::{AuditStore, CompetitorStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor>,
    pub audits: Arc<dyn AuditStore>,
    pub competitors: Arc<dyn CompetitorStore>,
    /// Client reused by the best-effort integrations.
    pub sync_client: reqwest::Client,
}

pub use audits::{create_audit, get_audit, list_audits, recent_audits};
pub use competitors::list_competitors;
pub use system::health;
