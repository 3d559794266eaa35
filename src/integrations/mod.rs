//! Best-effort external integrations
//!
//! Each sync is dispatched as its own task after the audit has been
//! persisted. Failures are logged and never affect the primary response.

pub mod airtable;
pub mod notion;

use tracing::warn;

use crate::types::AuditRecord;

pub use airtable::AirtableCompetitorRow;
pub use notion::NotionAuditPage;

/// Credentials supplied with an audit request. All optional; each sync
/// independently no-ops when its pair is incomplete.
#[derive(Debug, Clone, Default)]
pub struct SyncCredentials {
    pub notion_db_id: Option<String>,
    pub notion_token: Option<String>,
    pub airtable_base_id: Option<String>,
    pub airtable_token: Option<String>,
    pub project_id: Option<String>,
}

impl SyncCredentials {
    pub fn is_empty(&self) -> bool {
        self.notion_db_id.is_none()
            && self.notion_token.is_none()
            && self.airtable_base_id.is_none()
            && self.airtable_token.is_none()
    }
}

/// Fire and forget both syncs for a persisted audit.
pub fn spawn_syncs(client: reqwest::Client, credentials: SyncCredentials, record: &AuditRecord) {
    if credentials.is_empty() {
        return;
    }

    let notion_page = NotionAuditPage {
        db_id: credentials.notion_db_id,
        token: credentials.notion_token,
        title: record.title.clone(),
        url: record.url.clone(),
        project_id: credentials
            .project_id
            .unwrap_or_else(|| "default".to_string()),
        word_count: record.word_count,
    };
    let airtable_row = AirtableCompetitorRow {
        base_id: credentials.airtable_base_id,
        token: credentials.airtable_token,
        url: record.url.clone(),
        title: record.title.clone(),
    };

    let notion_client = client.clone();
    tokio::spawn(async move {
        if let Err(e) = notion::log_audit(&notion_client, notion_page).await {
            warn!("Notion sync failed: {e:#}");
        }
    });

    tokio::spawn(async move {
        if let Err(e) = airtable::upsert_competitor(&client, airtable_row).await {
            warn!("Airtable sync failed: {e:#}");
        }
    });
}
