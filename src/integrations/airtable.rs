//! Airtable sync
//!
//! Adds one row to the fixed `Competitors` table per completed audit.
//! No-op when either the base id or the token is missing.

use anyhow::{Context, Result};
use serde_json::json;

const TABLE_NAME: &str = "Competitors";

/// Fields upserted to Airtable for one audit.
#[derive(Debug, Clone)]
pub struct AirtableCompetitorRow {
    pub base_id: Option<String>,
    pub token: Option<String>,
    pub url: String,
    pub title: Option<String>,
}

/// Create the competitor row. Returns Ok(()) without doing anything when
/// credentials are absent.
pub async fn upsert_competitor(
    client: &reqwest::Client,
    row: AirtableCompetitorRow,
) -> Result<()> {
    let (Some(base_id), Some(token)) = (row.base_id.as_deref(), row.token.as_deref()) else {
        return Ok(());
    };

    let title = row.title.clone().unwrap_or_else(|| row.url.clone());
    let body = json!({
        "records": [{
            "fields": {
                "URL": row.url,
                "Title": title
            }
        }]
    });

    let endpoint = format!("https://api.airtable.com/v0/{base_id}/{TABLE_NAME}");
    let response = client
        .post(&endpoint)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .context("Airtable request failed")?;

    response
        .error_for_status()
        .context("Airtable rejected the competitor row")?;
    Ok(())
}
