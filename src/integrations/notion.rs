//! Notion sync
//!
//! Creates one page in a Notion database per completed audit. No-op when
//! either the database id or the token is missing.

use anyhow::{Context, Result};
use serde_json::json;

const NOTION_API: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

/// Fields logged to Notion for one audit.
#[derive(Debug, Clone)]
pub struct NotionAuditPage {
    pub db_id: Option<String>,
    pub token: Option<String>,
    pub title: Option<String>,
    pub url: String,
    pub project_id: String,
    pub word_count: u32,
}

/// Create the audit page. Returns Ok(()) without doing anything when
/// credentials are absent.
pub async fn log_audit(client: &reqwest::Client, page: NotionAuditPage) -> Result<()> {
    let (Some(db_id), Some(token)) = (page.db_id.as_deref(), page.token.as_deref()) else {
        return Ok(());
    };

    let name = page.title.clone().unwrap_or_else(|| page.url.clone());
    let body = json!({
        "parent": { "database_id": db_id },
        "properties": {
            "Name": { "title": [{ "text": { "content": name } }] },
            "URL": { "url": page.url },
            "Project": { "rich_text": [{ "text": { "content": page.project_id } }] },
            "WordCount": { "number": page.word_count }
        }
    });

    let response = client
        .post(NOTION_API)
        .bearer_auth(token)
        .header("Notion-Version", NOTION_VERSION)
        .json(&body)
        .send()
        .await
        .context("Notion request failed")?;

    response
        .error_for_status()
        .context("Notion rejected the audit page")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_is_a_noop() {
        let client = reqwest::Client::new();
        let page = NotionAuditPage {
            db_id: None,
            token: Some("secret".to_string()),
            title: None,
            url: "http://example.com".to_string(),
            project_id: "default".to_string(),
            word_count: 10,
        };
        assert!(log_audit(&client, page).await.is_ok());

        let page = NotionAuditPage {
            db_id: Some("db".to_string()),
            token: None,
            title: None,
            url: "http://example.com".to_string(),
            project_id: "default".to_string(),
            word_count: 10,
        };
        assert!(log_audit(&client, page).await.is_ok());
    }
}
