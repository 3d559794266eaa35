//! Audit pipeline orchestration
//!
//! One linear pass per request: validate URL, fetch, extract signals,
//! classify keywords, persist. Persistence happens exactly once, after
//! every extraction step has succeeded; no partial records.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::audit::fetcher::{FetchError, PageFetcher};
use crate::audit::keywords::{self, MatchMode};
use crate::audit::parser;
use crate::config::AuditConfig;
use crate::storage::AuditStore;
use crate::types::{AuditRecord, NewAudit};

/// Errors surfaced by the pipeline. Each maps to one client-facing status
/// at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to persist audit: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Runs audits end to end against an injected store.
pub struct Auditor {
    fetcher: PageFetcher,
    store: Arc<dyn AuditStore>,
    link_sample_size: usize,
    match_mode: MatchMode,
}

impl Auditor {
    pub fn new(config: &AuditConfig, store: Arc<dyn AuditStore>) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(config.fetch_config())?;
        Ok(Self {
            fetcher,
            store,
            link_sample_size: config.link_sample_size,
            match_mode: config.match_mode(),
        })
    }

    /// Audit one URL: fetch, analyze, persist, return the stored record.
    pub async fn run(&self, url: &str) -> Result<AuditRecord, AuditError> {
        let parsed = validate_url(url)?;

        debug!(url, "fetching page");
        let page = self.fetcher.fetch(&parsed).await?;

        let audit = analyze(url, &page.body, self.link_sample_size, self.match_mode);
        let record = self.store.create(audit)?;

        info!(
            url,
            id = %record.id,
            words = record.word_count,
            keywords = record.step_lock_keywords.total(),
            "audit complete"
        );
        Ok(record)
    }
}

/// Reject anything that does not parse as an absolute URL with a host.
fn validate_url(url: &str) -> Result<Url, AuditError> {
    let parsed = Url::parse(url).map_err(|_| AuditError::InvalidUrl(url.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(AuditError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// The synchronous middle of the pipeline: parse signals and classify
/// keywords from already-fetched HTML.
pub fn analyze(url: &str, html: &str, link_sample_size: usize, mode: MatchMode) -> NewAudit {
    let signals = parser::extract_signals(html, link_sample_size);

    let corpus = format!(
        "{} {} {} {}",
        signals.title.as_deref().unwrap_or_default(),
        signals.description.as_deref().unwrap_or_default(),
        signals.h1.as_deref().unwrap_or_default(),
        signals.body_text,
    );
    let step_lock_keywords = keywords::classify(&corpus, mode);

    NewAudit {
        url: url.to_string(),
        title: signals.title,
        description: signals.description,
        h1: signals.h1,
        word_count: signals.word_count,
        images_count: signals.images_count,
        scripts_count: signals.scripts_count,
        links_count: signals.links_count,
        has_webp: signals.has_webp,
        links: signals.links,
        step_lock_keywords,
    }
}
