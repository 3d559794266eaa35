//! Audit and competitor repositories
//!
//! Callers depend on the store traits, never on a concrete backend.
//! `MemoryStore` is the in-process backend; a durable backend can be
//! swapped in behind the same traits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::types::{AuditRecord, CompetitorRecord, NewAudit, NewCompetitor};

/// Default number of records returned by `list_recent`.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Audit persistence. Records are immutable after creation; repeated
/// analysis of the same URL appends a new record with a fresh id.
pub trait AuditStore: Send + Sync {
    fn create(&self, audit: NewAudit) -> Result<AuditRecord>;
    fn get(&self, id: Uuid) -> Result<Option<AuditRecord>>;
    /// All records, newest first.
    fn list_all(&self) -> Result<Vec<AuditRecord>>;
    /// Prefix of `list_all` capped at `limit`.
    fn list_recent(&self, limit: usize) -> Result<Vec<AuditRecord>>;
}

/// Competitor reference data, unique by URL.
pub trait CompetitorStore: Send + Sync {
    /// Fails when a competitor with the same URL already exists.
    fn create(&self, competitor: NewCompetitor) -> Result<CompetitorRecord>;
    fn get_by_url(&self, url: &str) -> Result<Option<CompetitorRecord>>;
    /// All competitors, newest first.
    fn list(&self) -> Result<Vec<CompetitorRecord>>;
}

/// In-memory store backing both repositories.
///
/// A monotonic sequence number is recorded alongside each audit so that
/// newest-first ordering stays stable when two records share a creation
/// timestamp.
#[derive(Default)]
pub struct MemoryStore {
    audits: RwLock<HashMap<Uuid, (u64, AuditRecord)>>,
    competitors: RwLock<HashMap<Uuid, (u64, CompetitorRecord)>>,
    seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl AuditStore for MemoryStore {
    fn create(&self, audit: NewAudit) -> Result<AuditRecord> {
        let now = Utc::now();
        let record = AuditRecord {
            id: Uuid::new_v4(),
            url: audit.url,
            title: audit.title,
            description: audit.description,
            h1: audit.h1,
            word_count: audit.word_count,
            images_count: audit.images_count,
            scripts_count: audit.scripts_count,
            links_count: audit.links_count,
            has_webp: audit.has_webp,
            links: audit.links,
            step_lock_keywords: audit.step_lock_keywords,
            created_at: now,
            updated_at: now,
        };
        self.audits
            .write()
            .insert(record.id, (self.next_seq(), record.clone()));
        Ok(record)
    }

    fn get(&self, id: Uuid) -> Result<Option<AuditRecord>> {
        Ok(self.audits.read().get(&id).map(|(_, r)| r.clone()))
    }

    fn list_all(&self) -> Result<Vec<AuditRecord>> {
        let audits = self.audits.read();
        let mut entries: Vec<_> = audits.values().cloned().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, r)| r).collect())
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<AuditRecord>> {
        let mut all = self.list_all()?;
        all.truncate(limit);
        Ok(all)
    }
}

impl CompetitorStore for MemoryStore {
    fn create(&self, competitor: NewCompetitor) -> Result<CompetitorRecord> {
        let mut competitors = self.competitors.write();
        if competitors.values().any(|(_, c)| c.url == competitor.url) {
            anyhow::bail!("competitor with URL '{}' already exists", competitor.url);
        }
        let record = CompetitorRecord {
            id: Uuid::new_v4(),
            name: competitor.name,
            url: competitor.url,
            industry: competitor.industry,
            score: competitor.score,
            last_analyzed: competitor.last_analyzed,
            created_at: Utc::now(),
        };
        competitors.insert(record.id, (self.next_seq(), record.clone()));
        Ok(record)
    }

    fn get_by_url(&self, url: &str) -> Result<Option<CompetitorRecord>> {
        Ok(self
            .competitors
            .read()
            .values()
            .find(|(_, c)| c.url == url)
            .map(|(_, c)| c.clone()))
    }

    fn list(&self) -> Result<Vec<CompetitorRecord>> {
        let competitors = self.competitors.read();
        let mut entries: Vec<_> = competitors.values().cloned().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, c)| c).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepLockKeywords;

    fn new_audit(url: &str) -> NewAudit {
        NewAudit {
            url: url.to_string(),
            title: Some("Title".to_string()),
            description: None,
            h1: None,
            word_count: 10,
            images_count: 1,
            scripts_count: 0,
            links_count: 2,
            has_webp: false,
            links: vec!["http://example.com".to_string()],
            step_lock_keywords: StepLockKeywords::default(),
        }
    }

    #[test]
    fn create_assigns_id_and_matching_timestamps() {
        let store = MemoryStore::new();
        let record = AuditStore::create(&store, new_audit("http://a.com")).unwrap();
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.get(record.id).unwrap().unwrap().id, record.id);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn list_all_is_newest_first() {
        let store = MemoryStore::new();
        let first = AuditStore::create(&store, new_audit("http://a.com")).unwrap();
        let second = AuditStore::create(&store, new_audit("http://b.com")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[test]
    fn recent_is_capped_prefix_of_list_all() {
        let store = MemoryStore::new();
        for i in 0..5 {
            AuditStore::create(&store, new_audit(&format!("http://site{i}.com"))).unwrap();
        }

        let all = store.list_all().unwrap();
        let recent = store.list_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        for (r, a) in recent.iter().zip(all.iter()) {
            assert_eq!(r.id, a.id);
        }
    }

    #[test]
    fn repeated_url_produces_distinct_records() {
        let store = MemoryStore::new();
        let first = AuditStore::create(&store, new_audit("http://same.com")).unwrap();
        let second = AuditStore::create(&store, new_audit("http://same.com")).unwrap();

        assert_ne!(first.id, second.id);
        assert!(store.get(first.id).unwrap().is_some());
        assert!(store.get(second.id).unwrap().is_some());
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn concurrent_creates_are_all_visible() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    AuditStore::create(&*store, new_audit(&format!("http://c{i}.com"))).unwrap()
                })
            })
            .collect();

        let mut ids: Vec<Uuid> = handles.into_iter().map(|h| h.join().unwrap().id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.list_all().unwrap().len(), 8);
    }

    #[test]
    fn competitor_lookup_by_url() {
        let store = MemoryStore::new();
        let record = CompetitorStore::create(
            &store,
            NewCompetitor {
                name: "Acme Plumbing".to_string(),
                url: "http://acme.example".to_string(),
                industry: Some("plumbing".to_string()),
                score: Some(72),
                last_analyzed: None,
            },
        )
        .unwrap();

        let found = store.get_by_url("http://acme.example").unwrap().unwrap();
        assert_eq!(found.id, record.id);
        assert!(store.get_by_url("http://other.example").unwrap().is_none());
        assert_eq!(CompetitorStore::list(&store).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_competitor_url_is_rejected() {
        let store = MemoryStore::new();
        let competitor = |name: &str| NewCompetitor {
            name: name.to_string(),
            url: "http://acme.example".to_string(),
            industry: None,
            score: None,
            last_analyzed: None,
        };

        CompetitorStore::create(&store, competitor("Acme Plumbing")).unwrap();
        let err = CompetitorStore::create(&store, competitor("Acme Rebrand")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(CompetitorStore::list(&store).unwrap().len(), 1);
    }
}
