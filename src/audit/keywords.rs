//! StepLock keyword classification
//!
//! Scans a text corpus against four fixed taxonomies (emergency, service,
//! local, problem) and returns deduplicated per-category matches. Matching
//! is case-insensitive substring containment by default, which can produce
//! cross-word false positives; `MatchMode::WordBoundary` is available for
//! callers that want stricter matching.

use serde::{Deserialize, Serialize};

use crate::types::StepLockKeywords;

const EMERGENCY_TERMS: &[&str] = &[
    "24/7", "emergency", "urgent", "immediate", "asap", "now", "today", "same day", "overnight",
    "fast", "quick", "rapid", "instant",
];

const SERVICE_TERMS: &[&str] = &[
    "repair",
    "fix",
    "service",
    "maintenance",
    "installation",
    "replacement",
    "diagnostic",
    "inspection",
    "cleaning",
    "tune-up",
    "overhaul",
];

const LOCAL_TERMS: &[&str] = &[
    "near me",
    "local",
    "nearby",
    "area",
    "city",
    "town",
    "neighborhood",
    "location",
    "address",
    "directions",
    "map",
];

const PROBLEM_TERMS: &[&str] = &[
    "broken",
    "not working",
    "failed",
    "damaged",
    "leaking",
    "stuck",
    "won't start",
    "error",
    "issue",
    "problem",
    "trouble",
    "help",
];

/// How taxonomy terms are matched against the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain substring containment (reference behavior).
    #[default]
    Substring,
    /// Term must not be embedded in a longer alphanumeric run.
    WordBoundary,
}

/// Classify a corpus against all four taxonomies.
///
/// The corpus is case-folded once; each term matches at most once per
/// category regardless of how often it occurs.
pub fn classify(corpus: &str, mode: MatchMode) -> StepLockKeywords {
    let lower = corpus.to_lowercase();
    StepLockKeywords {
        emergency: matches_in(&lower, EMERGENCY_TERMS, mode),
        service: matches_in(&lower, SERVICE_TERMS, mode),
        local: matches_in(&lower, LOCAL_TERMS, mode),
        problem: matches_in(&lower, PROBLEM_TERMS, mode),
    }
}

fn matches_in(lower_corpus: &str, terms: &[&str], mode: MatchMode) -> Vec<String> {
    terms
        .iter()
        .filter(|term| term_matches(lower_corpus, term, mode))
        .map(|term| term.to_string())
        .collect()
}

fn term_matches(corpus: &str, term: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => corpus.contains(term),
        MatchMode::WordBoundary => corpus.match_indices(term).any(|(start, matched)| {
            let before = corpus[..start].chars().next_back();
            let after = corpus[start + matched.len()..].chars().next();
            !before.is_some_and(|c| c.is_alphanumeric())
                && !after.is_some_and(|c| c.is_alphanumeric())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_category() {
        let keywords = classify(
            "Call now for emergency repair near me, we fix broken pipes fast",
            MatchMode::Substring,
        );
        for term in ["emergency", "now", "fast"] {
            assert!(keywords.emergency.contains(&term.to_string()), "{term}");
        }
        for term in ["repair", "fix"] {
            assert!(keywords.service.contains(&term.to_string()), "{term}");
        }
        assert!(keywords.local.contains(&"near me".to_string()));
        assert!(keywords.problem.contains(&"broken".to_string()));
        assert!(keywords.total() >= 5);
    }

    #[test]
    fn case_insensitive() {
        let keywords = classify("EMERGENCY Repair SERVICE", MatchMode::Substring);
        assert!(keywords.emergency.contains(&"emergency".to_string()));
        assert!(keywords.service.contains(&"repair".to_string()));
        assert!(keywords.service.contains(&"service".to_string()));
    }

    #[test]
    fn repeated_terms_match_once() {
        let keywords = classify(
            "emergency emergency emergency repair repair",
            MatchMode::Substring,
        );
        assert_eq!(
            keywords.emergency.iter().filter(|k| *k == "emergency").count(),
            1
        );
        assert_eq!(keywords.service.iter().filter(|k| *k == "repair").count(), 1);
    }

    #[test]
    fn empty_corpus_yields_empty_categories() {
        let keywords = classify("", MatchMode::Substring);
        assert_eq!(keywords.total(), 0);
        assert!(keywords.emergency.is_empty());
        assert!(keywords.service.is_empty());
        assert!(keywords.local.is_empty());
        assert!(keywords.problem.is_empty());
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        // "map" inside "roadmap": the documented reference behavior.
        let keywords = classify("our roadmap for growth", MatchMode::Substring);
        assert!(keywords.local.contains(&"map".to_string()));
    }

    #[test]
    fn word_boundary_mode_rejects_embedded_terms() {
        let loose = classify("our roadmap for growth", MatchMode::WordBoundary);
        assert!(!loose.local.contains(&"map".to_string()));

        let exact = classify("view the map and directions", MatchMode::WordBoundary);
        assert!(exact.local.contains(&"map".to_string()));
        assert!(exact.local.contains(&"directions".to_string()));
    }

    #[test]
    fn word_boundary_handles_punctuation_and_multiword_terms() {
        let keywords = classify("available 24/7, same day service.", MatchMode::WordBoundary);
        assert!(keywords.emergency.contains(&"24/7".to_string()));
        assert!(keywords.emergency.contains(&"same day".to_string()));
        assert!(keywords.service.contains(&"service".to_string()));
    }
}
