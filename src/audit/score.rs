//! Opportunity scoring
//!
//! Maps extracted page signals to a 0-100 "opportunity score" via a fixed
//! additive rule table. Higher means the page looks more underdeveloped.
//! This is the single implementation; every surface that displays a score
//! calls it with the same five inputs.

use serde::{Deserialize, Serialize};

use crate::types::{AuditRecord, StepLockKeywords};

/// The five signals the score is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreInputs {
    pub word_count: u32,
    pub images_count: u32,
    pub links_count: u32,
    /// Total keyword matches across all four categories.
    pub keyword_matches: u32,
    pub has_webp: bool,
}

impl ScoreInputs {
    pub fn from_record(record: &AuditRecord) -> Self {
        Self::from_signals(
            record.word_count,
            record.images_count,
            record.links_count,
            &record.step_lock_keywords,
            record.has_webp,
        )
    }

    pub fn from_signals(
        word_count: u32,
        images_count: u32,
        links_count: u32,
        keywords: &StepLockKeywords,
        has_webp: bool,
    ) -> Self {
        Self {
            word_count,
            images_count,
            links_count,
            keyword_matches: keywords.total() as u32,
            has_webp,
        }
    }
}

/// Compute the opportunity score for a set of signals.
///
/// Pure and deterministic. Each rule contributes independently and the sum
/// is clamped to [0, 100]. The table is tuned so an all-"boring" page
/// saturates at exactly 100 (25+20+15+25+15).
pub fn opportunity_score(inputs: &ScoreInputs) -> u8 {
    let mut score: u32 = 0;

    score += match inputs.word_count {
        0..=499 => 25,
        500..=999 => 15,
        1000..=1999 => 5,
        _ => 0,
    };

    score += match inputs.images_count {
        0..=4 => 20,
        5..=9 => 10,
        _ => 0,
    };

    score += match inputs.links_count {
        0..=19 => 15,
        20..=49 => 10,
        _ => 0,
    };

    score += match inputs.keyword_matches {
        0 => 0,
        1..=5 => 10,
        6..=10 => 15,
        _ => 25,
    };

    if !inputs.has_webp {
        score += 15;
    }

    score.min(100) as u8
}

/// Coarse banding of a score for display surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpportunityLevel {
    Goldmine,
    High,
    Medium,
    Low,
}

impl OpportunityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Self::Goldmine,
            75..=89 => Self::High,
            60..=74 => Self::Medium,
            _ => Self::Low,
        }
    }
}
