//! The page-audit pipeline: fetch, parse, classify, score, persist.

pub mod fetcher;
pub mod keywords;
pub mod parser;
pub mod pipeline;
pub mod score;

pub use fetcher::{FetchConfig, FetchError, PageFetcher};
pub use keywords::MatchMode;
pub use parser::PageSignals;
pub use pipeline::{AuditError, Auditor};
pub use score::{opportunity_score, OpportunityLevel, ScoreInputs};
