//! siteaudit: competitor page audit service
//!
//! Fetches a submitted URL, extracts simple page heuristics (word count,
//! element counts, webp presence, keyword-category matches), persists an
//! audit record, and serves it over a JSON HTTP API. A single pure scoring
//! function maps the extracted signals to a 0-100 opportunity score.

pub mod audit;
pub mod config;
pub mod http;
pub mod integrations;
pub mod storage;
pub mod types;

pub use config::Config;
pub use types::*;
