//! Audit pipeline configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audit::fetcher::DEFAULT_USER_AGENT;
use crate::audit::{FetchConfig, MatchMode};

/// Audit pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Fetch timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// User agent string for page fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum response body size (bytes)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Maximum redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Cap on sampled links per audit (1-100)
    #[serde(default = "default_link_sample_size")]
    pub link_sample_size: usize,
    /// Require word boundaries when matching keyword taxonomies
    #[serde(default)]
    pub strict_keyword_boundaries: bool,
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_max_redirects() -> usize {
    10
}

fn default_link_sample_size() -> usize {
    50
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            max_body_bytes: default_max_body_bytes(),
            max_redirects: default_max_redirects(),
            link_sample_size: default_link_sample_size(),
            strict_keyword_boundaries: false,
        }
    }
}

impl AuditConfig {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_body_bytes: self.max_body_bytes,
            max_redirects: self.max_redirects,
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        if self.strict_keyword_boundaries {
            MatchMode::WordBoundary
        } else {
            MatchMode::Substring
        }
    }
}
