//! Configuration for the audit service

mod audit;
mod http;
mod logging;

pub use audit::AuditConfig;
pub use http::HttpConfig;
pub use logging::{LogFormat, LoggingConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Audit pipeline configuration
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.http.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(format!(
                "http.listen_addr '{}' is not a valid socket address",
                self.http.listen_addr
            ));
        }

        if self.audit.timeout_secs == 0 {
            errors.push("audit.timeout_secs must be positive".to_string());
        }
        if self.audit.timeout_secs > 120 {
            errors.push("audit.timeout_secs must be <= 120".to_string());
        }
        if self.audit.link_sample_size == 0 {
            errors.push("audit.link_sample_size must be positive".to_string());
        }
        if self.audit.link_sample_size > 100 {
            errors.push("audit.link_sample_size must be <= 100".to_string());
        }
        if self.audit.max_body_bytes == 0 {
            errors.push("audit.max_body_bytes must be positive".to_string());
        }
        if self.audit.user_agent.trim().is_empty() {
            errors.push("audit.user_agent must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Invalid configuration:\n  - {}", errors.join("\n  - ")))
        }
    }
}
