//! Page fetching
//!
//! Single-attempt HTTP retrieval with a bounded timeout and a browser-like
//! user agent (some origin servers reject unidentified clients). Failure
//! classes stay distinct so the request handler can map each to its own
//! client-facing status code. No retries: transient failures surface
//! immediately.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default user agent sent with page fetches. Some origin servers reject
/// unidentified clients, so this mimics a common browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to reach host: {0}")]
    Unreachable(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("response body too large: {0} bytes")]
    BodyTooLarge(usize),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub final_url: Url,
    pub status: u16,
    pub body: String,
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_body_bytes: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            max_body_bytes: 10 * 1024 * 1024,
            max_redirects: 10,
        }
    }
}

/// HTTP page fetcher.
pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch a page, classifying transport failures.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();

        if let Some(len) = response.content_length() {
            if len as usize > self.config.max_body_bytes {
                return Err(FetchError::BodyTooLarge(len as usize));
            }
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        if body.len() > self.config.max_body_bytes {
            return Err(FetchError::BodyTooLarge(body.len()));
        }

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
        })
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else if error.is_connect() {
            FetchError::Unreachable(error.to_string())
        } else {
            FetchError::Transport(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_browser_user_agent() {
        let config = FetchConfig::default();
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn fetcher_builds_with_defaults() {
        assert!(PageFetcher::new(FetchConfig::default()).is_ok());
    }
}
