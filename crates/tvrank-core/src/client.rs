//! HTTP client for the IMDB listing page
//!
//! This module performs the single best-effort GET of the ranked listing.
//! There is no retry logic: the page is fetched once per run, and any
//! failure is folded into [`FetchOutcome::Unavailable`].

use std::time::Duration;

use tracing::warn;

use crate::error::Result;

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the IMDB HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Result of one fetch attempt.
///
/// Two variants, so callers are forced to handle the failure path:
/// either the exact HTML body bytes of a good response, or the reason
/// no page was obtained. A transport error, a non-200 status and a
/// non-HTML content type all collapse into `Unavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Status 200 with an HTML content type; carries the raw body bytes
    Page(Vec<u8>),
    /// No usable page; carries a human-readable reason
    Unavailable(String),
}

impl FetchOutcome {
    /// True if a page body was obtained
    pub fn is_page(&self) -> bool {
        matches!(self, FetchOutcome::Page(_))
    }
}

/// HTTP client wrapper around reqwest
pub struct ImdbClient {
    client: reqwest::Client,
}

impl ImdbClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `url` with a single GET.
    ///
    /// Returns [`FetchOutcome::Page`] only for a 200 response whose
    /// `Content-Type` contains `"html"`. Everything else, including
    /// transport errors, is logged and returned as
    /// [`FetchOutcome::Unavailable`]; this method never fails with an
    /// error.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.try_fetch(url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(url, error = %e, "HTTP GET request failed");
                FetchOutcome::Unavailable(e.to_string())
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<FetchOutcome, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if status == reqwest::StatusCode::OK && content_type.contains("html") {
            let body = response.bytes().await?;
            return Ok(FetchOutcome::Page(body.to_vec()));
        }

        let reason = format!(
            "unexpected response: status {}, content type {:?}",
            status.as_u16(),
            content_type
        );
        warn!(url, reason, "listing page not available as HTML");
        Ok(FetchOutcome::Unavailable(reason))
    }
}
