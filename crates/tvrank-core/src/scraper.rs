//! High-level scraper API
//!
//! One-shot pipeline: fetch the ranked listing page, write the raw body
//! to a backup HTML file, extract the series records, export them as CSV.
//! Each stage consumes the previous stage's complete output; nothing is
//! retried or run twice.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::client::{FetchOutcome, ImdbClient};
use crate::error::{Result, TvRankError};
use crate::export;
use crate::parser::parse_listing;
use crate::types::SeriesRecord;

/// Ranked TV-series search query: at least 5000 votes, best rated first,
/// first page only
pub const TARGET_URL: &str =
    "http://www.imdb.com/search/title?num_votes=5000,&sort=user_rating,desc&start=1&title_type=tv_series";

/// File name for the raw HTML backup of the fetched page
pub const BACKUP_HTML: &str = "tvseries.html";

/// File name for the CSV export
pub const OUTPUT_CSV: &str = "tvseries.csv";

/// One-shot scraper for the IMDB highest-rated TV series listing
pub struct TvRankScraper {
    client: ImdbClient,
    target_url: String,
}

impl TvRankScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(ImdbClient::new()?))
    }

    /// Create a new scraper with a custom client.
    pub fn with_client(client: ImdbClient) -> Self {
        Self {
            client,
            target_url: TARGET_URL.to_string(),
        }
    }

    /// Override the listing URL. Used by tests to point at a mock server.
    pub fn with_target(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }

    /// Fetch the listing page once, without parsing it.
    pub async fn fetch_listing(&self) -> FetchOutcome {
        self.client.fetch(&self.target_url).await
    }

    /// Fetch and parse the listing, returning the extracted records.
    ///
    /// # Errors
    /// `TvRankError::Unavailable` when no HTML page could be fetched.
    pub async fn scrape(&self) -> Result<Vec<SeriesRecord>> {
        match self.fetch_listing().await {
            FetchOutcome::Page(body) => Ok(parse_listing(&String::from_utf8_lossy(&body))),
            FetchOutcome::Unavailable(reason) => Err(TvRankError::Unavailable(reason)),
        }
    }

    /// Run the full pipeline: fetch, back up, parse, export.
    ///
    /// The backup file receives the exact response bytes before any
    /// parsing happens. When the fetch yields no page, the run fails
    /// before touching either file, so a failed fetch never leaves an
    /// empty backup behind.
    ///
    /// Returns the number of exported records.
    pub async fn run(&self, backup_path: &Path, csv_path: &Path) -> Result<usize> {
        let body = match self.fetch_listing().await {
            FetchOutcome::Page(body) => body,
            FetchOutcome::Unavailable(reason) => return Err(TvRankError::Unavailable(reason)),
        };

        fs::write(backup_path, &body)?;
        info!(bytes = body.len(), path = %backup_path.display(), "wrote backup page");

        let records = parse_listing(&String::from_utf8_lossy(&body));

        export::export_to_path(csv_path, &records)?;
        info!(records = records.len(), path = %csv_path.display(), "wrote CSV export");

        Ok(records.len())
    }
}
