//! TvRank Scraper Core Library
//!
//! This crate fetches IMDB's highest-rated TV series listing and exports
//! the entries as CSV.
//!
//! # Features
//! - Fetch the ranked listing page (single GET, no retries)
//! - Extract one record per listing entry (title, rating, genres, cast, runtime)
//! - Write a raw HTML backup of the fetched page
//! - Export records as CSV with a spreadsheet separator hint row

pub mod client;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, FetchOutcome, ImdbClient};
pub use error::{Result, TvRankError};
pub use scraper::{TvRankScraper, BACKUP_HTML, OUTPUT_CSV, TARGET_URL};
pub use types::{SeriesRecord, PLACEHOLDER};
