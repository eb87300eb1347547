//! Error types for the TvRank scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for TvRank scraper operations
#[derive(Error, Debug)]
pub enum TvRankError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The listing page could not be fetched as HTML
    #[error("listing page unavailable: {0}")]
    Unavailable(String),

    /// Writing the backup or CSV file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TvRank scraper operations
pub type Result<T> = std::result::Result<T, TvRankError>;
