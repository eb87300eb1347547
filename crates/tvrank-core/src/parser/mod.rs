//! HTML parsers for IMDB pages
//!
//! - `listing`: parse the ranked TV-series search results page

pub mod listing;

// Re-export main parsing functions
pub use listing::parse_listing;
