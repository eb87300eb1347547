//! Data types for the TvRank scraper
//!
//! All types implement Serialize and Deserialize for JSON compatibility.

use serde::{Deserialize, Serialize};

/// Value substituted for any field that cannot be extracted from the page
pub const PLACEHOLDER: &str = "unknown";

/// One TV series entry from the ranked listing page
///
/// Constructed once during extraction and immutable afterwards. Text
/// fields already carry the [`PLACEHOLDER`] when the page had no usable
/// value; the rating keeps `None` until export so it stays numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Series title
    pub title: String,
    /// User rating, `None` when missing or unparseable
    pub rating: Option<f32>,
    /// Comma-joined genre list as shown on the page
    pub genres: String,
    /// Comma+space-joined cast names in page order
    pub cast: String,
    /// Runtime in minutes, digits only (unit suffix stripped)
    pub runtime: String,
}

impl SeriesRecord {
    /// Render the record as one CSV row in export column order.
    ///
    /// IMDB shows ratings with one decimal, so a present rating is
    /// formatted `{:.1}`; an absent one becomes the placeholder.
    pub fn csv_row(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            self.genres.clone(),
            self.cast.clone(),
            self.runtime.clone(),
        ]
    }
}
