//! Ranked listing parser for IMDB search result pages
//!
//! Each series occupies one `div.lister-item.mode-advanced` block. The five
//! fields are looked up independently with fixed selectors relative to that
//! block; a field whose markup is missing or empty degrades to the
//! placeholder without affecting the others.

use scraper::{ElementRef, Html, Selector};

use crate::types::{SeriesRecord, PLACEHOLDER};

/// Marker for one series entry on the listing page
const ENTRY_SELECTOR: &str = "div.lister-item.mode-advanced";

/// Heading link carrying the series title
const TITLE_SELECTOR: &str = "h3.lister-item-header a";

/// Highlighted rating value inside the ratings bar
const RATING_SELECTOR: &str = "strong";

/// Tagged genre span, already comma-joined by the page
const GENRE_SELECTOR: &str = "span.genre";

/// Inline cast links, in page order
const CAST_SELECTOR: &str = "p > a";

/// Tagged runtime span, e.g. "45 min"
const RUNTIME_SELECTOR: &str = "span.runtime";

/// Parse all series entries from the listing page HTML.
///
/// Output order mirrors the page's own sort order; entries are never
/// deduplicated. An empty or unrecognized page yields an empty vector.
pub fn parse_listing(html: &str) -> Vec<SeriesRecord> {
    let document = Html::parse_document(html);

    let entry_selector = match Selector::parse(ENTRY_SELECTOR) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&entry_selector)
        .map(|entry| parse_entry(&entry))
        .collect()
}

/// Build one record from a single listing entry block.
fn parse_entry(entry: &ElementRef) -> SeriesRecord {
    SeriesRecord {
        title: field_text(entry, TITLE_SELECTOR).unwrap_or_else(placeholder),
        rating: field_text(entry, RATING_SELECTOR).and_then(|t| t.parse::<f32>().ok()),
        genres: field_text(entry, GENRE_SELECTOR).unwrap_or_else(placeholder),
        cast: cast_names(entry).unwrap_or_else(placeholder),
        runtime: field_text(entry, RUNTIME_SELECTOR)
            .and_then(|t| runtime_minutes(&t))
            .unwrap_or_else(placeholder),
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

/// Shared first-match text lookup relative to one entry block.
///
/// Returns `None` for a missing node or empty text, so every field goes
/// through the same absence check before its own post-processing.
fn field_text(entry: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let el = entry.select(&selector).next()?;
    let text = el.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collect cast link texts and join them with comma+space.
fn cast_names(entry: &ElementRef) -> Option<String> {
    let selector = Selector::parse(CAST_SELECTOR).ok()?;
    let names: Vec<String> = entry
        .select(&selector)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// Strip the unit suffix from runtime text, keeping only the minutes.
///
/// "45 min" -> "45". Text with no digits at all yields `None`.
fn runtime_minutes(text: &str) -> Option<String> {
    let re = regex_lite::Regex::new(r"(\d+)").ok()?;
    let caps = re.captures(text)?;
    Some(caps.get(1)?.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One fully-populated entry in the page template's shape.
    const FULL_ENTRY: &str = r#"
        <div class="lister-item mode-advanced">
          <div class="lister-item-content">
            <h3 class="lister-item-header">
              <span class="lister-item-index">1.</span>
              <a href="/title/tt0903747/">Breaking Bad</a>
            </h3>
            <p class="text-muted">
              <span class="runtime">49 min</span>
              <span class="ghost">|</span>
              <span class="genre">Crime, Drama, Thriller</span>
            </p>
            <div class="ratings-bar"><strong>9.5</strong></div>
            <p class="">
              Stars:
              <a href="/name/nm0186505/">Bryan Cranston</a>,
              <a href="/name/nm0666739/">Aaron Paul</a>,
              <a href="/name/nm1336827/">Anna Gunn</a>
            </p>
          </div>
        </div>
    "#;

    /// Entry with no genre span and no runtime span.
    const SPARSE_ENTRY: &str = r#"
        <div class="lister-item mode-advanced">
          <div class="lister-item-content">
            <h3 class="lister-item-header">
              <a href="/title/tt0000001/">Obscure Show</a>
            </h3>
            <div class="ratings-bar"><strong>8.1</strong></div>
            <p class="">
              <a href="/name/nm0000001/">Sole Lead</a>
            </p>
          </div>
        </div>
    "#;

    fn page(entries: &[&str]) -> String {
        format!("<html><body>{}</body></html>", entries.concat())
    }

    #[test]
    fn test_record_count_matches_entry_markers() {
        let html = page(&[FULL_ENTRY, SPARSE_ENTRY, FULL_ENTRY]);
        let records = parse_listing(&html);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_full_entry_fields() {
        let records = parse_listing(&page(&[FULL_ENTRY]));
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.title, "Breaking Bad");
        assert_eq!(record.rating, Some(9.5));
        assert_eq!(record.genres, "Crime, Drama, Thriller");
        assert_eq!(record.cast, "Bryan Cranston, Aaron Paul, Anna Gunn");
        assert_eq!(record.runtime, "49");
    }

    #[test]
    fn test_missing_fields_become_placeholder() {
        let records = parse_listing(&page(&[SPARSE_ENTRY]));
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.title, "Obscure Show");
        assert_eq!(record.genres, PLACEHOLDER);
        assert_eq!(record.runtime, PLACEHOLDER);
        assert_eq!(record.cast, "Sole Lead");
    }

    #[test]
    fn test_page_order_preserved() {
        let html = page(&[SPARSE_ENTRY, FULL_ENTRY]);
        let records = parse_listing(&html);
        assert_eq!(records[0].title, "Obscure Show");
        assert_eq!(records[1].title, "Breaking Bad");
    }

    #[test]
    fn test_unparseable_rating_is_none() {
        let entry = r#"
            <div class="lister-item mode-advanced">
              <h3 class="lister-item-header"><a>Unrated Show</a></h3>
              <div class="ratings-bar"><strong>N/A</strong></div>
            </div>
        "#;
        let records = parse_listing(&page(&[entry]));
        assert_eq!(records[0].rating, None);
    }

    #[test]
    fn test_missing_title_becomes_placeholder() {
        let entry = r#"
            <div class="lister-item mode-advanced">
              <div class="ratings-bar"><strong>7.2</strong></div>
            </div>
        "#;
        let records = parse_listing(&page(&[entry]));
        assert_eq!(records[0].title, PLACEHOLDER);
        assert_eq!(records[0].rating, Some(7.2));
    }

    #[test]
    fn test_runtime_minutes() {
        assert_eq!(runtime_minutes("45 min"), Some("45".to_string()));
        assert_eq!(runtime_minutes("60min"), Some("60".to_string()));
        assert_eq!(runtime_minutes("min"), None);
        assert_eq!(runtime_minutes(""), None);
    }

    #[test]
    fn test_runtime_contains_only_digits() {
        let records = parse_listing(&page(&[FULL_ENTRY]));
        assert!(records[0].runtime.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_cast_join_preserves_order() {
        let entry = r#"
            <div class="lister-item mode-advanced">
              <h3 class="lister-item-header"><a>Show</a></h3>
              <p><a>A</a><a>B</a><a>C</a></p>
            </div>
        "#;
        let records = parse_listing(&page(&[entry]));
        assert_eq!(records[0].cast, "A, B, C");
    }

    #[test]
    fn test_parse_empty_page() {
        let records = parse_listing("<html><body></body></html>");
        assert!(records.is_empty());
    }
}
