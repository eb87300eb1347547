//! One-shot CLI for the TvRank scraper.
//!
//! Takes no arguments: fetches the fixed IMDB listing, writes
//! `tvseries.html` and `tvseries.csv` into the working directory, and
//! exits non-zero when the page could not be fetched or a file write
//! failed. `RUST_LOG` controls log verbosity.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tvrank_core::{TvRankScraper, BACKUP_HTML, OUTPUT_CSV, TARGET_URL};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!(url = TARGET_URL, "fetching ranked TV series listing");

    let scraper = TvRankScraper::new()?;
    let count = scraper
        .run(Path::new(BACKUP_HTML), Path::new(OUTPUT_CSV))
        .await?;

    info!(records = count, backup = BACKUP_HTML, csv = OUTPUT_CSV, "scrape complete");
    Ok(())
}
