use tvrank_core::TvRankScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = TvRankScraper::new()?;

    println!("Fetching highest-rated TV series from IMDB...\n");

    let records = scraper.scrape().await?;

    println!("Extracted {} series:", records.len());
    for (i, record) in records.iter().enumerate() {
        let rating = record
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "unknown".to_string());
        println!("  {}. {} ({}) - {}", i + 1, record.title, rating, record.genres);
    }

    Ok(())
}
