//! Catalog crawl CLI
//!
//! Crawls one catalog category and writes `상품명,URL,상세정보` rows to CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_crawler::{
    config::{load_vocabulary, DEFAULT_OUTPUT},
    CatalogCrawler, CrawlConfig, CsvSink, HttpCatalogBrowser, RecordSink,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "catalog-crawl", about = "Crawl a catalog category into a spec CSV")]
struct Args {
    /// Category listing URL
    #[arg(long)]
    category_url: String,

    /// Output CSV path
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of listing pages to visit
    #[arg(long, default_value_t = 1)]
    pages: usize,

    /// Links per listing page (0 = all)
    #[arg(long, default_value_t = 0)]
    items_per_page: usize,

    /// Total records to collect (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_total_items: usize,

    /// Base delay between requests in milliseconds
    #[arg(long, default_value_t = 600)]
    delay_ms: u64,

    /// JSON vocabulary override
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_crawler=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = CrawlConfig::new(&args.category_url)
        .with_max_pages(args.pages)
        .with_items_per_page(args.items_per_page)
        .with_max_total_items(args.max_total_items)
        .with_delay_ms(args.delay_ms)
        .with_output(&args.output);

    let browser = HttpCatalogBrowser::new().context("Failed to build HTTP client")?;

    let mut crawler = CatalogCrawler::new(browser, config);
    if let Some(path) = &args.vocabulary {
        let vocabulary = load_vocabulary(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?;
        crawler = crawler.with_vocabulary(vocabulary);
    }

    let records = crawler
        .crawl()
        .await
        .with_context(|| format!("Crawl failed for {}", args.category_url))?;

    let output = &crawler.config().output;
    let mut sink = CsvSink::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    sink.write_all(&records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(records = records.len(), output = %output.display(), "Done");
    Ok(())
}
