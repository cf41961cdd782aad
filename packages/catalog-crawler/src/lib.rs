//! Catalog Crawler
//!
//! Walks a price-comparison catalog category, opens each product's detail
//! page, and reduces its specification table to one spec string through
//! [`spec_engine`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog_crawler::{CatalogCrawler, CrawlConfig, CsvSink, HttpCatalogBrowser, RecordSink};
//!
//! let config = CrawlConfig::new("https://prod.danawa.com/list/?cate=16249091")
//!     .with_max_pages(2)
//!     .with_items_per_page(10);
//!
//! let crawler = CatalogCrawler::new(HttpCatalogBrowser::new()?, config);
//! let records = crawler.crawl().await?;
//!
//! let mut sink = CsvSink::create("danawa_output.csv")?;
//! sink.write_all(&records)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Browser and sink abstractions
//! - [`browsers`] - Browser implementations (HttpCatalogBrowser)
//! - [`html`] - Listing and detail page readers
//! - [`links`] - Product link filtering and pagination URLs
//! - [`crawler`] - Crawl orchestration
//! - [`sink`] - CSV output
//! - [`testing`] - Mock implementations for testing

pub mod browsers;
pub mod config;
pub mod crawler;
pub mod delay;
pub mod error;
pub mod html;
pub mod links;
pub mod sink;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use browsers::HttpCatalogBrowser;
pub use config::CrawlConfig;
pub use crawler::CatalogCrawler;
pub use error::{CrawlError, CrawlResult};
pub use sink::CsvSink;
pub use traits::{CatalogBrowser, DetailPage, LinkCandidate, RecordSink};
