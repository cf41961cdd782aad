//! Configuration for catalog crawls.

use serde::{Deserialize, Serialize};
use spec_engine::Vocabulary;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CrawlResult;

/// Default output file for crawled records.
pub const DEFAULT_OUTPUT: &str = "danawa_output.csv";

/// Configuration for one category crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Category listing URL (first page)
    pub category_url: String,

    /// Number of listing pages to visit
    pub max_pages: usize,

    /// Links taken from each listing page (None = all)
    pub items_per_page: Option<usize>,

    /// Stop after this many records (None = unlimited)
    pub max_total_items: Option<usize>,

    /// Base delay between requests in milliseconds.
    ///
    /// The actual pause is jittered up to twice this value.
    /// Default: 600.
    pub base_delay_ms: u64,

    /// Timeout for loading a listing page in milliseconds
    pub listing_timeout_ms: u64,

    /// Timeout for loading a product detail page in milliseconds
    pub detail_timeout_ms: u64,

    /// Where the CSV is written
    pub output: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            category_url: String::new(),
            max_pages: 1,
            items_per_page: None,
            max_total_items: None,
            base_delay_ms: 600,
            listing_timeout_ms: 10_000,
            detail_timeout_ms: 15_000,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CrawlConfig {
    /// Create a new crawl config for a category URL.
    pub fn new(category_url: impl Into<String>) -> Self {
        Self {
            category_url: category_url.into(),
            ..Default::default()
        }
    }

    /// Set the number of listing pages.
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    /// Limit links per listing page. Zero means unlimited.
    pub fn with_items_per_page(mut self, items: usize) -> Self {
        self.items_per_page = (items > 0).then_some(items);
        self
    }

    /// Limit the total number of records. Zero means unlimited.
    pub fn with_max_total_items(mut self, items: usize) -> Self {
        self.max_total_items = (items > 0).then_some(items);
        self
    }

    /// Set the base delay.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.base_delay_ms = ms;
        self
    }

    /// Set the detail page timeout.
    pub fn with_detail_timeout_ms(mut self, ms: u64) -> Self {
        self.detail_timeout_ms = ms;
        self
    }

    /// Set the listing page timeout.
    pub fn with_listing_timeout_ms(mut self, ms: u64) -> Self {
        self.listing_timeout_ms = ms;
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn listing_timeout(&self) -> Duration {
        Duration::from_millis(self.listing_timeout_ms)
    }

    pub fn detail_timeout(&self) -> Duration {
        Duration::from_millis(self.detail_timeout_ms)
    }

    /// True when listing page `index` (0-based) is followed by another
    /// page, so the crawler should pause before moving on.
    pub fn has_page_after(&self, index: usize) -> bool {
        index + 1 < self.max_pages
    }

    /// True once `collected` records reach the total limit.
    pub fn reached_total(&self, collected: usize) -> bool {
        self.max_total_items.is_some_and(|max| collected >= max)
    }
}

/// Load a JSON vocabulary override.
pub fn load_vocabulary(path: impl AsRef<Path>) -> CrawlResult<Vocabulary> {
    Ok(Vocabulary::from_path(path)?)
}
