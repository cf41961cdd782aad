//! Category crawl orchestration.
//!
//! Walks listing pages, discovers product links, loads each product's
//! detail page, and turns its table rows into a [`ProductRecord`].

use spec_engine::{ProductRecord, Vocabulary};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::CrawlConfig;
use crate::delay::human_delay;
use crate::error::{CrawlError, CrawlResult};
use crate::links::{filter_product_links, page_url};
use crate::traits::{CatalogBrowser, LinkCandidate};

/// Crawls one catalog category through a [`CatalogBrowser`].
pub struct CatalogCrawler<B: CatalogBrowser> {
    browser: B,
    config: CrawlConfig,
    vocabulary: Vocabulary,
}

impl<B: CatalogBrowser> CatalogCrawler<B> {
    /// Create a crawler using the built-in vocabulary.
    pub fn new(browser: B, config: CrawlConfig) -> Self {
        Self {
            browser,
            config,
            vocabulary: Vocabulary::default(),
        }
    }

    /// Use a custom vocabulary for spec normalization.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Run the crawl and return records in visit order.
    ///
    /// A category URL that does not parse is rejected before any request.
    /// A failing first listing page is an error. A failing later page ends
    /// the crawl with what was collected so far. Failed product pages are
    /// logged and skipped.
    pub async fn crawl(&self) -> CrawlResult<Vec<ProductRecord>> {
        let category_url = &self.config.category_url;
        Url::parse(category_url).map_err(|source| CrawlError::InvalidUrl {
            url: category_url.clone(),
            source,
        })?;

        let mut records = Vec::new();

        info!(
            category_url = %self.config.category_url,
            max_pages = self.config.max_pages,
            "Starting category crawl"
        );

        'pages: for index in 0..self.config.max_pages {
            let url = if index == 0 {
                self.config.category_url.clone()
            } else {
                page_url(&self.config.category_url, index + 1)
            };

            let candidates = match self.open_listing(&url).await {
                Ok(candidates) => candidates,
                Err(e) if index == 0 => return Err(e),
                Err(e) => {
                    warn!(url = %url, error = %e, "Listing page failed, ending crawl");
                    break;
                }
            };

            let links = filter_product_links(&url, &candidates, self.config.items_per_page);
            info!(page = index + 1, links = links.len(), "Listing page loaded");
            if links.is_empty() {
                break;
            }

            for link in &links {
                if self.config.reached_total(records.len()) {
                    info!(collected = records.len(), "Reached total item limit");
                    break 'pages;
                }

                match self.open_record(link).await {
                    Ok(record) => {
                        debug!(url = %link, spec = %record.spec, "Product collected");
                        records.push(record);
                    }
                    Err(e) => warn!(url = %link, error = %e, "Product page failed, skipping"),
                }

                human_delay(self.config.base_delay_ms).await;
            }

            if self.config.has_page_after(index) {
                human_delay(self.config.base_delay_ms).await;
            }
        }

        info!(records = records.len(), "Category crawl complete");
        Ok(records)
    }

    async fn open_listing(&self, url: &str) -> CrawlResult<Vec<LinkCandidate>> {
        with_timeout(url, self.config.listing_timeout(), self.browser.open_listing(url)).await
    }

    async fn open_record(&self, url: &str) -> CrawlResult<ProductRecord> {
        let page = with_timeout(url, self.config.detail_timeout(), self.browser.open_detail(url))
            .await?;
        if page.failed_rows() > 0 {
            debug!(url = %url, failed = page.failed_rows(), "detail page had unreadable rows");
        }
        Ok(ProductRecord::from_row_results_with(
            &self.vocabulary,
            page.title,
            url,
            page.rows,
        ))
    }
}

/// The single deadline for a page load; browsers do not enforce their own.
async fn with_timeout<T>(
    url: &str,
    limit: Duration,
    future: impl Future<Output = CrawlResult<T>>,
) -> CrawlResult<T> {
    tokio::time::timeout(limit, future)
        .await
        .map_err(|_| CrawlError::Timeout {
            url: url.to_string(),
        })?
}
