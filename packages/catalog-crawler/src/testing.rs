//! Testing utilities including mock implementations.
//!
//! These let crawl logic be tested without network access or a real
//! catalog.

use async_trait::async_trait;
use spec_engine::ProductRecord;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{CrawlError, CrawlResult};
use crate::traits::{CatalogBrowser, DetailPage, LinkCandidate, RecordSink};

/// A mock browser serving canned listing and detail pages.
///
/// Unknown URLs fail with [`CrawlError::Browser`].
#[derive(Default, Clone)]
pub struct MockCatalogBrowser {
    /// Listing candidates by URL
    listings: Arc<RwLock<HashMap<String, Vec<LinkCandidate>>>>,

    /// Detail pages by URL
    details: Arc<RwLock<HashMap<String, DetailPage>>>,

    /// URLs that should fail
    fail_urls: Arc<RwLock<HashSet<String>>>,

    /// Artificial latency by URL
    delays: Arc<RwLock<HashMap<String, Duration>>>,

    /// Call tracking
    calls: Arc<RwLock<Vec<MockBrowserCall>>>,
}

/// Record of a call made to the mock browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBrowserCall {
    Listing { url: String },
    Detail { url: String },
}

impl MockBrowserCall {
    pub fn url(&self) -> &str {
        match self {
            Self::Listing { url } | Self::Detail { url } => url,
        }
    }
}

impl MockCatalogBrowser {
    /// Create an empty mock browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `candidates` for a listing URL.
    pub fn with_listing(self, url: impl Into<String>, candidates: Vec<LinkCandidate>) -> Self {
        self.listings.write().unwrap().insert(url.into(), candidates);
        self
    }

    /// Serve `page` for a detail URL.
    pub fn with_detail(self, url: impl Into<String>, page: DetailPage) -> Self {
        self.details.write().unwrap().insert(url.into(), page);
        self
    }

    /// Mark a URL as failing.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().insert(url.into());
        self
    }

    /// Delay responses for a URL.
    pub fn with_latency(self, url: impl Into<String>, latency: Duration) -> Self {
        self.delays.write().unwrap().insert(url.into(), latency);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockBrowserCall> {
        self.calls.read().unwrap().clone()
    }

    /// URLs of detail pages requested, in order.
    pub fn detail_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockBrowserCall::Detail { url } => Some(url),
                MockBrowserCall::Listing { .. } => None,
            })
            .collect()
    }

    async fn before_response(&self, url: &str) -> CrawlResult<()> {
        let latency = self.delays.read().unwrap().get(url).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if self.fail_urls.read().unwrap().contains(url) {
            return Err(CrawlError::Browser(format!("mock failure: {url}")));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogBrowser for MockCatalogBrowser {
    async fn open_listing(&self, url: &str) -> CrawlResult<Vec<LinkCandidate>> {
        self.calls.write().unwrap().push(MockBrowserCall::Listing {
            url: url.to_string(),
        });
        self.before_response(url).await?;

        self.listings
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::Browser(format!("no listing for {url}")))
    }

    async fn open_detail(&self, url: &str) -> CrawlResult<DetailPage> {
        self.calls.write().unwrap().push(MockBrowserCall::Detail {
            url: url.to_string(),
        });
        self.before_response(url).await?;

        self.details
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::Browser(format!("no detail page for {url}")))
    }
}

/// A sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<ProductRecord>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, record: &ProductRecord) -> CrawlResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> CrawlResult<()> {
        self.finished = true;
        Ok(())
    }
}
