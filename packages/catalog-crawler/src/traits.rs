//! Collaborator abstractions: the browser that loads pages and the sink
//! that persists records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spec_engine::{ProductRecord, RawRow, RowError};

use crate::error::CrawlResult;

/// An anchor found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    /// Raw `href` attribute (may be relative)
    pub href: String,

    /// Visible anchor text
    pub text: String,
}

impl LinkCandidate {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// What the crawler needs from a product detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPage {
    /// Document title
    pub title: String,

    /// Every table row on the page, in document order. Rows the reader
    /// could not use are kept as errors so the position is not lost.
    pub rows: Vec<Result<RawRow, RowError>>,
}

impl DetailPage {
    /// A page whose rows were all read successfully.
    pub fn new(title: impl Into<String>, rows: impl IntoIterator<Item = RawRow>) -> Self {
        Self::from_results(title, rows.into_iter().map(Ok).collect())
    }

    pub fn from_results(title: impl Into<String>, rows: Vec<Result<RawRow, RowError>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    /// Rows that failed to read.
    pub fn failed_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_err()).count()
    }
}

/// Loads catalog pages.
///
/// Implementations own navigation, rendering, and any browser lifecycle.
#[async_trait]
pub trait CatalogBrowser: Send + Sync {
    /// Load a listing page and return its product anchor candidates.
    async fn open_listing(&self, url: &str) -> CrawlResult<Vec<LinkCandidate>>;

    /// Load a product detail page.
    async fn open_detail(&self, url: &str) -> CrawlResult<DetailPage>;
}

/// Persists product records.
pub trait RecordSink {
    fn write_record(&mut self, record: &ProductRecord) -> CrawlResult<()>;

    /// Flush buffered output.
    fn finish(&mut self) -> CrawlResult<()>;

    /// Write every record, then finish.
    fn write_all(&mut self, records: &[ProductRecord]) -> CrawlResult<()> {
        for record in records {
            self.write_record(record)?;
        }
        self.finish()
    }
}
