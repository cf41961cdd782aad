//! Typed errors for the catalog crawler.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the binary wraps
//! these with context.

use thiserror::Error;

/// Errors that can occur while crawling a catalog.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the catalog
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Page did not load in time
    #[error("timeout loading: {url}")]
    Timeout { url: String },

    /// Invalid URL format
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Browser collaborator failed in some other way
    #[error("browser error: {0}")]
    Browser(String),

    /// Writing records failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Vocabulary override could not be loaded
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] spec_engine::VocabularyError),
}

/// Result type alias for crawl operations.
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;
