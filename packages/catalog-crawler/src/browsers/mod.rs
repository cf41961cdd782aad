//! Catalog browser implementations.
//!
//! - `HttpCatalogBrowser` - reqwest + scraper, static HTML only
//! - `MockCatalogBrowser` (in [`crate::testing`]) - canned pages for tests

mod http;

pub use http::{HttpCatalogBrowser, DEFAULT_USER_AGENT};

// Re-export from traits for convenience
pub use crate::traits::{CatalogBrowser, DetailPage, LinkCandidate};
