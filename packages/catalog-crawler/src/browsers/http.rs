//! Plain HTTP catalog browser.
//!
//! Fetches pages with reqwest and reads them with the scraper crate. There
//! is no JavaScript rendering, so spec tables that are injected client-side
//! will come back empty; the crawler still emits a record for such pages.
//!
//! Page load deadlines belong to [`crate::crawler::CatalogCrawler`]; the
//! client here sets none of its own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::{debug, warn};

use crate::error::{CrawlError, CrawlResult};
use crate::html;
use crate::traits::{CatalogBrowser, DetailPage, LinkCandidate};

/// Desktop Chrome user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Catalog browser backed by a reqwest client.
pub struct HttpCatalogBrowser {
    client: reqwest::Client,
}

impl HttpCatalogBrowser {
    /// Create a browser with a Korean-locale desktop profile.
    pub fn new() -> CrawlResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Use a custom HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_html(&self, url: &str) -> CrawlResult<String> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            CrawlError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogBrowser for HttpCatalogBrowser {
    async fn open_listing(&self, url: &str) -> CrawlResult<Vec<LinkCandidate>> {
        let body = self.fetch_html(url).await?;
        Ok(html::parse_listing(&body))
    }

    async fn open_detail(&self, url: &str) -> CrawlResult<DetailPage> {
        let body = self.fetch_html(url).await?;
        let page = html::parse_detail(&body);
        debug!(url = %url, rows = page.rows.len(), "detail page parsed");
        Ok(page)
    }
}
