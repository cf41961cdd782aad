//! Crawl orchestration tests against the mock browser.

use std::time::Duration;

use catalog_crawler::testing::{MemorySink, MockBrowserCall, MockCatalogBrowser};
use catalog_crawler::{CatalogCrawler, CrawlConfig, CrawlError, DetailPage, LinkCandidate, RecordSink};
use spec_engine::RawRow;

const CATEGORY: &str = "https://prod.danawa.com/list/?cate=16249091";

fn product_url(id: usize) -> String {
    format!("https://prod.danawa.com/info/?pcode={id}")
}

fn listing(ids: impl IntoIterator<Item = usize>) -> Vec<LinkCandidate> {
    ids.into_iter()
        .map(|id| LinkCandidate::new(product_url(id), format!("상품 {id}")))
        .collect()
}

fn detail(id: usize) -> DetailPage {
    DetailPage::new(
        format!("상품 {id}"),
        vec![
            RawRow::pair("원산지", "국내산"),
            RawRow::new(["형태"], ["죽", "○", "진밥"]),
            RawRow::pair("HACCP인증", "○"),
        ],
    )
}

fn browser_with_products(ids: impl IntoIterator<Item = usize>) -> MockCatalogBrowser {
    ids.into_iter()
        .fold(MockCatalogBrowser::new(), |browser, id| {
            browser.with_detail(product_url(id), detail(id))
        })
}

fn config() -> CrawlConfig {
    CrawlConfig::new(CATEGORY).with_delay_ms(0)
}

#[tokio::test]
async fn test_crawl_multiple_pages() {
    let browser = browser_with_products(1..=4)
        .with_listing(CATEGORY, listing([1, 2]))
        .with_listing(format!("{CATEGORY}&page=2"), listing([3, 4]));

    let crawler = CatalogCrawler::new(browser, config().with_max_pages(2));
    let records = crawler.crawl().await.unwrap();

    let links: Vec<_> = records.iter().map(|r| r.link.clone()).collect();
    assert_eq!(links, (1..=4).map(product_url).collect::<Vec<_>>());
    assert!(records
        .iter()
        .all(|r| r.spec == "원산지:국내산/형태:죽,진밥/인증정보:HACCP인증"));
    assert_eq!(records[2].title, "상품 3");
}

#[tokio::test]
async fn test_max_total_items_stops_across_pages() {
    let browser = browser_with_products(1..=4)
        .with_listing(CATEGORY, listing([1, 2]))
        .with_listing(format!("{CATEGORY}&page=2"), listing([3, 4]));

    let crawler = CatalogCrawler::new(browser, config().with_max_pages(2).with_max_total_items(3));
    let records = crawler.crawl().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(crawler.browser().detail_urls().len(), 3);
}

#[tokio::test]
async fn test_items_per_page_limits_links() {
    let browser = browser_with_products(1..=3).with_listing(CATEGORY, listing([1, 2, 3]));

    let crawler = CatalogCrawler::new(browser, config().with_items_per_page(2));
    let records = crawler.crawl().await.unwrap();

    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_failed_product_is_skipped() {
    let browser = browser_with_products([1, 3])
        .with_listing(CATEGORY, listing([1, 2, 3]))
        .fail_url(product_url(2));

    let crawler = CatalogCrawler::new(browser, config());
    let records = crawler.crawl().await.unwrap();

    let links: Vec<_> = records.iter().map(|r| r.link.clone()).collect();
    assert_eq!(links, vec![product_url(1), product_url(3)]);
    assert_eq!(crawler.browser().detail_urls().len(), 3);
}

#[tokio::test]
async fn test_slow_product_times_out_and_is_skipped() {
    let browser = browser_with_products([1, 2])
        .with_listing(CATEGORY, listing([1, 2]))
        .with_latency(product_url(1), Duration::from_millis(500));

    let crawler = CatalogCrawler::new(browser, config().with_detail_timeout_ms(50));
    let records = crawler.crawl().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].link, product_url(2));
}

#[tokio::test]
async fn test_slow_first_listing_times_out() {
    let browser = browser_with_products([1])
        .with_listing(CATEGORY, listing([1]))
        .with_latency(CATEGORY, Duration::from_millis(500));

    let crawler = CatalogCrawler::new(browser, config().with_listing_timeout_ms(50));
    let result = crawler.crawl().await;

    assert!(matches!(result, Err(CrawlError::Timeout { url }) if url == CATEGORY));
    assert!(crawler.browser().detail_urls().is_empty());
}

#[tokio::test]
async fn test_first_listing_failure_is_an_error() {
    let browser = MockCatalogBrowser::new().fail_url(CATEGORY);

    let crawler = CatalogCrawler::new(browser, config().with_max_pages(3));
    let result = crawler.crawl().await;

    assert!(matches!(result, Err(CrawlError::Browser(_))));
}

#[tokio::test]
async fn test_later_listing_failure_ends_crawl() {
    let browser = browser_with_products([1]).with_listing(CATEGORY, listing([1]));

    let crawler = CatalogCrawler::new(browser, config().with_max_pages(3));
    let records = crawler.crawl().await.unwrap();

    assert_eq!(records.len(), 1);
    let listings: Vec<_> = crawler
        .browser()
        .calls()
        .into_iter()
        .filter(|c| matches!(c, MockBrowserCall::Listing { .. }))
        .map(|c| c.url().to_string())
        .collect();
    assert_eq!(listings, vec![CATEGORY.to_string(), format!("{CATEGORY}&page=2")]);
}

#[tokio::test]
async fn test_empty_listing_stops_pagination() {
    let browser = MockCatalogBrowser::new()
        .with_listing(
            CATEGORY,
            vec![
                LinkCandidate::new("javascript:void(0)", "상품"),
                LinkCandidate::new(product_url(9), "가격비교"),
            ],
        )
        .with_listing(format!("{CATEGORY}&page=2"), listing([1]));

    let crawler = CatalogCrawler::new(browser, config().with_max_pages(2));
    let records = crawler.crawl().await.unwrap();

    assert!(records.is_empty());
    assert_eq!(crawler.browser().calls().len(), 1);
}

#[tokio::test]
async fn test_page_without_spec_rows_still_yields_record() {
    let browser = MockCatalogBrowser::new()
        .with_listing(CATEGORY, listing([1]))
        .with_detail(product_url(1), DetailPage::new("빈 상품", vec![]));

    let crawler = CatalogCrawler::new(browser, config());
    let records = crawler.crawl().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].spec, "");
}

#[tokio::test]
async fn test_records_flow_into_sink() {
    let browser = browser_with_products([1, 2]).with_listing(CATEGORY, listing([1, 2]));

    let crawler = CatalogCrawler::new(browser, config());
    let records = crawler.crawl().await.unwrap();

    let mut sink = MemorySink::new();
    sink.write_all(&records).unwrap();

    assert!(sink.finished);
    assert_eq!(sink.records, records);
}
