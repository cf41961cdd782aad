//! Product link discovery and listing pagination.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::trace;
use url::Url;

use crate::traits::LinkCandidate;

/// Catalog host marker; absolute links must contain it.
pub const CATALOG_HOST_MARKER: &str = "danawa";

/// Anchor texts containing any of these point at price/option widgets,
/// not at products.
pub const NON_PRODUCT_TEXTS: [&str; 4] = ["가격", "비교", "옵션", "구성"];

lazy_static! {
    static ref PAGE_PARAM: Regex = Regex::new(r"page=\d+").unwrap();
}

/// Filter anchor candidates down to product detail links.
///
/// Keeps candidate order, deduplicates by raw `href`, and stops once
/// `max_per_page` links are collected. Relative links are resolved against
/// `base` when it parses as a URL.
pub fn filter_product_links(
    base: &str,
    candidates: &[LinkCandidate],
    max_per_page: Option<usize>,
) -> Vec<String> {
    let base = Url::parse(base).ok();
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for candidate in candidates {
        let href = candidate.href.as_str();

        if href.is_empty() || href.starts_with("javascript:") {
            continue;
        }
        if !href.contains(CATALOG_HOST_MARKER) && !href.starts_with('/') {
            continue;
        }
        if seen.contains(href) {
            continue;
        }
        let text = candidate.text.to_lowercase();
        if NON_PRODUCT_TEXTS.iter().any(|t| text.contains(t)) {
            trace!(href = %href, text = %candidate.text, "skipping non-product anchor");
            continue;
        }

        seen.insert(href);
        links.push(resolve(base.as_ref(), href));

        if max_per_page.is_some_and(|max| links.len() >= max) {
            break;
        }
    }

    links
}

fn resolve(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) if href.starts_with('/') => base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        _ => href.to_string(),
    }
}

/// URL of listing page `page` (1-based) for a category URL.
///
/// Every existing `page=N` is rewritten.
pub fn page_url(url: &str, page: usize) -> String {
    if url.contains("page=") {
        return PAGE_PARAM
            .replace_all(url, format!("page={page}").as_str())
            .into_owned();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://prod.danawa.com/list/?cate=16249091";

    fn candidate(href: &str, text: &str) -> LinkCandidate {
        LinkCandidate::new(href, text)
    }

    #[test]
    fn test_filters_and_dedups() {
        let candidates = vec![
            candidate("https://prod.danawa.com/info/?pcode=1", "상품 1"),
            candidate("javascript:void(0)", "상품 2"),
            candidate("https://ad.example.com/click", "광고"),
            candidate("https://prod.danawa.com/info/?pcode=1", "상품 1"),
            candidate("https://prod.danawa.com/info/?pcode=3", "가격비교"),
            candidate("https://prod.danawa.com/info/?pcode=4", "옵션 보기"),
            candidate("/info/?pcode=5", "상품 5"),
            candidate("", "빈 링크"),
        ];

        let links = filter_product_links(BASE, &candidates, None);
        assert_eq!(
            links,
            vec![
                "https://prod.danawa.com/info/?pcode=1",
                "https://prod.danawa.com/info/?pcode=5",
            ]
        );
    }

    #[test]
    fn test_max_per_page() {
        let candidates: Vec<_> = (1..=5)
            .map(|i| candidate(&format!("https://prod.danawa.com/info/?pcode={i}"), "상품"))
            .collect();
        assert_eq!(filter_product_links(BASE, &candidates, Some(2)).len(), 2);
        assert_eq!(filter_product_links(BASE, &candidates, None).len(), 5);
    }

    #[test]
    fn test_relative_link_without_base_kept_raw() {
        let candidates = vec![candidate("/info/?pcode=5", "상품")];
        assert_eq!(
            filter_product_links("not a url", &candidates, None),
            vec!["/info/?pcode=5"]
        );
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("https://prod.danawa.com/list/?cate=1&page=1", 3),
            "https://prod.danawa.com/list/?cate=1&page=3"
        );
        assert_eq!(
            page_url("https://prod.danawa.com/list/?cate=1", 2),
            "https://prod.danawa.com/list/?cate=1&page=2"
        );
        assert_eq!(
            page_url("https://prod.danawa.com/list", 2),
            "https://prod.danawa.com/list?page=2"
        );
    }

    #[test]
    fn test_page_url_rewrites_every_page_param() {
        assert_eq!(
            page_url("https://prod.danawa.com/list/?page=1&cate=1&listpage=1", 4),
            "https://prod.danawa.com/list/?page=4&cate=1&listpage=4"
        );
    }
}
