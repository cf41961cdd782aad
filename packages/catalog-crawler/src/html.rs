//! HTML readers for listing and detail pages.
//!
//! Detail pages are read as a flat sequence of table rows; the spec engine
//! decides what the rows mean. Listing pages yield anchor candidates that
//! [`crate::links`] filters.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use spec_engine::{RawRow, RowError};

use crate::traits::{DetailPage, LinkCandidate};

/// Product anchor selectors, tried in order. All matching selectors contribute.
pub const PRODUCT_LINK_SELECTORS: [&str; 4] = [
    "li.prod_item div.prod_info a.prod_link",
    "li.prod_item .prod_name a",
    "div.prod_info a.prod_link",
    "a[href*='/product/']",
];

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref HEADER_CELL: Selector = Selector::parse("th").unwrap();
    static ref DATA_CELL: Selector = Selector::parse("td").unwrap();
    static ref PRODUCT_LINKS: Vec<Selector> = PRODUCT_LINK_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect();
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Document title, empty when missing.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Every `tr` in document order with its `th` and `td` texts.
///
/// Only cells belonging directly to the row are read, so a table nested in
/// a cell yields its own rows instead of leaking into the outer one. A row
/// without any cell of its own is reported as [`RowError::MissingCells`].
pub fn extract_rows(document: &Html) -> Vec<Result<RawRow, RowError>> {
    document
        .select(&ROW)
        .enumerate()
        .map(|(index, tr)| {
            let own_cells = |selector: &Selector| -> Vec<String> {
                tr.select(selector)
                    .filter(|cell| is_own_cell(*cell, tr))
                    .map(element_text)
                    .collect()
            };
            let headers = own_cells(&HEADER_CELL);
            let data = own_cells(&DATA_CELL);
            if headers.is_empty() && data.is_empty() {
                return Err(RowError::MissingCells { index });
            }
            Ok(RawRow::new(headers, data))
        })
        .collect()
}

fn is_own_cell(cell: ElementRef<'_>, row: ElementRef<'_>) -> bool {
    cell.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")
        .is_some_and(|owner| owner.id() == row.id())
}

/// Product anchor candidates from a listing page.
pub fn extract_link_candidates(document: &Html) -> Vec<LinkCandidate> {
    let mut candidates = Vec::new();
    for selector in PRODUCT_LINKS.iter() {
        for anchor in document.select(selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            candidates.push(LinkCandidate::new(href.trim(), element_text(anchor)));
        }
    }
    candidates
}

/// Parse a detail page document.
pub fn parse_detail(html: &str) -> DetailPage {
    let document = Html::parse_document(html);
    DetailPage::from_results(extract_title(&document), extract_rows(&document))
}

/// Parse a listing page document.
pub fn parse_listing(html: &str) -> Vec<LinkCandidate> {
    let document = Html::parse_document(html);
    extract_link_candidates(&document)
}
