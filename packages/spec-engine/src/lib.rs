//! Product Specification Normalization
//!
//! Reduces a product page's specification table into one compact,
//! deterministic spec string such as
//! `형태:죽,미음/원산지:국내산/인증:무농약인증/등록년월일:2023.05`.
//!
//! # Pipeline
//!
//! ```text
//! RawRow* ──Collector──▶ SpecMap ──Normalizer──▶ Segment* ──serialize──▶ String
//! ```
//!
//! Everything here is synchronous and free of I/O. Each page gets its own
//! [`SpecMap`] and normalization pass, so pages can be processed on any
//! number of threads without coordination.
//!
//! # Usage
//!
//! ```rust
//! use spec_engine::{ProductRecord, RawRow};
//!
//! let rows = vec![
//!     RawRow::pair("재료", "쌀"),
//!     RawRow::pair("HACCP인증", "○"),
//!     RawRow::pair("등록년월", "2023.05"),
//! ];
//! let record = ProductRecord::from_rows("아기밥", "https://example.com/p/1", rows);
//! assert_eq!(record.spec, "재료:쌀/인증정보:HACCP인증/등록년월일:2023.05");
//! ```
//!
//! # Modules
//!
//! - [`collector`] - Rows → label/value map with merge-on-insert
//! - [`normalizer`] - Cleanup, reclassification, certification buckets
//! - [`serializer`] - Segment list → spec string
//! - [`vocabulary`] - Lookup tables and markers
//! - [`types`] - Rows, spec map, segments, product records

pub mod clean;
pub mod collector;
pub mod error;
pub mod normalizer;
pub mod serializer;
pub mod types;
pub mod vocabulary;

pub use collector::{collect_specs, Collector};
pub use error::{RowError, VocabularyError};
pub use normalizer::{normalize_specs, Normalizer};
pub use serializer::serialize;
pub use types::{
    record::ProductRecord,
    row::RawRow,
    segment::Segment,
    spec_map::{MergeOutcome, SpecMap},
};
pub use vocabulary::{OutputLabels, Vocabulary};

/// Collect, normalize, and serialize one page's rows with the built-in vocabulary.
pub fn normalize_rows(rows: impl IntoIterator<Item = RawRow>) -> String {
    serialize(&normalize_specs(&collect_specs(rows)))
}
