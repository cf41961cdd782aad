//! The per-product output record.

use serde::{Deserialize, Serialize};

use crate::collector::Collector;
use crate::error::RowError;
use crate::normalizer::Normalizer;
use crate::serializer::serialize;
use crate::types::row::RawRow;
use crate::vocabulary::{self, Vocabulary};

/// Title and link passed through untouched, plus the normalized spec string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub link: String,
    pub spec: String,
}

impl ProductRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            spec: spec.into(),
        }
    }

    /// Collect, normalize, and serialize a page's rows with the built-in vocabulary.
    pub fn from_rows(
        title: impl Into<String>,
        link: impl Into<String>,
        rows: impl IntoIterator<Item = RawRow>,
    ) -> Self {
        Self::from_rows_with(vocabulary::builtin(), title, link, rows)
    }

    /// Same as [`Self::from_rows`] with an explicit vocabulary.
    pub fn from_rows_with(
        vocabulary: &Vocabulary,
        title: impl Into<String>,
        link: impl Into<String>,
        rows: impl IntoIterator<Item = RawRow>,
    ) -> Self {
        let specs = Collector::new(vocabulary).collect(rows);
        let segments = Normalizer::new(vocabulary).normalize(&specs);
        Self::new(title, link, serialize(&segments))
    }

    /// Like [`Self::from_rows_with`] for a reader that reports bad rows.
    /// Failed rows are skipped.
    pub fn from_row_results_with(
        vocabulary: &Vocabulary,
        title: impl Into<String>,
        link: impl Into<String>,
        rows: impl IntoIterator<Item = Result<RawRow, RowError>>,
    ) -> Self {
        let specs = Collector::new(vocabulary).collect_lossy(rows);
        let segments = Normalizer::new(vocabulary).normalize(&specs);
        Self::new(title, link, serialize(&segments))
    }
}
