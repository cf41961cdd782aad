//! Spec collection: table rows → [`SpecMap`].
//!
//! Each row is looked at two ways. A row with one header and several data
//! cells contributes every informative data cell under that header. Every
//! row additionally pairs headers with data cells by index. Both passes feed
//! the same merge-on-insert map, so the overlap is deduplicated there.

use tracing::{debug, trace};

use crate::clean;
use crate::error::RowError;
use crate::types::row::RawRow;
use crate::types::spec_map::{MergeOutcome, SpecMap};
use crate::vocabulary::{self, Vocabulary};

/// Builds one [`SpecMap`] per product page.
#[derive(Debug, Clone, Copy)]
pub struct Collector<'v> {
    vocabulary: &'v Vocabulary,
}

impl Default for Collector<'static> {
    fn default() -> Self {
        Self::new(vocabulary::builtin())
    }
}

impl<'v> Collector<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Collect label/value pairs from rows in document order.
    pub fn collect(&self, rows: impl IntoIterator<Item = RawRow>) -> SpecMap {
        let mut specs = SpecMap::new();
        for row in rows {
            self.collect_row(&mut specs, &row);
        }
        specs
    }

    /// Like [`Self::collect`], skipping rows the reader failed on.
    pub fn collect_lossy(
        &self,
        rows: impl IntoIterator<Item = Result<RawRow, RowError>>,
    ) -> SpecMap {
        let mut specs = SpecMap::new();
        for row in rows {
            match row {
                Ok(row) => self.collect_row(&mut specs, &row),
                Err(e) => debug!(error = %e, "skipping unreadable row"),
            }
        }
        specs
    }

    fn collect_row(&self, specs: &mut SpecMap, row: &RawRow) {
        if row.is_single_header_multi_data() {
            let label = row.headers[0].as_str();
            for cell in &row.data {
                let value = cell.trim();
                if value.is_empty() || self.vocabulary.is_checkmark(value) {
                    continue;
                }
                insert(specs, label, value);
            }
        }

        for (label, raw) in row.pairs() {
            let label = label.trim();
            if label.is_empty() || raw.trim().is_empty() {
                continue;
            }
            let value = self.clean_value(raw);
            if value.is_empty() {
                continue;
            }
            insert(specs, label, &value);
        }
    }

    /// Cut at truncation markers, drop `(...)` annotations, trim.
    pub fn clean_value(&self, raw: &str) -> String {
        let value = clean::truncate_at_markers(raw.trim(), &self.vocabulary.truncation_markers);
        clean::strip_annotations(value.trim()).trim().to_string()
    }
}

fn insert(specs: &mut SpecMap, label: &str, value: &str) {
    let outcome = specs.merge(label, value);
    if outcome == MergeOutcome::SelfMapped {
        trace!(label = %label, "value equals label, not stored");
    }
}

/// Collect with the built-in vocabulary.
pub fn collect_specs(rows: impl IntoIterator<Item = RawRow>) -> SpecMap {
    Collector::default().collect(rows)
}
