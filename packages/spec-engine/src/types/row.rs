//! Raw table rows as read from a product page.

use serde::{Deserialize, Serialize};

/// One table row: header cell texts and data cell texts, in document order.
///
/// Cell texts are trimmed on construction. Empty cells are kept so that
/// header/data indices stay aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Texts of the row's `th` cells
    #[serde(default)]
    pub headers: Vec<String>,

    /// Texts of the row's `td` cells
    #[serde(default)]
    pub data: Vec<String>,
}

impl RawRow {
    /// Create a row, trimming every cell.
    pub fn new(
        headers: impl IntoIterator<Item = impl AsRef<str>>,
        data: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            headers: headers
                .into_iter()
                .map(|h| h.as_ref().trim().to_string())
                .collect(),
            data: data
                .into_iter()
                .map(|d| d.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// The common one-header, one-data row.
    pub fn pair(label: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self::new([label], [value])
    }

    /// Exactly one header spanning several data cells.
    pub fn is_single_header_multi_data(&self) -> bool {
        self.headers.len() == 1 && self.data.len() > 1
    }

    /// Header/data cells paired by index, up to the shorter side.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .zip(self.data.iter())
            .map(|(h, d)| (h.as_str(), d.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.data.is_empty()
    }
}
