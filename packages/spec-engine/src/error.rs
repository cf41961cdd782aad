//! Typed errors for the spec engine.
//!
//! The engine itself is total: cleaning and normalization never fail.
//! Errors only exist at the edges, where rows arrive from an external
//! table reader and where a vocabulary is loaded from disk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A table row the external reader could not turn into a [`RawRow`].
///
/// The collector skips these rows instead of failing the page.
///
/// [`RawRow`]: crate::types::row::RawRow
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowError {
    /// Cell text could not be read (detached node, script error, ...)
    #[error("row {index} unreadable: {reason}")]
    Unreadable { index: usize, reason: String },

    /// The row had no header or data cells at all
    #[error("row {index} has no cells")]
    MissingCells { index: usize },
}

/// Errors raised while loading a [`Vocabulary`] override.
///
/// [`Vocabulary`]: crate::vocabulary::Vocabulary
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read
    #[error("failed to read vocabulary: {0}")]
    Io(#[from] std::io::Error),

    /// The vocabulary JSON was malformed
    #[error("vocabulary JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type alias for vocabulary loading.
pub type VocabularyResult<T> = std::result::Result<T, VocabularyError>;
