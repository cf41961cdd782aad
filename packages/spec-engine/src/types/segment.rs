use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a segment's label and value.
pub const LABEL_SEPARATOR: char = ':';

/// One `label:value` unit of a normalized spec string.
///
/// `value` may itself be a comma-joined list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub value: String,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Append `token` to the value's comma-joined list.
    pub fn push_token(&mut self, token: &str) {
        self.value.push(',');
        self.value.push_str(token);
    }

    /// The value's comma-separated tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.value.split(',')
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.label, LABEL_SEPARATOR, self.value)
    }
}
