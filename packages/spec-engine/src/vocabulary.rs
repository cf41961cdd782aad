//! Lookup tables and marker strings used by the collector and normalizer.
//!
//! [`Vocabulary::default`] is the built-in table set for the catalog's
//! Korean product pages. A shared instance backs the free functions in
//! this crate; callers that need different tables build their own
//! vocabulary (or load one from JSON) and pass it explicitly.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::VocabularyResult;

lazy_static! {
    static ref BUILTIN: Vocabulary = Vocabulary::default();
}

/// The built-in vocabulary, shared process-wide.
pub fn builtin() -> &'static Vocabulary {
    &BUILTIN
}

/// Labels of the trailing bucket segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLabels {
    /// General certification bucket
    pub certification: String,

    /// Certification detail bucket (HACCP labels, certificate numbers)
    pub certification_info: String,

    /// Registration date
    pub registration_date: String,
}

impl Default for OutputLabels {
    fn default() -> Self {
        Self {
            certification: "인증".to_string(),
            certification_info: "인증정보".to_string(),
            registration_date: "등록년월일".to_string(),
        }
    }
}

/// All tables and markers consulted during collection and normalization.
///
/// Missing fields in a serialized vocabulary fall back to the built-in
/// values, so an override file only needs the tables it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Glyphs meaning "applicable" with no further detail.
    pub checkmarks: Vec<String>,

    /// Values are cut at the first occurrence of any of these.
    pub truncation_markers: Vec<String>,

    /// Raw label to simplified label, applied before anything else.
    pub key_simplification: IndexMap<String, String>,

    /// Checkbox-style label to category name.
    pub categories: IndexMap<String, String>,

    /// Additive labels that get rewritten to [`Self::additive_label`].
    pub additive_labels: Vec<String>,

    /// Values that keep an additive label as-is.
    pub additive_exempt_values: Vec<String>,

    /// Replacement label for additive entries with a concrete value.
    pub additive_label: String,

    /// Boilerplate values carrying no information.
    pub meaningless_phrases: Vec<String>,

    /// Marketing phrases removed from values, in order.
    pub website_phrases: Vec<String>,

    /// A label containing any of these carries the registration date.
    pub registration_markers: Vec<String>,

    /// Substring marking a certification label.
    pub certification_marker: String,

    /// Exact label of the certification-info row.
    pub certification_info_label: String,

    /// Substring marking a certificate-number label.
    pub certificate_number_marker: String,

    /// Substring marking a HACCP-style certification label.
    pub haccp_marker: String,

    /// Exact HACCP certification label.
    pub haccp_label: String,

    /// Labels of the trailing bucket segments.
    pub output: OutputLabels,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            checkmarks: strings(&["○", "O", "o", "●"]),
            truncation_markers: strings(&["인증번호 확인", "바로가기"]),
            key_simplification: table(&[("재료 종류", "재료"), ("반찬종류", "종류")]),
            categories: table(&[
                ("국내산", "원산지"),
                ("레토르트이유식", "품목"),
                ("파우치", "포장용기"),
                ("플라스틱병", "포장용기"),
                ("6개월~", "최소연령"),
                ("7개월~", "최소연령"),
                ("9개월~", "최소연령"),
                ("10개월~", "최소연령"),
                ("12개월~", "최소연령"),
                ("13개월~", "최소연령"),
                ("15개월~", "최소연령"),
                ("4개월~", "최소연령"),
                ("상온", "보관방식"),
                ("냉장", "보관방식"),
                ("냉동", "보관방식"),
                ("양념", "품목"),
                ("반찬", "품목"),
                ("아기국", "품목"),
                ("수제이유식", "품목"),
                ("미음", "형태"),
                ("죽", "형태"),
                ("진밥", "형태"),
                ("아기밥", "형태"),
                ("액상", "형태"),
                ("국물조림용", "용도"),
                ("비빔무침용", "용도"),
                ("무항생제인증", "인증"),
            ]),
            additive_labels: strings(&[
                "합성보존료",
                "합성착색료",
                "합성감미료",
                "보존료",
                "착색료",
                "감미료",
            ]),
            additive_exempt_values: strings(&["무첨가", "없음"]),
            additive_label: "無첨가".to_string(),
            meaningless_phrases: strings(&[
                "상세설명 / 판매 사이트 문의",
                "상세설명",
                "판매 사이트 문의",
                "인증번호 확인",
            ]),
            website_phrases: strings(&["제조사 웹사이트", "웹사이트"]),
            registration_markers: strings(&["등록년월", "등록일"]),
            certification_marker: "인증".to_string(),
            certification_info_label: "인증정보".to_string(),
            certificate_number_marker: "인증번호".to_string(),
            haccp_marker: "HACCP".to_string(),
            haccp_label: "HACCP인증".to_string(),
            output: OutputLabels::default(),
        }
    }
}

impl Vocabulary {
    /// Create a vocabulary with the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a vocabulary from JSON. Absent fields keep built-in values.
    pub fn from_json(json: &str) -> VocabularyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a vocabulary from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> VocabularyResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Map an additional checkbox-style label to a category.
    pub fn with_category(mut self, label: impl Into<String>, category: impl Into<String>) -> Self {
        self.categories.insert(label.into(), category.into());
        self
    }

    /// Add a label simplification.
    pub fn with_key_simplification(
        mut self,
        raw: impl Into<String>,
        simplified: impl Into<String>,
    ) -> Self {
        self.key_simplification.insert(raw.into(), simplified.into());
        self
    }

    /// Add a boilerplate phrase to the meaningless set.
    pub fn with_meaningless_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.meaningless_phrases.push(phrase.into());
        self
    }

    pub fn is_checkmark(&self, value: &str) -> bool {
        self.checkmarks.iter().any(|c| c == value)
    }

    /// Simplified form of `label`, or `label` itself when not in the table.
    pub fn simplify_key<'a>(&'a self, label: &'a str) -> &'a str {
        self.key_simplification
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }

    pub fn category_of(&self, label: &str) -> Option<&str> {
        self.categories.get(label).map(String::as_str)
    }

    pub fn is_additive_label(&self, label: &str) -> bool {
        self.additive_labels.iter().any(|l| l == label)
    }

    /// True when an additive value should leave the label untouched.
    pub fn is_additive_exempt(&self, value: &str) -> bool {
        self.is_checkmark(value) || self.additive_exempt_values.iter().any(|v| v == value)
    }

    /// Exact match or substring containment against the boilerplate set.
    pub fn is_meaningless(&self, value: &str) -> bool {
        self.meaningless_phrases
            .iter()
            .any(|p| value == p || value.contains(p.as_str()))
    }

    pub fn is_registration_label(&self, label: &str) -> bool {
        self.registration_markers
            .iter()
            .any(|m| label.contains(m.as_str()))
    }

    pub fn is_certification_label(&self, label: &str) -> bool {
        label.contains(self.certification_marker.as_str())
    }

    pub fn is_haccp_label(&self, label: &str) -> bool {
        label.contains(self.haccp_marker.as_str()) || label == self.haccp_label
    }

    pub fn is_certificate_number_label(&self, label: &str) -> bool {
        label.contains(self.certificate_number_marker.as_str())
    }
}
