//! Total text-cleaning primitives shared by the collector and normalizer.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "(...)" together with any whitespace before it
    static ref ANNOTATION: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
    // "(..." running to the end of the string
    static ref TRAILING_OPEN: Regex = Regex::new(r"\s*\([^)]*$").unwrap();
    // "...)" at the start of the string with no opening paren
    static ref LEADING_CLOSE: Regex = Regex::new(r"^[^()]*\)\s*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Cut `value` at the earliest occurrence of any marker.
pub fn truncate_at_markers<'a, S: AsRef<str>>(value: &'a str, markers: &[S]) -> &'a str {
    let cut = markers
        .iter()
        .filter_map(|m| {
            let m = m.as_ref();
            if m.is_empty() {
                None
            } else {
                value.find(m)
            }
        })
        .min();

    match cut {
        Some(idx) => &value[..idx],
        None => value,
    }
}

/// Remove balanced `(...)` annotations.
pub fn strip_annotations(value: &str) -> String {
    ANNOTATION.replace_all(value, "").into_owned()
}

/// Remove balanced annotations, then an unclosed trailing `(...`, then an
/// unopened leading `...)`.
pub fn strip_all_annotations(value: &str) -> String {
    let value = ANNOTATION.replace_all(value, "");
    let value = TRAILING_OPEN.replace(&value, "");
    LEADING_CLOSE.replace(&value, "").into_owned()
}

/// Remove every occurrence of each phrase, in order.
pub fn remove_phrases<S: AsRef<str>>(value: &str, phrases: &[S]) -> String {
    phrases.iter().fold(value.to_string(), |acc, phrase| {
        let phrase = phrase.as_ref();
        if phrase.is_empty() {
            acc
        } else {
            acc.replace(phrase, "")
        }
    })
}

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE.replace_all(value, " ").trim().to_string()
}
