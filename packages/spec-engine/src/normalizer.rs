//! Spec normalization: [`SpecMap`] → ordered [`Segment`]s.
//!
//! Every entry is first prepared (label simplified, value cleaned). It then
//! runs through [`RULES`] top to bottom. A rule either finishes the entry
//! (recording it somewhere or dropping it) or lets it fall through to the
//! next rule. Certification buckets and the registration date are held
//! back and appended once all entries are processed, in that order.

use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::clean;
use crate::types::segment::Segment;
use crate::types::spec_map::SpecMap;
use crate::vocabulary::{self, Vocabulary};

/// Whether an entry continues to the next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Done,
}

/// A prepared entry. `label` may be rewritten by a rule.
#[derive(Debug)]
struct Entry {
    label: String,
    value: String,
}

type Rule = fn(&Vocabulary, &mut Entry, &mut Output) -> Flow;

/// Classification rules in precedence order.
const RULES: [(&str, Rule); 7] = [
    ("registration-date", registration_date),
    ("haccp-certification", haccp_certification),
    ("certificate-number", certificate_number),
    ("additive", additive_relabel),
    ("checkmark", checkmark),
    ("certification", certification),
    ("ordinary", ordinary),
];

/// Segments plus the buckets emitted after them.
#[derive(Debug, Default)]
struct Output {
    segments: Vec<Segment>,
    /// label → index of the first segment carrying it
    categories: HashMap<String, usize>,
    certifications: IndexSet<String>,
    certification_info: IndexSet<String>,
    registration_date: Option<String>,
}

impl Output {
    /// Append `token` to the first segment labelled `category`, creating
    /// one if none exists yet.
    fn merge_category(&mut self, category: &str, token: &str) {
        match self.categories.get(category) {
            Some(&idx) => self.segments[idx].push_token(token),
            None => self.push_segment(Segment::new(category, token)),
        }
    }

    fn push_segment(&mut self, segment: Segment) {
        self.categories
            .entry(segment.label.clone())
            .or_insert(self.segments.len());
        self.segments.push(segment);
    }

    fn finish(mut self, labels: &vocabulary::OutputLabels) -> Vec<Segment> {
        if !self.certifications.is_empty() {
            let joined = join(&self.certifications);
            self.segments
                .push(Segment::new(labels.certification.as_str(), joined));
        }
        if !self.certification_info.is_empty() {
            let joined = join(&self.certification_info);
            self.segments
                .push(Segment::new(labels.certification_info.as_str(), joined));
        }
        if let Some(date) = self.registration_date {
            self.segments
                .push(Segment::new(labels.registration_date.as_str(), date));
        }
        self.segments
    }
}

fn join(bucket: &IndexSet<String>) -> String {
    bucket.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Turns a [`SpecMap`] into the ordered segment list.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(vocabulary::builtin())
    }
}

impl<'v> Normalizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Normalize every entry in map order and append the trailing buckets.
    pub fn normalize(&self, specs: &SpecMap) -> Vec<Segment> {
        let mut output = Output::default();

        for (label, value) in specs.iter() {
            let Some(mut entry) = self.prepare(label, value) else {
                continue;
            };

            for (name, rule) in RULES {
                if rule(self.vocabulary, &mut entry, &mut output) == Flow::Done {
                    trace!(rule = name, label = %entry.label, "entry handled");
                    break;
                }
            }
        }

        output.finish(&self.vocabulary.output)
    }

    /// Simplify the label and clean the value; `None` drops the entry.
    fn prepare(&self, raw_label: &str, raw_value: &str) -> Option<Entry> {
        if raw_value.trim().is_empty() {
            return None;
        }

        let label = self
            .vocabulary
            .simplify_key(raw_label)
            .replace(['[', ']'], "");

        if label == raw_value || raw_label == raw_value {
            return None;
        }

        let value = self.clean_value(raw_value);
        if value.is_empty() {
            debug!(label = %label, raw = %raw_value, "value empty after cleaning");
            return None;
        }

        Some(Entry { label, value })
    }

    /// Full value cleanup: markers, annotations, marketing phrases, whitespace.
    pub fn clean_value(&self, raw: &str) -> String {
        let vocab = self.vocabulary;
        let value = clean::truncate_at_markers(raw.trim(), &vocab.truncation_markers).trim();
        let value = clean::strip_all_annotations(value);
        let value = clean::remove_phrases(&value, &vocab.website_phrases);
        clean::collapse_whitespace(&value)
    }
}

fn registration_date(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    if !vocab.is_registration_label(&entry.label) {
        return Flow::Next;
    }
    out.registration_date = Some(entry.value.clone());
    Flow::Done
}

fn haccp_certification(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    let certification_shaped = entry.label == vocab.certification_info_label
        || (vocab.is_certification_label(&entry.label) && vocab.is_checkmark(&entry.value));

    if certification_shaped && vocab.is_haccp_label(&entry.label) {
        out.certification_info.insert(entry.label.clone());
        return Flow::Done;
    }
    Flow::Next
}

fn certificate_number(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    if !vocab.is_certificate_number_label(&entry.label) {
        return Flow::Next;
    }
    out.certification_info.insert(entry.value.clone());
    Flow::Done
}

fn additive_relabel(vocab: &Vocabulary, entry: &mut Entry, _out: &mut Output) -> Flow {
    if vocab.is_additive_label(&entry.label) && !vocab.is_additive_exempt(&entry.value) {
        entry.label = vocab.additive_label.clone();
    }
    Flow::Next
}

fn checkmark(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    if !vocab.is_checkmark(&entry.value) {
        return Flow::Next;
    }

    if vocab.is_haccp_label(&entry.label) {
        out.certification_info.insert(entry.label.clone());
    } else if vocab.is_certification_label(&entry.label) {
        out.certifications.insert(entry.label.clone());
    } else if let Some(category) = vocab.category_of(&entry.label) {
        out.merge_category(category, &entry.label);
    } else {
        debug!(label = %entry.label, "checkmark on unrecognized label dropped");
    }
    Flow::Done
}

fn certification(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    if vocab.is_certification_label(&entry.label) && !entry.label.contains(vocab.haccp_marker.as_str())
    {
        out.certifications.insert(entry.label.clone());
        return Flow::Done;
    }
    Flow::Next
}

fn ordinary(vocab: &Vocabulary, entry: &mut Entry, out: &mut Output) -> Flow {
    if vocab.is_meaningless(&entry.value) {
        debug!(label = %entry.label, value = %entry.value, "boilerplate value dropped");
        return Flow::Done;
    }

    if entry.label == entry.value {
        match vocab.category_of(&entry.label) {
            Some(category) => out.merge_category(category, &entry.label),
            None => debug!(label = %entry.label, "self-mapped entry dropped"),
        }
        return Flow::Done;
    }

    out.push_segment(Segment::new(entry.label.as_str(), entry.value.as_str()));
    Flow::Done
}

/// Normalize with the built-in vocabulary.
pub fn normalize_specs(specs: &SpecMap) -> Vec<Segment> {
    Normalizer::default().normalize(specs)
}
