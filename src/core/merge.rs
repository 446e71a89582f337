//! Reconciliation of one target catalog against the source catalog.
//!
//! The merge is pure: it reads the source, target and synonym tables and
//! returns what to emit plus what to report. Writing files is the emitter's
//! job.

use super::{
    Catalog, SynonymMap,
    validate::{collapse_line_breaks, is_ascii_key},
};

/// Where an emitted value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The target catalog defines the key.
    Translated,
    /// Fallback to the source value; annotated in the output.
    Untranslated,
}

/// One definition to emit, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEntry {
    pub key: String,
    /// Unescaped value. Escaping happens when the line is rendered.
    pub value: String,
    pub status: EntryStatus,
}

impl MergedEntry {
    pub fn is_translated(&self) -> bool {
        self.status == EntryStatus::Translated
    }
}

/// Outcome of merging one target catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// One entry per source key, sorted by key.
    pub entries: Vec<MergedEntry>,
    /// Target keys outside 7-bit ASCII (still merged).
    pub non_ascii_keys: Vec<String>,
    /// Target keys whose value had line breaks replaced by spaces.
    pub sanitized_keys: Vec<String>,
    /// Target-only keys that are synonym aliases.
    pub synonym_keys: Vec<String>,
    /// Target-only keys unknown to both source and synonyms.
    pub extra_keys: Vec<String>,
}

impl MergeResult {
    pub fn translated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_translated()).count()
    }

    pub fn untranslated_count(&self) -> usize {
        self.entries.len() - self.translated_count()
    }
}

/// Merge `target` against `source`.
///
/// `source` must already have passed
/// [`validate_source`](super::validate::validate_source).
pub fn merge(source: &Catalog, target: &Catalog, synonyms: &SynonymMap) -> MergeResult {
    let mut result = MergeResult::default();

    let target_keys = target.sorted_keys();

    for key in &target_keys {
        if !is_ascii_key(key) {
            result.non_ascii_keys.push(key.to_string());
        }
    }

    for key in source.sorted_keys() {
        let entry = match target.get(key) {
            Some(value) => {
                let sanitized = collapse_line_breaks(value);
                if sanitized != value {
                    result.sanitized_keys.push(key.to_string());
                }
                MergedEntry {
                    key: key.to_string(),
                    value: sanitized.into_owned(),
                    status: EntryStatus::Translated,
                }
            }
            None => MergedEntry {
                key: key.to_string(),
                value: source.get(key).unwrap_or_default().to_string(),
                status: EntryStatus::Untranslated,
            },
        };
        result.entries.push(entry);
    }

    // Residue: target keys minus source keys. Never emitted.
    for key in target_keys {
        if source.contains_key(key) {
            continue;
        }
        if target.get(key).is_some_and(|v| collapse_line_breaks(v) != v) {
            result.sanitized_keys.push(key.to_string());
        }
        if synonyms.contains_alias(key) {
            result.synonym_keys.push(key.to_string());
        } else {
            result.extra_keys.push(key.to_string());
        }
    }
    result.sanitized_keys.sort_unstable();

    result
}
