//! Typed view of the server settings document
//!
//! The document maps a scope key to a mapping from language tag to a list
//! of entries. A list is either literal words/rule ids or a single file
//! marker (`":" + path`) standing in for a word file. [`Entries`] makes
//! that distinction once, where a value is read.

use ltex_fs::NormalizedPath;
use serde_json::{Map, Value};

/// Prefix that turns a string entry into a file marker.
pub const FILE_MARKER_PREFIX: char = ':';

/// A server settings document, e.g. `{"ltex.dictionary": {"en-US": [...]}}`.
pub type ConfigDocument = Map<String, Value>;

/// Entries for one language in one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries {
    /// Entries stored inline in the settings
    Literal(Vec<String>),
    /// Entries stored in the word file at this path
    External(NormalizedPath),
}

impl Entries {
    /// Classify a language's settings value.
    ///
    /// Exactly one string element carrying a marker makes the list
    /// external. Anything else is literal, keeping only non-empty strings;
    /// a non-array value is an empty literal list.
    ///
    /// A marker needs a path after the `:` prefix, so `[":"]` is the
    /// literal word `:` rather than an empty file reference.
    pub fn from_value(value: &Value) -> Self {
        if let Some([Value::String(only)]) = value.as_array().map(Vec::as_slice)
            && let Some(path) = parse_marker(only)
        {
            return Self::External(path);
        }
        Self::Literal(string_entries(value))
    }

    /// Render back into a settings value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Literal(entries) => Value::from(entries.clone()),
            Self::External(path) => Value::from(vec![marker_for(path)]),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Marker string pointing at `path`.
pub fn marker_for(path: &NormalizedPath) -> String {
    format!("{}{}", FILE_MARKER_PREFIX, path.as_str())
}

/// Path named by a marker string, if `entry` is one.
pub fn parse_marker(entry: &str) -> Option<NormalizedPath> {
    entry
        .strip_prefix(FILE_MARKER_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(NormalizedPath::new)
}

/// Whether `entry` is a marker rather than a word.
pub fn is_marker(entry: &str) -> bool {
    parse_marker(entry).is_some()
}

/// First of `candidates` present as a key in `document`.
pub fn first_present_key<'a>(
    document: &ConfigDocument,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates.into_iter().find(|key| document.contains_key(*key))
}

/// Non-empty string elements of an array value, in order.
pub fn string_entries(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// `existing` followed by the entries of `incoming` it does not contain yet.
///
/// Existing order is preserved and new entries keep their given order.
pub fn merge_entries(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for entry in incoming {
        if !merged.contains(entry) {
            merged.push(entry.clone());
        }
    }
    merged
}
