//! Expansion of file markers into live word lists
//!
//! Run on every configuration read before the settings reach the server.
//! Only markers are touched; inline lists and unknown keys pass through.

use serde_json::Value;

use ltex_fs::WordFileCache;

use crate::document::{ConfigDocument, Entries, first_present_key};
use crate::scope::SCOPES;

/// Replaces file markers in a settings document with file contents.
#[derive(Debug, Clone, Copy)]
pub struct SettingsExpander<'a> {
    cache: &'a WordFileCache,
}

impl<'a> SettingsExpander<'a> {
    pub fn new(cache: &'a WordFileCache) -> Self {
        Self { cache }
    }

    /// Return a copy of `document` with every marker list replaced by the
    /// sorted entries of its file.
    ///
    /// For each scope the active key is the first present among the
    /// canonical key and its aliases. The input is never modified and no
    /// file is written; a missing or unreadable file expands to `[]`.
    pub fn expand(&self, document: &ConfigDocument) -> ConfigDocument {
        let mut expanded = document.clone();

        for scope in &SCOPES {
            let Some(key) = first_present_key(&expanded, scope.candidate_keys()) else {
                continue;
            };
            let Some(languages) = expanded.get_mut(key).and_then(Value::as_object_mut) else {
                continue;
            };

            for (language, value) in languages.iter_mut() {
                if let Entries::External(path) = Entries::from_value(value) {
                    let words = self.cache.load(&path);
                    tracing::debug!(
                        scope = %scope.kind,
                        language = language.as_str(),
                        %path,
                        count = words.len(),
                        "Expanded file marker"
                    );
                    *value = Value::from(words.into_iter().collect::<Vec<_>>());
                }
            }
        }

        expanded
    }
}
