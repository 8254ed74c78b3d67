//! ExternalSyncWriter implementation

use serde_json::{Map, Value};

use ltex_fs::{NormalizedPath, WordFileCache};

use crate::Result;
use crate::document::{
    ConfigDocument, Entries, first_present_key, is_marker, merge_entries, string_entries,
};
use crate::paths::ExternalDirs;
use crate::scope::Scope;
use crate::settings::PluginSettings;
use crate::store::SettingsStore;

use super::report::{AppendFailure, AppendedEntries, SyncOutcome};

/// Applies code actions to the stored settings and to word files.
///
/// Holds no state of its own: settings are loaded fresh for every action
/// and word files go through the shared cache.
pub struct ExternalSyncWriter<'a> {
    store: &'a dyn SettingsStore,
    cache: &'a WordFileCache,
    dirs: &'a ExternalDirs,
}

impl<'a> ExternalSyncWriter<'a> {
    pub fn new(store: &'a dyn SettingsStore, cache: &'a WordFileCache, dirs: &'a ExternalDirs) -> Self {
        Self { store, cache, dirs }
    }

    /// Add the entries in `values` (language tag -> list of entries) to the
    /// scope named by `scope_key`.
    ///
    /// With external files enabled for the scope, entries go to the
    /// language's word file, inline entries are migrated into it, and the
    /// settings are pointed at the file. Otherwise, and for keys that name
    /// no known scope, entries are merged into the inline settings.
    ///
    /// # Errors
    ///
    /// Returns an error only if the settings cannot be loaded or saved.
    /// Word-file failures are collected in [`SyncOutcome::failures`].
    pub fn apply_code_action(&self, scope_key: &str, values: &Map<String, Value>) -> Result<SyncOutcome> {
        let settings = self.store.load()?;

        match Scope::by_canonical_key(scope_key) {
            Some(scope) if settings.external_enabled(scope) => {
                self.sync_external(settings, scope, values)
            }
            Some(scope) => self.merge_inline(settings, scope_key, Some(scope), values),
            None => {
                tracing::debug!(key = scope_key, "Unknown scope key, merging inline");
                self.merge_inline(settings, scope_key, None, values)
            }
        }
    }

    fn merge_inline(
        &self,
        mut settings: PluginSettings,
        key: &str,
        scope: Option<&Scope>,
        values: &Map<String, Value>,
    ) -> Result<SyncOutcome> {
        let document = settings.server_settings();
        let active_key = active_key(&document, key, scope);
        let mut languages = scope_languages(&document, active_key);
        let mut outcome = SyncOutcome::new(key);

        for (language, value) in values {
            let incoming = incoming_entries(value);
            let existing = languages.get(language).map(string_entries).unwrap_or_default();
            let merged = merge_entries(&existing, &incoming);
            if merged != existing {
                languages.insert(language.clone(), Value::from(merged));
                outcome.configuration_changed = true;
            }
        }

        if outcome.configuration_changed {
            let document = replace_scope(document, active_key, key, languages);
            settings.set_server_settings(document);
            self.store.save(&settings)?;
            tracing::info!(key, "Merged code action into inline settings");
        }

        Ok(outcome)
    }

    fn sync_external(
        &self,
        mut settings: PluginSettings,
        scope: &Scope,
        values: &Map<String, Value>,
    ) -> Result<SyncOutcome> {
        let key = scope.canonical_key;
        let document = settings.server_settings();
        let active_key = active_key(&document, key, Some(scope));
        let mut languages = scope_languages(&document, active_key);
        let mut outcome = SyncOutcome::new(key);
        let mut words_added_to_file = false;

        for (language, value) in values {
            let incoming = incoming_entries(value);
            if incoming.is_empty() {
                continue;
            }

            let path = self.dirs.word_file(&settings, scope, language);
            let existing = languages
                .get(language)
                .map(Entries::from_value)
                .unwrap_or(Entries::Literal(Vec::new()));
            let mut durable = true;

            match self.append(language, &path, &incoming, false, &mut outcome) {
                Some(added) => words_added_to_file |= added,
                None => durable = false,
            }

            if let Entries::Literal(inline) = &existing {
                let embedded: Vec<&String> = inline.iter().filter(|e| !is_marker(e)).collect();
                if !embedded.is_empty()
                    && self.append(language, &path, &embedded, true, &mut outcome).is_none()
                {
                    durable = false;
                }
            }

            let target = if durable {
                Entries::External(path)
            } else {
                // Keep the entries usable without the file
                match existing {
                    Entries::Literal(ref inline) => Entries::Literal(merge_entries(inline, &incoming)),
                    Entries::External(_) => continue,
                }
            };

            if existing != target {
                tracing::info!(scope = %scope.kind, language = language.as_str(), "Pointing settings at word file");
                languages.insert(language.clone(), target.to_value());
                outcome.configuration_changed = true;
            }
        }

        if outcome.configuration_changed {
            let document = replace_scope(document, active_key, key, languages);
            settings.set_server_settings(document);
            self.store.save(&settings)?;
        } else {
            outcome.manual_notification_required = words_added_to_file;
        }

        Ok(outcome)
    }

    /// Append to a word file, recording the result.
    ///
    /// Returns whether anything was added, or `None` if the write failed.
    fn append<S: AsRef<str>>(
        &self,
        language: &str,
        path: &NormalizedPath,
        entries: &[S],
        migrated: bool,
        outcome: &mut SyncOutcome,
    ) -> Option<bool> {
        match self.cache.append(path, entries) {
            Ok(added) if added.is_empty() => Some(false),
            Ok(added) => {
                outcome.appended.push(AppendedEntries {
                    language: language.to_string(),
                    path: path.clone(),
                    entries: added,
                    migrated,
                });
                Some(true)
            }
            Err(e) => {
                tracing::warn!(%path, language, error = %e, "Entries were not saved to word file");
                outcome.failures.push(AppendFailure {
                    language: language.to_string(),
                    path: path.clone(),
                    message: e.to_string(),
                });
                None
            }
        }
    }
}

/// Key currently holding the scope in `document`; `key` if none does.
fn active_key<'k>(document: &ConfigDocument, key: &'k str, scope: Option<&Scope>) -> &'k str {
    match scope {
        Some(scope) => first_present_key(document, scope.candidate_keys()).unwrap_or(key),
        None => key,
    }
}

/// Language mapping stored under `key`; anything but an object is empty.
fn scope_languages(document: &ConfigDocument, key: &str) -> Map<String, Value> {
    document
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Incoming entries trimmed, without blanks.
fn incoming_entries(value: &Value) -> Vec<String> {
    string_entries(value)
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Store `languages` under `canonical_key`, taking the place of
/// `active_key` so an alias is renamed without reordering the document.
fn replace_scope(
    document: ConfigDocument,
    active_key: &str,
    canonical_key: &str,
    languages: Map<String, Value>,
) -> ConfigDocument {
    let mut languages = Some(Value::Object(languages));
    let mut replaced = ConfigDocument::new();

    for (k, v) in document {
        if k == active_key || k == canonical_key {
            if let Some(value) = languages.take() {
                replaced.insert(canonical_key.to_string(), value);
            }
        } else {
            replaced.insert(k, v);
        }
    }
    if let Some(value) = languages {
        replaced.insert(canonical_key.to_string(), value);
    }

    replaced
}
