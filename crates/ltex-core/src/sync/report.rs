//! Result of applying one code action

use ltex_fs::NormalizedPath;
use serde::Serialize;

/// Entries written to a word file for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppendedEntries {
    pub language: String,
    pub path: NormalizedPath,
    pub entries: Vec<String>,
    /// True when the entries came from the inline settings rather than
    /// from the code action.
    pub migrated: bool,
}

/// A word-file append that did not reach the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppendFailure {
    pub language: String,
    pub path: NormalizedPath,
    pub message: String,
}

/// What a code action changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    /// Settings key written to, or that would have been written to
    pub scope_key: String,
    /// The stored settings were modified and saved
    pub configuration_changed: bool,
    /// Word files changed while the settings did not, so the server has to
    /// be told explicitly
    pub manual_notification_required: bool,
    pub appended: Vec<AppendedEntries>,
    pub failures: Vec<AppendFailure>,
}

impl SyncOutcome {
    pub fn new(scope_key: impl Into<String>) -> Self {
        Self {
            scope_key: scope_key.into(),
            ..Self::default()
        }
    }

    /// Whether every requested write was durably stored.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
