//! Entry points for a host integration
//!
//! A [`SettingsSession`] is built once at startup. It owns the word-file
//! cache shared by the configuration-read path and the code-action path.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use ltex_fs::WordFileCache;

use crate::Result;
use crate::actions::{CodeAction, ServerMessage};
use crate::document::ConfigDocument;
use crate::expand::SettingsExpander;
use crate::paths::ExternalDirs;
use crate::store::SettingsStore;
use crate::sync::{ExternalSyncWriter, SyncOutcome};

/// Result of handling a server command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub outcome: SyncOutcome,
    /// Messages to send to the server, in order
    pub messages: Vec<ServerMessage>,
}

/// Settings store, word-file cache and directory layout used together.
pub struct SettingsSession {
    store: Box<dyn SettingsStore>,
    cache: Arc<WordFileCache>,
    dirs: ExternalDirs,
}

impl SettingsSession {
    pub fn new(store: impl SettingsStore + 'static, dirs: ExternalDirs) -> Self {
        Self::with_cache(store, Arc::new(WordFileCache::new()), dirs)
    }

    /// Session sharing an existing cache.
    pub fn with_cache(
        store: impl SettingsStore + 'static,
        cache: Arc<WordFileCache>,
        dirs: ExternalDirs,
    ) -> Self {
        Self {
            store: Box::new(store),
            cache,
            dirs,
        }
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn cache(&self) -> &WordFileCache {
        &self.cache
    }

    pub fn dirs(&self) -> &ExternalDirs {
        &self.dirs
    }

    /// Configuration-read hook: the settings the server should see.
    pub fn workspace_configuration(&self, configuration: &ConfigDocument) -> ConfigDocument {
        SettingsExpander::new(&self.cache).expand(configuration)
    }

    /// Stored server settings, expanded.
    pub fn expanded_server_settings(&self) -> Result<ConfigDocument> {
        let settings = self.store.load()?;
        Ok(self.workspace_configuration(&settings.server_settings()))
    }

    /// Add entries to a scope; see [`ExternalSyncWriter::apply_code_action`].
    pub fn apply_code_action(&self, scope_key: &str, values: &Map<String, Value>) -> Result<SyncOutcome> {
        ExternalSyncWriter::new(self.store.as_ref(), &self.cache, &self.dirs)
            .apply_code_action(scope_key, values)
    }

    /// Handle a command the server asked the client to execute.
    ///
    /// Returns `None` when the command is not a code action. When word
    /// files changed without a settings change, the report carries a
    /// configuration notification with freshly expanded settings and, if
    /// the command named a document, a delayed re-check of it.
    pub fn handle_server_command(&self, command: &Value) -> Result<Option<CommandReport>> {
        let Some(action) = CodeAction::from_command(command) else {
            return Ok(None);
        };

        let outcome = self.apply_code_action(action.scope_key, &action.values)?;

        let mut messages = Vec::new();
        if outcome.manual_notification_required {
            messages.push(ServerMessage::did_change_configuration(
                self.expanded_server_settings()?,
            ));
            if let Some(uri) = &action.uri {
                messages.push(ServerMessage::check_document(uri));
            }
            tracing::debug!(command = %action.command, "Word files changed without a settings change");
        }

        Ok(Some(CommandReport {
            command: action.command,
            outcome,
            messages,
        }))
    }
}
