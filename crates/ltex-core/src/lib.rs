//! Settings expansion and external word-file synchronization for LTeX+
//!
//! The LTeX+ language server keeps per-language dictionaries, hidden false
//! positives and disabled rules in its settings. This crate lets those
//! lists live in plain text files instead:
//!
//! - **Scopes**: the three list kinds, their settings keys and file layout
//! - **Expansion**: file markers in the settings are replaced by the live
//!   file contents before the settings reach the server
//! - **Sync**: code actions from the server append to word files (or merge
//!   inline when external files are off) and keep the settings pointing at
//!   the files
//! - **Session**: the host-facing entry points tying a settings store, the
//!   shared word-file cache and directory resolution together
//!
//! # Architecture
//!
//! ```text
//!             host integration / ltex-cli
//!                        |
//!                 SettingsSession
//!                  /            \
//!      SettingsExpander    ExternalSyncWriter --- SettingsStore
//!                  \            /
//!                  WordFileCache (ltex-fs)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ltex_core::{ExternalDirs, FileSettingsStore, SettingsSession};
//!
//! fn example() -> ltex_core::Result<()> {
//!     let store = FileSettingsStore::new("/path/to/LSP-ltex-plus.sublime-settings");
//!     let session = SettingsSession::new(store, ExternalDirs::platform_default());
//!     let settings = session.expanded_server_settings()?;
//!     println!("{}", serde_json::Value::Object(settings));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod document;
pub mod error;
pub mod expand;
pub mod paths;
pub mod scope;
pub mod server;
pub mod session;
pub mod settings;
pub mod store;
pub mod sync;

pub use actions::{CodeAction, ServerMessage};
pub use document::{ConfigDocument, Entries, first_present_key, marker_for};
pub use error::{Error, Result};
pub use expand::SettingsExpander;
pub use paths::ExternalDirs;
pub use scope::{SCOPES, Scope, ScopeKind, sanitize_language_tag};
pub use server::ServerLayout;
pub use session::{CommandReport, SettingsSession};
pub use settings::PluginSettings;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use sync::{AppendFailure, AppendedEntries, ExternalSyncWriter, SyncOutcome};
