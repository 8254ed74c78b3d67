//! Applying code actions to settings and word files
//!
//! A code action from the server adds entries to one scope. Depending on
//! the scope's enable flag the entries are merged into the inline settings
//! or appended to per-language word files, with the settings pointing at
//! those files through markers.

mod report;
mod writer;

pub use report::{AppendFailure, AppendedEntries, SyncOutcome};
pub use writer::ExternalSyncWriter;
