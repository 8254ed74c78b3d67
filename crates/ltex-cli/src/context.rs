//! Resolution of the directories and settings file a command works on

use std::path::{Path, PathBuf};

use ltex_core::paths::default_data_root;
use ltex_core::settings::SETTINGS_FILENAME;
use ltex_core::{ExternalDirs, FileSettingsStore, PluginSettings, SettingsSession, SettingsStore};

use crate::cli::Cli;
use crate::error::Result;

/// Application directory name under the platform cache directory.
const STORAGE_DIR_NAME: &str = "ltex-sync";

/// Paths shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncContext {
    pub data_root: PathBuf,
    pub settings_path: PathBuf,
    pub storage_root: PathBuf,
}

impl SyncContext {
    /// Resolve paths from the command line, falling back to platform defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let data_root = cli.data_root.clone().unwrap_or_else(default_data_root);
        let settings_path = cli
            .settings
            .clone()
            .unwrap_or_else(|| data_root.join(SETTINGS_FILENAME));
        let storage_root = cli.storage.clone().unwrap_or_else(default_storage_root);

        tracing::debug!(
            data_root = %data_root.display(),
            settings = %settings_path.display(),
            "Resolved context"
        );

        Self {
            data_root,
            settings_path,
            storage_root,
        }
    }

    pub fn store(&self) -> FileSettingsStore {
        FileSettingsStore::new(self.settings_path.as_path())
    }

    pub fn dirs(&self) -> ExternalDirs {
        ExternalDirs::new(&self.data_root)
    }

    /// Session over the settings file and data root.
    pub fn session(&self) -> SettingsSession {
        SettingsSession::new(self.store(), self.dirs())
    }

    pub fn load_settings(&self) -> Result<PluginSettings> {
        Ok(self.store().load()?)
    }
}

/// Platform cache directory for server releases.
fn default_storage_root() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join(STORAGE_DIR_NAME))
        .unwrap_or_else(|| Path::new(STORAGE_DIR_NAME).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn settings_default_to_data_root() {
        let cli = Cli::parse_from(["ltex-sync", "--data-root", "/data", "scopes"]);
        let context = SyncContext::from_cli(&cli);
        assert_eq!(context.settings_path, Path::new("/data").join(SETTINGS_FILENAME));
    }

    #[test]
    fn explicit_paths_win() {
        let cli = Cli::parse_from([
            "ltex-sync",
            "--data-root",
            "/data",
            "--settings",
            "/etc/ltex.json",
            "--storage",
            "/opt/ltex",
            "scopes",
        ]);
        let context = SyncContext::from_cli(&cli);
        assert_eq!(context.settings_path, PathBuf::from("/etc/ltex.json"));
        assert_eq!(context.storage_root, PathBuf::from("/opt/ltex"));
    }
}
