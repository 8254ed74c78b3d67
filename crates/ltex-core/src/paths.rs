//! Where external word files live
//!
//! Each scope's files sit in one directory: the user's override when set,
//! otherwise `<data root>/LSP-ltex-plus/<scope subdirectory>`. Relative
//! overrides are taken relative to the data root.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use ltex_fs::NormalizedPath;

use crate::scope::Scope;
use crate::settings::{PLUGIN_NAMESPACE, PluginSettings};

/// Application directory name under the platform data directory.
const APP_DIR_NAME: &str = "ltex-sync";

/// Resolves word-file locations against a user-data root.
#[derive(Debug, Clone)]
pub struct ExternalDirs {
    data_root: PathBuf,
}

impl ExternalDirs {
    /// Resolver rooted at `data_root`.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    /// Resolver rooted at the platform data directory:
    /// - Linux: `~/.local/share/ltex-sync/`
    /// - macOS: `~/Library/Application Support/ltex-sync/`
    /// - Windows: `%APPDATA%\ltex-sync\`
    ///
    /// Falls back to the current directory when the platform has none.
    pub fn platform_default() -> Self {
        Self::new(default_data_root())
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Directory holding `scope`'s files.
    pub fn directory(&self, settings: &PluginSettings, scope: &Scope) -> NormalizedPath {
        match settings.directory_override(scope) {
            Some(raw) => {
                let expanded = PathBuf::from(expand_user_path(raw).as_ref());
                let dir = if expanded.is_absolute() {
                    expanded
                } else {
                    self.data_root.join(expanded)
                };
                tracing::debug!(scope = %scope.kind, dir = %dir.display(), "Using directory override");
                NormalizedPath::new(dir)
            }
            None => NormalizedPath::new(
                self.data_root
                    .join(PLUGIN_NAMESPACE)
                    .join(scope.default_subdirectory),
            ),
        }
    }

    /// Word file for `language` in `scope`.
    pub fn word_file(
        &self,
        settings: &PluginSettings,
        scope: &Scope,
        language: &str,
    ) -> NormalizedPath {
        self.directory(settings, scope)
            .join(&scope.file_name(language))
    }
}

impl Default for ExternalDirs {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Platform data directory for this application.
pub fn default_data_root() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}

/// Expand `~` and environment variables in a user-supplied path.
///
/// Defined variables are substituted; undefined ones stay as written.
pub fn expand_user_path(raw: &str) -> Cow<'_, str> {
    expand_with_env(raw, |name| std::env::var(name).ok())
}

fn expand_with_env<F>(raw: &str, lookup: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> Option<String>,
{
    shellexpand::full_with_context_no_errors(
        raw,
        || dirs::home_dir().map(|home| home.to_string_lossy().into_owned()),
        lookup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_variable_keeps_text() {
        let expanded = expand_user_path("$LTEX_SYNC_SURELY_UNDEFINED_VAR/x");
        assert_eq!(expanded, "$LTEX_SYNC_SURELY_UNDEFINED_VAR/x");
    }

    #[test]
    fn undefined_variable_does_not_block_defined_ones() {
        let lookup = |name: &str| (name == "DICT_ROOT").then(|| "/abs/dicts".to_string());
        let expanded = expand_with_env("$DICT_ROOT/$NOT_SET/${DICT_ROOT}", lookup);
        assert_eq!(expanded, "/abs/dicts/$NOT_SET//abs/dicts");
    }

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(expand_user_path("/abs/dir"), "/abs/dir");
    }
}
