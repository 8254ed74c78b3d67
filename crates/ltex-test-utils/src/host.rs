//! [`TestHost`] builder for settings and word-file test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Settings file name the fixture writes.
pub const SETTINGS_FILE: &str = "LSP-ltex-plus.sublime-settings";

/// A temporary user-data root holding a plugin settings file, with helpers
/// for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use ltex_test_utils::TestHost;
/// use serde_json::json;
///
/// let host = TestHost::new();
/// host.write_settings(&json!({"use_external_dictionary_files": true}));
/// host.write_word_file("LSP-ltex-plus/dictionaries/en-US.txt", &["foo"]);
/// host.assert_words("LSP-ltex-plus/dictionaries/en-US.txt", &["foo"]);
/// ```
pub struct TestHost {
    temp_dir: TempDir,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// Create an empty temporary data root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory, used as the user-data root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the plugin settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.root().join(SETTINGS_FILE)
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Default word-file path for `subdirectory` and `file_name`, as the
    /// plugin lays it out under the data root.
    pub fn default_word_file(&self, subdirectory: &str, file_name: &str) -> PathBuf {
        self.root()
            .join("LSP-ltex-plus")
            .join(subdirectory)
            .join(file_name)
    }

    /// Write the plugin settings file.
    pub fn write_settings(&self, settings: &Value) {
        let text = serde_json::to_string_pretty(settings).unwrap();
        fs::write(self.settings_path(), text).unwrap();
    }

    /// Read the plugin settings file back.
    ///
    /// # Panics
    /// Panics if the file is missing or not valid JSON.
    pub fn read_settings(&self) -> Value {
        let text = fs::read_to_string(self.settings_path())
            .unwrap_or_else(|_| panic!("Could not read {}", self.settings_path().display()));
        serde_json::from_str(&text).unwrap()
    }

    /// Write a word file with one entry per line, creating directories.
    pub fn write_word_file(&self, relative: &str, words: &[&str]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let content: String = words.iter().map(|w| format!("{}\n", w)).collect();
        fs::write(&path, content).unwrap();
        path
    }

    /// Non-blank, non-comment lines of a word file, sorted.
    ///
    /// A missing file reads as empty.
    pub fn read_words(&self, path: impl AsRef<Path>) -> Vec<String> {
        let full = self.root().join(path);
        let content = fs::read_to_string(&full).unwrap_or_default();
        let mut words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        words.sort();
        words
    }

    /// Assert that a word file holds exactly `expected` (any order).
    ///
    /// # Panics
    /// Panics with the actual contents if the sets differ.
    pub fn assert_words(&self, path: impl AsRef<Path>, expected: &[&str]) {
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        expected.sort();
        let actual = self.read_words(path.as_ref());
        assert_eq!(
            actual,
            expected,
            "Word file {} has unexpected contents",
            path.as_ref().display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: impl AsRef<Path>) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
