//! Plugin settings as stored by the host
//!
//! The host keeps one JSON object for the plugin. The server settings
//! document lives under [`SERVER_SETTINGS_KEY`]; the per-scope enable flags
//! and directory overrides, and the server version, sit beside it.

use serde_json::{Map, Value};

use crate::document::ConfigDocument;
use crate::scope::Scope;

/// Settings file name used by the host.
pub const SETTINGS_FILENAME: &str = "LSP-ltex-plus.sublime-settings";

/// Directory name the plugin owns under the user-data and storage roots.
pub const PLUGIN_NAMESPACE: &str = "LSP-ltex-plus";

/// Key holding the server settings document.
pub const SERVER_SETTINGS_KEY: &str = "settings";

/// Key holding an explicit server release.
pub const VERSION_KEY: &str = "version";

/// The host's settings object for this plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginSettings {
    values: Map<String, Value>,
}

impl PluginSettings {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// The server settings document; a missing or non-object value is empty.
    pub fn server_settings(&self) -> ConfigDocument {
        self.values
            .get(SERVER_SETTINGS_KEY)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace the server settings document.
    pub fn set_server_settings(&mut self, document: ConfigDocument) {
        self.values
            .insert(SERVER_SETTINGS_KEY.to_string(), Value::Object(document));
    }

    /// Whether external files are enabled for `scope`.
    ///
    /// Only a JSON `true` enables them. Other truthy values such as `1` or
    /// `"yes"` leave the scope inline.
    pub fn external_enabled(&self, scope: &Scope) -> bool {
        self.values
            .get(scope.enable_flag_key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Directory override for `scope`, trimmed; blank means unset.
    pub fn directory_override(&self, scope: &Scope) -> Option<&str> {
        self.values
            .get(scope.directory_override_key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
    }

    /// Explicit server release, if configured.
    pub fn server_version(&self) -> Option<&str> {
        self.values
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for PluginSettings {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}
