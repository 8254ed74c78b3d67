//! Persistence boundary to the host's settings store
//!
//! The host owns the plugin settings; the core only loads a snapshot and
//! saves a whole new object back.

use std::sync::Mutex;

use ltex_fs::{ConfigStore, NormalizedPath};
use serde_json::{Map, Value};

use crate::settings::PluginSettings;
use crate::{Error, Result};

/// Load/save access to the plugin settings.
pub trait SettingsStore: Send + Sync {
    /// Current plugin settings.
    fn load(&self) -> Result<PluginSettings>;

    /// Replace the stored plugin settings.
    fn save(&self, settings: &PluginSettings) -> Result<()>;
}

/// Settings persisted in a file whose extension picks the format.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: NormalizedPath,
    config: ConfigStore,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self {
            path: path.into(),
            config: ConfigStore::new(),
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    /// A missing file loads as empty settings.
    fn load(&self) -> Result<PluginSettings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path, "No settings file, using empty settings");
            return Ok(PluginSettings::default());
        }
        let value: Value = self.config.load(&self.path)?;
        match value {
            Value::Object(map) => Ok(PluginSettings::new(map)),
            other => Err(Error::InvalidSettings {
                message: format!(
                    "{} must contain an object, found {}",
                    self.path,
                    json_type_name(&other)
                ),
            }),
        }
    }

    fn save(&self, settings: &PluginSettings) -> Result<()> {
        self.config.save(&self.path, settings.as_map())?;
        tracing::debug!(path = %self.path, "Saved settings");
        Ok(())
    }
}

/// Settings held in memory, for hosts that persist them elsewhere.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    values: Map<String, Value>,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            inner: Mutex::new(MemoryState { values, saves: 0 }),
        }
    }

    /// How many times settings were saved.
    pub fn save_count(&self) -> usize {
        self.lock().map(|state| state.saves).unwrap_or_default()
    }

    /// Current contents.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.lock()
            .map(|state| state.values.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>> {
        self.inner
            .lock()
            .map_err(|_| Error::persistence("in-memory settings lock poisoned"))
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<PluginSettings> {
        Ok(PluginSettings::new(self.lock()?.values.clone()))
    }

    fn save(&self, settings: &PluginSettings) -> Result<()> {
        let mut state = self.lock()?;
        state.values = settings.as_map().clone();
        state.saves += 1;
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
