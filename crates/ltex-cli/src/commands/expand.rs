//! Expand command implementation

use colored::Colorize;
use serde_json::Value;

use ltex_core::{Entries, SCOPES, first_present_key};

use crate::context::SyncContext;
use crate::error::Result;

/// Print the server settings as the language server would receive them.
pub fn run_expand(context: &SyncContext, json: bool) -> Result<()> {
    let session = context.session();
    let stored = context.load_settings()?.server_settings();
    let expanded = session.workspace_configuration(&stored);

    if json {
        println!("{}", serde_json::to_string_pretty(&Value::Object(expanded))?);
        return Ok(());
    }

    println!("{}", "Expanded Settings".bold());
    println!();

    let mut shown = false;
    for scope in &SCOPES {
        let Some(key) = first_present_key(&expanded, scope.candidate_keys()) else {
            continue;
        };
        let Some(languages) = expanded[key].as_object() else {
            continue;
        };
        shown = true;

        println!("{}:", key.cyan().bold());
        for (language, value) in languages {
            let from_file = stored
                .get(key)
                .and_then(|v| v.get(language))
                .map(Entries::from_value)
                .is_some_and(|e| e.is_external());
            let source = if from_file { "file" } else { "inline" };
            let entries = Entries::from_value(value);
            let count = match &entries {
                Entries::Literal(list) => list.len(),
                Entries::External(_) => 0,
            };
            println!(
                "  {:<10} {} entries ({})",
                language.green(),
                count,
                source.dimmed()
            );
        }
        println!();
    }

    if !shown {
        println!("  {}", "No dictionary, false-positive or rule lists configured".dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> SyncContext {
        SyncContext {
            data_root: dir.path().to_path_buf(),
            settings_path: dir.path().join("settings.json"),
            storage_root: PathBuf::from("/unused"),
        }
    }

    #[test]
    fn test_expand_without_settings_file() {
        let dir = TempDir::new().unwrap();
        assert!(run_expand(&context(&dir), false).is_ok());
        assert!(run_expand(&context(&dir), true).is_ok());
    }

    #[test]
    fn test_expand_rejects_non_object_settings() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "42").unwrap();
        assert!(run_expand(&context(&dir), true).is_err());
    }
}
