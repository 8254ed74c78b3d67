//! Add command implementation

use colored::Colorize;
use serde_json::{Map, Value};

use ltex_core::{ScopeKind, SyncOutcome};

use crate::context::SyncContext;
use crate::error::{CliError, Result};

/// Settings key for a scope given by name or by key.
///
/// Scope names map to their canonical key; anything else is taken as a
/// settings key and merged inline.
pub fn resolve_scope_key(scope: &str) -> Result<String> {
    if let Some(kind) = ScopeKind::from_slug(scope) {
        return Ok(kind.scope().canonical_key.to_string());
    }
    let key = scope.trim();
    if key.is_empty() {
        return Err(CliError::user("Scope must not be empty"));
    }
    Ok(key.to_string())
}

/// Run the add command
pub fn run_add(
    context: &SyncContext,
    scope: &str,
    language: &str,
    entries: &[String],
    json: bool,
) -> Result<()> {
    let scope_key = resolve_scope_key(scope)?;
    let mut values = Map::new();
    values.insert(language.to_string(), Value::from(entries.to_vec()));

    let outcome = context.session().apply_code_action(&scope_key, &values)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    if outcome.is_complete() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} word file(s) could not be written; entries were kept in the settings",
            outcome.failures.len()
        )))
    }
}

fn print_outcome(outcome: &SyncOutcome) {
    for appended in &outcome.appended {
        let verb = if appended.migrated { "Migrated" } else { "Added" };
        println!(
            "{} {} {} to {}",
            "+".green(),
            verb,
            plural(appended.entries.len(), "entry", "entries"),
            appended.path.as_str().cyan()
        );
    }

    for failure in &outcome.failures {
        eprintln!(
            "{} Could not write {}: {}",
            "warning:".yellow().bold(),
            failure.path,
            failure.message
        );
    }

    if outcome.configuration_changed {
        println!("{} Updated {} in settings", "+".green(), outcome.scope_key.cyan());
    } else if outcome.manual_notification_required {
        println!(
            "{} Word files changed; the server must be told to reload its settings",
            "!".yellow()
        );
    } else if outcome.appended.is_empty() && outcome.failures.is_empty() {
        println!("{}", "Nothing to add".dimmed());
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_scope_names() {
        assert_eq!(resolve_scope_key("dictionary").unwrap(), "ltex.dictionary");
        assert_eq!(
            resolve_scope_key("hidden-false-positives").unwrap(),
            "ltex.hiddenFalsePositives"
        );
        assert_eq!(resolve_scope_key("disabled-rules").unwrap(), "ltex.disabledRules");
    }

    #[test]
    fn test_resolve_raw_keys() {
        assert_eq!(resolve_scope_key("ltex.enabledRules").unwrap(), "ltex.enabledRules");
        assert!(resolve_scope_key("  ").is_err());
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "entry", "entries"), "1 entry");
        assert_eq!(plural(3, "entry", "entries"), "3 entries");
    }
}
