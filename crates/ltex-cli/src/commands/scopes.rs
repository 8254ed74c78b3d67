//! Scopes command implementation

use colored::Colorize;

use ltex_core::{SCOPES, first_present_key};

use crate::context::SyncContext;
use crate::error::Result;

/// Run the scopes command
pub fn run_scopes(context: &SyncContext) -> Result<()> {
    let settings = context.load_settings()?;
    let document = settings.server_settings();
    let dirs = context.dirs();

    println!("{}", "Scopes".bold());
    println!();
    println!("{}: {}", "Settings".dimmed(), context.settings_path.display());
    println!();

    for scope in &SCOPES {
        let state = if settings.external_enabled(scope) {
            "external files".green()
        } else {
            "inline".yellow()
        };
        println!("{} ({})", scope.kind.to_string().cyan().bold(), state);
        println!("  {:<10} {}", "key".dimmed(), scope.canonical_key);
        if !scope.alias_keys.is_empty() {
            println!("  {:<10} {}", "aliases".dimmed(), scope.alias_keys.join(", "));
        }
        if let Some(active) = first_present_key(&document, scope.candidate_keys()) {
            println!("  {:<10} {}", "stored as".dimmed(), active);
        }
        println!("  {:<10} {}", "enable".dimmed(), scope.enable_flag_key);
        println!(
            "  {:<10} {}",
            "directory".dimmed(),
            dirs.directory(&settings, scope)
        );
        println!();
    }

    Ok(())
}
