//! ltex-sync CLI
//!
//! Inspect and update LTeX+ settings whose dictionaries, hidden false
//! positives and disabled rules live in external word files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::SyncContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} Could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let context = SyncContext::from_cli(&cli);

    match cli.command {
        Some(cmd) => execute_command(&context, cmd),
        None => {
            println!("{} LTeX+ word-file sync", "ltex-sync".green().bold());
            println!();
            println!("Run {} for available commands.", "ltex-sync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(context: &SyncContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Expand { json } => commands::run_expand(context, json),
        Commands::Add {
            scope,
            lang,
            entries,
            json,
        } => commands::run_add(context, &scope, &lang, &entries, json),
        Commands::Command { payload } => commands::run_command(context, &payload),
        Commands::Scopes => commands::run_scopes(context),
        Commands::Server { os, arch } => {
            commands::run_server(context, os.as_deref(), arch.as_deref())
        }
    }
}
