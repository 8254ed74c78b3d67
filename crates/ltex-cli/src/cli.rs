//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ltex-sync - Keep LTeX+ dictionaries and rule lists in plain text files
#[derive(Parser, Debug)]
#[command(name = "ltex-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// User-data root holding the default word-file directories
    #[arg(long, global = true, env = "LTEX_SYNC_DATA_ROOT")]
    pub data_root: Option<PathBuf>,

    /// Plugin settings file (defaults to LSP-ltex-plus.sublime-settings in the data root)
    #[arg(long, global = true, env = "LTEX_SYNC_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Directory where server releases are installed
    #[arg(long, global = true, env = "LTEX_SYNC_STORAGE")]
    pub storage: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the server settings with file markers replaced by file contents
    Expand {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Add entries to a scope, as a code action from the server would
    ///
    /// Examples:
    ///   ltex-sync add --scope dictionary --lang en-US LTeX Sublime
    ///   ltex-sync add --scope disabled-rules --lang de-DE GERMAN_SPELLER_RULE
    Add {
        /// Scope name (dictionary, hidden-false-positives, disabled-rules) or a settings key
        #[arg(short, long)]
        scope: String,

        /// Language tag the entries belong to
        #[arg(short, long)]
        lang: String,

        /// Entries to add
        #[arg(required = true)]
        entries: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Handle a raw server command given as JSON (use '-' to read stdin)
    ///
    /// Prints the messages to send back to the server as JSON.
    Command {
        /// Command object, e.g. {"command": "_ltex.addToDictionary", "arguments": [...]}
        payload: String,
    },

    /// List scopes with their enable state and word-file directories
    Scopes,

    /// Show where the language server lives and which archive to fetch
    Server {
        /// Operating system (defaults to the current one)
        #[arg(long)]
        os: Option<String>,

        /// CPU architecture (defaults to the current one)
        #[arg(long)]
        arch: Option<String>,
    },
}
