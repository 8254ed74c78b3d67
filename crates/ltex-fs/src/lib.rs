//! Filesystem layer for ltex-sync
//!
//! Provides normalized paths, locked append and atomic write operations,
//! format-agnostic config loading, and the modification-time keyed
//! [`WordFileCache`] that backs external word lists.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod words;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use words::{CacheStats, WordFileCache, parse_words};
