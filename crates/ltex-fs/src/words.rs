//! Word-list files and their modification-time keyed cache
//!
//! A word file is UTF-8 text with one entry per line. Blank lines and
//! lines starting with `#` are ignored. The cache keeps the parsed set for
//! each path and only re-reads a file when its modification time differs
//! from the one recorded at the last read or write.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use crate::{NormalizedPath, Result, io};

/// Parse word-file content into its set of entries.
pub fn parse_words(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter_map(normalize_entry)
        .map(str::to_string)
        .collect()
}

/// Trim an entry, rejecting blanks and comments.
fn normalize_entry(raw: &str) -> Option<&str> {
    let entry = raw.trim();
    if entry.is_empty() || entry.starts_with('#') {
        None
    } else {
        Some(entry)
    }
}

#[derive(Debug)]
struct CacheEntry {
    /// `None` when the file was absent at the last check.
    modified: Option<SystemTime>,
    words: BTreeSet<String>,
}

/// Counters describing how the cache served requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from memory without reading the file.
    pub hits: usize,
    /// Lookups that (re-)read the file or found it absent.
    pub reads: usize,
    /// Appends that wrote at least one entry.
    pub writes: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<NormalizedPath, CacheEntry>,
    stats: CacheStats,
}

/// Cache of parsed word files, keyed by path.
///
/// One instance is shared by the settings expander and the sync writer.
/// A single lock serializes every check-then-act sequence, so two appends
/// to the same file cannot both see a word as missing and write it twice.
#[derive(Debug, Default)]
pub struct WordFileCache {
    state: Mutex<CacheState>,
}

impl WordFileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current word set for `path`.
    ///
    /// A missing or unreadable file yields an empty set; read failures are
    /// logged and never propagated.
    pub fn load(&self, path: &NormalizedPath) -> BTreeSet<String> {
        let mut state = self.lock();
        refresh(&mut state, path).words.clone()
    }

    /// Append the entries not yet present in `path`.
    ///
    /// Entries are trimmed; blanks, comments, entries already in the file
    /// and duplicates within `entries` are skipped. Returns exactly the
    /// entries written, in input order. When nothing is new the file is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be appended to. The cache is only updated after a
    /// successful write, so a failure leaves it matching the disk.
    pub fn append<S: AsRef<str>>(
        &self,
        path: &NormalizedPath,
        entries: &[S],
    ) -> Result<Vec<String>> {
        let mut state = self.lock();

        let existing = &refresh(&mut state, path).words;
        let mut pending: BTreeSet<&str> = BTreeSet::new();
        let mut added = Vec::new();
        for entry in entries.iter().filter_map(|e| normalize_entry(e.as_ref())) {
            if existing.contains(entry) || !pending.insert(entry) {
                continue;
            }
            added.push(entry.to_string());
        }

        if added.is_empty() {
            tracing::debug!(%path, "No new entries to append");
            return Ok(added);
        }

        io::append_lines(path, &added)?;

        let modified = io::modified_time(path);
        let entry = state
            .entries
            .entry(path.clone())
            .or_insert_with(|| CacheEntry {
                modified: None,
                words: BTreeSet::new(),
            });
        entry.words.extend(added.iter().cloned());
        entry.modified = modified;
        state.stats.writes += 1;

        tracing::info!(%path, count = added.len(), "Appended entries to word file");
        Ok(added)
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Number of paths currently cached.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Cached sets are replaced wholesale, so a poisoned guard still holds valid data
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Bring the entry for `path` up to date with the disk and return it.
fn refresh<'a>(state: &'a mut CacheState, path: &NormalizedPath) -> &'a CacheEntry {
    let modified = io::modified_time(path);

    let fresh = state
        .entries
        .get(path)
        .is_some_and(|entry| entry.modified == modified);

    if fresh {
        state.stats.hits += 1;
    } else {
        state.stats.reads += 1;
        let words = match modified {
            Some(_) => read_words(path),
            None => BTreeSet::new(),
        };
        tracing::debug!(%path, count = words.len(), "Loaded word file");
        state
            .entries
            .insert(path.clone(), CacheEntry { modified, words });
    }

    &state.entries[path]
}

fn read_words(path: &NormalizedPath) -> BTreeSet<String> {
    match io::read_text(path) {
        Ok(content) => parse_words(&content),
        Err(e) if e.is_not_found() => BTreeSet::new(),
        Err(e) => {
            tracing::warn!(%path, error = %e, "Unreadable word file, treating it as empty");
            BTreeSet::new()
        }
    }
}
