//! Locked I/O operations
//!
//! Whole-file rewrites go through [`write_atomic`]; word lists only ever
//! grow, so they go through [`append_lines`] instead.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::SystemTime;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Append each line to a file, newline-terminated.
///
/// Creates the file (and its parent directories) if absent. The write
/// happens under an exclusive advisory lock so that two processes
/// appending to the same word list cannot interleave partial lines.
pub fn append_lines(path: &NormalizedPath, lines: &[String]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let mut buffer = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        buffer.push_str(line);
        buffer.push('\n');
    }

    file.write_all(buffer.as_bytes())
        .map_err(|e| Error::io(&native_path, e))?;
    file.flush().map_err(|e| Error::io(&native_path, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Modification time of a file, or `None` if it does not exist or
/// cannot be stat'ed.
pub fn modified_time(path: &NormalizedPath) -> Option<SystemTime> {
    fs::metadata(path.to_native())
        .and_then(|meta| meta.modified())
        .ok()
}
