//! Error types for ltex-core

/// Result type for ltex-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ltex-core operations
///
/// Word-file problems never show up here: unreadable files expand to
/// nothing and failed appends are reported inside a sync outcome. Only a
/// failure to load or save the host settings is an error, because then a
/// user-requested change is lost.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host settings store could not be read or written
    #[error("Settings persistence failed: {message}")]
    Persistence { message: String },

    /// The host settings do not have the expected shape
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Filesystem error from ltex-fs
    #[error(transparent)]
    Fs(#[from] ltex_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}
