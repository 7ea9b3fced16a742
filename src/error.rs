//! Error types.
//!
//! Generation itself is infallible; errors come from the store's
//! preconditions and from loading configuration.

use thiserror::Error;

/// Errors raised by [`TimetableStore`](crate::store::TimetableStore).
#[derive(Debug, Error)]
pub enum TimetableError {
    /// Generation requested with an empty subject catalogue.
    #[error("No subjects to schedule")]
    NoSubjects,

    /// Generation requested with an empty staff roster.
    #[error("No staff available")]
    NoStaff,

    /// Update targeted a subject id that is not stored.
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    /// Update targeted a staff id that is not stored.
    #[error("Staff not found: {0}")]
    StaffNotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
