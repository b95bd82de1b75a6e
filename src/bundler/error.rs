//! Error types for bundling operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bundling operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error with a formatted message
    #[error("{0}")]
    GenericError(String),

    /// IO errors without path context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// IO errors annotated with the operation and path that failed
    #[error("I/O error while {operation} at {path}: {source}")]
    Fs {
        /// What the bundler was doing
        operation: String,
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON errors (manifest and package metadata)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Template rendering errors
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Archive write errors
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Path prefix errors during tree copies and archiving
    #[error("Path error: {0}")]
    PathPrefixError(#[from] std::path::StripPrefixError),

    /// External bundler tool is not installed
    #[error("External tool not found: {tool}. {hint}")]
    ToolNotFound {
        /// Tool binary name
        tool: String,
        /// Installation hint
        hint: String,
    },
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($($arg)*)))
    };
}

/// Adds a message to `None` values and foreign errors, converting them
/// into [`Error::GenericError`].
pub trait Context<T> {
    /// Converts the value into a bundler [`Result`], attaching `msg` on failure.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attaches operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO result into a bundler [`Result`] with [`Error::Fs`] context.
    fn fs_context(self, operation: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, operation: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
