//! Centralized error handling for jobviz.
//!
//! Startup failures (missing dataset, missing column, unreadable config) are
//! reported through [`JobvizError`]. Everything after load is total: an empty
//! filter result is an empty chart, never an error.
//!
//! ```no_run
//! use jobviz::error::{Result, ResultExt as _};
//!
//! fn read_settings(path: &str) -> Result<String> {
//!     let text = std::fs::read_to_string(path).context("Failed to read settings")?;
//!     Ok(text)
//! }
//! ```

use std::fmt;

/// Main error type for jobviz operations.
#[derive(Debug)]
pub enum JobvizError {
    /// I/O errors (file operations)
    Io(std::io::Error),

    /// Data processing errors (Polars, parsing, etc.)
    DataProcessing(String),

    /// The dataset lacks a column the dashboard depends on
    MissingColumn(String),

    /// File not found or invalid path
    InvalidPath(String),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for JobvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::MissingColumn(name) => write!(f, "Dataset is missing required column '{name}'"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for JobvizError {}

impl From<std::io::Error> for JobvizError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for JobvizError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for JobvizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for JobvizError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for jobviz operations.
pub type Result<T> = std::result::Result<T, JobvizError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<JobvizError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: JobvizError = e.into();
            JobvizError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: JobvizError = e.into();
            JobvizError::Other(format!("{}: {}", f(), err))
        })
    }
}
