//! Structured error types for folio-core.
//!
//! Uses `thiserror` so library consumers get composable errors. The
//! `folio` binary wraps these in `anyhow` with extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio-core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing failed
    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// TOML parsing failed
    #[error("TOML error in {context}: {source}")]
    Toml {
        context: String,
        source: toml::de::Error,
    },

    /// A date field could not be parsed
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Catalog file extension is not one we know how to read
    #[error("Unsupported catalog format {path:?} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a TOML error with context
    pub fn toml(context: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Toml {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::invalid_date("2024-13-01", "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-01': month out of range"
        );

        let err = FolioError::unsupported_format("/tmp/catalog.yaml");
        assert!(err.to_string().contains("Unsupported catalog format"));
        assert!(err.to_string().contains("/tmp/catalog.yaml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let folio_err: FolioError = io_err.into();

        assert!(matches!(folio_err, FolioError::Io { .. }));
    }
}
