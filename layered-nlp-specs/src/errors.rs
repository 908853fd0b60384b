//! Error types for the fixture harness.
//!
//! This module defines error types for reading fixture files and the
//! expected-failures ledger.

use thiserror::Error;

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture or ledger file.
    #[error("parse error in {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    /// Error reading a fixture file or directory.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

impl SpecError {
    pub(crate) fn ron(path: &str, err: ron::error::SpannedError) -> Self {
        SpecError::Parse {
            path: path.to_string(),
            line: err.position.line,
            message: err.code.to_string(),
        }
    }
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
