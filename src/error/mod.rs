// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmlint application.
//!
//! Configuration problems are errors; a commit message failing its rules is
//! not. Lint failures are reported through [`crate::rules::LintReport`] so
//! the CLI can decide how to surface them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown named rule '{name}' for field '{field}'")]
    UnknownRule { field: String, name: String },

    #[error("Invalid rule for field '{field}': {message}")]
    InvalidRule { field: String, message: String },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
