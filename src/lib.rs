// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Conventional Commit Message Linter
//!
//! A small CLI tool that validates a single commit message against a
//! configurable set of conventional-commit rules.
//!
//! # Features
//!
//! - **Message Decomposition**: Splits `type(scope)!: description` into fields
//! - **Per-Field Rules**: Fixed pattern, allowed-value enum, or named format rules
//! - **Named Rule Registry**: lowercase, kebabcase, semver and friends
//! - **TOML Configuration**: Discovered from the repository or home directory
//!
//! # Example
//!
//! ```
//! use cmlint::config::CmlintConfig;
//! use cmlint::rules::LintEngine;
//!
//! let config = CmlintConfig::default();
//! let engine = LintEngine::new(&config).unwrap();
//!
//! let report = engine.lint("feat: add login");
//! assert!(report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::CmlintConfig;
pub use error::{CmlintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
