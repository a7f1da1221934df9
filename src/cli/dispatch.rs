// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.
//!
//! The lint engine only reports outcomes; mapping a report to process
//! exit codes happens here.

use crate::config::CmlintConfig;
use crate::error::{Result, ResultExt};

use super::args::{Cli, Commands};

/// Exit code for a passing lint.
pub const EXIT_OK: i32 = 0;
/// Exit code for a lint violation.
pub const EXIT_VIOLATION: i32 = 1;

/// Run the CLI with the given arguments, returning the exit code.
pub fn run(cli: Cli) -> Result<i32> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmlintConfig::load_from(config_path)?
    } else {
        CmlintConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CmlintConfig, args: super::args::CheckArgs) -> Result<i32> {
    use crate::rules::LintEngine;

    tracing::debug!("Running check command with args: {:?}", args);

    let engine = LintEngine::new(config)?;

    let raw = match args.message {
        Some(message) => message,
        None => std::fs::read_to_string(&args.file)
            .context(format!("Failed to read commit message from {}", args.file.display()))?,
    };

    let report = engine.lint(&raw);
    report.print(cli.format);

    if report.is_valid() {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_VIOLATION)
    }
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<i32> {
    use crate::config::example_config;
    use crate::error::{CmlintError, ConfigError};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cmlint.toml");

    if config_path.exists() && !args.force {
        return Err(CmlintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config())
        .context("Failed to write configuration")?;

    println!("✓ Created cmlint.toml");

    Ok(EXIT_OK)
}

/// Run the version command.
fn run_version() -> Result<i32> {
    println!("cmlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(EXIT_OK)
}
