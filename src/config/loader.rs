// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and discovery.

use crate::error::{CmlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CmlintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cmlint_config = config_dir.join("cmlint").join("config.toml");
        if cmlint_config.exists() {
            return Some(cmlint_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CmlintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CmlintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CmlintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CmlintConfig> {
    toml::from_str(content).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        // An empty file falls back to the defaults.
        let config = parse_config("").unwrap();
        assert!(config.commit_msg.commit_type.is_some());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[commit_msg.type]
enum = ["feat", "fix"]

[commit_msg.description]
rules = ["lowercase"]
"#;
        let config = parse_config(toml).unwrap();
        let type_rule = config.commit_msg.commit_type.unwrap();
        assert_eq!(type_rule.allowed.unwrap(), vec!["feat", "fix"]);

        let desc_rule = config.commit_msg.description.unwrap();
        assert_eq!(desc_rule.rules.unwrap(), vec!["lowercase"]);
    }

    #[test]
    fn test_parse_pattern_rule() {
        let toml = r#"
[commit_msg.description]
pattern = "^[a-z].+$"
"#;
        let config = parse_config(toml).unwrap();
        let rule = config.commit_msg.description.unwrap();
        assert_eq!(rule.pattern.unwrap(), "^[a-z].+$");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let toml = r#"
[commit_msg.type]
regexp = "^feat$"
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/cmlint.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_file_from() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("cmlint.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("cmlint.toml"));
    }
}
