// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration structures that can be loaded from cmlint.toml.
//! Rule shapes are kept raw here; they are compiled into the closed
//! [`crate::rules::FieldRule`] form before validation starts.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cmlint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmlintConfig {
    /// Per-field commit message rules.
    pub commit_msg: CommitMsgConfig,
}

impl CmlintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Per-field rule configuration for the commit message.
///
/// Each field accepts exactly one rule shape: a regex `pattern`, an `enum`
/// of allowed values, or a list of named `rules` from the fixed registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMsgConfig {
    /// Rule for the commit type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<RawFieldRule>,

    /// Rule for the scope (checked only when a scope is present).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<RawFieldRule>,

    /// Rule for the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RawFieldRule>,
}

impl Default for CommitMsgConfig {
    fn default() -> Self {
        Self {
            commit_type: Some(RawFieldRule::enumeration(
                super::default::CONVENTIONAL_TYPES
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            )),
            scope: None,
            description: None,
        }
    }
}

/// A field rule as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawFieldRule {
    /// A regular expression the field value must satisfy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// A set of allowed exact values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,

    /// An ordered list of named rule identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
}

impl RawFieldRule {
    /// Create a pattern rule.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Create an enum rule.
    pub fn enumeration(allowed: Vec<String>) -> Self {
        Self {
            allowed: Some(allowed),
            ..Self::default()
        }
    }

    /// Create a named-rules rule.
    pub fn named(rules: Vec<String>) -> Self {
        Self {
            rules: Some(rules),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_constrains_type() {
        let config = CmlintConfig::default();
        let rule = config.commit_msg.commit_type.unwrap();
        assert!(rule.allowed.unwrap().contains(&"feat".to_string()));
        assert!(config.commit_msg.scope.is_none());
        assert!(config.commit_msg.description.is_none());
    }

    #[test]
    fn test_raw_rule_constructors() {
        let rule = RawFieldRule::pattern("^.+$");
        assert!(rule.pattern.is_some());
        assert!(rule.allowed.is_none());

        let rule = RawFieldRule::named(vec!["lowercase".to_string()]);
        assert_eq!(rule.rules.unwrap(), vec!["lowercase"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = CmlintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("commit_msg"));
        assert!(toml_str.contains("feat"));
    }
}
