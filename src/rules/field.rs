// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled per-field rules.
//!
//! Configuration rule shapes are resolved into this closed form once, at
//! load time. Unknown named rules or ambiguous shapes are configuration
//! errors, not lint failures.

use crate::config::{CmlintConfig, RawFieldRule};
use crate::error::{ConfigError, Result};
use crate::message::Field;
use regex::Regex;

use super::named::NamedRule;
use super::report::Violation;

/// A compiled rule for one commit message field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// The field value must satisfy the regex.
    Pattern(Regex),
    /// The field value must be one of the allowed values, exactly.
    Enum(Vec<String>),
    /// The field value must satisfy every named rule, in order.
    Named(Vec<NamedRule>),
}

impl FieldRule {
    /// Compile a raw configuration rule.
    pub fn from_raw(field: Field, raw: &RawFieldRule) -> Result<Self> {
        let shapes =
            raw.pattern.is_some() as usize + raw.allowed.is_some() as usize + raw.rules.is_some() as usize;
        if shapes != 1 {
            return Err(ConfigError::InvalidRule {
                field: field.as_str().to_string(),
                message: "rule must set exactly one of `pattern`, `enum`, `rules`".to_string(),
            }
            .into());
        }

        if let Some(ref pattern) = raw.pattern {
            let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidRule {
                field: field.as_str().to_string(),
                message: format!("invalid regular expression: {}", e),
            })?;
            return Ok(FieldRule::Pattern(regex));
        }

        if let Some(ref allowed) = raw.allowed {
            return Ok(FieldRule::Enum(allowed.clone()));
        }

        let names = raw.rules.as_ref().unwrap();
        let mut rules = Vec::with_capacity(names.len());
        for name in names {
            let rule = name.parse::<NamedRule>().map_err(|_| ConfigError::UnknownRule {
                field: field.as_str().to_string(),
                name: name.clone(),
            })?;
            rules.push(rule);
        }
        Ok(FieldRule::Named(rules))
    }

    /// Check a field value, returning the first violation if any.
    pub fn check(&self, field: Field, value: &str) -> Option<Violation> {
        match self {
            FieldRule::Pattern(regex) => {
                if regex.is_match(value) {
                    None
                } else {
                    Some(Violation::Pattern {
                        field,
                        pattern: regex.as_str().to_string(),
                        value: value.to_string(),
                    })
                }
            }
            FieldRule::Enum(allowed) => {
                if allowed.iter().any(|a| a == value) {
                    None
                } else {
                    Some(Violation::Enum {
                        field,
                        allowed: allowed.clone(),
                        value: value.to_string(),
                    })
                }
            }
            FieldRule::Named(rules) => rules
                .iter()
                .find(|rule| !rule.is_match(value))
                .map(|rule| Violation::NamedRule {
                    field,
                    rule: *rule,
                    value: value.to_string(),
                }),
        }
    }
}

/// The compiled rules for every configured field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Rule for the commit type.
    pub commit_type: Option<FieldRule>,
    /// Rule for the scope.
    pub scope: Option<FieldRule>,
    /// Rule for the description.
    pub description: Option<FieldRule>,
}

impl RuleSet {
    /// Compile a rule set from the configuration, failing fast on
    /// malformed rules.
    pub fn from_config(config: &CmlintConfig) -> Result<Self> {
        let compile = |field: Field, raw: &Option<RawFieldRule>| -> Result<Option<FieldRule>> {
            raw.as_ref()
                .map(|r| FieldRule::from_raw(field, r))
                .transpose()
        };

        Ok(Self {
            commit_type: compile(Field::Type, &config.commit_msg.commit_type)?,
            scope: compile(Field::Scope, &config.commit_msg.scope)?,
            description: compile(Field::Description, &config.commit_msg.description)?,
        })
    }

    /// Get the rule configured for a field, if any.
    pub fn rule_for(&self, field: Field) -> Option<&FieldRule> {
        match field {
            Field::Type => self.commit_type.as_ref(),
            Field::Scope => self.scope.as_ref(),
            Field::Description => self.description.as_ref(),
        }
    }

    /// Iterate the configured rules in validation order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldRule)> {
        Field::all()
            .iter()
            .filter_map(|field| self.rule_for(*field).map(|rule| (*field, rule)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_pattern_rule() {
        let raw = RawFieldRule::pattern("^[a-z]+$");
        let rule = FieldRule::from_raw(Field::Description, &raw).unwrap();
        assert!(matches!(rule, FieldRule::Pattern(_)));
    }

    #[test]
    fn test_compile_rejects_bad_regex() {
        let raw = RawFieldRule::pattern("([unclosed");
        assert!(FieldRule::from_raw(Field::Description, &raw).is_err());
    }

    #[test]
    fn test_compile_rejects_empty_shape() {
        let raw = RawFieldRule::default();
        let err = FieldRule::from_raw(Field::Type, &raw).unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn test_compile_rejects_ambiguous_shape() {
        let raw = RawFieldRule {
            pattern: Some(".+".to_string()),
            allowed: Some(vec!["feat".to_string()]),
            rules: None,
        };
        assert!(FieldRule::from_raw(Field::Type, &raw).is_err());
    }

    #[test]
    fn test_compile_rejects_unknown_named_rule() {
        let raw = RawFieldRule::named(vec!["lowercase".to_string(), "shoutcase".to_string()]);
        let err = FieldRule::from_raw(Field::Description, &raw).unwrap_err();
        assert!(err.to_string().contains("shoutcase"));
    }

    #[test]
    fn test_enum_check_is_exact() {
        let rule = FieldRule::Enum(vec!["feat".to_string(), "fix".to_string()]);
        assert!(rule.check(Field::Type, "feat").is_none());
        assert!(rule.check(Field::Type, "Feat").is_some());
        assert!(rule.check(Field::Type, "feature").is_some());
    }

    #[test]
    fn test_named_check_stops_at_first_failure() {
        let rule = FieldRule::Named(vec![NamedRule::Lowercase, NamedRule::Kebabcase]);
        let violation = rule.check(Field::Scope, "foo-bar").unwrap();
        // lowercase fails before kebabcase is consulted
        assert!(violation.to_string().contains("lowercase"));
    }

    #[test]
    fn test_pattern_check() {
        let rule = FieldRule::Pattern(Regex::new("^add ").unwrap());
        assert!(rule.check(Field::Description, "add login").is_none());
        assert!(rule.check(Field::Description, "remove login").is_some());
    }

    #[test]
    fn test_ruleset_from_default_config() {
        let config = CmlintConfig::default();
        let rules = RuleSet::from_config(&config).unwrap();
        assert!(rules.commit_type.is_some());
        assert!(rules.scope.is_none());

        let fields: Vec<Field> = rules.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Type]);
    }
}
