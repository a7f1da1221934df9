// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result types.

use crate::cli::args::OutputFormat;
use crate::message::Field;
use console::style;

use super::named::NamedRule;

/// A single rule violation.
///
/// At most one violation is reported per invocation; linting halts at the
/// first failing field.
#[derive(Debug, Clone)]
pub enum Violation {
    /// The message did not decompose at all.
    Format,
    /// A field value failed its pattern rule.
    Pattern {
        field: Field,
        pattern: String,
        value: String,
    },
    /// A field value was not in its allowed set.
    Enum {
        field: Field,
        allowed: Vec<String>,
        value: String,
    },
    /// A field value failed a named rule.
    NamedRule {
        field: Field,
        rule: NamedRule,
        value: String,
    },
}

impl Violation {
    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Format => "format",
            Violation::Pattern { .. } => "pattern",
            Violation::Enum { .. } => "enum",
            Violation::NamedRule { .. } => "rule",
        }
    }

    /// The field the violation concerns, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Violation::Format => None,
            Violation::Pattern { field, .. }
            | Violation::Enum { field, .. }
            | Violation::NamedRule { field, .. } => Some(*field),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Format => {
                write!(f, "Commit message does not match the conventional commit format.")
            }
            Violation::Pattern { field, pattern, .. } => {
                write!(
                    f,
                    "Commit message {} does not match the regular expression {}.",
                    field, pattern
                )
            }
            Violation::Enum { field, allowed, .. } => {
                write!(
                    f,
                    "Commit message {} does not match the enum [{}].",
                    field,
                    allowed.join(", ")
                )
            }
            Violation::NamedRule { field, rule, .. } => {
                write!(f, "Commit message {} does not match the rule {}.", field, rule)
            }
        }
    }
}

/// Result of linting a commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The original message.
    pub message: String,
    /// The first violation found, if any.
    pub violation: Option<Violation>,
}

impl LintReport {
    /// Create a new, passing report.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            violation: None,
        }
    }

    /// Check if the lint passed.
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// Print the report.
    ///
    /// Text mode prints nothing on success and a single diagnostic to
    /// stderr on failure; JSON mode always prints to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        if let Some(ref violation) = self.violation {
            eprintln!("{} {}", style("✗").red().bold(), violation);
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "message": self.message,
            "violation": self.violation.as_ref().map(|v| {
                serde_json::json!({
                    "code": v.code(),
                    "field": v.field().map(|f| f.as_str()),
                    "message": v.to_string(),
                })
            }),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match self.violation {
            None => "Valid".to_string(),
            Some(ref v) => format!("Invalid ({})", v.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("feat: test");
        assert!(report.is_valid());
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_report_with_violation() {
        let mut report = LintReport::new("wip: test");
        report.violation = Some(Violation::Enum {
            field: Field::Type,
            allowed: vec!["feat".to_string(), "fix".to_string()],
            value: "wip".to_string(),
        });

        assert!(!report.is_valid());
        assert!(report.summary().contains("Invalid"));
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::Enum {
            field: Field::Type,
            allowed: vec!["fix".to_string()],
            value: "feat".to_string(),
        };
        let text = violation.to_string();
        assert!(text.contains("type"));
        assert!(text.contains("[fix]"));

        let violation = Violation::NamedRule {
            field: Field::Description,
            rule: NamedRule::Lowercase,
            value: "breaking change".to_string(),
        };
        assert!(violation.to_string().contains("the rule lowercase"));

        assert!(Violation::Format
            .to_string()
            .contains("conventional commit format"));
    }

    #[test]
    fn test_violation_codes() {
        assert_eq!(Violation::Format.code(), "format");
        assert_eq!(Violation::Format.field(), None);

        let violation = Violation::Pattern {
            field: Field::Description,
            pattern: ".+".to_string(),
            value: String::new(),
        };
        assert_eq!(violation.code(), "pattern");
        assert_eq!(violation.field(), Some(Field::Description));
    }
}
