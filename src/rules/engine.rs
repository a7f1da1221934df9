// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint engine for commit message validation.

use crate::config::CmlintConfig;
use crate::error::Result;
use crate::message::decompose;

use super::field::RuleSet;
use super::report::{LintReport, Violation};

/// Lint engine for validating a commit message against compiled rules.
#[derive(Debug, Clone)]
pub struct LintEngine {
    rules: RuleSet,
}

impl LintEngine {
    /// Create a new engine from the configuration.
    ///
    /// Rule compilation happens here, so malformed configuration fails
    /// before any message is examined.
    pub fn new(config: &CmlintConfig) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::from_config(config)?,
        })
    }

    /// Create an engine from already-compiled rules.
    pub fn from_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Lint a raw commit message.
    ///
    /// The report passes iff the message decomposes and every configured
    /// field rule is satisfied. Linting halts at the first violation.
    pub fn lint(&self, raw: &str) -> LintReport {
        let mut report = LintReport::new(raw);

        let message = match decompose(raw) {
            Some(message) => message,
            None => {
                tracing::debug!("Message failed to decompose");
                report.violation = Some(Violation::Format);
                return report;
            }
        };

        for (field, rule) in self.rules.iter() {
            // A rule on an absent optional field (no scope in the
            // message) is skipped rather than failed.
            let value = match message.field(field) {
                Some(value) => value,
                None => continue,
            };

            if let Some(violation) = rule.check(field, value) {
                tracing::debug!("Field {} failed: {}", field, violation);
                report.violation = Some(violation);
                break;
            }
        }

        report
    }

    /// Convenience check: lint and return only the pass/fail outcome.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.lint(raw).is_valid()
    }
}
