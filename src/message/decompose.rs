// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Decomposing raw commit message text into named fields.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for decomposing `type(scope)!: description` messages.
    ///
    /// `type` is deliberately permissive: anything up to the optional
    /// scope/breaking marker and the `": "` separator. On ambiguous input
    /// like `a: b: c` the first separator wins, so the description keeps
    /// the remainder (`b: c`).
    static ref DECOMPOSE_REGEX: Regex = Regex::new(
        r"(?P<type>.+?)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<description>.+)"
    ).unwrap();
}

/// The fields a commit message decomposes into, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The change classification (`feat`, `fix`, ...).
    Type,
    /// The optional parenthesized area of the change.
    Scope,
    /// The free text after the separator.
    Description,
}

impl Field {
    /// Get the string representation of the field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Description => "description",
        }
    }

    /// All validatable fields, in validation order.
    pub fn all() -> &'static [Field] {
        &[Field::Type, Field::Scope, Field::Description]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A commit message decomposed into its named fields.
///
/// Exists only if the raw text matched the decomposition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedMessage {
    /// Commit type (everything before the scope/breaking marker).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Whether the breaking marker (`!`) was present.
    pub breaking: bool,
    /// Description (remainder of the line after `": "`).
    pub description: String,
}

impl DecomposedMessage {
    /// Get the value of a field, if present.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Type => Some(&self.commit_type),
            Field::Scope => self.scope.as_deref(),
            Field::Description => Some(&self.description),
        }
    }
}

/// Decompose raw commit message text into named fields.
///
/// Returns `None` when the text contains no `": "` separator reachable by
/// the pattern. Pure and deterministic; only the first line of a multi-line
/// message participates, since the pattern does not cross newlines.
pub fn decompose(raw: &str) -> Option<DecomposedMessage> {
    let captures = DECOMPOSE_REGEX.captures(raw)?;

    Some(DecomposedMessage {
        commit_type: captures["type"].to_string(),
        scope: captures.name("scope").map(|m| m.as_str().to_string()),
        breaking: captures.name("breaking").is_some(),
        description: captures["description"].to_string(),
    })
}
