// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The fixed registry of named format rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOWERCASE: Regex = Regex::new(r"^[a-z]+$").unwrap();
    static ref UPPERCASE: Regex = Regex::new(r"^[A-Z]+$").unwrap();
    static ref CAMELCASE: Regex = Regex::new(r"^[a-z]+([A-Z][a-z]+)*$").unwrap();
    static ref KEBABCASE: Regex = Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap();
    static ref SNAKECASE: Regex = Regex::new(r"^[a-z]+(_[a-z]+)*$").unwrap();
    static ref PASCALCASE: Regex = Regex::new(r"^[A-Z][a-z]+([A-Z][a-z]+)*$").unwrap();
    static ref SENTENCECASE: Regex = Regex::new(r"^[A-Z][a-z]+$").unwrap();
    static ref PHRASECASE: Regex = Regex::new(r"^[a-z]+.+[^.]$").unwrap();
    static ref SEMVER: Regex = Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$"
    ).unwrap();
}

/// A named format rule from the fixed registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedRule {
    Lowercase,
    Uppercase,
    Camelcase,
    Kebabcase,
    Snakecase,
    Pascalcase,
    Sentencecase,
    Phrasecase,
    Semver,
}

impl NamedRule {
    /// Get the string identifier of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedRule::Lowercase => "lowercase",
            NamedRule::Uppercase => "uppercase",
            NamedRule::Camelcase => "camelcase",
            NamedRule::Kebabcase => "kebabcase",
            NamedRule::Snakecase => "snakecase",
            NamedRule::Pascalcase => "pascalcase",
            NamedRule::Sentencecase => "sentencecase",
            NamedRule::Phrasecase => "phrasecase",
            NamedRule::Semver => "semver",
        }
    }

    /// Get the defining pattern for the rule.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            NamedRule::Lowercase => &LOWERCASE,
            NamedRule::Uppercase => &UPPERCASE,
            NamedRule::Camelcase => &CAMELCASE,
            NamedRule::Kebabcase => &KEBABCASE,
            NamedRule::Snakecase => &SNAKECASE,
            NamedRule::Pascalcase => &PASCALCASE,
            NamedRule::Sentencecase => &SENTENCECASE,
            NamedRule::Phrasecase => &PHRASECASE,
            NamedRule::Semver => &SEMVER,
        }
    }

    /// Check a value against the rule.
    pub fn is_match(&self, value: &str) -> bool {
        self.pattern().is_match(value)
    }

    /// Get all named rules.
    pub fn all() -> &'static [NamedRule] {
        &[
            NamedRule::Lowercase,
            NamedRule::Uppercase,
            NamedRule::Camelcase,
            NamedRule::Kebabcase,
            NamedRule::Snakecase,
            NamedRule::Pascalcase,
            NamedRule::Sentencecase,
            NamedRule::Phrasecase,
            NamedRule::Semver,
        ]
    }
}

impl std::str::FromStr for NamedRule {
    type Err = ();

    // Identifiers are matched exactly; the registry only defines
    // lowercase keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(NamedRule::Lowercase),
            "uppercase" => Ok(NamedRule::Uppercase),
            "camelcase" => Ok(NamedRule::Camelcase),
            "kebabcase" => Ok(NamedRule::Kebabcase),
            "snakecase" => Ok(NamedRule::Snakecase),
            "pascalcase" => Ok(NamedRule::Pascalcase),
            "sentencecase" => Ok(NamedRule::Sentencecase),
            "phrasecase" => Ok(NamedRule::Phrasecase),
            "semver" => Ok(NamedRule::Semver),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for NamedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
