// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CmlintConfig;

/// Commit types the default configuration allows.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "build", "ci",
];

/// Get the default configuration.
pub fn default_config() -> CmlintConfig {
    CmlintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmlint Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Each commit message field accepts exactly one rule shape:
#   pattern = "<regex>"            the value must satisfy the regex
#   enum = ["a", "b"]              the value must be one of these, exactly
#   rules = ["lowercase", ...]     the value must satisfy every named rule
#
# Named rules: lowercase, uppercase, camelcase, kebabcase, snakecase,
# pascalcase, sentencecase, phrasecase, semver

[commit_msg.type]
enum = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "build", "ci"]

[commit_msg.scope]
rules = ["kebabcase"]

[commit_msg.description]
rules = ["phrasecase"]
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(config.commit_msg.commit_type.is_some());
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: CmlintConfig = toml::from_str(example).expect("Example config should parse");
        assert!(config.commit_msg.scope.is_some());
        assert!(config.commit_msg.description.is_some());
    }
}
