// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit message validation.
//!
//! This module holds the named rule registry, the compiled per-field
//! rules, and the engine that applies them to a decomposed message.

mod engine;
mod field;
mod named;
mod report;

pub use engine::LintEngine;
pub use field::{FieldRule, RuleSet};
pub use named::NamedRule;
pub use report::{LintReport, Violation};
