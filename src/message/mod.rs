// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message decomposition.
//!
//! Splits the raw commit message text into its named structural fields.

mod decompose;

pub use decompose::{decompose, DecomposedMessage, Field};
