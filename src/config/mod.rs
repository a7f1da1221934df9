// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module handles discovering, loading, and parsing configuration
//! from cmlint.toml files.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
