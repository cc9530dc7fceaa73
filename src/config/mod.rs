// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-rules.
//!
//! This module handles loading and parsing the lint configuration from
//! TOML files, falling back to the built-in defaults.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
