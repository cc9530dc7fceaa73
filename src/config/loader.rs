// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commit-rules.toml",
    ".commit-rules.toml",
    ".config/commit-rules.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = find_in_ancestors(start_dir) {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let xdg_config = dirs::config_dir()?.join("commit-rules").join("config.toml");
    xdg_config.exists().then_some(xdg_config)
}

fn find_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Fields missing from the document keep their default values.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })?;

    config.validate()?;
    tracing::trace!(
        extends = ?config.extends,
        plugins = ?config.plugins,
        rules = config.rules.len(),
        "Parsed configuration"
    );

    Ok(config)
}
