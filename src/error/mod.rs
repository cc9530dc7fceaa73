// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-rules.
//!
//! Rule verdicts are plain values and never surface here. These errors cover
//! loading configuration and resolving rule references into a registry.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-rules operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Rule resolution errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    // Commit parsing errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while building a rule registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown base rule set: '{name}'")]
    UnknownBaseRuleSet { name: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Unknown function rule: '{name}'")]
    UnknownFunctionRule { name: String },

    #[error("Rule '{rule}' requires plugin '{plugin}' which is not loaded")]
    PluginNotLoaded { rule: String, plugin: String },

    #[error("Invalid rule severity: {level} (expected 0, 1 or 2)")]
    InvalidSeverity { level: u8 },
}

/// Commit-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to parse commit message: {message}")]
    ParseFailed { message: String },
}

/// Result type alias for commit-rules operations.
pub type Result<T> = std::result::Result<T, LintError>;
