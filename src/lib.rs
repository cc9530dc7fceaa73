// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-rules - Commit message lint rules
//!
//! Enforces a maximum line length on commit bodies, except for
//! dependency-update commits (`chore(deps)` and `chore(deps-dev)`).
//!
//! # Features
//!
//! - **Exception Rule**: `function-rules/body-max-line-length`, a pure
//!   predicate over a parsed commit
//! - **Typed Registry**: rule names resolved once into severity, polarity and
//!   check descriptors
//! - **Configuration**: TOML configuration mirroring the usual
//!   `extends`/`plugins`/`rules` layout
//!
//! # Example
//!
//! ```no_run
//! use commit_rules::config::LintConfig;
//! use commit_rules::commit::ParsedCommit;
//! use commit_rules::rules::RuleEngine;
//!
//! let config = LintConfig::load().unwrap();
//! let engine = RuleEngine::from_config(&config).unwrap();
//!
//! let commit = ParsedCommit::new("chore", "bump serde").with_scope("deps");
//! assert!(engine.validate(&commit).is_valid());
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::ParsedCommit;
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use rules::{RuleEngine, RuleRegistry, RuleVerdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-rules.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match GIT_SHA {
            Some(sha) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            None => VERSION.to_string(),
        }
    }
}
