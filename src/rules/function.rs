// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Function-backed rules.
//!
//! These are plain predicates over a [`ParsedCommit`]. They never fail and
//! never log; a failed check is just an invalid [`RuleVerdict`].

use std::sync::Arc;

use crate::commit::ParsedCommit;
use crate::config::RulePolarity;

use super::ensure;
use super::registry::RulePredicate;

/// Plugin that enables function-backed rules.
pub const FUNCTION_RULES_PLUGIN: &str = "function-rules";

/// Names under which the function rules plugin may be listed.
const FUNCTION_RULES_PLUGIN_NAMES: &[&str] =
    &[FUNCTION_RULES_PLUGIN, "commitlint-plugin-function-rules"];

/// Prefix of rule names backed by a function.
pub const FUNCTION_RULE_PREFIX: &str = "function-rules/";

/// Commit type used by dependency-update commits.
const DEPS_TYPE: &str = "chore";

/// Scopes marking a dependency-update commit.
const DEPS_SCOPES: &[&str] = &["deps", "deps-dev"];

/// The outcome of a single rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    /// Whether the commit passed the check.
    pub valid: bool,
    /// Message shown when the check fails.
    pub message: String,
}

impl RuleVerdict {
    /// Create a new verdict.
    pub fn new(valid: bool, message: impl Into<String>) -> Self {
        Self {
            valid,
            message: message.into(),
        }
    }
}

/// Message of the dependency-aware body line length rule.
pub fn body_max_line_length_message(max: usize) -> String {
    format!("body's lines must not be longer than {}", max)
}

/// Whether the commit is a `chore(deps)` or `chore(deps-dev)` commit.
pub fn is_dependency_commit(commit: &ParsedCommit) -> bool {
    commit.commit_type == DEPS_TYPE
        && commit
            .scope()
            .is_some_and(|scope| DEPS_SCOPES.contains(&scope))
}

/// Check body line length, skipping dependency-update commits.
///
/// `chore(deps)` and `chore(deps-dev)` commits always pass, as does an
/// absent or empty body.
pub fn body_max_line_length_ignoring_deps(commit: &ParsedCommit, max: usize) -> RuleVerdict {
    let valid = is_dependency_commit(commit)
        || commit
            .body()
            .map_or(true, |body| body.is_empty() || ensure::max_line_length(body, max));

    RuleVerdict::new(valid, body_max_line_length_message(max))
}

/// Whether a plugin reference names the function rules plugin.
pub fn is_function_rules_plugin(name: &str) -> bool {
    FUNCTION_RULES_PLUGIN_NAMES.contains(&name)
}

/// Look up a function rule by name, bound to the given maximum.
///
/// The body line length rule reads the same under `always` and `never`.
pub fn resolve(name: &str, max: usize) -> Option<RulePredicate> {
    match name {
        "body-max-line-length" => Some(Arc::new(
            move |commit: &ParsedCommit, _when: RulePolarity| {
                body_max_line_length_ignoring_deps(commit, max)
            },
        )),
        _ => None,
    }
}
