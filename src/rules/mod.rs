// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides the body line length rules, a typed registry that
//! maps rule names to descriptors, and the engine that evaluates them.

mod builtin;
pub mod ensure;
mod engine;
mod function;
mod registry;
mod validator;

pub use builtin::{body_max_line_length, BaseRuleSet, BODY_MAX_LINE_LENGTH};
pub use engine::RuleEngine;
pub use function::{
    body_max_line_length_ignoring_deps, is_dependency_commit, RuleVerdict, FUNCTION_RULES_PLUGIN,
    FUNCTION_RULE_PREFIX,
};
pub use registry::{RuleCheck, RuleDescriptor, RulePredicate, RuleRegistry};
pub use validator::{ValidationIssue, ValidationResult};
