// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Base rule sets and the plain rules they contribute.

use crate::commit::ParsedCommit;
use crate::config::{RulePolarity, RuleSeverity};
use crate::error::RuleError;

use super::ensure;
use super::function::RuleVerdict;
use super::registry::{RuleCheck, RuleDescriptor};

/// Name of the plain body line length rule.
pub const BODY_MAX_LINE_LENGTH: &str = "body-max-line-length";

/// Body line length used by the conventional base set.
pub const CONVENTIONAL_BODY_MAX_LINE_LENGTH: usize = 100;

/// A named set of rules a configuration can extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRuleSet {
    ConfigConventional,
}

impl BaseRuleSet {
    /// Resolve a base set from its configured name.
    pub fn from_name(name: &str) -> Result<Self, RuleError> {
        match name {
            "config-conventional" | "@commitlint/config-conventional" => {
                Ok(BaseRuleSet::ConfigConventional)
            }
            _ => Err(RuleError::UnknownBaseRuleSet {
                name: name.to_string(),
            }),
        }
    }

    /// The rules this set contributes.
    pub fn rules(&self) -> Vec<(&'static str, RuleDescriptor)> {
        match self {
            BaseRuleSet::ConfigConventional => vec![(
                BODY_MAX_LINE_LENGTH,
                RuleDescriptor::new(
                    RuleSeverity::Error,
                    RulePolarity::Always,
                    RuleCheck::BodyMaxLineLength {
                        max: CONVENTIONAL_BODY_MAX_LINE_LENGTH,
                    },
                ),
            )],
        }
    }
}

/// Build the check for a plain rule name, if it is one we know.
pub fn plain_rule(name: &str, value: Option<usize>) -> Option<RuleCheck> {
    match name {
        BODY_MAX_LINE_LENGTH => Some(RuleCheck::BodyMaxLineLength {
            max: value.unwrap_or(CONVENTIONAL_BODY_MAX_LINE_LENGTH),
        }),
        _ => None,
    }
}

/// Message of the plain body line length rule.
pub fn plain_body_max_line_length_message(max: usize) -> String {
    format!("body's lines must not be longer than {} characters", max)
}

/// Check body line length with no exemptions.
pub fn body_max_line_length(commit: &ParsedCommit, max: usize) -> RuleVerdict {
    let valid = commit
        .body()
        .map_or(true, |body| body.is_empty() || ensure::max_line_length(body, max));

    RuleVerdict::new(valid, plain_body_max_line_length_message(max))
}
