// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use std::fmt;

use crate::config::RuleSeverity;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the rule that failed.
    pub rule: String,
    /// Human-readable message from the rule.
    pub message: String,
    /// Severity the rule was registered with.
    pub severity: RuleSeverity,
}

impl ValidationIssue {
    /// Whether this issue fails the lint pass.
    pub fn is_error(&self) -> bool {
        self.severity == RuleSeverity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_error() { "✖" } else { "⚠" };
        write!(f, "{}   {} [{}]", prefix, self.message, self.rule)
    }
}

/// Result of validating one commit.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Header of the validated commit.
    pub header: String,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(header: String) -> Self {
        Self {
            header,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an issue under errors or warnings by its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        if issue.is_error() {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Render the result as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        let issue_json = |issue: &ValidationIssue| {
            serde_json::json!({
                "rule": issue.rule,
                "message": issue.message,
                "level": u8::from(issue.severity),
            })
        };

        serde_json::json!({
            "valid": self.is_valid(),
            "input": self.header,
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⧗   input: {}", self.header)?;
        for issue in self.errors.iter().chain(&self.warnings) {
            writeln!(f, "{}", issue)?;
        }
        write!(f, "{}", self.summary())
    }
}
