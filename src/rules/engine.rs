// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::ParsedCommit;
use crate::config::LintConfig;
use crate::error::Result;

use super::registry::RuleRegistry;
use super::validator::{ValidationIssue, ValidationResult};

/// Evaluates every enabled rule of a registry against a commit.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    registry: RuleRegistry,
}

impl RuleEngine {
    /// Create a new rule engine over a registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a rule engine with the rules described by a configuration.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        Ok(Self::new(RuleRegistry::from_config(config)?))
    }

    /// The registry this engine evaluates.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate a parsed commit.
    pub fn validate(&self, commit: &ParsedCommit) -> ValidationResult {
        let mut result = ValidationResult::new(commit.header());

        for (name, rule) in self.registry.enabled() {
            let verdict = rule.evaluate(commit);
            tracing::trace!(rule = name, valid = verdict.valid, "Evaluated rule");

            if !verdict.valid {
                result.push(ValidationIssue {
                    rule: name.to_string(),
                    message: verdict.message,
                    severity: rule.severity,
                });
            }
        }

        tracing::debug!("{}: {}", result.header, result.summary());
        result
    }

    /// Parse and validate a raw commit message.
    pub fn validate_message(&self, message: &str) -> Result<ValidationResult> {
        let commit = ParsedCommit::parse(message)?;
        Ok(self.validate(&commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RulePolarity, RuleSetting, RuleSeverity};

    fn default_engine() -> RuleEngine {
        RuleEngine::from_config(&LintConfig::default()).unwrap()
    }

    #[test]
    fn test_long_body_is_rejected() {
        let commit = ParsedCommit::new("feat", "add rule")
            .with_scope("core")
            .with_body("y".repeat(1001));

        let result = default_engine().validate(&commit);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule, "function-rules/body-max-line-length");
        assert!(result.errors[0].message.contains("1000"));
    }

    #[test]
    fn test_deps_commit_passes() {
        let commit = ParsedCommit::new("chore", "bump serde")
            .with_scope("deps")
            .with_body("x".repeat(5000));
        assert!(default_engine().validate(&commit).is_valid());
    }

    #[test]
    fn test_disabled_base_rule_is_skipped() {
        // Longer than the base rule's 100, shorter than 1000.
        let commit = ParsedCommit::new("fix", "wrap").with_body("z".repeat(500));
        let result = default_engine().validate(&commit);
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_warning_severity_keeps_commit_valid() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "function-rules/body-max-line-length".to_string(),
            RuleSetting::new(RuleSeverity::Warning).with_polarity(RulePolarity::Always),
        );
        let engine = RuleEngine::from_config(&config).unwrap();

        let commit = ParsedCommit::new("feat", "x").with_body("y".repeat(1001));
        let result = engine.validate(&commit);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_record_without_conventional_type_is_still_checked() {
        let engine = default_engine();

        let long = ParsedCommit::new("", "Update stuff").with_body("w".repeat(1001));
        assert!(!engine.validate(&long).is_valid());

        let short = ParsedCommit::new("", "Update stuff").with_body("fine");
        assert!(engine.validate(&short).is_valid());
    }

    #[test]
    fn test_validate_message() {
        let engine = default_engine();

        let long = format!("docs(readme): expand\n\n{}", "w".repeat(1001));
        assert!(!engine.validate_message(&long).unwrap().is_valid());

        let deps = format!("chore(deps-dev): bump tempfile\n\n{}", "w".repeat(1001));
        assert!(engine.validate_message(&deps).unwrap().is_valid());

        assert!(engine.validate_message("").is_err());
    }
}
