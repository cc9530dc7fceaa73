// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Typed rule registry.
//!
//! Rule names from configuration are resolved once, when the registry is
//! built. Evaluation only ever sees [`RuleDescriptor`]s.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::commit::ParsedCommit;
use crate::config::{LintConfig, RulePolarity, RuleSetting, RuleSeverity};
use crate::error::{Result, RuleError};

use super::builtin::{self, BaseRuleSet};
use super::function::{self, RuleVerdict, FUNCTION_RULES_PLUGIN, FUNCTION_RULE_PREFIX};

/// A shared predicate backing a function rule.
///
/// The predicate receives the configured polarity and decides for itself
/// what `never` means; the engine never flips its verdict.
pub type RulePredicate = Arc<dyn Fn(&ParsedCommit, RulePolarity) -> RuleVerdict + Send + Sync>;

/// What a rule checks.
#[derive(Clone)]
pub enum RuleCheck {
    /// Plain body line length, no exemptions.
    BodyMaxLineLength { max: usize },
    /// A predicate registered through the function rules plugin.
    Function(RulePredicate),
}

impl RuleCheck {
    /// Run the check against a commit.
    ///
    /// Body line length ignores `polarity`.
    pub fn run(&self, commit: &ParsedCommit, polarity: RulePolarity) -> RuleVerdict {
        match self {
            RuleCheck::BodyMaxLineLength { max } => builtin::body_max_line_length(commit, *max),
            RuleCheck::Function(predicate) => predicate(commit, polarity),
        }
    }
}

impl fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCheck::BodyMaxLineLength { max } => f
                .debug_struct("BodyMaxLineLength")
                .field("max", max)
                .finish(),
            RuleCheck::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A registered rule: how it is reported and what it checks.
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    pub severity: RuleSeverity,
    pub polarity: RulePolarity,
    pub check: RuleCheck,
}

impl RuleDescriptor {
    /// Create a new descriptor.
    pub fn new(severity: RuleSeverity, polarity: RulePolarity, check: RuleCheck) -> Self {
        Self {
            severity,
            polarity,
            check,
        }
    }

    /// Create an error-level, always-polarity rule backed by a predicate.
    pub fn function<F>(predicate: F) -> Self
    where
        F: Fn(&ParsedCommit, RulePolarity) -> RuleVerdict + Send + Sync + 'static,
    {
        Self::new(
            RuleSeverity::Error,
            RulePolarity::Always,
            RuleCheck::Function(Arc::new(predicate)),
        )
    }

    /// Evaluate the rule, handing it the configured polarity.
    pub fn evaluate(&self, commit: &ParsedCommit) -> RuleVerdict {
        self.check.run(commit, self.polarity)
    }
}

/// Mapping from rule name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleDescriptor>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configuration.
    ///
    /// Base sets from `extends` are loaded first, then `rules` overrides are
    /// applied on top.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        let mut registry = Self::new();

        for name in &config.extends {
            let base = BaseRuleSet::from_name(name)?;
            tracing::debug!("Extending base rule set: {}", name);
            for (rule, descriptor) in base.rules() {
                registry.register(rule, descriptor);
            }
        }

        for (name, setting) in &config.rules {
            match name.strip_prefix(FUNCTION_RULE_PREFIX) {
                Some(function_name) => {
                    registry.apply_function_rule(name, function_name, setting, config)?
                }
                None => registry.apply_plain_rule(name, setting)?,
            }
        }

        tracing::debug!(
            total = registry.len(),
            enabled = registry.enabled().count(),
            "Built rule registry"
        );

        Ok(registry)
    }

    fn apply_plain_rule(&mut self, name: &str, setting: &RuleSetting) -> Result<()> {
        if let Some(existing) = self.rules.get_mut(name) {
            existing.severity = setting.severity;
            if let Some(polarity) = setting.polarity {
                existing.polarity = polarity;
            }
            if let (Some(value), RuleCheck::BodyMaxLineLength { max }) =
                (setting.value, &mut existing.check)
            {
                *max = value;
            }
            tracing::trace!("Overrode rule {} to {:?}", name, setting);
            return Ok(());
        }

        let check = builtin::plain_rule(name, setting.value).ok_or_else(|| RuleError::UnknownRule {
            name: name.to_string(),
        })?;

        self.register(
            name,
            RuleDescriptor::new(setting.severity, setting.polarity.unwrap_or_default(), check),
        );
        Ok(())
    }

    fn apply_function_rule(
        &mut self,
        name: &str,
        function_name: &str,
        setting: &RuleSetting,
        config: &LintConfig,
    ) -> Result<()> {
        if !config
            .plugins
            .iter()
            .any(|plugin| function::is_function_rules_plugin(plugin))
        {
            return Err(RuleError::PluginNotLoaded {
                rule: name.to_string(),
                plugin: FUNCTION_RULES_PLUGIN.to_string(),
            }
            .into());
        }

        let max = setting.value.unwrap_or(config.body_max_line_length);
        let predicate =
            function::resolve(function_name, max).ok_or_else(|| RuleError::UnknownFunctionRule {
                name: name.to_string(),
            })?;

        self.register(
            name,
            RuleDescriptor::new(
                setting.severity,
                setting.polarity.unwrap_or_default(),
                RuleCheck::Function(predicate),
            ),
        );
        Ok(())
    }

    /// Register a rule, replacing any rule with the same name.
    pub fn register(&mut self, name: impl Into<String>, descriptor: RuleDescriptor) {
        let name = name.into();
        tracing::trace!("Registering rule {} ({:?})", name, descriptor.severity);
        self.rules.insert(name, descriptor);
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&RuleDescriptor> {
        self.rules.get(name)
    }

    /// Iterate over all rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDescriptor)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Iterate over rules that are not turned off.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &RuleDescriptor)> {
        self.iter().filter(|(_, rule)| rule.severity.is_enabled())
    }

    /// Number of registered rules, including disabled ones.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;

    const FUNCTION_RULE: &str = "function-rules/body-max-line-length";

    #[test]
    fn test_default_config_registry() {
        let registry = RuleRegistry::from_config(&LintConfig::default()).unwrap();
        assert_eq!(registry.len(), 2);

        let plain = registry.get("body-max-line-length").unwrap();
        assert_eq!(plain.severity, RuleSeverity::Off);

        let function_rule = registry.get(FUNCTION_RULE).unwrap();
        assert_eq!(function_rule.severity, RuleSeverity::Error);
        assert_eq!(function_rule.polarity, RulePolarity::Always);

        let enabled: Vec<_> = registry.enabled().map(|(name, _)| name).collect();
        assert_eq!(enabled, vec![FUNCTION_RULE]);
    }

    #[test]
    fn test_function_rule_uses_configured_maximum() {
        let config = LintConfig {
            body_max_line_length: 20,
            ..LintConfig::default()
        };
        let registry = RuleRegistry::from_config(&config).unwrap();
        let rule = registry.get(FUNCTION_RULE).unwrap();

        let commit = ParsedCommit::new("feat", "x").with_body("y".repeat(21));
        let verdict = rule.evaluate(&commit);
        assert!(!verdict.valid);
        assert!(verdict.message.contains("20"));
    }

    #[test]
    fn test_function_rule_value_overrides_maximum() {
        let mut config = LintConfig::default();
        config.rules.insert(
            FUNCTION_RULE.to_string(),
            RuleSetting::new(RuleSeverity::Error)
                .with_polarity(RulePolarity::Always)
                .with_value(5),
        );
        let registry = RuleRegistry::from_config(&config).unwrap();

        let commit = ParsedCommit::new("feat", "x").with_body("y".repeat(6));
        assert!(!registry.get(FUNCTION_RULE).unwrap().evaluate(&commit).valid);
    }

    #[test]
    fn test_plain_rule_override_keeps_base_value() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "body-max-line-length".to_string(),
            RuleSetting::new(RuleSeverity::Warning),
        );
        let registry = RuleRegistry::from_config(&config).unwrap();

        let rule = registry.get("body-max-line-length").unwrap();
        assert_eq!(rule.severity, RuleSeverity::Warning);
        assert!(matches!(rule.check, RuleCheck::BodyMaxLineLength { max: 100 }));
    }

    #[test]
    fn test_plain_rule_without_base_set() {
        let config = LintConfig {
            extends: Vec::new(),
            ..LintConfig::default()
        };
        let registry = RuleRegistry::from_config(&config).unwrap();
        assert_eq!(
            registry.get("body-max-line-length").unwrap().severity,
            RuleSeverity::Off
        );
    }

    #[test]
    fn test_missing_plugin() {
        let config = LintConfig {
            plugins: Vec::new(),
            ..LintConfig::default()
        };
        let err = RuleRegistry::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            LintError::Rule(RuleError::PluginNotLoaded { .. })
        ));
    }

    #[test]
    fn test_unknown_names() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "function-rules/subject-shout".to_string(),
            RuleSetting::new(RuleSeverity::Error),
        );
        let err = RuleRegistry::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            LintError::Rule(RuleError::UnknownFunctionRule { .. })
        ));

        let mut config = LintConfig::default();
        config
            .rules
            .insert("header-shout".to_string(), RuleSetting::new(RuleSeverity::Error));
        let err = RuleRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, LintError::Rule(RuleError::UnknownRule { .. })));

        let config = LintConfig {
            extends: vec!["config-angular".to_string()],
            ..LintConfig::default()
        };
        let err = RuleRegistry::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            LintError::Rule(RuleError::UnknownBaseRuleSet { .. })
        ));
    }

    #[test]
    fn test_never_polarity_is_ignored_by_body_rules() {
        let plain = RuleDescriptor::new(
            RuleSeverity::Error,
            RulePolarity::Never,
            RuleCheck::BodyMaxLineLength { max: 10 },
        );
        let short = ParsedCommit::new("feat", "x").with_body("short");
        let long = ParsedCommit::new("feat", "x").with_body("y".repeat(11));
        assert!(plain.evaluate(&short).valid);
        assert!(!plain.evaluate(&long).valid);

        let mut config = LintConfig::default();
        config.rules.insert(
            FUNCTION_RULE.to_string(),
            RuleSetting::new(RuleSeverity::Error).with_polarity(RulePolarity::Never),
        );
        let registry = RuleRegistry::from_config(&config).unwrap();
        let rule = registry.get(FUNCTION_RULE).unwrap();
        assert_eq!(rule.polarity, RulePolarity::Never);

        let short = ParsedCommit::new("feat", "x").with_body("short");
        let long = ParsedCommit::new("feat", "x").with_body("y".repeat(1001));
        assert!(rule.evaluate(&short).valid);
        assert!(!rule.evaluate(&long).valid);
    }

    #[test]
    fn test_register_custom_predicate() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());

        registry.register(
            "function-rules/no-wip",
            RuleDescriptor::function(|commit: &ParsedCommit, _: RulePolarity| {
                RuleVerdict::new(commit.commit_type != "wip", "wip commits are not allowed")
            }),
        );

        let rule = registry.get("function-rules/no-wip").unwrap();
        assert!(!rule.evaluate(&ParsedCommit::new("wip", "stuff")).valid);
        assert!(rule.evaluate(&ParsedCommit::new("feat", "stuff")).valid);
    }

    #[test]
    fn test_custom_predicate_receives_polarity() {
        let descriptor = RuleDescriptor::new(
            RuleSeverity::Error,
            RulePolarity::Never,
            RuleCheck::Function(Arc::new(|commit: &ParsedCommit, when: RulePolarity| {
                let has_scope = commit.scope.is_some();
                let valid = match when {
                    RulePolarity::Always => has_scope,
                    RulePolarity::Never => !has_scope,
                };
                RuleVerdict::new(valid, "scope rule")
            })),
        );

        assert!(descriptor.evaluate(&ParsedCommit::new("feat", "x")).valid);
        assert!(!descriptor
            .evaluate(&ParsedCommit::new("feat", "x").with_scope("core"))
            .valid);
    }
}
