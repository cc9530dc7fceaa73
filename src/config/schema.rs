// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commit-rules.toml.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ConfigError, RuleError};

/// Default maximum length of a commit body line.
pub const DEFAULT_BODY_MAX_LINE_LENGTH: usize = 1000;

/// The linting configuration.
///
/// Built once at startup and handed to [`crate::rules::RuleRegistry::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Base rule sets to inherit rules from.
    pub extends: Vec<String>,

    /// Plugins enabling extra rule kinds.
    pub plugins: Vec<String>,

    /// Maximum body line length for the dependency-aware body rule.
    pub body_max_line_length: usize,

    /// Rule overrides, keyed by rule name.
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Default for LintConfig {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "body-max-line-length".to_string(),
            RuleSetting::new(RuleSeverity::Off),
        );
        rules.insert(
            "function-rules/body-max-line-length".to_string(),
            RuleSetting::new(RuleSeverity::Error).with_polarity(RulePolarity::Always),
        );

        Self {
            extends: vec!["config-conventional".to_string()],
            plugins: vec!["function-rules".to_string()],
            body_max_line_length: DEFAULT_BODY_MAX_LINE_LENGTH,
            rules,
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_max_line_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "body_max_line_length".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        for (name, setting) in &self.rules {
            if setting.value == Some(0) {
                return Err(ConfigError::InvalidValue {
                    key: format!("rules.{}", name),
                    message: "rule value must be a positive integer".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// How a violated rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RuleSeverity {
    /// Rule is not evaluated.
    Off,
    /// Violations are reported as warnings.
    Warning,
    /// Violations fail the lint pass.
    Error,
}

impl RuleSeverity {
    /// Whether rules at this level are evaluated at all.
    pub fn is_enabled(&self) -> bool {
        *self != RuleSeverity::Off
    }
}

impl TryFrom<u8> for RuleSeverity {
    type Error = RuleError;

    fn try_from(level: u8) -> Result<Self, RuleError> {
        match level {
            0 => Ok(RuleSeverity::Off),
            1 => Ok(RuleSeverity::Warning),
            2 => Ok(RuleSeverity::Error),
            _ => Err(RuleError::InvalidSeverity { level }),
        }
    }
}

impl From<RuleSeverity> for u8 {
    fn from(severity: RuleSeverity) -> Self {
        match severity {
            RuleSeverity::Off => 0,
            RuleSeverity::Warning => 1,
            RuleSeverity::Error => 2,
        }
    }
}

/// Whether a rule's condition must always or never hold.
///
/// Passed through to the rule's check; each check decides what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePolarity {
    #[default]
    Always,
    Never,
}

/// A rule override as written in configuration: `[severity, polarity, value]`.
///
/// Only the severity is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSetting {
    pub severity: RuleSeverity,
    pub polarity: Option<RulePolarity>,
    pub value: Option<usize>,
}

impl RuleSetting {
    /// Create a setting with only a severity.
    pub fn new(severity: RuleSeverity) -> Self {
        Self {
            severity,
            polarity: None,
            value: None,
        }
    }

    /// Set the polarity.
    pub fn with_polarity(mut self, polarity: RulePolarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Set the rule value.
    pub fn with_value(mut self, value: usize) -> Self {
        self.value = Some(value);
        self
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match (self.polarity, self.value) {
            (_, Some(_)) => 3,
            (Some(_), None) => 2,
            (None, None) => 1,
        };

        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        if len > 1 {
            seq.serialize_element(&self.polarity.unwrap_or_default())?;
        }
        if let Some(value) = self.value {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SettingVisitor;

        impl<'de> Visitor<'de> for SettingVisitor {
            type Value = RuleSetting;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rule setting such as [2, \"always\", 100]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let severity = seq
                    .next_element::<RuleSeverity>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let polarity = seq.next_element::<RulePolarity>()?;
                let value = match polarity {
                    Some(_) => seq.next_element::<usize>()?,
                    None => None,
                };

                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleSetting {
                    severity,
                    polarity,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(SettingVisitor)
    }
}
