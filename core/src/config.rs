//! Config types for comparator construction.
//!
//! These types mirror the runtime types but are serde-(de)serializable,
//! enabling config-driven comparator construction via
//! [`Comparator::from_config()`](crate::Comparator::from_config).
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`ComparatorConfig`] | [`Comparator`](crate::Comparator) | `Comparator::from_config()` |
//! | [`RuleConfig`] | [`Rule`](crate::Rule) | `RuleConfig::build()` |
//!
//! # Format
//!
//! ```yaml
//! rules:
//!   - path: /users/:id
//!   - path: /search
//!     params: [q]
//! ```

use crate::{Comparator, ComparatorError, Rule};
use serde::{Deserialize, Serialize};

/// Configuration for a [`Comparator`](crate::Comparator).
///
/// An empty (or absent) rule list yields a comparator with strict equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparatorConfig {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Configuration for a single [`Rule`](crate::Rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Path template, e.g. `/users/:id`.
    pub path: String,

    /// Required parameter keys (default: none).
    #[serde(default)]
    pub params: Vec<String>,
}

impl RuleConfig {
    /// Compile this config into a [`Rule`].
    ///
    /// # Errors
    ///
    /// Returns the compile error for the template.
    pub fn build(&self) -> Result<Rule, ComparatorError> {
        let keys: Vec<&str> = self.params.iter().map(String::as_str).collect();
        Rule::new(&self.path, &keys)
    }
}

impl From<&Rule> for RuleConfig {
    fn from(rule: &Rule) -> Self {
        Self {
            path: rule.template().to_string(),
            params: rule.param_keys().to_vec(),
        }
    }
}

impl Comparator {
    /// Build a comparator from configuration.
    ///
    /// All rules are compiled before the comparator exists: either every rule
    /// loads, or none does.
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError::InvalidRule`] naming the first rule that
    /// failed to compile.
    pub fn from_config(config: &ComparatorConfig) -> Result<Self, ComparatorError> {
        let comparator = config
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.build().map_err(|e| ComparatorError::InvalidRule {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Comparator, _>>()?;

        tracing::debug!(rules = comparator.len(), "loaded comparator config");
        Ok(comparator)
    }

    /// Render the rule set back to configuration.
    #[must_use]
    pub fn to_config(&self) -> ComparatorConfig {
        ComparatorConfig {
            rules: self.rules().iter().map(RuleConfig::from).collect(),
        }
    }
}

impl TryFrom<&ComparatorConfig> for Comparator {
    type Error = ComparatorError;

    fn try_from(config: &ComparatorConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}
