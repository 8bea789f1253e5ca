//! Comparator: Rule-based page equivalence with first-match-wins semantics
//!
//! The `Comparator` is the entry point for equality decisions. It holds an
//! ordered list of rules and asks each, in order, whether it certifies a pair.

use crate::{ComparatorError, EqualTrace, Page, Rule, RuleStep};

/// Decides whether two pages are the same page under a set of rules.
///
/// # Decision
///
/// 1. No rules registered: strict structural equality ([`Page::equal`]).
/// 2. Otherwise, rules are tried in registration order. The first rule that
///    matches both pages and whose keys carry equal values on both sides
///    returns `true`.
/// 3. No rule certifies the pair: `false`.
///
/// Rules are OR-combined. Order never changes the answer, only how many rules
/// are evaluated before it is known.
///
/// # Lifecycle
///
/// Build-then-read: [`add_rule`](Self::add_rule) takes `&mut self`,
/// [`equal`](Self::equal) takes `&self`. A finished comparator is
/// `Send + Sync` and can be shared (e.g. behind an `Arc`) by concurrent readers.
///
/// # Example
///
/// ```
/// use pagecomp::prelude::*;
///
/// let mut comparator = Comparator::new();
/// comparator.add_rule("/users/:id", &[]).unwrap();
///
/// let a = Page::from_path("/users/123");
/// let b = Page::from_path("/users/456");
/// assert!(comparator.equal(&a, &b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    rules: Vec<Rule>,
}

impl Comparator {
    /// Create a comparator with no rules (strict equality).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and register a rule.
    ///
    /// On success the rule is appended after all previously registered rules.
    /// Identical rules may be registered more than once.
    ///
    /// # Errors
    ///
    /// Returns the compile error; the rule set is left unchanged.
    pub fn add_rule(&mut self, template: &str, param_keys: &[&str]) -> Result<(), ComparatorError> {
        let rule = Rule::new(template, param_keys)?;
        tracing::debug!(
            index = self.rules.len(),
            template,
            param_keys = ?rule.param_keys(),
            "registered page rule"
        );
        self.rules.push(rule);
        Ok(())
    }

    /// Builder form of [`add_rule`](Self::add_rule).
    ///
    /// ```
    /// use pagecomp::Comparator;
    ///
    /// let comparator = Comparator::new()
    ///     .with_rule("/a/:id", &[])?
    ///     .with_rule("/search", &["q"])?;
    /// assert_eq!(comparator.len(), 2);
    /// # Ok::<(), pagecomp::ComparatorError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the compile error.
    pub fn with_rule(mut self, template: &str, param_keys: &[&str]) -> Result<Self, ComparatorError> {
        self.add_rule(template, param_keys)?;
        Ok(self)
    }

    /// Append an already compiled rule.
    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Decide whether `a` and `b` are the same page.
    ///
    /// Total: never fails. With rules registered, two structurally identical
    /// pages are still `false` unless some rule certifies them. A rule with
    /// required keys cannot fire for pages lacking those keys; register a
    /// catch-all rule (no keys) if identity should always count.
    #[must_use]
    pub fn equal(&self, a: &Page, b: &Page) -> bool {
        if self.rules.is_empty() {
            return a.equal(b);
        }
        self.find_rule(a, b).is_some()
    }

    /// The first rule certifying `a` and `b`, with its index.
    ///
    /// Always `None` when no rules are registered.
    #[must_use]
    pub fn find_rule(&self, a: &Page, b: &Page) -> Option<(usize, &Rule)> {
        let found = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.certifies(a, b));

        if let Some((index, rule)) = found {
            tracing::trace!(index, template = rule.template(), "rule certified page pair");
        }
        found
    }

    /// Evaluate with a full trace for debugging.
    ///
    /// `trace.result` always equals [`equal`](Self::equal) for the same pair.
    #[must_use]
    pub fn equal_with_trace(&self, a: &Page, b: &Page) -> EqualTrace {
        if self.rules.is_empty() {
            return EqualTrace {
                result: a.equal(b),
                steps: Vec::new(),
                used_fallback: true,
            };
        }

        let mut steps = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let matched_a = rule.matches(a);
            let matched_b = rule.matches(b);
            let params_equal = (matched_a && matched_b).then(|| rule.params_equal(a, b));

            steps.push(RuleStep {
                index,
                template: rule.template().to_string(),
                matched_a,
                matched_b,
                params_equal,
            });

            if params_equal == Some(true) {
                return EqualTrace {
                    result: true,
                    steps,
                    used_fallback: false,
                };
            }
        }

        EqualTrace {
            result: false,
            steps,
            used_fallback: false,
        }
    }

    /// Registered rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Comparator {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
