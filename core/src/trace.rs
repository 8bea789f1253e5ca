//! Evaluation trace types for debugging comparator decisions.
//!
//! [`EqualTrace`] mirrors [`Comparator::equal`](crate::Comparator::equal) but
//! records the decision path: which rules were tried, which page each rule
//! matched, and whether parameter values agreed.
//!
//! # Example
//!
//! ```
//! use pagecomp::prelude::*;
//!
//! let mut comparator = Comparator::new();
//! comparator.add_rule("/a/:id", &["x"]).unwrap();
//!
//! let a = Page::from_path("/a/1").with("x", "e1");
//! let b = Page::from_path("/a/2").with("x", "e2");
//! let trace = comparator.equal_with_trace(&a, &b);
//!
//! assert!(!trace.result);
//! assert_eq!(trace.steps[0].params_equal, Some(false));
//! ```

use std::fmt;

/// Trace of a full [`Comparator`](crate::Comparator) decision.
///
/// # INV: `result` == `equal()` result
///
/// The `result` field always equals what
/// [`Comparator::equal()`](crate::Comparator::equal) returns for the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualTrace {
    /// The final decision (identical to what `equal()` returns).
    pub result: bool,
    /// One entry per rule evaluated, in registration order.
    /// Stops after the first certifying rule (preserves first-match-wins).
    pub steps: Vec<RuleStep>,
    /// Whether the comparator had no rules and fell back to structural equality.
    pub used_fallback: bool,
}

impl EqualTrace {
    /// Index of the rule that certified the pair, if any.
    #[must_use]
    pub fn certified_by(&self) -> Option<usize> {
        self.steps.iter().find(|s| s.certified()).map(|s| s.index)
    }
}

impl fmt::Display for EqualTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.result { "equal" } else { "different" };
        if self.used_fallback {
            return write!(f, "{verdict} (no rules, structural equality)");
        }
        writeln!(f, "{verdict}")?;
        for step in &self.steps {
            writeln!(f, "  {step}")?;
        }
        Ok(())
    }
}

/// One rule's evaluation in a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStep {
    /// Position in the comparator's rule list (0-based).
    pub index: usize,
    /// The rule's path template.
    pub template: String,
    /// Did the rule match the first page?
    pub matched_a: bool,
    /// Did the rule match the second page?
    pub matched_b: bool,
    /// Did the values agree on the rule's keys?
    /// `None` when not reached because the rule missed a page.
    pub params_equal: Option<bool>,
}

impl RuleStep {
    /// Whether this rule certified the pair.
    #[must_use]
    pub fn certified(&self) -> bool {
        self.params_equal == Some(true)
    }
}

impl fmt::Display for RuleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule[{}] {}: a={} b={}",
            self.index, self.template, self.matched_a, self.matched_b
        )?;
        match self.params_equal {
            Some(true) => write!(f, " params=equal -> certified"),
            Some(false) => write!(f, " params=different"),
            None => Ok(()),
        }
    }
}
