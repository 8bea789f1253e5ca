//! `Rule`: Path pattern + required parameter keys
//!
//! A rule describes one equivalence class of pages: pages whose path fits
//! the pattern and which carry every required key. Within the class, two
//! pages are the same page when their values agree on the required keys.

use crate::{ComparatorError, Page, Params, PathPattern};
use std::fmt;

/// Check that two parameter maps agree on `keys`.
///
/// - Empty `keys`: always `true`, no parameter constraint.
/// - Otherwise: every key must be present in both maps with equal values.
///   A key missing on either side is a mismatch.
///
/// # Example
///
/// ```
/// use pagecomp::{params_equal, Page};
///
/// let a = Page::from_path("/").with("id", "1").with("utm", "x");
/// let b = Page::from_path("/").with("id", "1").with("utm", "y");
///
/// assert!(params_equal(&["id"], a.params(), b.params()));
/// assert!(!params_equal(&["id", "utm"], a.params(), b.params()));
/// assert!(params_equal::<&str>(&[], a.params(), b.params()));
/// ```
#[must_use]
pub fn params_equal<S: AsRef<str>>(keys: &[S], a: &Params, b: &Params) -> bool {
    keys.iter().all(|key| {
        let key = key.as_ref();
        match (a.get(key), b.get(key)) {
            (Some(va), Some(vb)) => va == vb,
            _ => false,
        }
    })
}

/// A compiled equivalence rule.
///
/// Immutable once built. Construction compiles the template; on failure no
/// rule exists.
///
/// # Example
///
/// ```
/// use pagecomp::{Page, Rule};
///
/// let rule = Rule::new("/items/:id", &["lang"]).unwrap();
///
/// let en = Page::from_path("/items/7").with("lang", "en");
/// let fr = Page::from_path("/items/9").with("lang", "fr");
/// let bare = Page::from_path("/items/7");
///
/// assert!(rule.matches(&en));
/// assert!(!rule.matches(&bare)); // required key missing
/// assert!(!rule.certifies(&en, &fr)); // values disagree on `lang`
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: PathPattern,
    param_keys: Vec<String>,
}

impl Rule {
    /// Build a rule from a path template and required parameter keys.
    ///
    /// Keys form an ordered set: first occurrence order is kept, repeats are dropped.
    ///
    /// # Errors
    ///
    /// Returns the [`PathPattern::compile`] error if the template does not compile.
    pub fn new(template: &str, param_keys: &[&str]) -> Result<Self, ComparatorError> {
        let pattern = PathPattern::compile(template)?;

        let mut keys: Vec<String> = Vec::with_capacity(param_keys.len());
        for key in param_keys {
            if !keys.iter().any(|k| k == key) {
                keys.push((*key).to_string());
            }
        }

        Ok(Self {
            pattern,
            param_keys: keys,
        })
    }

    /// Whether this rule applies to `page`: all required keys are present and
    /// the path fits the pattern.
    #[must_use]
    pub fn matches(&self, page: &Page) -> bool {
        self.param_keys
            .iter()
            .all(|key| page.params().contains_key(key))
            && self.pattern.matches(page.path())
    }

    /// [`params_equal`] over this rule's keys.
    #[must_use]
    pub fn params_equal(&self, a: &Page, b: &Page) -> bool {
        params_equal(&self.param_keys, a.params(), b.params())
    }

    /// Whether this rule declares `a` and `b` the same page: it matches both
    /// and their values agree on the required keys.
    #[must_use]
    pub fn certifies(&self, a: &Page, b: &Page) -> bool {
        self.matches(a) && self.matches(b) && self.params_equal(a, b)
    }

    /// The compiled path pattern.
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The source path template.
    #[must_use]
    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    /// Required parameter keys, in registration order.
    #[must_use]
    pub fn param_keys(&self) -> &[String] {
        &self.param_keys
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)?;
        if !self.param_keys.is_empty() {
            write!(f, " [{}]", self.param_keys.join(", "))?;
        }
        Ok(())
    }
}
