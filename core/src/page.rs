//! `Page`: Immutable page identity
//!
//! A page is a request path plus a flat map of parameter name to value.
//! Two pages are structurally equal when both parts are identical.

use std::collections::HashMap;

/// Parameter name → value. Keys are unique; iteration order carries no meaning.
pub type Params = HashMap<String, String>;

/// A page identity: normalized path + request parameters.
///
/// Pages are values. Equality is structural and field-by-field: same path
/// string, same set of keys, same value under every key.
///
/// # Example
///
/// ```
/// use pagecomp::Page;
///
/// let a = Page::from_path("/a").with("p", "1");
/// let b = Page::from_path("/a").with("p", "1");
/// let c = Page::from_path("/a").with("p", "2");
///
/// assert!(a.equal(&b));
/// assert!(!a.equal(&c));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    params: Params,
}

impl Page {
    /// Create a page from a path and its parameters.
    pub fn new(path: impl Into<String>, params: Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Create a page with no parameters.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self::new(path, Params::new())
    }

    /// Add a parameter (builder pattern). An existing value for `key` is replaced.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The request path (no query string).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Get a parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Strict structural equality.
    ///
    /// True iff the paths are identical and both parameter maps hold exactly
    /// the same keys mapped to the same values. Total: never fails.
    #[must_use]
    pub fn equal(&self, other: &Page) -> bool {
        if self.path != other.path {
            return false;
        }
        if self.params.len() != other.params.len() {
            return false;
        }
        // Same length + every key of self found with the same value => same key set.
        self.params
            .iter()
            .all(|(key, value)| other.params.get(key).is_some_and(|v| v == value))
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Page {}
