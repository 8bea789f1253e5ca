//! pagecomp-test: Test helpers and conformance fixtures
//!
//! Small constructors for pages and parameter maps, plus (with the
//! `fixtures` feature) a runner for YAML conformance fixtures.
//!
//! # Example
//!
//! ```
//! use pagecomp_test::prelude::*;
//!
//! let mut comparator = Comparator::new();
//! comparator.add_rule("/users/:id", &["tab"]).unwrap();
//!
//! let a = page("/users/1", &[("tab", "posts")]);
//! let b = page("/users/2", &[("tab", "posts")]);
//! assert!(comparator.equal(&a, &b));
//!
//! // Random values never agree, so param rules on them never certify.
//! let c = Page::new("/users/3", random_params(&["tab"]));
//! assert!(!comparator.equal(&a, &c));
//! ```

use pagecomp::{Page, Params};

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Value used by [`fixed_params`] for every key.
pub const FIXED_VALUE: &str = "test";

/// Build a page from a path and literal key/value pairs.
#[must_use]
pub fn page(path: &str, params: &[(&str, &str)]) -> Page {
    params
        .iter()
        .fold(Page::from_path(path), |page, (k, v)| page.with(*k, *v))
}

/// Parameters with every key set to the same value, [`FIXED_VALUE`].
#[must_use]
pub fn fixed_params(keys: &[&str]) -> Params {
    keys.iter()
        .map(|k| ((*k).to_string(), FIXED_VALUE.to_string()))
        .collect()
}

/// Parameters with every key set to a fresh UUID v4.
///
/// Two calls never produce equal values for the same key.
#[must_use]
pub fn random_params(keys: &[&str]) -> Params {
    keys.iter()
        .map(|k| ((*k).to_string(), uuid::Uuid::new_v4().to_string()))
        .collect()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{fixed_params, page, random_params, FIXED_VALUE};
    pub use pagecomp::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecomp::Comparator;

    #[test]
    fn test_page_helper() {
        let p = page("/a/1", &[("x", "1"), ("y", "2")]);
        assert_eq!(p.path(), "/a/1");
        assert_eq!(p.param("x"), Some("1"));
        assert_eq!(p.param("y"), Some("2"));
        assert_eq!(p.params().len(), 2);
    }

    #[test]
    fn test_fixed_params() {
        let params = fixed_params(&["a", "b"]);
        assert_eq!(params.len(), 2);
        assert!(params.values().all(|v| v == FIXED_VALUE));
        assert_eq!(fixed_params(&["a", "b"]), params);
    }

    #[test]
    fn test_random_params_differ() {
        let a = random_params(&["k"]);
        let b = random_params(&["k"]);
        assert_eq!(a.len(), 1);
        assert_ne!(a["k"], b["k"]);
    }

    // Path rules certify regardless of parameter values.
    #[test]
    fn test_path_rules_ignore_params() {
        let mut comparator = Comparator::new();
        comparator.add_rule("/a/b/:c/d", &[]).unwrap();
        comparator.add_rule("/x/:y/z", &[]).unwrap();

        let cases = [
            ("/a/b/c/d", "/a/b/x/d", true),
            ("/x/foo/z", "/x/bar/z", true),
            ("/a/b/c/d", "/x/y/z", false),
            ("/a/b/c/d", "/a/b/c/e", false),
        ];
        for (pa, pb, expect) in cases {
            let a = Page::new(pa, random_params(&["q1", "q2"]));
            let b = Page::new(pb, random_params(&["q1", "q2"]));
            assert_eq!(comparator.equal(&a, &b), expect, "{pa} vs {pb}");
        }
    }

    #[test]
    fn test_param_rules_with_fixed_values() {
        let mut comparator = Comparator::new();
        comparator.add_rule("/:any", &["q1", "q2"]).unwrap();

        let a = Page::new("/one", fixed_params(&["q1", "q2"]));
        let b = Page::new("/two", fixed_params(&["q1", "q2", "q3"]));
        let c = Page::new("/two", random_params(&["q1", "q2"]));

        assert!(comparator.equal(&a, &b));
        assert!(!comparator.equal(&a, &c));
    }
}
