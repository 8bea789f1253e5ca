//! Conformance fixture runner
//!
//! Loads YAML fixtures and runs them against the comparator.
//!
//! ```yaml
//! name: user_profiles
//! description: pages under /users/:id are one page per tab
//! config:
//!   rules:
//!     - path: /users/:id
//!       params: [tab]
//! cases:
//!   - name: same_tab
//!     a: { path: /users/1, params: { tab: posts } }
//!     b: { path: /users/2, params: { tab: posts } }
//!     expect: true
//! ```
//!
//! `config` is kept as a raw value so that fixtures can also describe
//! documents that must fail to load (`expect_error: true`).

use pagecomp::{Comparator, ComparatorConfig, ComparatorError, Page};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comparator config, deserialized as [`ComparatorConfig`] at run time.
    #[serde(default = "empty_config")]
    pub config: serde_json::Value,
    #[serde(default)]
    pub cases: Vec<FixtureCase>,
    /// The config must fail to parse or compile.
    #[serde(default)]
    pub expect_error: bool,
}

fn empty_config() -> serde_json::Value {
    serde_json::json!({})
}

/// Test case: two pages and the expected decision.
#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub a: Page,
    pub b: Page,
    pub expect: bool,
}

/// Why a fixture's config could not produce a comparator.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document does not have the config shape.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
    /// A rule failed to compile.
    #[error("compile error: {0}")]
    Compile(#[source] ComparatorError),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
    /// Template of the certifying rule, if any.
    pub certified_by: Option<String>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Parse and compile this fixture's config.
    pub fn load(&self) -> Result<Comparator, LoadError> {
        let config: ComparatorConfig =
            serde_json::from_value(self.config.clone()).map_err(LoadError::Parse)?;
        Comparator::from_config(&config).map_err(LoadError::Compile)
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Result<Vec<CaseResult>, LoadError> {
        let comparator = self.load()?;
        Ok(self
            .cases
            .iter()
            .map(|case| {
                let trace = comparator.equal_with_trace(&case.a, &case.b);
                let certified_by = trace
                    .steps
                    .iter()
                    .find(|s| s.certified())
                    .map(|s| s.template.clone());
                CaseResult {
                    case_name: case.name.clone(),
                    passed: trace.result == case.expect,
                    expected: case.expect,
                    actual: trace.result,
                    certified_by,
                }
            })
            .collect())
    }

    /// Run the fixture and panic on first failure.
    ///
    /// For `expect_error` fixtures, panics if the config loads.
    pub fn run_and_assert(&self) {
        if self.expect_error {
            if let Ok(comparator) = self.load() {
                panic!(
                    "Fixture '{}' expected a load error but got {} rule(s)",
                    self.name,
                    comparator.len()
                );
            }
            return;
        }

        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to load: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {}, got {} (certified by {:?})",
                self.name, result.case_name, result.expected, result.actual, result.certified_by
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: users
description: one page per tab
config:
  rules:
    - path: /users/:id
      params: [tab]
cases:
  - name: same_tab
    a: { path: /users/1, params: { tab: posts } }
    b: { path: /users/2, params: { tab: posts, utm: x } }
    expect: true
  - name: other_tab
    a: { path: /users/1, params: { tab: posts } }
    b: { path: /users/1, params: { tab: likes } }
    expect: false
"#;

    #[test]
    fn test_parse_and_run() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.name, "users");
        assert_eq!(fixture.cases.len(), 2);

        let results = fixture.run().unwrap();
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].certified_by.as_deref(), Some("/users/:id"));
        assert_eq!(results[1].certified_by, None);
        fixture.run_and_assert();
    }

    #[test]
    fn test_missing_config_is_structural() {
        let yaml = r#"
name: structural
cases:
  - name: identical
    a: { path: /a, params: { x: "1" } }
    b: { path: /a, params: { x: "1" } }
    expect: true
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        fixture.run_and_assert();
    }

    #[test]
    fn test_multi_document() {
        let yaml = "name: one\n---\nname: two\n";
        let fixtures = Fixture::from_yaml_multi(yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[1].name, "two");
    }

    #[test]
    fn test_expect_error_parse() {
        let yaml = r#"
name: bad_field
config:
  rules:
    - path: /a
      keys: [x]
expect_error: true
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        assert!(matches!(fixture.load(), Err(LoadError::Parse(_))));
        fixture.run_and_assert();
    }

    #[test]
    fn test_expect_error_compile() {
        let fixture = Fixture {
            name: "too_long".into(),
            description: String::new(),
            config: serde_json::json!({
                "rules": [{ "path": "/ok" }, { "path": "/a".repeat(3000) }]
            }),
            cases: Vec::new(),
            expect_error: true,
        };
        let err = fixture.load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Compile(ComparatorError::InvalidRule { index: 1, .. })
        ));
        fixture.run_and_assert();
    }

    #[test]
    #[should_panic(expected = "expected a load error")]
    fn test_expect_error_but_loads() {
        let fixture = Fixture::from_yaml("name: fine\nexpect_error: true\n").unwrap();
        fixture.run_and_assert();
    }
}
