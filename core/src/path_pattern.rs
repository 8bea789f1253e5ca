//! `PathPattern`: Compiled path template
//!
//! A template is a `/`-separated list of segments. A segment starting with
//! [`PLACEHOLDER_MARKER`] (`:id`) is a placeholder matching one or more
//! non-separator characters; every other segment matches itself literally.
//!
//! Patterns are anchored to the whole path: `/a/b/:id` matches `/a/b/1` but
//! neither `/a/b/1/c/2` nor `/x/a/b/1`.

use crate::{ComparatorError, MAX_TEMPLATE_LENGTH};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Prefix that turns a template segment into a placeholder.
pub const PLACEHOLDER_MARKER: char = ':';

/// What a placeholder segment compiles to.
const PLACEHOLDER_EXPR: &str = "[^/]+";

/// Upper bound on the compiled regex size.
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

/// A compiled path template.
///
/// Compilation happens once, at rule registration. Matching is a single
/// linear-time regex scan over the candidate path.
///
/// # Example
///
/// ```
/// use pagecomp::PathPattern;
///
/// let pattern = PathPattern::compile("/users/:id/posts").unwrap();
/// assert!(pattern.matches("/users/42/posts"));
/// assert!(pattern.matches("/users/alice/posts"));
/// assert!(!pattern.matches("/users//posts")); // placeholder needs at least one char
/// assert!(!pattern.matches("/users/42/posts/7")); // anchored to the full path
/// assert_eq!(pattern.placeholders(), ["id"]);
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    placeholders: Vec<String>,
    regex: Regex,
}

impl PathPattern {
    /// Compile a path template.
    ///
    /// # Errors
    ///
    /// - [`ComparatorError::TemplateTooLong`] if the template exceeds [`MAX_TEMPLATE_LENGTH`]
    /// - [`ComparatorError::InvalidPattern`] if the regex engine rejects the compiled pattern
    pub fn compile(template: &str) -> Result<Self, ComparatorError> {
        if template.len() > MAX_TEMPLATE_LENGTH {
            return Err(ComparatorError::TemplateTooLong {
                len: template.len(),
                max: MAX_TEMPLATE_LENGTH,
            });
        }
        Self::build(template, COMPILED_SIZE_LIMIT)
    }

    fn build(template: &str, size_limit: usize) -> Result<Self, ComparatorError> {
        let mut placeholders = Vec::new();
        let mut parts = Vec::new();

        for segment in template.split(SEPARATOR) {
            if let Some(name) = segment.strip_prefix(PLACEHOLDER_MARKER) {
                placeholders.push(name.to_string());
                parts.push(PLACEHOLDER_EXPR.to_string());
            } else {
                parts.push(regex::escape(segment));
            }
        }

        let expr = format!("^{}$", parts.join("/"));
        let regex = RegexBuilder::new(&expr)
            .size_limit(size_limit)
            .build()
            .map_err(|source| ComparatorError::InvalidPattern {
                template: template.to_string(),
                source,
            })?;

        Ok(Self {
            template: template.to_string(),
            placeholders,
            regex,
        })
    }

    /// Check whether `path` matches this template.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The source template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in template order (marker stripped).
    ///
    /// Names are informational only; matched values are never captured.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
