//! pagecomp - rule-based page equivalence
//!
//! Decides whether two page identities (a path plus request parameters) are
//! "the same page" under a configurable set of rules. Typical uses are
//! deduplicating analytics events and grouping requests that only differ in
//! path variables (`/users/123` vs `/users/456`) or in parameters irrelevant
//! to identity.
//!
//! # Architecture
//!
//! - [`Page`]: Immutable identity: path + parameter map, strict structural equality
//! - [`PathPattern`]: Compiled path template (`/users/:id`), fully anchored
//! - [`Rule`]: `PathPattern` + ordered set of required parameter keys
//! - [`Comparator`]: Ordered rules, OR-combined, first-match-wins
//! - [`PageComparator`]: The pairwise decision, plus grouping and dedup on top of it
//!
//! # Key Design Insights
//!
//! 1. **No rules → strict equality**: an unconfigured [`Comparator`] degrades
//!    to [`Page::equal`].
//!
//! 2. **Rules are existential**: a pair is equivalent if *any* rule matches both
//!    pages and their values agree on that rule's keys. Registration order only
//!    decides how many rules are evaluated before the answer is known.
//!
//! 3. **Missing key → no match**: a rule requiring `page_id` never fires for a
//!    page without `page_id`, even when both pages are otherwise identical.
//!
//! # Example
//!
//! ```
//! use pagecomp::prelude::*;
//!
//! let mut comparator = Comparator::new();
//! comparator.add_rule("/a/:id", &["x"]).unwrap();
//!
//! let a = Page::from_path("/a/abc").with("x", "example");
//! let b = Page::from_path("/a/1234567").with("x", "example");
//! assert!(comparator.equal(&a, &b));
//!
//! let c = Page::from_path("/a/1234567").with("x", "other");
//! assert!(!comparator.equal(&a, &c));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod comparator;
mod page;
mod page_comparator;
mod path_pattern;
mod rule;
mod trace;

#[cfg(feature = "serde")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use comparator::Comparator;
pub use page::{Page, Params};
pub use page_comparator::{Exact, PageComparator};
pub use path_pattern::{PathPattern, PLACEHOLDER_MARKER, SEPARATOR};
pub use rule::{params_equal, Rule};
pub use trace::{EqualTrace, RuleStep};

#[cfg(feature = "serde")]
pub use config::{ComparatorConfig, RuleConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use pagecomp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        params_equal, Comparator, ComparatorError, EqualTrace, Exact, Page, PageComparator,
        Params, PathPattern, Rule, RuleStep,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length of a path template, in bytes.
///
/// Templates compile to regexes; regex compilation cost grows with pattern
/// size even with the linear-time `regex` crate.
pub const MAX_TEMPLATE_LENGTH: usize = 4096;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from rule construction.
///
/// Only construction can fail. Evaluation ([`Comparator::equal`],
/// [`Rule::matches`], [`params_equal`]) is total. A failed registration never
/// leaves a partial rule behind.
#[derive(Debug, thiserror::Error)]
pub enum ComparatorError {
    /// The compiled template was rejected by the pattern engine.
    #[error("invalid path template \"{template}\": {source}")]
    InvalidPattern {
        /// The template that failed to compile.
        template: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The template exceeds [`MAX_TEMPLATE_LENGTH`].
    #[error("path template length is {len}, but maximum allowed is {max}")]
    TemplateTooLong {
        /// Actual length of the template.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A rule in a config document failed to build.
    #[error("rule #{index} is invalid: {source}")]
    InvalidRule {
        /// Position of the rule in the config document (0-based).
        index: usize,
        /// Why the rule failed.
        #[source]
        source: Box<ComparatorError>,
    },
}
