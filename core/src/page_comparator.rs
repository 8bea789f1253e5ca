//! `PageComparator`: The pairwise page decision as a trait
//!
//! Both the strict structural comparison ([`Exact`]) and the rule-based
//! [`Comparator`] decide "same page or not" for a pair. Grouping and
//! deduplication are built once on top of that decision.

use crate::{Comparator, Page};
use std::fmt::Debug;

/// Decides whether two pages are the same page.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a finished comparator can be
/// shared across threads for concurrent reads.
///
/// # Non-transitivity
///
/// A rule set need not induce an equivalence relation (a page may be equal
/// to two pages that are not equal to each other). [`dedup`](Self::dedup)
/// and [`group`](Self::group) therefore compare against the *first* member
/// of each group only, which keeps results deterministic for a given input order.
///
/// # Example
///
/// ```
/// use pagecomp::prelude::*;
///
/// let comparator = Comparator::new().with_rule("/users/:id", &[]).unwrap();
/// let pages = [
///     Page::from_path("/users/1"),
///     Page::from_path("/about"),
///     Page::from_path("/users/2"),
/// ];
///
/// let kept = comparator.dedup(&pages);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].path(), "/users/1");
/// assert_eq!(kept[1].path(), "/about");
/// ```
pub trait PageComparator: Send + Sync + Debug {
    /// Whether `a` and `b` are the same page.
    fn equal(&self, a: &Page, b: &Page) -> bool;

    /// Keep the first page of every group, in input order.
    fn dedup<'a, I>(&self, pages: I) -> Vec<&'a Page>
    where
        I: IntoIterator<Item = &'a Page>,
        Self: Sized,
    {
        let mut kept: Vec<&'a Page> = Vec::new();
        for page in pages {
            if !kept.iter().any(|k| self.equal(k, page)) {
                kept.push(page);
            }
        }
        kept
    }

    /// Partition pages into groups.
    ///
    /// Each page joins the first group whose first member it is equal to,
    /// otherwise it opens a new group. Groups and members keep input order.
    fn group<'a, I>(&self, pages: I) -> Vec<Vec<&'a Page>>
    where
        I: IntoIterator<Item = &'a Page>,
        Self: Sized,
    {
        let mut groups: Vec<Vec<&'a Page>> = Vec::new();
        for page in pages {
            match groups.iter().position(|g| self.equal(g[0], page)) {
                Some(i) => groups[i].push(page),
                None => groups.push(vec![page]),
            }
        }
        groups
    }
}

/// Strict structural comparison, ignoring any rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl PageComparator for Exact {
    fn equal(&self, a: &Page, b: &Page) -> bool {
        a.equal(b)
    }
}

impl PageComparator for Comparator {
    fn equal(&self, a: &Page, b: &Page) -> bool {
        Comparator::equal(self, a, b)
    }
}
