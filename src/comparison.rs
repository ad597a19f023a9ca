//! Pluggable element equality used by every containment check.
//!
//! A [`Comparison`] decides when two elements are equal. Checks never
//! call the element type's own equality directly; they go through the
//! injected strategy, so swapping in a custom definition (absolute
//! value, pattern matching) changes the behavior of every check
//! uniformly.

use std::cmp::Ordering;
use std::fmt;

use glob::Pattern;
use regex::Regex;

use crate::container::Sequence;

/// Element equality contract.
///
/// `left` is always an element drawn from the store being searched and
/// `right` the caller-supplied expected value. Implementations must be
/// total and deterministic within one check: no randomness, no state
/// mutated between calls.
pub trait Comparison<T> {
    /// Whether `left` and `right` are equal under this strategy.
    fn are_equal(&self, left: &T, right: &T) -> bool;

    /// Human-readable name used in failure messages, if any.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Whether `sequence` holds an element equal to `value`.
    ///
    /// Searches with [`are_equal`](Self::are_equal), never the element
    /// type's own equality, so custom strategies are honored by every
    /// check that looks elements up.
    fn contains<S>(&self, sequence: &S, value: &T) -> bool
    where
        Self: Sized,
        S: Sequence<Item = T> + ?Sized,
    {
        sequence
            .elements()
            .any(|element| self.are_equal(element, value))
    }
}

/// Equality as defined by the element type itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardComparison;

impl<T: PartialEq> Comparison<T> for StandardComparison {
    fn are_equal(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Equality defined by a comparator: equal when it returns [`Ordering::Equal`].
///
/// The name is mandatory and shows up in failure messages, so a reader
/// can tell which definition of equality rejected the check.
///
/// # Example
///
/// ```rust
/// use affirm::{Comparison, ComparatorComparison};
///
/// let by_abs = ComparatorComparison::new("AbsValueComparator", |a: &i32, b: &i32| {
///     a.abs().cmp(&b.abs())
/// });
///
/// assert!(by_abs.are_equal(&-8, &8));
/// assert_eq!(by_abs.description(), Some("AbsValueComparator"));
/// ```
#[derive(Clone)]
pub struct ComparatorComparison<F> {
    name: String,
    comparator: F,
}

impl<F> ComparatorComparison<F> {
    /// Wrap `comparator` under `name`.
    pub fn new(name: impl Into<String>, comparator: F) -> Self {
        Self {
            name: name.into(),
            comparator,
        }
    }
}

impl<T, F> Comparison<T> for ComparatorComparison<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn are_equal(&self, left: &T, right: &T) -> bool {
        (self.comparator)(left, right) == Ordering::Equal
    }

    fn description(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl<F> fmt::Debug for ComparatorComparison<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorComparison")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Pattern equality for string elements.
///
/// The expected side is tried as a glob, then as a regex, then compared
/// literally; an expected value that parses as neither pattern kind
/// still works as a plain string. Checks that search the expected
/// values for an actual element (`contains_only` does) run the cascade
/// with the sides swapped, which degrades to the literal comparison for
/// anything that only matches as a pattern.
///
/// # Example
///
/// ```rust
/// use affirm::{Comparison, PatternComparison};
///
/// assert!(PatternComparison.are_equal(&"main.rs", &"*.rs"));
/// assert!(PatternComparison.are_equal(&"v42", &r"^v\d+$"));
/// assert!(PatternComparison.are_equal(&"plain", &"plain"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternComparison;

const PATTERN_DESCRIPTION: &str = "glob, regex, or literal matching";

impl PatternComparison {
    /// Run the cascade: glob, then regex, then literal comparison.
    /// Invalid patterns are skipped silently.
    fn matches(&self, value: &str, pattern: &str) -> bool {
        if let Ok(glob) = Pattern::new(pattern) {
            if glob.matches(value) {
                return true;
            }
        }

        if let Ok(re) = Regex::new(pattern) {
            if re.is_match(value) {
                return true;
            }
        }

        value == pattern
    }
}

impl Comparison<String> for PatternComparison {
    fn are_equal(&self, left: &String, right: &String) -> bool {
        self.matches(left, right)
    }

    fn description(&self) -> Option<&str> {
        Some(PATTERN_DESCRIPTION)
    }
}

impl<'a> Comparison<&'a str> for PatternComparison {
    fn are_equal(&self, left: &&'a str, right: &&'a str) -> bool {
        self.matches(left, right)
    }

    fn description(&self) -> Option<&str> {
        Some(PATTERN_DESCRIPTION)
    }
}
