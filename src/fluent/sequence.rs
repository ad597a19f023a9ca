//! Fluent expectations over ordered stores.
//!
//! This module provides the sequence half of the fluent API:
//! - `expect()` - Entry point for a present sequence
//! - `expect_option()` - Entry point when the sequence may be absent
//! - `SequenceExpectation` - Chains configuration and checks

use std::cmp::Ordering;
use std::fmt::Debug;

use super::soft::FailureCollector;
use crate::checks::Sequences;
use crate::comparison::{ComparatorComparison, Comparison, StandardComparison};
use crate::container::Sequence;
use crate::failures::AssertionFailure;
use crate::info::{AssertionInfo, Representation};

/// Create an expectation on a sequence.
///
/// This is the entry point for the fluent API over slices, arrays,
/// `Vec`, and `VecDeque`. Checks evaluate immediately and panic on
/// failure; chain as many as needed.
///
/// # Example
///
/// ```rust
/// use affirm::expect;
///
/// expect(&[6, 8, 10, 12])
///     .contains(&[8, 6])
///     .starts_with(&[6, 8])
///     .ends_with(&[10, 12]);
/// ```
pub fn expect<S>(actual: &S) -> SequenceExpectation<'_, S, StandardComparison>
where
    S: Sequence + ?Sized,
{
    SequenceExpectation::new(Some(actual), None)
}

/// Create an expectation on a sequence that may be absent.
///
/// Use this to exercise the null-actual rules: every check fails on
/// `None` except `is_null_or_empty`, which succeeds.
///
/// # Example
///
/// ```rust
/// use affirm::expect_option;
///
/// let absent: Option<&Vec<i32>> = None;
/// expect_option(absent).is_null_or_empty();
/// ```
pub fn expect_option<S>(actual: Option<&S>) -> SequenceExpectation<'_, S, StandardComparison>
where
    S: Sequence + ?Sized,
{
    SequenceExpectation::new(actual, None)
}

/// Chains configuration and checks for one sequence under test.
///
/// Configuration methods (`described_as`, `using_comparison`, ...) come
/// first; check methods evaluate immediately and panic on failure, or
/// hand the failure to a collector when created through
/// [`SoftChecks`](super::SoftChecks).
#[derive(Debug)]
pub struct SequenceExpectation<'a, S: ?Sized, C> {
    actual: Option<&'a S>,
    info: AssertionInfo,
    checks: Sequences<C>,
    collector: Option<FailureCollector>,
}

impl<'a, S> SequenceExpectation<'a, S, StandardComparison>
where
    S: Sequence + ?Sized,
{
    pub(crate) fn new(actual: Option<&'a S>, collector: Option<FailureCollector>) -> Self {
        Self {
            actual,
            info: AssertionInfo::new(),
            checks: Sequences::new(),
            collector,
        }
    }
}

impl<'a, S, C> SequenceExpectation<'a, S, C>
where
    S: Sequence + ?Sized,
{
    // =========================================================================
    // Configuration methods (chainable)
    // =========================================================================

    /// Describe what is being checked; the description prefixes every
    /// failure message produced by this expectation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(&[1, 2, 3]).described_as("ticket ids").contains(&[2]);
    /// ```
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info = self.info.with_description(description);
        self
    }

    /// Replace the policy used to render values into failure messages.
    pub fn with_representation(
        mut self,
        representation: impl Representation + Send + Sync + 'static,
    ) -> Self {
        self.info = self.info.with_representation(representation);
        self
    }

    /// Run every following check under `comparison` instead of the
    /// element type's own equality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::{expect, PatternComparison};
    ///
    /// expect(&["main.rs", "lib.rs"])
    ///     .using_comparison(PatternComparison)
    ///     .contains(&["*.rs"]);
    /// ```
    pub fn using_comparison<D>(self, comparison: D) -> SequenceExpectation<'a, S, D> {
        SequenceExpectation {
            actual: self.actual,
            info: self.info,
            checks: Sequences::with_comparison(comparison),
            collector: self.collector,
        }
    }

    /// Run every following check with equality defined by `comparator`:
    /// two elements are equal when it returns [`Ordering::Equal`]. The
    /// name shows up in failure messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(&[6, 8, 10, 12])
    ///     .using_comparator("AbsValueComparator", |a: &i32, b: &i32| a.abs().cmp(&b.abs()))
    ///     .ends_with(&[-8, 10, 12]);
    /// ```
    pub fn using_comparator<F>(
        self,
        name: impl Into<String>,
        comparator: F,
    ) -> SequenceExpectation<'a, S, ComparatorComparison<F>>
    where
        F: Fn(&S::Item, &S::Item) -> Ordering,
    {
        self.using_comparison(ComparatorComparison::new(name, comparator))
    }

    // =========================================================================
    // Checks (panic on failure, collect in soft mode)
    // =========================================================================

    /// Assert the sequence is absent or holds no elements.
    #[track_caller]
    pub fn is_null_or_empty(self) -> Self
    where
        S: Debug,
    {
        let result = self.checks.assert_null_or_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the sequence holds no elements.
    #[track_caller]
    pub fn is_empty(self) -> Self
    where
        S: Debug,
    {
        let result = self.checks.assert_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the sequence holds at least one element.
    #[track_caller]
    pub fn is_not_empty(self) -> Self
    where
        S: Debug,
    {
        let result = self.checks.assert_not_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the sequence holds exactly `expected` elements.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self
    where
        S: Debug,
    {
        let result = self.checks.assert_has_size(&self.info, self.actual, expected);
        self.handle(result)
    }

    /// Assert every value is present, in any order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn contains(self, values: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self.checks.assert_contains(&self.info, self.actual, values);
        self.handle(result)
    }

    /// Assert the sequence and `values` are equal as sets.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn contains_only(self, values: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_contains_only(&self.info, self.actual, values);
        self.handle(result)
    }

    /// Assert none of the values is present.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn does_not_contain(self, values: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_does_not_contain(&self.info, self.actual, values);
        self.handle(result)
    }

    /// Assert the sequence starts with `sequence`, elementwise.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn starts_with(self, sequence: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_starts_with(&self.info, self.actual, sequence);
        self.handle(result)
    }

    /// Assert the sequence ends with `sequence`, elementwise.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn ends_with(self, sequence: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_ends_with(&self.info, self.actual, sequence);
        self.handle(result)
    }

    /// Assert some contiguous run matches `sequence`, elementwise.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault), or on failure.
    #[track_caller]
    pub fn contains_sequence(self, sequence: &[S::Item]) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_contains_sequence(&self.info, self.actual, sequence);
        self.handle(result)
    }

    /// Assert no two elements are equal under the active comparison.
    #[track_caller]
    pub fn does_not_have_duplicates(self) -> Self
    where
        S: Debug,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let result = self
            .checks
            .assert_does_not_have_duplicates(&self.info, self.actual);
        self.handle(result)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    #[track_caller]
    fn handle(self, result: Result<(), AssertionFailure>) -> Self {
        if let Err(failure) = result {
            match &self.collector {
                Some(collector) => collector.push(failure),
                None => panic!("assertion failed: {}", failure),
            }
        }
        self
    }
}
