//! Checks over ordered stores.

use std::fmt::Debug;

use super::check_values_not_empty;
use crate::comparison::{Comparison, StandardComparison};
use crate::container::Sequence;
use crate::descriptors::{
    should_be_empty, should_be_null_or_empty, should_contain, should_contain_only,
    should_contain_sequence, should_end_with, should_have_size, should_not_be_empty,
    should_not_be_null, should_not_contain, should_not_have_duplicates, should_start_with,
};
use crate::failures::{AssertionFailure, Failures};
use crate::info::AssertionInfo;

/// Containment and ordering checks over any [`Sequence`].
///
/// All equality goes through the injected comparison strategy, so one
/// check set serves standard equality and custom definitions alike.
/// Instances hold no per-call state and can be shared freely.
///
/// # Example
///
/// ```rust
/// use affirm::{AssertionInfo, ComparatorComparison, Sequences};
///
/// let info = AssertionInfo::new();
/// let checks = Sequences::new();
/// let actual = vec![6, 8, 10, 12];
///
/// assert!(checks.assert_ends_with(&info, Some(&actual), &[10, 12]).is_ok());
/// assert!(checks.assert_ends_with(&info, Some(&actual), &[20, 22]).is_err());
///
/// // Same check, equality by absolute value.
/// let by_abs = ComparatorComparison::new("AbsValueComparator", |a: &i32, b: &i32| {
///     a.abs().cmp(&b.abs())
/// });
/// let checks = Sequences::with_comparison(by_abs);
/// assert!(checks.assert_ends_with(&info, Some(&actual), &[-8, 10, 12]).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Sequences<C> {
    comparison: C,
    failures: Failures,
}

impl Sequences<StandardComparison> {
    /// Check set using the element type's own equality.
    pub fn new() -> Self {
        Self::with_comparison(StandardComparison)
    }
}

impl Default for Sequences<StandardComparison> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Sequences<C> {
    /// Check set using `comparison` for every element equality.
    pub fn with_comparison(comparison: C) -> Self {
        Self {
            comparison,
            failures: Failures::new(),
        }
    }

    /// Assert the actual is null or holds no elements.
    ///
    /// The one check where a `None` actual succeeds.
    pub fn assert_null_or_empty<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
    {
        match actual {
            None => Ok(()),
            Some(actual) if actual.is_empty() => Ok(()),
            Some(actual) => self.failures.fail(info, should_be_null_or_empty(&actual)),
        }
    }

    /// Assert the actual holds no elements.
    pub fn assert_empty<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.is_empty() {
            return Ok(());
        }
        self.failures.fail(info, should_be_empty(&actual))
    }

    /// Assert the actual holds at least one element.
    pub fn assert_not_empty<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.is_empty() {
            return self.failures.fail(info, should_not_be_empty());
        }
        Ok(())
    }

    /// Assert the actual holds exactly `expected_size` elements.
    pub fn assert_has_size<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        expected_size: usize,
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.len() == expected_size {
            return Ok(());
        }
        self.failures
            .fail(info, should_have_size(&actual, actual.len(), expected_size))
    }

    /// Assert every value is present in the actual.
    ///
    /// Order and duplicates are ignored; each value only has to occur
    /// somewhere. The failure names the values that could not be found,
    /// deduplicated under the strategy.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault).
    #[track_caller]
    pub fn assert_contains<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        values: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(values);
        let actual = self.assert_not_null(info, actual)?;
        let missing = self.missing_from(actual, values);
        if missing.is_empty() {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_contain(&actual, &values, &missing)
                .with_strategy(self.comparison.description()),
        )
    }

    /// Assert the actual and the values are equal as sets.
    ///
    /// Membership is set-based: duplicate occurrences on either side
    /// collapse, so `[1, 1, 2]` contains only `[2, 1]`. The failure
    /// names the values that could not be found and the elements that
    /// were not expected, each deduplicated in first-occurrence order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault).
    #[track_caller]
    pub fn assert_contains_only<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        values: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(values);
        let actual = self.assert_not_null(info, actual)?;
        let missing = self.missing_from(actual, values);
        let unexpected = self.unexpected_in(actual, values);
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_contain_only(&actual, &values, &missing, &unexpected)
                .with_strategy(self.comparison.description()),
        )
    }

    /// Assert none of the values is present in the actual.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty (usage fault).
    #[track_caller]
    pub fn assert_does_not_contain<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        values: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(values);
        let actual = self.assert_not_null(info, actual)?;
        let found = self.found_in(actual, values);
        if found.is_empty() {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_not_contain(&actual, &values, &found)
                .with_strategy(self.comparison.description()),
        )
    }

    /// Assert the actual's prefix matches `sequence` elementwise.
    ///
    /// Matching is positional and exact, anchored at index 0; a
    /// sequence longer than the actual cannot match.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault).
    #[track_caller]
    pub fn assert_starts_with<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        sequence: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(sequence);
        let actual = self.assert_not_null(info, actual)?;
        if self.window_matches(actual, 0, sequence) {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_start_with(&actual, &sequence).with_strategy(self.comparison.description()),
        )
    }

    /// Assert the actual's suffix matches `sequence` elementwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::{AssertionInfo, Sequences};
    ///
    /// let checks = Sequences::new();
    /// let info = AssertionInfo::new();
    /// let actual = [6, 8, 10, 12];
    ///
    /// assert!(checks.assert_ends_with(&info, Some(&actual), &[8, 10, 12]).is_ok());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault).
    #[track_caller]
    pub fn assert_ends_with<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        sequence: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(sequence);
        let actual = self.assert_not_null(info, actual)?;
        match actual.len().checked_sub(sequence.len()) {
            Some(start) if self.window_matches(actual, start, sequence) => Ok(()),
            _ => self.failures.fail(
                info,
                should_end_with(&actual, &sequence).with_strategy(self.comparison.description()),
            ),
        }
    }

    /// Assert some contiguous run of the actual matches `sequence`.
    ///
    /// Existence is what is asserted, not position: the first
    /// qualifying window satisfies the check. No skipping within a
    /// window; the run must match elementwise.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty (usage fault).
    #[track_caller]
    pub fn assert_contains_sequence<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
        sequence: &[S::Item],
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        check_values_not_empty(sequence);
        let actual = self.assert_not_null(info, actual)?;
        if sequence.len() <= actual.len() {
            let last_start = actual.len() - sequence.len();
            for start in 0..=last_start {
                if self.window_matches(actual, start, sequence) {
                    return Ok(());
                }
            }
        }
        self.failures.fail(
            info,
            should_contain_sequence(&actual, &sequence)
                .with_strategy(self.comparison.description()),
        )
    }

    /// Assert no two elements of the actual are equal under the strategy.
    pub fn assert_does_not_have_duplicates<S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&S>,
    ) -> Result<(), AssertionFailure>
    where
        S: Sequence + Debug + ?Sized,
        S::Item: Debug,
        C: Comparison<S::Item>,
    {
        let actual = self.assert_not_null(info, actual)?;
        let mut seen: Vec<&S::Item> = Vec::new();
        let mut duplicates: Vec<&S::Item> = Vec::new();
        for element in actual.elements() {
            if seen.iter().any(|kept| self.comparison.are_equal(kept, element)) {
                if !duplicates
                    .iter()
                    .any(|kept| self.comparison.are_equal(kept, element))
                {
                    duplicates.push(element);
                }
            } else {
                seen.push(element);
            }
        }
        if duplicates.is_empty() {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_not_have_duplicates(&actual, &duplicates)
                .with_strategy(self.comparison.description()),
        )
    }

    fn assert_not_null<'a, S>(
        &self,
        info: &AssertionInfo,
        actual: Option<&'a S>,
    ) -> Result<&'a S, AssertionFailure>
    where
        S: ?Sized,
    {
        match actual {
            Some(actual) => Ok(actual),
            None => self.failures.fail(info, should_not_be_null()),
        }
    }

    /// Values with no equal element in the actual, first occurrence wins.
    fn missing_from<'v, S>(&self, actual: &S, values: &'v [S::Item]) -> Vec<&'v S::Item>
    where
        S: Sequence + ?Sized,
        C: Comparison<S::Item>,
    {
        let mut missing: Vec<&S::Item> = Vec::new();
        for value in values {
            if self.comparison.contains(actual, value) {
                continue;
            }
            if missing.iter().any(|kept| self.comparison.are_equal(kept, value)) {
                continue;
            }
            missing.push(value);
        }
        missing
    }

    /// Elements of the actual with no equal value, first occurrence wins.
    fn unexpected_in<'s, S>(&self, actual: &'s S, values: &[S::Item]) -> Vec<&'s S::Item>
    where
        S: Sequence + ?Sized,
        C: Comparison<S::Item>,
    {
        let mut unexpected: Vec<&S::Item> = Vec::new();
        for element in actual.elements() {
            if self.comparison.contains(values, element) {
                continue;
            }
            if unexpected
                .iter()
                .any(|kept| self.comparison.are_equal(kept, element))
            {
                continue;
            }
            unexpected.push(element);
        }
        unexpected
    }

    /// Values that do occur in the actual, first occurrence wins.
    fn found_in<'v, S>(&self, actual: &S, values: &'v [S::Item]) -> Vec<&'v S::Item>
    where
        S: Sequence + ?Sized,
        C: Comparison<S::Item>,
    {
        let mut found: Vec<&S::Item> = Vec::new();
        for value in values {
            if !self.comparison.contains(actual, value) {
                continue;
            }
            if found.iter().any(|kept| self.comparison.are_equal(kept, value)) {
                continue;
            }
            found.push(value);
        }
        found
    }

    fn window_matches<S>(&self, actual: &S, start: usize, sequence: &[S::Item]) -> bool
    where
        S: Sequence + ?Sized,
        C: Comparison<S::Item>,
    {
        sequence.iter().enumerate().all(|(offset, expected)| {
            actual
                .get(start + offset)
                .map(|element| self.comparison.are_equal(element, expected))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::comparison::ComparatorComparison;

    fn info() -> AssertionInfo {
        AssertionInfo::new()
    }

    fn abs_compare(a: &i32, b: &i32) -> Ordering {
        a.abs().cmp(&b.abs())
    }

    fn by_abs() -> Sequences<ComparatorComparison<fn(&i32, &i32) -> Ordering>> {
        Sequences::with_comparison(ComparatorComparison::new("AbsValueComparator", abs_compare))
    }

    // =========================================================================
    // assert_null_or_empty
    // =========================================================================

    #[test]
    fn test_null_or_empty_passes_for_null() {
        let checks = Sequences::new();
        let actual: Option<&Vec<i32>> = None;
        assert!(checks.assert_null_or_empty(&info(), actual).is_ok());
    }

    #[test]
    fn test_null_or_empty_passes_for_empty() {
        let checks = Sequences::new();
        let actual: Vec<i32> = Vec::new();
        assert!(checks.assert_null_or_empty(&info(), Some(&actual)).is_ok());
    }

    #[test]
    fn test_null_or_empty_fails_with_elements() {
        let checks = Sequences::new();
        let actual = vec![1];
        let failure = checks
            .assert_null_or_empty(&info(), Some(&actual))
            .unwrap_err();
        assert_eq!(failure.message(), "expected [1] to be null or empty");
    }

    // =========================================================================
    // assert_empty / assert_not_empty / assert_has_size
    // =========================================================================

    #[test]
    fn test_empty_passes_for_empty() {
        let checks = Sequences::new();
        let actual: Vec<i32> = Vec::new();
        assert!(checks.assert_empty(&info(), Some(&actual)).is_ok());
    }

    #[test]
    fn test_empty_fails_for_null() {
        let checks = Sequences::new();
        let actual: Option<&Vec<i32>> = None;
        let failure = checks.assert_empty(&info(), actual).unwrap_err();
        assert_eq!(failure.message(), "expected actual not to be null");
    }

    #[test]
    fn test_empty_fails_with_elements() {
        let checks = Sequences::new();
        let actual = vec![1, 2];
        let failure = checks.assert_empty(&info(), Some(&actual)).unwrap_err();
        assert_eq!(failure.message(), "expected [1, 2] to be empty");
    }

    #[test]
    fn test_not_empty_passes_with_elements() {
        let checks = Sequences::new();
        let actual = vec![1];
        assert!(checks.assert_not_empty(&info(), Some(&actual)).is_ok());
    }

    #[test]
    fn test_not_empty_fails_for_empty() {
        let checks = Sequences::new();
        let actual: Vec<i32> = Vec::new();
        let failure = checks.assert_not_empty(&info(), Some(&actual)).unwrap_err();
        assert_eq!(failure.message(), "expected actual not to be empty");
    }

    #[test]
    fn test_has_size_passes() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        assert!(checks.assert_has_size(&info(), Some(&actual), 3).is_ok());
    }

    #[test]
    fn test_has_size_fails() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        let failure = checks
            .assert_has_size(&info(), Some(&actual), 5)
            .unwrap_err();
        assert_eq!(failure.message(), "expected [1, 2, 3] to have size 5 but was 3");
    }

    // =========================================================================
    // assert_contains
    // =========================================================================

    #[test]
    fn test_contains_passes_in_any_order() {
        let checks = Sequences::new();
        let actual = vec!["luke", "yoda", "leia"];
        assert!(checks
            .assert_contains(&info(), Some(&actual), &["leia", "luke"])
            .is_ok());
    }

    #[test]
    fn test_contains_passes_with_duplicate_values() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        assert!(checks
            .assert_contains(&info(), Some(&actual), &[2, 2, 1])
            .is_ok());
    }

    #[test]
    fn test_contains_fails_naming_the_missing_subset() {
        let checks = Sequences::new();
        let actual = vec!["a", "b"];
        let failure = checks
            .assert_contains(&info(), Some(&actual), &["a", "c", "d", "c"])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [\"a\", \"b\"] to contain [\"a\", \"c\", \"d\", \"c\"] \
             but could not find [\"c\", \"d\"]"
        );
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_contains_empty_values_is_a_usage_fault() {
        let checks = Sequences::new();
        let actual = vec![1];
        let _ = checks.assert_contains(&info(), Some(&actual), &[]);
    }

    #[test]
    fn test_contains_fails_if_actual_is_null() {
        let checks = Sequences::new();
        let actual: Option<&Vec<i32>> = None;
        let failure = checks.assert_contains(&info(), actual, &[1]).unwrap_err();
        assert_eq!(failure.message(), "expected actual not to be null");
    }

    #[test]
    fn test_contains_by_absolute_value() {
        let checks = by_abs();
        let actual = vec![6, 8, 10];
        assert!(checks.assert_contains(&info(), Some(&actual), &[-6, -10]).is_ok());
    }

    // =========================================================================
    // assert_contains_only
    // =========================================================================

    #[test]
    fn test_contains_only_passes_ignoring_order() {
        let checks = Sequences::new();
        let actual = vec![3, 1, 2];
        assert!(checks
            .assert_contains_only(&info(), Some(&actual), &[1, 2, 3])
            .is_ok());
    }

    #[test]
    fn test_contains_only_collapses_duplicates_in_actual() {
        let checks = Sequences::new();
        let actual = vec![1, 1, 2];
        assert!(checks
            .assert_contains_only(&info(), Some(&actual), &[2, 1])
            .is_ok());
    }

    #[test]
    fn test_contains_only_collapses_duplicates_in_values() {
        let checks = Sequences::new();
        let actual = vec![1, 2];
        assert!(checks
            .assert_contains_only(&info(), Some(&actual), &[1, 1, 2, 2])
            .is_ok());
    }

    #[test]
    fn test_contains_only_fails_naming_missing_and_unexpected() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3, 2];
        let failure = checks
            .assert_contains_only(&info(), Some(&actual), &[1, 4])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [1, 2, 3, 2] to contain only [1, 4]; \
             could not find [4]; did not expect [2, 3]"
        );
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_contains_only_empty_values_is_a_usage_fault() {
        let checks = Sequences::new();
        let actual = vec![1];
        let _ = checks.assert_contains_only(&info(), Some(&actual), &[]);
    }

    // =========================================================================
    // assert_does_not_contain
    // =========================================================================

    #[test]
    fn test_does_not_contain_passes() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        assert!(checks
            .assert_does_not_contain(&info(), Some(&actual), &[4, 5])
            .is_ok());
    }

    #[test]
    fn test_does_not_contain_fails_naming_the_found_subset() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        let failure = checks
            .assert_does_not_contain(&info(), Some(&actual), &[4, 2, 2])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [1, 2, 3] not to contain [4, 2, 2] but found [2]"
        );
    }

    #[test]
    fn test_does_not_contain_honors_the_strategy() {
        let checks = by_abs();
        let actual = vec![6, 8];
        assert!(checks
            .assert_does_not_contain(&info(), Some(&actual), &[-6])
            .is_err());
    }

    // =========================================================================
    // assert_starts_with
    // =========================================================================

    #[test]
    fn test_starts_with_passes_on_prefix() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_starts_with(&info(), Some(&actual), &[6, 8])
            .is_ok());
    }

    #[test]
    fn test_starts_with_passes_when_sequence_equals_actual() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_starts_with(&info(), Some(&actual), &[6, 8, 10, 12])
            .is_ok());
    }

    #[test]
    fn test_starts_with_fails_off_anchor() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        let failure = checks
            .assert_starts_with(&info(), Some(&actual), &[8, 10])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [6, 8, 10, 12] to start with [8, 10]"
        );
    }

    #[test]
    fn test_starts_with_fails_if_sequence_is_bigger_than_actual() {
        let checks = Sequences::new();
        let actual = vec![6, 8];
        assert!(checks
            .assert_starts_with(&info(), Some(&actual), &[6, 8, 10])
            .is_err());
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_starts_with_empty_sequence_is_a_usage_fault() {
        let checks = Sequences::new();
        let actual = vec![1];
        let _ = checks.assert_starts_with(&info(), Some(&actual), &[]);
    }

    #[test]
    fn test_starts_with_by_absolute_value() {
        let checks = by_abs();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_starts_with(&info(), Some(&actual), &[-6, 8])
            .is_ok());
    }

    // =========================================================================
    // assert_ends_with
    // =========================================================================

    #[test]
    fn test_ends_with_passes_on_suffix() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &[8, 10, 12])
            .is_ok());
    }

    #[test]
    fn test_ends_with_passes_when_sequence_equals_actual() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &[6, 8, 10, 12])
            .is_ok());
    }

    #[test]
    fn test_ends_with_fails_if_sequence_is_bigger_than_actual() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        let failure = checks
            .assert_ends_with(&info(), Some(&actual), &[6, 8, 10, 12, 20, 22])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [6, 8, 10, 12] to end with [6, 8, 10, 12, 20, 22]"
        );
    }

    #[test]
    fn test_ends_with_fails_on_mismatch() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &[20, 22])
            .is_err());
    }

    #[test]
    fn test_ends_with_fails_when_only_a_prefix_of_the_tail_matches() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &[6, 20, 22])
            .is_err());
    }

    #[test]
    fn test_ends_with_fails_if_actual_is_null() {
        let checks = Sequences::new();
        let actual: Option<&Vec<i32>> = None;
        let failure = checks.assert_ends_with(&info(), actual, &[8]).unwrap_err();
        assert_eq!(failure.message(), "expected actual not to be null");
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_ends_with_empty_sequence_is_a_usage_fault() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        let _ = checks.assert_ends_with(&info(), Some(&actual), &[]);
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_ends_with_usage_fault_applies_before_the_null_check() {
        let checks = Sequences::new();
        let actual: Option<&Vec<i32>> = None;
        let _ = checks.assert_ends_with(&info(), actual, &[]);
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_ends_with_usage_fault_applies_even_to_an_empty_actual() {
        let checks = Sequences::new();
        let actual: Vec<i32> = Vec::new();
        let _ = checks.assert_ends_with(&info(), Some(&actual), &[]);
    }

    #[test]
    fn test_ends_with_by_absolute_value() {
        let checks = by_abs();
        let actual = vec![6, 8, 10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &[-8, 10, 12])
            .is_ok());
    }

    #[test]
    fn test_ends_with_failure_names_the_strategy() {
        let checks = by_abs();
        let actual = vec![6, 8, 10, 12];
        let failure = checks
            .assert_ends_with(&info(), Some(&actual), &[20, 22])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [6, 8, 10, 12] to end with [20, 22] \
             when comparing values using AbsValueComparator"
        );
    }

    // =========================================================================
    // assert_contains_sequence
    // =========================================================================

    #[test]
    fn test_contains_sequence_passes_on_inner_window() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3, 4];
        assert!(checks
            .assert_contains_sequence(&info(), Some(&actual), &[2, 3])
            .is_ok());
    }

    #[test]
    fn test_contains_sequence_passes_on_prefix_and_suffix() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3, 4];
        assert!(checks
            .assert_contains_sequence(&info(), Some(&actual), &[1, 2])
            .is_ok());
        assert!(checks
            .assert_contains_sequence(&info(), Some(&actual), &[3, 4])
            .is_ok());
    }

    #[test]
    fn test_contains_sequence_requires_a_contiguous_run() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3, 4];
        // Both elements occur, but never adjacently.
        let failure = checks
            .assert_contains_sequence(&info(), Some(&actual), &[2, 4])
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [1, 2, 3, 4] to contain sequence [2, 4]"
        );
    }

    #[test]
    fn test_contains_sequence_fails_if_sequence_is_bigger_than_actual() {
        let checks = Sequences::new();
        let actual = vec![1, 2];
        assert!(checks
            .assert_contains_sequence(&info(), Some(&actual), &[1, 2, 3])
            .is_err());
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_contains_sequence_empty_sequence_is_a_usage_fault() {
        let checks = Sequences::new();
        let actual = vec![1, 2];
        let _ = checks.assert_contains_sequence(&info(), Some(&actual), &[]);
    }

    #[test]
    fn test_suffix_also_qualifies_as_contained_sequence() {
        let checks = Sequences::new();
        let actual = vec![6, 8, 10, 12];
        let sequence = [10, 12];
        assert!(checks
            .assert_ends_with(&info(), Some(&actual), &sequence)
            .is_ok());
        assert!(checks
            .assert_contains_sequence(&info(), Some(&actual), &sequence)
            .is_ok());
    }

    // =========================================================================
    // assert_does_not_have_duplicates
    // =========================================================================

    #[test]
    fn test_no_duplicates_passes_for_distinct_elements() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        assert!(checks
            .assert_does_not_have_duplicates(&info(), Some(&actual))
            .is_ok());
    }

    #[test]
    fn test_no_duplicates_fails_naming_each_duplicate_once() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 1, 3, 1, 2];
        let failure = checks
            .assert_does_not_have_duplicates(&info(), Some(&actual))
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "expected [1, 2, 1, 3, 1, 2] not to have duplicates but found [1, 2]"
        );
    }

    #[test]
    fn test_no_duplicates_honors_the_strategy() {
        let checks = by_abs();
        let actual = vec![8, -8];
        assert!(checks
            .assert_does_not_have_duplicates(&info(), Some(&actual))
            .is_err());
    }

    // =========================================================================
    // cross-cutting
    // =========================================================================

    #[test]
    fn test_checks_work_on_slices_and_arrays() {
        let checks = Sequences::new();
        let slice: &[i32] = &[1, 2, 3];
        let array = [1, 2, 3];
        assert!(checks.assert_contains(&info(), Some(slice), &[2]).is_ok());
        assert!(checks.assert_ends_with(&info(), Some(&array), &[2, 3]).is_ok());
    }

    #[test]
    fn test_failures_render_identically_on_repeat_evaluation() {
        let checks = Sequences::new();
        let actual = vec![1, 2, 3];
        let first = checks
            .assert_ends_with(&info(), Some(&actual), &[9])
            .unwrap_err();
        let second = checks
            .assert_ends_with(&info(), Some(&actual), &[9])
            .unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_description_prefixes_check_failures() {
        let checks = Sequences::new();
        let actual = vec![1];
        let described = AssertionInfo::new().with_description("ids");
        let failure = checks
            .assert_ends_with(&described, Some(&actual), &[9])
            .unwrap_err();
        assert_eq!(failure.message(), "[ids] expected [1] to end with [9]");
    }
}
