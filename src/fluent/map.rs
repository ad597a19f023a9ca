//! Fluent expectations over key/value stores.
//!
//! The map half of the fluent API:
//! - `expect_map()` - Entry point for a present map
//! - `expect_map_option()` - Entry point when the map may be absent
//! - `MapExpectation` - Chains configuration and checks

use std::cmp::Ordering;
use std::fmt::Debug;

use super::soft::FailureCollector;
use crate::checks::Maps;
use crate::comparison::{ComparatorComparison, Comparison, StandardComparison};
use crate::container::MapView;
use crate::failures::AssertionFailure;
use crate::info::{AssertionInfo, Representation};

/// Create an expectation on a map.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use affirm::expect_map;
///
/// let mut jedi = HashMap::new();
/// jedi.insert("name", "Yoda");
///
/// expect_map(&jedi).contains_key(&"name").contains_value(&"Yoda");
/// ```
pub fn expect_map<M>(actual: &M) -> MapExpectation<'_, M, StandardComparison>
where
    M: MapView,
{
    MapExpectation::new(Some(actual), None)
}

/// Create an expectation on a map that may be absent.
///
/// Every check fails on `None` except `is_null_or_empty`.
pub fn expect_map_option<M>(actual: Option<&M>) -> MapExpectation<'_, M, StandardComparison>
where
    M: MapView,
{
    MapExpectation::new(actual, None)
}

/// Chains configuration and checks for one map under test.
///
/// Same shape as [`SequenceExpectation`](super::SequenceExpectation):
/// configuration first, then checks that evaluate immediately.
#[derive(Debug)]
pub struct MapExpectation<'a, M, C> {
    actual: Option<&'a M>,
    info: AssertionInfo,
    checks: Maps<C>,
    collector: Option<FailureCollector>,
}

impl<'a, M> MapExpectation<'a, M, StandardComparison>
where
    M: MapView,
{
    pub(crate) fn new(actual: Option<&'a M>, collector: Option<FailureCollector>) -> Self {
        Self {
            actual,
            info: AssertionInfo::new(),
            checks: Maps::new(),
            collector,
        }
    }
}

impl<'a, M, C> MapExpectation<'a, M, C>
where
    M: MapView,
{
    // =========================================================================
    // Configuration methods (chainable)
    // =========================================================================

    /// Describe what is being checked; the description prefixes every
    /// failure message produced by this expectation.
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

    /// Run every following check under `comparison` instead of the key
    /// and value types' own equality.
    pub fn using_comparison<D>(self, comparison: D) -> MapExpectation<'a, M, D> {
        MapExpectation {
            actual: self.actual,
            info: self.info,
            checks: Maps::with_comparison(comparison),
            collector: self.collector,
        }
    }

    /// Run every following key check with equality defined by
    /// `comparator`. The name shows up in failure messages.
    pub fn using_key_comparator<F>(
        self,
        name: impl Into<String>,
        comparator: F,
    ) -> MapExpectation<'a, M, ComparatorComparison<F>>
    where
        F: Fn(&M::Key, &M::Key) -> Ordering,
    {
        self.using_comparison(ComparatorComparison::new(name, comparator))
    }

    /// Run every following value check with equality defined by
    /// `comparator`. The name shows up in failure messages.
    pub fn using_value_comparator<F>(
        self,
        name: impl Into<String>,
        comparator: F,
    ) -> MapExpectation<'a, M, ComparatorComparison<F>>
    where
        F: Fn(&M::Value, &M::Value) -> Ordering,
    {
        self.using_comparison(ComparatorComparison::new(name, comparator))
    }

    // =========================================================================
    // Checks (panic on failure, collect in soft mode)
    // =========================================================================

    /// Assert the map is absent or holds no entries.
    #[track_caller]
    pub fn is_null_or_empty(self) -> Self
    where
        M: Debug,
    {
        let result = self.checks.assert_null_or_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the map holds no entries.
    #[track_caller]
    pub fn is_empty(self) -> Self
    where
        M: Debug,
    {
        let result = self.checks.assert_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the map holds at least one entry.
    #[track_caller]
    pub fn is_not_empty(self) -> Self
    where
        M: Debug,
    {
        let result = self.checks.assert_not_empty(&self.info, self.actual);
        self.handle(result)
    }

    /// Assert the map holds exactly `expected` entries.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self
    where
        M: Debug,
    {
        let result = self.checks.assert_has_size(&self.info, self.actual, expected);
        self.handle(result)
    }

    /// Assert an entry exists under `key`.
    #[track_caller]
    pub fn contains_key(self, key: &M::Key) -> Self
    where
        M: Debug,
        M::Key: Debug,
        C: Comparison<M::Key>,
    {
        let result = self.checks.assert_contains_key(&self.info, self.actual, key);
        self.handle(result)
    }

    /// Assert no entry exists under `key`.
    #[track_caller]
    pub fn does_not_contain_key(self, key: &M::Key) -> Self
    where
        M: Debug,
        M::Key: Debug,
        C: Comparison<M::Key>,
    {
        let result = self
            .checks
            .assert_does_not_contain_key(&self.info, self.actual, key);
        self.handle(result)
    }

    /// Assert some entry holds `value`.
    #[track_caller]
    pub fn contains_value(self, value: &M::Value) -> Self
    where
        M: Debug,
        M::Value: Debug,
        C: Comparison<M::Value>,
    {
        let result = self
            .checks
            .assert_contains_value(&self.info, self.actual, value);
        self.handle(result)
    }

    /// Assert no entry holds `value`.
    #[track_caller]
    pub fn does_not_contain_value(self, value: &M::Value) -> Self
    where
        M: Debug,
        M::Value: Debug,
        C: Comparison<M::Value>,
    {
        let result = self
            .checks
            .assert_does_not_contain_value(&self.info, self.actual, value);
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
