//! Checks over key/value stores.

use std::fmt::Debug;

use crate::comparison::{Comparison, StandardComparison};
use crate::container::MapView;
use crate::descriptors::{
    should_be_empty, should_be_null_or_empty, should_contain_key, should_contain_value,
    should_have_size, should_not_be_empty, should_not_be_null, should_not_contain_key,
    should_not_contain_value,
};
use crate::failures::{AssertionFailure, Failures};
use crate::info::AssertionInfo;

/// Containment checks over any [`MapView`].
///
/// Key and value lookups go through the injected comparison strategy,
/// exactly as element lookups do for sequences; the method-level bounds
/// select `Comparison<Key>` or `Comparison<Value>` as needed. A null
/// key is modeled by choosing `Option<K>` as the key type, which flows
/// through strategy equality with no special casing.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use affirm::{AssertionInfo, Maps};
///
/// let mut jedi = HashMap::new();
/// jedi.insert("name", "Yoda");
///
/// let checks = Maps::new();
/// let info = AssertionInfo::new();
/// assert!(checks.assert_contains_key(&info, Some(&jedi), &"name").is_ok());
/// assert!(checks.assert_contains_key(&info, Some(&jedi), &"power").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Maps<C> {
    comparison: C,
    failures: Failures,
}

impl Maps<StandardComparison> {
    /// Check set using the key and value types' own equality.
    pub fn new() -> Self {
        Self::with_comparison(StandardComparison)
    }
}

impl Default for Maps<StandardComparison> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Maps<C> {
    /// Check set using `comparison` for key and value equality.
    pub fn with_comparison(comparison: C) -> Self {
        Self {
            comparison,
            failures: Failures::new(),
        }
    }

    /// Assert the actual is null or holds no entries.
    ///
    /// The one check where a `None` actual succeeds.
    pub fn assert_null_or_empty<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
    {
        match actual {
            None => Ok(()),
            Some(actual) if actual.is_empty() => Ok(()),
            Some(actual) => self.failures.fail(info, should_be_null_or_empty(&actual)),
        }
    }

    /// Assert the actual holds no entries.
    pub fn assert_empty<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.is_empty() {
            return Ok(());
        }
        self.failures.fail(info, should_be_empty(&actual))
    }

    /// Assert the actual holds at least one entry.
    pub fn assert_not_empty<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.is_empty() {
            return self.failures.fail(info, should_not_be_empty());
        }
        Ok(())
    }

    /// Assert the actual holds exactly `expected_size` entries.
    pub fn assert_has_size<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
        expected_size: usize,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
    {
        let actual = self.assert_not_null(info, actual)?;
        if actual.len() == expected_size {
            return Ok(());
        }
        self.failures
            .fail(info, should_have_size(&actual, actual.len(), expected_size))
    }

    /// Assert the actual holds an entry under `key`.
    pub fn assert_contains_key<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
        key: &M::Key,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
        M::Key: Debug,
        C: Comparison<M::Key>,
    {
        let actual = self.assert_not_null(info, actual)?;
        if self.contains_key(actual, key) {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_contain_key(&actual, &key).with_strategy(self.comparison.description()),
        )
    }

    /// Assert the actual holds no entry under `key`.
    pub fn assert_does_not_contain_key<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
        key: &M::Key,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
        M::Key: Debug,
        C: Comparison<M::Key>,
    {
        let actual = self.assert_not_null(info, actual)?;
        if !self.contains_key(actual, key) {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_not_contain_key(&actual, &key).with_strategy(self.comparison.description()),
        )
    }

    /// Assert some entry of the actual holds `value`.
    pub fn assert_contains_value<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
        value: &M::Value,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
        M::Value: Debug,
        C: Comparison<M::Value>,
    {
        let actual = self.assert_not_null(info, actual)?;
        if self.contains_value(actual, value) {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_contain_value(&actual, &value).with_strategy(self.comparison.description()),
        )
    }

    /// Assert no entry of the actual holds `value`.
    pub fn assert_does_not_contain_value<M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&M>,
        value: &M::Value,
    ) -> Result<(), AssertionFailure>
    where
        M: MapView + Debug,
        M::Value: Debug,
        C: Comparison<M::Value>,
    {
        let actual = self.assert_not_null(info, actual)?;
        if !self.contains_value(actual, value) {
            return Ok(());
        }
        self.failures.fail(
            info,
            should_not_contain_value(&actual, &value)
                .with_strategy(self.comparison.description()),
        )
    }

    fn assert_not_null<'a, M>(
        &self,
        info: &AssertionInfo,
        actual: Option<&'a M>,
    ) -> Result<&'a M, AssertionFailure> {
        match actual {
            Some(actual) => Ok(actual),
            None => self.failures.fail(info, should_not_be_null()),
        }
    }

    fn contains_key<M>(&self, actual: &M, key: &M::Key) -> bool
    where
        M: MapView,
        C: Comparison<M::Key>,
    {
        actual
            .keys()
            .any(|candidate| self.comparison.are_equal(candidate, key))
    }

    fn contains_value<M>(&self, actual: &M, value: &M::Value) -> bool
    where
        M: MapView,
        C: Comparison<M::Value>,
    {
        actual
            .values()
            .any(|candidate| self.comparison.are_equal(candidate, value))
    }
}
