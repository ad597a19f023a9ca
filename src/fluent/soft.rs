//! Soft mode: collect failures instead of panicking at the first one.

use std::cell::RefCell;
use std::rc::Rc;

use super::map::MapExpectation;
use super::sequence::SequenceExpectation;
use crate::comparison::StandardComparison;
use crate::container::{MapView, Sequence};
use crate::failures::AssertionFailure;

/// Shared sink the expectations push failures into.
///
/// Cloning shares the underlying list, so every expectation spawned by
/// one [`SoftChecks`] reports to the same place.
#[derive(Debug, Clone, Default)]
pub(crate) struct FailureCollector {
    failures: Rc<RefCell<Vec<AssertionFailure>>>,
}

impl FailureCollector {
    pub(crate) fn push(&self, failure: AssertionFailure) {
        self.failures.borrow_mut().push(failure);
    }

    fn snapshot(&self) -> Vec<AssertionFailure> {
        self.failures.borrow().clone()
    }
}

/// Runs checks in soft mode: failures accumulate and the test keeps
/// going, so one run reports everything that is wrong.
///
/// Expectations created through a `SoftChecks` never panic on an
/// assertion failure. Usage faults (an empty expected argument) still
/// panic immediately; those are bugs in the test, not findings.
///
/// # Example
///
/// ```rust
/// use affirm::SoftChecks;
///
/// let soft = SoftChecks::new();
/// soft.expect(&[1, 2, 3]).contains(&[9]).has_size(2);
/// soft.expect(&[4, 5]).starts_with(&[4]);
///
/// assert_eq!(soft.failures().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SoftChecks {
    collector: FailureCollector,
}

impl SoftChecks {
    /// Create an empty soft-mode session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a soft expectation on a sequence.
    pub fn expect<'a, S>(&self, actual: &'a S) -> SequenceExpectation<'a, S, StandardComparison>
    where
        S: Sequence + ?Sized,
    {
        SequenceExpectation::new(Some(actual), Some(self.collector.clone()))
    }

    /// Create a soft expectation on a sequence that may be absent.
    pub fn expect_option<'a, S>(
        &self,
        actual: Option<&'a S>,
    ) -> SequenceExpectation<'a, S, StandardComparison>
    where
        S: Sequence + ?Sized,
    {
        SequenceExpectation::new(actual, Some(self.collector.clone()))
    }

    /// Create a soft expectation on a map.
    pub fn expect_map<'a, M>(&self, actual: &'a M) -> MapExpectation<'a, M, StandardComparison>
    where
        M: MapView,
    {
        MapExpectation::new(Some(actual), Some(self.collector.clone()))
    }

    /// Create a soft expectation on a map that may be absent.
    pub fn expect_map_option<'a, M>(
        &self,
        actual: Option<&'a M>,
    ) -> MapExpectation<'a, M, StandardComparison>
    where
        M: MapView,
    {
        MapExpectation::new(actual, Some(self.collector.clone()))
    }

    /// Every failure collected so far, in the order the checks ran.
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.collector.snapshot()
    }

    /// True while no check has failed.
    pub fn passed(&self) -> bool {
        self.collector.failures.borrow().is_empty()
    }

    /// Finish the session, returning the collected failures if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::SoftChecks;
    ///
    /// let soft = SoftChecks::new();
    /// soft.expect(&[1, 2, 3]).contains(&[2]);
    /// assert!(soft.into_result().is_ok());
    /// ```
    pub fn into_result(self) -> Result<(), Vec<AssertionFailure>> {
        let failures = self.collector.snapshot();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// Panic with a numbered list of every collected failure.
    ///
    /// Does nothing when all checks passed.
    ///
    /// # Panics
    ///
    /// Panics if any check failed.
    #[track_caller]
    pub fn assert_all(&self) {
        let failures = self.collector.snapshot();
        if failures.is_empty() {
            return;
        }

        let mut message = format!("{} soft check(s) failed:\n", failures.len());
        for (i, failure) in failures.iter().enumerate() {
            message.push_str(&format!("  {}. {}\n", i + 1, failure));
        }
        panic!("assertion failed: {}", message);
    }
}
