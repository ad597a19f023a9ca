//! Failure construction and raising.
//!
//! Every assertion failure in this crate is built by [`Failures`], which
//! renders an [`ErrorDescriptor`] through the caller's representation
//! policy and prefixes the caller's description when one is set.
//! [`Failures::failure`] only builds, so a soft-checking caller can
//! collect the result instead of raising; [`Failures::fail`] builds and
//! raises in one step. Usage faults (empty expected arguments) never
//! come through here; they panic at the check entry point.

use crate::descriptors::ErrorDescriptor;
use crate::info::AssertionInfo;

/// A failed check, carrying its fully rendered message.
///
/// The message is final once built: rendering happened through the
/// check's representation policy, and the caller's description (if any)
/// is already prefixed. Two failures from identical inputs compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Builds assertion failures; the single path every failed check takes.
///
/// # Example
///
/// ```rust
/// use affirm::{AssertionInfo, Failures};
/// use affirm::descriptors::should_not_be_null;
///
/// let failures = Failures::new();
/// let info = AssertionInfo::new().with_description("config");
///
/// let failure = failures.failure(&info, should_not_be_null());
/// assert_eq!(failure.message(), "[config] expected actual not to be null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures;

impl Failures {
    /// Create a reporter.
    pub fn new() -> Self {
        Self
    }

    /// Build a failure without raising it.
    ///
    /// This is the hook for soft-checking callers that aggregate
    /// several failures before terminating.
    pub fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor<'_>) -> AssertionFailure {
        let message = descriptor.message(info.representation());
        let message = match info.description() {
            Some(description) => format!("[{}] {}", description, message),
            None => message,
        };
        AssertionFailure::new(message)
    }

    /// Build a failure and raise it as `Err`.
    pub fn fail<T>(
        &self,
        info: &AssertionInfo,
        descriptor: ErrorDescriptor<'_>,
    ) -> Result<T, AssertionFailure> {
        Err(self.failure(info, descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{should_end_with, should_not_be_null};
    use crate::info::TruncatingRepresentation;

    #[test]
    fn test_failure_builds_without_raising() {
        let failures = Failures::new();
        let info = AssertionInfo::new();

        let failure = failures.failure(&info, should_not_be_null());
        assert_eq!(failure.message(), "expected actual not to be null");
    }

    #[test]
    fn test_fail_raises() {
        let failures = Failures::new();
        let info = AssertionInfo::new();

        let result: Result<(), AssertionFailure> = failures.fail(&info, should_not_be_null());
        assert!(result.is_err());
    }

    #[test]
    fn test_description_is_prefixed() {
        let failures = Failures::new();
        let info = AssertionInfo::new().with_description("upgrade plan");
        let actual = [1, 2];
        let sequence = [3];

        let failure = failures.failure(&info, should_end_with(&actual, &sequence));
        assert_eq!(
            failure.message(),
            "[upgrade plan] expected [1, 2] to end with [3]"
        );
    }

    #[test]
    fn test_message_uses_the_info_representation() {
        let failures = Failures::new();
        let info = AssertionInfo::new().with_representation(TruncatingRepresentation::new(8));
        let actual = "abcdefghijklmnop";
        let sequence = "z";

        let failure = failures.failure(&info, should_end_with(&actual, &sequence));
        assert_eq!(failure.message(), "expected \"abcd... to end with \"z\"");
    }

    #[test]
    fn test_identical_inputs_build_identical_failures() {
        let failures = Failures::new();
        let info = AssertionInfo::new().with_description("twice");
        let actual = [1];
        let sequence = [2];

        let first = failures.failure(&info, should_end_with(&actual, &sequence));
        let second = failures.failure(&info, should_end_with(&actual, &sequence));
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_message() {
        let failures = Failures::new();
        let info = AssertionInfo::new();

        let failure = failures.failure(&info, should_not_be_null());
        assert_eq!(failure.to_string(), failure.message());
    }
}
