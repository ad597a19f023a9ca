//! Containment and ordering checks over container views.
//!
//! Two check sets live here: [`Sequences`] for ordered stores and
//! [`Maps`] for key/value stores. Each holds an injected comparison
//! strategy and a failure reporter; every method takes the assertion
//! context, the actual as `Option<&_>` (`None` models a null actual),
//! and the expected arguments, and returns
//! `Result<(), AssertionFailure>`.
//!
//! Two fault classes are kept apart:
//! - **usage faults**: a structurally invalid expected argument (an
//!   empty value list or sequence). These panic at the entry point,
//!   before the actual is even looked at, and never reach the reporter,
//!   so soft-checking callers cannot swallow them.
//! - **assertion failures**: the checked relationship does not hold,
//!   or the actual is `None` where a relationship requires a value.
//!   These always route through [`Failures`](crate::failures::Failures)
//!   and carry the caller's description and representation.
//!
//! A `None` actual fails every check except `assert_null_or_empty`,
//! where it is a success condition.

mod maps;
mod sequences;

pub use maps::Maps;
pub use sequences::Sequences;

/// Panic raised when a check is handed an empty expected argument.
///
/// A null expected argument cannot be expressed: expected values are
/// plain slices, so only the empty case is left to catch at runtime.
#[track_caller]
pub(crate) fn check_values_not_empty<T>(values: &[T]) {
    if values.is_empty() {
        panic!("the given values should not be empty");
    }
}
