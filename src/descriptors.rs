//! The closed catalog of failed-check descriptions.
//!
//! Each constructor below captures the operands of one failure kind by
//! reference; nothing is rendered until [`ErrorDescriptor::message`] runs
//! the operands through the caller's [`Representation`]. Checks build a
//! descriptor and hand it to the reporter; they never format messages
//! themselves.

use std::fmt::Debug;

use crate::info::Representation;

/// A renderable description of one failed check.
///
/// Holds borrowed operands and an optional comparison-strategy name.
/// The message is assembled late, through the representation policy of
/// the check that failed, so the same descriptor renders identically on
/// repeat evaluations.
#[derive(Debug, Clone, Copy)]
pub struct ErrorDescriptor<'a> {
    kind: Kind<'a>,
    strategy: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
enum Kind<'a> {
    ActualIsNull,
    NullOrEmpty {
        actual: &'a dyn Debug,
    },
    Empty {
        actual: &'a dyn Debug,
    },
    NotEmpty,
    Size {
        actual: &'a dyn Debug,
        actual_size: usize,
        expected_size: usize,
    },
    Contain {
        actual: &'a dyn Debug,
        expected: &'a dyn Debug,
        missing: &'a dyn Debug,
    },
    ContainOnly {
        actual: &'a dyn Debug,
        expected: &'a dyn Debug,
        missing: &'a dyn Debug,
        unexpected: &'a dyn Debug,
    },
    NotContain {
        actual: &'a dyn Debug,
        expected: &'a dyn Debug,
        found: &'a dyn Debug,
    },
    StartWith {
        actual: &'a dyn Debug,
        sequence: &'a dyn Debug,
    },
    EndWith {
        actual: &'a dyn Debug,
        sequence: &'a dyn Debug,
    },
    ContainSequence {
        actual: &'a dyn Debug,
        sequence: &'a dyn Debug,
    },
    Duplicates {
        actual: &'a dyn Debug,
        duplicates: &'a dyn Debug,
    },
    ContainKey {
        actual: &'a dyn Debug,
        key: &'a dyn Debug,
    },
    NotContainKey {
        actual: &'a dyn Debug,
        key: &'a dyn Debug,
    },
    ContainValue {
        actual: &'a dyn Debug,
        value: &'a dyn Debug,
    },
    NotContainValue {
        actual: &'a dyn Debug,
        value: &'a dyn Debug,
    },
}

impl<'a> ErrorDescriptor<'a> {
    fn new(kind: Kind<'a>) -> Self {
        Self {
            kind,
            strategy: None,
        }
    }

    /// Attach the comparison strategy's name, if it has one.
    ///
    /// A named strategy adds a `when comparing values using {name}`
    /// suffix to the rendered message; `None` leaves the message as is,
    /// so standard-equality checks read unchanged.
    pub fn with_strategy(mut self, description: Option<&'a str>) -> Self {
        self.strategy = description;
        self
    }

    /// Render the failure message through `representation`.
    pub fn message(&self, representation: &dyn Representation) -> String {
        let rep = |value: &&dyn Debug| representation.represent(*value);

        let body = match &self.kind {
            Kind::ActualIsNull => "expected actual not to be null".to_string(),
            Kind::NullOrEmpty { actual } => {
                format!("expected {} to be null or empty", rep(actual))
            }
            Kind::Empty { actual } => format!("expected {} to be empty", rep(actual)),
            Kind::NotEmpty => "expected actual not to be empty".to_string(),
            Kind::Size {
                actual,
                actual_size,
                expected_size,
            } => format!(
                "expected {} to have size {} but was {}",
                rep(actual),
                expected_size,
                actual_size
            ),
            Kind::Contain {
                actual,
                expected,
                missing,
            } => format!(
                "expected {} to contain {} but could not find {}",
                rep(actual),
                rep(expected),
                rep(missing)
            ),
            Kind::ContainOnly {
                actual,
                expected,
                missing,
                unexpected,
            } => format!(
                "expected {} to contain only {}; could not find {}; did not expect {}",
                rep(actual),
                rep(expected),
                rep(missing),
                rep(unexpected)
            ),
            Kind::NotContain {
                actual,
                expected,
                found,
            } => format!(
                "expected {} not to contain {} but found {}",
                rep(actual),
                rep(expected),
                rep(found)
            ),
            Kind::StartWith { actual, sequence } => {
                format!("expected {} to start with {}", rep(actual), rep(sequence))
            }
            Kind::EndWith { actual, sequence } => {
                format!("expected {} to end with {}", rep(actual), rep(sequence))
            }
            Kind::ContainSequence { actual, sequence } => format!(
                "expected {} to contain sequence {}",
                rep(actual),
                rep(sequence)
            ),
            Kind::Duplicates { actual, duplicates } => format!(
                "expected {} not to have duplicates but found {}",
                rep(actual),
                rep(duplicates)
            ),
            Kind::ContainKey { actual, key } => {
                format!("expected {} to contain key {}", rep(actual), rep(key))
            }
            Kind::NotContainKey { actual, key } => {
                format!("expected {} not to contain key {}", rep(actual), rep(key))
            }
            Kind::ContainValue { actual, value } => {
                format!("expected {} to contain value {}", rep(actual), rep(value))
            }
            Kind::NotContainValue { actual, value } => {
                format!("expected {} not to contain value {}", rep(actual), rep(value))
            }
        };

        match self.strategy {
            Some(name) => format!("{} when comparing values using {}", body, name),
            None => body,
        }
    }
}

/// The actual was null where a relationship requires it present.
pub fn should_not_be_null<'a>() -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::ActualIsNull)
}

/// The actual held elements where null-or-empty was required.
pub fn should_be_null_or_empty(actual: &dyn Debug) -> ErrorDescriptor<'_> {
    ErrorDescriptor::new(Kind::NullOrEmpty { actual })
}

/// The actual held elements where empty was required.
pub fn should_be_empty(actual: &dyn Debug) -> ErrorDescriptor<'_> {
    ErrorDescriptor::new(Kind::Empty { actual })
}

/// The actual held no elements where at least one was required.
pub fn should_not_be_empty<'a>() -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::NotEmpty)
}

/// The actual's size differed from the required one.
pub fn should_have_size<'a>(
    actual: &'a dyn Debug,
    actual_size: usize,
    expected_size: usize,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::Size {
        actual,
        actual_size,
        expected_size,
    })
}

/// Some expected values were absent from the actual.
pub fn should_contain<'a>(
    actual: &'a dyn Debug,
    expected: &'a dyn Debug,
    missing: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::Contain {
        actual,
        expected,
        missing,
    })
}

/// The actual and the expected values differ as sets.
pub fn should_contain_only<'a>(
    actual: &'a dyn Debug,
    expected: &'a dyn Debug,
    missing: &'a dyn Debug,
    unexpected: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::ContainOnly {
        actual,
        expected,
        missing,
        unexpected,
    })
}

/// Some forbidden values were present in the actual.
pub fn should_not_contain<'a>(
    actual: &'a dyn Debug,
    expected: &'a dyn Debug,
    found: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::NotContain {
        actual,
        expected,
        found,
    })
}

/// The actual's prefix did not match the sequence.
pub fn should_start_with<'a>(
    actual: &'a dyn Debug,
    sequence: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::StartWith { actual, sequence })
}

/// The actual's suffix did not match the sequence.
pub fn should_end_with<'a>(actual: &'a dyn Debug, sequence: &'a dyn Debug) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::EndWith { actual, sequence })
}

/// No contiguous run of the actual matched the sequence.
pub fn should_contain_sequence<'a>(
    actual: &'a dyn Debug,
    sequence: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::ContainSequence { actual, sequence })
}

/// The actual held elements equal to each other.
pub fn should_not_have_duplicates<'a>(
    actual: &'a dyn Debug,
    duplicates: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::Duplicates { actual, duplicates })
}

/// The map held no entry under the key.
pub fn should_contain_key<'a>(actual: &'a dyn Debug, key: &'a dyn Debug) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::ContainKey { actual, key })
}

/// The map held an entry under a forbidden key.
pub fn should_not_contain_key<'a>(
    actual: &'a dyn Debug,
    key: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::NotContainKey { actual, key })
}

/// The map held no entry with the value.
pub fn should_contain_value<'a>(
    actual: &'a dyn Debug,
    value: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::ContainValue { actual, value })
}

/// The map held an entry with a forbidden value.
pub fn should_not_contain_value<'a>(
    actual: &'a dyn Debug,
    value: &'a dyn Debug,
) -> ErrorDescriptor<'a> {
    ErrorDescriptor::new(Kind::NotContainValue { actual, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{StandardRepresentation, TruncatingRepresentation};

    #[test]
    fn test_should_not_be_null_message() {
        let message = should_not_be_null().message(&StandardRepresentation);
        assert_eq!(message, "expected actual not to be null");
    }

    #[test]
    fn test_should_end_with_message() {
        let actual = [6, 8, 10, 12];
        let sequence = [20, 22];
        let message = should_end_with(&actual, &sequence).message(&StandardRepresentation);
        assert_eq!(message, "expected [6, 8, 10, 12] to end with [20, 22]");
    }

    #[test]
    fn test_strategy_suffix() {
        let actual = [6, 8, 10, 12];
        let sequence = [-8, 10, 12];
        let message = should_end_with(&actual, &sequence)
            .with_strategy(Some("AbsValueComparator"))
            .message(&StandardRepresentation);
        assert_eq!(
            message,
            "expected [6, 8, 10, 12] to end with [-8, 10, 12] \
             when comparing values using AbsValueComparator"
        );
    }

    #[test]
    fn test_no_strategy_leaves_message_unchanged() {
        let actual = [1];
        let sequence = [2];
        let plain = should_start_with(&actual, &sequence).message(&StandardRepresentation);
        let with_none = should_start_with(&actual, &sequence)
            .with_strategy(None)
            .message(&StandardRepresentation);
        assert_eq!(plain, with_none);
    }

    #[test]
    fn test_should_contain_names_the_missing_subset() {
        let actual = ["a", "b"];
        let expected = ["a", "c", "d"];
        let missing = [&"c", &"d"];
        let message =
            should_contain(&actual, &expected, &missing).message(&StandardRepresentation);
        assert_eq!(
            message,
            "expected [\"a\", \"b\"] to contain [\"a\", \"c\", \"d\"] \
             but could not find [\"c\", \"d\"]"
        );
    }

    #[test]
    fn test_should_contain_only_names_both_sets() {
        let actual = [1, 2, 3];
        let expected = [1, 4];
        let missing = [&4];
        let unexpected = [&2, &3];
        let message = should_contain_only(&actual, &expected, &missing, &unexpected)
            .message(&StandardRepresentation);
        assert_eq!(
            message,
            "expected [1, 2, 3] to contain only [1, 4]; \
             could not find [4]; did not expect [2, 3]"
        );
    }

    #[test]
    fn test_should_have_size_message() {
        let actual = [1, 2, 3];
        let message = should_have_size(&actual, 3, 5).message(&StandardRepresentation);
        assert_eq!(message, "expected [1, 2, 3] to have size 5 but was 3");
    }

    #[test]
    fn test_map_key_message() {
        let actual = "map";
        let key = "power";
        let message = should_contain_key(&actual, &key).message(&StandardRepresentation);
        assert_eq!(message, "expected \"map\" to contain key \"power\"");
    }

    #[test]
    fn test_rendering_honors_the_representation() {
        let actual = "a rather long value that will not fit";
        let message = should_be_empty(&actual).message(&TruncatingRepresentation::new(12));
        assert_eq!(message, "expected \"a rather... to be empty");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let actual = [1, 2];
        let sequence = [3];
        let first = should_contain_sequence(&actual, &sequence).message(&StandardRepresentation);
        let second = should_contain_sequence(&actual, &sequence).message(&StandardRepresentation);
        assert_eq!(first, second);
    }
}
