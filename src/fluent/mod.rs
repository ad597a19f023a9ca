//! Fluent expectation API over sequences and maps.
//!
//! This module wraps the check sets in a Jest-like builder. Checks
//! evaluate immediately and panic on failure, or accumulate failures
//! when the expectation was created through [`SoftChecks`].
//!
//! # Example
//!
//! ```rust
//! use affirm::{expect, SoftChecks};
//!
//! // Immediate evaluation (panics on failure)
//! expect(&[6, 8, 10, 12])
//!     .described_as("readings")
//!     .contains(&[8, 10])
//!     .ends_with(&[10, 12]);
//!
//! // Soft evaluation (failures accumulate)
//! let soft = SoftChecks::new();
//! soft.expect(&[6, 8]).has_size(3);
//! assert_eq!(soft.failures().len(), 1);
//! ```

mod map;
mod sequence;
mod soft;

pub use map::{expect_map, expect_map_option, MapExpectation};
pub use sequence::{expect, expect_option, SequenceExpectation};
pub use soft::SoftChecks;
