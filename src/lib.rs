//! # affirm
//!
//! A fluent assertion library for sequences and maps.
//!
//! Every containment check runs against an injected equality strategy, so the
//! same logic serves plain equality, comparator-defined equality, and pattern
//! matching. Failure messages come from a fixed catalog and are rendered
//! through a pluggable representation, so identical failures read identically.
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm::expect;
//!
//! expect(&[6, 8, 10, 12])
//!     .contains(&[8, 6])
//!     .starts_with(&[6, 8])
//!     .does_not_contain(&[5]);
//! ```
//!
//! ## Custom Equality
//!
//! ```rust
//! use affirm::expect;
//!
//! expect(&[6, 8, 10, 12])
//!     .using_comparator("AbsValueComparator", |a: &i32, b: &i32| a.abs().cmp(&b.abs()))
//!     .ends_with(&[-8, 10, 12]);
//! ```
//!
//! ## Maps
//!
//! ```rust
//! use std::collections::HashMap;
//! use affirm::expect_map;
//!
//! let mut jedi = HashMap::new();
//! jedi.insert("name", "Yoda");
//!
//! expect_map(&jedi)
//!     .contains_key(&"name")
//!     .does_not_contain_value(&"red");
//! ```
//!
//! ## Soft Mode
//!
//! ```rust
//! use affirm::SoftChecks;
//!
//! let soft = SoftChecks::new();
//! soft.expect(&[1, 2, 3]).contains(&[2]);
//! soft.expect(&[1, 2, 3]).has_size(3);
//! soft.assert_all();
//! ```

pub mod checks;
pub mod comparison;
pub mod container;
pub mod descriptors;
pub mod failures;
pub mod fluent;
pub mod info;

// Fluent entry points
pub use fluent::{
    expect, expect_map, expect_map_option, expect_option, MapExpectation, SequenceExpectation,
    SoftChecks,
};

// Core check sets
pub use checks::{Maps, Sequences};

// Equality strategies
pub use comparison::{ComparatorComparison, Comparison, PatternComparison, StandardComparison};

// Container abstractions
pub use container::{Elements, MapView, Sequence};

// Failure reporting
pub use descriptors::ErrorDescriptor;
pub use failures::{AssertionFailure, Failures};

// Check metadata and value rendering
pub use info::{AssertionInfo, Representation, StandardRepresentation, TruncatingRepresentation};
