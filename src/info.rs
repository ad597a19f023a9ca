//! Assertion context threaded through every check.
//!
//! [`AssertionInfo`] carries the caller-supplied description and the
//! [`Representation`] policy used to render values into failure
//! messages. Checks only read it; the reporter applies it when a
//! failure is built.

use std::fmt;
use std::fmt::Debug;
use std::sync::Arc;

/// Value-to-string policy for failure messages.
///
/// Implementations must be deterministic: the same input renders to the
/// same string, so a failing check reported twice reads identically.
pub trait Representation {
    /// Render a value for inclusion in a failure message.
    fn represent(&self, value: &dyn Debug) -> String;
}

/// Default representation: the value's `Debug` rendering, untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRepresentation;

impl Representation for StandardRepresentation {
    fn represent(&self, value: &dyn Debug) -> String {
        format!("{:?}", value)
    }
}

/// Representation that truncates long renderings.
///
/// Truncation counts characters, not bytes, so multi-byte values are
/// cut safely. Three characters are reserved for the `...` marker.
#[derive(Debug, Clone, Copy)]
pub struct TruncatingRepresentation {
    max_chars: usize,
}

impl TruncatingRepresentation {
    /// Create a representation that truncates renderings to `max_chars`.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for TruncatingRepresentation {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Representation for TruncatingRepresentation {
    fn represent(&self, value: &dyn Debug) -> String {
        let rendered = format!("{:?}", value);
        let char_count = rendered.chars().count();

        if char_count <= self.max_chars {
            rendered
        } else {
            let truncated: String = rendered
                .chars()
                .take(self.max_chars.saturating_sub(3))
                .collect();
            format!("{}...", truncated)
        }
    }
}

/// Caller-supplied context carried through a check.
///
/// Immutable once built: checks read the description and the
/// representation, never change them. Cloning is cheap; the
/// representation is shared.
///
/// # Example
///
/// ```rust
/// use affirm::AssertionInfo;
///
/// let info = AssertionInfo::new().with_description("config keys");
/// assert_eq!(info.description(), Some("config keys"));
/// ```
#[derive(Clone)]
pub struct AssertionInfo {
    description: Option<String>,
    representation: Arc<dyn Representation + Send + Sync>,
}

impl AssertionInfo {
    /// Create a context with no description and the standard representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the human-readable description prefixed to failure messages.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the representation used to render values into messages.
    pub fn with_representation(
        mut self,
        representation: impl Representation + Send + Sync + 'static,
    ) -> Self {
        self.representation = Arc::new(representation);
        self
    }

    /// The caller-supplied description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The representation used when rendering values into messages.
    pub fn representation(&self) -> &dyn Representation {
        self.representation.as_ref()
    }
}

impl Default for AssertionInfo {
    fn default() -> Self {
        Self {
            description: None,
            representation: Arc::new(StandardRepresentation),
        }
    }
}

impl fmt::Debug for AssertionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionInfo")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
