//! Matcher capability and the primitive matcher toolkit
//!
//! Every node of a synthesized matcher tree implements [`Matcher`].
//! Evaluation is a pure fold: each node returns a [`Verdict`] built from the
//! verdicts of its children, with no shared mutable reporter.

pub mod collections;
pub mod basic;
pub mod map;
pub mod optional;

use crate::description::Description;
use crate::errors::Result;
use crate::value::Value;

pub use self::collections::{ContainsInAnyOrder, ContainsInOrder, IsArray, IsEmptyArray, IsEmptyIterable};
pub use self::basic::{AllOf, IsEqual, IsNull, NullIterable};
pub use self::map::HasEntry;
pub use self::optional::{HasValue, IsAbsent};

pub type BoxedMatcher = Box<dyn Matcher>;

/// Outcome of applying a matcher to one actual value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    matched: bool,
    mismatch: String,
}

impl Verdict {
    pub fn new(matched: bool, mismatch: impl Into<String>) -> Self {
        Self {
            matched,
            mismatch: mismatch.into(),
        }
    }

    pub fn pass() -> Self {
        Self::new(true, "")
    }

    pub fn fail(mismatch: impl Into<String>) -> Self {
        Self::new(false, mismatch)
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Mismatch description; only meaningful when the value did not match
    pub fn mismatch(&self) -> &str {
        &self.mismatch
    }
}

pub trait Matcher: Send + Sync {
    /// Describe what this matcher expects
    fn describe_to(&self, description: &mut Description);

    /// Apply the matcher to `actual`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::TypeMismatch`] when an accessor derived from the
    /// expected value cannot read `actual`.
    ///
    /// [`MatchError::TypeMismatch`]: crate::errors::MatchError::TypeMismatch
    fn evaluate(&self, actual: &Value) -> Result<Verdict>;

    fn matches(&self, actual: &Value) -> Result<bool> {
        Ok(self.evaluate(actual)?.matched())
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) -> Result<()> {
        let verdict = self.evaluate(actual)?;
        description.append_text(verdict.mismatch());
        Ok(())
    }

    fn description(&self) -> String {
        let mut description = Description::new();
        self.describe_to(&mut description);
        description.into_string()
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        (**self).evaluate(actual)
    }
}

/// Mismatch for an actual value of the wrong kind
pub(crate) fn wrong_kind(actual: &Value) -> Verdict {
    let mut description = Description::new();
    match actual {
        Value::Null => description.append_text("was null"),
        other => description
            .append_text("was a ")
            .append_text(other.type_name())
            .append_text(" (")
            .append_value(other)
            .append_text(")"),
    };
    Verdict::fail(description.into_string())
}

/// Mismatch of the form `was <value>`
pub(crate) fn was(actual: &Value) -> String {
    let mut description = Description::new();
    description.append_text("was ").append_value(actual);
    description.into_string()
}
