//! Equality, null and conjunction matchers

use super::{was, BoxedMatcher, Matcher, Verdict};
use crate::description::Description;
use crate::errors::Result;
use crate::value::Value;

/// Matches values equal to the expected value
#[derive(Debug, Clone)]
pub struct IsEqual {
    expected: Value,
}

impl IsEqual {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for IsEqual {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        Ok(Verdict::new(*actual == self.expected, was(actual)))
    }
}

/// Matches only null
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNull;

impl Matcher for IsNull {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("null");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        Ok(Verdict::new(actual.is_null(), was(actual)))
    }
}

/// Matches only null, for properties declared as iterables.
///
/// Never iterates the actual value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullIterable;

impl Matcher for NullIterable {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("null");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        Ok(Verdict::new(actual.is_null(), was(actual)))
    }
}

/// Matches when every inner matcher matches
pub struct AllOf {
    matchers: Vec<BoxedMatcher>,
}

impl AllOf {
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AllOf {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " and ", ")", &self.matchers);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        for matcher in &self.matchers {
            let verdict = matcher.evaluate(actual)?;
            if !verdict.matched() {
                let mut mismatch = Description::new();
                mismatch
                    .append_description_of(&**matcher)
                    .append_text(" ")
                    .append_text(verdict.mismatch());
                return Ok(Verdict::fail(mismatch.into_string()));
            }
        }
        Ok(Verdict::pass())
    }
}
