//! Iterable and array matchers

use super::{wrong_kind, BoxedMatcher, Matcher, Verdict};
use crate::description::Description;
use crate::errors::Result;
use crate::value::Value;

/// Matches an empty list or set
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmptyIterable;

impl Matcher for IsEmptyIterable {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an empty iterable");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Some(items) = actual.iterable_items() else {
            return Ok(wrong_kind(actual));
        };
        let mut mismatch = Description::new();
        mismatch.append_value_list("[", ",", "]", items);
        Ok(Verdict::new(items.is_empty(), mismatch.into_string()))
    }
}

/// Matches an iterable whose items match the given matchers one to one, in
/// order
pub struct ContainsInOrder {
    matchers: Vec<BoxedMatcher>,
    lists_only: bool,
}

impl ContainsInOrder {
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self {
            matchers,
            lists_only: false,
        }
    }

    /// Reject sets, whose iteration order carries no meaning
    pub fn lists_only(mut self) -> Self {
        self.lists_only = true;
        self
    }
}

impl Matcher for ContainsInOrder {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable containing ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let items = match actual {
            Value::List(sequence) => sequence.items(),
            Value::Set(sequence) if !self.lists_only => sequence.items(),
            _ => return Ok(wrong_kind(actual)),
        };
        let mut mismatch = Description::new();
        for (i, item) in items.iter().enumerate() {
            let Some(matcher) = self.matchers.get(i) else {
                mismatch.append_text("Not matched: ").append_value(item);
                return Ok(Verdict::fail(mismatch.into_string()));
            };
            let verdict = matcher.evaluate(item)?;
            if !verdict.matched() {
                mismatch
                    .append_text(&format!("item {}: ", i))
                    .append_text(verdict.mismatch());
                return Ok(Verdict::fail(mismatch.into_string()));
            }
        }
        if let Some(missing) = self.matchers.get(items.len()) {
            mismatch
                .append_text("No item matched: ")
                .append_description_of(&**missing);
            return Ok(Verdict::fail(mismatch.into_string()));
        }
        Ok(Verdict::pass())
    }
}

/// Matches an iterable whose items match the given matchers one to one, in
/// any order.
///
/// Each item consumes the first remaining matcher it satisfies.
pub struct ContainsInAnyOrder {
    matchers: Vec<BoxedMatcher>,
    sets_only: bool,
}

impl ContainsInAnyOrder {
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self {
            matchers,
            sets_only: false,
        }
    }

    /// Reject ordered lists
    pub fn sets_only(mut self) -> Self {
        self.sets_only = true;
        self
    }
}

impl Matcher for ContainsInAnyOrder {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable over ")
            .append_list("[", ", ", "]", &self.matchers)
            .append_text(" in any order");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let items = match actual {
            Value::Set(sequence) => sequence.items(),
            Value::List(sequence) if !self.sets_only => sequence.items(),
            _ => return Ok(wrong_kind(actual)),
        };
        let mut remaining: Vec<&BoxedMatcher> = self.matchers.iter().collect();
        let mut mismatch = Description::new();
        for item in items {
            if remaining.is_empty() {
                mismatch.append_text("no match for: ").append_value(item);
                return Ok(Verdict::fail(mismatch.into_string()));
            }
            let mut found = None;
            for (i, matcher) in remaining.iter().enumerate() {
                if matcher.matches(item)? {
                    found = Some(i);
                    break;
                }
            }
            match found {
                Some(i) => {
                    remaining.remove(i);
                }
                None => {
                    mismatch.append_text("Not matched: ").append_value(item);
                    return Ok(Verdict::fail(mismatch.into_string()));
                }
            }
        }
        if !remaining.is_empty() {
            mismatch
                .append_text("No item matches: ")
                .append_list("", ", ", "", remaining.iter().copied())
                .append_text(" in ")
                .append_value_list("[", ", ", "]", items);
            return Ok(Verdict::fail(mismatch.into_string()));
        }
        Ok(Verdict::pass())
    }
}

/// Matches an empty array
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmptyArray;

impl Matcher for IsEmptyArray {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an empty array");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Value::Array(sequence) = actual else {
            return Ok(wrong_kind(actual));
        };
        let mut mismatch = Description::new();
        mismatch
            .append_text("array size was ")
            .append_value(&Value::size(sequence.len()));
        Ok(Verdict::new(sequence.is_empty(), mismatch.into_string()))
    }
}

/// Matches an array whose elements match the given matchers position by
/// position
pub struct IsArray {
    matchers: Vec<BoxedMatcher>,
}

impl IsArray {
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self { matchers }
    }
}

impl Matcher for IsArray {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("[", ", ", "]", &self.matchers);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Value::Array(sequence) = actual else {
            return Ok(wrong_kind(actual));
        };
        let mut mismatch = Description::new();
        if sequence.len() != self.matchers.len() {
            mismatch
                .append_text("array length was ")
                .append_value(&Value::size(sequence.len()));
            return Ok(Verdict::fail(mismatch.into_string()));
        }
        for (i, (matcher, element)) in self.matchers.iter().zip(sequence.items()).enumerate() {
            let verdict = matcher.evaluate(element)?;
            if !verdict.matched() {
                mismatch
                    .append_text("element ")
                    .append_value(&Value::size(i))
                    .append_text(" ")
                    .append_text(verdict.mismatch());
                return Ok(Verdict::fail(mismatch.into_string()));
            }
        }
        Ok(Verdict::pass())
    }
}
