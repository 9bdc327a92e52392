//! Map entry matcher

use super::{wrong_kind, BoxedMatcher, Matcher, Verdict};
use crate::description::Description;
use crate::errors::Result;
use crate::value::Value;

/// Matches a map containing at least one entry whose key and value match
pub struct HasEntry {
    key: BoxedMatcher,
    value: BoxedMatcher,
}

impl HasEntry {
    pub fn new(key: BoxedMatcher, value: BoxedMatcher) -> Self {
        Self { key, value }
    }
}

impl Matcher for HasEntry {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("map containing [")
            .append_description_of(&*self.key)
            .append_text("->")
            .append_description_of(&*self.value)
            .append_text("]");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Value::Map(map) = actual else {
            return Ok(wrong_kind(actual));
        };
        for (key, value) in map.entries() {
            if self.key.matches(key)? && self.value.matches(value)? {
                return Ok(Verdict::pass());
            }
        }
        let mut mismatch = Description::new();
        mismatch.append_text("map was [");
        for (i, (key, value)) in map.entries().iter().enumerate() {
            if i > 0 {
                mismatch.append_text(", ");
            }
            mismatch.append_text(&format!("<{}={}>", key, value));
        }
        mismatch.append_text("]");
        Ok(Verdict::fail(mismatch.into_string()))
    }
}
