//! Optional value matchers

use super::{wrong_kind, BoxedMatcher, Matcher, Verdict};
use crate::description::Description;
use crate::errors::Result;
use crate::value::Value;

/// Matches an absent optional
#[derive(Debug, Clone, Copy, Default)]
pub struct IsAbsent;

impl Matcher for IsAbsent {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("is <Empty>");
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Value::Optional(optional) = actual else {
            return Ok(wrong_kind(actual));
        };
        match optional.get() {
            None => Ok(Verdict::pass()),
            Some(inner) => {
                let mut mismatch = Description::new();
                mismatch.append_text("had value ").append_value(inner);
                Ok(Verdict::fail(mismatch.into_string()))
            }
        }
    }
}

/// Matches a present optional whose value satisfies the inner matcher
pub struct HasValue {
    inner: BoxedMatcher,
}

impl HasValue {
    pub fn new(inner: BoxedMatcher) -> Self {
        Self { inner }
    }
}

impl Matcher for HasValue {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("has value that is ");
        self.inner.describe_to(description);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        let Value::Optional(optional) = actual else {
            return Ok(wrong_kind(actual));
        };
        match optional.get() {
            None => Ok(Verdict::fail("was <Empty>")),
            Some(inner) => {
                let verdict = self.inner.evaluate(inner)?;
                Ok(Verdict::new(
                    verdict.matched(),
                    format!("value {}", verdict.mismatch()),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::IsEqual;
    use crate::value::Reflect;

    #[test]
    fn test_is_absent() {
        assert_eq!(IsAbsent.description(), "is <Empty>");
        assert!(IsAbsent.matches(&None::<String>.reflect()).unwrap());
        let verdict = IsAbsent.evaluate(&Some("a").reflect()).unwrap();
        assert_eq!(verdict.mismatch(), "had value \"a\"");
    }

    #[test]
    fn test_has_value() {
        let matcher = HasValue::new(Box::new(IsEqual::new("a".reflect())));
        assert_eq!(matcher.description(), "has value that is \"a\"");
        assert!(matcher.matches(&Some("a").reflect()).unwrap());
        assert_eq!(
            matcher.evaluate(&Some("b").reflect()).unwrap().mismatch(),
            "value was \"b\""
        );
        assert_eq!(
            matcher.evaluate(&None::<&str>.reflect()).unwrap().mismatch(),
            "was <Empty>"
        );
    }
}
