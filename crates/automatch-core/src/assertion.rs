//! Assertion adapter for test code

use crate::description::Description;
use crate::errors::{MatchError, Result};
use crate::matchers::Matcher;
use crate::value::Reflect;

/// Check `actual` against `matcher`.
///
/// # Errors
///
/// Returns [`MatchError::AssertionFailed`] with the message
/// `"\nExpected: <description>\n     but: <mismatch>"` when the value does not
/// match, and propagates evaluation failures such as
/// [`MatchError::TypeMismatch`].
pub fn assert_that(actual: &dyn Reflect, matcher: &dyn Matcher) -> Result<()> {
    let actual = actual.reflect();
    let verdict = matcher.evaluate(&actual)?;
    if verdict.matched() {
        return Ok(());
    }
    let mut message = Description::new();
    message
        .append_text("\nExpected: ")
        .append_description_of(matcher)
        .append_text("\n     but: ")
        .append_text(verdict.mismatch());
    Err(MatchError::AssertionFailed {
        message: message.into_string(),
    })
}

/// Assert that a value satisfies a matcher, panicking with the assertion
/// message otherwise.
///
/// ```should_panic
/// use automatch::{assert_that, equal_to};
///
/// let matcher = equal_to(&"expected").unwrap();
/// assert_that!("actual", matcher);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        if let Err(err) = $crate::assertion::assert_that(&$actual, &$matcher) {
            panic!("{}", err);
        }
    };
}
