//! Public entry points: synthesize matchers from expected values

use crate::core_types::schema;
use crate::description::Description;
use crate::errors::Result;
use crate::matchers::{BoxedMatcher, ContainsInAnyOrder, ContainsInOrder, Matcher, Verdict};
use crate::synthesize::Synthesizer;
use crate::value::{Reflect, Value};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// A synthesized matcher applied directly to reflectable values
pub struct AutoMatcher {
    inner: BoxedMatcher,
}

impl AutoMatcher {
    pub fn new(inner: BoxedMatcher) -> Self {
        Self { inner }
    }

    /// Whether `actual` structurally equals the expected value
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::TypeMismatch`] when `actual` cannot be read with
    /// accessors of the expected type.
    ///
    /// [`MatchError::TypeMismatch`]: crate::errors::MatchError::TypeMismatch
    pub fn matches(&self, actual: &dyn Reflect) -> Result<bool> {
        self.inner.matches(&actual.reflect())
    }

    pub fn describe_expected(&self) -> String {
        self.inner.description()
    }

    /// Mismatch trace for `actual`
    ///
    /// # Errors
    ///
    /// See [`AutoMatcher::matches`].
    pub fn describe_mismatch(&self, actual: &dyn Reflect) -> Result<String> {
        let mut description = Description::new();
        self.inner.describe_mismatch(&actual.reflect(), &mut description)?;
        Ok(description.into_string())
    }

    pub fn into_inner(self) -> BoxedMatcher {
        self.inner
    }
}

impl Matcher for AutoMatcher {
    fn describe_to(&self, description: &mut Description) {
        self.inner.describe_to(description);
    }

    fn evaluate(&self, actual: &Value) -> Result<Verdict> {
        self.inner.evaluate(actual)
    }
}

impl Synthesizer {
    /// Matcher for values structurally equal to `expected`
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NullExpected`] when `expected` reflects to null
    /// and [`MatchError::NoProperties`] when it contains an object without
    /// properties.
    ///
    /// [`MatchError::NullExpected`]: crate::errors::MatchError::NullExpected
    /// [`MatchError::NoProperties`]: crate::errors::MatchError::NoProperties
    pub fn equal_to(&self, expected: &dyn Reflect) -> Result<AutoMatcher> {
        let expected = expected.reflect();
        log_op_start!(schema::OP_EQUAL_TO, type_name = expected.type_name());
        let start = Instant::now();

        let matcher = self.synthesize(&expected).map_err(|e| {
            log_op_error!(
                schema::OP_EQUAL_TO,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                type_name = expected.type_name()
            );
            e
        })?;

        log_op_end!(
            schema::OP_EQUAL_TO,
            duration_ms = start.elapsed().as_millis() as u64,
            type_name = expected.type_name()
        );
        Ok(AutoMatcher::new(matcher))
    }

    /// Matcher for iterables whose items equal `expected`, in order
    ///
    /// # Errors
    ///
    /// See [`Synthesizer::equal_to`].
    pub fn contains<T: Reflect>(&self, expected: &[T]) -> Result<AutoMatcher> {
        self.sequence(schema::OP_CONTAINS, expected, |matchers| {
            Box::new(ContainsInOrder::new(matchers))
        })
    }

    /// Matcher for iterables whose items equal `expected`, in any order
    ///
    /// # Errors
    ///
    /// See [`Synthesizer::equal_to`].
    pub fn contains_in_any_order<T: Reflect>(&self, expected: &[T]) -> Result<AutoMatcher> {
        self.sequence(schema::OP_CONTAINS_IN_ANY_ORDER, expected, |matchers| {
            Box::new(ContainsInAnyOrder::new(matchers))
        })
    }

    fn sequence<T, F>(&self, op: &str, expected: &[T], combine: F) -> Result<AutoMatcher>
    where
        T: Reflect,
        F: FnOnce(Vec<BoxedMatcher>) -> BoxedMatcher,
    {
        log_op_start!(op, element_count = expected.len());
        let start = Instant::now();

        let items: Vec<Value> = expected.iter().map(Reflect::reflect).collect();
        let matcher = self.iterable(&items, combine).map_err(|e| {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            e
        })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            element_count = items.len()
        );
        Ok(AutoMatcher::new(matcher))
    }
}

/// Matcher for values structurally equal to `expected`, with default
/// settings
///
/// # Errors
///
/// See [`Synthesizer::equal_to`].
pub fn equal_to(expected: &dyn Reflect) -> Result<AutoMatcher> {
    Synthesizer::default().equal_to(expected)
}

/// Ordered iterable matcher, with default settings. No arguments matches
/// only empty iterables.
///
/// # Errors
///
/// See [`Synthesizer::equal_to`].
pub fn contains<T: Reflect>(expected: &[T]) -> Result<AutoMatcher> {
    Synthesizer::default().contains(expected)
}

/// Unordered iterable matcher, with default settings. No arguments matches
/// only empty iterables.
///
/// # Errors
///
/// See [`Synthesizer::equal_to`].
pub fn contains_in_any_order<T: Reflect>(expected: &[T]) -> Result<AutoMatcher> {
    Synthesizer::default().contains_in_any_order(expected)
}
