//! Matcher synthesis
//!
//! Builds a matcher tree from an expected value by dispatching on its
//! [`Category`] and recursing into nested values.

use crate::classify::{classify, is_simple_type, Category};
use crate::config::{type_mismatch, Accessor, MatcherConfig};
use crate::discovery::discover;
use crate::errors::{MatchError, Result};
use crate::evaluator::ConfigurableMatcher;
use crate::matchers::{
    AllOf, BoxedMatcher, ContainsInAnyOrder, ContainsInOrder, HasEntry, HasValue, IsAbsent, IsArray,
    IsEmptyArray, IsEmptyIterable, IsEqual, IsNull, NullIterable,
};
use crate::settings::MatcherSettings;
use crate::value::{MapValue, ObjectValue, OptionalValue, Sequence, Value};

#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    settings: MatcherSettings,
}

impl Synthesizer {
    pub fn new(settings: MatcherSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    /// Synthesize a matcher for a top-level expected value.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NullExpected`] for a null value and
    /// [`MatchError::NoProperties`] when a nested object exposes no
    /// properties.
    pub fn synthesize(&self, expected: &Value) -> Result<BoxedMatcher> {
        if expected.is_null() {
            return Err(MatchError::NullExpected);
        }
        self.synthesize_nested(expected)
    }

    /// Synthesize a matcher for a value inside a larger structure, where
    /// null is a legitimate expectation.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoProperties`] when an object exposes no
    /// properties.
    pub fn synthesize_nested(&self, expected: &Value) -> Result<BoxedMatcher> {
        match (classify(expected, &self.settings), expected) {
            (Category::Null, _) => Ok(Box::new(IsNull)),
            (Category::Simple, _) => Ok(Box::new(IsEqual::new(expected.clone()))),
            (Category::Array, Value::Array(sequence)) => self.array(expected, sequence),
            (Category::Map, Value::Map(map)) => self.map(expected, map),
            (Category::Optional, Value::Optional(optional)) => self.optional(optional),
            (Category::SetLike, Value::Set(sequence)) => {
                self.iterable(sequence.items(), |matchers| {
                    Box::new(ContainsInAnyOrder::new(matchers).sets_only())
                })
            }
            (Category::Ordered, Value::List(sequence)) => {
                self.iterable(sequence.items(), |matchers| {
                    Box::new(ContainsInOrder::new(matchers).lists_only())
                })
            }
            (Category::Complex, Value::Object(object)) => Ok(Box::new(self.object(expected, object)?)),
            // classify never pairs a category with a different variant
            _ => Ok(Box::new(IsEqual::new(expected.clone()))),
        }
    }

    /// Synthesize one matcher per element; an empty slice yields
    /// [`IsEmptyIterable`].
    pub(crate) fn iterable<F>(&self, items: &[Value], combine: F) -> Result<BoxedMatcher>
    where
        F: FnOnce(Vec<BoxedMatcher>) -> BoxedMatcher,
    {
        if items.is_empty() {
            return Ok(Box::new(IsEmptyIterable));
        }
        let matchers = items
            .iter()
            .map(|item| self.synthesize_nested(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(combine(matchers))
    }

    fn array(&self, expected: &Value, sequence: &Sequence) -> Result<BoxedMatcher> {
        if sequence.is_empty() {
            return Ok(Box::new(IsEmptyArray));
        }
        if is_simple_type(sequence.element(), &self.settings) {
            return Ok(Box::new(IsEqual::new(expected.clone())));
        }
        let matchers = sequence
            .items()
            .iter()
            .map(|item| self.synthesize_nested(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Box::new(IsArray::new(matchers)))
    }

    fn map(&self, expected: &Value, map: &MapValue) -> Result<BoxedMatcher> {
        let mut matchers: Vec<BoxedMatcher> = Vec::with_capacity(map.len() + 1);
        matchers.push(Box::new(map_size_matcher(expected)?));
        for (key, value) in map.entries() {
            matchers.push(Box::new(HasEntry::new(
                self.synthesize_nested(key)?,
                self.synthesize_nested(value)?,
            )));
        }
        Ok(Box::new(AllOf::new(matchers)))
    }

    fn optional(&self, optional: &OptionalValue) -> Result<BoxedMatcher> {
        match optional.get() {
            None => Ok(Box::new(IsAbsent)),
            Some(inner) => Ok(Box::new(HasValue::new(self.synthesize_nested(inner)?))),
        }
    }

    fn object(&self, expected: &Value, object: &ObjectValue) -> Result<ConfigurableMatcher> {
        let mut builder = MatcherConfig::builder(expected.clone());
        for template in discover(object, &self.settings) {
            let accessor = template.accessor();
            let value = accessor.read(expected)?;
            let matcher: BoxedMatcher = match value {
                Value::Null if template.returns().is_iterable() => Box::new(NullIterable),
                Value::Null => Box::new(IsNull),
                ref nested => self.synthesize_nested(nested)?,
            };
            builder = builder.add_matcher(template.property(), accessor, matcher);
        }
        Ok(ConfigurableMatcher::new(builder.build()?))
    }
}

/// One-property configuration comparing the entry count of a map
fn map_size_matcher(expected: &Value) -> Result<ConfigurableMatcher> {
    let expected_type = expected.type_name().to_string();
    let size = Accessor::from_fn("size", move |actual| match actual {
        Value::Map(map) => Ok(Value::size(map.len())),
        other => Err(type_mismatch(&expected_type, other)),
    });
    let config = MatcherConfig::builder(expected.clone())
        .add_equals_property("size", size)
        .build()?;
    Ok(ConfigurableMatcher::new(config))
}
