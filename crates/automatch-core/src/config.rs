//! Matcher configuration: the ordered property descriptors bound to one
//! expected object

use crate::errors::{MatchError, Result};
use crate::matchers::{BoxedMatcher, ContainsInOrder, IsEmptyIterable, IsEqual, IsNull, NullIterable};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type ReadFn = dyn Fn(&Value) -> Result<Value> + Send + Sync;

/// Reads one property value from an object
#[derive(Clone)]
pub struct Accessor {
    label: String,
    read: Arc<ReadFn>,
}

impl Accessor {
    /// Accessor invoking the read operation `method` declared by
    /// `declared_by`.
    ///
    /// Reading fails with [`MatchError::TypeMismatch`] when the object is not
    /// an instance of the declaring type.
    pub fn method(declared_by: impl Into<String>, method: impl Into<String>) -> Self {
        let declared_by = declared_by.into();
        let method = method.into();
        let label = method.clone();
        Self {
            label,
            read: Arc::new(move |object: &Value| match object {
                Value::Object(instance) if instance.is_instance_of(&declared_by) => instance
                    .method(&method)
                    .map(|m| m.value().clone())
                    .ok_or_else(|| type_mismatch(&declared_by, object)),
                other => Err(type_mismatch(&declared_by, other)),
            }),
        }
    }

    pub fn from_fn<F>(label: impl Into<String>, read: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            read: Arc::new(read),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read the property from `object`
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying read, typically
    /// [`MatchError::TypeMismatch`].
    pub fn read(&self, object: &Value) -> Result<Value> {
        (self.read)(object)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub(crate) fn type_mismatch(expected_type: &str, actual: &Value) -> MatchError {
    MatchError::TypeMismatch {
        expected_type: expected_type.to_string(),
        actual_type: actual.type_name().to_string(),
        actual: actual.to_string(),
    }
}

/// Name, accessor and matcher for one property
pub struct PropertyConfig {
    name: String,
    matcher: BoxedMatcher,
    accessor: Accessor,
}

impl PropertyConfig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &BoxedMatcher {
        &self.matcher
    }

    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    /// Read this property from `object`
    ///
    /// # Errors
    ///
    /// See [`Accessor::read`].
    pub fn property_value(&self, object: &Value) -> Result<Value> {
        self.accessor.read(object)
    }
}

/// The complete, ordered set of property descriptors for one expected
/// object. Never empty.
pub struct MatcherConfig {
    expected: Value,
    properties: Vec<PropertyConfig>,
}

impl MatcherConfig {
    pub fn builder(expected: Value) -> MatcherConfigBuilder {
        MatcherConfigBuilder {
            expected,
            properties: Vec::new(),
            error: None,
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn properties(&self) -> &[PropertyConfig] {
        &self.properties
    }
}

/// Builder for [`MatcherConfig`].
///
/// Expected property values are read from the expected object as properties
/// are added. The first read failure is kept and returned by
/// [`build`](Self::build).
pub struct MatcherConfigBuilder {
    expected: Value,
    properties: Vec<PropertyConfig>,
    error: Option<MatchError>,
}

impl MatcherConfigBuilder {
    /// Add a property compared by plain equality
    pub fn add_equals_property(self, name: impl Into<String>, accessor: Accessor) -> Self {
        self.add_property(name, accessor, |value| Ok(Box::new(IsEqual::new(value.clone()))))
    }

    /// Add a property whose matcher is built from its expected value.
    ///
    /// A null expected value is matched by [`IsNull`] without calling
    /// `builder`.
    pub fn add_property<F>(self, name: impl Into<String>, accessor: Accessor, builder: F) -> Self
    where
        F: FnOnce(&Value) -> Result<BoxedMatcher>,
    {
        self.add_with(name, accessor, |expected| {
            if expected.is_null() {
                Ok(Box::new(IsNull))
            } else {
                builder(expected)
            }
        })
    }

    /// Add an ordered iterable property whose elements are matched by
    /// matchers built with `element_builder`
    pub fn add_iterable_property<F>(self, name: impl Into<String>, accessor: Accessor, element_builder: F) -> Self
    where
        F: Fn(&Value) -> Result<BoxedMatcher>,
    {
        self.add_with(name, accessor, |expected| {
            if expected.is_null() {
                return Ok(Box::new(NullIterable));
            }
            let items = expected
                .iterable_items()
                .ok_or_else(|| type_mismatch("iterable", expected))?;
            if items.is_empty() {
                return Ok(Box::new(IsEmptyIterable));
            }
            let matchers = items.iter().map(&element_builder).collect::<Result<Vec<_>>>()?;
            Ok(Box::new(ContainsInOrder::new(matchers)))
        })
    }

    /// Add a property with a prebuilt matcher
    pub fn add_matcher(mut self, name: impl Into<String>, accessor: Accessor, matcher: BoxedMatcher) -> Self {
        self.properties.push(PropertyConfig {
            name: name.into(),
            matcher,
            accessor,
        });
        self
    }

    fn add_with<F>(self, name: impl Into<String>, accessor: Accessor, make: F) -> Self
    where
        F: FnOnce(&Value) -> Result<BoxedMatcher>,
    {
        if self.error.is_some() {
            return self;
        }
        match accessor.read(&self.expected).and_then(|expected| make(&expected)) {
            Ok(matcher) => self.add_matcher(name, accessor, matcher),
            Err(err) => Self {
                error: Some(err),
                ..self
            },
        }
    }

    /// Finish the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoProperties`] when no property was added, or the
    /// first error raised while reading expected property values.
    pub fn build(self) -> Result<MatcherConfig> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.properties.is_empty() {
            return Err(MatchError::NoProperties {
                type_name: self.expected.type_name().to_string(),
            });
        }
        Ok(MatcherConfig {
            expected: self.expected,
            properties: self.properties,
        })
    }
}
