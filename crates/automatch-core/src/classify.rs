//! Type classification
//!
//! Every reflected value falls into exactly one [`Category`], resolved once
//! and then dispatched on by the synthesizer.

use crate::settings::MatcherSettings;
use crate::value::{Shape, TypeRef, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Null,
    Simple,
    Array,
    Map,
    Optional,
    SetLike,
    Ordered,
    Complex,
}

/// Classify `value`, consulting `settings` for registered value types.
///
/// Rules apply in priority order: null, array, simple, map, optional,
/// iterable (set-like before ordered), complex.
pub fn classify(value: &Value, settings: &MatcherSettings) -> Category {
    match value {
        Value::Null => Category::Null,
        Value::Array(_) => Category::Array,
        Value::Scalar(_) => Category::Simple,
        other if settings.is_simple_type(other.type_name()) => Category::Simple,
        Value::Map(_) => Category::Map,
        Value::Optional(_) => Category::Optional,
        Value::Set(_) => Category::SetLike,
        Value::List(_) => Category::Ordered,
        Value::Object(_) => Category::Complex,
    }
}

/// Whether a declared type is compared by plain equality
pub fn is_simple_type(type_ref: &TypeRef, settings: &MatcherSettings) -> bool {
    type_ref.shape == Shape::Simple || settings.is_simple_type(&type_ref.name)
}
