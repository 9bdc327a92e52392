//! Runtime value model
//!
//! Every value that takes part in matching is reflected into an owned,
//! immutable [`Value`] tree. Matchers are built from the expected tree and
//! applied to the actual tree.

pub mod object;
pub mod reflect;

use std::fmt;

pub use object::{Method, ObjectBuilder, ObjectKind, ObjectValue};
pub use reflect::Reflect;

/// Declared shape of a type, independent of any particular value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Returns nothing
    Void,
    /// Scalar or registered value type
    Simple,
    /// Fixed-length array or boxed slice
    Array,
    /// Ordered or set-like collection
    Iterable,
    /// Anything else (objects, maps, optionals)
    Other,
}

/// Declared type of an accessor's return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
    pub shape: Shape,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Type reference named after `T`
    pub fn of<T: ?Sized>(shape: Shape) -> Self {
        Self::new(std::any::type_name::<T>(), shape)
    }

    pub fn is_void(&self) -> bool {
        self.shape == Shape::Void
    }

    pub fn is_array(&self) -> bool {
        self.shape == Shape::Array
    }

    pub fn is_iterable(&self) -> bool {
        self.shape == Shape::Iterable
    }
}

/// Payload of a scalar value.
#[derive(Debug, Clone)]
pub enum ScalarRepr {
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Char(char),
    Str(String),
    /// Value type rendered through `Display`/`Debug`
    Text(String),
}

impl PartialEq for ScalarRepr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScalarRepr::Bool(a), ScalarRepr::Bool(b)) => a == b,
            (ScalarRepr::Int(a), ScalarRepr::Int(b)) => a == b,
            (ScalarRepr::UInt(a), ScalarRepr::UInt(b)) => a == b,
            // Bitwise so that NaN equals NaN
            (ScalarRepr::Float(a), ScalarRepr::Float(b)) => a.to_bits() == b.to_bits(),
            (ScalarRepr::Char(a), ScalarRepr::Char(b)) => a == b,
            (ScalarRepr::Str(a), ScalarRepr::Str(b)) => a == b,
            (ScalarRepr::Text(a), ScalarRepr::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// A value compared by plain equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    type_name: String,
    repr: ScalarRepr,
}

impl Scalar {
    pub fn new(type_name: impl Into<String>, repr: ScalarRepr) -> Self {
        Self {
            type_name: type_name.into(),
            repr,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn repr(&self) -> &ScalarRepr {
        &self.repr
    }

    /// Whether the value renders quoted (strings and characters)
    pub fn is_textual(&self) -> bool {
        matches!(self.repr, ScalarRepr::Str(_) | ScalarRepr::Char(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ScalarRepr::Bool(v) => write!(f, "{}", v),
            ScalarRepr::Int(v) => write!(f, "{}", v),
            ScalarRepr::UInt(v) => write!(f, "{}", v),
            ScalarRepr::Float(v) => write!(f, "{}", v),
            ScalarRepr::Char(v) => write!(f, "{}", v),
            ScalarRepr::Str(v) | ScalarRepr::Text(v) => f.write_str(v),
        }
    }
}

/// Items of an array, list or set.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    type_name: String,
    element: TypeRef,
    items: Vec<Value>,
}

impl Sequence {
    pub fn new(type_name: impl Into<String>, element: TypeRef, items: Vec<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            element,
            items,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared element type
    pub fn element(&self) -> &TypeRef {
        &self.element
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Entries of a key-value map, in iteration order of the source.
#[derive(Debug, Clone)]
pub struct MapValue {
    type_name: String,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(type_name: impl Into<String>, entries: Vec<(Value, Value)>) -> Self {
        Self {
            type_name: type_name.into(),
            entries,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|entry| other.entries.iter().any(|candidate| candidate == entry))
    }
}

/// A container holding zero or one value.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalValue {
    type_name: String,
    value: Option<Box<Value>>,
}

impl OptionalValue {
    pub fn new(type_name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.map(Box::new),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// A reflected runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Array(Sequence),
    List(Sequence),
    Set(Sequence),
    Map(MapValue),
    Optional(OptionalValue),
    Object(ObjectValue),
}

impl Value {
    /// Shorthand for a `String` scalar
    pub fn string(value: impl Into<String>) -> Self {
        Value::Scalar(Scalar::new("String", ScalarRepr::Str(value.into())))
    }

    /// Shorthand for a `usize` scalar, used for sizes and lengths
    pub fn size(value: usize) -> Self {
        Value::Scalar(Scalar::new("usize", ScalarRepr::UInt(value as u128)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime type name; `null` for [`Value::Null`]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Scalar(s) => s.type_name(),
            Value::Array(s) | Value::List(s) | Value::Set(s) => s.type_name(),
            Value::Map(m) => m.type_name(),
            Value::Optional(o) => o.type_name(),
            Value::Object(o) => o.type_name(),
        }
    }

    /// Items of a list or set; `None` for every other variant
    pub fn iterable_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(s) | Value::Set(s) => Some(s.items()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.type_name() == b.type_name() && unordered_eq(a.items(), b.items())
            }
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Optional(a), Value::Optional(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Multiset equality: every item of `a` pairs with exactly one item of `b`.
fn unordered_eq(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|item| {
        let slot = b
            .iter()
            .enumerate()
            .position(|(i, candidate)| !used[i] && candidate == item);
        match slot {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Array(s) | Value::List(s) | Value::Set(s) => {
                f.write_str("[")?;
                write_joined(f, s.items())?;
                f.write_str("]")
            }
            Value::Map(m) => {
                f.write_str("{")?;
                for (i, (key, value)) in m.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Optional(o) => match o.get() {
                Some(inner) => write!(f, "Some({})", inner),
                None => f.write_str("None"),
            },
            Value::Object(o) => f.write_str(o.rendering()),
        }
    }
}
