//! The [`Reflect`] capability and its implementations for common types

use super::{MapValue, OptionalValue, Scalar, ScalarRepr, Sequence, Shape, TypeRef, Value};
use std::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A type whose instances can be reflected into a [`Value`].
///
/// Structured types implement `reflect` with [`ObjectValue::bean`] or
/// [`ObjectValue::record`]; value types use [`reflect_simple!`].
///
/// [`ObjectValue::bean`]: super::ObjectValue::bean
/// [`ObjectValue::record`]: super::ObjectValue::record
/// [`reflect_simple!`]: crate::reflect_simple
pub trait Reflect {
    /// Declared type, used to order accessors before any value is known
    fn type_ref() -> TypeRef
    where
        Self: Sized,
    {
        TypeRef::of::<Self>(Shape::Other)
    }

    fn reflect(&self) -> Value;
}

/// Implement [`Reflect`] for value types compared by equality and rendered
/// through `Debug`, typically fieldless enums.
///
/// ```
/// use automatch::reflect_simple;
///
/// #[derive(Debug, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// reflect_simple!(Color);
/// ```
#[macro_export]
macro_rules! reflect_simple {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::value::Reflect for $ty {
            fn type_ref() -> $crate::value::TypeRef {
                $crate::value::TypeRef::of::<$ty>($crate::value::Shape::Simple)
            }

            fn reflect(&self) -> $crate::value::Value {
                $crate::value::Value::Scalar($crate::value::Scalar::new(
                    ::std::any::type_name::<$ty>(),
                    $crate::value::ScalarRepr::Text(::std::format!("{:?}", self)),
                ))
            }
        }
    )+};
}

fn scalar(type_name: &str, repr: ScalarRepr) -> Value {
    Value::Scalar(Scalar::new(type_name, repr))
}

macro_rules! reflect_scalar {
    ($variant:ident as $cast:ty => $($ty:ty),+) => {$(
        impl Reflect for $ty {
            fn type_ref() -> TypeRef {
                TypeRef::new(stringify!($ty), Shape::Simple)
            }

            fn reflect(&self) -> Value {
                scalar(stringify!($ty), ScalarRepr::$variant(*self as $cast))
            }
        }
    )+};
}

reflect_scalar!(Int as i128 => i8, i16, i32, i64, i128, isize);
reflect_scalar!(UInt as u128 => u8, u16, u32, u64, u128, usize);
reflect_scalar!(Float as f64 => f32, f64);

impl Reflect for bool {
    fn type_ref() -> TypeRef {
        TypeRef::new("bool", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar("bool", ScalarRepr::Bool(*self))
    }
}

impl Reflect for char {
    fn type_ref() -> TypeRef {
        TypeRef::new("char", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar("char", ScalarRepr::Char(*self))
    }
}

// `String` and `&str` reflect identically so that they compare equal.
impl Reflect for String {
    fn type_ref() -> TypeRef {
        TypeRef::new("String", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl Reflect for &str {
    fn type_ref() -> TypeRef {
        TypeRef::new("String", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        Value::string(*self)
    }
}

impl<T: Reflect> Reflect for &T {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl Reflect for () {
    fn type_ref() -> TypeRef {
        TypeRef::new("()", Shape::Void)
    }

    fn reflect(&self) -> Value {
        Value::Null
    }
}

impl Reflect for Value {
    fn reflect(&self) -> Value {
        self.clone()
    }
}

macro_rules! reflect_display {
    ($($ty:ty => $name:literal),+ $(,)?) => {$(
        impl Reflect for $ty {
            fn type_ref() -> TypeRef {
                TypeRef::new($name, Shape::Simple)
            }

            fn reflect(&self) -> Value {
                scalar($name, ScalarRepr::Text(self.to_string()))
            }
        }
    )+};
}

reflect_display!(
    IpAddr => "IpAddr",
    SocketAddr => "SocketAddr",
    uuid::Uuid => "Uuid",
    url::Url => "Url",
    rust_decimal::Decimal => "Decimal",
    chrono::NaiveDate => "NaiveDate",
    chrono::NaiveTime => "NaiveTime",
    chrono::NaiveDateTime => "NaiveDateTime",
    chrono::TimeDelta => "TimeDelta",
);

// Owned and borrowed paths share a type name so they compare equal.
impl Reflect for PathBuf {
    fn type_ref() -> TypeRef {
        TypeRef::new("PathBuf", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        self.as_path().reflect()
    }
}

impl Reflect for &Path {
    fn type_ref() -> TypeRef {
        TypeRef::new("PathBuf", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar("PathBuf", ScalarRepr::Text(self.display().to_string()))
    }
}

impl Reflect for Duration {
    fn type_ref() -> TypeRef {
        TypeRef::new("Duration", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar("Duration", ScalarRepr::Text(format!("{:?}", self)))
    }
}

impl Reflect for TypeId {
    fn type_ref() -> TypeRef {
        TypeRef::new("TypeId", Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar("TypeId", ScalarRepr::Text(format!("{:?}", self)))
    }
}

impl<Tz> Reflect for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn type_ref() -> TypeRef {
        TypeRef::of::<Self>(Shape::Simple)
    }

    fn reflect(&self) -> Value {
        scalar(
            std::any::type_name::<Self>(),
            ScalarRepr::Text(self.to_string()),
        )
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value {
        Value::Optional(OptionalValue::new(
            std::any::type_name::<Self>(),
            self.as_ref().map(Reflect::reflect),
        ))
    }
}

fn sequence<'a, S, T>(items: impl IntoIterator<Item = &'a T>) -> Sequence
where
    S: ?Sized,
    T: Reflect + 'a,
{
    Sequence::new(
        std::any::type_name::<S>(),
        T::type_ref(),
        items.into_iter().map(Reflect::reflect).collect(),
    )
}

macro_rules! reflect_list {
    ($($ty:ident),+) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn type_ref() -> TypeRef {
                TypeRef::of::<Self>(Shape::Iterable)
            }

            fn reflect(&self) -> Value {
                Value::List(sequence::<Self, T>(self))
            }
        }
    )+};
}

reflect_list!(Vec, VecDeque, LinkedList);

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_ref() -> TypeRef {
        TypeRef::of::<Self>(Shape::Iterable)
    }

    fn reflect(&self) -> Value {
        Value::Set(sequence::<Self, T>(self))
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn type_ref() -> TypeRef {
        TypeRef::of::<Self>(Shape::Iterable)
    }

    fn reflect(&self) -> Value {
        Value::Set(sequence::<Self, T>(self))
    }
}

fn map_entries<'a, K, V>(entries: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<(Value, Value)>
where
    K: Reflect + 'a,
    V: Reflect + 'a,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.reflect(), v.reflect()))
        .collect()
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value {
        Value::Map(MapValue::new(
            std::any::type_name::<Self>(),
            map_entries(self),
        ))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value {
        Value::Map(MapValue::new(
            std::any::type_name::<Self>(),
            map_entries(self),
        ))
    }
}

fn array_type_name<T: Reflect>() -> String {
    format!("[{}]", T::type_ref().name)
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_ref() -> TypeRef {
        TypeRef::new(array_type_name::<T>(), Shape::Array)
    }

    fn reflect(&self) -> Value {
        Value::Array(Sequence::new(
            array_type_name::<T>(),
            T::type_ref(),
            self.iter().map(Reflect::reflect).collect(),
        ))
    }
}

impl<T: Reflect> Reflect for Box<[T]> {
    fn type_ref() -> TypeRef {
        TypeRef::new(array_type_name::<T>(), Shape::Array)
    }

    fn reflect(&self) -> Value {
        Value::Array(Sequence::new(
            array_type_name::<T>(),
            T::type_ref(),
            self.iter().map(Reflect::reflect).collect(),
        ))
    }
}

impl Reflect for serde_json::Value {
    fn reflect(&self) -> Value {
        use serde_json::Value as Json;
        match self {
            Json::Null => Value::Null,
            Json::Bool(b) => b.reflect(),
            Json::Number(n) => {
                let repr = if let Some(i) = n.as_i64() {
                    ScalarRepr::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    ScalarRepr::UInt(u as u128)
                } else {
                    ScalarRepr::Float(n.as_f64().unwrap_or(f64::NAN))
                };
                scalar("Number", repr)
            }
            Json::String(s) => Value::string(s.as_str()),
            Json::Array(items) => Value::List(Sequence::new(
                "serde_json::Array",
                TypeRef::of::<Json>(Shape::Other),
                items.iter().map(Reflect::reflect).collect(),
            )),
            Json::Object(map) => Value::Map(MapValue::new(
                "serde_json::Map",
                map.iter()
                    .map(|(k, v)| (Value::string(k.as_str()), v.reflect()))
                    .collect(),
            )),
        }
    }
}
