//! The generic value tree the masking engine operates on.
//!
//! Callers rarely build [`Value`] trees by hand. The usual entry points are:
//!
//! - `#[derive(Maskable)]`, which generates a [`ToValue`] impl that turns a
//!   struct into a [`Value::Record`] with its field names intact, and
//! - the `json` feature, which converts `serde_json::Value` payloads.
//!
//! Masking never changes the shape of a value, only scalar string contents
//! nested inside it. Sensitivity is attached to field names, never to a bare
//! value, so a scalar with no surrounding key always passes through unchanged.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use crate::masking::MaskPolicy;

/// A leaf value.
///
/// Only [`Scalar::Str`] is ever rewritten by the engine; numeric and boolean
/// scalars pass through even when their field name is classified.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A string value, the only maskable leaf.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

/// A structured value with one of five shapes.
///
/// The engine dispatches on the shape during traversal; the shape of the
/// output always equals the shape of the input.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A record with statically named fields, in declaration order.
    Record(Vec<(String, Value)>),
    /// An associative map keyed by runtime strings.
    Map(BTreeMap<String, Value>),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A nullable indirection. `Ref(None)` is the null value.
    Ref(Option<Box<Value>>),
    /// A leaf scalar.
    Scalar(Scalar),
}

/// The shape of a [`Value`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Record`].
    Record,
    /// See [`Value::Map`].
    Map,
    /// See [`Value::Seq`].
    Seq,
    /// See [`Value::Ref`].
    Ref,
    /// See [`Value::Scalar`].
    Scalar,
}

impl Value {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Record(_) => ValueKind::Record,
            Value::Map(_) => ValueKind::Map,
            Value::Seq(_) => ValueKind::Seq,
            Value::Ref(_) => ValueKind::Ref,
            Value::Scalar(_) => ValueKind::Scalar,
        }
    }

    /// Constructs a string scalar.
    #[must_use]
    pub fn string<S: Into<String>>(value: S) -> Self {
        Value::Scalar(Scalar::Str(value.into()))
    }

    /// Constructs the null value (`Ref(None)`).
    #[must_use]
    pub fn null() -> Self {
        Value::Ref(None)
    }

    /// Constructs a record from `(name, value)` pairs, preserving order.
    #[must_use]
    pub fn record<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Returns the string contents if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Looks up a field of a record or an entry of a map by name.
    ///
    /// Returns `None` for other shapes or when the name is absent. Record
    /// lookup returns the first field with a matching name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            Value::Map(entries) => entries.get(name),
            _ => None,
        }
    }
}

// =============================================================================
// ToValue - The adapter boundary between caller payloads and the engine
// =============================================================================

/// Conversion of a caller's payload into the engine's value tree.
///
/// Implemented for the std scalar and container types below, and derivable for
/// structs with named fields via `#[derive(Maskable)]`. The conversion is a
/// deep copy; the source is never mutated.
pub trait ToValue {
    /// Builds the value tree for this payload.
    fn to_value(&self) -> Value;
}

/// Public entrypoint for masking adapter-backed payloads.
///
/// Blanket-implemented for every [`ToValue`] type, so deriving `Maskable`
/// (which generates `ToValue`) is all a caller needs.
pub trait Maskable: ToValue {
    /// Converts `self` into a value tree and masks it under `policy`.
    #[must_use]
    fn masked(&self, policy: &MaskPolicy) -> Value {
        policy.mask(self.to_value())
    }
}

impl<T> Maskable for T where T: ToValue + ?Sized {}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Str(self.to_owned()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Str(self.clone()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Str(self.clone().into_owned()))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Bool(*self))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Str(self.to_string()))
    }
}

macro_rules! impl_to_value_int {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Scalar(Scalar::Int(i64::from(*self)))
                }
            }
        )*
    };
}

impl_to_value_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_to_value_large_int {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    // Values beyond i64 range degrade to floats, like JSON numbers.
                    i64::try_from(*self).map_or_else(
                        |_| Value::Scalar(Scalar::Float(*self as f64)),
                        |int| Value::Scalar(Scalar::Int(int)),
                    )
                }
            }
        )*
    };
}

impl_to_value_large_int!(u64, usize, isize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Float(f64::from(*self)))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Scalar(Scalar::Float(*self))
    }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Ref(
            self.as_ref()
                .map(|inner| Box::new(inner.to_value())),
        )
    }
}

impl<T> ToValue for Box<T>
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for &T
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for [T]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T> ToValue for Vec<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<V, S> ToValue for HashMap<String, V, S>
where
    V: ToValue,
    S: std::hash::BuildHasher,
{
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<V> ToValue for BTreeMap<String, V>
where
    V: ToValue,
{
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}
