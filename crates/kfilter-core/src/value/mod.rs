mod float;
mod wire;


use serde_json::{Number, Value as JsonValue};
use std::fmt;

// re-exports
pub use float::Float64;

///
/// Value
///
/// Closed set of primitives a leaf predicate can compare against.
///
/// Uint        → only holds magnitudes above `i64::MAX`; smaller unsigned
///               inputs normalize to `Int` so equal numbers compare equal.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Wrap an f64, returning `None` for NaN and infinities.
    #[must_use]
    pub fn float(v: f64) -> Option<Self> {
        Float64::try_new(v).map(Self::Float)
    }

    /// Normalize an unsigned integer into its canonical variant.
    #[must_use]
    pub fn from_u64(v: u64) -> Self {
        i64::try_from(v).map_or(Self::Uint(v), Self::Int)
    }

    /// Canonical JSON primitive for this value.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Bool(b) => JsonValue::Bool(*b),
            // Float64 is finite, so from_f64 always yields a number
            Self::Float(f) => Number::from_f64(f.get()).map_or(JsonValue::Null, JsonValue::Number),
            Self::Int(i) => JsonValue::from(*i),
            Self::Null => JsonValue::Null,
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Uint(u) => JsonValue::from(*u),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Null => f.write_str("null"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}

///
/// FilterValue
///
/// Anything that can stand on the right-hand side of a leaf predicate.
/// Returns `None` when the input has no primitive representation
/// (non-finite floats).
///

pub trait FilterValue {
    fn into_value(self) -> Option<Value>;
}

impl FilterValue for Value {
    fn into_value(self) -> Option<Value> {
        Some(self)
    }
}

impl FilterValue for bool {
    fn into_value(self) -> Option<Value> {
        Some(Value::Bool(self))
    }
}

impl FilterValue for &str {
    fn into_value(self) -> Option<Value> {
        Some(Value::Text(self.to_string()))
    }
}

impl FilterValue for String {
    fn into_value(self) -> Option<Value> {
        Some(Value::Text(self))
    }
}

impl FilterValue for &String {
    fn into_value(self) -> Option<Value> {
        Some(Value::Text(self.clone()))
    }
}

impl FilterValue for f64 {
    fn into_value(self) -> Option<Value> {
        Value::float(self)
    }
}

impl FilterValue for f32 {
    fn into_value(self) -> Option<Value> {
        Value::float(f64::from(self))
    }
}

impl FilterValue for Float64 {
    fn into_value(self) -> Option<Value> {
        Some(Value::Float(self))
    }
}

impl FilterValue for u64 {
    fn into_value(self) -> Option<Value> {
        Some(Value::from_u64(self))
    }
}

impl FilterValue for usize {
    fn into_value(self) -> Option<Value> {
        u64::try_from(self).ok().map(Value::from_u64)
    }
}

impl<T: FilterValue> FilterValue for Option<T> {
    fn into_value(self) -> Option<Value> {
        match self {
            Some(v) => v.into_value(),
            None => Some(Value::Null),
        }
    }
}

macro_rules! impl_filter_value_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl FilterValue for $t {
                fn into_value(self) -> Option<Value> {
                    Some(Value::Int(i64::from(self)))
                }
            }
        )*
    };
}

impl_filter_value_lossless!(i8, i16, i32, i64, u8, u16, u32);
