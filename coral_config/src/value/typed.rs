//! Bridges between Rust types and [`Value`].

use super::{EnumType, EnumValue, Value, ValueType};

/// A Rust type usable as a configuration parameter type.
///
/// Implemented for `String`, `i8`, `i16`, `i32`, `i64`, `bool`, `f32`, `f64`
/// and `char`. Fieldless enums get an implementation from
/// `#[derive(ParamEnum)]`.
pub trait ParamValue: Sized + Send + Sync + 'static {
    /// The parameter type values of `Self` are stored as.
    fn value_type() -> ValueType;

    /// Wrap `self` as a [`Value`].
    fn into_value(self) -> Value;

    /// Unwrap a [`Value`], returning `None` when it holds another type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! primitive_param_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl ParamValue for $ty {
            fn value_type() -> ValueType {
                ValueType::$variant
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    )*};
}

primitive_param_value!(
    String => String,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    char => Char,
);

/// A fieldless enum usable as a parameter type.
///
/// Derive it with `#[derive(ParamEnum)]`, which also implements
/// [`ParamValue`] for the enum.
///
/// ```
/// use coral_config::{ParamEnum, ParamValue, ValueType};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, ParamEnum)]
/// enum SendStrategy {
///     Regular,
///     Throttled,
/// }
///
/// let ty = SendStrategy::value_type();
/// assert!(matches!(ty, ValueType::Enum(e) if e.variants() == ["REGULAR", "THROTTLED"]));
/// let parsed = ty.parse("throttled").expect("known variant");
/// assert_eq!(SendStrategy::from_value(parsed), Some(SendStrategy::Throttled));
/// ```
pub trait ParamEnum: Copy + Send + Sync + 'static {
    /// Name and variant list of the enumeration.
    const ENUM_TYPE: EnumType;

    /// Zero-based declaration position of `self`.
    fn ordinal(self) -> usize;

    /// Variant at `ordinal`, if any.
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

/// Support functions called by `#[derive(ParamEnum)]` expansions.
#[doc(hidden)]
pub mod __private {
    use super::{EnumValue, ParamEnum, Value};

    /// Wrap an enum variant.
    #[must_use]
    pub fn enum_into_value<E: ParamEnum>(variant: E) -> Value {
        Value::Enum(EnumValue::of(variant))
    }

    /// Unwrap an enum variant of type `E`.
    #[must_use]
    pub fn enum_from_value<E: ParamEnum>(value: &Value) -> Option<E> {
        match value {
            Value::Enum(inner) => inner.to_enum::<E>(),
            _ => None,
        }
    }
}
