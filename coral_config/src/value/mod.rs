//! Closed set of value types and the tagged values a configuration stores.
//!
//! Every parameter carries one [`ValueType`]; every stored value is a
//! [`Value`] of that type. Rust types opt in through [`ParamValue`], which is
//! implemented here for the primitive types and generated by
//! `#[derive(ParamEnum)]` for fieldless enums.

mod coerce;
mod parse;
mod typed;
mod types;

use std::fmt;

use serde::{Serialize, Serializer};

pub use typed::{ParamEnum, ParamValue, __private};
pub use types::{EnumType, ValueType};

/// A value of one of the supported parameter types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text.
    String(String),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Boolean flag.
    Bool(bool),
    /// IEEE single precision float.
    F32(f32),
    /// IEEE double precision float.
    F64(f64),
    /// Single character.
    Char(char),
    /// Variant of a user-declared enumeration.
    Enum(EnumValue),
}

impl Value {
    /// Type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::I8(_) => ValueType::I8,
            Self::I16(_) => ValueType::I16,
            Self::I32(_) => ValueType::I32,
            Self::I64(_) => ValueType::I64,
            Self::Bool(_) => ValueType::Bool,
            Self::F32(_) => ValueType::F32,
            Self::F64(_) => ValueType::F64,
            Self::Char(_) => ValueType::Char,
            Self::Enum(e) => ValueType::Enum(e.enum_type()),
        }
    }

    /// Value identity used when counting distinct defaults.
    ///
    /// Floats compare by bit pattern, so two `NaN` defaults are the same
    /// default while `0.0` and `-0.0` are not.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            _ => self == other,
        }
    }

    /// Borrow the text of a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.write_str(v),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            // Debug keeps the fractional part and round-trips through `parse`.
            Self::F32(v) => write!(f, "{v:?}"),
            Self::F64(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Enum(v) => f.write_str(v.name()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(v) => serializer.serialize_str(v),
            Self::I8(v) => serializer.serialize_i8(*v),
            Self::I16(v) => serializer.serialize_i16(*v),
            Self::I32(v) => serializer.serialize_i32(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::F32(v) => serializer.serialize_f32(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::Char(v) => serializer.serialize_char(*v),
            Self::Enum(v) => serializer.serialize_str(v.name()),
        }
    }
}

/// One variant of an [`EnumType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    enum_type: EnumType,
    ordinal: usize,
}

impl EnumValue {
    /// Capture a variant of a `ParamEnum` type.
    #[must_use]
    pub fn of<E: ParamEnum>(variant: E) -> Self {
        Self {
            enum_type: E::ENUM_TYPE,
            ordinal: variant.ordinal(),
        }
    }

    pub(crate) const fn new(enum_type: EnumType, ordinal: usize) -> Self {
        Self { enum_type, ordinal }
    }

    /// Enumeration this variant belongs to.
    #[must_use]
    pub const fn enum_type(&self) -> EnumType {
        self.enum_type
    }

    /// Zero-based position of the variant in declaration order.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Variant name as declared on the enumeration.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.enum_type
            .variants()
            .get(self.ordinal)
            .copied()
            .unwrap_or_default()
    }

    /// Convert back into the Rust enum, if this variant belongs to `E`.
    #[must_use]
    pub fn to_enum<E: ParamEnum>(&self) -> Option<E> {
        if self.enum_type == E::ENUM_TYPE {
            E::from_ordinal(self.ordinal)
        } else {
            None
        }
    }
}
