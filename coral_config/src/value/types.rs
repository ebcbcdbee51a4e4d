//! Value type descriptors.

use std::fmt;

use super::EnumValue;

/// Type of a configuration parameter.
///
/// The set is closed: text, signed integers of four widths, booleans, both
/// IEEE float widths, single characters and user enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// UTF-8 text; may be null.
    String,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// Boolean flag.
    Bool,
    /// IEEE single precision float.
    F32,
    /// IEEE double precision float.
    F64,
    /// Single character.
    Char,
    /// User enumeration; may be null.
    Enum(EnumType),
}

impl ValueType {
    /// Whether the type takes part in numeric coercion.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    /// Whether null is a legitimate value (defaults and overwritten defaults).
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::String | Self::Enum(_))
    }

    /// Whether a deprecated parameter of type `self` may point at a primary of
    /// type `primary`.
    #[must_use]
    pub fn deprecation_compatible(&self, primary: &Self) -> bool {
        self == primary || (self.is_numeric() && primary.is_numeric())
    }

    /// Short name used in tables: the Rust type name, or `Enum`.
    #[must_use]
    pub const fn simple_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Bool => "bool",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::Enum(_) => "Enum",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(e) => f.write_str(e.simple_name()),
            other => f.write_str(other.simple_name()),
        }
    }
}

/// Static description of a user enumeration.
///
/// Usually produced by `#[derive(ParamEnum)]`; two enum types are the same
/// type when both the name and the variant list match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumType {
    name: &'static str,
    variants: &'static [&'static str],
}

impl EnumType {
    /// Describe an enumeration by its path and variant names in declaration
    /// order.
    #[must_use]
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// Full name of the enumeration.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the name.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Variant names in declaration order.
    #[must_use]
    pub const fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Variant whose name matches `name` ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<EnumValue> {
        self.variants
            .iter()
            .position(|variant| variant.eq_ignore_ascii_case(name))
            .map(|ordinal| EnumValue::new(*self, ordinal))
    }
}
