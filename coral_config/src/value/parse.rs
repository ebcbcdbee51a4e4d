//! Text to value parsing per type.

use std::str::FromStr;

use super::{Value, ValueType};
use crate::error::ParseError;

impl ValueType {
    /// Parse `raw` as a literal of this type.
    ///
    /// Integers and floats use decimal parsing, booleans accept `true` and
    /// `false` in any ASCII case, characters require exactly one character,
    /// enum variants match by name ignoring ASCII case, and strings pass
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing why `raw` is not a valid literal.
    pub fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        match self {
            Self::String => Ok(Value::String(raw.to_owned())),
            Self::I8 => parse_number(raw, *self).map(Value::I8),
            Self::I16 => parse_number(raw, *self).map(Value::I16),
            Self::I32 => parse_number(raw, *self).map(Value::I32),
            Self::I64 => parse_number(raw, *self).map(Value::I64),
            Self::F32 => parse_number(raw, *self).map(Value::F32),
            Self::F64 => parse_number(raw, *self).map(Value::F64),
            Self::Bool => parse_bool(raw),
            Self::Char => parse_char(raw),
            Self::Enum(enum_type) => {
                enum_type
                    .lookup(raw)
                    .map(Value::Enum)
                    .ok_or_else(|| ParseError::UnknownVariant {
                        value: raw.to_owned(),
                        enum_name: enum_type.simple_name().to_owned(),
                    })
            }
        }
    }

    /// Parse optional text; `None` stays `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `raw` is present but invalid.
    pub fn parse_optional(&self, raw: Option<&str>) -> Result<Option<Value>, ParseError> {
        raw.map(|text| self.parse(text)).transpose()
    }
}

fn parse_number<N>(raw: &str, value_type: ValueType) -> Result<N, ParseError>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    raw.parse::<N>().map_err(|err| ParseError::InvalidValue {
        value: raw.to_owned(),
        value_type: value_type.to_string(),
        reason: err.to_string(),
    })
}

fn parse_bool(raw: &str) -> Result<Value, ParseError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else {
        Err(ParseError::InvalidValue {
            value: raw.to_owned(),
            value_type: ValueType::Bool.to_string(),
            reason: "expected true or false".to_owned(),
        })
    }
}

fn parse_char(raw: &str) -> Result<Value, ParseError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        _ => Err(ParseError::InvalidChar {
            value: raw.to_owned(),
        }),
    }
}
