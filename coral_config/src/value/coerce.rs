//! Numeric coercion between the integer and float widths.

use super::{Value, ValueType};
use crate::error::UsageError;

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::I8(v) => Some(Self::Int(i64::from(*v))),
            Value::I16(v) => Some(Self::Int(i64::from(*v))),
            Value::I32(v) => Some(Self::Int(i64::from(*v))),
            Value::I64(v) => Some(Self::Int(*v)),
            Value::F32(v) => Some(Self::Float(f64::from(*v))),
            Value::F64(v) => Some(Self::Float(*v)),
            _ => None,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "coercion follows `as` semantics: integers wrap, floats saturate"
    )]
    const fn convert(self, target: ValueType) -> Option<Value> {
        Some(match (self, target) {
            (Self::Int(v), ValueType::I8) => Value::I8(v as i8),
            (Self::Int(v), ValueType::I16) => Value::I16(v as i16),
            (Self::Int(v), ValueType::I32) => Value::I32(v as i32),
            (Self::Int(v), ValueType::I64) => Value::I64(v),
            (Self::Int(v), ValueType::F32) => Value::F32(v as f32),
            (Self::Int(v), ValueType::F64) => Value::F64(v as f64),
            (Self::Float(v), ValueType::I8) => Value::I8(v as i8),
            (Self::Float(v), ValueType::I16) => Value::I16(v as i16),
            (Self::Float(v), ValueType::I32) => Value::I32(v as i32),
            (Self::Float(v), ValueType::I64) => Value::I64(v as i64),
            (Self::Float(v), ValueType::F32) => Value::F32(v as f32),
            (Self::Float(v), ValueType::F64) => Value::F64(v),
            (
                _,
                ValueType::String | ValueType::Bool | ValueType::Char | ValueType::Enum(_),
            ) => return None,
        })
    }
}

impl Value {
    /// Convert this value to `target`.
    ///
    /// Values already of `target` are returned unchanged. Numeric values
    /// convert between widths; any other pairing fails.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NonNumericCoercion`] when the types differ and
    /// either side is not numeric.
    pub fn coerce_to(&self, target: ValueType) -> Result<Self, UsageError> {
        if self.value_type() == target {
            return Ok(self.clone());
        }
        Number::of(self)
            .and_then(|number| number.convert(target))
            .ok_or_else(|| UsageError::NonNumericCoercion {
                from: self.value_type().to_string(),
                to: target.to_string(),
            })
    }
}
