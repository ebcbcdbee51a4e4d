//! Value-like builder for parameter declarations.
//!
//! A [`ParamSpec`] starts as a required primary of its type. Chained calls
//! return new specs: add a default, turn the parameter into an alias or a
//! deprecated name of another parameter, or attach a description.
//!
//! ```
//! use coral_config::{Role, i32_param};
//!
//! let spec = i32_param().with_default(4).describe("retry budget");
//! assert_eq!(spec.role(), Role::Primary);
//! assert!(!spec.is_required());
//! ```
//!
//! Misuse such as a second default or a second role does not panic; it is
//! recorded and reported as a schema error when the declaring scope is
//! frozen.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::{DeclaredDefault, Key, KeyRef, Role};
use crate::value::{ParamEnum, ParamValue, ValueType};

/// Builder for one parameter of type `T`.
#[must_use = "a parameter spec does nothing until it is declared in a scope"]
pub struct ParamSpec<T> {
    raw: RawSpec,
    _marker: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone)]
pub(crate) struct RawSpec {
    pub(crate) value_type: ValueType,
    pub(crate) role: Role,
    pub(crate) primary: Option<KeyRef>,
    pub(crate) default: DeclaredDefault,
    pub(crate) description: Option<Cow<'static, str>>,
    pub(crate) misuse: Option<SpecMisuse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecMisuse {
    SecondDefault,
    SecondRole { existing: Role, requested: Role },
    NullDefault,
}

impl<T: ParamValue> ParamSpec<T> {
    /// A required primary parameter of type `T`.
    pub fn new() -> Self {
        Self {
            raw: RawSpec {
                value_type: T::value_type(),
                role: Role::Primary,
                primary: None,
                default: DeclaredDefault::Required,
                description: None,
                misuse: None,
            },
            _marker: PhantomData,
        }
    }

    /// Declare `value` as the default, making the parameter optional.
    pub fn with_default(self, value: T) -> Self {
        self.set_default(DeclaredDefault::Value(Some(value.into_value())))
    }

    /// Declare null as the default. Only strings and enums accept null.
    pub fn with_null_default(self) -> Self {
        if self.raw.value_type.is_nullable() {
            self.set_default(DeclaredDefault::Value(None))
        } else {
            self.misuse(SpecMisuse::NullDefault)
        }
    }

    /// Make this parameter an alias of `primary`.
    pub fn alias_of(self, primary: Key<T>) -> Self {
        self.set_role(Role::Alias, primary.erase())
    }

    /// Make this parameter a deprecated name of `primary`.
    ///
    /// The primary may have a different numeric type; reads convert between
    /// numeric widths.
    pub fn deprecated_in_favor_of<U: ParamValue>(self, primary: Key<U>) -> Self {
        self.set_role(Role::Deprecated, primary.erase())
    }

    /// Attach free-text documentation.
    pub fn describe(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.raw.description = Some(text.into());
        self
    }

    /// Role assigned so far.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.raw.role
    }

    /// Whether no default has been declared.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.raw.default.is_required()
    }

    pub(crate) fn into_raw(self) -> RawSpec {
        self.raw
    }

    fn set_default(mut self, default: DeclaredDefault) -> Self {
        if !self.raw.default.is_required() {
            return self.misuse(SpecMisuse::SecondDefault);
        }
        self.raw.default = default;
        self
    }

    fn set_role(mut self, requested: Role, primary: KeyRef) -> Self {
        if self.raw.role != Role::Primary {
            let existing = self.raw.role;
            return self.misuse(SpecMisuse::SecondRole {
                existing,
                requested,
            });
        }
        self.raw.role = requested;
        self.raw.primary = Some(primary);
        self
    }

    fn misuse(mut self, misuse: SpecMisuse) -> Self {
        self.raw.misuse.get_or_insert(misuse);
        self
    }
}

impl<T: ParamValue> Default for ParamSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ParamSpec<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ParamSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSpec")
            .field("value_type", &self.raw.value_type)
            .field("role", &self.raw.role)
            .field("primary", &self.raw.primary)
            .field("default", &self.raw.default)
            .finish_non_exhaustive()
    }
}

/// Required `String` parameter.
pub fn string_param() -> ParamSpec<String> {
    ParamSpec::new()
}

/// Required `i8` parameter.
pub fn i8_param() -> ParamSpec<i8> {
    ParamSpec::new()
}

/// Required `i16` parameter.
pub fn i16_param() -> ParamSpec<i16> {
    ParamSpec::new()
}

/// Required `i32` parameter.
pub fn i32_param() -> ParamSpec<i32> {
    ParamSpec::new()
}

/// Required `i64` parameter.
pub fn i64_param() -> ParamSpec<i64> {
    ParamSpec::new()
}

/// Required `bool` parameter.
pub fn bool_param() -> ParamSpec<bool> {
    ParamSpec::new()
}

/// Required `f32` parameter.
pub fn f32_param() -> ParamSpec<f32> {
    ParamSpec::new()
}

/// Required `f64` parameter.
pub fn f64_param() -> ParamSpec<f64> {
    ParamSpec::new()
}

/// Required `char` parameter.
pub fn char_param() -> ParamSpec<char> {
    ParamSpec::new()
}

/// Required parameter of enumeration `E`.
pub fn enum_param<E: ParamEnum + ParamValue>() -> ParamSpec<E> {
    ParamSpec::new()
}

/// One field of a declaring scope: its name and type-erased spec.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub(crate) field_name: &'static str,
    pub(crate) spec: RawSpec,
}

impl FieldDecl {
    /// Declare `field_name` with `spec`.
    #[must_use]
    pub fn new<T: ParamValue>(field_name: &'static str, spec: ParamSpec<T>) -> Self {
        Self {
            field_name,
            spec: spec.into_raw(),
        }
    }

    /// Field name as declared.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.field_name
    }
}
