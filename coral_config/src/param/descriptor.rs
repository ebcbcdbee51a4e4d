//! Frozen parameter descriptors.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ParseError;
use crate::schema::ScopeId;
use crate::value::{Value, ValueType};

/// Relation of a parameter to its primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The canonical parameter.
    Primary,
    /// A supported alternative name for a primary.
    Alias,
    /// A legacy name for a primary; reading or writing it notifies listeners.
    Deprecated,
}

impl Role {
    /// Upper-case label used in tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Alias => "ALIAS",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Default declared for a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredDefault {
    /// No default; the parameter is required.
    Required,
    /// A default, which may be null for strings and enums.
    Value(Option<Value>),
}

impl DeclaredDefault {
    /// Whether no default was declared.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Identity of a descriptor: its scope and declaration position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId {
    scope: ScopeId,
    index: usize,
}

impl ParamId {
    pub(crate) const fn new(scope: ScopeId, index: usize) -> Self {
        Self { scope, index }
    }

    /// Declaring scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Position in the scope's declaration order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PrimaryLink {
    pub(crate) index: usize,
    pub(crate) field_name: &'static str,
    pub(crate) param_name: String,
}

/// Immutable description of one parameter of a frozen schema.
///
/// Descriptors compare and hash by [`ParamId`].
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    pub(crate) id: ParamId,
    pub(crate) field_name: &'static str,
    pub(crate) param_name: String,
    pub(crate) value_type: ValueType,
    pub(crate) role: Role,
    pub(crate) primary: Option<PrimaryLink>,
    pub(crate) aliases: Vec<usize>,
    pub(crate) deprecated: Vec<usize>,
    pub(crate) default: DeclaredDefault,
    pub(crate) description: Option<Cow<'static, str>>,
}

impl ParamDescriptor {
    /// Identity of this descriptor.
    #[must_use]
    pub const fn id(&self) -> ParamId {
        self.id
    }

    /// Declaring scope.
    #[must_use]
    pub const fn holder(&self) -> ScopeId {
        self.id.scope
    }

    /// Field name as declared.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// camelCase name used in textual parameters.
    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// Value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Role relative to the primary.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Whether no default was declared.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default.is_required()
    }

    /// Declared default, as written in the declaration.
    #[must_use]
    pub const fn declared_default(&self) -> &DeclaredDefault {
        &self.default
    }

    /// Declared default value; `None` when required or when the default is
    /// null.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        match &self.default {
            DeclaredDefault::Value(Some(value)) => Some(value),
            DeclaredDefault::Value(None) | DeclaredDefault::Required => None,
        }
    }

    /// Field name of the primary, for aliases and deprecated parameters.
    #[must_use]
    pub fn primary_field_name(&self) -> Option<&'static str> {
        self.primary.as_ref().map(|link| link.field_name)
    }

    /// Free-text documentation.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Parse text as a value of this descriptor's type.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `raw` is not a valid literal.
    pub fn parse_value(&self, raw: &str) -> Result<Value, ParseError> {
        self.value_type.parse(raw)
    }

    /// Parse optional text; `None` stays `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `raw` is present but invalid.
    pub fn parse_optional_value(&self, raw: Option<&str>) -> Result<Option<Value>, ParseError> {
        self.value_type.parse_optional(raw)
    }

    pub(crate) fn primary_index(&self) -> Option<usize> {
        self.primary.as_ref().map(|link| link.index)
    }
}

impl PartialEq for ParamDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParamDescriptor {}

impl Hash for ParamDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holder = self.holder().simple_name();
        write!(f, "{holder}.{}(\"{}\")", self.field_name, self.param_name)?;
        if let Some(link) = &self.primary {
            let relation = match self.role {
                Role::Deprecated => "deprecatedInFavorOf",
                Role::Alias | Role::Primary => "aliasOf",
            };
            write!(
                f,
                "_{relation}_[{holder}.{}(\"{}\")]",
                link.field_name, link.param_name
            )?;
        }
        Ok(())
    }
}
