//! Typed handles naming one field of one declaring scope.

use std::fmt;
use std::marker::PhantomData;

use crate::schema::ScopeId;

/// Typed handle to a declared parameter.
///
/// Keys are created by [`config_scope!`](crate::config_scope) as associated
/// constants of the scope type. They are cheap to copy and carry the value
/// type `T`, so configuration reads and writes through a key are checked at
/// compile time.
pub struct Key<T> {
    scope: fn() -> ScopeId,
    field: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    /// Name `field` of the scope identified by `scope`.
    #[must_use]
    pub const fn new(scope: fn() -> ScopeId, field: &'static str) -> Self {
        Self {
            scope,
            field,
            _marker: PhantomData,
        }
    }

    /// Declaring scope of the parameter.
    #[must_use]
    pub fn scope(&self) -> ScopeId {
        (self.scope)()
    }

    /// Field name as declared.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.field
    }

    /// Drop the value type.
    #[must_use]
    pub const fn erase(self) -> KeyRef {
        KeyRef {
            scope: self.scope,
            field: self.field,
        }
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.erase(), f)
    }
}

/// Untyped form of [`Key`].
#[derive(Clone, Copy)]
pub struct KeyRef {
    scope: fn() -> ScopeId,
    field: &'static str,
}

impl KeyRef {
    /// Declaring scope of the parameter.
    #[must_use]
    pub fn scope(&self) -> ScopeId {
        (self.scope)()
    }

    /// Field name as declared.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.field
    }
}

impl fmt::Debug for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.scope().simple_name(), self.field)
    }
}
