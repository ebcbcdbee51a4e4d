//! Declaring scopes: named groups of parameter declarations.

use std::any::TypeId;
use std::fmt;

use crate::param::FieldDecl;

/// Identity of a declaring scope, derived from its Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId {
    type_id: TypeId,
    name: &'static str,
}

impl ScopeId {
    /// Identity of scope type `S`.
    #[must_use]
    pub fn of<S: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            name: std::any::type_name::<S>(),
        }
    }

    /// Full type path of the scope.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the scope's type name.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type that declares configuration parameters.
///
/// Implementations are usually generated by [`config_scope!`](crate::config_scope).
/// The declaration order returned by [`DeclaringScope::declare`] fixes the
/// order of descriptors in the schema and of aliases and deprecations on
/// their primaries.
pub trait DeclaringScope: 'static {
    /// Field declarations in declaration order.
    fn declare() -> Vec<FieldDecl>;

    /// Identity of this scope.
    #[must_use]
    fn scope_id() -> ScopeId
    where
        Self: Sized,
    {
        ScopeId::of::<Self>()
    }
}

/// Declare a scope type with one typed key per parameter.
///
/// Each field becomes an associated `Key` constant of the scope type, and the
/// scope implements [`DeclaringScope`]. Inside a field's builder
/// expression, sibling keys are reachable as `Self::FIELD`. The generated
/// unit struct derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// use coral_config::{config_scope, f32_param, i32_param, string_param};
///
/// config_scope! {
///     /// Client connection settings.
///     pub struct Client {
///         /// Interval between heartbeats, in seconds.
///         HEARTBEAT_INTERVAL: i32 = i32_param().with_default(2),
///         /// Legacy float heartbeat.
///         HEARTBEAT: f32 = f32_param().deprecated_in_favor_of(Self::HEARTBEAT_INTERVAL),
///         /// User to log in as.
///         CLIENT_USERNAME: String = string_param().with_null_default(),
///         /// Short form of the user name.
///         USERNAME: String = string_param().alias_of(Self::CLIENT_USERNAME),
///     }
/// }
///
/// let schema = coral_config::schema_of::<Client>().expect("valid scope");
/// assert_eq!(schema.len(), 4);
/// assert_eq!(Client::USERNAME.field_name(), "USERNAME");
/// ```
#[macro_export]
macro_rules! config_scope {
    (
        $(#[$meta:meta])*
        $vis:vis struct $scope:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $spec:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $scope;

        impl $scope {
            $(
                $(#[$field_meta])*
                pub const $field: $crate::Key<$ty> =
                    $crate::Key::new($crate::ScopeId::of::<$scope>, ::core::stringify!($field));
            )*
        }

        impl $crate::DeclaringScope for $scope {
            fn declare() -> ::std::vec::Vec<$crate::FieldDecl> {
                ::std::vec![
                    $( $crate::FieldDecl::new::<$ty>(::core::stringify!($field), $spec) ),*
                ]
            }
        }
    };
}
