//! The four error kinds surfaced by the registry.
//!
//! Descriptors are named by their display form (`Holder.FIELD("param")`) so
//! that messages stay readable without borrowing from a schema.

use thiserror::Error;

/// Invalid parameter declarations or aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields of one scope map to the same parameter name.
    #[error("duplicate parameter name '{name}' in scope {scope}")]
    DuplicateName {
        /// Scope declaring both fields.
        scope: String,
        /// Colliding parameter name.
        name: String,
    },

    /// Two descriptors of one aggregate differ only by letter case.
    #[error("parameter names collide ignoring case: {first} and {second}")]
    NameCollision {
        /// Descriptor seen first, in aggregate order.
        first: String,
        /// Descriptor that collides with it.
        second: String,
    },

    /// A scope declares no parameters.
    #[error("scope {scope} declares no parameters")]
    EmptyScope {
        /// Offending scope.
        scope: String,
    },

    /// An aggregate was requested over zero scopes.
    #[error("an aggregate needs at least one scope")]
    EmptyAggregate,

    /// An alias or deprecated parameter names a primary in another scope.
    #[error("{field} in scope {scope} refers to a primary declared in {primary_scope}")]
    ForeignPrimary {
        /// Scope declaring the referring field.
        scope: String,
        /// Referring field.
        field: String,
        /// Scope the primary belongs to.
        primary_scope: String,
    },

    /// An alias or deprecated parameter names a field the scope lacks.
    #[error("{field} in scope {scope} refers to undeclared field {primary}")]
    UnknownPrimary {
        /// Scope declaring the referring field.
        scope: String,
        /// Referring field.
        field: String,
        /// Missing field.
        primary: String,
    },

    /// An alias or deprecated parameter names another non-primary.
    #[error("{field} in scope {scope} refers to {primary}, which is not a primary")]
    NonPrimaryTarget {
        /// Scope declaring both fields.
        scope: String,
        /// Referring field.
        field: String,
        /// Referenced non-primary field.
        primary: String,
    },

    /// Primary and referrer carry incompatible value types.
    #[error("{field} in scope {scope} has type {found}, incompatible with primary type {expected}")]
    IncompatibleTypes {
        /// Scope declaring the referring field.
        scope: String,
        /// Referring field.
        field: String,
        /// Type of the referring field.
        found: String,
        /// Type of the primary.
        expected: String,
    },

    /// A second alias or deprecation was requested for one parameter.
    #[error("{field} in scope {scope} is already {existing}; it cannot also become {requested}")]
    SecondRole {
        /// Scope declaring the field.
        scope: String,
        /// Field receiving the second role.
        field: String,
        /// Role assigned first.
        existing: String,
        /// Role requested afterwards.
        requested: String,
    },

    /// A second default was declared for one parameter.
    #[error("{field} in scope {scope} already declares a default")]
    SecondDefault {
        /// Scope declaring the field.
        scope: String,
        /// Field receiving the second default.
        field: String,
    },

    /// A null default was declared for a type that cannot hold null.
    #[error("{field} in scope {scope} has type {value_type}, which cannot default to null")]
    NullDefault {
        /// Scope declaring the field.
        scope: String,
        /// Offending field.
        field: String,
        /// Declared type.
        value_type: String,
    },
}

/// Failures while turning text into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A seed token is not of the form `name=value`.
    #[error("malformed parameter '{token}', expected name=value")]
    MalformedToken {
        /// Offending token.
        token: String,
    },

    /// A seed token names no parameter of the aggregate.
    #[error("unknown parameter '{name}' in '{token}'")]
    UnknownParameter {
        /// Offending token.
        token: String,
        /// Name that failed to resolve.
        name: String,
    },

    /// Text is not a valid literal of the expected type.
    #[error("cannot parse '{value}' as {value_type}: {reason}")]
    InvalidValue {
        /// Raw text.
        value: String,
        /// Expected type.
        value_type: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A character parameter received text that is not exactly one character.
    #[error("expected a single character, got '{value}'")]
    InvalidChar {
        /// Raw text.
        value: String,
    },

    /// An enumeration parameter received an unknown variant name.
    #[error("'{value}' is not a variant of {enum_name}")]
    UnknownVariant {
        /// Raw text.
        value: String,
        /// Enumeration name.
        enum_name: String,
    },

    /// A seed token carried a value its parameter rejects.
    #[error("invalid parameter '{token}': {source}")]
    InvalidToken {
        /// Offending token.
        token: String,
        /// Value-level failure.
        #[source]
        source: Box<ParseError>,
    },
}

/// Arguments an operation cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UsageError {
    /// The descriptor belongs to none of the configuration's scopes.
    #[error("{descriptor} does not belong to this configuration")]
    UnknownDescriptor {
        /// Offending descriptor.
        descriptor: String,
    },

    /// The descriptor never resolves to a default, so none can be overwritten.
    #[error("{descriptor} will not return a default value, so it cannot be overwritten")]
    NoDefaultToOverwrite {
        /// Offending descriptor.
        descriptor: String,
    },

    /// Null was supplied for a type that cannot hold it.
    #[error("{descriptor} has type {value_type}, which does not accept null")]
    NullNotAllowed {
        /// Offending descriptor.
        descriptor: String,
        /// Declared type.
        value_type: String,
    },

    /// A value of the wrong type was supplied or requested.
    #[error("{descriptor} holds {expected} values, not {found}")]
    TypeMismatch {
        /// Offending descriptor.
        descriptor: String,
        /// Declared type.
        expected: String,
        /// Supplied type.
        found: String,
    },

    /// A value was coerced between a numeric and a non-numeric type.
    #[error("cannot convert {from} to {to}")]
    NonNumericCoercion {
        /// Type of the stored value.
        from: String,
        /// Requested type.
        to: String,
    },
}

/// Reads that cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolutionError {
    /// A required descriptor has no value and no discoverable default.
    #[error("{descriptor} is required but was not provided")]
    Missing {
        /// Offending descriptor.
        descriptor: String,
    },

    /// Aliases and deprecations of a required primary disagree on a default.
    #[error("{descriptor} has {candidates} distinct default candidates")]
    AmbiguousDefault {
        /// Offending descriptor.
        descriptor: String,
        /// Number of distinct defaults found.
        candidates: usize,
    },

    /// A non-null value was demanded but the descriptor resolved to null.
    #[error("{descriptor} resolved to null")]
    Null {
        /// Offending descriptor.
        descriptor: String,
    },
}
