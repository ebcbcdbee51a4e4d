//! Primary error enum for the configuration registry.

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use super::kinds::{ParseError, ResolutionError, SchemaError, UsageError};

/// Errors raised while declaring schemas or operating on a configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoralError {
    /// A declaring scope or aggregate violates a schema invariant.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A textual parameter or value could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An operation was invoked with arguments it cannot accept.
    #[error("usage error: {0}")]
    Usage(#[from] UsageError),

    /// A value could not be resolved from any layer.
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// Multiple errors were collected from a single operation.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

impl CoralError {
    /// Returns `true` when this error, or every error it aggregates, is a
    /// [`SchemaError`].
    #[must_use]
    pub fn is_schema(&self) -> bool {
        match self {
            Self::Schema(_) => true,
            Self::Aggregate(agg) => agg.iter().all(Self::is_schema),
            _ => false,
        }
    }

    /// Returns `true` when this error, or every error it aggregates, is a
    /// [`ParseError`].
    #[must_use]
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Parse(_) => true,
            Self::Aggregate(agg) => agg.iter().all(Self::is_parse),
            _ => false,
        }
    }

    /// Returns `true` for a [`UsageError`].
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns `true` for a [`ResolutionError`].
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}
