//! Error types produced by schema construction and configuration access.

mod aggregate;
mod kinds;
mod types;

pub use aggregate::AggregatedErrors;
pub use kinds::{ParseError, ResolutionError, SchemaError, UsageError};
pub use types::CoralError;
