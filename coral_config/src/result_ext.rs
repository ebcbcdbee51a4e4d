//! Extension for mapping errors to `CoralResult` concisely.
//!
//! Saves the repetitive `.map_err(|e| Arc::new(CoralError::from(e)))` when a
//! function returning one of the error kinds feeds into a public operation.
//!
//! ```
//! use coral_config::{CoralResult, CoralResultExt, ValueType, Value};
//!
//! fn parse_port(raw: &str) -> CoralResult<Value> {
//!     ValueType::I32.parse(raw).into_coral()
//! }
//! assert!(parse_port("80").is_ok());
//! assert!(parse_port("eighty").is_err());
//! ```

use std::sync::Arc;

use crate::{CoralError, CoralResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<CoralError>`
/// into a `CoralResult<T>`.
pub trait CoralResultExt<T, E> {
    /// Convert `Result<T, E>` into `CoralResult<T>` using `Into<CoralError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<CoralError>`.
    fn into_coral(self) -> CoralResult<T>;
}

impl<T, E> CoralResultExt<T, E> for Result<T, E>
where
    E: Into<CoralError>,
{
    fn into_coral(self) -> CoralResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
