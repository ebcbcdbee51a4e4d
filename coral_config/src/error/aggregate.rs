//! Several errors reported by one operation.

use std::error::Error;
use std::fmt;
use std::slice;
use std::sync::Arc;
use std::vec;

use super::CoralError;

/// Errors collected while validating a whole input, such as every bad token
/// of a parameter string or every invalid declaration of a scope.
///
/// `Display` numbers the entries from 1, one per line.
///
/// ```
/// use coral_config::{CoralError, ParseError};
///
/// let err = CoralError::aggregate([
///     CoralError::from(ParseError::UnknownParameter {
///         token: "port=80".into(),
///         name: "port".into(),
///     }),
///     CoralError::from(ParseError::MalformedToken { token: "host".into() }),
/// ]);
/// if let CoralError::Aggregate(errors) = err {
///     assert_eq!(errors.len(), 2);
///     let text = errors.to_string();
///     assert!(text.starts_with("1: parse error: unknown parameter 'port' in 'port=80'"));
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<CoralError>>);

impl AggregatedErrors {
    /// Wrap `errors` in order.
    #[must_use]
    pub const fn new(errors: Vec<Arc<CoralError>>) -> Self {
        Self(errors)
    }

    /// The collected errors in order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &CoralError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of collected errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for (number, err) in (1..).zip(&self.0) {
            write!(f, "{separator}{number}: {err}")?;
            separator = "\n";
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a CoralError;
    type IntoIter =
        std::iter::Map<slice::Iter<'a, Arc<CoralError>>, fn(&'a Arc<CoralError>) -> &'a CoralError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<CoralError>;
    type IntoIter = vec::IntoIter<Arc<CoralError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl CoralError {
    /// Combine collected errors into one.
    ///
    /// Returns `None` for no errors. A single error that nobody else holds is
    /// returned as itself; a single shared error, or two or more errors,
    /// become [`Self::Aggregate`].
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut collected: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        match collected.len() {
            0 => None,
            1 => {
                let only = collected.pop()?;
                Some(Arc::try_unwrap(only).unwrap_or_else(|shared| {
                    Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared])))
                }))
            }
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(collected)))),
        }
    }

    /// Combine at least one error into one.
    ///
    /// # Panics
    ///
    /// Panics when `errors` is empty; see [`CoralError::try_aggregate`].
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// `Ok(())` when nothing was collected, otherwise the combined error.
    ///
    /// # Errors
    ///
    /// Returns the combined error when `errors` is not empty.
    pub fn check_all<I, E>(errors: I) -> Result<(), Arc<Self>>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or(Ok(()), |err| Err(Arc::new(err)))
    }
}
