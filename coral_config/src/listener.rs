//! Notifications for reads and writes through deprecated parameters.

use crate::param::ParamDescriptor;

/// Receives one call per configuration operation that names a deprecated
/// parameter.
///
/// Calls happen on the thread performing the operation, before its side
/// effect. Closures taking `(deprecated, primary)` implement the trait.
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use coral_config::{DeprecationListener, ParamDescriptor};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let listener: Arc<dyn DeprecationListener> =
///     Arc::new(move |_: &ParamDescriptor, _: &ParamDescriptor| {
///         counter.fetch_add(1, Ordering::Relaxed);
///     });
/// # drop(listener);
/// assert_eq!(calls.load(Ordering::Relaxed), 0);
/// ```
pub trait DeprecationListener: Send + Sync {
    /// `deprecated` was used; `primary` is the parameter replacing it.
    fn deprecated_access(&self, deprecated: &ParamDescriptor, primary: &ParamDescriptor);
}

impl<F> DeprecationListener for F
where
    F: Fn(&ParamDescriptor, &ParamDescriptor) + Send + Sync,
{
    fn deprecated_access(&self, deprecated: &ParamDescriptor, primary: &ParamDescriptor) {
        self(deprecated, primary);
    }
}

/// Logs each deprecated access as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDeprecationListener;

impl DeprecationListener for TracingDeprecationListener {
    fn deprecated_access(&self, deprecated: &ParamDescriptor, primary: &ParamDescriptor) {
        tracing::warn!(
            holder = %deprecated.holder(),
            deprecated = %deprecated,
            in_favor_of = %primary,
            "deprecated configuration parameter used"
        );
    }
}
