//! A deprecation listener that remembers every notification.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use coral_config_test_helpers::listener::RecordingListener;
//!
//! let recorder = Arc::new(RecordingListener::default());
//! assert_eq!(recorder.count(), 0);
//! ```

use anyhow::{Result, ensure};
use coral_config::{DeprecationListener, ParamDescriptor, ParamId};
use parking_lot::Mutex;

/// One received notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// The deprecated parameter that was used.
    pub deprecated: ParamId,
    /// Its primary.
    pub primary: ParamId,
}

/// Records `(deprecated, primary)` pairs in call order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<Notification>>,
}

impl RecordingListener {
    /// Number of notifications received.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Notifications received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().clone()
    }

    /// Forget every notification.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }

    /// Check that exactly `expected` notifications arrived, all naming
    /// `primary`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first mismatch.
    pub fn ensure_calls(&self, expected: usize, primary: &ParamDescriptor) -> Result<()> {
        let calls = self.calls();
        ensure!(
            calls.len() == expected,
            "expected {expected} notifications, got {}",
            calls.len()
        );
        for call in &calls {
            ensure!(
                call.primary == primary.id(),
                "notification for {:?} named {:?} as primary instead of {primary}",
                call.deprecated,
                call.primary
            );
        }
        Ok(())
    }
}

impl DeprecationListener for RecordingListener {
    fn deprecated_access(&self, deprecated: &ParamDescriptor, primary: &ParamDescriptor) {
        self.calls.lock().push(Notification {
            deprecated: deprecated.id(),
            primary: primary.id(),
        });
    }
}
