//! Exclusive access to the process-wide schema cache.
//!
//! Tests that clear the cache or compare schema identities hold a
//! [`SchemaCacheGuard`]. The guard starts and ends with an empty cache.
//!
//! # Examples
//!
//! ```
//! use coral_config_test_helpers::schema_cache;
//!
//! let _guard = schema_cache::isolate();
//! // Schemas built here are fresh and dropped from the cache afterwards.
//! ```

use std::sync::LazyLock;

use parking_lot::{Mutex, MutexGuard};

static CACHE_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard that clears the schema cache on creation and on drop.
#[must_use = "dropping releases the schema cache"]
pub struct SchemaCacheGuard {
    _lock: MutexGuard<'static, ()>,
}

/// Take exclusive use of the schema cache, starting from an empty cache.
pub fn isolate() -> SchemaCacheGuard {
    let lock = CACHE_MUTEX.lock();
    coral_config::clear_schema_cache();
    SchemaCacheGuard { _lock: lock }
}

impl Drop for SchemaCacheGuard {
    fn drop(&mut self) {
        coral_config::clear_schema_cache();
    }
}
