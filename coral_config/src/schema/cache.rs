//! Process-wide memoization of frozen schemas.
//!
//! Reads go through an [`ArcSwap`] snapshot and never lock. Construction is
//! serialized by a mutex, so each scope is frozen at most once until the
//! cache is cleared.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::{DeclaringScope, Schema, ScopeId};
use crate::CoralResult;

type SchemaTable = HashMap<ScopeId, Arc<Schema>>;

struct SchemaCache {
    snap: ArcSwap<SchemaTable>,
    build: Mutex<()>,
}

static CACHE: LazyLock<SchemaCache> = LazyLock::new(|| SchemaCache {
    snap: ArcSwap::from_pointee(HashMap::new()),
    build: Mutex::new(()),
});

impl SchemaCache {
    fn lookup(&self, scope: ScopeId) -> Option<Arc<Schema>> {
        self.snap.load().get(&scope).cloned()
    }

    fn get_or_build<S: DeclaringScope>(&self) -> CoralResult<Arc<Schema>> {
        let scope = S::scope_id();
        if let Some(schema) = self.lookup(scope) {
            return Ok(schema);
        }
        let _guard = self.build.lock();
        if let Some(schema) = self.lookup(scope) {
            return Ok(schema);
        }
        let schema = Arc::new(Schema::build(scope, S::declare())?);
        let mut next = SchemaTable::clone(&self.snap.load());
        next.insert(scope, Arc::clone(&schema));
        self.snap.store(Arc::new(next));
        tracing::debug!(
            scope = scope.name(),
            parameters = schema.len(),
            "schema frozen"
        );
        Ok(schema)
    }

    fn clear(&self) {
        let _guard = self.build.lock();
        self.snap.store(Arc::new(HashMap::new()));
    }
}

/// The frozen schema of scope `S`, building it on first use.
///
/// Every call for the same scope returns the same [`Arc`] until
/// [`clear_schema_cache`] runs. A scope that fails validation is not cached,
/// so each call reports the failure again.
///
/// # Errors
///
/// Returns a [`SchemaError`](crate::SchemaError), or an aggregate of them,
/// when the scope's declarations are invalid.
pub fn schema_of<S: DeclaringScope>() -> CoralResult<Arc<Schema>> {
    CACHE.get_or_build::<S>()
}

/// Drop every memoized schema.
///
/// Schemas already handed out stay valid; later calls to [`schema_of`]
/// rebuild them.
pub fn clear_schema_cache() {
    CACHE.clear();
}
