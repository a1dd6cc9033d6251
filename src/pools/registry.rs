//! Registry owning every pool record, keyed by canonical pool key.
//!
//! Records are created by the first successful deposit and never removed.
//! Each record sits behind its own [`Mutex`], so calls on different pools
//! proceed in parallel while calls on the same pool are serialized for
//! their full duration.  The outer [`RwLock`] guards the key → record map
//! and is never taken while a record is locked by the engine.  Its write
//! side is held through a new pool's first deposit, so no other call can
//! observe a record whose first deposit has not committed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::Pool;
use crate::domain::PoolKey;
use crate::error::AmmError;

/// Shared handle to one pool record.
pub type PoolHandle = Arc<Mutex<Pool>>;

/// Outcome of [`PoolRegistry::get_or_create_with`].
#[derive(Debug)]
pub(crate) enum Entry<R> {
    /// The record already existed; the initializer did not run.
    Existing(PoolHandle),
    /// The initializer ran on a zero-state pool and its result was inserted.
    Created(R),
}

/// Arena of pool records indexed by [`PoolKey`].
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolKey, PoolHandle>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `key` if it exists.  Otherwise runs `first`
    /// on a zero-state pool while holding the map's write lock and inserts
    /// the pool it returns.
    ///
    /// # Errors
    ///
    /// Whatever `first` returns; nothing is inserted in that case.
    pub(crate) fn get_or_create_with<R, F>(
        &self,
        key: PoolKey,
        first: F,
    ) -> Result<Entry<R>, AmmError>
    where
        F: FnOnce(&Pool) -> Result<(Pool, R), AmmError>,
    {
        if let Some(handle) = self.handle(&key) {
            return Ok(Entry::Existing(handle));
        }
        let mut pools = self.pools.write();
        if let Some(handle) = pools.get(&key) {
            return Ok(Entry::Existing(Arc::clone(handle)));
        }
        let (pool, out) = first(&Pool::default())?;
        tracing::debug!(pool = %key, "creating pool record");
        pools.insert(key, Arc::new(Mutex::new(pool)));
        Ok(Entry::Created(out))
    }

    /// A read-only copy of the record for `key`, if it exists.
    #[must_use]
    pub fn get(&self, key: &PoolKey) -> Option<Pool> {
        self.handle(key).map(|handle| handle.lock().clone())
    }

    /// The live record for `key`, without creating it.
    pub(crate) fn handle(&self, key: &PoolKey) -> Option<PoolHandle> {
        self.pools.read().get(key).map(Arc::clone)
    }

    /// Number of pool records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// `true` if no pool record exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Keys of all pool records, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<PoolKey> {
        self.pools.read().keys().copied().collect()
    }
}
