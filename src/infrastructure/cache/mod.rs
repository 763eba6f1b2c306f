//! Time-boxed memoization of remote calls.
//!
//! [`TtlCache`] is a plain keyed store whose entries expire after a fixed
//! TTL; there is no other eviction. [`CachedGateway`] and
//! [`CachedNewsSource`] wrap the corresponding ports with it so the
//! pipeline itself stays free of caching concerns.

pub mod gateway;
pub mod news;

pub use gateway::CachedGateway;
pub use news::CachedNewsSource;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, V)>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (Instant, V)>> {
        // Entries are plain values; a panic mid-insert leaves nothing half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fresh value for `key`, dropping it if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => return Some(value.clone()),
            Some(_) => {}
            None => return None,
        }
        entries.remove(key);
        None
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.lock().insert(key.into(), (Instant::now(), value));
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
