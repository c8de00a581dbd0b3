//! JSON key-value cache with optional expiry, layered over a [`Store`].
//!
//! Two write flavours exist. [`ExpiringStore::set`] surfaces backend
//! failures and is used for primary state (bookmarks, settings). The
//! `*_best_effort` variants log and swallow them, for caches whose loss
//! only costs a refetch.

pub mod clock;
pub mod keys;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app::{PulseError, Result};
use crate::store::Store;

pub use clock::{Clock, ManualClock, SystemClock};

/// Default lifetime of opportunistic list snapshots.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Envelope persisted by [`ExpiringStore::set_with_expiry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedEntry<T> {
    pub data: T,
    pub timestamp: i64,
    pub ttl_ms: i64,
}

impl<T> CachedEntry<T> {
    /// An age that does not fit in `i64` (corrupt or hand-edited timestamp)
    /// counts as expired.
    pub fn is_valid_at(&self, now_millis: i64) -> bool {
        now_millis
            .checked_sub(self.timestamp)
            .is_some_and(|age| age <= self.ttl_ms)
    }
}

pub struct ExpiringStore {
    backend: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl ExpiringStore {
    pub fn new(backend: Arc<dyn Store>) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    pub fn with_clock(backend: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.backend
            .set(key, &json)
            .map_err(|e| PulseError::StorageWrite {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn set_best_effort<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.set(key, value) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    /// Absent, unreadable and corrupt entries all read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "storage read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring corrupt entry");
                None
            }
        }
    }

    pub fn try_remove(&self, key: &str) -> Result<()> {
        self.backend
            .remove(key)
            .map_err(|e| PulseError::StorageWrite {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.try_remove(key) {
            warn!(key, error = %e, "storage remove failed");
        }
    }

    pub fn set_with_expiry<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) -> Result<()> {
        let entry = CachedEntry {
            data: value,
            timestamp: self.clock.now_millis(),
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        };
        self.set(key, &entry)
    }

    pub fn set_with_expiry_best_effort<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) {
        if let Err(e) = self.set_with_expiry(key, value, ttl) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    /// Returns the payload while the entry is fresh. A stale entry is
    /// deleted before this returns, so it is never observed twice.
    pub fn get_with_expiry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry: CachedEntry<T> = self.get(key)?;

        if !entry.is_valid_at(self.clock.now_millis()) {
            debug!(key, "evicting expired entry");
            self.remove(key);
            return None;
        }

        Some(entry.data)
    }

    pub fn clear(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}
