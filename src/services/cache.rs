use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

/// Sweep interval for [`TtlCache::spawn_cleanup`] callers without a preference
pub const DEFAULT_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5 * 60);

/// Keyed store with per-entry expiry, injected into services by the caller.
pub trait Cache<V>: Send + Sync {
    /// Live value for `key`; expired entries read as absent.
    fn get(&self, key: &str) -> Option<V>;

    /// Store `value`, expiring after `ttl` or the cache's default TTL.
    fn set(&self, key: &str, value: V, ttl: Option<Duration>);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn delete(&self, key: &str);

    fn clear(&self);

    /// Number of live (unexpired) entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Live entry description for monitoring
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryStats {
    pub key: String,
    pub expires_in_secs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub entries: Vec<CacheEntryStats>,
}

/// Thread-safe in-memory TTL cache.
///
/// Expired entries are dropped lazily on access, in bulk by
/// [`TtlCache::cleanup_expired`], or periodically by [`TtlCache::spawn_cleanup`].
#[derive(Clone)]
pub struct TtlCache<V> {
    entries: Arc<DashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            default_ttl,
        }
    }

    pub fn with_ttl_secs(secs: i64) -> Self {
        Self::new(Duration::seconds(secs))
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| now <= entry.expires_at);
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            debug!("Cache cleanup: removed {} expired entries", removed);
        }
        removed
    }

    /// Run [`TtlCache::cleanup_expired`] every `every` on the Tokio runtime.
    ///
    /// The first sweep happens immediately. Abort the returned handle to stop it.
    pub fn spawn_cleanup(&self, every: std::time::Duration) -> JoinHandle<()>
    where
        V: Send + Sync + 'static,
    {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                cache.cleanup_expired();
            }
        })
    }

    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let mut entries: Vec<CacheEntryStats> = self
            .entries
            .iter()
            .filter(|e| now <= e.value().expires_at)
            .map(|e| CacheEntryStats {
                key: e.key().clone(),
                expires_in_secs: (e.value().expires_at - now).num_seconds(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheStats {
            size: entries.len(),
            entries,
        }
    }
}

impl<V: Clone + Send + Sync> Cache<V> for TtlCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if Utc::now() <= entry.expires_at {
            return Some(entry.value.clone());
        }

        // Release the shard read lock before removing; a concurrent `set`
        // may have replaced the entry in the meantime
        drop(entry);
        self.entries
            .remove_if(key, |_, entry| Utc::now() > entry.expires_at);
        None
    }

    fn set(&self, key: &str, value: V, ttl: Option<Duration>) {
        let expires_at = Utc::now() + ttl.unwrap_or(self.default_ttl);
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        let now = Utc::now();
        self.entries
            .iter()
            .filter(|e| now <= e.value().expires_at)
            .count()
    }
}
