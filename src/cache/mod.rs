//! Hierarchy cache.
//!
//! Maps a (level, parent) key to its fetched children so revisiting a
//! previously expanded node issues no network call. A second request for a
//! key whose fetch is still in flight attaches to the running fetch instead
//! of duplicating it. There is no expiry: the cache lives as long as its
//! owner, and mutations at a level invalidate the affected key explicitly.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

/// Per-key child cache with in-flight request coalescing.
///
/// Cloning is cheap and shares the underlying storage.
#[derive(Debug)]
pub struct HierarchyCache<K, V> {
    inner: Arc<Mutex<HashMap<K, Arc<OnceCell<V>>>>>,
}

impl<K, V> Clone for HierarchyCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for HierarchyCache<K, V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K, V> HierarchyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Cached value for a key, if a fetch for it has completed.
    pub fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.get(key).and_then(|cell| cell.get().cloned())
    }

    /// Store a value directly, replacing any cached or in-flight entry.
    pub fn set(&self, key: K, value: V) {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key, Arc::new(OnceCell::new_with(Some(value))));
    }

    /// Drop a key; called whenever a create/update/delete occurs beneath it.
    pub fn invalidate(&self, key: &K) {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(key);
    }

    /// Drop everything.
    pub fn clear(&self) {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.clear();
    }

    /// Return the cached value, or run `fetch` to populate it.
    ///
    /// Concurrent callers for the same key share one fetch: the first runs
    /// it, the rest wait on the same cell and receive its result. A failed
    /// fetch caches nothing, so the next attempt refetches.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(map.entry(key).or_default())
        };
        cell.get_or_try_init(fetch).await.cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::errors::ClientError;

    #[tokio::test]
    async fn test_second_fetch_hits_cache() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let children = cache
                .get_or_fetch(("year", 1), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ClientError>(vec![10, 11])
                })
                .await
                .unwrap();
            assert_eq!(children, vec![10, 11]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_in_flight_fetch_is_shared() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let fetch = |calls: Arc<AtomicUsize>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
            Ok::<_, ClientError>(vec![7])
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch(("branch", 2), || fetch(Arc::clone(&calls))),
            cache.get_or_fetch(("branch", 2), || fetch(Arc::clone(&calls))),
        );
        assert_eq!(a.unwrap(), vec![7]);
        assert_eq!(b.unwrap(), vec![7]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::new();
        let calls = AtomicUsize::new(0);

        let fetch_once = || {
            cache.get_or_fetch(("section", 3), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ClientError>(vec![1])
            })
        };
        fetch_once().await.unwrap();
        cache.invalidate(&("section", 3));
        fetch_once().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_not_cached() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::new();

        let failed: Result<Vec<i64>, ClientError> = cache
            .get_or_fetch(("year", 9), || async {
                Err(ClientError::Network("down".to_string()))
            })
            .await;
        assert!(failed.is_err());
        assert_eq!(cache.get(&("year", 9)), None);

        let ok = cache
            .get_or_fetch(("year", 9), || async { Ok::<_, ClientError>(vec![4]) })
            .await
            .unwrap();
        assert_eq!(ok, vec![4]);
    }

    #[test]
    fn test_default_starts_empty() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::default();
        assert_eq!(cache.get(&("year", 1)), None);
        cache.set(("year", 1), vec![2]);
        assert_eq!(cache.get(&("year", 1)), Some(vec![2]));
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache: HierarchyCache<(&str, i64), Vec<i64>> = HierarchyCache::new();
        cache.set(("year", 5), vec![42]);
        assert_eq!(cache.get(&("year", 5)), Some(vec![42]));
        cache.clear();
        assert_eq!(cache.get(&("year", 5)), None);
    }
}
