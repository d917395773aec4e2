use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use super::ProcessedSeries;
use crate::types::CacheKey;

const DEFAULT_CAPACITY: usize = 16;

/// Manages caching of processed series
pub struct CacheManager {
    cache: LruCache<CacheKey, Arc<ProcessedSeries>>,
}

impl CacheManager {
    /// Create a new cache manager holding up to `capacity` series
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Store a series in the cache
    pub fn store(&mut self, key: CacheKey, series: Arc<ProcessedSeries>) {
        self.cache.put(key, series);
    }

    /// Retrieve a series from the cache
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<ProcessedSeries>> {
        self.cache.get(key).cloned()
    }

    /// Return the cached series for `key`, computing it with `compute` on a miss
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> Arc<ProcessedSeries>
    where
        F: FnOnce() -> ProcessedSeries,
    {
        if let Some(series) = self.get(&key) {
            return series;
        }
        let series = Arc::new(compute());
        self.store(key, Arc::clone(&series));
        series
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}
