use std::hash::BuildHasherDefault;
use std::rc::Rc;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::paint::Pixmap;

use super::CacheKey;

/// Default byte budget of the derived-image cache.
pub const DEFAULT_CACHE_BYTES: usize = 4 * 1024 * 1024;

type KeyHasher = BuildHasherDefault<FxHasher>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Byte budget for retained images. `0` disables retention.
    pub max_bytes: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_bytes: DEFAULT_CACHE_BYTES }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Images handed back without being retained because they exceed the budget.
    pub oversize: u64,
    pub evictions: u64,
    pub bytes: usize,
    pub items: usize,
}

/// Cost-bounded LRU memo of rendered strips.
///
/// Invariant:
/// - `bytes` equals the summed [`Pixmap::cost`] of retained images and never
///   exceeds `config.max_bytes` after an insert returns.
///
/// Images are shared as `Rc<Pixmap>` and never mutated once stored. Single
/// threaded: no interior locking.
#[derive(Debug)]
pub struct DerivedImageCache {
    lru: LruCache<CacheKey, Rc<Pixmap>, KeyHasher>,
    bytes: usize,
    config: CacheConfig,
    hits: u64,
    misses: u64,
    oversize: u64,
    evictions: u64,
}

impl Default for DerivedImageCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl DerivedImageCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            lru: LruCache::unbounded_with_hasher(KeyHasher::default()),
            bytes: 0,
            config,
            hits: 0,
            misses: 0,
            oversize: 0,
            evictions: 0,
        }
    }

    /// Looks up `key`, marking it most recently used.
    pub fn get(&mut self, key: &CacheKey) -> Option<Rc<Pixmap>> {
        match self.lru.get(key) {
            Some(found) => {
                self.hits = self.hits.saturating_add(1);
                Some(Rc::clone(found))
            }
            None => {
                self.misses = self.misses.saturating_add(1);
                None
            }
        }
    }

    /// Stores `image` under `key` and returns a shared handle to it.
    ///
    /// An image costing more than the whole budget is returned without being
    /// retained. Otherwise least recently used entries are evicted until the
    /// budget holds again.
    pub fn insert(&mut self, key: CacheKey, image: Pixmap) -> Rc<Pixmap> {
        let image = Rc::new(image);
        let cost = image.cost();
        if self.config.max_bytes == 0 || cost > self.config.max_bytes {
            self.oversize = self.oversize.saturating_add(1);
            log::trace!(
                "cache: not retaining {cost} byte image (budget {})",
                self.config.max_bytes,
            );
            return image;
        }
        if let Some(replaced) = self.lru.put(key, Rc::clone(&image)) {
            self.bytes = self.bytes.saturating_sub(replaced.cost());
        }
        self.bytes = self.bytes.saturating_add(cost);
        self.evict();
        image
    }

    /// Returns the cached image for `key`, rendering and inserting it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, render: F) -> Rc<Pixmap>
    where
        F: FnOnce() -> Pixmap,
    {
        if let Some(found) = self.get(&key) {
            return found;
        }
        self.insert(key, render())
    }

    fn evict(&mut self) {
        while self.bytes > self.config.max_bytes {
            let Some((_key, value)) = self.lru.pop_lru() else {
                break;
            };
            self.bytes = self.bytes.saturating_sub(value.cost());
            self.evictions = self.evictions.saturating_add(1);
            log::trace!("cache: evicted {} bytes, {} retained", value.cost(), self.bytes);
        }
    }

    /// Drops every retained image. Counters are kept.
    pub fn clear(&mut self) {
        if !self.lru.is_empty() {
            log::debug!("cache: cleared {} images ({} bytes)", self.lru.len(), self.bytes);
        }
        self.lru.clear();
        self.bytes = 0;
    }

    /// Changes the byte budget, evicting down to it.
    pub fn set_budget(&mut self, max_bytes: usize) {
        self.config.max_bytes = max_bytes;
        self.evict();
    }

    #[inline]
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Summed cost of retained images.
    #[inline]
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            oversize: self.oversize,
            evictions: self.evictions,
            bytes: self.bytes,
            items: self.lru.len(),
        }
    }
}
