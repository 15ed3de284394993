//! Derived-image cache.
//!
//! Rendered fill strips are memoized by a [`CacheKey`] built from every
//! parameter that affects their pixels, bounded by a byte budget with
//! least-recently-used eviction.

mod image_cache;
mod key;

pub use image_cache::{CacheConfig, CacheStats, DEFAULT_CACHE_BYTES, DerivedImageCache};
pub use key::CacheKey;
