mod error;
mod lru;

pub use error::{CacheError, CacheResult};
pub use lru::{CacheStats, DEFAULT_CACHE_CAPACITY, LruCache};
