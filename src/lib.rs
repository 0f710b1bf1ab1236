pub mod cache;
mod errors;
mod options;
pub mod path;
pub mod pattern;
mod types;

pub use cache::CacheError;
pub use errors::{RouteError, RouteResult};
pub use options::{MatcherOptions, MatcherOptionsBuilder};
pub use path::PathError;
pub use pattern::{CompiledRoute, PatternError};
pub use types::RouteParams;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::cache::{CacheStats, LruCache};
use crate::path::{ensure_no_empty_segment, normalize, split_segments};
use crate::pattern::{build_pattern, tokenize, validate_tokens};

pub fn compile_route(template: &str) -> RouteResult<CompiledRoute> {
    compile_normalized(&normalize(template))
}

#[tracing::instrument(level = "trace", skip(normalized), fields(template = %normalized))]
fn compile_normalized(normalized: &str) -> RouteResult<CompiledRoute> {
    let segments = split_segments(normalized);
    ensure_no_empty_segment(normalized, &segments)?;

    let tokens = tokenize(&segments)?;
    validate_tokens(&tokens)?;

    let built = build_pattern(&tokens)?;
    let compiled = CompiledRoute::from_built(built)?;

    Ok(compiled)
}

#[derive(Debug)]
pub struct RouteMatcher {
    cache: RwLock<LruCache<Box<str>, Arc<CompiledRoute>>>,
    stats: CacheStats,
    debug: bool,
}

impl RouteMatcher {
    pub fn new(options: Option<MatcherOptions>) -> RouteResult<Self> {
        let options = options.unwrap_or_default();

        Ok(Self {
            cache: RwLock::new(LruCache::new(options.cache_capacity)?),
            stats: CacheStats::default(),
            debug: options.debug,
        })
    }

    pub fn does_route_match(&self, template: &str, path: &str) -> RouteResult<bool> {
        let compiled = self.compile_route_cached(template)?;

        Ok(compiled.is_match(path))
    }

    pub fn route_params(&self, template: &str, path: &str) -> RouteResult<RouteParams> {
        let compiled = self.compile_route_cached(template)?;

        Ok(compiled.params(path))
    }

    pub fn compile_route_cached(&self, template: &str) -> RouteResult<Arc<CompiledRoute>> {
        let normalized = normalize(template);

        {
            let guard = self.cache.upgradable_read();
            if let Some(hit) = guard.peek(normalized.as_str()) {
                self.stats.record_hit();
                if self.debug {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        cache = "hit",
                        template = %normalized,
                        "route cache hit"
                    );
                }
                let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
                guard.touch(normalized.as_str());
                return Ok(hit);
            }
            self.stats.record_miss();
            if self.debug {
                tracing::event!(
                    tracing::Level::DEBUG,
                    cache = "miss",
                    template = %normalized,
                    "route cache miss"
                );
            }
        }

        // Compile outside the lock so concurrent misses on different
        // templates do not serialize; a racing insert of the same template
        // just overwrites with an equivalent value.
        let compiled = Arc::new(compile_normalized(&normalized)?);
        self.cache
            .write()
            .insert(normalized.into_boxed_str(), compiled.clone());

        Ok(compiled)
    }

    pub fn precompile_routes<I, S>(
        &self,
        templates: I,
    ) -> RouteResult<HashMap<String, Arc<CompiledRoute>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled_routes = HashMap::new();

        for template in templates {
            let normalized = normalize(template.as_ref());
            let compiled = self.compile_route_cached(&normalized)?;
            compiled_routes.insert(normalized, compiled);
        }

        Ok(compiled_routes)
    }

    // Changing capacity always starts from an empty cache.
    pub fn set_cache_capacity(&self, capacity: usize) -> RouteResult<()> {
        let fresh = LruCache::new(capacity)?;
        *self.cache.write() = fresh;

        Ok(())
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.read().capacity()
    }

    pub fn cache_contains(&self, template: &str) -> bool {
        self.cache.read().contains(normalize(template).as_str())
    }

    pub fn cache_metrics(&self) -> (u64, u64) {
        self.stats.snapshot()
    }
}
