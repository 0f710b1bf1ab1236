use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherOptions {
    pub cache_capacity: usize,
    pub debug: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            debug: false,
        }
    }
}

impl MatcherOptions {
    pub fn builder() -> MatcherOptionsBuilder {
        MatcherOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatcherOptionsBuilder {
    options: MatcherOptions,
}

impl MatcherOptionsBuilder {
    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> MatcherOptions {
        self.options
    }
}
