use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,
}

pub type CacheResult<T> = Result<T, CacheError>;
