use thiserror::Error;

use crate::cache::CacheError;
use crate::path::PathError;
use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type RouteResult<T> = Result<T, RouteError>;
