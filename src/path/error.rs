use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path '{path}' contains an empty segment at index {index}")]
    EmptySegment { path: String, index: usize },
}

pub type PathResult<T> = Result<T, PathError>;
