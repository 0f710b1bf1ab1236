use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("segment '{segment}' at index {index} is not a valid parameter declaration")]
    InvalidSegment { segment: String, index: usize },
    #[error("optional parameter '{segment}' at index {index} must be the final segment")]
    MisplacedOptional { segment: String, index: usize },
    #[error("multi-segment wildcard in '{segment}' must be the final segment")]
    MisplacedMultiWildcard { segment: String },
    #[error("parameter name '{name}' contains characters outside [A-Za-z0-9]")]
    InvalidParamName { name: String },
    #[error("parameter name '{name}' is declared more than once")]
    DuplicateParamName { name: String },
    #[error("alternation group in '{glob}' is missing a closing brace")]
    UnterminatedAlternation { glob: String },
    #[error("alternation group in '{glob}' has no alternatives")]
    EmptyAlternation { glob: String },
    #[error("compiled pattern '{pattern}' is not a valid regular expression: {error}")]
    PatternCompile { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
