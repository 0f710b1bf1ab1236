mod builder;
mod compiled;
mod error;
mod lexer;
mod matcher;
mod token;
mod validator;

pub use builder::{BuiltPattern, ParamNames, build_pattern};
pub use compiled::CompiledRoute;
pub use error::{PatternError, PatternResult};
pub use lexer::{tokenize, tokenize_segment};
pub use matcher::extract_params;
pub use token::{ParamPattern, SegmentToken};
pub use validator::validate_tokens;
