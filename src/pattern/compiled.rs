use regex::Regex;

use crate::path::normalize;
use crate::types::RouteParams;

use super::builder::{BuiltPattern, ParamNames};
use super::matcher::extract_params;
use super::{PatternError, PatternResult};

#[derive(Debug, Clone)]
pub struct CompiledRoute {
    regex: Regex,
    param_names: ParamNames,
    has_multi: bool,
}

impl CompiledRoute {
    pub(crate) fn from_built(built: BuiltPattern) -> PatternResult<Self> {
        let regex = Regex::new(&built.source).map_err(|err| PatternError::PatternCompile {
            pattern: built.source.clone(),
            error: err.to_string(),
        })?;

        Ok(Self {
            regex,
            param_names: built.param_names,
            has_multi: built.has_multi,
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(&normalize(path))
    }

    pub fn params(&self, path: &str) -> RouteParams {
        extract_params(self, &normalize(path))
    }

    pub fn param_names(&self) -> &[Box<str>] {
        &self.param_names
    }

    pub fn has_multi_wildcard(&self) -> bool {
        self.has_multi
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
