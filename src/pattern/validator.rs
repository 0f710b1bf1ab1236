use super::{PatternError, PatternResult, SegmentToken};

// Re-checks the full token list independently of the lexer's own parsing.
pub fn validate_tokens(tokens: &[SegmentToken]) -> PatternResult<()> {
    for token in tokens {
        if let SegmentToken::Param { name, .. } = token
            && !is_valid_param_name(name)
        {
            return Err(PatternError::InvalidParamName { name: name.clone() });
        }
    }

    Ok(())
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_alphanumeric())
}
