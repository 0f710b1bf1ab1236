use smallvec::SmallVec;

use super::{ParamPattern, PatternError, PatternResult, SegmentToken};

pub type ParamNames = SmallVec<[Box<str>; 4]>;

// Captures are plain numbered groups; param_names[i] names capture group
// i + 1. Glob and alternation fragments only emit non-capturing groups, so
// the alignment holds across every token kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPattern {
    pub source: String,
    pub param_names: ParamNames,
    pub has_multi: bool,
}

pub fn build_pattern(tokens: &[SegmentToken]) -> PatternResult<BuiltPattern> {
    let mut source = String::from("^");
    let mut param_names = ParamNames::new();
    let mut has_multi = false;
    let last = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        let is_last = index == last;

        match token {
            SegmentToken::Static { value } => {
                push_separator(&mut source, index);
                source.push_str(&regex::escape(value));
            }
            SegmentToken::Wildcard { multi: false } => {
                push_separator(&mut source, index);
                source.push_str("[^/]*");
            }
            SegmentToken::Wildcard { multi: true } => {
                push_separator(&mut source, index);
                source.push_str(".+");
                has_multi = true;
            }
            SegmentToken::Glob { source: glob, .. } => {
                push_separator(&mut source, index);
                let fragment = glob_to_regex(glob, is_last)?;
                source.push_str(&fragment.regex);
                has_multi |= fragment.multi;
            }
            SegmentToken::Param {
                name,
                optional,
                pattern,
            } => {
                if param_names.iter().any(|existing| existing.as_ref() == name.as_str()) {
                    return Err(PatternError::DuplicateParamName { name: name.clone() });
                }
                param_names.push(name.clone().into_boxed_str());

                let capture = match pattern {
                    None | Some(ParamPattern::Star) => "([^/]+)".to_string(),
                    Some(ParamPattern::DoubleStar) => {
                        // Checked again here so the builder stays correct on its own.
                        if !is_last {
                            return Err(PatternError::MisplacedMultiWildcard {
                                segment: format!(":{name}(**)"),
                            });
                        }
                        has_multi = true;
                        "(.+)".to_string()
                    }
                    Some(ParamPattern::Glob(glob)) => {
                        let fragment = glob_to_regex(glob, is_last)?;
                        has_multi |= fragment.multi;
                        format!("({})", fragment.regex)
                    }
                };

                if *optional {
                    // The separator joins the optional group so "/foo/:bar?"
                    // accepts "/foo"; the first non-root token has no
                    // separator of its own to absorb.
                    if index == 1 {
                        source.push_str("/(?:");
                        source.push_str(&capture);
                        source.push_str(")?");
                    } else {
                        source.push_str("(?:/");
                        source.push_str(&capture);
                        source.push_str(")?");
                    }
                } else {
                    push_separator(&mut source, index);
                    source.push_str(&capture);
                }
            }
        }
    }

    source.push('$');

    Ok(BuiltPattern {
        source,
        param_names,
        has_multi,
    })
}

fn push_separator(source: &mut String, index: usize) {
    if index > 0 {
        source.push('/');
    }
}

struct GlobFragment {
    regex: String,
    multi: bool,
}

fn glob_to_regex(glob: &str, allow_multi: bool) -> PatternResult<GlobFragment> {
    if glob == "*" {
        return Ok(GlobFragment {
            regex: "[^/]*".to_string(),
            multi: false,
        });
    }

    if glob == "**" {
        if !allow_multi {
            return Err(PatternError::MisplacedMultiWildcard {
                segment: glob.to_string(),
            });
        }
        return Ok(GlobFragment {
            regex: ".+".to_string(),
            multi: true,
        });
    }

    let mut chars = glob.char_indices().peekable();
    let mut regex = String::with_capacity(glob.len() + 8);
    let mut multi = false;
    let mut pending_filler = false;

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '*' => {
                if chars.peek().is_some_and(|&(_, next)| next == '*') {
                    chars.next();
                    if !allow_multi {
                        return Err(PatternError::MisplacedMultiWildcard {
                            segment: glob.to_string(),
                        });
                    }
                    multi = true;
                    // Consumes whole leading segments; the filler picks up
                    // the non-slash remainder before any literal suffix.
                    regex.push_str("(?:[^/]+/)*");
                    pending_filler = true;
                } else {
                    pending_filler = false;
                    regex.push_str("[^/]*");
                }
            }
            '{' => {
                flush_filler(&mut regex, &mut pending_filler);

                let Some(close) = glob[offset + 1..].find('}') else {
                    return Err(PatternError::UnterminatedAlternation {
                        glob: glob.to_string(),
                    });
                };
                let body = &glob[offset + 1..offset + 1 + close];

                let alternatives: Vec<&str> = body
                    .split(',')
                    .map(str::trim)
                    .filter(|alternative| !alternative.is_empty())
                    .collect();
                if alternatives.is_empty() {
                    return Err(PatternError::EmptyAlternation {
                        glob: glob.to_string(),
                    });
                }

                regex.push_str("(?:");
                for (position, alternative) in alternatives.iter().enumerate() {
                    if position > 0 {
                        regex.push('|');
                    }
                    regex.push_str(&regex::escape(alternative));
                }
                regex.push(')');

                let closing_offset = offset + 1 + close;
                while let Some(&(next_offset, _)) = chars.peek() {
                    if next_offset > closing_offset {
                        break;
                    }
                    chars.next();
                }
            }
            _ => {
                flush_filler(&mut regex, &mut pending_filler);
                regex.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4])));
            }
        }
    }

    flush_filler(&mut regex, &mut pending_filler);

    Ok(GlobFragment { regex, multi })
}

fn flush_filler(regex: &mut String, pending: &mut bool) {
    if *pending {
        regex.push_str("[^/]*");
        *pending = false;
    }
}
