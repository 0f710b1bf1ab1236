use memchr::memchr;

use super::{ParamPattern, PatternError, PatternResult, SegmentToken};

pub fn tokenize(segments: &[&str]) -> PatternResult<Vec<SegmentToken>> {
    let total = segments.len();

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| tokenize_segment(segment, index, total))
        .collect()
}

#[tracing::instrument(level = "trace", fields(segment = %segment))]
pub fn tokenize_segment(segment: &str, index: usize, total: usize) -> PatternResult<SegmentToken> {
    let last = index + 1 == total;

    if index == 0 && segment.is_empty() {
        return Ok(SegmentToken::Static {
            value: String::new(),
        });
    }

    if segment.starts_with(':') {
        return parse_param(segment, index, last);
    }

    if segment == "*" {
        return Ok(SegmentToken::Wildcard { multi: false });
    }

    if segment == "**" {
        if !last {
            return Err(PatternError::MisplacedMultiWildcard {
                segment: segment.to_string(),
            });
        }
        return Ok(SegmentToken::Wildcard { multi: true });
    }

    if segment.contains('*') || segment.contains('{') {
        let multi = segment.contains("**");
        if multi && !last {
            return Err(PatternError::MisplacedMultiWildcard {
                segment: segment.to_string(),
            });
        }
        return Ok(SegmentToken::Glob {
            source: segment.to_string(),
            multi,
        });
    }

    Ok(SegmentToken::Static {
        value: segment.to_string(),
    })
}

fn parse_param(segment: &str, index: usize, last: bool) -> PatternResult<SegmentToken> {
    let bytes = segment.as_bytes();
    let mut cursor = 1usize;

    while cursor < bytes.len() && bytes[cursor].is_ascii_alphanumeric() {
        cursor += 1;
    }

    if cursor == 1 {
        return Err(invalid_segment(segment, index));
    }

    let name = &segment[1..cursor];

    let mut raw_pattern: Option<&str> = None;
    if cursor < bytes.len() && bytes[cursor] == b'(' {
        let Some(rel) = memchr(b')', &bytes[cursor + 1..]) else {
            return Err(invalid_segment(segment, index));
        };
        if rel == 0 {
            return Err(invalid_segment(segment, index));
        }
        raw_pattern = Some(&segment[cursor + 1..cursor + 1 + rel]);
        cursor += rel + 2;
    }

    let mut optional = false;
    if cursor < bytes.len() && bytes[cursor] == b'?' {
        optional = true;
        cursor += 1;
    }

    if cursor != bytes.len() {
        return Err(invalid_segment(segment, index));
    }

    if optional && !last {
        return Err(PatternError::MisplacedOptional {
            segment: segment.to_string(),
            index,
        });
    }

    let pattern = match raw_pattern {
        None => None,
        Some("*") => Some(ParamPattern::Star),
        Some("**") => {
            if !last {
                return Err(PatternError::MisplacedMultiWildcard {
                    segment: segment.to_string(),
                });
            }
            Some(ParamPattern::DoubleStar)
        }
        Some(source) => {
            if source.contains("**") && !last {
                return Err(PatternError::MisplacedMultiWildcard {
                    segment: segment.to_string(),
                });
            }
            Some(ParamPattern::Glob(source.to_string()))
        }
    };

    Ok(SegmentToken::Param {
        name: name.to_string(),
        optional,
        pattern,
    })
}

fn invalid_segment(segment: &str, index: usize) -> PatternError {
    PatternError::InvalidSegment {
        segment: segment.to_string(),
        index,
    }
}
