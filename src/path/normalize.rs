use memchr::memchr_iter;
use smallvec::SmallVec;

use crate::path::{PathError, PathResult};

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut output = String::with_capacity(trimmed.len() + 1);

    if !trimmed.starts_with('/') {
        output.push('/');
    }

    let mut prev_was_slash = false;
    for ch in trimmed.chars() {
        if ch == '/' {
            if prev_was_slash {
                continue;
            }
            prev_was_slash = true;
        } else {
            prev_was_slash = false;
        }
        output.push(ch);
    }

    while output.len() > 1 && output.ends_with('/') {
        output.pop();
    }

    output
}

#[inline]
pub fn split_segments(path: &str) -> Segments<'_> {
    let mut segments = Segments::new();
    let mut start = 0usize;

    for slash in memchr_iter(b'/', path.as_bytes()) {
        segments.push(&path[start..slash]);
        start = slash + 1;
    }
    segments.push(&path[start..]);

    segments
}

pub fn ensure_no_empty_segment(path: &str, segments: &[&str]) -> PathResult<()> {
    let last = segments.len().saturating_sub(1);

    for (index, segment) in segments.iter().enumerate() {
        if index > 0 && index < last && segment.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
                index,
            });
        }
    }

    Ok(())
}
