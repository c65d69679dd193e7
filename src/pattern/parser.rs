use smallvec::SmallVec;

use crate::pattern::{PatternError, PatternResult};

/// Leading characters that turn a pattern segment into a named parameter.
pub const PARAM_MARKERS: [char; 2] = ['$', ':'];

/// Literal key of the root route.
pub const ROOT_KEY: &str = "/";

/// One step of a registration pattern.
///
/// Consecutive literal segments are already joined into a single run
/// (`"static/a/b"`), so the trie can store them under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'p> {
    Literal(&'p str),
    Param(&'p str),
}

#[inline]
pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(PARAM_MARKERS)
}

/// First `/`-delimited segment of a literal key. The root key is its own head.
#[inline]
pub fn leading_segment(key: &str) -> &str {
    if key == ROOT_KEY {
        return key;
    }
    match memchr::memchr(b'/', key.as_bytes()) {
        Some(end) => &key[..end],
        None => key,
    }
}

/// Splits a registration pattern into literal runs and parameters.
///
/// One leading `/` is ignored. The bare pattern `"/"` yields the root key.
pub fn parse_pattern(pattern: &str, max_params: usize) -> PatternResult<SmallVec<[Piece<'_>; 8]>> {
    let mut pieces = SmallVec::new();
    if pattern == ROOT_KEY {
        pieces.push(Piece::Literal(ROOT_KEY));
        return Ok(pieces);
    }

    let body = pattern.strip_prefix('/').unwrap_or(pattern);
    let mut names: SmallVec<[&str; 8]> = SmallVec::new();
    let mut run_start: Option<usize> = None;
    let mut offset = 0usize;

    for (index, segment) in body.split('/').enumerate() {
        if segment.is_empty() {
            return Err(PatternError::EmptySegment {
                pattern: pattern.to_string(),
                index,
            });
        }

        if is_param_segment(segment) {
            if let Some(start) = run_start.take() {
                pieces.push(Piece::Literal(&body[start..offset - 1]));
            }

            let name = &segment[1..];
            if name.is_empty() {
                return Err(PatternError::ParameterNameEmpty {
                    pattern: pattern.to_string(),
                    index,
                });
            }
            if names.contains(&name) {
                return Err(PatternError::DuplicateParameter {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            if names.len() >= max_params {
                return Err(PatternError::TooManyParameters {
                    pattern: pattern.to_string(),
                    limit: max_params,
                });
            }
            names.push(name);
            pieces.push(Piece::Param(name));
        } else if run_start.is_none() {
            run_start = Some(offset);
        }

        offset += segment.len() + 1;
    }

    if let Some(start) = run_start {
        pieces.push(Piece::Literal(&body[start..]));
    }

    Ok(pieces)
}
