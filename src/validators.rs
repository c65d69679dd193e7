//! Segment validators: pure predicates that decide whether a captured path
//! segment is acceptable for a parameter.

use std::sync::Arc;

use regex::Regex;

use crate::errors::{RouteError, RouteResult};

/// Predicate signature shared by the runtime and the compiled trie.
pub type ValidatorFn = fn(&str) -> bool;

pub trait SegmentValidator {
    fn validate(&self, segment: &str) -> bool;
}

impl SegmentValidator for ValidatorFn {
    #[inline]
    fn validate(&self, segment: &str) -> bool {
        self(segment)
    }
}

/// Validator attached to a parameter node built at runtime.
#[derive(Debug, Clone)]
pub enum Validator {
    Predicate(ValidatorFn),
    Pattern(Arc<Regex>),
}

impl Validator {
    pub fn new(predicate: ValidatorFn) -> Self {
        Validator::Predicate(predicate)
    }

    /// Compiles `expr` anchored to the whole segment.
    pub fn pattern(name: &str, expr: &str) -> RouteResult<Self> {
        Regex::new(&format!("^(?:{})$", expr))
            .map(|regex| Validator::Pattern(Arc::new(regex)))
            .map_err(|err| RouteError::InvalidValidator {
                name: name.to_string(),
                reason: err.to_string(),
            })
    }
}

impl From<ValidatorFn> for Validator {
    fn from(predicate: ValidatorFn) -> Self {
        Validator::Predicate(predicate)
    }
}

impl SegmentValidator for Validator {
    #[inline]
    fn validate(&self, segment: &str) -> bool {
        match self {
            Validator::Predicate(predicate) => predicate(segment),
            Validator::Pattern(regex) => regex.is_match(segment),
        }
    }
}

#[inline]
fn two_digits(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [hi @ b'0'..=b'9', lo @ b'0'..=b'9'] => Some((hi - b'0') * 10 + (lo - b'0')),
        _ => None,
    }
}

/// Exactly four ASCII digits (`YYYY`).
pub fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Two-digit month, `01` through `12`.
pub fn is_month(s: &str) -> bool {
    matches!(two_digits(s), Some(1..=12))
}

/// Two-digit day of month, `01` through `31`.
pub fn is_day(s: &str) -> bool {
    matches!(two_digits(s), Some(1..=31))
}

/// One or more ASCII digits.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
