mod error;
mod parser;

pub use error::{PatternError, PatternResult};
pub use parser::{PARAM_MARKERS, Piece, ROOT_KEY, is_param_segment, leading_segment, parse_pattern};
