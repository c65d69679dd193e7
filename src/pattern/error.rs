use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("segment {index} of '{pattern}' is empty")]
    EmptySegment { pattern: String, index: usize },
    #[error("parameter segment {index} of '{pattern}' is missing a name")]
    ParameterNameEmpty { pattern: String, index: usize },
    #[error("duplicate parameter name '{name}' in '{pattern}'")]
    DuplicateParameter { pattern: String, name: String },
    #[error("'{pattern}' declares more than {limit} parameters")]
    TooManyParameters { pattern: String, limit: usize },
}

pub type PatternResult<T> = Result<T, PatternError>;
