mod options;
mod service;

pub use options::{
    DEFAULT_MAX_PARAMS, DuplicatePolicy, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
