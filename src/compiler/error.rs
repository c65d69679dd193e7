use std::path::PathBuf;

use thiserror::Error;

use crate::errors::RouteError;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read manifest '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),
    #[error("manifest must be a mapping at the top level")]
    NotAMapping,
    #[error("manifest declares no usable routes")]
    NoRoutes,
    #[error("route {method} '{path}' was rejected")]
    Route {
        method: String,
        path: String,
        #[source]
        source: RouteError,
    },
    #[error("no handler named '{name}'")]
    UnknownHandler { name: String },
    #[error("no validator named '{name}'")]
    UnknownValidator { name: String },
    #[error("'{name}' is not a Rust path")]
    InvalidSymbol { name: String },
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

pub type CompileResult<T> = Result<T, CompileError>;
