use http::StatusCode;
use thiserror::Error;

use crate::pattern::PatternError;

/// Machine-checkable category of a [`RouteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMethod,
    RouteNotFound,
    BadRequest,
    InvalidPath,
    InvalidRoute,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::RouteNotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest | ErrorKind::InvalidPath => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidRoute => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum RouteError {
    #[error("invalid HTTP method '{method}'")]
    InvalidMethod { method: String },
    #[error("route not found for {method} '{path}'")]
    RouteNotFound { method: String, path: String },
    #[error("bad request: {reason}")]
    BadRequest { reason: String },
    #[error("invalid route path '{path}'")]
    InvalidPath {
        path: String,
        #[source]
        source: PatternError,
    },
    #[error("invalid route: {reason}")]
    InvalidRoute { reason: &'static str },
    #[error("duplicate route for {method} '{path}'")]
    DuplicateRoute { method: String, path: String },
    #[error("parameter '{name}' in '{path}' conflicts with existing parameter '{existing}'")]
    ParamConflict {
        path: String,
        name: String,
        existing: String,
    },
    #[error("validator for '{name}' is invalid: {reason}")]
    InvalidValidator { name: String, reason: String },
    #[error("router is sealed; cannot add route '{path}'")]
    AddWhileSealed { path: String },
    #[error("router is sealed; cannot add validator for parameter '{name}'")]
    ValidatorWhileSealed { name: String },
    #[error("router is not sealed; cannot perform route lookup")]
    NotSealed,
}

impl RouteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::InvalidMethod { .. } => ErrorKind::InvalidMethod,
            RouteError::RouteNotFound { .. } => ErrorKind::RouteNotFound,
            RouteError::BadRequest { .. } => ErrorKind::BadRequest,
            RouteError::InvalidPath { .. } => ErrorKind::InvalidPath,
            RouteError::InvalidRoute { .. }
            | RouteError::DuplicateRoute { .. }
            | RouteError::ParamConflict { .. }
            | RouteError::InvalidValidator { .. }
            | RouteError::AddWhileSealed { .. }
            | RouteError::ValidatorWhileSealed { .. }
            | RouteError::NotSealed => ErrorKind::InvalidRoute,
        }
    }

    /// Status an HTTP boundary should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    pub(crate) fn not_found(method: &str, path: &str) -> Self {
        RouteError::RouteNotFound {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
