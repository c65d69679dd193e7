use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_PARAMS: usize = 32;

/// What happens when a pattern is registered twice for the same method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DuplicatePolicy {
    /// Fail with `RouteError::DuplicateRoute`.
    #[default]
    Reject,
    /// Last registration wins.
    Replace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    pub duplicate_routes: DuplicatePolicy,
    pub max_params: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            duplicate_routes: DuplicatePolicy::default(),
            max_params: DEFAULT_MAX_PARAMS,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_params == 0 {
            return Err(RouterOptionsError::MaxParamsInvalid {
                provided: self.max_params,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn duplicate_routes(mut self, value: DuplicatePolicy) -> Self {
        self.options.duplicate_routes = value;
        self
    }

    pub fn max_params(mut self, value: usize) -> Self {
        self.options.max_params = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_params must be at least 1 (got {provided})")]
    MaxParamsInvalid { provided: usize },
}
