use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::errors::{RouteError, RouteResult};
use crate::matcher::{Params, RouteLookup};
use crate::radix::RouteTable;
use crate::router::RouterOptions;
use crate::validators::{SegmentValidator, Validator};

/// Build-then-seal wrapper around a [`RouteTable`].
///
/// Routes and validators are registered through a lock while the router is
/// open. [`Router::seal`] publishes the table; from then on lookups take no
/// lock and registration fails.
#[derive(Debug)]
pub struct Router<H, V = Validator> {
    pending: Mutex<RouteTable<H, V>>,
    sealed: OnceLock<RouteTable<H, V>>,
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self::configured(options.unwrap_or_default())
    }
}

impl<H, V> Router<H, V> {
    pub fn configured(options: RouterOptions) -> Self {
        Self {
            pending: Mutex::new(RouteTable::configured(options)),
            sealed: OnceLock::new(),
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }

    pub fn add_validator(&self, name: &str, validator: V) -> RouteResult<()> {
        let mut pending = self.pending.lock();
        if self.is_sealed() {
            return Err(RouteError::ValidatorWhileSealed {
                name: name.to_string(),
            });
        }
        pending.add_validator(name, validator);
        Ok(())
    }

    /// Publishes the registered routes. Sealing twice is a no-op.
    pub fn seal(&self) {
        let mut pending = self.pending.lock();
        if self.is_sealed() {
            return;
        }
        let options = pending.options().clone();
        let table = std::mem::replace(&mut *pending, RouteTable::configured(options));
        tracing::event!(tracing::Level::DEBUG, operation = "seal", routes = table.len() as u64);
        let _ = self.sealed.set(table);
    }

    pub fn table(&self) -> RouteResult<&RouteTable<H, V>> {
        self.sealed.get().ok_or(RouteError::NotSealed)
    }
}

impl<H, V: Clone> Router<H, V> {
    pub fn add(&self, method: &str, pattern: &str, handler: H) -> RouteResult<()> {
        let mut pending = self.pending.lock();
        if self.is_sealed() {
            return Err(RouteError::AddWhileSealed {
                path: pattern.to_string(),
            });
        }
        pending.add(method, pattern, handler)
    }
}

impl<H, V: SegmentValidator> Router<H, V> {
    pub fn get<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        self.table()?.get(method, path)
    }
}

impl<H, V> Default for Router<H, V> {
    fn default() -> Self {
        Self::configured(RouterOptions::default())
    }
}

impl<H, V: SegmentValidator> RouteLookup for Router<H, V> {
    type Handler = H;

    fn lookup<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        self.get(method, path)
    }
}
