use hashbrown::HashMap as FastHashMap;

use super::insert::{descend, probe};
use super::node::RouteNode;
use crate::errors::{RouteError, RouteResult};
use crate::matcher::{Params, RouteLookup, find_route};
use crate::pattern::{PARAM_MARKERS, parse_pattern};
use crate::router::{DuplicatePolicy, RouterOptions};
use crate::validators::{SegmentValidator, Validator};

pub(crate) type ValidatorMap<V> = FastHashMap<Box<str>, V>;

/// Method table: one trie root per HTTP method, plus the named validators
/// consulted while registering parameter segments.
///
/// `H` is the handler reference, `V` the validator attached to parameters.
/// Any `V` can be registered; matching requires `V: SegmentValidator`.
#[derive(Debug)]
pub struct RouteTable<H, V = Validator> {
    pub(crate) methods: FastHashMap<Box<str>, RouteNode<H, V>>,
    pub(crate) validators: ValidatorMap<V>,
    options: RouterOptions,
    routes: usize,
}

impl<H, V> Default for RouteTable<H, V> {
    fn default() -> Self {
        Self::configured(RouterOptions::default())
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self::configured(options)
    }
}

impl<H, V> RouteTable<H, V> {
    /// Empty table with any validator type.
    pub fn configured(options: RouterOptions) -> Self {
        Self {
            methods: FastHashMap::new(),
            validators: FastHashMap::new(),
            options,
            routes: 0,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Number of distinct routes registered.
    pub fn len(&self) -> usize {
        self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    pub fn root(&self, method: &str) -> Option<&RouteNode<H, V>> {
        self.methods.get(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = (&str, &RouteNode<H, V>)> {
        self.methods.iter().map(|(method, root)| (method.as_ref(), root))
    }

    /// Registers `validator` for every parameter named `name` added after
    /// this call. A leading parameter marker on `name` is ignored.
    pub fn add_validator(&mut self, name: &str, validator: V) {
        let name = name.strip_prefix(PARAM_MARKERS).unwrap_or(name);
        self.validators.insert(name.into(), validator);
    }

    pub fn validator(&self, name: &str) -> Option<&V> {
        self.validators.get(name)
    }
}

impl<H, V: Clone> RouteTable<H, V> {
    /// Registers `handler` for `method` and `pattern`.
    ///
    /// The method is uppercased. Nothing is inserted unless the whole pattern
    /// is valid and free of conflicts.
    pub fn add(&mut self, method: &str, pattern: &str, handler: H) -> RouteResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "add", method = %method, path = %pattern);

        if method.is_empty() {
            return Err(RouteError::InvalidRoute {
                reason: "method is empty",
            });
        }
        if pattern.is_empty() {
            return Err(RouteError::InvalidRoute {
                reason: "path is empty",
            });
        }

        let pieces =
            parse_pattern(pattern, self.options.max_params).map_err(|source| {
                RouteError::InvalidPath {
                    path: pattern.to_string(),
                    source,
                }
            })?;
        let method = method.to_ascii_uppercase();
        let reject_duplicates = self.options.duplicate_routes == DuplicatePolicy::Reject;

        if let Some(root) = self.methods.get(method.as_str()) {
            probe(root, &pieces, &method, pattern, reject_duplicates)?;
        }

        let root = self.methods.entry(method.into_boxed_str()).or_default();
        let node = descend(root, &pieces, &self.validators);
        if node.handler.replace(handler).is_some() {
            tracing::event!(tracing::Level::DEBUG, operation = "add", path = %pattern, "replaced existing handler");
        } else {
            self.routes += 1;
        }
        Ok(())
    }
}

impl<H, V: SegmentValidator> RouteTable<H, V> {
    /// Matches a request. `method` is compared exactly; registration already
    /// uppercased it.
    pub fn get<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        let root = self
            .methods
            .get(method)
            .ok_or_else(|| RouteError::InvalidMethod {
                method: method.to_string(),
            })?;
        find_route(root, method, path)
    }
}

impl<H, V: SegmentValidator> RouteLookup for RouteTable<H, V> {
    type Handler = H;

    fn lookup<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        self.get(method, path)
    }
}
