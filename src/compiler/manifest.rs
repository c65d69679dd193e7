use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::{CompileError, CompileResult};
use crate::enums::HttpMethod;
use crate::errors::RouteError;
use crate::pattern::PARAM_MARKERS;
use crate::radix::RouteTable;
use crate::validators::Validator;

/// Top-level key binding parameter names to validator names.
pub const PARAMS_KEY: &str = "params";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: HttpMethod,
    pub path: String,
    pub handler: String,
}

/// Routes and validator bindings read from a manifest such as:
///
/// ```yaml
/// params:
///   year: validators::is_year
/// GET:
///   /: index
///   /archives/$year: archive
/// /hello/$name:
///   GET: hello
///   POST: hello_form
/// ```
///
/// Top-level method keys map patterns to handler names; any other key is a
/// pattern whose entries map methods to handler names. Entries that are not
/// strings or name an unknown method are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteManifest {
    pub routes: Vec<RouteSpec>,
    pub params: BTreeMap<String, String>,
}

impl RouteManifest {
    pub fn from_path(path: &Path) -> CompileResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CompileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    pub fn from_yaml(source: &str) -> CompileResult<Self> {
        let document: Value = serde_yaml::from_str(source)?;
        let Value::Mapping(top) = document else {
            return Err(CompileError::NotAMapping);
        };

        let mut manifest = RouteManifest::default();
        for (key, value) in &top {
            let Some(key) = key.as_str() else {
                tracing::warn!(key = ?key, "skipping non-string manifest key");
                continue;
            };
            let Some(entries) = value.as_mapping() else {
                tracing::warn!(key, "skipping manifest entry that is not a mapping");
                continue;
            };

            if key.eq_ignore_ascii_case(PARAMS_KEY) {
                manifest.read_params(entries);
            } else if let Ok(method) = key.parse::<HttpMethod>() {
                for (path, handler) in string_pairs(key, entries) {
                    manifest.push(method, path, handler);
                }
            } else {
                for (method, handler) in string_pairs(key, entries) {
                    match method.parse::<HttpMethod>() {
                        Ok(method) => manifest.push(method, key, handler),
                        Err(err) => tracing::warn!(path = key, %err, "skipping route"),
                    }
                }
            }
        }

        if manifest.routes.is_empty() {
            return Err(CompileError::NoRoutes);
        }
        tracing::debug!(
            routes = manifest.routes.len(),
            params = manifest.params.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    fn read_params(&mut self, entries: &Mapping) {
        for (name, validator) in string_pairs(PARAMS_KEY, entries) {
            let name = name.strip_prefix(PARAM_MARKERS).unwrap_or(name);
            self.params.insert(name.to_string(), validator.to_string());
        }
    }

    fn push(&mut self, method: HttpMethod, path: &str, handler: &str) {
        self.routes.push(RouteSpec {
            method,
            path: path.to_string(),
            handler: handler.to_string(),
        });
    }

    /// Builds the trie with handler and validator names as references.
    pub fn build_names(&self) -> CompileResult<RouteTable<String, String>> {
        let mut table = RouteTable::default();
        for (param, validator) in &self.params {
            table.add_validator(param, validator.clone());
        }
        for route in &self.routes {
            add_route(&mut table, route, route.handler.clone())?;
        }
        Ok(table)
    }

    /// Builds a matchable trie, looking handlers and validators up by name.
    pub fn resolve<H, F, G>(&self, mut handler: F, mut validator: G) -> CompileResult<RouteTable<H>>
    where
        F: FnMut(&str) -> Option<H>,
        G: FnMut(&str) -> Option<Validator>,
    {
        let mut table = RouteTable::new();
        for (param, name) in &self.params {
            let resolved = validator(name)
                .ok_or_else(|| CompileError::UnknownValidator { name: name.clone() })?;
            table.add_validator(param, resolved);
        }
        for route in &self.routes {
            let resolved = handler(&route.handler).ok_or_else(|| CompileError::UnknownHandler {
                name: route.handler.clone(),
            })?;
            add_route(&mut table, route, resolved)?;
        }
        Ok(table)
    }
}

fn add_route<H, V: Clone>(
    table: &mut RouteTable<H, V>,
    route: &RouteSpec,
    handler: H,
) -> CompileResult<()> {
    let rejected = |source| CompileError::Route {
        method: route.method.to_string(),
        path: route.path.clone(),
        source,
    };
    if route.handler.is_empty() {
        return Err(rejected(RouteError::InvalidRoute {
            reason: "handler is empty",
        }));
    }
    table
        .add(route.method.as_str(), &route.path, handler)
        .map_err(rejected)
}

fn string_pairs<'m>(
    section: &'m str,
    entries: &'m Mapping,
) -> impl Iterator<Item = (&'m str, &'m str)> + 'm {
    entries.iter().filter_map(move |(key, value)| {
        match (key.as_str(), value.as_str()) {
            (Some(key), Some(value)) => Some((key, value)),
            _ => {
                tracing::warn!(section, key = ?key, "skipping non-string manifest entry");
                None
            }
        }
    })
}
