use crate::errors::{RouteError, RouteResult};
use crate::matcher::Params;
use crate::path::check_request_path;
use crate::pattern::ROOT_KEY;
use crate::validators::SegmentValidator;

/// Read access to one node of a routing trie.
///
/// Implemented by the runtime node and by the compiled, statically
/// constructed node so both are matched by the same walk.
pub trait TrieNode {
    type Handler;
    type Validator: SegmentValidator;

    fn handler(&self) -> Option<&Self::Handler>;

    /// Literal edge whose key starts with the segment `head`, as
    /// `(full key, child)`.
    fn literal(&self, head: &str) -> Option<(&str, &Self)>;

    fn param_child(&self) -> Option<&Self>;

    /// Name and validator of the parameter this node captures.
    fn param(&self) -> Option<(&str, Option<&Self::Validator>)>;
}

/// Common entry point for every route table requests are dispatched against.
pub trait RouteLookup {
    type Handler;

    fn lookup<'a>(
        &'a self,
        method: &str,
        path: &'a str,
    ) -> RouteResult<(&'a Self::Handler, Params<'a>)>;
}

#[inline]
fn split_segment(rest: &str) -> (&str, Option<&str>) {
    match memchr::memchr(b'/', rest.as_bytes()) {
        Some(end) => (&rest[..end], Some(&rest[end + 1..])),
        None => (rest, None),
    }
}

/// Matches `path` below the method root `root`.
///
/// Literal edges win over the parameter child, and once a branch is chosen
/// there is no backtracking.
pub fn find_route<'a, N: TrieNode>(
    root: &'a N,
    method: &str,
    path: &'a str,
) -> RouteResult<(&'a N::Handler, Params<'a>)> {
    check_request_path(path)?;

    if path.is_empty() || path == ROOT_KEY {
        return root
            .literal(ROOT_KEY)
            .filter(|(key, _)| *key == ROOT_KEY)
            .and_then(|(_, node)| node.handler())
            .map(|handler| (handler, Params::new()))
            .ok_or_else(|| RouteError::not_found(method, path));
    }

    let mut rest = path.strip_prefix('/').unwrap_or(path);
    let mut node = root;
    let mut params = Params::new();

    loop {
        let (head, tail) = split_segment(rest);

        if let Some((key, child)) = node.literal(head) {
            // the edge stands for a chain of literal nodes; leaving it midway
            // ends in a node without alternatives
            let after = rest
                .strip_prefix(key)
                .filter(|after| after.is_empty() || after.starts_with('/'))
                .ok_or_else(|| RouteError::not_found(method, path))?;
            node = child;
            if after.is_empty() {
                break;
            }
            rest = &after[1..];
            continue;
        }

        let Some(child) = node.param_child() else {
            return Err(RouteError::not_found(method, path));
        };
        if head.is_empty() {
            return Err(RouteError::not_found(method, path));
        }
        let Some((name, validator)) = child.param() else {
            return Err(RouteError::not_found(method, path));
        };
        if let Some(validator) = validator
            && !validator.validate(head)
        {
            tracing::event!(tracing::Level::TRACE, operation = "find", param = name, segment = head, "validator rejected segment");
            return Err(RouteError::not_found(method, path));
        }

        params.push(name, head);
        node = child;
        match tail {
            Some(next) => rest = next,
            None => break,
        }
    }

    node.handler()
        .map(|handler| (handler, params))
        .ok_or_else(|| RouteError::not_found(method, path))
}
