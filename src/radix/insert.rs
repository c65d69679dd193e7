use hashbrown::hash_map::Entry;

use super::node::{Edge, RouteNode};
use super::tree::ValidatorMap;
use crate::errors::{RouteError, RouteResult};
use crate::pattern::{Piece, leading_segment};

/// Read-only walk that reports every reason `pieces` cannot be inserted, so
/// a failed registration leaves the trie untouched.
pub(super) fn probe<H, V>(
    root: &RouteNode<H, V>,
    pieces: &[Piece<'_>],
    method: &str,
    pattern: &str,
    reject_duplicates: bool,
) -> RouteResult<()> {
    let mut node = root;
    for piece in pieces {
        match *piece {
            Piece::Literal(run) => match follow_literal(node, run) {
                Some(next) => node = next,
                None => return Ok(()),
            },
            Piece::Param(name) => {
                let Some(child) = node.param_child.as_deref() else {
                    return Ok(());
                };
                let existing = child.param.as_ref().map_or("", |slot| slot.name.as_ref());
                if existing != name {
                    return Err(RouteError::ParamConflict {
                        path: pattern.to_string(),
                        name: name.to_string(),
                        existing: existing.to_string(),
                    });
                }
                node = child;
            }
        }
    }

    if reject_duplicates && node.handler.is_some() {
        return Err(RouteError::DuplicateRoute {
            method: method.to_string(),
            path: pattern.to_string(),
        });
    }
    Ok(())
}

/// Follows existing edges spelling exactly `run`; `None` once the run leaves
/// the current tree or ends inside an edge.
fn follow_literal<'n, H, V>(mut node: &'n RouteNode<H, V>, mut run: &str) -> Option<&'n RouteNode<H, V>> {
    loop {
        let edge = node.literals.get(leading_segment(run))?;
        let after = run.strip_prefix(edge.key.as_ref())?;
        if after.is_empty() {
            return Some(&edge.node);
        }
        run = after.strip_prefix('/')?;
        node = &edge.node;
    }
}

/// Walks `pieces` from `node`, creating nodes on demand, and returns the
/// terminal node.
pub(super) fn descend<'n, H, V: Clone>(
    node: &'n mut RouteNode<H, V>,
    pieces: &[Piece<'_>],
    validators: &ValidatorMap<V>,
) -> &'n mut RouteNode<H, V> {
    let Some((first, rest)) = pieces.split_first() else {
        return node;
    };
    let next = match *first {
        Piece::Literal(run) => descend_literal(node, run),
        Piece::Param(name) => node
            .param_child
            .get_or_insert_with(|| {
                Box::new(RouteNode::with_param(name, validators.get(name).cloned()))
            })
            .as_mut(),
    };
    descend(next, rest, validators)
}

fn descend_literal<'n, H, V>(node: &'n mut RouteNode<H, V>, run: &str) -> &'n mut RouteNode<H, V> {
    let edge = match node.literals.entry(leading_segment(run).into()) {
        Entry::Vacant(slot) => return &mut slot.insert(Edge::new(run)).node,
        Entry::Occupied(slot) => slot.into_mut(),
    };

    let shared = shared_prefix(&edge.key, run);
    if shared < edge.key.len() {
        edge.split_at(shared);
    }
    if shared == run.len() {
        &mut edge.node
    } else {
        descend_literal(&mut edge.node, &run[shared + 1..])
    }
}

/// Byte length of the longest run of whole segments `a` and `b` share.
fn shared_prefix(a: &str, b: &str) -> usize {
    let mut shared = 0;
    let mut offset = 0;
    for (x, y) in a.split('/').zip(b.split('/')) {
        if x != y {
            break;
        }
        offset += x.len();
        shared = offset;
        offset += 1;
    }
    shared
}
