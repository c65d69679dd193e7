use crate::errors::{RouteError, RouteResult};
use crate::matcher::{Params, RouteLookup, TrieNode, find_route};
use crate::pattern::leading_segment;
use crate::validators::ValidatorFn;

/// `(key, child)` literal edge of a [`StaticNode`].
pub type StaticEdge<H> = (&'static str, StaticNode<H>);

#[derive(Debug, Clone, Copy)]
pub struct StaticParam {
    pub name: &'static str,
    pub validator: Option<ValidatorFn>,
}

#[derive(Debug)]
pub struct StaticNode<H: 'static> {
    pub handler: Option<H>,
    pub param: Option<StaticParam>,
    /// Sorted by the leading segment of each key; leading segments are
    /// unique within a node.
    pub literals: &'static [StaticEdge<H>],
    pub child: Option<&'static StaticNode<H>>,
}

impl<H: 'static> StaticNode<H> {
    fn is_well_formed(&self) -> bool {
        let ordered = self
            .literals
            .windows(2)
            .all(|pair| leading_segment(pair[0].0) < leading_segment(pair[1].0));
        ordered
            && self.literals.iter().all(|(_, node)| node.is_well_formed())
            && self.child.is_none_or(|child| child.param.is_some() && child.is_well_formed())
    }
}

impl<H: 'static> TrieNode for StaticNode<H> {
    type Handler = H;
    type Validator = ValidatorFn;

    #[inline]
    fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    #[inline]
    fn literal(&self, head: &str) -> Option<(&str, &Self)> {
        self.literals
            .binary_search_by(|(key, _)| leading_segment(key).cmp(head))
            .ok()
            .map(|index| {
                let (key, node) = &self.literals[index];
                (*key, node)
            })
    }

    #[inline]
    fn param_child(&self) -> Option<&Self> {
        self.child
    }

    #[inline]
    fn param(&self) -> Option<(&str, Option<&ValidatorFn>)> {
        self.param
            .as_ref()
            .map(|param| (param.name, param.validator.as_ref()))
    }
}

/// Method table of a compiled trie.
#[derive(Debug)]
pub struct StaticTable<H: 'static> {
    pub methods: &'static [StaticEdge<H>],
}

impl<H: 'static> StaticTable<H> {
    pub const fn new(methods: &'static [StaticEdge<H>]) -> Self {
        Self { methods }
    }

    pub fn root(&self, method: &str) -> Option<&StaticNode<H>> {
        self.methods
            .iter()
            .find(|(name, _)| *name == method)
            .map(|(_, root)| root)
    }

    /// Checks the ordering invariant binary search relies on. Tables written
    /// by the compiler always satisfy it.
    pub fn is_well_formed(&self) -> bool {
        self.methods.iter().all(|(_, root)| root.is_well_formed())
    }

    pub fn get<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        let root = self.root(method).ok_or_else(|| RouteError::InvalidMethod {
            method: method.to_string(),
        })?;
        find_route(root, method, path)
    }
}

impl<H: 'static> RouteLookup for StaticTable<H> {
    type Handler = H;

    fn lookup<'a>(&'a self, method: &str, path: &'a str) -> RouteResult<(&'a H, Params<'a>)> {
        self.get(method, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    const LEAF: StaticNode<u8> = StaticNode {
        handler: Some(2),
        param: None,
        literals: &[],
        child: None,
    };

    static TABLE: StaticTable<u8> = StaticTable::new(&[(
        "GET",
        StaticNode {
            handler: None,
            param: None,
            literals: &[
                ("a/b", StaticNode { handler: Some(1), ..LEAF }),
                ("c", LEAF),
            ],
            child: None,
        },
    )]);

    #[test]
    fn finds_literal_edges_by_leading_segment() {
        assert!(TABLE.is_well_formed());
        assert_eq!(*TABLE.get("GET", "/a/b").unwrap().0, 1);
        assert_eq!(*TABLE.get("GET", "c").unwrap().0, 2);
        assert_eq!(TABLE.get("GET", "/a").unwrap_err().kind(), ErrorKind::RouteNotFound);
        assert_eq!(TABLE.get("PUT", "/c").unwrap_err().kind(), ErrorKind::InvalidMethod);
    }

    #[test]
    fn unsorted_literals_are_not_well_formed() {
        let table: StaticTable<u8> = StaticTable::new(&[(
            "GET",
            StaticNode {
                handler: None,
                param: None,
                literals: &[("c", LEAF), ("a", LEAF)],
                child: None,
            },
        )]);
        assert!(!table.is_well_formed());
    }
}
