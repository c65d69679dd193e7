use hashbrown::HashMap as FastHashMap;

use crate::matcher::TrieNode;
use crate::pattern::leading_segment;
use crate::validators::{SegmentValidator, Validator};

/// Literal children keyed by the leading segment of their edge.
pub(crate) type LiteralMap<H, V> = FastHashMap<Box<str>, Edge<H, V>>;

/// A literal edge. `key` holds a whole run of literal segments
/// (`"static/a/b"`); no two edges of one node share a leading segment.
#[derive(Debug)]
pub struct Edge<H, V = Validator> {
    pub(crate) key: Box<str>,
    pub(crate) node: RouteNode<H, V>,
}

impl<H, V> Edge<H, V> {
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            node: RouteNode::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn node(&self) -> &RouteNode<H, V> {
        &self.node
    }

    /// Cuts the edge after the first `at` bytes (a segment boundary), moving
    /// the remainder and the old child one level down.
    pub(crate) fn split_at(&mut self, at: usize) {
        let tail: Box<str> = self.key[at + 1..].into();
        let lower = std::mem::take(&mut self.node);
        self.key = self.key[..at].into();
        self.node
            .literals
            .insert(leading_segment(&tail).into(), Edge { key: tail, node: lower });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSlot<V> {
    pub(crate) name: Box<str>,
    pub(crate) validator: Option<V>,
}

impl<V> ParamSlot<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validator(&self) -> Option<&V> {
        self.validator.as_ref()
    }
}

/// Node of the runtime trie.
#[derive(Debug)]
pub struct RouteNode<H, V = Validator> {
    pub(crate) param: Option<ParamSlot<V>>,
    pub(crate) handler: Option<H>,
    pub(crate) literals: LiteralMap<H, V>,
    pub(crate) param_child: Option<Box<RouteNode<H, V>>>,
}

impl<H, V> Default for RouteNode<H, V> {
    fn default() -> Self {
        Self {
            param: None,
            handler: None,
            literals: FastHashMap::new(),
            param_child: None,
        }
    }
}

impl<H, V> RouteNode<H, V> {
    pub(crate) fn with_param(name: &str, validator: Option<V>) -> Self {
        Self {
            param: Some(ParamSlot {
                name: name.into(),
                validator,
            }),
            ..Self::default()
        }
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn param(&self) -> Option<&ParamSlot<V>> {
        self.param.as_ref()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Edge<H, V>> {
        self.literals.values()
    }

    pub fn literal_edge(&self, head: &str) -> Option<&Edge<H, V>> {
        self.literals.get(head)
    }

    pub fn param_child(&self) -> Option<&RouteNode<H, V>> {
        self.param_child.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.handler.is_none() && self.literals.is_empty() && self.param_child.is_none()
    }
}

impl<H, V: SegmentValidator> TrieNode for RouteNode<H, V> {
    type Handler = H;
    type Validator = V;

    #[inline]
    fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    #[inline]
    fn literal(&self, head: &str) -> Option<(&str, &Self)> {
        self.literals
            .get(head)
            .map(|edge| (edge.key.as_ref(), &edge.node))
    }

    #[inline]
    fn param_child(&self) -> Option<&Self> {
        self.param_child.as_deref()
    }

    #[inline]
    fn param(&self) -> Option<(&str, Option<&V>)> {
        self.param
            .as_ref()
            .map(|slot| (slot.name.as_ref(), slot.validator.as_ref()))
    }
}
