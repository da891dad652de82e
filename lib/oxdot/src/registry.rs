//! Node identities of a render.

use oxrdf::Term;
use rustc_hash::FxHashMap;
use std::fmt;

/// The identity of a graph node in the DOT output, written `n<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the number of this node, starting at 1.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Assigns stable sequential identities to nodes, in first-visit order.
///
/// ```
/// use oxdot::NodeRegistry;
/// use oxrdf::{NamedNode, Term};
///
/// let mut registry = NodeRegistry::new();
/// let a = Term::from(NamedNode::new("http://example.com/a")?);
/// let b = Term::from(NamedNode::new("http://example.com/b")?);
/// assert_eq!(registry.id_of(&a).to_string(), "n1");
/// assert_eq!(registry.id_of(&b).to_string(), "n2");
/// assert_eq!(registry.id_of(&a).to_string(), "n1");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default)]
pub struct NodeRegistry {
    ids: FxHashMap<Term, NodeId>,
}

impl NodeRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity of `node`, allocating the next one on first call.
    pub fn id_of(&mut self, node: &Term) -> NodeId {
        if let Some(id) = self.ids.get(node) {
            return *id;
        }
        let id = NodeId(self.ids.len() + 1);
        self.ids.insert(node.clone(), id);
        id
    }

    /// Returns the identity of `node` if one has been allocated.
    #[inline]
    pub fn get(&self, node: &Term) -> Option<NodeId> {
        self.ids.get(node).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A set of [`NodeId`]s stored as a growable bitset.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    words: Vec<u64>,
    len: usize,
}

impl NodeSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`, returns `false` if it was already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        let (word, mask) = Self::position(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.len += 1;
        true
    }

    pub fn contains(&self, id: NodeId) -> bool {
        let (word, mask) = Self::position(id);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn position(id: NodeId) -> (usize, u64) {
        (id.0 / 64, 1 << (id.0 % 64))
    }
}

/// Classes already visited by a class-property closure.
#[derive(Debug, Default)]
pub struct ClassSet {
    registry: NodeRegistry,
    visited: NodeSet,
}

impl ClassSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `class` as visited, returns `false` if it already was.
    pub fn insert(&mut self, class: &Term) -> bool {
        let id = self.registry.id_of(class);
        self.visited.insert(id)
    }

    pub fn contains(&self, class: &Term) -> bool {
        self.registry
            .get(class)
            .is_some_and(|id| self.visited.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::BlankNode;

    #[test]
    fn test_ids_are_sequential() {
        let mut registry = NodeRegistry::new();
        let nodes = (0..3)
            .map(|_| Term::from(BlankNode::default()))
            .collect::<Vec<_>>();
        for node in &nodes {
            registry.id_of(node);
        }
        assert_eq!(
            nodes.iter().map(|n| registry.id_of(n).get()).collect::<Vec<_>>(),
            [1, 2, 3]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_node_set() {
        let mut set = NodeSet::new();
        assert!(set.is_empty());
        assert!(set.insert(NodeId(1)));
        assert!(set.insert(NodeId(130)));
        assert!(!set.insert(NodeId(130)));
        assert!(set.contains(NodeId(1)));
        assert!(!set.contains(NodeId(2)));
        assert!(!set.contains(NodeId(1000)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_class_set() {
        let mut set = ClassSet::new();
        let class = Term::from(BlankNode::default());
        assert!(!set.contains(&class));
        assert!(set.insert(&class));
        assert!(!set.insert(&class));
        assert!(set.contains(&class));
    }
}
