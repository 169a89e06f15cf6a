//! Translation trees: static nested maps from key segments to display strings.
//!
//! Every tree is `'static` data compiled into the binary. Lookups walk a
//! dot-separated key one segment at a time and never fail loudly: any
//! mismatch between the key and the tree's shape is just "not found".

use crate::i18n::Language;

/// A node in a translation tree.
#[derive(Debug, Clone, Copy)]
pub enum Node {
    /// A display string, possibly containing `{name}` placeholders
    Leaf(&'static str),

    /// Named children, searched in declaration order
    Branch(&'static [(&'static str, Node)]),
}

impl Node {
    /// Child named `segment`. Leaves have no children.
    fn child(self, segment: &str) -> Option<Node> {
        match self {
            Node::Branch(children) => children
                .iter()
                .find(|(name, _)| *name == segment)
                .map(|(_, child)| *child),
            Node::Leaf(_) => None,
        }
    }

    fn as_leaf(self) -> Option<&'static str> {
        match self {
            Node::Leaf(text) => Some(text),
            Node::Branch(_) => None,
        }
    }
}

/// The complete set of display strings for one language.
#[derive(Debug)]
pub struct TranslationTree {
    root: &'static [(&'static str, Node)],
}

impl TranslationTree {
    pub const fn new(root: &'static [(&'static str, Node)]) -> Self {
        Self { root }
    }

    /// Get the tree registered for `language`.
    pub fn for_language(language: Language) -> &'static TranslationTree {
        language.config().tree
    }

    /// Resolve a dot-separated key to a leaf string.
    ///
    /// # Returns
    /// * `Some(text)` if every segment matches and the path ends on a leaf
    /// * `None` if a segment is missing, the path runs past a leaf, or it
    ///   stops on a branch
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        key.split('.')
            .try_fold(Node::Branch(self.root), Node::child)
            .and_then(Node::as_leaf)
    }

    /// All dot-paths in this tree that end on a leaf, in declaration order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self.root, "", &mut paths);
        paths
    }
}

fn collect_leaf_paths(children: &[(&'static str, Node)], prefix: &str, out: &mut Vec<String>) {
    for (name, node) in children {
        let path = if prefix.is_empty() {
            (*name).to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        match node {
            Node::Leaf(_) => out.push(path),
            Node::Branch(grandchildren) => collect_leaf_paths(grandchildren, &path, out),
        }
    }
}
