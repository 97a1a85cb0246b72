// This is intentionally thin:
// no mutation
// no rebalancing
// read-only traversal after construction

use crate::tree::node::HuffmanNode;

/// A rooted prefix tree produced by [`build_tree`](crate::tree::build_tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub(crate) fn new(root: HuffmanNode) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Sum of all leaf weights, which equals the length of the input text
    /// the frequencies were counted from.
    pub fn total_weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves, which equals the number of distinct input symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
