/// A node of the prefix tree.
///
/// Invariants:
/// - an internal node has exactly two children;
/// - an internal node's weight is the sum of its children's weights;
/// - a node holds a symbol iff it is a leaf.
///
/// Children are owned by their parent, so dropping the root drops the whole
/// tree in one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub(crate) fn leaf(symbol: u8, weight: u64) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    /// Combine two subtrees under a fresh internal node. The first argument
    /// becomes the left child.
    pub(crate) fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        let weight = left.weight() + right.weight();
        HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Subtree weight: the frequency sum over every leaf below this node.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    pub(crate) fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
