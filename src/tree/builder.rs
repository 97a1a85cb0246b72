use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::frequency::FrequencyTable;
use crate::tree::node::HuffmanNode;
use crate::tree::tree::HuffmanTree;

#[derive(Debug, Error)]
pub enum TreeBuildError {
    #[error("cannot build a prefix tree from empty input")]
    EmptyInput,
}

/// Heap entry carrying the insertion order so that ties between equal
/// weights resolve deterministically. Leaves are pushed in symbol order
/// (the frequency table iterates a BTreeMap), so identical inputs always
/// produce identical trees.
struct HeapEntry {
    order: usize,
    node: HuffmanNode,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys so the lightest,
        // earliest-inserted node surfaces first.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Build the prefix tree for a frequency table.
///
/// One leaf per distinct symbol goes into a min-ordered heap; the two
/// lightest nodes are repeatedly merged (first popped becomes the left
/// child) until a single root remains. A table with exactly one symbol
/// yields that leaf as the root directly.
pub fn build_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree, TreeBuildError> {
    if frequencies.is_empty() {
        return Err(TreeBuildError::EmptyInput);
    }

    let mut heap = BinaryHeap::with_capacity(frequencies.distinct());
    for (order, (symbol, count)) in frequencies.iter().enumerate() {
        heap.push(HeapEntry {
            order,
            node: HuffmanNode::leaf(symbol, count),
        });
    }

    let mut next_order = heap.len();
    while heap.len() > 1 {
        let (first, second) = match (heap.pop(), heap.pop()) {
            (Some(a), Some(b)) => (a, b),
            // The loop guard guarantees two entries; never reached.
            _ => break,
        };

        heap.push(HeapEntry {
            order: next_order,
            node: HuffmanNode::merge(first.node, second.node),
        });
        next_order += 1;
    }

    let root = heap
        .pop()
        .map(|entry| entry.node)
        .ok_or(TreeBuildError::EmptyInput)?;

    debug_assert_eq!(root.weight(), frequencies.total());

    Ok(HuffmanTree::new(root))
}
