use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::{HuffmanNode, HuffmanTree};
use crate::types::Code;

/// Symbol → code mapping derived from a prefix tree.
///
/// Prefix-freeness holds by construction: every code is the path to a
/// distinct leaf, and no root-to-leaf path passes through another leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree, accumulating `'0'` on left descents and `'1'` on
    /// right descents, and record the accumulated path at each leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        assign(tree.root(), Code::empty(), &mut codes);

        debug_assert!(codes.values().all(|code| !code.is_empty()));

        CodeTable { codes }
    }

    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

fn assign(node: &HuffmanNode, path: Code, codes: &mut BTreeMap<u8, Code>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            // A lone root leaf has an empty path; an empty code cannot
            // round-trip, so it gets the fixed one-bit code instead.
            let code = if path.is_empty() { Code::zero_bit() } else { path };
            codes.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            assign(left, path.with_bit('0'), codes);
            assign(right, path.with_bit('1'), codes);
        }
    }
}
