use thiserror::Error;

use crate::tree::{HuffmanNode, HuffmanTree};

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream contains a character that is not `'0'` or `'1'`, or a bit
    /// that matches no code of the current alphabet.
    #[error("invalid bit {found:?} at offset {offset} in encoded stream")]
    InvalidBit { found: char, offset: usize },
    /// The stream ended mid-walk: the trailing bits do not resolve to a
    /// leaf, so the final symbol would be silently dropped.
    #[error("bit stream ends mid-symbol with {0} unresolved trailing bit(s)")]
    TruncatedStream(usize),
}

/// Walk the tree bit by bit: `'0'` descends left, `'1'` descends right; a
/// leaf emits its symbol and resets the walk to the root. A well-formed
/// stream leaves the walk at the root exactly when the bits run out.
pub fn decode(tree: &HuffmanTree, bits: &str) -> Result<Vec<u8>, DecodeError> {
    // Single-symbol alphabet: the root is a leaf with the fixed code "0",
    // so every '0' bit is one complete code unit. There is nowhere to
    // descend, which makes any other bit unmatchable.
    if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
        let mut decoded = Vec::with_capacity(bits.len());
        for (offset, bit) in bits.chars().enumerate() {
            match bit {
                '0' => decoded.push(*symbol),
                found => return Err(DecodeError::InvalidBit { found, offset }),
            }
        }
        return Ok(decoded);
    }

    let mut decoded = Vec::new();
    let mut node = tree.root();
    let mut pending = 0;

    for (offset, bit) in bits.chars().enumerate() {
        let next = match (node, bit) {
            (HuffmanNode::Internal { left, .. }, '0') => left.as_ref(),
            (HuffmanNode::Internal { right, .. }, '1') => right.as_ref(),
            (HuffmanNode::Leaf { .. }, '0' | '1') => {
                // The walk rests on an internal node between symbols: leaves
                // emit and reset to the root, and the root is internal here.
                unreachable!("decode walk rests on internal nodes")
            }
            (_, found) => return Err(DecodeError::InvalidBit { found, offset }),
        };
        pending += 1;

        if let HuffmanNode::Leaf { symbol, .. } = next {
            decoded.push(*symbol);
            node = tree.root();
            pending = 0;
        } else {
            node = next;
        }
    }

    if pending != 0 {
        return Err(DecodeError::TruncatedStream(pending));
    }

    Ok(decoded)
}
