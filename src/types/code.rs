use std::fmt;

use serde::{Deserialize, Serialize};

/// A bitstring: the `'0'`/`'1'` path from the tree root to one leaf, or a
/// concatenation of such paths (an encoded stream).
///
/// Codes stored in a table are never empty; a lone root leaf is assigned the
/// fixed one-bit code `"0"` so single-symbol inputs still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub(crate) fn empty() -> Self {
        Code(String::new())
    }

    /// The fixed code assigned when the root is itself a leaf.
    pub(crate) fn zero_bit() -> Self {
        Code("0".into())
    }

    pub(crate) fn from_bits(bits: String) -> Self {
        debug_assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
        Code(bits)
    }

    /// This code extended by one bit. `bit` must be `'0'` or `'1'`.
    pub(crate) fn with_bit(&self, bit: char) -> Self {
        debug_assert!(bit == '0' || bit == '1');
        let mut bits = self.0.clone();
        bits.push(bit);
        Code(bits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Code) -> bool {
        self.len() < other.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
