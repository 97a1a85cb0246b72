pub mod decoder;
pub mod encoder;
pub mod table;

pub use decoder::DecodeError;
pub use encoder::EncodeError;
pub use table::CodeTable;

use crate::frequency::FrequencyTable;
use crate::tree::{build_tree, HuffmanTree, TreeBuildError};
use crate::types::{Code, CodeTableEntry, CompressionSummary};

/// Frequency table, prefix tree, and code table held together as one
/// mutually consistent unit.
///
/// `HuffmanCodec` is single-threaded and non-reentrant by design: rebuilding
/// takes `&mut self`, so encode and decode can never observe a half-replaced
/// tree.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Build a codec for `text`.
    ///
    /// This is the ONLY way to construct a codec; the constructor enforces
    /// that the tree and table are always derived from the same frequencies.
    pub fn from_text(text: &[u8]) -> Result<Self, TreeBuildError> {
        let frequencies = FrequencyTable::from_text(text);
        let tree = build_tree(&frequencies)?;
        let table = CodeTable::from_tree(&tree);

        Ok(HuffmanCodec {
            frequencies,
            tree,
            table,
        })
    }

    /// Replace the frequencies, tree, and table wholesale with ones built
    /// from `text`. On error the previous state is retained untouched.
    pub fn rebuild(&mut self, text: &[u8]) -> Result<(), TreeBuildError> {
        *self = HuffmanCodec::from_text(text)?;
        Ok(())
    }

    /// Encode `text` as a concatenation of per-symbol codes, in input order.
    pub fn encode(&self, text: &[u8]) -> Result<Code, EncodeError> {
        encoder::encode(&self.table, text)
    }

    /// Decode a `'0'`/`'1'` stream back into the original symbols.
    pub fn decode(&self, bits: &str) -> Result<Vec<u8>, DecodeError> {
        decoder::decode(&self.tree, bits)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// One report row per distinct symbol, in ascending symbol order.
    pub fn table_entries(&self) -> Vec<CodeTableEntry> {
        self.table
            .iter()
            .map(|(symbol, code)| CodeTableEntry {
                symbol,
                frequency: self.frequencies.count(symbol),
                code: code.as_str().to_string(),
            })
            .collect()
    }

    /// Encode `text` and report its size against a fixed 8-bit encoding.
    pub fn summarize(&self, text: &[u8]) -> Result<CompressionSummary, EncodeError> {
        let encoded = self.encode(text)?;

        Ok(CompressionSummary::new(
            text.len(),
            self.frequencies.distinct(),
            encoded.len(),
        ))
    }
}
