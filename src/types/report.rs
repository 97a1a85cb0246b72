use serde::{Deserialize, Serialize};

/// One row of the derived code table: a symbol, how often it appeared, and
/// the bitstring it was assigned.
///
/// Fully self-contained and serializable; callers render tables from these
/// rather than reaching into codec internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTableEntry {
    pub symbol: u8,
    pub frequency: u64,
    pub code: String,
}

/// Outcome of encoding a text against the current code table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionSummary {
    /// Number of symbols in the encoded input.
    pub input_symbols: usize,
    /// Distinct symbols in the codec's alphabet.
    pub distinct_symbols: usize,
    /// Size of the input under a fixed 8-bit-per-symbol encoding.
    pub fixed_width_bits: usize,
    /// Size of the Huffman-encoded stream.
    pub encoded_bits: usize,
    /// Percentage saved versus the fixed-width encoding; 0.0 for empty input.
    pub ratio: f32,
}

impl CompressionSummary {
    pub(crate) fn new(input_symbols: usize, distinct_symbols: usize, encoded_bits: usize) -> Self {
        let fixed_width_bits = input_symbols * 8;
        let ratio = if fixed_width_bits == 0 {
            0.0
        } else {
            100.0 * (1.0 - encoded_bits as f32 / fixed_width_bits as f32)
        };

        CompressionSummary {
            input_symbols,
            distinct_symbols,
            fixed_width_bits,
            encoded_bits,
            ratio,
        }
    }
}
