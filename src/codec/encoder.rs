use thiserror::Error;

use crate::codec::table::CodeTable;
use crate::types::Code;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// The symbol never appeared in the text the codec was built from, so
    /// the table has no code for it. Silently emitting nothing would
    /// corrupt the stream, so this is surfaced instead.
    #[error("symbol {0:#04x} has no code in the current table")]
    UnmappedSymbol(u8),
}

/// Replace each input symbol with its code, in input order.
pub fn encode(table: &CodeTable, text: &[u8]) -> Result<Code, EncodeError> {
    let mut bits = String::new();
    for &symbol in text {
        let code = table
            .code(symbol)
            .ok_or(EncodeError::UnmappedSymbol(symbol))?;
        bits.push_str(code.as_str());
    }

    Ok(Code::from_bits(bits))
}
