pub mod code;
pub mod report;

pub use code::Code;
pub use report::{CodeTableEntry, CompressionSummary};
