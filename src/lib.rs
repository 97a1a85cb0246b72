//! Deterministic Huffman coding engine for lossless byte-oriented compression.
//!
//! `huffman-core` provides frequency analysis, min-heap-driven prefix tree
//! construction, code table derivation, and encode/decode round trips. All
//! operations are deterministic — identical inputs always produce identical
//! trees, tables, and bit streams.

pub mod codec;
pub mod frequency;
pub mod tree;
pub mod types;
