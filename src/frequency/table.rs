use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-symbol occurrence counts for one input text.
///
/// Backed by a `BTreeMap` so iteration order is the symbol order — every
/// downstream structure (heap insertion, code table, reports) inherits its
/// determinism from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Count every symbol in `text` in a single pass.
    pub fn from_text(text: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in text {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Occurrence count for `symbol`; zero if it never appeared.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of symbols counted (the input length).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
