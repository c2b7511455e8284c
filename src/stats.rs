// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run statistics.
//!
//! Coarse counters incremented at phase granularity; useful to compare
//! tuning presets without a profiler. Totals are exact for pattern/item
//! counts (each worker flushes its private tally once per phase), while
//! per-thread intermediate values are not reproducible across runs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(usize)]
pub enum Counter {
    /// Row combinations that reached the counting phases.
    RowCombinations,
    /// Half-board patterns delivered to the sieves.
    StoredPatterns,
    /// Half-board items matched against the sieves.
    CountedItems,
    /// Sink merges at the freeze barrier.
    Freezes,
}

pub struct Stats {
    stats: [AtomicU64; Counter::COUNT],
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            stats: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, counter: Counter, n: u64) {
        self.stats[counter as usize].fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize].load(Ordering::Relaxed)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} row combinations, {} patterns, {} items, {} freezes",
            self.get(Counter::RowCombinations),
            self.get(Counter::StoredPatterns),
            self.get(Counter::CountedItems),
            self.get(Counter::Freezes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let stats = Stats::new();
        stats.add(Counter::StoredPatterns, 3);
        stats.add(Counter::StoredPatterns, 4);
        stats.add(Counter::Freezes, 1);

        assert_eq!(stats.get(Counter::StoredPatterns), 7);
        assert_eq!(stats.get(Counter::Freezes), 1);
        assert_eq!(stats.get(Counter::RowCombinations), 0);
    }
}
