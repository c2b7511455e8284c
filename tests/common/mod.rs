// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use queens_count::store::pack::PackIter;
use queens_count::store::symmetry::{QNoSymmetry, QRowSymmetry};
use queens_count::{count_solutions_sized, Cfg};

/// All-round tuning values, independent of the build-time board feature.
pub struct SmallBoardCfg;

impl Cfg for SmallBoardCfg {}

/// Count with the production strategy pair (plain storage, popcount-aware
/// iteration).
pub fn count<const SIZE: usize, const HALF: usize>(threads: usize, part: u32, parts: u32) -> u64 {
    count_solutions_sized::<SIZE, HALF, SmallBoardCfg, QNoSymmetry, PackIter>(threads, part, parts)
}

/// Count with the row-symmetric quarter store, as the largest boards use it.
pub fn count_row_symm<const SIZE: usize, const HALF: usize>(
    threads: usize,
    part: u32,
    parts: u32,
) -> u64 {
    count_solutions_sized::<SIZE, HALF, SmallBoardCfg, QRowSymmetry, PackIter>(threads, part, parts)
}
