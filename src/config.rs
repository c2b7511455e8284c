// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time configuration: board size and performance tuning.
//!
//! The board size is fixed at build time through cargo features, one
//! `board_N` feature per supported size:
//!
//! ```bash
//! # Default: N=18
//! cargo build --release
//!
//! # Build the N=12 counter
//! cargo build --release --features board_12
//! ```
//!
//! Sizes 19 and up enable BMI2 pattern compression and therefore need a
//! target that executes `PEXT` in hardware (`RUSTFLAGS="-C
//! target-cpu=native"` on a BMI2-capable x86-64 machine).
//!
//! Tuning knobs travel as a [`Cfg`] implementation - a bundle of associated
//! constants, so every matcher and sieve monomorphizes against the selected
//! values. [`BoardCfg`] is the production preset derived from `BOARD_SIZE`;
//! tests declare their own presets with [`define_cfg!`](crate::define_cfg).

use crate::store::symmetry;

/// Number of rows/columns of the full board.
#[cfg(not(any(
    feature = "board_8",
    feature = "board_9",
    feature = "board_10",
    feature = "board_11",
    feature = "board_12",
    feature = "board_13",
    feature = "board_14",
    feature = "board_15",
    feature = "board_16",
    feature = "board_17",
    feature = "board_18",
    feature = "board_19",
    feature = "board_20",
    feature = "board_21",
    feature = "board_22"
)))]
pub const BOARD_SIZE: usize = 18;

#[cfg(feature = "board_8")]
pub const BOARD_SIZE: usize = 8;

#[cfg(feature = "board_9")]
pub const BOARD_SIZE: usize = 9;

#[cfg(feature = "board_10")]
pub const BOARD_SIZE: usize = 10;

#[cfg(feature = "board_11")]
pub const BOARD_SIZE: usize = 11;

#[cfg(feature = "board_12")]
pub const BOARD_SIZE: usize = 12;

#[cfg(feature = "board_13")]
pub const BOARD_SIZE: usize = 13;

#[cfg(feature = "board_14")]
pub const BOARD_SIZE: usize = 14;

#[cfg(feature = "board_15")]
pub const BOARD_SIZE: usize = 15;

#[cfg(feature = "board_16")]
pub const BOARD_SIZE: usize = 16;

#[cfg(feature = "board_17")]
pub const BOARD_SIZE: usize = 17;

#[cfg(feature = "board_18")]
pub const BOARD_SIZE: usize = 18;

#[cfg(feature = "board_19")]
pub const BOARD_SIZE: usize = 19;

#[cfg(feature = "board_20")]
pub const BOARD_SIZE: usize = 20;

#[cfg(feature = "board_21")]
pub const BOARD_SIZE: usize = 21;

#[cfg(feature = "board_22")]
pub const BOARD_SIZE: usize = 22;

const _: () = assert!(5 <= BOARD_SIZE && BOARD_SIZE <= 22, "unsupported board size");

/// Performance tuning knobs, fixed at build time. Defaults match the
/// all-round values; per-size presets override them below.
pub trait Cfg {
    /// Number of pattern bits cut out for sieve indexing.
    const SIEVE_CUTS: u32 = 0;
    /// Item bits looked up per table access in the transposed matcher.
    const MATCH_CHUNK_SIZE: u32 = 5;
    /// 64-bit words per transposed group; one promoted piece covers
    /// `64 * MATCH_GROUP_SIZE` patterns.
    const MATCH_GROUP_SIZE: usize = 8;
    /// Minimum number of pending raw patterns worth promoting on close.
    const MATCH_MIN_SIZE: usize = 40;
    /// Compress insignificant pattern bits with BMI2 `PEXT`.
    const BMI_INTRIN: bool = false;
    /// Issue L2 prefetch hints while walking sieve matchers.
    const PREFETCH: bool = false;
}

/// Declare a unit struct implementing [`Cfg`] with the given values.
///
/// Mirrors the shape of the production preset so tests can sweep the tuning
/// space:
///
/// ```
/// queens_count::define_cfg!(TinyGroups, cuts: 0, chunk: 2, group: 1, min: 40, bmi: false, prefetch: false);
/// ```
#[macro_export]
macro_rules! define_cfg {
    ($name:ident, cuts: $cuts:expr, chunk: $chunk:expr, group: $group:expr,
     min: $min:expr, bmi: $bmi:expr, prefetch: $prefetch:expr) => {
        pub struct $name;

        impl $crate::config::Cfg for $name {
            const SIEVE_CUTS: u32 = $cuts;
            const MATCH_CHUNK_SIZE: u32 = $chunk;
            const MATCH_GROUP_SIZE: usize = $group;
            const MATCH_MIN_SIZE: usize = $min;
            const BMI_INTRIN: bool = $bmi;
            const PREFETCH: bool = $prefetch;
        }
    };
}

//                              s = 16   17   18   19   20   21   22
// sieve cuts                        0    0    0    0    3    3    6
// match min size                   40   40   40   40   60   60   80
// bmi compression                   F    F    F    T    T    T    T
// prefetch                          T    T    T    T    T    F    T
// quarter-board symmetry         none none none none none none rows
const fn sieve_cuts(n: usize) -> u32 {
    match n {
        _ if n >= 22 => 6,
        _ if n >= 20 => 3,
        _ => 0,
    }
}

const fn match_min_size(n: usize) -> usize {
    match n {
        _ if n >= 22 => 80,
        _ if n >= 20 => 60,
        _ => 40,
    }
}

/// Production tuning preset for [`BOARD_SIZE`].
pub struct BoardCfg;

impl Cfg for BoardCfg {
    const SIEVE_CUTS: u32 = sieve_cuts(BOARD_SIZE);
    const MATCH_MIN_SIZE: usize = match_min_size(BOARD_SIZE);
    const BMI_INTRIN: bool = BOARD_SIZE >= 19;
    const PREFETCH: bool = BOARD_SIZE != 21;
}

/// Quarter-board storage symmetry for the production board: plain storage is
/// fastest until memory pressure wins at N=22.
#[cfg(not(feature = "board_22"))]
pub type BoardSymmetry = symmetry::QNoSymmetry;

#[cfg(feature = "board_22")]
pub type BoardSymmetry = symmetry::QRowSymmetry;

/// Index layout for the production quarter-board store.
pub type BoardPack = crate::store::pack::PackIter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_table() {
        assert_eq!(sieve_cuts(16), 0);
        assert_eq!(sieve_cuts(19), 0);
        assert_eq!(sieve_cuts(20), 3);
        assert_eq!(sieve_cuts(21), 3);
        assert_eq!(sieve_cuts(22), 6);
        assert_eq!(match_min_size(18), 40);
        assert_eq!(match_min_size(20), 60);
        assert_eq!(match_min_size(22), 80);
    }

    #[test]
    fn test_default_cfg_values() {
        struct Plain;
        impl Cfg for Plain {}

        assert_eq!(Plain::SIEVE_CUTS, 0);
        assert_eq!(Plain::MATCH_CHUNK_SIZE, 5);
        assert_eq!(Plain::MATCH_GROUP_SIZE, 8);
        assert_eq!(Plain::MATCH_MIN_SIZE, 40);
        assert!(!Plain::BMI_INTRIN);
        assert!(!Plain::PREFETCH);
    }
}
