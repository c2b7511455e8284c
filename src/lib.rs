// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Meet-in-the-middle counter for the n-queens problem (OEIS A000170).
//!
//! Counts the placements of N non-attacking queens on an N x N board for a
//! build-time N (see [`config`]). This is a counter, not a solver: it
//! reports how many placements exist without materializing any of them, and
//! it avoids whole-board backtracking entirely.
//!
//! # Architecture
//!
//! The board splits into four quadrants. A [`store::subsquare::Subsquare`]
//! precomputes every partial solution of a quarter-board once, indexed by
//! occupied rows and columns; partial solutions are then only compared
//! through their occupied diagonals.
//!
//! The [`engine::quadrants::Quadrants`] engine walks the east half-board's
//! row combinations, joins compatible north/south quarter pairs into 64-bit
//! *patterns*, and freezes them into a [`matcher::sieve::Sieve`] - an array
//! of transposed matchers ([`matcher::matchtr::MatchTr`]) routed by a few
//! cut bits. The west half-board's joined pairs are then streamed as *items*
//! through the sieve; `item & pattern == 0` marks a compatible pair, and
//! each item's hits are counted 64 patterns at a time with one popcount per
//! group word.
//!
//! Symmetry bookkeeping (up to 8x) and the starting configurations for odd
//! boards live in [`start`]; worker coordination - a barrier plus an atomic
//! work ticket, no locks on the hot path - lives in [`schedule`].
//!
//! # Entry points
//!
//! [`count_solutions`] counts for the build-time board size;
//! [`count_solutions_sized`] is the generic form the tests instantiate for
//! small boards.

pub mod arch;
pub mod bits;
pub mod board;
pub mod config;
pub mod engine;
pub mod matcher;
pub mod schedule;
pub mod solver;
pub mod start;
pub mod stats;
pub mod store;
pub mod util;

pub use config::{BoardCfg, Cfg, BOARD_SIZE};
pub use solver::{count_solutions, count_solutions_sized};
