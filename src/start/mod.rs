// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Starting configurations.
//!
//! A starting configuration decides where the locked queens sit before the
//! quadrants engine runs, and which symmetry reductions the engine may
//! apply:
//!
//! - [`empty::StartEmpty`] - even boards, no locked queens.
//! - [`center::StartCenter`] - odd boards, one queen in the exact center.
//! - [`middle::Start2D`] - odd boards, two queens in the middle row and
//!   middle column, neither at the border.
//! - [`middle::Start1D`] - odd boards, the middle-row queen at the border.
//!
//! For odd boards the three variants together cover every queen placement in
//! the middle row/column; each of `Start2D`/`Start1D`'s seeds stands for its
//! 8 planar symmetries, enumerated outside the engine.

pub mod center;
pub mod empty;
pub mod middle;

use crate::bits::colex::BitCombColex;
use crate::store::symmetry::DiagPair;

/// The contract the quadrants engine consumes.
pub trait Start {
    /// May the engine halve the row-combination space by counting mirrored
    /// combinations twice?
    const INTERNAL_SYMMETRY: bool;

    /// May the engine fold the two diagonal symmetries into multiplicity
    /// factors?
    const DIAG_SYMMETRY: bool;

    /// Must the store filter partial solutions by the special bit?
    const FILTER_DIAG: bool;

    /// Row combinations of the east half-board, as free-row subsets.
    fn bit_comb(&self) -> BitCombColex;

    /// Insert the locked rows into a free-row combination.
    fn stretch_rows(&self, bits: u32) -> u32;

    /// Rows not occupied by locked queens.
    fn free_rows(&self) -> u32;

    /// Columns occupied by locked queens.
    fn columns(&self) -> u32;

    /// Does the quarter pair avoid the locked queens' diagonals? `west`
    /// selects the half-board the pair belongs to.
    fn match_diags(&self, west: bool, diags: &DiagPair) -> bool;
}
