// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Starting configuration for even boards: no locked queens.

use crate::bits::colex::BitCombColex;
use crate::bits::n_least_bits;
use crate::start::Start;
use crate::store::symmetry::DiagPair;

/// Even-sized board; every row is free and half of them go east. All
/// symmetry reductions apply.
#[derive(Default)]
pub struct StartEmpty<const SIZE: usize>;

impl<const SIZE: usize> Start for StartEmpty<SIZE> {
    const INTERNAL_SYMMETRY: bool = true;
    const DIAG_SYMMETRY: bool = true;
    const FILTER_DIAG: bool = false;

    fn bit_comb(&self) -> BitCombColex {
        BitCombColex::new(SIZE as u32, SIZE as u32 / 2)
    }

    fn stretch_rows(&self, bits: u32) -> u32 {
        bits
    }

    fn free_rows(&self) -> u32 {
        n_least_bits(SIZE as u32)
    }

    fn columns(&self) -> u32 {
        0
    }

    fn match_diags(&self, _west: bool, _diags: &DiagPair) -> bool {
        true
    }
}
