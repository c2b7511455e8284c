// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Starting configurations for odd boards with two queens in the middle
//! row and column.
//!
//! [`Start2D`] walks every (column, row) seed with both queens away from the
//! border; [`Start1D`] pins the middle-row queen to the south border. Each
//! seed's engine count enters the total with multiplicity 8 - the seed's
//! planar symmetry class is enumerated here, not inside the engine.

use crate::bits::colex::BitCombColex;
use crate::bits::n_least_bits;
use crate::engine::quadrants::{Context, Quadrants};
use crate::matcher::PatternStore;
use crate::schedule::Worker;
use crate::start::Start;
use crate::store::pack::Packing;
use crate::store::symmetry::{DiagPair, Symmetry};

/// Odd board, one queen in the middle column and one in the middle row,
/// neither at the border. The seeds break every board symmetry, so the
/// engine applies none; the special-bit filter drops quarter solutions that
/// would collide with the column queen's mirror images.
#[derive(Default)]
pub struct Start2D<const SIZE: usize> {
    row: usize,
    free_rows: u32,
    columns: u32,
    diags: [u64; 2],
}

impl<const SIZE: usize> Start2D<SIZE> {
    const HALF_SIZE: usize = SIZE / 2;
    const Q_OFFSET: usize = (SIZE + 1) / 2;
    const CENTER_BIT: u32 = 1 << Self::HALF_SIZE;
    const SIZE_OK: () = assert!(SIZE > 4);

    /// Lock the middle-column queen at (`row`, middle) and the middle-row
    /// queen at (middle, `col`), and derive their diagonal masks.
    pub fn set_column_row(&mut self, col: usize, row: usize) {
        let () = Self::SIZE_OK;
        let columns1 = 1u32 << col;
        self.columns = columns1 | Self::CENTER_BIT;
        self.row = row;
        self.free_rows = self.stretch_rows(n_least_bits(SIZE as u32 - 2));

        let c_bit = (columns1 as u64) << Self::HALF_SIZE;
        self.diags = [
            c_bit | 1u64 << (3 * Self::HALF_SIZE - row),
            c_bit | 1u64 << (Self::HALF_SIZE + row),
        ];
    }

    /// The locked queens' diagonal bits, in sieve hole coordinates.
    pub fn holes(&self) -> [u64; 2] {
        [
            self.diags[0] >> Self::Q_OFFSET,
            self.diags[1] >> Self::Q_OFFSET,
        ]
    }

    fn q_match(q: u64, d: u64, offset: usize) -> bool {
        ((q << offset) & d) == 0
    }

    /// Enumerate the (column, row) seeds, re-aiming the store's special bit
    /// once per column, and run the engine for each seed.
    pub fn for_cr<const HALF: usize, S, P, V>(
        env: &mut Context<'_, Self, V>,
        quad: &Quadrants<SIZE, HALF, S, P>,
        worker: &mut Worker,
    ) -> u64
    where
        S: Symmetry<HALF>,
        P: Packing,
        V: PatternStore,
    {
        let mut res = 0;

        for col in Self::HALF_SIZE + 1..SIZE - 2 {
            quad.set_special_bit(worker, col - 1);

            for row in col + 1..SIZE - 1 {
                env.start.set_column_row(col, row);
                // SAFETY: between engine runs the sink belongs to its
                // worker.
                unsafe { env.sink_mut() }.set_holes(env.start.holes());
                res += 8 * quad.run(env, worker);
            }
        }

        res
    }
}

impl<const SIZE: usize> Start for Start2D<SIZE> {
    const INTERNAL_SYMMETRY: bool = false;
    const DIAG_SYMMETRY: bool = false;
    const FILTER_DIAG: bool = true;

    fn bit_comb(&self) -> BitCombColex {
        BitCombColex::new(SIZE as u32 - 2, Self::HALF_SIZE as u32)
    }

    fn stretch_rows(&self, bits: u32) -> u32 {
        let lm = Self::CENTER_BIT - 1;
        let mm = ((1u32 << (self.row - 1)) - 1) ^ lm;
        let hm = !(lm | mm);
        ((bits & hm) << 2) | ((bits & mm) << 1) | (bits & lm)
    }

    fn free_rows(&self) -> u32 {
        self.free_rows
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn match_diags(&self, west: bool, diags: &DiagPair) -> bool {
        let offset = if west { Self::Q_OFFSET } else { 0 };

        Self::q_match(diags.0[0] as u64, self.diags[0], offset + Self::Q_OFFSET)
            && Self::q_match(diags.1[0] as u64, self.diags[0], offset)
            && Self::q_match(diags.0[1] as u64, self.diags[1], offset)
            && Self::q_match(diags.1[1] as u64, self.diags[1], offset + Self::Q_OFFSET)
    }
}

/// [`Start2D`] with the middle-row queen on the south border. Border seeds
/// leave nothing for the special-bit filter to drop, so filtering is off and
/// the sieve gets one hole per half instead of two.
#[derive(Default)]
pub struct Start1D<const SIZE: usize> {
    inner: Start2D<SIZE>,
}

impl<const SIZE: usize> Start1D<SIZE> {
    /// Enumerate the column seeds along the border row.
    pub fn for_cr<const HALF: usize, S, P, V>(
        env: &mut Context<'_, Self, V>,
        quad: &Quadrants<SIZE, HALF, S, P>,
        worker: &mut Worker,
    ) -> u64
    where
        S: Symmetry<HALF>,
        P: Packing,
        V: PatternStore,
    {
        let mut res = 0;

        for col in Start2D::<SIZE>::HALF_SIZE + 1..SIZE - 1 {
            env.start.inner.set_column_row(col, SIZE - 1);
            // SAFETY: between engine runs the sink belongs to its worker.
            unsafe { env.sink_mut() }.set_holes(env.start.inner.holes());
            res += 8 * quad.run(env, worker);
        }

        res
    }
}

impl<const SIZE: usize> Start for Start1D<SIZE> {
    const INTERNAL_SYMMETRY: bool = false;
    const DIAG_SYMMETRY: bool = false;
    const FILTER_DIAG: bool = false;

    fn bit_comb(&self) -> BitCombColex {
        self.inner.bit_comb()
    }

    fn stretch_rows(&self, bits: u32) -> u32 {
        self.inner.stretch_rows(bits)
    }

    fn free_rows(&self) -> u32 {
        self.inner.free_rows()
    }

    fn columns(&self) -> u32 {
        self.inner.columns()
    }

    fn match_diags(&self, west: bool, diags: &DiagPair) -> bool {
        self.inner.match_diags(west, diags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_rows_inserts_locked_rows() {
        let mut start = Start2D::<9>::default();
        start.set_column_row(5, 6);

        // free rows are everything except the center row (4) and `row` (6)
        assert_eq!(start.free_rows(), 0b110101111);
        assert_eq!(start.columns(), 0b000110000);

        // low bits stay, middle gains one gap, high gains two
        assert_eq!(start.stretch_rows(0b0001111), 0b000001111);
        assert_eq!(start.stretch_rows(0b1110000), 0b110100000);
    }

    #[test]
    fn test_border_seed_masks() {
        let mut start = Start1D::<9>::default();
        start.inner.set_column_row(5, 8);

        assert_eq!(start.columns(), 0b000110000);
        assert_eq!(start.free_rows(), 0b011101111);
    }
}
