// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cut-bit sieve over an array of matchers.
//!
//! A few *cut* bits of every pattern are used for indexing instead of
//! matching: a pattern with cut bits `p` is stored in matcher
//! `cut_mask & !p`, and an item with cut bits `j` only queries matchers
//! whose index is a superset of `j` - every other matcher could not contain
//! a compatible pattern. With BMI2 available, bits that are always
//! insignificant (*holes*) are additionally compressed out of the word each
//! matcher sees.
//!
//! The two `split` flavors are deliberately different trade-offs: with BMI
//! the cut positions are chosen near the two half centers and the matcher
//! word is compacted; without it the cut comes from a fixed central slice of
//! the high half and the matcher sees the raw stitched word. Per-matcher
//! routing differs between the two - only the total count agrees.

use core::marker::PhantomData;

use crate::arch;
use crate::bits::n_least_bits64;
use crate::config::Cfg;
use crate::matcher::{Matcher, PatternStore};
use crate::schedule::{PhaseCell, Worker};

/// Router of half-board patterns/items over `2^SIEVE_CUTS` matchers.
///
/// `half_len` is the bit length of each input half (holes included);
/// `holes_per_half` the number of always-insignificant bits per half.
pub struct Sieve<C: Cfg, M: Matcher> {
    half_len: u32,
    /// Significant, non-cut bit positions (the matcher word, under BMI).
    holes: PhaseCell<u64>,
    /// Chosen cut positions.
    cuts: PhaseCell<u64>,
    matchers: Vec<PhaseCell<M>>,
    _cfg: PhantomData<fn() -> C>,
}

struct SrcBits {
    bits: u64,
    index: u64,
}

impl<C: Cfg, M: Matcher> Sieve<C, M> {
    const CUT: u32 = C::SIEVE_CUTS;
    const CUT_MASK: u64 = n_least_bits64(Self::CUT);
    const CUT_SIZE: usize = 1 << Self::CUT;
    const BMI_OK: () = assert!(
        !C::BMI_INTRIN || arch::BMI2_AVAILABLE,
        "BMI compression requested without BMI2 target support"
    );

    pub fn new(half_len: u32, holes_per_half: u32) -> Self {
        let () = Self::BMI_OK;
        assert!(Self::CUT <= half_len / 2);

        let matcher_bits = half_len * 2
            - if C::BMI_INTRIN {
                holes_per_half * 2 + Self::CUT
            } else {
                0
            };

        let center_bits = Self::center(half_len) | Self::center2(half_len);
        let cuts = Self::mk_cuts(half_len, !center_bits);

        Self {
            half_len,
            holes: PhaseCell::new(!(center_bits | cuts)),
            cuts: PhaseCell::new(cuts),
            matchers: (0..Self::CUT_SIZE)
                .map(|_| PhaseCell::new(M::new(matcher_bits)))
                .collect(),
            _cfg: PhantomData,
        }
    }

    /// Record which input bits are always insignificant and re-derive the
    /// cut positions from the significant ones.
    pub fn set_holes(&mut self, h: [u64; 2]) {
        let hcat = (h[1] << self.half_len) | h[0];
        let cuts = Self::mk_cuts(self.half_len, !hcat);
        *self.cuts.get_mut() = cuts;
        *self.holes.get_mut() = !(hcat | cuts);
    }

    pub fn append_pattern(&mut self, diags: (u32, u32)) {
        let sb = self.stitch(&diags);
        let slot = (Self::CUT_MASK & !sb.index) as usize;
        self.matchers[slot].get_mut().append_pattern(sb.bits);
    }

    pub fn close_patterns(&mut self) {
        for m in &mut self.matchers {
            m.get_mut().close_patterns();
        }
    }

    /// Count stored patterns compatible with `diags`, visiting only the
    /// matchers whose index is a superset of the item's cut bits and
    /// prefetching one matcher ahead.
    pub fn count(&self, diags: (u32, u32)) -> u64 {
        let sb = self.stitch(&diags);
        let mut total = 0;
        let mut i = sb.index;

        while i != Self::CUT_MASK {
            let next = (i + 1) | sb.index;
            self.matcher(next as usize).prefetch(sb.bits);
            total += self.matcher(i as usize).count(sb.bits);
            i = next;
        }

        total + self.matcher(Self::CUT_MASK as usize).count(sb.bits)
    }

    pub fn clear(&mut self) {
        for m in &mut self.matchers {
            m.get_mut().clear();
        }
    }

    pub fn shrink(&mut self) {
        for m in &mut self.matchers {
            m.get_mut().shrink();
        }
    }

    /// See [`PatternStore::pull`].
    ///
    /// # Safety
    ///
    /// Freeze phase protocol only: sinks untouched by their owners, slots
    /// distributed by the worker ticket, readers separated by a barrier.
    pub unsafe fn pull(&self, sinks: &[PhaseCell<Self>], worker: &mut Worker) {
        for i in 0..Self::CUT_SIZE {
            if worker.rejected() {
                continue;
            }

            if i == 0 {
                let first = sinks[0].as_ref();
                *self.holes.as_mut() = *first.holes.as_ref();
                *self.cuts.as_mut() = *first.cuts.as_ref();
            }

            let merged = self.matchers[i].as_mut();
            for sink in sinks {
                sink.as_ref().matchers[i].as_mut().pass_to(merged);
            }

            merged.close_patterns();
        }
    }

    fn matcher(&self, i: usize) -> &M {
        // SAFETY: shared read; matcher slots are not mutated during count
        // phases (see PhaseCell).
        unsafe { self.matchers[i].as_ref() }
    }

    fn stitch(&self, diags: &(u32, u32)) -> SrcBits {
        let half_mask = n_least_bits64(self.half_len);
        let r = ((diags.1 as u64 & half_mask) << self.half_len) | (diags.0 as u64 & half_mask);
        self.split(r, diags)
    }

    // With BMI: compress the word to significant bits and extract the cut
    // positions. Without: raw word, cut index from a central slice of the
    // high half. Not equivalent per matcher; equivalent in total.
    fn split(&self, r: u64, diags: &(u32, u32)) -> SrcBits {
        if C::BMI_INTRIN {
            // SAFETY: phase-separated reads of holes/cuts.
            let (holes, cuts) = unsafe { (*self.holes.as_ref(), *self.cuts.as_ref()) };
            SrcBits {
                bits: arch::pext(r, !holes),
                index: if Self::CUT != 0 { arch::pext(r, cuts) } else { 0 },
            }
        } else {
            SrcBits {
                bits: r,
                index: (diags.1 as u64 >> (self.half_len / 2 - Self::CUT)) & Self::CUT_MASK,
            }
        }
    }

    fn center(half_len: u32) -> u64 {
        1u64 << (half_len / 2)
    }

    fn center2(half_len: u32) -> u64 {
        Self::center(half_len) << half_len
    }

    // Pick CUT cut positions among `bits`, alternating outward from the two
    // half centers.
    fn mk_cuts(half_len: u32, bits: u64) -> u64 {
        let mut res = 0u64;
        let mut cut_cnt = Self::CUT;
        let mut bit = [
            Self::center(half_len),
            Self::center2(half_len),
            Self::center(half_len) >> 1,
            Self::center2(half_len) >> 1,
        ];
        let mut toggle = 0;

        while cut_cnt != 0 {
            if bit[toggle] & bits != 0 {
                res |= bit[toggle];
                cut_cnt -= 1;
            }

            if toggle < 2 {
                bit[toggle] <<= 1;
            } else {
                bit[toggle] >>= 1;
            }

            toggle = (toggle + 1) % 4;
        }

        res
    }
}

impl<C: Cfg, M: Matcher + Send> PatternStore for Sieve<C, M> {
    fn append_pattern(&mut self, diags: (u32, u32)) {
        Sieve::append_pattern(self, diags);
    }

    fn count(&self, diags: (u32, u32)) -> u64 {
        Sieve::count(self, diags)
    }

    fn set_holes(&mut self, holes: [u64; 2]) {
        Sieve::set_holes(self, holes);
    }

    fn close_patterns(&mut self) {
        Sieve::close_patterns(self);
    }

    fn clear(&mut self) {
        Sieve::clear(self);
    }

    fn shrink(&mut self) {
        Sieve::shrink(self);
    }

    unsafe fn pull(&self, sinks: &[PhaseCell<Self>], worker: &mut Worker) {
        Sieve::pull(self, sinks, worker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_cfg;

    /// Counts one hit per visited matcher, making `count` return the number
    /// of matcher slots the sieve walks.
    struct FakeMatch;

    impl Matcher for FakeMatch {
        fn new(_bits: u32) -> Self {
            FakeMatch
        }

        fn append_pattern(&mut self, _pattern: u64) {}

        fn close_patterns(&mut self) {}

        fn count(&self, _item: u64) -> u64 {
            1
        }

        fn clear(&mut self) {}

        fn shrink(&mut self) {}

        fn pass_to(&mut self, _other: &mut Self) {}

        fn prefetch(&self, _item: u64) {}
    }

    define_cfg!(Cut0, cuts: 0, chunk: 5, group: 8, min: 40, bmi: false, prefetch: false);
    define_cfg!(Cut1, cuts: 1, chunk: 5, group: 8, min: 40, bmi: false, prefetch: false);
    define_cfg!(Cut2, cuts: 2, chunk: 5, group: 8, min: 40, bmi: false, prefetch: false);

    // The hole values force the BMI and non-BMI splits to agree.
    fn check_sieve_count<C: Cfg>() {
        let cut = C::SIEVE_CUTS;
        let mut sieve: Sieve<C, FakeMatch> = Sieve::new(17, 0);
        sieve.set_holes([0x1FFFF, 0x1FF00]);

        for i in 0..(1u32 << cut) {
            assert_eq!(
                sieve.count((0, i << (8 - cut))),
                1 << (cut - i.count_ones()),
                "cut = {cut}, i = {i}"
            );
        }
    }

    #[test]
    fn test_superset_walk() {
        check_sieve_count::<Cut0>();
        check_sieve_count::<Cut1>();
        check_sieve_count::<Cut2>();
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    mod bmi {
        use super::*;

        define_cfg!(BmiCut0, cuts: 0, chunk: 5, group: 8, min: 40, bmi: true, prefetch: false);
        define_cfg!(BmiCut1, cuts: 1, chunk: 5, group: 8, min: 40, bmi: true, prefetch: false);
        define_cfg!(BmiCut2, cuts: 2, chunk: 5, group: 8, min: 40, bmi: true, prefetch: false);

        #[test]
        fn test_superset_walk_bmi() {
            check_sieve_count::<BmiCut0>();
            check_sieve_count::<BmiCut1>();
            check_sieve_count::<BmiCut2>();
        }
    }
}
