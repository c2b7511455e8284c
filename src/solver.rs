// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-level wiring: start variants, freezes and scheduler.
//!
//! Even boards run [`StartEmpty`] alone; odd boards sum [`StartCenter`],
//! [`Start2D`] and [`Start1D`], which among them cover every placement of
//! queens in the middle row and column. Each start configuration owns one
//! freeze (merged sieve plus per-worker sinks); the sieve geometry - half
//! length and holes per half - is the one piece of per-variant knowledge
//! that lives here rather than in the variants themselves.

use crate::config::{BoardCfg, BoardPack, BoardSymmetry, Cfg, BOARD_SIZE};
use crate::engine::divider::Divider;
use crate::engine::freeze::Freeze;
use crate::engine::quadrants::{Context, Quadrants};
use crate::matcher::matchtr::MatchTr;
use crate::matcher::sieve::Sieve;
use crate::matcher::PatternStore;
use crate::schedule::{Scheduler, Worker};
use crate::start::center::StartCenter;
use crate::start::empty::StartEmpty;
use crate::start::middle::{Start1D, Start2D};
use crate::start::Start;
use crate::stats::Stats;
use crate::store::pack::Packing;
use crate::store::symmetry::Symmetry;

/// Count all placements of `SIZE` non-attacking queens (OEIS A000170).
///
/// `part`/`parts` select one slice of the outer iteration space; the slices
/// sum to the full count. The result is deterministic for fixed arguments
/// regardless of `threads`.
pub fn count_solutions_sized<const SIZE: usize, const HALF: usize, C, S, P>(
    threads: usize,
    part: u32,
    parts: u32,
) -> u64
where
    C: Cfg,
    S: Symmetry<HALF>,
    P: Packing + Send + Sync,
{
    let scheduler = Scheduler::new(threads);
    let stats = Stats::new();
    let divider = Divider::new(part, parts);
    let quad: Quadrants<SIZE, HALF, S, P> = Quadrants::new();
    let threaded = scheduler.is_threaded();
    let slots = scheduler.slots();

    let total = if SIZE % 2 == 1 {
        let frz_center = Freeze::new(threaded, slots, || {
            Sieve::<C, MatchTr<C>>::new(SIZE as u32 - 2, 1)
        });
        let frz_2d = Freeze::new(threaded, slots, || {
            Sieve::<C, MatchTr<C>>::new(SIZE as u32 - 2, 2)
        });
        let frz_1d = Freeze::new(threaded, slots, || {
            Sieve::<C, MatchTr<C>>::new(SIZE as u32 - 2, 1)
        });

        scheduler.launch(|worker| {
            count_step(StartCenter::<SIZE>, &frz_center, &quad, &divider, &stats, worker, |env, w| {
                quad.run(env, w)
            }) + count_step(
                Start2D::<SIZE>::default(),
                &frz_2d,
                &quad,
                &divider,
                &stats,
                worker,
                |env, w| Start2D::for_cr(env, &quad, w),
            ) + count_step(
                Start1D::<SIZE>::default(),
                &frz_1d,
                &quad,
                &divider,
                &stats,
                worker,
                |env, w| Start1D::for_cr(env, &quad, w),
            )
        })
    } else {
        let frz = Freeze::new(threaded, slots, || {
            Sieve::<C, MatchTr<C>>::new(SIZE as u32 - 1, 1)
        });

        scheduler.launch(|worker| {
            count_step(StartEmpty::<SIZE>, &frz, &quad, &divider, &stats, worker, |env, w| {
                quad.run(env, w)
            })
        })
    };

    eprintln!("[solver] N={}: {}", SIZE, stats);
    total
}

// One start configuration's share of the count, on one worker: build the
// worker's context, run the variant's loop, release the freeze memory.
fn count_step<'a, const SIZE: usize, const HALF: usize, S, P, St, V>(
    start: St,
    freeze: &'a Freeze<V>,
    quad: &Quadrants<SIZE, HALF, S, P>,
    divider: &Divider,
    stats: &'a Stats,
    worker: &mut Worker,
    run: impl FnOnce(&mut Context<'a, St, V>, &mut Worker) -> u64,
) -> u64
where
    S: Symmetry<HALF>,
    P: Packing,
    St: Start,
    V: PatternStore,
{
    let mut env = Context {
        start,
        sink: freeze.sink(worker.id()),
        freeze,
        divider: divider.clone(),
        stats,
    };

    let res = run(&mut env, worker);
    quad.shrink(&env, worker);
    res
}

/// Count the placements for the build-time [`BOARD_SIZE`], with the tuning
/// preset and quarter-board strategies selected for it.
pub fn count_solutions(threads: usize, part: u32, parts: u32) -> u64 {
    count_solutions_sized::<BOARD_SIZE, { BOARD_SIZE / 2 }, BoardCfg, BoardSymmetry, BoardPack>(
        threads, part, parts,
    )
}
