// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Worker coordination: a barrier, an atomic work ticket, and the phase-cell
//! primitive the lock-free sharing is built on.
//!
//! All workers execute the same counting code in lockstep. Work is
//! distributed by an atomic ticket: every worker walks the same index
//! sequence and calls [`Worker::rejected`] at each index; the call returns
//! `false` (accepted) exactly once per index across all workers. Phases are
//! separated by a full barrier - suspension happens *only* there - so a
//! value written by one phase's single writer is safely read by the next
//! phase's readers.
//!
//! With one worker the scheduler degrades to the single-threaded policy:
//! no barrier waits, every index accepted, the counting loop runs on the
//! caller's thread.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Barrier;
use std::thread;

/// Shared mutable slot whose accesses are serialized by the barrier/ticket
/// protocol instead of a lock.
///
/// # Safety model
///
/// Exclusive (`as_mut`) access is only taken by the worker that owns the
/// slot in the current phase - either the thread the slot belongs to, or the
/// single worker whose ticket accepted the slot's index. Shared (`as_ref`)
/// access only happens in phases with no writer. The barrier between phases
/// provides the necessary happens-before edges. This mirrors the trail
/// pointer discipline: ownership is structural, not checked.
pub struct PhaseCell<T>(UnsafeCell<T>);

// SAFETY: cross-thread access is coordinated by the scheduler protocol
// described above.
unsafe impl<T: Send + Sync> Sync for PhaseCell<T> {}

impl<T> PhaseCell<T> {
    pub fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }

    /// Safe exclusive access through unique ownership.
    pub fn get_mut(&mut self) -> &mut T {
        self.0.get_mut()
    }

    /// # Safety
    ///
    /// No worker may mutate the cell during the current phase.
    pub unsafe fn as_ref(&self) -> &T {
        &*self.0.get()
    }

    /// # Safety
    ///
    /// The caller must be the cell's unique owner for the current phase.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn as_mut(&self) -> &mut T {
        &mut *self.0.get()
    }
}

/// Launches W workers over the same closure and coordinates them.
pub struct Scheduler {
    workers: usize,
    barrier: Barrier,
    ticket: AtomicU64,
}

impl Scheduler {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            barrier: Barrier::new(workers.max(1)),
            ticket: AtomicU64::new(2),
        }
    }

    /// True when workers actually share data and must merge through the
    /// freeze; a single worker counts against its own sink directly.
    pub fn is_threaded(&self) -> bool {
        self.workers > 1
    }

    /// Number of per-worker sink slots to allocate.
    pub fn slots(&self) -> usize {
        self.workers.max(1)
    }

    /// Run `work` once per worker and sum the results.
    ///
    /// Each multi-threaded worker makes one ignored `rejected()` call before
    /// entering `work`; this seeds the cursors so that every ticket value is
    /// consumed by exactly one worker.
    pub fn launch<F>(&self, work: F) -> u64
    where
        F: Fn(&mut Worker) -> u64 + Sync,
    {
        if self.workers == 0 {
            return 0;
        }

        if self.workers == 1 {
            let mut worker = Worker::new(self, 0, false);
            return work(&mut worker);
        }

        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|id| {
                    let work = &work;
                    scope.spawn(move || {
                        let mut worker = Worker::new(self, id, true);
                        let _ = worker.rejected(); // seeds the ticket protocol
                        work(&mut worker)
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).sum()
        })
    }
}

/// One worker's view of the scheduler: its barrier handle and ticket
/// cursors.
pub struct Worker<'a> {
    scheduler: &'a Scheduler,
    id: usize,
    threaded: bool,
    curr: u64,
    next: u64,
}

impl<'a> Worker<'a> {
    fn new(scheduler: &'a Scheduler, id: usize, threaded: bool) -> Self {
        Self {
            scheduler,
            id,
            threaded,
            curr: 0,
            next: 1,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Wait for every worker to reach the same point.
    pub fn sync(&self) {
        if self.threaded {
            self.scheduler.barrier.wait();
        }
    }

    /// Advance to the next work index; true when some other worker owns it.
    ///
    /// Accepted indices partition the index sequence across workers. The
    /// single-threaded worker accepts everything.
    #[must_use]
    pub fn rejected(&mut self) -> bool {
        if !self.threaded {
            return false;
        }

        self.curr += 1;
        if self.curr == self.next {
            self.next = self.scheduler.ticket.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        true
    }

    #[must_use]
    pub fn accepted(&mut self) -> bool {
        !self.rejected()
    }
}
