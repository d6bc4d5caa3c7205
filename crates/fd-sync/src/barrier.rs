//! Cyclic multi-party rendezvous.
//!
//! # Protocol
//!
//! ```text
//! wait():
//!   broken?                 → Err(cause)
//!   arrived += 1
//!   arrived == parties      → arrived = 0, generation += 1, notify_all, Ok(leader)
//!   else sleep until generation changes or the barrier breaks
//! ```
//!
//! The generation counter makes the barrier reusable without re-creation and
//! immune to spurious wake-ups: a waiter only leaves once *its* generation
//! has been released.  Breaking is permanent; a broken barrier is never
//! reset because every party is expected to stop.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::{SyncError, SyncResult};

#[derive(Debug, Default)]
struct State {
    arrived:    usize,
    generation: u64,
    broken:     Option<SyncError>,
}

/// Reusable rendezvous point for a fixed number of parties.
#[derive(Debug)]
pub struct RoundBarrier {
    parties: usize,
    state:   Mutex<State>,
    cvar:    Condvar,
}

/// Returned by a successful [`RoundBarrier::wait`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BarrierWaitResult {
    /// The generation that was just released.
    pub generation: u64,
    leader:         bool,
}

impl BarrierWaitResult {
    /// `true` for exactly one party per generation: the last to arrive.
    pub fn is_leader(&self) -> bool {
        self.leader
    }
}

impl RoundBarrier {
    /// Create a barrier released by `parties` arrivals per generation.
    pub fn new(parties: usize) -> SyncResult<Self> {
        if parties < 2 {
            return Err(SyncError::TooFewParties(parties));
        }
        Ok(Self {
            parties,
            state: Mutex::new(State::default()),
            cvar:  Condvar::new(),
        })
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Generations released so far.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn is_broken(&self) -> bool {
        self.lock().broken.is_some()
    }

    /// Block until all parties have arrived in this generation.
    ///
    /// Returns the break cause if the barrier is broken before or while
    /// waiting.
    pub fn wait(&self) -> SyncResult<BarrierWaitResult> {
        let mut state = self.lock();
        if let Some(cause) = state.broken {
            return Err(cause);
        }

        let generation = state.generation;
        state.arrived += 1;
        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation = state.generation.wrapping_add(1);
            self.cvar.notify_all();
            return Ok(BarrierWaitResult { generation, leader: true });
        }

        while state.generation == generation {
            if let Some(cause) = state.broken {
                return Err(cause);
            }
            state = self.cvar.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
        Ok(BarrierWaitResult { generation, leader: false })
    }

    /// Register the calling worker as a party.  See [`Party`].
    pub fn join(self: &Arc<Self>) -> Party {
        Party { barrier: Arc::clone(self), finished: false }
    }

    pub fn interrupt_handle(self: &Arc<Self>) -> InterruptHandle {
        InterruptHandle(Arc::clone(self))
    }

    /// Break the barrier with `cause`, releasing every waiter.  The first
    /// cause wins; later calls are no-ops.
    fn break_with(&self, cause: SyncError) {
        let mut state = self.lock();
        if state.broken.is_none() {
            tracing::debug!(%cause, generation = state.generation, "round barrier broken");
            state.broken = Some(cause);
        }
        self.cvar.notify_all();
    }

    // Critical sections only touch plain counters, so a poisoned lock still
    // holds consistent state.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Party ─────────────────────────────────────────────────────────────────────

/// One worker's registration with a [`RoundBarrier`].
///
/// Dropping a `Party` without calling [`leave`][Self::leave] breaks the
/// barrier with [`SyncError::BarrierBroken`], so the other parties are
/// released instead of waiting for an arrival that will never come.
#[derive(Debug)]
pub struct Party {
    barrier:  Arc<RoundBarrier>,
    finished: bool,
}

impl Party {
    #[inline]
    pub fn wait(&self) -> SyncResult<BarrierWaitResult> {
        self.barrier.wait()
    }

    /// Deregister after the last round without breaking the barrier.
    pub fn leave(mut self) {
        self.finished = true;
    }
}

impl Drop for Party {
    fn drop(&mut self) {
        if !self.finished {
            self.barrier.break_with(SyncError::BarrierBroken);
        }
    }
}

// ── InterruptHandle ───────────────────────────────────────────────────────────

/// External cancellation for a running round.  Cheap to clone and `Send`.
#[derive(Clone, Debug)]
pub struct InterruptHandle(Arc<RoundBarrier>);

impl InterruptHandle {
    /// Break the barrier with [`SyncError::Interrupted`].
    pub fn interrupt(&self) {
        self.0.break_with(SyncError::Interrupted);
    }
}
