//! The driver: one producer thread, one thread per faction, two rendezvous
//! per day.

use std::cmp::Reverse;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use fd_core::{Part, PartCounts, SimConfig};
use fd_sync::{InterruptHandle, RoundBarrier, SharedStorage};

use crate::observer::DayReporter;
use crate::producer::PRODUCER_NAME;
use crate::{Faction, FactionTally, Producer, SimError, SimOutcome, SimResult, Verdict};

/// A fully wired simulation, ready to run once.
///
/// # Day protocol
///
/// ```text
/// producer:  deposit batch ─┐ wait(A) ──────────────────────┐ wait(B)
/// faction k:                └ wait(A) ─ take, assemble ─────┘ wait(B)
/// ```
///
/// Rendezvous A orders all of day N's production before any of day N's
/// consumption; rendezvous B orders all of day N's consumption before day
/// N+1's production.  The factions are not ordered among themselves.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    pub(crate) config:   SimConfig,
    pub(crate) reporter: Arc<dyn DayReporter>,
    pub(crate) storage:  Arc<SharedStorage<Part>>,
    pub(crate) barrier:  Arc<RoundBarrier>,
    pub(crate) producer: Producer,
    pub(crate) factions: Vec<Faction>,
}

impl Simulation {
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Barrier parties: the producer plus one per faction.
    pub fn parties(&self) -> usize {
        self.barrier.parties()
    }

    /// Handle for cancelling the run from another thread.  Every worker then
    /// stops with an interrupted-wait error.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.barrier.interrupt_handle()
    }

    /// Spawn every worker, wait for all of them, and compare the factions.
    ///
    /// On failure the most telling error is returned: a panic or spawn
    /// failure first, then an interruption, then a broken barrier.
    pub fn run(self) -> SimResult<SimOutcome> {
        let Simulation { config, reporter, storage, barrier, producer, factions } = self;
        tracing::info!(
            days = config.days,
            factions = factions.len(),
            capacity = storage.capacity(),
            "simulation starting",
        );

        // ── Spawn ─────────────────────────────────────────────────────────
        let producer_handle = {
            let reporter = Arc::clone(&reporter);
            spawn(PRODUCER_NAME, move || producer.run(&*reporter))?
        };

        let mut faction_handles: Vec<(String, JoinHandle<SimResult<Faction>>)> =
            Vec::with_capacity(factions.len());
        for faction in factions {
            let name = faction.name().to_owned();
            let reporter = Arc::clone(&reporter);
            match spawn(&format!("faction-{name}"), move || faction.run(&*reporter)) {
                Ok(handle) => faction_handles.push((name, handle)),
                Err(e) => {
                    let stranded = abandon_round(&barrier, producer_handle, faction_handles);
                    tracing::debug!(stranded = stranded.len(), "released workers after spawn failure");
                    return Err(e);
                }
            }
        }

        // ── Join ──────────────────────────────────────────────────────────
        let mut errors = Vec::new();
        let produced = match join_worker(PRODUCER_NAME, producer_handle) {
            Ok(produced) => produced,
            Err(e) => {
                errors.push(e);
                PartCounts::EMPTY
            }
        };

        let mut finished = Vec::with_capacity(faction_handles.len());
        for (name, handle) in faction_handles {
            match join_worker(&name, handle) {
                Ok(faction) => finished.push(faction),
                Err(e) => errors.push(e),
            }
        }

        if let Some(root) = errors.into_iter().min_by_key(|e| Reverse(e.severity())) {
            tracing::error!(error = %root, "simulation aborted");
            return Err(root);
        }

        // ── Compare ───────────────────────────────────────────────────────
        let tallies: Vec<FactionTally> = finished.iter().map(Faction::tally).collect();
        let verdict = Verdict::decide(&tallies)
            .ok_or_else(|| SimError::Config("no factions to compare".into()))?;

        let outcome = SimOutcome {
            days:     config.days,
            produced,
            leftover: storage.len(),
            factions: tallies,
            verdict,
        };
        tracing::info!(days = outcome.days, leftover = outcome.leftover, "simulation finished");
        reporter.on_sim_end(&outcome);
        Ok(outcome)
    }
}

/// Break the current round on behalf of a worker that never started, then
/// join the workers that did.  Returns their (consequential) errors.
pub(crate) fn abandon_round(
    barrier:  &Arc<RoundBarrier>,
    producer: JoinHandle<SimResult<PartCounts>>,
    factions: Vec<(String, JoinHandle<SimResult<Faction>>)>,
) -> Vec<SimError> {
    drop(barrier.join());

    let mut errors = Vec::new();
    if let Err(e) = join_worker(PRODUCER_NAME, producer) {
        errors.push(e);
    }
    for (name, handle) in factions {
        if let Err(e) = join_worker(&name, handle) {
            errors.push(e);
        }
    }
    errors
}

fn spawn<T, F>(agent: &str, f: F) -> SimResult<JoinHandle<SimResult<T>>>
where
    T: Send + 'static,
    F: FnOnce() -> SimResult<T> + Send + 'static,
{
    thread::Builder::new()
        .name(agent.to_owned())
        .spawn(f)
        .map_err(|source| SimError::Spawn { agent: agent.to_owned(), source })
}

/// Join a worker, turning a panic into [`SimError::AgentPanicked`].
fn join_worker<T>(agent: &str, handle: JoinHandle<SimResult<T>>) -> SimResult<T> {
    handle
        .join()
        .map_err(|_| SimError::AgentPanicked { agent: agent.to_owned() })?
}
