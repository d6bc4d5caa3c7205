//! The producer worker ("factory").

use std::sync::Arc;

use fd_core::{Day, OverflowPolicy, Part, PartCounts};
use fd_sync::{RoundBarrier, SharedStorage};

use crate::observer::{DayReporter, ProductionReport};
use crate::{Phase, SimError, SimResult, Supply};

/// Agent name used in logs and errors.
pub const PRODUCER_NAME: &str = "factory";

/// Deposits one batch per day into shared storage, then waits out both
/// barrier rendezvous of the day.
pub struct Producer {
    storage:  Arc<SharedStorage<Part>>,
    barrier:  Arc<RoundBarrier>,
    days:     u32,
    overflow: OverflowPolicy,
    supply:   Box<dyn Supply>,
    produced: PartCounts,
}

impl Producer {
    pub fn new(
        storage: Arc<SharedStorage<Part>>,
        barrier: Arc<RoundBarrier>,
        days:    u32,
        supply:  Box<dyn Supply>,
    ) -> Self {
        Self {
            storage,
            barrier,
            days,
            overflow: OverflowPolicy::Block,
            supply,
            produced: PartCounts::EMPTY,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Everything deposited so far.
    pub fn produced(&self) -> &PartCounts {
        &self.produced
    }

    /// Draw today's batch and deposit it.
    ///
    /// Under [`OverflowPolicy::Block`] a batch larger than the free space is
    /// refused before anything is deposited.
    pub fn produce(&mut self, day: Day) -> SimResult<ProductionReport> {
        let batch = self.supply.next_batch(day);
        if self.overflow == OverflowPolicy::Block {
            let free = self.storage.capacity().saturating_sub(self.storage.len());
            if batch.len() > free {
                return Err(SimError::BatchTooLarge { day, batch: batch.len(), free });
            }
        }

        let mut deposited = PartCounts::EMPTY;
        let mut rejected = 0;

        for part in batch {
            match self.overflow {
                OverflowPolicy::Block => {
                    self.storage.add(part);
                    deposited.add(part);
                }
                OverflowPolicy::Reject => match self.storage.try_add(part) {
                    Ok(()) => deposited.add(part),
                    Err(_) => rejected += 1,
                },
            }
        }

        if rejected > 0 {
            tracing::warn!(day = day.0, rejected, "storage full, parts rejected");
        }
        self.produced = self.produced.merged(&deposited);

        Ok(ProductionReport { deposited, rejected, stock: self.storage.len() })
    }

    /// Run every day, returning the total deposited.
    ///
    /// Any barrier failure ends the loop at once; the `Party` guard then
    /// breaks the barrier for everybody else.
    pub fn run(mut self, reporter: &dyn DayReporter) -> SimResult<PartCounts> {
        let party = self.barrier.join();

        for day in Day::range(self.days) {
            let report = self.produce(day)?;
            tracing::debug!(day = day.0, units = report.units(), stock = report.stock, "production done");
            reporter.on_produced(day, &report);

            party
                .wait()
                .map_err(|e| SimError::coordination(PRODUCER_NAME, day, Phase::Production, e))?;
            party
                .wait()
                .map_err(|e| SimError::coordination(PRODUCER_NAME, day, Phase::Consumption, e))?;
        }

        party.leave();
        Ok(self.produced)
    }
}
