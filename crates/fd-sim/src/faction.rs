//! A consuming faction.
//!
//! Each faction owns its inventory and construct counter outright.  The only
//! shared state it touches is the storage, through `take_up_to`.

use std::sync::Arc;

use fd_core::{Day, FactionId, Inventory, Part, PartCounts, Recipe};
use fd_sync::{RoundBarrier, SharedStorage};

use crate::observer::{ConsumptionReport, DayReporter};
use crate::{FactionTally, Phase, SimError, SimResult};

/// Default per-day withdrawal cap.
pub const DEFAULT_TAKE_CAP: usize = 5;

pub struct Faction {
    id:         FactionId,
    name:       String,
    storage:    Arc<SharedStorage<Part>>,
    barrier:    Arc<RoundBarrier>,
    days:       u32,
    take_cap:   usize,
    recipe:     Recipe,
    inventory:  Inventory,
    withdrawn:  PartCounts,
    constructs: u32,
}

impl Faction {
    pub fn new(
        id:      FactionId,
        name:    impl Into<String>,
        storage: Arc<SharedStorage<Part>>,
        barrier: Arc<RoundBarrier>,
        days:    u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            storage,
            barrier,
            days,
            take_cap:   DEFAULT_TAKE_CAP,
            recipe:     Recipe::ROBOT,
            inventory:  Inventory::new(),
            withdrawn:  PartCounts::EMPTY,
            constructs: 0,
        }
    }

    pub fn with_take_cap(mut self, take_cap: usize) -> Self {
        self.take_cap = take_cap;
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = recipe;
        self
    }

    pub fn id(&self) -> FactionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total constructs assembled.  Never decreases.
    pub fn constructs_built(&self) -> u32 {
        self.constructs
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Every unit ever withdrawn, by kind.
    pub fn withdrawn(&self) -> &PartCounts {
        &self.withdrawn
    }

    /// Withdraw up to the cap, then assemble as much as possible.
    /// Returns `(taken, built)`.
    pub fn consume(&mut self) -> (PartCounts, u32) {
        let mut taken = PartCounts::EMPTY;
        for part in self.storage.take_up_to(self.take_cap) {
            self.inventory.put(part);
            taken.add(part);
        }
        self.withdrawn = self.withdrawn.merged(&taken);

        let built = self.inventory.assemble_all(&self.recipe);
        self.constructs += built;
        (taken, built)
    }

    /// Run every day and hand the faction back so the caller can read its
    /// final state once the thread has been joined.
    pub fn run(mut self, reporter: &dyn DayReporter) -> SimResult<Faction> {
        let party = self.barrier.join();

        for day in Day::range(self.days) {
            party
                .wait()
                .map_err(|e| SimError::coordination(&self.name, day, Phase::Production, e))?;

            let (taken, built) = self.consume();
            tracing::debug!(
                day = day.0,
                faction = %self.name,
                taken = taken.total(),
                built,
                "consumption done",
            );
            reporter.on_consumed(day, &ConsumptionReport {
                faction:     self.id,
                name:        &self.name,
                taken,
                built,
                total_built: self.constructs,
            });

            party
                .wait()
                .map_err(|e| SimError::coordination(&self.name, day, Phase::Consumption, e))?;
        }

        party.leave();
        Ok(self)
    }

    pub fn tally(&self) -> FactionTally {
        FactionTally {
            id:         self.id,
            name:       self.name.clone(),
            constructs: self.constructs,
            inventory:  *self.inventory.stock(),
            withdrawn:  self.withdrawn,
        }
    }
}
