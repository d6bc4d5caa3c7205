//! Top-level simulation configuration.

use crate::{FdError, FdResult};

/// What the producer does when shared storage is full.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Wait for free space.  Only allowed when the configuration guarantees
    /// storage is drained every consumption window.
    #[default]
    Block,
    /// Deposit what fits; every unit that finds the storage full is dropped
    /// and counted as rejected.
    Reject,
}

/// Simulation parameters.
///
/// Typically built with `..SimConfig::default()` or loaded from a JSON file by
/// the application crate (with the `serde` feature; missing fields fall back
/// to the defaults).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of days to run.  Zero is valid: threads start and finish
    /// without a single rendezvous.
    pub days: u32,

    /// Maximum number of units shared storage holds at once.
    pub storage_capacity: usize,

    /// Upper bound of the producer's daily batch.  Batch sizes are uniform in
    /// `[1, max_batch]`.
    pub max_batch: usize,

    /// Maximum units each faction withdraws per day.
    pub take_cap: usize,

    /// Master RNG seed for production.
    pub seed: u64,

    pub overflow: OverflowPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days:             100,
            storage_capacity: 10,
            max_batch:        10,
            take_cap:         5,
            seed:             42,
            overflow:         OverflowPolicy::Block,
        }
    }
}

impl SimConfig {
    /// Check the configuration for a run with `factions` consumers.
    ///
    /// Under [`OverflowPolicy::Block`] the factions must be able to drain a
    /// full storage in one day (`factions * take_cap >= storage_capacity`).
    /// Storage is then empty at the start of every production window, so a
    /// batch no larger than the capacity never waits.
    pub fn validate(&self, factions: usize) -> FdResult<()> {
        if factions == 0 {
            return Err(FdError::Config("at least one faction is required".into()));
        }
        if self.storage_capacity == 0 {
            return Err(FdError::Config("storage_capacity must be greater than zero".into()));
        }
        if self.max_batch == 0 {
            return Err(FdError::Config("max_batch must be at least 1".into()));
        }
        if self.take_cap == 0 {
            return Err(FdError::Config("take_cap must be at least 1".into()));
        }
        if self.max_batch > self.storage_capacity {
            return Err(FdError::Config(format!(
                "max_batch {} exceeds storage_capacity {}",
                self.max_batch, self.storage_capacity
            )));
        }
        if self.overflow == OverflowPolicy::Block
            && factions.saturating_mul(self.take_cap) < self.storage_capacity
        {
            return Err(FdError::Config(format!(
                "{factions} factions taking {} each cannot drain storage of {}; \
                 blocking production could stall — use the reject overflow policy",
                self.take_cap, self.storage_capacity
            )));
        }
        Ok(())
    }
}
