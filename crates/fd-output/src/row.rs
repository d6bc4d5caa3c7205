//! Plain data row types written by chronicle backends.

use fd_core::{Day, Part, PartCounts};
use fd_sim::{ConsumptionReport, FactionTally, ProductionReport};

/// One day of production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionRow {
    pub day:      u32,
    pub units:    u64,
    /// Per-kind counts in `Part::ALL` order.
    pub parts:    [u32; Part::COUNT],
    pub rejected: u64,
    pub stock:    u64,
}

impl ProductionRow {
    pub fn new(day: Day, report: &ProductionReport) -> Self {
        Self {
            day:      day.0,
            units:    report.units(),
            parts:    per_kind(&report.deposited),
            rejected: report.rejected as u64,
            stock:    report.stock as u64,
        }
    }
}

/// One faction's consumption on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionRow {
    pub day:         u32,
    pub faction_id:  u16,
    pub faction:     String,
    pub taken:       u64,
    pub built:       u32,
    pub total_built: u32,
}

impl ConsumptionRow {
    pub fn new(day: Day, report: &ConsumptionReport<'_>) -> Self {
        Self {
            day:         day.0,
            faction_id:  report.faction.0,
            faction:     report.name.to_owned(),
            taken:       report.taken.total(),
            built:       report.built,
            total_built: report.total_built,
        }
    }
}

/// A faction's final standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub faction_id: u16,
    pub faction:    String,
    pub constructs: u32,
    pub withdrawn:  u64,
    /// Parts left unassembled in the faction's inventory.
    pub spare:      u64,
}

impl From<&FactionTally> for StandingRow {
    fn from(tally: &FactionTally) -> Self {
        Self {
            faction_id: tally.id.0,
            faction:    tally.name.clone(),
            constructs: tally.constructs,
            withdrawn:  tally.withdrawn.total(),
            spare:      tally.inventory.total(),
        }
    }
}

fn per_kind(counts: &PartCounts) -> [u32; Part::COUNT] {
    Part::ALL.map(|p| counts.get(p))
}
