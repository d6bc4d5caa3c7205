//! Simulation time model.
//!
//! Time advances in whole days.  Each worker thread keeps its own local `Day`
//! counter; the counters stay in lockstep only because every day ends with
//! the same barrier rendezvous.  There is no shared clock.

use std::fmt;

/// A 1-based simulation day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const FIRST: Day = Day(1);

    /// Days `1..=days`.  Empty when `days == 0`.
    pub fn range(days: u32) -> impl Iterator<Item = Day> {
        (1..=days).map(Day)
    }

    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
