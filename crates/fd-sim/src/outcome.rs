//! Final results read by the driver after every worker has been joined.

use std::fmt;

use fd_core::{FactionId, PartCounts};

/// One faction's final state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactionTally {
    pub id:         FactionId,
    pub name:       String,
    pub constructs: u32,
    /// Parts left over in the private inventory.
    pub inventory:  PartCounts,
    pub withdrawn:  PartCounts,
}

/// Who ended with the most constructs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Winner {
        faction:    FactionId,
        name:       String,
        constructs: u32,
    },
    /// Two or more factions share the top count.  Every leader is listed in
    /// registration order; there is no tie-break.
    Tie {
        names:      Vec<String>,
        constructs: u32,
    },
}

impl Verdict {
    /// `None` only for an empty slice.
    pub fn decide(tallies: &[FactionTally]) -> Option<Verdict> {
        let top = tallies.iter().map(|t| t.constructs).max()?;
        let leaders: Vec<&FactionTally> = tallies.iter().filter(|t| t.constructs == top).collect();

        Some(match leaders.as_slice() {
            [only] => Verdict::Winner {
                faction:    only.id,
                name:       only.name.clone(),
                constructs: top,
            },
            _ => Verdict::Tie {
                names:      leaders.iter().map(|t| t.name.clone()).collect(),
                constructs: top,
            },
        })
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Verdict::Tie { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner { name, constructs, .. } => {
                write!(f, "'{name}' wins with {constructs} robots")
            }
            Verdict::Tie { names, constructs } => {
                write!(f, "tie at {constructs} robots between {}", names.join(", "))
            }
        }
    }
}

/// Everything the driver knows once the run has finished.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    pub days:     u32,
    /// Total deposited by the producer.
    pub produced: PartCounts,
    /// Units still in shared storage.
    pub leftover: usize,
    /// In registration order.
    pub factions: Vec<FactionTally>,
    pub verdict:  Verdict,
}

impl SimOutcome {
    pub fn faction(&self, name: &str) -> Option<&FactionTally> {
        self.factions.iter().find(|t| t.name == name)
    }
}
