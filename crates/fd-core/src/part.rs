//! Resource unit kinds and a fixed-size multiset over them.
//!
//! The set of kinds is closed, so counts live in a `[u32; Part::COUNT]`
//! indexed by [`Part::index`] instead of a hash map.

use std::fmt;

/// One kind of raw part moved from shared storage into a faction's stock.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Part {
    Head,
    Torso,
    Arm,
    Leg,
}

impl Part {
    pub const COUNT: usize = 4;

    /// Every kind, in index order.
    pub const ALL: [Part; Part::COUNT] = [Part::Head, Part::Torso, Part::Arm, Part::Leg];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Part::Head  => "head",
            Part::Torso => "torso",
            Part::Arm   => "arm",
            Part::Leg   => "leg",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── PartCounts ────────────────────────────────────────────────────────────────

/// Count of each [`Part`] kind.  `Copy`, heap-free, equality by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartCounts([u32; Part::COUNT]);

impl PartCounts {
    pub const EMPTY: PartCounts = PartCounts([0; Part::COUNT]);

    /// Counts in [`Part::ALL`] order.
    pub const fn from_array(counts: [u32; Part::COUNT]) -> Self {
        PartCounts(counts)
    }

    /// Build from `(part, count)` pairs; repeated parts accumulate.
    pub fn from_pairs(pairs: &[(Part, u32)]) -> Self {
        let mut counts = Self::EMPTY;
        for &(part, n) in pairs {
            counts.add_n(part, n);
        }
        counts
    }

    #[inline]
    pub fn get(&self, part: Part) -> u32 {
        self.0[part.index()]
    }

    #[inline]
    pub fn add(&mut self, part: Part) {
        self.add_n(part, 1);
    }

    #[inline]
    pub fn add_n(&mut self, part: Part, n: u32) {
        self.0[part.index()] += n;
    }

    /// Subtract `n` of `part`.
    ///
    /// # Panics
    /// Panics in debug mode if fewer than `n` are held.
    #[inline]
    pub(crate) fn remove_n(&mut self, part: Part, n: u32) {
        self.0[part.index()] -= n;
    }

    /// Total number of units across all kinds.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| n as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// `(part, count)` for every kind, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Part, u32)> + '_ {
        Part::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Element-wise sum.
    pub fn merged(mut self, other: &PartCounts) -> PartCounts {
        for (part, n) in other.iter() {
            self.add_n(part, n);
        }
        self
    }
}

impl<'a> FromIterator<&'a Part> for PartCounts {
    fn from_iter<I: IntoIterator<Item = &'a Part>>(iter: I) -> Self {
        let mut counts = Self::EMPTY;
        for &part in iter {
            counts.add(part);
        }
        counts
    }
}

impl fmt::Display for PartCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (part, n) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{part}={n}")?;
        }
        Ok(())
    }
}
