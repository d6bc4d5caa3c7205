//! Construct recipes.

use std::fmt;

use crate::{FdError, FdResult, Part, PartCounts};

/// Quantity of each [`Part`] consumed to assemble one construct.
///
/// Constant for the lifetime of a simulation.  At least one quantity must be
/// non-zero; an all-zero recipe would let the assembly loop run forever.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe(PartCounts);

impl Recipe {
    /// One head, one torso, two arms, two legs.
    pub const ROBOT: Recipe = Recipe::robot();

    const fn robot() -> Recipe {
        // Index order matches `Part::ALL`.
        Recipe(PartCounts::from_array([1, 1, 2, 2]))
    }

    /// Build a recipe from `(part, quantity)` pairs.  Kinds not listed are
    /// not required.
    pub fn new(pairs: &[(Part, u32)]) -> FdResult<Self> {
        Self::from_counts(PartCounts::from_pairs(pairs))
    }

    pub fn from_counts(counts: PartCounts) -> FdResult<Self> {
        if counts.is_empty() {
            return Err(FdError::InvalidRecipe(
                "at least one part quantity must be non-zero".into(),
            ));
        }
        Ok(Recipe(counts))
    }

    /// Quantity of `part` needed per construct.
    #[inline]
    pub fn requires(&self, part: Part) -> u32 {
        self.0.get(part)
    }

    pub fn quantities(&self) -> &PartCounts {
        &self.0
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe::ROBOT
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recipe[{}]", self.0)
    }
}
