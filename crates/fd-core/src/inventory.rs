//! A faction's private parts stock and the greedy assembly loop.
//!
//! An `Inventory` is owned by exactly one faction thread and is never shared,
//! so it carries no synchronisation.

use crate::{Part, PartCounts, Recipe};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Inventory {
    stock: PartCounts,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing stock (scenario setup, tests).
    pub fn with_stock(stock: PartCounts) -> Self {
        Self { stock }
    }

    /// Merge one withdrawn unit.
    #[inline]
    pub fn put(&mut self, part: Part) {
        self.stock.add(part);
    }

    #[inline]
    pub fn count(&self, part: Part) -> u32 {
        self.stock.get(part)
    }

    pub fn stock(&self) -> &PartCounts {
        &self.stock
    }

    /// `true` when every required quantity is held at the same time.
    pub fn can_assemble(&self, recipe: &Recipe) -> bool {
        Part::ALL
            .iter()
            .all(|&p| self.stock.get(p) >= recipe.requires(p))
    }

    /// Assemble as many constructs as the stock allows.
    ///
    /// Repeats until any one required kind falls short, deducting the full
    /// recipe each time.  Returns the number of constructs built.
    pub fn assemble_all(&mut self, recipe: &Recipe) -> u32 {
        let mut built = 0;
        while self.can_assemble(recipe) {
            for (part, qty) in recipe.quantities().iter() {
                self.stock.remove_n(part, qty);
            }
            built += 1;
        }
        built
    }
}
