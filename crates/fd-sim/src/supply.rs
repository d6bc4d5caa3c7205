//! Where the producer's daily batches come from.

use std::collections::VecDeque;

use fd_core::{Day, Part, SimRng};

/// Pluggable production strategy, called once per day by the producer.
///
/// Runs on the producer thread only, so implementations need `Send` but not
/// `Sync`.
pub trait Supply: Send + 'static {
    /// Parts to deposit on `day`, in deposit order.
    fn next_batch(&mut self, day: Day) -> Vec<Part>;
}

/// Uniform random batches: size in `[1, max_batch]`, each part uniform over
/// [`Part::ALL`].
pub struct RandomSupply {
    rng:       SimRng,
    max_batch: usize,
}

impl RandomSupply {
    pub fn new(rng: SimRng, max_batch: usize) -> Self {
        Self { rng, max_batch: max_batch.max(1) }
    }
}

impl Supply for RandomSupply {
    fn next_batch(&mut self, _day: Day) -> Vec<Part> {
        let size = self.rng.gen_range(1..=self.max_batch);
        (0..size)
            .filter_map(|_| self.rng.choose(&Part::ALL).copied())
            .collect()
    }
}

/// Fixed batches, one per day in order.  Produces nothing once exhausted.
#[derive(Default)]
pub struct ScriptedSupply {
    batches: VecDeque<Vec<Part>>,
}

impl ScriptedSupply {
    pub fn new(batches: Vec<Vec<Part>>) -> Self {
        Self { batches: batches.into() }
    }
}

impl Supply for ScriptedSupply {
    fn next_batch(&mut self, _day: Day) -> Vec<Part> {
        self.batches.pop_front().unwrap_or_default()
    }
}
