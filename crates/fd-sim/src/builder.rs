//! Fluent builder for constructing a [`Simulation`].

use std::collections::HashSet;
use std::sync::Arc;

use fd_core::{FactionId, Recipe, SimConfig, SimRng};
use fd_sync::{RoundBarrier, SharedStorage};

use crate::observer::{DayReporter, NoopReporter};
use crate::{Faction, Producer, RandomSupply, SimError, SimResult, Simulation, Supply};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — days, storage capacity, batch and take caps, seed, …
/// - at least one faction name
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.recipe(r)`     | [`Recipe::ROBOT`]                                |
/// | `.supply(s)`     | [`RandomSupply`] seeded from `config.seed`       |
/// | `.reporter(r)`   | [`NoopReporter`]                                 |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::default())
///     .faction("World")
///     .faction("Wednesday")
///     .reporter(TracingReporter)
///     .build()?;
/// let outcome = sim.run()?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    factions: Vec<String>,
    recipe:   Recipe,
    supply:   Option<Box<dyn Supply>>,
    reporter: Option<Arc<dyn DayReporter>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            factions: Vec::new(),
            recipe:   Recipe::ROBOT,
            supply:   None,
            reporter: None,
        }
    }

    /// Register a faction.  Names must be unique; ids follow registration
    /// order.
    pub fn faction(mut self, name: impl Into<String>) -> Self {
        self.factions.push(name.into());
        self
    }

    pub fn factions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.factions.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = recipe;
        self
    }

    /// Replace the random production strategy.
    pub fn supply<S: Supply>(mut self, supply: S) -> Self {
        self.supply = Some(Box::new(supply));
        self
    }

    pub fn reporter<R: DayReporter + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Validate inputs, create the shared storage and barrier, and wire every
    /// worker to them.
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        config.validate(self.factions.len())?;

        let mut seen = HashSet::new();
        for name in &self.factions {
            if !seen.insert(name.as_str()) {
                return Err(SimError::Config(format!("duplicate faction name '{name}'")));
            }
        }

        // Recipes deserialized from config bypass `Recipe::new`.
        let recipe = Recipe::from_counts(*self.recipe.quantities())?;

        // ── Shared handles ────────────────────────────────────────────────
        let storage = Arc::new(SharedStorage::new(config.storage_capacity)?);
        let barrier = Arc::new(RoundBarrier::new(1 + self.factions.len())?);

        // ── Workers ───────────────────────────────────────────────────────
        let supply: Box<dyn Supply> = match self.supply {
            Some(supply) => supply,
            None => {
                let rng = SimRng::new(config.seed).child(0);
                Box::new(RandomSupply::new(rng, config.max_batch))
            }
        };
        let producer = Producer::new(Arc::clone(&storage), Arc::clone(&barrier), config.days, supply)
            .with_overflow(config.overflow);

        let factions = self
            .factions
            .into_iter()
            .enumerate()
            .map(|(i, name)| -> SimResult<Faction> {
                let id = FactionId::try_from(i)
                    .map_err(|_| SimError::Config(format!("too many factions ({})", i + 1)))?;
                Ok(Faction::new(id, name, Arc::clone(&storage), Arc::clone(&barrier), config.days)
                    .with_take_cap(config.take_cap)
                    .with_recipe(recipe))
            })
            .collect::<SimResult<Vec<Faction>>>()?;

        let reporter: Arc<dyn DayReporter> = match self.reporter {
            Some(reporter) => reporter,
            None => Arc::new(NoopReporter),
        };

        Ok(Simulation {
            config,
            reporter,
            storage,
            barrier,
            producer,
            factions,
        })
    }
}
