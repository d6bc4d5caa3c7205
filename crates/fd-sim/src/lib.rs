//! `fd-sim` — workers and driver for the rust_foundry simulation.
//!
//! # Daily round
//!
//! ```text
//! for day in 1..=config.days (each thread keeps its own counter):
//!   producer  ① Produce — deposit a batch into SharedStorage
//!             ② wait(A)  — production window closes
//!             ③ wait(B)  — wait for every faction to finish consuming
//!   faction   ① wait(A)  — wait for today's production
//!             ② Take     — withdraw up to `take_cap` units into the inventory
//!             ③ Assemble — build constructs while the recipe is satisfied
//!             ④ wait(B)  — consumption window closes
//! ```
//!
//! The barrier and the storage are the only shared state.  Inventories and
//! construct counters belong to their faction thread and are read by the
//! driver only after `join`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fd_core::SimConfig;
//! use fd_sim::{SimBuilder, TracingReporter};
//!
//! let outcome = SimBuilder::new(SimConfig::default())
//!     .factions(["World", "Wednesday"])
//!     .reporter(TracingReporter)
//!     .build()?
//!     .run()?;
//! println!("{}", outcome.verdict);
//! ```

pub mod builder;
pub mod error;
pub mod faction;
pub mod observer;
pub mod outcome;
pub mod producer;
pub mod sim;
pub mod supply;


pub use builder::SimBuilder;
pub use error::{Phase, SimError, SimResult};
pub use faction::Faction;
pub use observer::{ConsumptionReport, DayReporter, NoopReporter, ProductionReport, TracingReporter};
pub use outcome::{FactionTally, SimOutcome, Verdict};
pub use producer::Producer;
pub use sim::Simulation;
pub use supply::{RandomSupply, ScriptedSupply, Supply};
