//! `fd-core` — foundational types for the `rust_foundry` simulation.
//!
//! This crate is a dependency of every other `fd-*` crate.  It has no `fd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`part`]        | `Part` (resource unit kinds), `PartCounts` multiset   |
//! | [`recipe`]      | `Recipe` — per-part quantities for one construct      |
//! | [`inventory`]   | `Inventory` — private stock plus greedy assembly      |
//! | [`ids`]         | `FactionId`                                           |
//! | [`time`]        | `Day`                                                 |
//! | [`config`]      | `SimConfig`, `OverflowPolicy`                         |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `FdError`, `FdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod inventory;
pub mod part;
pub mod recipe;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OverflowPolicy, SimConfig};
pub use error::{FdError, FdResult};
pub use ids::FactionId;
pub use inventory::Inventory;
pub use part::{Part, PartCounts};
pub use recipe::Recipe;
pub use rng::SimRng;
pub use time::Day;
