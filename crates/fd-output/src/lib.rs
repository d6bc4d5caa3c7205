//! `fd-output` — a written chronicle of a simulation run.
//!
//! | Backend | Files created                                              |
//! |---------|------------------------------------------------------------|
//! | CSV     | `production.csv`, `consumption.csv`, `standings.csv`       |
//!
//! Backends implement [`ChronicleWriter`] and are driven by
//! [`ChronicleReporter`], which implements `fd_sim::DayReporter`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fd_output::{ChronicleReporter, CsvChronicle};
//!
//! let chronicle = Arc::new(ChronicleReporter::new(CsvChronicle::new(Path::new("./output"))?));
//! let outcome = SimBuilder::new(config)
//!     .factions(["World", "Wednesday"])
//!     .reporter(Arc::clone(&chronicle))
//!     .build()?
//!     .run()?;
//! chronicle.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvChronicle;
pub use error::{OutputError, OutputResult};
pub use observer::ChronicleReporter;
pub use row::{ConsumptionRow, ProductionRow, StandingRow};
pub use writer::ChronicleWriter;
