//! The `ChronicleWriter` trait implemented by backend writers.

use crate::{ConsumptionRow, OutputResult, ProductionRow, StandingRow};

/// Errors are returned here and stored by
/// [`ChronicleReporter`][crate::ChronicleReporter]; they never reach the
/// worker threads.
pub trait ChronicleWriter: Send {
    fn write_production(&mut self, row: &ProductionRow) -> OutputResult<()>;

    fn write_consumption(&mut self, row: &ConsumptionRow) -> OutputResult<()>;

    /// Write the final standings, one row per faction.
    fn write_standings(&mut self, rows: &[StandingRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
