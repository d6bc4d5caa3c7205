//! `ChronicleReporter<W>` — bridges `DayReporter` to a `ChronicleWriter`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use fd_core::Day;
use fd_sim::{ConsumptionReport, DayReporter, ProductionReport, SimOutcome};

use crate::row::{ConsumptionRow, ProductionRow, StandingRow};
use crate::writer::ChronicleWriter;
use crate::{OutputError, OutputResult};

struct Inner<W> {
    writer:     W,
    last_error: Option<OutputError>,
}

/// A [`DayReporter`] that writes every daily event and the final standings
/// to any [`ChronicleWriter`] backend.
///
/// Worker threads share it, so the writer sits behind a mutex held for one
/// row at a time.  Errors from the writer are stored internally because
/// reporter methods have no return value.  After `run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ChronicleReporter<W: ChronicleWriter> {
    inner: Mutex<Inner<W>>,
}

impl<W: ChronicleWriter> ChronicleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Inner { writer, last_error: None }),
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.lock().last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner).writer
    }

    fn record<F>(&self, write: F)
    where
        F: FnOnce(&mut W) -> OutputResult<()>,
    {
        let mut inner = self.lock();
        if let Err(e) = write(&mut inner.writer) {
            // Keep only the first error.
            if inner.last_error.is_none() {
                inner.last_error = Some(e);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: ChronicleWriter> DayReporter for ChronicleReporter<W> {
    fn on_produced(&self, day: Day, report: &ProductionReport) {
        let row = ProductionRow::new(day, report);
        self.record(|w| w.write_production(&row));
    }

    fn on_consumed(&self, day: Day, report: &ConsumptionReport<'_>) {
        let row = ConsumptionRow::new(day, report);
        self.record(|w| w.write_consumption(&row));
    }

    fn on_sim_end(&self, outcome: &SimOutcome) {
        let rows: Vec<StandingRow> = outcome.factions.iter().map(StandingRow::from).collect();
        self.record(|w| {
            w.write_standings(&rows)?;
            w.finish()
        });
    }
}
