//! Reporting sink for daily events.
//!
//! Workers call the reporter from their own threads, so implementations are
//! `Send + Sync`.  Methods return nothing: a reporter that can fail stores
//! its own errors (see `fd_output::ChronicleReporter::take_error`) and never
//! stops the round.

use std::sync::Arc;

use fd_core::{Day, FactionId, PartCounts};

use crate::SimOutcome;

/// What the producer deposited on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionReport {
    /// Units actually placed into storage, by kind.
    pub deposited: PartCounts,
    /// Units refused by a full storage under the reject overflow policy.
    pub rejected:  usize,
    /// Storage level once production finished.
    pub stock:     usize,
}

impl ProductionReport {
    pub fn units(&self) -> u64 {
        self.deposited.total()
    }
}

/// What one faction did in the consumption window of one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumptionReport<'a> {
    pub faction:     FactionId,
    pub name:        &'a str,
    /// Units withdrawn from storage today, by kind.
    pub taken:       PartCounts,
    /// Constructs assembled today.
    pub built:       u32,
    /// Running total of constructs.
    pub total_built: u32,
}

/// Callbacks invoked by the worker threads and the driver.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait DayReporter: Send + Sync {
    /// Called by the producer after depositing, before the production window
    /// closes.
    fn on_produced(&self, _day: Day, _report: &ProductionReport) {}

    /// Called by each faction after assembling, before the consumption
    /// window closes.
    fn on_consumed(&self, _day: Day, _report: &ConsumptionReport<'_>) {}

    /// Called once by the driver after every worker has been joined.
    fn on_sim_end(&self, _outcome: &SimOutcome) {}
}

/// A [`DayReporter`] that does nothing.
pub struct NoopReporter;

impl DayReporter for NoopReporter {}

/// Emits every event as a structured `tracing` record.
pub struct TracingReporter;

impl DayReporter for TracingReporter {
    fn on_produced(&self, day: Day, report: &ProductionReport) {
        tracing::info!(
            day = day.0,
            units = report.units(),
            rejected = report.rejected,
            stock = report.stock,
            "factory produced {} parts ({})",
            report.units(),
            report.deposited,
        );
    }

    fn on_consumed(&self, day: Day, report: &ConsumptionReport<'_>) {
        tracing::info!(
            day = day.0,
            faction = report.name,
            taken = report.taken.total(),
            built = report.built,
            total = report.total_built,
            "'{}' took {} parts and built {} robots",
            report.name,
            report.taken.total(),
            report.built,
        );
    }

    fn on_sim_end(&self, outcome: &SimOutcome) {
        tracing::info!(days = outcome.days, "{}", outcome.verdict);
    }
}

impl<R: DayReporter + ?Sized> DayReporter for Arc<R> {
    fn on_produced(&self, day: Day, report: &ProductionReport) {
        (**self).on_produced(day, report);
    }

    fn on_consumed(&self, day: Day, report: &ConsumptionReport<'_>) {
        (**self).on_consumed(day, report);
    }

    fn on_sim_end(&self, outcome: &SimOutcome) {
        (**self).on_sim_end(outcome);
    }
}

/// Fan out to two reporters, left first.
impl<A: DayReporter, B: DayReporter> DayReporter for (A, B) {
    fn on_produced(&self, day: Day, report: &ProductionReport) {
        self.0.on_produced(day, report);
        self.1.on_produced(day, report);
    }

    fn on_consumed(&self, day: Day, report: &ConsumptionReport<'_>) {
        self.0.on_consumed(day, report);
        self.1.on_consumed(day, report);
    }

    fn on_sim_end(&self, outcome: &SimOutcome) {
        self.0.on_sim_end(outcome);
        self.1.on_sim_end(outcome);
    }
}
