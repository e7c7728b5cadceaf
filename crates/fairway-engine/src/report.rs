//! Tick callback that logs periodic fleet status reports.
//!
//! After every `report_every_ticks` completed ticks, the callback
//! walks the fleet and emits one structured log line with composition
//! counts, affiliation totals, and movement figures. Tick-level detail
//! stays at debug level in the tick cycle; this is the coarse operator
//! view.

use fairway_core::runner::TickCallback;
use fairway_core::tick::{SimulationState, TickReport};
use fairway_types::{Contact, ContactKind};
use tracing::info;

/// Callback that periodically summarizes the fleet to the log.
pub struct StatusReportCallback {
    report_every_ticks: u64,
}

impl StatusReportCallback {
    /// Create a callback reporting every `report_every_ticks` ticks.
    ///
    /// A cadence of zero disables reporting entirely.
    pub const fn new(report_every_ticks: u64) -> Self {
        Self { report_every_ticks }
    }
}

impl TickCallback for StatusReportCallback {
    fn on_tick(&mut self, report: &TickReport, state: &SimulationState) {
        let due = report
            .tick
            .checked_rem(self.report_every_ticks)
            .is_some_and(|rem| rem == 0);
        if !due {
            return;
        }

        let fleet = state.fleet();
        let submarines = count_kind(fleet, ContactKind::Submarine);
        let drones = count_kind(fleet, ContactKind::Drone);
        let surface = fleet
            .len()
            .saturating_sub(submarines)
            .saturating_sub(drones);
        let russian = fleet.iter().filter(|c| c.is_russian).count();
        let submerged = fleet
            .iter()
            .filter(|c| c.submarine.as_ref().is_some_and(|s| s.is_submerged))
            .count();
        let distressed = fleet
            .iter()
            .filter(|c| state.chart().is_distressed(c.position))
            .count();

        let total_speed: f64 = fleet.iter().map(|c| c.speed_knots).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_speed = if fleet.is_empty() {
            0.0
        } else {
            total_speed / fleet.len() as f64
        };

        info!(
            tick = report.tick,
            elapsed_seconds = report.elapsed_seconds,
            surface,
            submarines,
            drones,
            russian,
            submerged,
            distressed,
            moved = report.summary.moved,
            stationary = report.summary.stationary,
            drift_events = report.summary.drift_events,
            mean_speed_knots = mean_speed,
            "fleet status"
        );
    }
}

fn count_kind(fleet: &[Contact], kind: ContactKind) -> usize {
    fleet.iter().filter(|c| c.kind == kind).count()
}
