//! Single-tick execution over the assembled simulation state.
//!
//! Each tick asks the clock for the scaled elapsed interval and runs
//! one kinematics step over the fleet. A paused clock produces an idle
//! outcome rather than an error, so the run loop can keep polling
//! without special cases.

use std::time::Instant;

use fairway_chart::Chart;
use fairway_traffic::{StepError, StepSummary, step_fleet};
use fairway_types::Contact;
use rand::rngs::SmallRng;
use tracing::debug;

use crate::clock::SimulationClock;

/// Errors from tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// The kinematics step rejected the elapsed interval.
    #[error("kinematics error: {source}")]
    Step {
        /// The underlying step error.
        #[from]
        source: StepError,
    },

    /// The tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,
}

/// Everything one running session owns: clock, chart, fleet, and the
/// seeded generator that drives all randomness.
#[derive(Debug)]
pub struct SimulationState {
    clock: SimulationClock,
    chart: Chart,
    fleet: Vec<Contact>,
    rng: SmallRng,
    tick: u64,
}

/// What one call to [`SimulationState::run_tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The clock is paused; nothing advanced.
    Idle,
    /// One kinematics step ran.
    Advanced(TickReport),
}

/// Accounting for one completed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Tick number that just completed (1-based).
    pub tick: u64,
    /// Scaled simulation seconds covered by this tick.
    pub elapsed_seconds: f64,
    /// Kinematics accounting for the step.
    pub summary: StepSummary,
}

impl TickOutcome {
    /// The report for an advanced tick, or `None` when idle.
    pub const fn report(self) -> Option<TickReport> {
        match self {
            Self::Advanced(report) => Some(report),
            Self::Idle => None,
        }
    }
}

impl SimulationState {
    /// Assemble a session from its parts.
    ///
    /// The generator should be the same one that built the fleet, so a
    /// single seed reproduces both the population and its trajectories.
    pub const fn new(
        clock: SimulationClock,
        chart: Chart,
        fleet: Vec<Contact>,
        rng: SmallRng,
    ) -> Self {
        Self {
            clock,
            chart,
            fleet,
            rng,
            tick: 0,
        }
    }

    /// Run one tick at the given wall-clock instant.
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if the kinematics step rejects the
    /// interval or the tick counter overflows. A paused clock is not an
    /// error; it yields [`TickOutcome::Idle`].
    pub fn run_tick(&mut self, now: Instant) -> Result<TickOutcome, TickError> {
        let Some(elapsed_seconds) = self.clock.begin_tick(now) else {
            return Ok(TickOutcome::Idle);
        };

        let summary = step_fleet(&mut self.fleet, &self.chart, elapsed_seconds, &mut self.rng)?;
        self.tick = self.tick.checked_add(1).ok_or(TickError::TickOverflow)?;

        debug!(
            tick = self.tick,
            elapsed_seconds,
            moved = summary.moved,
            drift_events = summary.drift_events,
            "tick complete"
        );

        Ok(TickOutcome::Advanced(TickReport {
            tick: self.tick,
            elapsed_seconds,
            summary,
        }))
    }

    /// Number of completed ticks.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The current traffic picture.
    pub fn fleet(&self) -> &[Contact] {
        &self.fleet
    }

    /// The static chart the session runs on.
    pub const fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Read access to the clock.
    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Control access to the clock (pause, resume, speed).
    pub const fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fairway_chart::create_baltic_chart;
    use fairway_traffic::{FleetConfig, generate_population};
    use rand::SeedableRng;
    use std::time::Duration;

    fn make_state(seed: u64) -> SimulationState {
        let chart = create_baltic_chart().unwrap();
        let config = FleetConfig {
            surface_count: 5,
            submarine_count: 2,
            drones_per_base: 1,
            ..FleetConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        let clock = SimulationClock::new(1.0).unwrap();
        SimulationState::new(clock, chart, report.fleet, rng)
    }

    #[test]
    fn first_tick_advances_with_zero_elapsed() {
        let mut state = make_state(1);
        let report = state.run_tick(Instant::now()).unwrap().report().unwrap();
        assert_eq!(report.tick, 1);
        assert!(report.elapsed_seconds.abs() < f64::EPSILON);
        assert_eq!(report.summary.moved, 0);
        assert_eq!(state.tick(), 1);
    }

    #[test]
    fn paused_clock_yields_idle_without_counting() {
        let mut state = make_state(2);
        state.clock_mut().pause();
        let outcome = state.run_tick(Instant::now()).unwrap();
        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn successive_ticks_move_the_fleet() {
        let mut state = make_state(3);
        let start = Instant::now();
        let _ = state.run_tick(start).unwrap();
        let report = state
            .run_tick(start + Duration::from_secs(3))
            .unwrap()
            .report()
            .unwrap();
        assert_eq!(report.tick, 2);
        assert!(report.elapsed_seconds > 2.9);
        assert!(report.summary.moved > 0);
    }

    #[test]
    fn oversized_interval_skips_but_still_counts_the_tick() {
        let mut state = make_state(4);
        let start = Instant::now();
        let _ = state.run_tick(start).unwrap();
        let report = state
            .run_tick(start + Duration::from_secs(60))
            .unwrap()
            .report()
            .unwrap();
        assert!(report.summary.skipped_stale);
        assert_eq!(report.summary.moved, 0);
        assert_eq!(report.tick, 2);
    }
}
