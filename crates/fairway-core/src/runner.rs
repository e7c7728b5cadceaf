//! Simulation loop runner with operator controls.
//!
//! [`run_simulation`] drives the tick loop with support for:
//!
//! - **Bounded runs**: stop after `max_ticks` or `max_real_time_seconds`
//! - **Pause/resume**: the operator can hold and continue the loop
//! - **Variable cadence**: tick interval adjustable at runtime
//! - **Operator stop**: clean stop between ticks
//!
//! The runner wraps [`SimulationState::run_tick`] and adds the control
//! plane around it. Pausing the loop also pauses the simulation clock,
//! so held wall time never reaches the fleet as elapsed simulation
//! time.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::operator::{OperatorState, SimulationEndReason};
use crate::tick::{SimulationState, TickError, TickOutcome, TickReport};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Result of the simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last completed tick, if any.
    pub final_report: Option<TickReport>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
}

/// Callback invoked after each completed tick.
///
/// Implementations can use this to emit periodic status reports, feed
/// an observer, or capture snapshots. Idle polls while paused do not
/// reach the callback.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, report: &TickReport, state: &SimulationState);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _report: &TickReport, _state: &SimulationState) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// Integrates the tick cycle with operator controls (pause, resume,
/// cadence, stop) and run boundaries (max ticks, max wall time).
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick execution fails unrecoverably.
pub async fn run_simulation(
    state: &mut SimulationState,
    operator: &Arc<OperatorState>,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut last_report: Option<TickReport> = None;
    let mut total_ticks: u64 = 0;

    info!(
        max_ticks = operator.max_ticks(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        tick_interval_ms = operator.tick_interval_ms(),
        contacts = state.fleet().len(),
        "simulation starting"
    );

    loop {
        // --- Hold while paused, keeping the clock in step ---
        if operator.is_paused() {
            info!("simulation paused, waiting for resume");
            state.clock_mut().pause();
            operator.wait_if_paused().await;
            state.clock_mut().resume();
            info!("simulation resumed");
        }

        // --- Check stop request (before tick) ---
        if operator.is_stop_requested() {
            info!("operator stop requested");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::OperatorStop,
                final_report: last_report,
                total_ticks,
            });
        }

        // --- Check wall-time limit (before tick) ---
        if operator.time_limit_reached() {
            info!(
                max_seconds = operator.max_real_time_seconds(),
                elapsed = operator.elapsed_seconds(),
                "real-time limit reached"
            );
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::MaxRealTimeReached,
                final_report: last_report,
                total_ticks,
            });
        }

        // --- Execute tick ---
        if let TickOutcome::Advanced(report) = state.run_tick(Instant::now())? {
            total_ticks = total_ticks.saturating_add(1);
            callback.on_tick(&report, state);

            // run_tick advances the counter internally, so report.tick is
            // the tick that just ran. With max_ticks 5 the loop stops once
            // tick 5 has completed.
            if operator.tick_limit_reached(report.tick) {
                info!(
                    tick = report.tick,
                    max_ticks = operator.max_ticks(),
                    "tick limit reached"
                );
                return Ok(SimulationResult {
                    end_reason: SimulationEndReason::MaxTicksReached,
                    final_report: Some(report),
                    total_ticks,
                });
            }
            last_report = Some(report);
        }

        // --- Sleep for the tick interval ---
        let interval_ms = operator.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}

/// Log the simulation end sequence.
///
/// Called after [`run_simulation`] returns to close out the run log.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_report.as_ref().map(|r| r.tick),
        "simulation ended"
    );

    if let Some(ref report) = result.final_report {
        info!(
            tick = report.tick,
            moved = report.summary.moved,
            stationary = report.summary.stationary,
            drift_events = report.summary.drift_events,
            "final tick summary"
        );
    } else {
        warn!("simulation ended with no ticks executed");
    }
}
