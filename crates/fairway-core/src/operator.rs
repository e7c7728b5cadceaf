//! Shared control state for a running simulation.
//!
//! The run loop polls this state between ticks; an operator task (or a
//! test) flips it from outside. All hot-path fields are atomics wrapped
//! in [`Arc`](std::sync::Arc) by the caller, so pause, stop, and speed
//! changes never lock against the tick loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Notify;

use crate::config::RunConfig;

/// Why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEndReason {
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
    /// Reached the configured `max_real_time_seconds` limit.
    MaxRealTimeReached,
    /// An operator requested a stop.
    OperatorStop,
}

/// Runtime controls shared between the tick loop and its operator.
#[derive(Debug)]
pub struct OperatorState {
    /// Whether the tick loop should hold before the next tick.
    paused: AtomicBool,

    /// Wakes the tick loop when the pause is lifted.
    resume_notify: Notify,

    /// Whether a clean stop has been requested.
    stop_requested: AtomicBool,

    /// Current delay between ticks in milliseconds.
    tick_interval_ms: AtomicU64,

    /// Wall-clock time when the run started.
    started_at: DateTime<Utc>,

    /// Maximum number of ticks (0 = unlimited).
    max_ticks: u64,

    /// Maximum wall-clock seconds (0 = unlimited).
    max_real_time_seconds: u64,
}

impl OperatorState {
    /// Create control state from the run configuration.
    pub fn new(run: &RunConfig) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            tick_interval_ms: AtomicU64::new(run.tick_interval_ms),
            started_at: Utc::now(),
            max_ticks: run.max_ticks,
            max_real_time_seconds: run.max_real_time_seconds,
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Whether the loop is holding.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Hold the loop before its next tick.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Lift the hold and wake the loop.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the hold is lifted; returns immediately when not
    /// paused.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop after the current tick.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Tick cadence
    // -----------------------------------------------------------------------

    /// Current delay between ticks in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Change the delay between ticks. Must be at least 100 ms.
    ///
    /// Returns the previous interval, or `None` if the value was
    /// rejected.
    pub fn set_tick_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < 100 {
            return None;
        }
        let previous = self.tick_interval_ms.swap(ms, Ordering::AcqRel);
        Some(previous)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Whether `current_tick` has reached the configured tick limit.
    pub const fn tick_limit_reached(&self, current_tick: u64) -> bool {
        self.max_ticks > 0 && current_tick >= self.max_ticks
    }

    /// Whether the wall-clock budget for the run is spent.
    pub fn time_limit_reached(&self) -> bool {
        if self.max_real_time_seconds == 0 {
            return false;
        }
        self.elapsed_seconds() >= self.max_real_time_seconds
    }

    /// Wall-clock time when the run started.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Elapsed wall-clock seconds since the run started.
    pub fn elapsed_seconds(&self) -> u64 {
        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
    }

    /// Configured tick limit (0 = unlimited).
    pub const fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    /// Configured wall-clock limit in seconds (0 = unlimited).
    pub const fn max_real_time_seconds(&self) -> u64 {
        self.max_real_time_seconds
    }
}
