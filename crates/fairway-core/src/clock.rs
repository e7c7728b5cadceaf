//! Simulation clock with real-time scaling.
//!
//! The clock turns wall-clock instants into scaled simulation seconds.
//! It never reads the system time itself; the caller hands each tick an
//! instant, which keeps every temporal path testable without sleeping.
//!
//! Resuming from a pause deliberately forgets the previous timestamp,
//! so paused wall time never leaks into the fleet as one giant step.

use std::time::Instant;

/// Errors from clock configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The speed multiplier is zero, negative, or non-finite.
    #[error("speed multiplier {value} is not a usable scale")]
    InvalidSpeed {
        /// The rejected multiplier.
        value: f64,
    },
}

/// Scaled tick timer for the simulation loop.
///
/// `begin_tick` yields the scaled seconds since the previous tick, or
/// `None` while the clock is paused. The first tick after a start or a
/// resume always yields zero seconds, so stale timestamps can never
/// teleport the fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Whether the clock is accepting ticks.
    running: bool,

    /// Timestamp of the previous tick, if one has happened since the
    /// last start or resume.
    last_tick: Option<Instant>,

    /// Scale from wall seconds to simulation seconds.
    speed_multiplier: f64,
}

impl SimulationClock {
    /// Create a running clock with the given time scale.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSpeed`] if the multiplier is zero,
    /// negative, or non-finite.
    pub fn new(speed_multiplier: f64) -> Result<Self, ClockError> {
        validate_speed(speed_multiplier)?;
        Ok(Self {
            running: true,
            last_tick: None,
            speed_multiplier,
        })
    }

    /// Mark the start of a tick and return the scaled seconds elapsed
    /// since the previous one.
    ///
    /// Returns `None` while paused. The first call after construction
    /// or after [`resume`](Self::resume) returns `Some(0.0)` and only
    /// anchors the timestamp.
    pub fn begin_tick(&mut self, now: Instant) -> Option<f64> {
        if !self.running {
            return None;
        }
        let elapsed = self.last_tick.map_or(0.0, |previous| {
            now.duration_since(previous).as_secs_f64() * self.speed_multiplier
        });
        self.last_tick = Some(now);
        Some(elapsed)
    }

    /// Stop accepting ticks.
    pub const fn pause(&mut self) {
        self.running = false;
    }

    /// Accept ticks again, forgetting the pre-pause timestamp.
    pub const fn resume(&mut self) {
        self.running = true;
        self.last_tick = None;
    }

    /// Whether the clock is currently accepting ticks.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current scale from wall seconds to simulation seconds.
    pub const fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Change the time scale; takes effect from the next tick.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSpeed`] if the multiplier is zero,
    /// negative, or non-finite.
    pub fn set_speed(&mut self, speed_multiplier: f64) -> Result<(), ClockError> {
        validate_speed(speed_multiplier)?;
        self.speed_multiplier = speed_multiplier;
        Ok(())
    }
}

fn validate_speed(value: f64) -> Result<(), ClockError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ClockError::InvalidSpeed { value });
    }
    Ok(())
}
