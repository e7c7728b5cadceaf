//! Core simulation engine for the Baltic traffic generator.
//!
//! Owns the tick cycle: the simulation clock, per-tick fleet stepping,
//! operator controls, and the async run loop that ties them together.
//!
//! ## Modules
//!
//! - [`clock`]: pausable simulation clock with speed multiplier
//! - [`config`]: YAML-backed simulation configuration
//! - [`operator`]: shared pause/resume/stop controls and run limits
//! - [`runner`]: async simulation loop with tick callbacks
//! - [`tick`]: single-tick execution over the fleet

pub mod clock;
pub mod config;
pub mod operator;
pub mod runner;
pub mod tick;

pub use clock::{ClockError, SimulationClock};
pub use config::{
    ClockConfig, ConfigError, RunConfig, SimulationConfig, SnapshotConfig,
};
pub use operator::{OperatorState, SimulationEndReason};
pub use runner::{
    NoOpCallback, RunnerError, SimulationResult, TickCallback, log_simulation_end,
    run_simulation,
};
pub use tick::{SimulationState, TickError, TickOutcome, TickReport};
