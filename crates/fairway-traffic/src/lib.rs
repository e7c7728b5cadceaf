//! Population generation and kinematics for the Fairway traffic
//! simulator.
//!
//! Modules:
//! - [`config`]: typed fleet-composition settings
//! - [`naming`]: name, operator, and roster pools
//! - [`attributes`]: per-contact attribute draws (kind, flag, heading,
//!   speed, tonnage, detection)
//! - [`spawn`]: the graded placement ladder that builds the fleet
//! - [`movement`]: the per-tick dead-reckoning step with shoreline
//!   recovery
//! - [`error`]: request-validation and step errors
//!
//! Every random choice flows through a caller-supplied generator; a
//! fixed seed reproduces the same fleet and the same trajectories.

pub mod attributes;
pub mod config;
pub mod error;
pub mod movement;
pub mod naming;
pub mod spawn;

pub use config::FleetConfig;
pub use error::{StepError, TrafficError};
pub use movement::{StepSummary, step_fleet};
pub use spawn::{SpawnReport, generate_population};
