//! Shared type definitions for the Fairway traffic simulator.
//!
//! Modules:
//! - [`ids`]: the [`ContactId`] newtype and per-category ID bases
//! - [`enums`]: contact kinds, flag states, placement-quality markers
//! - [`structs`]: positions, detection profiles, and the [`Contact`] record
//!
//! This crate is pure data plus small geometry helpers. Classification
//! policy lives in `fairway-chart`; generation and movement live in
//! `fairway-traffic`.

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{ContactKind, Flag, Placement};
pub use ids::{ContactId, DRONE_ID_BASE, SUBMARINE_ID_BASE, SURFACE_ID_BASE};
pub use structs::{Contact, DetectionProfile, DroneDetails, Position, SubmarineDetails};
