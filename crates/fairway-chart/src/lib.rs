//! Geofence policy and static chart data for the Fairway traffic
//! simulator.
//!
//! Modules:
//! - [`bounds`]: axis-aligned degree-space rectangles
//! - [`policy`]: ordered placement-rule records and their verdicts
//! - [`chart`]: the validated [`Chart`] with classification and spawn
//!   queries
//! - [`baltic`]: the canonical Baltic tables (land masses, channels,
//!   buffers, passages, safe zones, lanes, stations, bases)
//! - [`error`]: construction-time validation errors
//!
//! Classification is a single prioritized scan over a flat rule table;
//! `is_traversable` is deliberately stochastic near shorelines while
//! `evaluate` exposes the underlying verdict deterministically.

pub mod baltic;
pub mod bounds;
pub mod chart;
pub mod error;
pub mod policy;

pub use baltic::{
    BALTIC_ENVELOPE, COASTAL_BUFFER_WATER_CHANCE, DroneBase, LAND_EDGE_BAND,
    LAND_EDGE_WATER_CHANCE, PatrolStation, SAFE_CENTROID, create_baltic_chart, drone_bases,
    patrol_stations, traffic_lanes,
};
pub use bounds::RegionBounds;
pub use chart::{Chart, TrafficLane};
pub use error::ChartError;
pub use policy::{Axis, PlacementRule, RuleEffect, Verdict};
