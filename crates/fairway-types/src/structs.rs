//! Core contact structs for the Fairway traffic picture.
//!
//! Covers [`Position`] geometry, the [`DetectionProfile`] sensor triple,
//! category-specific detail blocks, and the [`Contact`] record itself.

use serde::{Deserialize, Serialize};

use crate::enums::{ContactKind, Flag, Placement};
use crate::ids::ContactId;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A coordinate in degrees, longitude east and latitude north.
///
/// All geometry in the simulator works in raw degree space; the geofence
/// rectangles and the spacing thresholds are calibrated in that same space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitude in degrees east.
    pub lon: f64,
    /// Latitude in degrees north.
    pub lat: f64,
}

impl Position {
    /// Create a position from longitude and latitude degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Euclidean distance to `other` in degree space.
    pub fn distance_to(self, other: Self) -> f64 {
        let dlon = other.lon - self.lon;
        let dlat = other.lat - self.lat;
        dlon.hypot(dlat)
    }

    /// Compass bearing from `self` toward `other`, in `[0, 360)` degrees
    /// with 0 = north, clockwise.
    pub fn bearing_to(self, other: Self) -> f64 {
        let dlon = other.lon - self.lon;
        let dlat = other.lat - self.lat;
        dlon.atan2(dlat).to_degrees().rem_euclid(360.0)
    }

    /// True when both coordinates are finite numbers.
    pub const fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Detection profile
// ---------------------------------------------------------------------------

/// Normalized sensor-return strengths for a contact, each in `[0, 1]`.
///
/// `fused` is drawn at generation time as the mean of one radar-range and
/// one sonar-range sample; it is an independent draw, not an average of the
/// stored `radar` and `sonar` fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionProfile {
    /// Radar return strength.
    pub radar: f64,
    /// Acoustic return strength.
    pub sonar: f64,
    /// Combined-sensor confidence.
    pub fused: f64,
}

impl DetectionProfile {
    /// Build a profile with every component clamped into `[0, 1]`.
    /// A NaN component collapses to 0.
    pub const fn clamped(radar: f64, sonar: f64, fused: f64) -> Self {
        Self {
            radar: clamp_unit(radar),
            sonar: clamp_unit(sonar),
            fused: clamp_unit(fused),
        }
    }
}

const fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Category detail blocks
// ---------------------------------------------------------------------------

/// Extra state carried only by submarine contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmarineDetails {
    /// Boat class, e.g. "Kilo-class".
    pub class: String,
    /// Hull designation, e.g. "B-265".
    pub designation: String,
    /// Current depth in meters.
    pub depth_meters: u32,
    /// Whether the boat is running submerged. Submerged boats return a much
    /// weaker radar signature while sonar stays high.
    pub is_submerged: bool,
}

/// Extra state carried only by drone contacts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneDetails {
    /// The shore base the airframe launched from.
    pub home_base: Position,
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// One tracked entity in the traffic picture.
///
/// Contacts are created in bulk by the population generator and thereafter
/// mutated only by the kinematics step. They are never destroyed one at a
/// time, only regenerated en masse on session reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable identifier, unique within the session.
    pub id: ContactId,
    /// Contact category.
    pub kind: ContactKind,
    /// Display name, e.g. "Baltic Voyager" or "RFS Krasnodar".
    pub name: String,
    /// Flag state.
    pub flag: Flag,
    /// Operating company or service.
    pub operator: String,
    /// True for Russia-flagged contacts and for the small share of
    /// foreign-flagged hulls under Russian operation.
    pub is_russian: bool,
    /// Current coordinate.
    pub position: Position,
    /// Course over ground in `[0, 360)` degrees.
    pub heading_deg: f64,
    /// Speed through the water (or air) in knots; 0 marks a stationary
    /// contact that the kinematics step leaves untouched.
    pub speed_knots: f64,
    /// Overall length in meters.
    pub length_meters: u32,
    /// Estimated gross tonnage, derived from length and category.
    pub gross_tonnage: u32,
    /// Sensor-return profile.
    pub detection: DetectionProfile,
    /// Spawn-placement quality marker.
    pub placement: Placement,
    /// Submarine-only detail block.
    pub submarine: Option<SubmarineDetails>,
    /// Drone-only detail block.
    pub drone: Option<DroneDetails>,
}
