//! Enumeration types for the Fairway traffic picture.
//!
//! Closed sets for contact classification, flag state, and spawn-placement
//! quality. Everything here is plain data; behavior lives in the chart and
//! traffic crates.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Contact classification
// ---------------------------------------------------------------------------

/// The category of a tracked contact.
///
/// Surface kinds are drawn at generation time; submarines and drones are
/// fixed-roster categories with their own ID ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContactKind {
    // --- Surface vessels ---
    /// Container or general cargo vessel on a trade route.
    Commercial,
    /// Crude or product tanker.
    Tanker,
    /// Ferry or cruise vessel.
    Passenger,
    /// Fishing vessel, frequently stationary on grounds.
    Fishing,
    /// Naval surface combatant or auxiliary.
    Military,
    /// Russian-flagged naval surface unit, tracked as its own category.
    RussianFlagged,

    // --- Subsurface ---
    /// Diesel-electric attack submarine.
    Submarine,

    // --- Airborne ---
    /// Shore-launched surveillance drone.
    Drone,
}

impl ContactKind {
    /// Military-pattern movers: naval surface units, submarines, and drones.
    ///
    /// These share the wider speed envelope and the more erratic drift
    /// behavior; everything else moves like merchant traffic.
    pub const fn is_military_pattern(self) -> bool {
        matches!(
            self,
            Self::Military | Self::RussianFlagged | Self::Submarine | Self::Drone
        )
    }
}

// ---------------------------------------------------------------------------
// Flag states
// ---------------------------------------------------------------------------

/// Flag state of a contact. The nine states with a Baltic coastline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    /// Finland.
    Finland,
    /// Sweden.
    Sweden,
    /// Estonia.
    Estonia,
    /// Latvia.
    Latvia,
    /// Lithuania.
    Lithuania,
    /// Poland.
    Poland,
    /// Germany.
    Germany,
    /// Denmark.
    Denmark,
    /// Russia.
    Russia,
}

// ---------------------------------------------------------------------------
// Spawn placement quality
// ---------------------------------------------------------------------------

/// How a contact's initial position was obtained.
///
/// Generation degrades gracefully when it cannot place a contact with full
/// spacing inside its attempt budget; this marker records which rung of the
/// ladder the contact landed on, so downstream consumers know which tracks
/// still honor the minimum-separation guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Placed on traversable water with full minimum spacing from all
    /// previously placed contacts.
    Separated,
    /// Placed on traversable water after the spacing constraint was dropped.
    Relaxed,
    /// Placed at a fallback point in the designated safe zone.
    SafeFallback,
}
