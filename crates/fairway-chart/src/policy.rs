//! Placement-policy records: what a region does to traversability.
//!
//! The geofence is a flat, ordered list of [`PlacementRule`] records. A
//! classification walks the list once and the first rule whose bounds
//! contain the query point decides the verdict. Swapping the scan for a
//! spatial index later would not change any caller.

use fairway_types::Position;
use serde::{Deserialize, Serialize};

use crate::bounds::RegionBounds;

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// The policy outcome for a coordinate, before any dice are rolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Unconditionally traversable.
    Water,
    /// Unconditionally blocked.
    Land,
    /// Traversable with the given probability; the caller rolls.
    WaterWithChance(f64),
}

// ---------------------------------------------------------------------------
// Rule effects
// ---------------------------------------------------------------------------

/// Which coordinate a narrow passage constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// The passage narrows north-south; distance is measured in latitude.
    Latitude,
    /// The passage narrows east-west; distance is measured in longitude.
    Longitude,
}

/// What a rule's rectangle does to a point inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RuleEffect {
    /// Verified open water; always traversable.
    OpenWater,
    /// A land mass. Points deeper than `edge_band` degrees from every edge
    /// are land; points within the band are water with
    /// `edge_water_chance`, which smears the blocky shoreline.
    LandMass {
        /// Width of the shoreline band in degrees.
        edge_band: f64,
        /// Traversability probability inside the band.
        edge_water_chance: f64,
    },
    /// Near-shore water that is only sometimes navigable.
    BufferedWater {
        /// Traversability probability anywhere in the rectangle.
        water_chance: f64,
    },
    /// A constricted waterway. Acceptance falls off linearly from 1.0 at
    /// the centerline to 0.0 at `half_width` degrees off it.
    NarrowPassage {
        /// Centerline coordinate on the constrained axis, degrees.
        centerline: f64,
        /// Distance from centerline at which acceptance reaches zero.
        half_width: f64,
        /// The constrained axis.
        axis: Axis,
    },
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// One named region record in the ordered geofence table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRule {
    /// Human-readable region name, used in diagnostics and validation
    /// errors.
    pub name: String,
    /// The rectangle the rule covers.
    pub bounds: RegionBounds,
    /// What the rule does to points inside the rectangle.
    pub effect: RuleEffect,
}

impl PlacementRule {
    /// The rule's verdict for a position, or `None` when the position lies
    /// outside the rule's rectangle and the scan should move on.
    pub const fn verdict_for(&self, position: Position) -> Option<Verdict> {
        if !self.bounds.contains(position) {
            return None;
        }
        Some(match self.effect {
            RuleEffect::OpenWater => Verdict::Water,
            RuleEffect::LandMass {
                edge_band,
                edge_water_chance,
            } => {
                if self.bounds.edge_distance(position) < edge_band {
                    Verdict::WaterWithChance(edge_water_chance)
                } else {
                    Verdict::Land
                }
            }
            RuleEffect::BufferedWater { water_chance } => {
                Verdict::WaterWithChance(water_chance)
            }
            RuleEffect::NarrowPassage {
                centerline,
                half_width,
                axis,
            } => {
                let coordinate = match axis {
                    Axis::Latitude => position.lat,
                    Axis::Longitude => position.lon,
                };
                let offset = (coordinate - centerline).abs();
                let acceptance = (1.0 - offset / half_width).clamp(0.0, 1.0);
                Verdict::WaterWithChance(acceptance)
            }
        })
    }

    /// True when the rule marks a land mass whose rectangle contains the
    /// position, ignoring the shoreline band. This is the deterministic
    /// "on land" test used for stuck detection.
    pub const fn is_land_hit(&self, position: Position) -> bool {
        matches!(self.effect, RuleEffect::LandMass { .. }) && self.bounds.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land_rule() -> PlacementRule {
        PlacementRule {
            name: "test island".to_string(),
            bounds: RegionBounds::new(56.0, 58.0, 18.0, 19.0),
            effect: RuleEffect::LandMass {
                edge_band: 0.1,
                edge_water_chance: 0.15,
            },
        }
    }

    #[test]
    fn land_interior_is_land() {
        let rule = land_rule();
        assert_eq!(
            rule.verdict_for(Position::new(18.5, 57.0)),
            Some(Verdict::Land)
        );
    }

    #[test]
    fn land_edge_band_is_probabilistic() {
        let rule = land_rule();
        let verdict = rule.verdict_for(Position::new(18.05, 57.0));
        assert_eq!(verdict, Some(Verdict::WaterWithChance(0.15)));
    }

    #[test]
    fn outside_bounds_defers() {
        let rule = land_rule();
        assert_eq!(rule.verdict_for(Position::new(20.0, 57.0)), None);
    }

    #[test]
    fn narrow_passage_falloff_is_linear() {
        let rule = PlacementRule {
            name: "test sound".to_string(),
            bounds: RegionBounds::new(56.0, 57.0, 16.0, 17.0),
            effect: RuleEffect::NarrowPassage {
                centerline: 16.5,
                half_width: 0.5,
                axis: Axis::Longitude,
            },
        };
        let at_center = rule.verdict_for(Position::new(16.5, 56.5));
        assert_eq!(at_center, Some(Verdict::WaterWithChance(1.0)));

        let off_center = rule.verdict_for(Position::new(16.75, 56.5));
        assert!(matches!(
            off_center,
            Some(Verdict::WaterWithChance(p)) if (p - 0.5).abs() < 1e-12
        ));

        let at_edge = rule.verdict_for(Position::new(17.0, 56.5));
        assert_eq!(at_edge, Some(Verdict::WaterWithChance(0.0)));
    }

    #[test]
    fn land_hit_ignores_edge_band() {
        let rule = land_rule();
        // Inside the band the verdict is probabilistic, but for stuck
        // detection any point inside the rectangle counts as land.
        assert!(rule.is_land_hit(Position::new(18.05, 57.0)));
        assert!(!rule.is_land_hit(Position::new(20.0, 57.0)));
    }
}
