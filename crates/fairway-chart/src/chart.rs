//! The chart: validated geofence tables plus spawn-support queries.
//!
//! A [`Chart`] owns the operating envelope, the ordered placement rules,
//! the weighted traffic lanes, and the safe-zone rectangles. Construction
//! validates every table and fails fast on defects; afterwards all queries
//! are infallible.

use fairway_types::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounds::RegionBounds;
use crate::error::ChartError;
use crate::policy::{Axis, PlacementRule, RuleEffect, Verdict};

/// A weighted rectangle that seed traffic is dispersed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLane {
    /// Human-readable lane name.
    pub name: String,
    /// The rectangle traffic is scattered across.
    pub bounds: RegionBounds,
    /// Selection weight; higher means more traffic seeds here.
    pub weight: u32,
}

/// Validated geofence and spawn tables for one operating area.
///
/// Deliberately not deserializable: every chart goes through [`Chart::new`]
/// so the invariants hold for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Chart {
    /// Outer operating envelope; everything beyond it is land.
    envelope: RegionBounds,
    /// Ordered rule table; first containing rule decides.
    rules: Vec<PlacementRule>,
    /// Weighted dispersal lanes for seed traffic.
    lanes: Vec<TrafficLane>,
    /// Verified open-water rectangles used for fallback placement.
    safe_zones: Vec<RegionBounds>,
    /// Fixed recovery reference point in open water.
    safe_centroid: Position,
    /// Cached sum of lane weights.
    total_lane_weight: u32,
}

impl Chart {
    /// Build a chart from its tables, validating everything up front.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] naming the offending record when any
    /// rectangle is inverted, any probability leaves `[0, 1]`, any passage
    /// is degenerate, the lane table is empty or carries zero/overflowing
    /// weight, no safe zone exists, or the centroid is outside the
    /// envelope.
    pub fn new(
        envelope: RegionBounds,
        rules: Vec<PlacementRule>,
        lanes: Vec<TrafficLane>,
        safe_zones: Vec<RegionBounds>,
        safe_centroid: Position,
    ) -> Result<Self, ChartError> {
        if !envelope.is_ordered() {
            return Err(ChartError::InvertedBounds {
                record: "operating envelope".to_string(),
            });
        }

        for rule in &rules {
            validate_rule(rule)?;
        }

        if lanes.is_empty() {
            return Err(ChartError::EmptyLaneTable);
        }
        let mut total_lane_weight = 0_u32;
        for lane in &lanes {
            if !lane.bounds.is_ordered() {
                return Err(ChartError::InvertedBounds {
                    record: lane.name.clone(),
                });
            }
            if lane.weight == 0 {
                return Err(ChartError::ZeroLaneWeight {
                    lane: lane.name.clone(),
                });
            }
            total_lane_weight = total_lane_weight
                .checked_add(lane.weight)
                .ok_or(ChartError::LaneWeightOverflow)?;
        }

        if safe_zones.is_empty() {
            return Err(ChartError::EmptySafeZones);
        }
        for zone in &safe_zones {
            if !zone.is_ordered() {
                return Err(ChartError::InvertedBounds {
                    record: "safe zone".to_string(),
                });
            }
        }

        if !envelope.contains(safe_centroid) {
            return Err(ChartError::CentroidOutsideEnvelope {
                lat: safe_centroid.lat,
                lon: safe_centroid.lon,
            });
        }

        debug!(
            rules = rules.len(),
            lanes = lanes.len(),
            safe_zones = safe_zones.len(),
            "Chart tables validated"
        );

        Ok(Self {
            envelope,
            rules,
            lanes,
            safe_zones,
            safe_centroid,
            total_lane_weight,
        })
    }

    // -------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------

    /// The deterministic policy verdict for a coordinate.
    ///
    /// Non-finite coordinates and anything outside the envelope are land.
    /// Otherwise the ordered rule table is scanned once and the first rule
    /// containing the point decides; open water is the default when no
    /// rule matches.
    pub fn evaluate(&self, position: Position) -> Verdict {
        if !position.is_finite() {
            return Verdict::Land;
        }
        if !self.envelope.contains(position) {
            return Verdict::Land;
        }
        for rule in &self.rules {
            if let Some(verdict) = rule.verdict_for(position) {
                return verdict;
            }
        }
        Verdict::Water
    }

    /// Whether the coordinate is traversable, rolling the dice for
    /// probabilistic verdicts. Repeated calls at the same shoreline point
    /// may disagree; that softening is intentional.
    pub fn is_traversable(&self, position: Position, rng: &mut impl Rng) -> bool {
        match self.evaluate(position) {
            Verdict::Water => true,
            Verdict::Land => false,
            Verdict::WaterWithChance(chance) => rng.random_bool(chance.clamp(0.0, 1.0)),
        }
    }

    /// Whether the policy verdict is unconditional land. Stable across
    /// calls, unlike [`Chart::is_traversable`].
    pub fn is_deterministic_land(&self, position: Position) -> bool {
        matches!(self.evaluate(position), Verdict::Land)
    }

    /// Deterministic distress test for airborne contacts: the position is
    /// outside the envelope or inside a land-mass rectangle (shoreline
    /// band included).
    pub fn is_distressed(&self, position: Position) -> bool {
        if !position.is_finite() || !self.envelope.contains(position) {
            return true;
        }
        self.rules.iter().any(|rule| rule.is_land_hit(position))
    }

    // -------------------------------------------------------------------
    // Spawn support
    // -------------------------------------------------------------------

    /// Pick a traffic lane by weight.
    pub fn pick_lane(&self, rng: &mut impl Rng) -> Option<&TrafficLane> {
        if self.total_lane_weight == 0 {
            return None;
        }
        let draw = rng.random_range(0..self.total_lane_weight);
        let mut cumulative = 0_u32;
        for lane in &self.lanes {
            cumulative = cumulative.saturating_add(lane.weight);
            if draw < cumulative {
                return Some(lane);
            }
        }
        self.lanes.last()
    }

    /// Draw a uniform position inside one of the safe zones.
    ///
    /// Falls back to the safe centroid if the zone table were ever empty;
    /// construction guarantees it is not.
    pub fn sample_safe_zone(&self, rng: &mut impl Rng) -> Position {
        if self.safe_zones.is_empty() {
            return self.safe_centroid;
        }
        let index = rng.random_range(0..self.safe_zones.len());
        self.safe_zones
            .get(index)
            .map_or(self.safe_centroid, |zone| zone.sample(rng))
    }

    /// The fixed open-water recovery point.
    pub const fn safe_centroid(&self) -> Position {
        self.safe_centroid
    }

    /// The outer operating envelope.
    pub const fn envelope(&self) -> RegionBounds {
        self.envelope
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &[PlacementRule] {
        &self.rules
    }

    /// The weighted lane table.
    pub fn lanes(&self) -> &[TrafficLane] {
        &self.lanes
    }
}

fn validate_rule(rule: &PlacementRule) -> Result<(), ChartError> {
    if !rule.bounds.is_ordered() {
        return Err(ChartError::InvertedBounds {
            record: rule.name.clone(),
        });
    }
    match rule.effect {
        RuleEffect::OpenWater => Ok(()),
        RuleEffect::LandMass {
            edge_band,
            edge_water_chance,
        } => {
            if !edge_band.is_finite() || edge_band < 0.0 {
                return Err(ChartError::UnusableEdgeBand {
                    record: rule.name.clone(),
                    value: edge_band,
                });
            }
            validate_probability(&rule.name, edge_water_chance)
        }
        RuleEffect::BufferedWater { water_chance } => {
            validate_probability(&rule.name, water_chance)
        }
        RuleEffect::NarrowPassage {
            centerline,
            half_width,
            axis,
        } => {
            if !half_width.is_finite() || half_width <= 0.0 {
                return Err(ChartError::UnusableHalfWidth {
                    record: rule.name.clone(),
                    value: half_width,
                });
            }
            let (low, high) = match axis {
                Axis::Latitude => (rule.bounds.south, rule.bounds.north),
                Axis::Longitude => (rule.bounds.west, rule.bounds.east),
            };
            if centerline < low || centerline > high {
                return Err(ChartError::CenterlineOutsideBounds {
                    record: rule.name.clone(),
                    value: centerline,
                });
            }
            Ok(())
        }
    }
}

fn validate_probability(record: &str, value: f64) -> Result<(), ChartError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ChartError::ProbabilityOutOfRange {
            record: record.to_string(),
            value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn test_envelope() -> RegionBounds {
        RegionBounds::new(54.0, 66.0, 9.0, 30.0)
    }

    fn land(name: &str, bounds: RegionBounds) -> PlacementRule {
        PlacementRule {
            name: name.to_string(),
            bounds,
            effect: RuleEffect::LandMass {
                edge_band: 0.1,
                edge_water_chance: 0.15,
            },
        }
    }

    fn minimal_chart(rules: Vec<PlacementRule>) -> Result<Chart, ChartError> {
        Chart::new(
            test_envelope(),
            rules,
            vec![TrafficLane {
                name: "test lane".to_string(),
                bounds: RegionBounds::new(56.0, 58.0, 18.0, 20.0),
                weight: 1,
            }],
            vec![RegionBounds::new(56.5, 58.5, 18.5, 20.5)],
            Position::new(20.0, 58.5),
        )
    }

    #[test]
    fn default_verdict_is_water() {
        let chart = minimal_chart(Vec::new()).unwrap();
        assert_eq!(chart.evaluate(Position::new(20.0, 57.0)), Verdict::Water);
    }

    #[test]
    fn outside_envelope_is_land() {
        let chart = minimal_chart(Vec::new()).unwrap();
        assert_eq!(chart.evaluate(Position::new(5.0, 57.0)), Verdict::Land);
        assert_eq!(chart.evaluate(Position::new(20.0, 70.0)), Verdict::Land);
    }

    #[test]
    fn non_finite_is_land() {
        let chart = minimal_chart(Vec::new()).unwrap();
        assert_eq!(
            chart.evaluate(Position::new(f64::NAN, 57.0)),
            Verdict::Land
        );
        assert_eq!(
            chart.evaluate(Position::new(20.0, f64::INFINITY)),
            Verdict::Land
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // A land mass overlapped by a later open-water rule: land wins
        // because it comes first in the table.
        let overlap = RegionBounds::new(56.0, 58.0, 18.0, 19.0);
        let rules = vec![
            land("island", overlap),
            PlacementRule {
                name: "channel across island".to_string(),
                bounds: overlap,
                effect: RuleEffect::OpenWater,
            },
        ];
        let chart = minimal_chart(rules).unwrap();
        assert_eq!(chart.evaluate(Position::new(18.5, 57.0)), Verdict::Land);
    }

    #[test]
    fn inverted_rule_bounds_rejected() {
        let result = minimal_chart(vec![land(
            "backwards island",
            RegionBounds::new(58.0, 56.0, 18.0, 19.0),
        )]);
        assert!(matches!(
            result,
            Err(ChartError::InvertedBounds { record }) if record == "backwards island"
        ));
    }

    #[test]
    fn out_of_range_probability_rejected() {
        let result = minimal_chart(vec![PlacementRule {
            name: "bad buffer".to_string(),
            bounds: RegionBounds::new(56.0, 57.0, 18.0, 19.0),
            effect: RuleEffect::BufferedWater { water_chance: 1.5 },
        }]);
        assert!(matches!(
            result,
            Err(ChartError::ProbabilityOutOfRange { value, .. }) if value > 1.0
        ));
    }

    #[test]
    fn degenerate_passage_rejected() {
        let result = minimal_chart(vec![PlacementRule {
            name: "flat sound".to_string(),
            bounds: RegionBounds::new(56.0, 57.0, 16.0, 17.0),
            effect: RuleEffect::NarrowPassage {
                centerline: 16.5,
                half_width: 0.0,
                axis: Axis::Longitude,
            },
        }]);
        assert!(matches!(result, Err(ChartError::UnusableHalfWidth { .. })));
    }

    #[test]
    fn empty_lane_table_rejected() {
        let result = Chart::new(
            test_envelope(),
            Vec::new(),
            Vec::new(),
            vec![RegionBounds::new(56.5, 58.5, 18.5, 20.5)],
            Position::new(20.0, 58.5),
        );
        assert!(matches!(result, Err(ChartError::EmptyLaneTable)));
    }

    #[test]
    fn zero_weight_lane_rejected() {
        let result = Chart::new(
            test_envelope(),
            Vec::new(),
            vec![TrafficLane {
                name: "dead lane".to_string(),
                bounds: RegionBounds::new(56.0, 58.0, 18.0, 20.0),
                weight: 0,
            }],
            vec![RegionBounds::new(56.5, 58.5, 18.5, 20.5)],
            Position::new(20.0, 58.5),
        );
        assert!(matches!(result, Err(ChartError::ZeroLaneWeight { .. })));
    }

    #[test]
    fn centroid_must_sit_inside_envelope() {
        let result = Chart::new(
            test_envelope(),
            Vec::new(),
            vec![TrafficLane {
                name: "test lane".to_string(),
                bounds: RegionBounds::new(56.0, 58.0, 18.0, 20.0),
                weight: 1,
            }],
            vec![RegionBounds::new(56.5, 58.5, 18.5, 20.5)],
            Position::new(40.0, 58.5),
        );
        assert!(matches!(
            result,
            Err(ChartError::CentroidOutsideEnvelope { .. })
        ));
    }

    #[test]
    fn lane_picks_follow_weights() {
        let chart = Chart::new(
            test_envelope(),
            Vec::new(),
            vec![
                TrafficLane {
                    name: "heavy".to_string(),
                    bounds: RegionBounds::new(56.0, 57.0, 18.0, 19.0),
                    weight: 9,
                },
                TrafficLane {
                    name: "light".to_string(),
                    bounds: RegionBounds::new(57.0, 58.0, 18.0, 19.0),
                    weight: 1,
                },
            ],
            vec![RegionBounds::new(56.5, 58.5, 18.5, 20.5)],
            Position::new(20.0, 58.5),
        )
        .unwrap();

        let mut rng = SmallRng::seed_from_u64(7);
        let mut heavy = 0_u32;
        for _ in 0..1000 {
            if chart.pick_lane(&mut rng).map(|lane| lane.name.as_str()) == Some("heavy") {
                heavy = heavy.saturating_add(1);
            }
        }
        // Expected ~900 of 1000; allow a generous band.
        assert!(heavy > 800, "heavy lane picked only {heavy} times");
    }

    #[test]
    fn safe_zone_samples_are_traversable() {
        let chart = minimal_chart(Vec::new()).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..100 {
            let point = chart.sample_safe_zone(&mut rng);
            assert!(!chart.is_deterministic_land(point));
        }
    }

    #[test]
    fn distress_covers_land_and_envelope() {
        let chart = minimal_chart(vec![land(
            "island",
            RegionBounds::new(56.0, 58.0, 18.0, 19.0),
        )])
        .unwrap();

        assert!(chart.is_distressed(Position::new(18.5, 57.0)));
        // Shoreline band still counts as distress.
        assert!(chart.is_distressed(Position::new(18.02, 57.0)));
        assert!(chart.is_distressed(Position::new(5.0, 57.0)));
        assert!(!chart.is_distressed(Position::new(20.0, 57.0)));
    }
}
