//! Canonical Baltic operating-area tables.
//!
//! Everything is a coarse rectangle: nine land masses, eight shipping
//! channels, six coastal buffers, two narrow passages, and two verified
//! safe zones, plus 24 weighted traffic lanes, seven submarine patrol
//! stations, and two drone shore bases. The rectangles deliberately trade
//! coastline fidelity for a table a person can read and audit.

use fairway_types::{Flag, Position};
use serde::{Deserialize, Serialize};

use crate::bounds::RegionBounds;
use crate::chart::{Chart, TrafficLane};
use crate::error::ChartError;
use crate::policy::{Axis, PlacementRule, RuleEffect};

// ---------------------------------------------------------------------------
// Canonical constants
// ---------------------------------------------------------------------------

/// Outer operating envelope; beyond it everything classifies as land.
pub const BALTIC_ENVELOPE: RegionBounds = RegionBounds::new(54.0, 66.0, 9.0, 30.0);

/// Open-water reference point that boundary recovery steers toward.
pub const SAFE_CENTROID: Position = Position::new(20.0, 58.5);

/// Width of the shoreline band inside each land mass, degrees.
pub const LAND_EDGE_BAND: f64 = 0.1;

/// Traversability probability inside a shoreline band.
pub const LAND_EDGE_WATER_CHANCE: f64 = 0.15;

/// Traversability probability inside a coastal buffer.
pub const COASTAL_BUFFER_WATER_CHANCE: f64 = 0.2;

// ---------------------------------------------------------------------------
// Fixed installations
// ---------------------------------------------------------------------------

/// A fixed submarine loiter station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolStation {
    /// Station name, e.g. "Gotland deep".
    pub name: String,
    /// Nominal loiter coordinate.
    pub position: Position,
}

/// A shore base that launches surveillance drones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneBase {
    /// Base name.
    pub name: String,
    /// Three-letter code used in airframe callsigns.
    pub code: String,
    /// Flag state operating the base.
    pub flag: Flag,
    /// Base coordinate; sits on charted land by design of the launch
    /// logic, which probes outward for water.
    pub position: Position,
}

// ---------------------------------------------------------------------------
// Row builders
// ---------------------------------------------------------------------------

/// Build a land-mass rule with the canonical shoreline band.
fn land(name: &str, south: f64, north: f64, west: f64, east: f64) -> PlacementRule {
    PlacementRule {
        name: name.to_string(),
        bounds: RegionBounds::new(south, north, west, east),
        effect: RuleEffect::LandMass {
            edge_band: LAND_EDGE_BAND,
            edge_water_chance: LAND_EDGE_WATER_CHANCE,
        },
    }
}

/// Build an unconditional open-water rule.
fn channel(name: &str, south: f64, north: f64, west: f64, east: f64) -> PlacementRule {
    PlacementRule {
        name: name.to_string(),
        bounds: RegionBounds::new(south, north, west, east),
        effect: RuleEffect::OpenWater,
    }
}

/// Build a coastal-buffer rule with the canonical water chance.
fn buffer(name: &str, south: f64, north: f64, west: f64, east: f64) -> PlacementRule {
    PlacementRule {
        name: name.to_string(),
        bounds: RegionBounds::new(south, north, west, east),
        effect: RuleEffect::BufferedWater {
            water_chance: COASTAL_BUFFER_WATER_CHANCE,
        },
    }
}

/// Build a weighted traffic lane.
fn lane(name: &str, south: f64, north: f64, west: f64, east: f64, weight: u32) -> TrafficLane {
    TrafficLane {
        name: name.to_string(),
        bounds: RegionBounds::new(south, north, west, east),
        weight,
    }
}

/// Build a patrol station.
fn station(name: &str, lon: f64, lat: f64) -> PatrolStation {
    PatrolStation {
        name: name.to_string(),
        position: Position::new(lon, lat),
    }
}

// ---------------------------------------------------------------------------
// The chart
// ---------------------------------------------------------------------------

/// Assemble and validate the canonical Baltic chart.
///
/// Rule order is the scan priority: land masses first, then shipping
/// channels, coastal buffers, narrow passages, and finally the verified
/// safe zones. The first rule containing a point decides its verdict.
///
/// # Errors
///
/// Returns a [`ChartError`] if any static table fails validation; with the
/// tables below that would be a programming error.
#[allow(clippy::too_many_lines)] // One row per charted region; splitting would hide the table.
pub fn create_baltic_chart() -> Result<Chart, ChartError> {
    let rules = vec![
        // Land masses, scanned first.
        land("southern Sweden", 55.0, 59.5, 12.5, 15.5),
        land("Finland", 59.7, 65.5, 21.0, 30.0),
        land("Estonia", 57.5, 59.7, 23.0, 28.5),
        land("Latvia and Lithuania", 55.5, 57.5, 21.0, 28.0),
        land("Poland inland", 54.0, 55.5, 15.0, 19.5),
        land("Germany and Denmark inland", 54.0, 56.0, 9.0, 12.0),
        land("Gotland", 56.8, 58.0, 18.0, 19.2),
        land("Aland islands", 59.7, 60.5, 19.3, 21.3),
        land("Bornholm", 54.9, 55.3, 14.7, 15.2),
        // Shipping channels: guaranteed water.
        channel("main basin", 55.5, 59.0, 16.5, 22.0),
        channel("Gulf of Finland lane", 59.3, 60.2, 22.5, 28.0),
        channel("Stockholm approach", 58.7, 59.5, 17.5, 19.5),
        channel("Riga approach", 56.8, 58.0, 22.5, 24.5),
        channel("Helsinki-Tallinn corridor", 59.2, 59.9, 24.0, 25.5),
        channel("western Baltic lane", 54.5, 56.0, 12.0, 15.0),
        channel("Kattegat", 56.0, 57.5, 10.5, 12.0),
        channel("Gulf of Bothnia lane", 60.5, 63.5, 18.5, 21.5),
        // Coastal buffers: navigable with reduced probability.
        buffer("Swedish coast", 55.0, 59.5, 15.5, 16.0),
        buffer("Finnish coast", 59.7, 65.5, 20.0, 21.0),
        buffer("Estonian coast", 57.5, 59.7, 22.0, 23.0),
        buffer("Latvian and Lithuanian coast", 55.5, 57.5, 20.0, 21.0),
        buffer("Polish coast", 54.0, 55.5, 14.0, 15.0),
        buffer("German and Danish coast", 54.0, 56.0, 12.0, 12.5),
        // Narrow passages: acceptance falls off linearly from the
        // centerline. Where a passage overlaps a channel or buffer, the
        // earlier rule wins by scan order.
        PlacementRule {
            name: "Gulf of Finland entrance".to_string(),
            bounds: RegionBounds::new(59.0, 60.0, 21.5, 22.5),
            effect: RuleEffect::NarrowPassage {
                centerline: 59.5,
                half_width: 0.5,
                axis: Axis::Latitude,
            },
        },
        PlacementRule {
            name: "Kalmar Sound".to_string(),
            bounds: RegionBounds::new(56.4, 57.2, 16.2, 16.8),
            effect: RuleEffect::NarrowPassage {
                centerline: 16.5,
                half_width: 0.3,
                axis: Axis::Longitude,
            },
        },
        // Verified safe zones, scanned last.
        channel("east of Gotland safe zone", 56.5, 58.5, 19.4, 20.5),
        channel("northern basin safe zone", 58.8, 59.3, 19.5, 21.5),
    ];

    // The same rectangles double as fallback-placement sample targets.
    // They are kept clear of every land rectangle.
    let safe_zones = vec![
        RegionBounds::new(56.5, 58.5, 19.4, 20.5),
        RegionBounds::new(58.8, 59.3, 19.5, 21.5),
    ];

    Chart::new(
        BALTIC_ENVELOPE,
        rules,
        traffic_lanes(),
        safe_zones,
        SAFE_CENTROID,
    )
}

/// The weighted lane table seed traffic is dispersed into.
pub fn traffic_lanes() -> Vec<TrafficLane> {
    vec![
        lane("Danish Straits entrance", 54.5, 55.2, 10.8, 13.0, 5),
        lane("east of Denmark", 55.0, 55.8, 12.8, 14.5, 4),
        lane("southern Sweden coast", 55.3, 56.2, 14.5, 16.5, 4),
        lane("midway to Gotland", 55.0, 56.0, 16.5, 18.5, 3),
        lane("north of Gotland", 57.0, 58.2, 18.5, 20.0, 4),
        lane("Gulf of Finland approach", 58.5, 59.5, 20.0, 22.0, 3),
        lane("Gulf of Finland west", 59.2, 59.8, 22.0, 24.5, 5),
        lane("Gulf of Finland east", 59.7, 60.2, 24.5, 28.0, 4),
        lane("Helsinki roads", 60.0, 60.5, 24.5, 25.0, 3),
        lane("Turku approach", 60.2, 60.5, 22.0, 22.5, 3),
        lane("Malmo roads", 55.3, 56.3, 12.5, 13.0, 3),
        lane("Stockholm archipelago", 58.5, 59.5, 16.5, 18.5, 3),
        lane("Gdansk bay", 54.3, 54.8, 18.3, 19.0, 3),
        lane("Rostock approach", 54.0, 54.5, 13.0, 14.5, 3),
        lane("central Baltic", 56.0, 58.0, 17.0, 20.0, 5),
        lane("eastern Baltic", 57.5, 59.5, 19.0, 22.0, 5),
        lane("southern Bothnia", 60.0, 62.0, 18.0, 21.0, 4),
        lane("northern Bothnia", 62.0, 65.0, 18.0, 23.0, 3),
        lane("western Baltic", 54.0, 56.0, 12.0, 15.0, 4),
        lane("south-central Baltic", 54.0, 57.0, 15.0, 18.0, 5),
        lane("southern Baltic", 54.0, 55.5, 18.0, 20.0, 3),
        lane("west of Gotland", 56.5, 58.0, 15.0, 17.0, 3),
        lane("east of Gotland", 57.0, 58.5, 20.0, 22.0, 3),
        lane("Gulf of Riga", 57.0, 58.5, 22.0, 24.0, 3),
    ]
}

/// Submarine loiter stations across the basin.
///
/// The Gdansk approach and Danish straits stations are nudged off the
/// coarse Poland and Sweden land rectangles so that falling back to the
/// raw station coordinate never parks a boat on deterministic land.
pub fn patrol_stations() -> Vec<PatrolStation> {
    vec![
        station("Gulf of Finland approach", 26.2, 59.7),
        station("central Baltic", 19.3, 56.8),
        station("Stockholm approach", 18.9, 58.9),
        station("Gotland deep", 20.1, 57.3),
        station("Kaliningrad patrol", 19.6, 55.2),
        station("Gdansk approach", 19.7, 54.8),
        station("Danish straits", 12.3, 55.3),
    ]
}

/// Shore bases that launch the drone wing.
pub fn drone_bases() -> Vec<DroneBase> {
    vec![
        DroneBase {
            name: "Gdynia".to_string(),
            code: "GDY".to_string(),
            flag: Flag::Poland,
            position: Position::new(18.55, 54.50),
        },
        DroneBase {
            name: "Turku".to_string(),
            code: "TKU".to_string(),
            flag: Flag::Finland,
            position: Position::new(22.30, 60.45),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::policy::Verdict;

    #[test]
    fn canonical_tables_validate() {
        assert!(create_baltic_chart().is_ok());
    }

    #[test]
    fn central_basin_is_open_water() {
        let chart = create_baltic_chart().unwrap();
        assert_eq!(chart.evaluate(Position::new(19.5, 57.5)), Verdict::Water);
        assert_eq!(chart.evaluate(SAFE_CENTROID), Verdict::Water);
    }

    #[test]
    fn gotland_interior_is_land() {
        let chart = create_baltic_chart().unwrap();
        assert_eq!(chart.evaluate(Position::new(18.6, 57.4)), Verdict::Land);
    }

    #[test]
    fn gotland_shoreline_band_is_probabilistic() {
        let chart = create_baltic_chart().unwrap();
        assert_eq!(
            chart.evaluate(Position::new(18.05, 57.4)),
            Verdict::WaterWithChance(LAND_EDGE_WATER_CHANCE)
        );
    }

    #[test]
    fn coastal_buffer_is_probabilistic() {
        let chart = create_baltic_chart().unwrap();
        assert_eq!(
            chart.evaluate(Position::new(15.7, 57.0)),
            Verdict::WaterWithChance(COASTAL_BUFFER_WATER_CHANCE)
        );
    }

    #[test]
    fn kalmar_sound_acceptance_falls_off_westward() {
        let chart = create_baltic_chart().unwrap();
        // East of the centerline the main basin channel wins by scan
        // order; west of it the passage decides.
        let verdict = chart.evaluate(Position::new(16.35, 56.8));
        assert!(matches!(
            verdict,
            Verdict::WaterWithChance(p) if (p - 0.5).abs() < 1e-9
        ));
        assert_eq!(chart.evaluate(Position::new(16.6, 56.8)), Verdict::Water);
    }

    #[test]
    fn finland_entrance_funnels_by_latitude() {
        let chart = create_baltic_chart().unwrap();
        // Probe west of the Estonian coast buffer, which starts at 22.0
        // and would otherwise win the scan.
        let center = chart.evaluate(Position::new(21.75, 59.5));
        assert_eq!(center, Verdict::WaterWithChance(1.0));
        let off = chart.evaluate(Position::new(21.75, 59.1));
        assert!(matches!(
            off,
            Verdict::WaterWithChance(p) if (p - 0.2).abs() < 1e-9
        ));
    }

    #[test]
    fn safe_zones_are_deterministic_water() {
        let chart = create_baltic_chart().unwrap();
        // Corners and centers of both zones.
        for position in [
            Position::new(19.4, 56.5),
            Position::new(20.5, 58.5),
            Position::new(19.95, 57.5),
            Position::new(19.5, 58.8),
            Position::new(21.4, 59.25),
            Position::new(20.5, 59.05),
        ] {
            assert_eq!(chart.evaluate(position), Verdict::Water, "{position:?}");
        }
    }

    #[test]
    fn drone_bases_sit_on_charted_land() {
        let chart = create_baltic_chart().unwrap();
        for base in drone_bases() {
            assert!(chart.is_deterministic_land(base.position), "{}", base.name);
        }
    }

    #[test]
    fn patrol_stations_avoid_deterministic_land() {
        let chart = create_baltic_chart().unwrap();
        for station in patrol_stations() {
            assert!(
                !chart.is_deterministic_land(station.position),
                "{}",
                station.name
            );
        }
    }

    #[test]
    fn lane_table_matches_expected_size() {
        assert_eq!(traffic_lanes().len(), 24);
        let total: u32 = traffic_lanes().iter().map(|l| l.weight).sum();
        assert_eq!(total, 88);
    }
}
