//! Population generation with graded placement.
//!
//! Surface vessels sample weighted traffic lanes and walk a relaxation
//! ladder: separated placement first, then traversable-only, then a
//! safe-zone fallback. Submarines jitter around their patrol stations
//! and drones probe outward from their airbases toward open water.
//! Placement never fails; every degradation is counted and logged.

use fairway_chart::{Chart, drone_bases, patrol_stations};
use fairway_types::{
    Contact, ContactId, ContactKind, DRONE_ID_BASE, DroneDetails, Flag, Placement, Position,
    SUBMARINE_ID_BASE, SURFACE_ID_BASE, SubmarineDetails,
};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::attributes;
use crate::config::FleetConfig;
use crate::error::TrafficError;
use crate::naming;

/// Jitter applied east-west around a patrol station, in degrees.
const STATION_JITTER_LON: f64 = 0.25;
/// Jitter applied north-south around a patrol station, in degrees.
const STATION_JITTER_LAT: f64 = 0.15;
/// Samples taken around a patrol station before holding the station point.
const STATION_ATTEMPTS: u32 = 24;
/// Half-angle of the random cone around a drone's outbound bearing.
const DRONE_BEARING_JITTER_DEG: f64 = 45.0;
/// Spacing between successive probe points on a drone's outbound bearing.
const DRONE_PROBE_STEP_DEG: f64 = 0.25;
/// Probe points tried along a drone's outbound bearing.
const DRONE_PROBE_ATTEMPTS: u32 = 12;

/// Outcome of one population build.
#[derive(Debug, Clone)]
pub struct SpawnReport {
    /// Every generated contact, in placement order: surface vessels,
    /// then submarines, then drones.
    pub fleet: Vec<Contact>,
    /// Contacts placed without full pairwise spacing.
    pub relaxed_spacing: u32,
    /// Contacts that fell back to a safe-zone sample.
    pub safe_fallbacks: u32,
}

/// Build the full synthetic population: surface vessels, the submarine
/// patrol line, and the drone wings.
///
/// A fixed generator seed reproduces the same fleet; every random
/// choice flows through `rng`.
///
/// # Errors
///
/// Returns a [`TrafficError`] when the request itself is malformed:
/// unusable spacing, a zero attempt budget, an operator share outside
/// the unit interval, or more submarines than the roster holds.
/// Placement difficulty never errors.
pub fn generate_population(
    chart: &Chart,
    config: &FleetConfig,
    rng: &mut impl Rng,
) -> Result<SpawnReport, TrafficError> {
    validate_request(config)?;

    let mut builder = PopulationBuilder {
        chart,
        config,
        fleet: Vec::new(),
        relaxed_spacing: 0,
        safe_fallbacks: 0,
    };
    builder.spawn_surface(rng);
    builder.spawn_submarines(rng);
    builder.spawn_drones(rng);

    info!(
        contacts = builder.fleet.len(),
        relaxed_spacing = builder.relaxed_spacing,
        safe_fallbacks = builder.safe_fallbacks,
        "population generated"
    );

    Ok(SpawnReport {
        fleet: builder.fleet,
        relaxed_spacing: builder.relaxed_spacing,
        safe_fallbacks: builder.safe_fallbacks,
    })
}

fn validate_request(config: &FleetConfig) -> Result<(), TrafficError> {
    if !config.min_spacing_deg.is_finite() || config.min_spacing_deg < 0.0 {
        return Err(TrafficError::InvalidSpacing {
            value: config.min_spacing_deg,
        });
    }
    if config.placement_attempts == 0 {
        return Err(TrafficError::ZeroAttemptBudget);
    }
    if !(0.0..=1.0).contains(&config.russian_operator_share) {
        return Err(TrafficError::ShareOutOfRange {
            value: config.russian_operator_share,
        });
    }
    let available = u32::try_from(naming::SUBMARINE_ROSTER.len()).unwrap_or(u32::MAX);
    if config.submarine_count > available {
        return Err(TrafficError::SubmarineRosterExceeded {
            requested: config.submarine_count,
            available,
        });
    }
    Ok(())
}

/// True when `candidate` keeps the minimum spacing from every contact
/// already placed.
fn is_separated(candidate: Position, fleet: &[Contact], min_spacing: f64) -> bool {
    fleet
        .iter()
        .all(|contact| candidate.distance_to(contact.position) >= min_spacing)
}

struct PopulationBuilder<'a> {
    chart: &'a Chart,
    config: &'a FleetConfig,
    fleet: Vec<Contact>,
    relaxed_spacing: u32,
    safe_fallbacks: u32,
}

impl PopulationBuilder<'_> {
    // ---- surface vessels ----------------------------------------------

    fn spawn_surface(&mut self, rng: &mut impl Rng) {
        for index in 0..self.config.surface_count {
            let provenance =
                attributes::draw_provenance(self.config.russian_operator_share, rng);
            let name = naming::display_name(provenance.kind, provenance.is_russian, rng);
            let operator = naming::operator_name(provenance.is_russian, rng);
            let (position, placement) = self.place_surface_position(&name, rng);
            let heading_deg = attributes::heading_for_region(position, rng);
            let speed_knots = attributes::speed_for_kind(provenance.kind, rng);
            let length_meters = attributes::length_for_kind(provenance.kind, rng);
            self.fleet.push(Contact {
                id: ContactId::from_base(SURFACE_ID_BASE, index),
                kind: provenance.kind,
                name,
                flag: provenance.flag,
                operator,
                is_russian: provenance.is_russian,
                position,
                heading_deg,
                speed_knots,
                length_meters,
                gross_tonnage: attributes::gross_tonnage(provenance.kind, length_meters),
                detection: attributes::surface_detection(rng),
                placement,
                submarine: None,
                drone: None,
            });
        }
    }

    /// Walk the placement ladder for one surface vessel.
    ///
    /// The first rung samples weighted lanes and demands both water and
    /// pairwise spacing; the second drops the spacing requirement; the
    /// last rung samples a safe zone unconditionally.
    fn place_surface_position(
        &mut self,
        name: &str,
        rng: &mut impl Rng,
    ) -> (Position, Placement) {
        for _ in 0..self.config.placement_attempts {
            let Some(lane) = self.chart.pick_lane(rng) else {
                break;
            };
            let candidate = lane.bounds.sample(rng);
            if self.chart.is_traversable(candidate, rng)
                && is_separated(candidate, &self.fleet, self.config.min_spacing_deg)
            {
                return (candidate, Placement::Separated);
            }
        }
        for _ in 0..self.config.placement_attempts {
            let Some(lane) = self.chart.pick_lane(rng) else {
                break;
            };
            let candidate = lane.bounds.sample(rng);
            if self.chart.is_traversable(candidate, rng) {
                self.relaxed_spacing = self.relaxed_spacing.saturating_add(1);
                warn!(contact = name, "spacing relaxed after exhausting separated attempts");
                return (candidate, Placement::Relaxed);
            }
        }
        self.safe_fallbacks = self.safe_fallbacks.saturating_add(1);
        warn!(contact = name, "no traversable sample found, falling back to a safe zone");
        (self.chart.sample_safe_zone(rng), Placement::SafeFallback)
    }

    // ---- submarines ---------------------------------------------------

    fn spawn_submarines(&mut self, rng: &mut impl Rng) {
        let stations = patrol_stations();
        let count = usize::try_from(self.config.submarine_count).unwrap_or(usize::MAX);
        for (index, (station, boat)) in stations
            .iter()
            .zip(naming::SUBMARINE_ROSTER.iter())
            .take(count)
            .enumerate()
        {
            let position = self.place_near_station(station.position, rng);
            let placement = self.grade_patrol_placement(boat.name, position);
            let attrs = attributes::submarine_attributes(rng);
            let length_meters = attributes::length_for_kind(ContactKind::Submarine, rng);
            self.fleet.push(Contact {
                id: ContactId::from_base(
                    SUBMARINE_ID_BASE,
                    u32::try_from(index).unwrap_or(u32::MAX),
                ),
                kind: ContactKind::Submarine,
                name: format!("RFS {}", boat.name),
                flag: Flag::Russia,
                operator: naming::SUBMARINE_OPERATOR.to_string(),
                is_russian: true,
                position,
                heading_deg: rng.random_range(0.0..360.0),
                speed_knots: attributes::speed_for_kind(ContactKind::Submarine, rng),
                length_meters,
                gross_tonnage: attributes::gross_tonnage(ContactKind::Submarine, length_meters),
                detection: attrs.detection,
                placement,
                submarine: Some(SubmarineDetails {
                    class: boat.class.to_string(),
                    designation: boat.designation.to_string(),
                    depth_meters: attrs.depth_meters,
                    is_submerged: attrs.is_submerged,
                }),
                drone: None,
            });
        }
    }

    /// Sample jittered positions around a patrol station until one is
    /// traversable, holding the station point itself as a last resort.
    fn place_near_station(&self, station: Position, rng: &mut impl Rng) -> Position {
        for _ in 0..STATION_ATTEMPTS {
            let candidate = Position::new(
                station.lon + rng.random_range(-STATION_JITTER_LON..STATION_JITTER_LON),
                station.lat + rng.random_range(-STATION_JITTER_LAT..STATION_JITTER_LAT),
            );
            if self.chart.is_traversable(candidate, rng) {
                return candidate;
            }
        }
        debug!("station probes exhausted, holding the station point");
        station
    }

    /// Stations and launch bearings are fixed, so patrol units take their
    /// spacing marker from a check after the fact rather than a ladder.
    fn grade_patrol_placement(&mut self, name: &str, position: Position) -> Placement {
        if is_separated(position, &self.fleet, self.config.min_spacing_deg) {
            Placement::Separated
        } else {
            self.relaxed_spacing = self.relaxed_spacing.saturating_add(1);
            debug!(contact = name, "patrol placement inside the spacing envelope");
            Placement::Relaxed
        }
    }

    // ---- drones -------------------------------------------------------

    fn spawn_drones(&mut self, rng: &mut impl Rng) {
        let mut unit_index = 0_u32;
        for base in drone_bases() {
            for unit in 0..self.config.drones_per_base {
                let callsign = format!("UAV {}-{}", base.code, unit.saturating_add(1));
                let bearing = (base.position.bearing_to(self.chart.safe_centroid())
                    + rng.random_range(-DRONE_BEARING_JITTER_DEG..DRONE_BEARING_JITTER_DEG))
                .rem_euclid(360.0);
                let (position, fell_back) =
                    self.place_along_bearing(base.position, bearing, rng);
                let placement = if fell_back {
                    self.safe_fallbacks = self.safe_fallbacks.saturating_add(1);
                    warn!(
                        contact = %callsign,
                        "no water on the outbound bearing, launching from a safe zone"
                    );
                    Placement::SafeFallback
                } else {
                    self.grade_patrol_placement(&callsign, position)
                };
                let length_meters = attributes::length_for_kind(ContactKind::Drone, rng);
                self.fleet.push(Contact {
                    id: ContactId::from_base(DRONE_ID_BASE, unit_index),
                    kind: ContactKind::Drone,
                    name: callsign,
                    flag: base.flag,
                    operator: naming::DRONE_OPERATOR.to_string(),
                    is_russian: false,
                    position,
                    heading_deg: bearing,
                    speed_knots: attributes::speed_for_kind(ContactKind::Drone, rng),
                    length_meters,
                    gross_tonnage: attributes::gross_tonnage(ContactKind::Drone, length_meters),
                    detection: attributes::drone_detection(rng),
                    placement,
                    submarine: None,
                    drone: Some(DroneDetails {
                        home_base: base.position,
                    }),
                });
                unit_index = unit_index.saturating_add(1);
            }
        }
    }

    /// Probe points at increasing range along an outbound bearing until
    /// one is traversable. Returns the safe-zone fallback flag alongside
    /// the position.
    fn place_along_bearing(
        &self,
        origin: Position,
        bearing_deg: f64,
        rng: &mut impl Rng,
    ) -> (Position, bool) {
        let radians = bearing_deg.to_radians();
        for attempt in 1..=DRONE_PROBE_ATTEMPTS {
            let distance = DRONE_PROBE_STEP_DEG * f64::from(attempt);
            let candidate = Position::new(
                distance.mul_add(radians.sin(), origin.lon),
                distance.mul_add(radians.cos(), origin.lat),
            );
            if self.chart.is_traversable(candidate, rng) {
                return (candidate, false);
            }
        }
        (self.chart.sample_safe_zone(rng), true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fairway_chart::create_baltic_chart;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_chart() -> Chart {
        create_baltic_chart().unwrap()
    }

    #[test]
    fn population_matches_requested_composition() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let report = generate_population(&chart, &config, &mut rng).unwrap();

        assert_eq!(report.fleet.len(), 315);
        let submarines = report
            .fleet
            .iter()
            .filter(|c| c.kind == ContactKind::Submarine)
            .count();
        let drones = report
            .fleet
            .iter()
            .filter(|c| c.kind == ContactKind::Drone)
            .count();
        assert_eq!(submarines, 7);
        assert_eq!(drones, 8);

        // Identifier blocks by tier.
        assert_eq!(report.fleet.first().unwrap().id.into_inner(), 1);
        assert_eq!(report.fleet.get(299).unwrap().id.into_inner(), 300);
        assert_eq!(report.fleet.get(300).unwrap().id.into_inner(), 1001);
        assert_eq!(report.fleet.get(307).unwrap().id.into_inner(), 2001);
        assert_eq!(report.fleet.last().unwrap().id.into_inner(), 2008);
    }

    #[test]
    fn no_contact_starts_on_deterministic_land() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        for contact in &report.fleet {
            assert!(
                !chart.is_deterministic_land(contact.position),
                "{} spawned on land at ({}, {})",
                contact.name,
                contact.position.lon,
                contact.position.lat
            );
        }
    }

    #[test]
    fn separated_marker_guarantees_pairwise_spacing() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut rng = SmallRng::seed_from_u64(13);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        for (later_index, later) in report.fleet.iter().enumerate() {
            if later.placement != Placement::Separated {
                continue;
            }
            for earlier in report.fleet.iter().take(later_index) {
                let spacing = later.position.distance_to(earlier.position);
                assert!(
                    spacing >= config.min_spacing_deg,
                    "{} sits {spacing} deg from {}",
                    later.name,
                    earlier.name
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_identical_fleet() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut first_rng = SmallRng::seed_from_u64(99);
        let mut second_rng = SmallRng::seed_from_u64(99);
        let first = generate_population(&chart, &config, &mut first_rng).unwrap();
        let second = generate_population(&chart, &config, &mut second_rng).unwrap();
        assert_eq!(first.fleet, second.fleet);
        assert_eq!(first.relaxed_spacing, second.relaxed_spacing);
        assert_eq!(first.safe_fallbacks, second.safe_fallbacks);
    }

    #[test]
    fn submarines_follow_the_roster_in_station_order() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut rng = SmallRng::seed_from_u64(21);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        let boats: Vec<&Contact> = report
            .fleet
            .iter()
            .filter(|c| c.kind == ContactKind::Submarine)
            .collect();
        assert_eq!(boats.len(), naming::SUBMARINE_ROSTER.len());
        for (contact, roster) in boats.iter().zip(naming::SUBMARINE_ROSTER.iter()) {
            assert_eq!(contact.name, format!("RFS {}", roster.name));
            assert_eq!(contact.flag, Flag::Russia);
            assert!(contact.is_russian);
            assert_eq!(contact.operator, naming::SUBMARINE_OPERATOR);
            let details = contact.submarine.as_ref().unwrap();
            assert_eq!(details.designation, roster.designation);
            assert_eq!(details.class, roster.class);
            assert!((20..200).contains(&details.depth_meters));
            assert!(contact.drone.is_none());
        }
    }

    #[test]
    fn drones_launch_from_both_bases() {
        let chart = make_chart();
        let config = FleetConfig::default();
        let mut rng = SmallRng::seed_from_u64(31);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        let wings: Vec<&Contact> = report
            .fleet
            .iter()
            .filter(|c| c.kind == ContactKind::Drone)
            .collect();
        assert_eq!(wings.len(), 8);
        let gdynia = wings
            .iter()
            .filter(|c| c.name.starts_with("UAV GDY-"))
            .count();
        let turku = wings
            .iter()
            .filter(|c| c.name.starts_with("UAV TKU-"))
            .count();
        assert_eq!(gdynia, 4);
        assert_eq!(turku, 4);
        for contact in wings {
            assert_eq!(contact.operator, naming::DRONE_OPERATOR);
            assert!(!contact.is_russian);
            assert!(contact.drone.is_some());
            assert!(contact.submarine.is_none());
            assert!((0.0..360.0).contains(&contact.heading_deg));
        }
    }

    #[test]
    fn malformed_requests_are_rejected() {
        let chart = make_chart();
        let mut rng = SmallRng::seed_from_u64(1);

        let config = FleetConfig {
            min_spacing_deg: f64::NAN,
            ..FleetConfig::default()
        };
        let err = generate_population(&chart, &config, &mut rng).unwrap_err();
        assert!(matches!(err, TrafficError::InvalidSpacing { .. }));

        let config = FleetConfig {
            placement_attempts: 0,
            ..FleetConfig::default()
        };
        let err = generate_population(&chart, &config, &mut rng).unwrap_err();
        assert!(matches!(err, TrafficError::ZeroAttemptBudget));

        let config = FleetConfig {
            russian_operator_share: 1.5,
            ..FleetConfig::default()
        };
        let err = generate_population(&chart, &config, &mut rng).unwrap_err();
        assert!(matches!(err, TrafficError::ShareOutOfRange { .. }));

        let config = FleetConfig {
            submarine_count: 9,
            ..FleetConfig::default()
        };
        let err = generate_population(&chart, &config, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            TrafficError::SubmarineRosterExceeded {
                requested: 9,
                available: 7
            }
        ));
    }

    #[test]
    fn surface_count_scales_down_cleanly() {
        let chart = make_chart();
        let config = FleetConfig {
            surface_count: 10,
            ..FleetConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let report = generate_population(&chart, &config, &mut rng).unwrap();
        assert_eq!(report.fleet.len(), 25);
    }
}
