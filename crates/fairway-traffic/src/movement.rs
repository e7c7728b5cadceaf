//! Dead-reckoning kinematics with shoreline recovery.
//!
//! Each tick advances every moving contact along its heading, scaled by
//! elapsed seconds and the local latitude. A hull whose projected point
//! is not traversable stays put for the tick and recovers by probing
//! eight relative headings at extended range, falling back to a fixed
//! turn toward the safe centroid when everything ahead is blocked.
//! Airframes overfly the shoreline instead and are pulled back by the
//! distress check one tick later. Shoreline bands are stochastic, so a
//! blocked course can clear on a later tick without any state beyond
//! heading and speed.

use fairway_chart::Chart;
use fairway_types::{Contact, ContactKind, Position};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::StepError;

/// Degrees of latitude traversed per knot-second.
const KNOTS_TO_DEG_PER_SEC: f64 = 0.0003;
/// Elapsed time above which the whole step is skipped as stale.
const MAX_STEP_SECONDS: f64 = 5.0;
/// Range multiplier for recovery probes relative to the blocked step.
const PROBE_DISTANCE_FACTOR: f64 = 5.0;
/// Relative headings probed, in order, when the course ahead is blocked.
const PROBE_OFFSETS_DEG: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
/// Turn applied toward the safe centroid when every probe is blocked.
const RECOVERY_TURN_DEG: f64 = 45.0;
/// Speed floor after a blocked-course cut or a drift change, in knots.
const MIN_MANEUVER_SPEED_KNOTS: f64 = 1.0;
/// Speed ceiling after a drift change, in knots.
const MAX_DRIFT_SPEED_KNOTS: f64 = 30.0;

/// Per-tick accounting from one kinematics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Contacts whose position advanced.
    pub moved: u32,
    /// Zero-speed contacts left untouched.
    pub stationary: u32,
    /// Contacts reset to the safe centroid after a non-finite position.
    pub data_faults: u32,
    /// Drones redirected toward the safe centroid from distress.
    pub distress_redirects: u32,
    /// Blocked contacts that found a clear heading among the probes.
    pub recovered_headings: u32,
    /// Blocked contacts turned toward the safe centroid instead.
    pub centroid_turns: u32,
    /// Random course or speed changes applied after a clean move.
    pub drift_events: u32,
    /// True when the whole tick was dropped for a stale interval.
    pub skipped_stale: bool,
}

/// Advance every contact by `elapsed_seconds` of simulated time.
///
/// Intervals above [`MAX_STEP_SECONDS`] drop the whole tick rather than
/// teleporting the fleet; zero elapsed time leaves every contact
/// bit-identical.
///
/// # Errors
///
/// Returns [`StepError::InvalidElapsed`] when the interval is negative
/// or non-finite. No per-contact condition errors; bad positions reset
/// to the safe centroid and are counted as data faults.
pub fn step_fleet(
    fleet: &mut [Contact],
    chart: &Chart,
    elapsed_seconds: f64,
    rng: &mut impl Rng,
) -> Result<StepSummary, StepError> {
    if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
        return Err(StepError::InvalidElapsed {
            value: elapsed_seconds,
        });
    }
    if elapsed_seconds > MAX_STEP_SECONDS {
        debug!(elapsed_seconds, "stale interval, holding the fleet for this tick");
        return Ok(StepSummary {
            skipped_stale: true,
            ..StepSummary::default()
        });
    }

    let mut summary = StepSummary::default();
    if elapsed_seconds <= 0.0 {
        return Ok(summary);
    }
    for contact in fleet.iter_mut() {
        step_contact(contact, chart, elapsed_seconds, rng, &mut summary);
    }
    Ok(summary)
}

fn step_contact(
    contact: &mut Contact,
    chart: &Chart,
    elapsed_seconds: f64,
    rng: &mut impl Rng,
    summary: &mut StepSummary,
) {
    if !contact.position.is_finite() {
        warn!(
            contact = %contact.name,
            "non-finite position, resetting to the safe centroid"
        );
        contact.position = chart.safe_centroid();
        summary.data_faults = summary.data_faults.saturating_add(1);
        return;
    }

    // A drone over land or outside the envelope turns for home water and
    // keeps flying; terrain cannot block an airframe.
    if contact.kind == ContactKind::Drone && chart.is_distressed(contact.position) {
        contact.heading_deg = contact.position.bearing_to(chart.safe_centroid());
        contact.position = projected(
            contact.position,
            contact.heading_deg,
            contact.speed_knots,
            elapsed_seconds,
        );
        summary.distress_redirects = summary.distress_redirects.saturating_add(1);
        summary.moved = summary.moved.saturating_add(1);
        return;
    }

    if contact.speed_knots <= 0.0 {
        summary.stationary = summary.stationary.saturating_add(1);
        return;
    }

    let candidate = projected(
        contact.position,
        contact.heading_deg,
        contact.speed_knots,
        elapsed_seconds,
    );
    // Airframes skip the water test in flight; the distress check above
    // corrects any coastline crossing on the following tick.
    if contact.kind == ContactKind::Drone || chart.is_traversable(candidate, rng) {
        contact.position = candidate;
        summary.moved = summary.moved.saturating_add(1);
        apply_drift(contact, elapsed_seconds, rng, summary);
        return;
    }

    // Blocked: hold position this tick, pick a new course, slow down.
    if let Some(heading) = probe_for_water(contact, chart, elapsed_seconds, rng) {
        contact.heading_deg = heading;
        summary.recovered_headings = summary.recovered_headings.saturating_add(1);
    } else {
        let target = contact.position.bearing_to(chart.safe_centroid());
        let diff = signed_course_difference(contact.heading_deg, target);
        contact.heading_deg =
            wrap_heading(RECOVERY_TURN_DEG.mul_add(diff.signum(), contact.heading_deg));
        summary.centroid_turns = summary.centroid_turns.saturating_add(1);
    }
    contact.speed_knots = (contact.speed_knots * 0.5).max(MIN_MANEUVER_SPEED_KNOTS);
}

/// Probe the eight relative headings at extended range and return the
/// first one whose projected point is traversable.
fn probe_for_water(
    contact: &Contact,
    chart: &Chart,
    elapsed_seconds: f64,
    rng: &mut impl Rng,
) -> Option<f64> {
    let probe_seconds = elapsed_seconds * PROBE_DISTANCE_FACTOR;
    for offset in PROBE_OFFSETS_DEG {
        let heading = wrap_heading(contact.heading_deg + offset);
        let candidate = projected(
            contact.position,
            heading,
            contact.speed_knots,
            probe_seconds,
        );
        if chart.is_traversable(candidate, rng) {
            return Some(heading);
        }
    }
    None
}

/// Occasional course and speed wander after a clean move. Military
/// pattern contacts wander twice as often and may also change speed.
fn apply_drift(
    contact: &mut Contact,
    elapsed_seconds: f64,
    rng: &mut impl Rng,
    summary: &mut StepSummary,
) {
    if contact.kind.is_military_pattern() {
        let chance = (0.01 * elapsed_seconds).clamp(0.0, 1.0);
        if rng.random_bool(chance) {
            contact.heading_deg =
                wrap_heading(contact.heading_deg + rng.random_range(-30.0..30.0));
            summary.drift_events = summary.drift_events.saturating_add(1);
            if rng.random_bool(0.3) {
                let factor = 0.7 + rng.random_range(0.0..0.6);
                contact.speed_knots = (contact.speed_knots * factor)
                    .clamp(MIN_MANEUVER_SPEED_KNOTS, MAX_DRIFT_SPEED_KNOTS);
            }
        }
    } else {
        let chance = (0.005 * elapsed_seconds).clamp(0.0, 1.0);
        if rng.random_bool(chance) {
            contact.heading_deg =
                wrap_heading(contact.heading_deg + rng.random_range(-10.0..10.0));
            summary.drift_events = summary.drift_events.saturating_add(1);
        }
    }
}

/// Dead-reckon from `position` along `heading_deg` for the given time,
/// with east-west distance corrected for the local latitude.
fn projected(
    position: Position,
    heading_deg: f64,
    speed_knots: f64,
    elapsed_seconds: f64,
) -> Position {
    let distance = speed_knots * KNOTS_TO_DEG_PER_SEC * elapsed_seconds;
    let radians = heading_deg.to_radians();
    let lat_scale = position.lat.to_radians().cos().max(0.1);
    Position::new(
        (distance / lat_scale).mul_add(radians.sin(), position.lon),
        distance.mul_add(radians.cos(), position.lat),
    )
}

/// Normalize a heading into `[0, 360)`.
fn wrap_heading(heading_deg: f64) -> f64 {
    heading_deg.rem_euclid(360.0)
}

/// Shortest signed turn from `heading_deg` to `target_deg`, in
/// `[-180, 180)` degrees.
fn signed_course_difference(heading_deg: f64, target_deg: f64) -> f64 {
    (target_deg - heading_deg + 540.0).rem_euclid(360.0) - 180.0
}
