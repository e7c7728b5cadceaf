//! Attribute derivation for generated contacts.
//!
//! Everything here is a pure draw: kind, flag, affiliation, heading,
//! speed, hull length, tonnage, and detection signatures are sampled
//! from a caller-supplied generator so that a fixed seed reproduces the
//! same fleet.

use fairway_types::{ContactKind, DetectionProfile, Flag, Position};
use rand::Rng;

// ---------------------------------------------------------------------------
// Kind, flag, and affiliation
// ---------------------------------------------------------------------------

const FLAGS: [Flag; 9] = [
    Flag::Finland,
    Flag::Sweden,
    Flag::Estonia,
    Flag::Latvia,
    Flag::Lithuania,
    Flag::Poland,
    Flag::Germany,
    Flag::Denmark,
    Flag::Russia,
];

const SURFACE_KINDS: [ContactKind; 5] = [
    ContactKind::Commercial,
    ContactKind::Military,
    ContactKind::Fishing,
    ContactKind::Passenger,
    ContactKind::Tanker,
];

/// Kind, flag, and affiliation drawn for one surface contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    /// Resolved contact kind.
    pub kind: ContactKind,
    /// Flag state.
    pub flag: Flag,
    /// Whether the contact is treated as Russian-affiliated.
    pub is_russian: bool,
}

/// Draw a surface kind uniformly from the five base categories.
pub fn draw_kind(rng: &mut impl Rng) -> ContactKind {
    let index = rng.random_range(0..SURFACE_KINDS.len());
    SURFACE_KINDS
        .get(index)
        .copied()
        .unwrap_or(ContactKind::Commercial)
}

/// Draw a flag state uniformly from the nine Baltic registries.
pub fn draw_flag(rng: &mut impl Rng) -> Flag {
    let index = rng.random_range(0..FLAGS.len());
    FLAGS.get(index).copied().unwrap_or(Flag::Finland)
}

/// Draw kind, flag, and affiliation for one surface contact.
///
/// A military draw under the Russian flag is promoted to the dedicated
/// Russian-flagged naval category. Otherwise the contact is Russian
/// when it flies the Russian flag or on an independent operator roll
/// at `russian_share`.
pub fn draw_provenance(russian_share: f64, rng: &mut impl Rng) -> Provenance {
    let kind = draw_kind(rng);
    let flag = draw_flag(rng);
    if kind == ContactKind::Military && flag == Flag::Russia {
        return Provenance {
            kind: ContactKind::RussianFlagged,
            flag,
            is_russian: true,
        };
    }
    let is_russian =
        flag == Flag::Russia || rng.random_bool(russian_share.clamp(0.0, 1.0));
    Provenance {
        kind,
        flag,
        is_russian,
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// Draw an initial heading biased by where the contact sits.
///
/// Traffic near the Danish straits runs mostly east-west, the Gulf of
/// Finland east-west, the Gulf of Bothnia and the Gulf of Riga
/// north-south, and the southern approaches toward or away from
/// Gdansk. Everywhere else the heading is uniform.
pub fn heading_for_region(position: Position, rng: &mut impl Rng) -> f64 {
    let lon = position.lon;
    let lat = position.lat;
    let heading: f64 = if lon < 14.0 {
        if rng.random_bool(0.7) {
            70.0 + rng.random_range(0.0..40.0)
        } else {
            250.0 + rng.random_range(0.0..40.0)
        }
    } else if lon > 23.0 && lat > 59.0 {
        if rng.random_bool(0.5) {
            80.0 + rng.random_range(0.0..30.0)
        } else {
            260.0 + rng.random_range(0.0..30.0)
        }
    } else if lon > 19.0 && lat > 60.0 {
        if rng.random_bool(0.5) {
            rng.random_range(0.0..30.0)
        } else {
            180.0 + rng.random_range(0.0..30.0)
        }
    } else if lon > 22.0 && lat > 56.5 && lat < 58.0 {
        if rng.random_bool(0.5) {
            rng.random_range(0.0..40.0)
        } else {
            180.0 + rng.random_range(0.0..40.0)
        }
    } else if lat < 56.0 && lon > 18.0 {
        if rng.random_bool(0.6) {
            140.0 + rng.random_range(0.0..40.0)
        } else {
            320.0 + rng.random_range(0.0..40.0)
        }
    } else {
        rng.random_range(0.0..360.0)
    };
    heading.rem_euclid(360.0)
}

// ---------------------------------------------------------------------------
// Speed, length, tonnage
// ---------------------------------------------------------------------------

/// Draw a whole-knot cruise speed for the given kind.
///
/// Fishing vessels idle at zero speed roughly a third of the time.
pub fn speed_for_kind(kind: ContactKind, rng: &mut impl Rng) -> f64 {
    match kind {
        ContactKind::Commercial | ContactKind::Tanker => f64::from(rng.random_range(10..18)),
        ContactKind::Passenger => f64::from(rng.random_range(15..25)),
        ContactKind::Military | ContactKind::RussianFlagged => {
            f64::from(rng.random_range(5..30))
        }
        ContactKind::Fishing => {
            if rng.random_bool(0.3) {
                0.0
            } else {
                f64::from(rng.random_range(5..12))
            }
        }
        ContactKind::Submarine => f64::from(rng.random_range(5..15)),
        ContactKind::Drone => f64::from(rng.random_range(40..80)),
    }
}

/// Draw a hull (or airframe) length in meters for the given kind.
pub fn length_for_kind(kind: ContactKind, rng: &mut impl Rng) -> u32 {
    match kind {
        ContactKind::Commercial | ContactKind::Tanker => rng.random_range(100..400),
        ContactKind::Military | ContactKind::RussianFlagged => rng.random_range(50..250),
        ContactKind::Submarine => rng.random_range(70..90),
        ContactKind::Drone => rng.random_range(8..15),
        ContactKind::Passenger | ContactKind::Fishing => rng.random_range(20..70),
    }
}

/// Tonnage coefficient for the given kind, in hundredths.
pub const fn tonnage_factor_percent(kind: ContactKind) -> u32 {
    match kind {
        ContactKind::Commercial | ContactKind::Tanker => 18,
        ContactKind::Military | ContactKind::RussianFlagged => 16,
        ContactKind::Passenger => 20,
        ContactKind::Fishing | ContactKind::Submarine | ContactKind::Drone => 12,
    }
}

/// Gross tonnage estimated from hull length squared, rounded to the
/// nearest ton.
pub const fn gross_tonnage(kind: ContactKind, length_meters: u32) -> u32 {
    let factor = tonnage_factor_percent(kind);
    length_meters
        .saturating_mul(length_meters)
        .saturating_mul(factor)
        .saturating_add(50)
        / 100
}

// ---------------------------------------------------------------------------
// Detection signatures
// ---------------------------------------------------------------------------

/// Draw the detection profile for a surface contact.
///
/// The fused channel is the mean of two fresh draws, not of the radar
/// and sonar values themselves, so the three channels stay independent.
pub fn surface_detection(rng: &mut impl Rng) -> DetectionProfile {
    let radar = rng.random_range(0.0..1.0);
    let sonar = rng.random_range(0.0..1.0);
    let fused = (rng.random_range(0.0..1.0) + rng.random_range(0.0..1.0)) / 2.0;
    DetectionProfile::clamped(radar, sonar, fused)
}

/// Depth, surfaced state, and detection profile drawn for one
/// submarine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmarineAttributes {
    /// Operating depth in meters.
    pub depth_meters: u32,
    /// Whether the boat is running submerged.
    pub is_submerged: bool,
    /// Detection profile consistent with the submerged state.
    pub detection: DetectionProfile,
}

fn submarine_radar(submerged: bool, rng: &mut impl Rng) -> f64 {
    if submerged {
        0.05 + rng.random_range(0.0..0.1)
    } else {
        0.3 + rng.random_range(0.0..0.2)
    }
}

fn submarine_sonar(rng: &mut impl Rng) -> f64 {
    0.6 + rng.random_range(0.0..0.4)
}

/// Draw depth, submerged state, and detection for one submarine.
///
/// Boats run submerged 70% of the time. Submerged boats return a much
/// weaker radar signature; sonar is strong either way.
pub fn submarine_attributes(rng: &mut impl Rng) -> SubmarineAttributes {
    let depth_meters = rng.random_range(20..200);
    let is_submerged = rng.random_bool(0.7);
    let radar = submarine_radar(is_submerged, rng);
    let sonar = submarine_sonar(rng);
    let fused = (submarine_radar(is_submerged, rng) + submarine_sonar(rng)) / 2.0;
    SubmarineAttributes {
        depth_meters,
        is_submerged,
        detection: DetectionProfile::clamped(radar, sonar, fused),
    }
}

/// Draw the detection profile for a drone: small radar return, almost
/// no acoustic signature.
pub fn drone_detection(rng: &mut impl Rng) -> DetectionProfile {
    let radar = rng.random_range(0.15..0.4);
    let sonar = rng.random_range(0.0..0.05);
    let fused = (rng.random_range(0.15..0.4) + rng.random_range(0.0..0.05)) / 2.0;
    DetectionProfile::clamped(radar, sonar, fused)
}
