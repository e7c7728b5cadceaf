//! Name, operator, and roster pools for generated contacts.
//!
//! Surface-vessel names are synthesized from affiliation-conditioned
//! prefix/suffix/number pools; submarines come from a fixed seven-boat
//! roster; drone callsigns are built from their base code by the spawner.

use fairway_types::ContactKind;
use rand::Rng;

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

const RUSSIAN_PREFIXES: &[&str] = &[
    "Admiral",
    "Kapitan",
    "Vostok",
    "Sibir",
    "Moskva",
    "Sankt-Peterburg",
    "Akademik",
];

const RUSSIAN_SUFFIXES: &[&str] = &[
    "Kuznetsov",
    "Nakhimov",
    "Gorshkov",
    "Lazarev",
    "Kasatonov",
    "Ustinov",
];

const WESTERN_PREFIXES: &[&str] = &[
    "Northern", "Baltic", "Sea", "Atlantic", "Pacific", "Star", "Pioneer",
];

const WESTERN_SUFFIXES: &[&str] = &[
    "Adventurer",
    "Explorer",
    "Navigator",
    "Voyager",
    "Mariner",
    "Trader",
    "Express",
];

const SHIP_NUMBERS: &[&str] = &["I", "II", "III", "IV", "V", "1", "2", "3", "4", "5"];

const RUSSIAN_OPERATORS: &[&str] = &[
    "Sovcomflot",
    "Gazprom Fleet",
    "Rosmorport",
    "Russian Navy",
    "Rosneft",
];

const COMMERCIAL_OPERATORS: &[&str] = &[
    "Maersk",
    "MSC",
    "CMA CGM",
    "Hapag-Lloyd",
    "ONE",
    "Evergreen",
    "COSCO",
    "Yang Ming",
    "HMM",
    "Grimaldi",
    "DFDS",
    "Stena Line",
    "Tallink",
    "Viking Line",
];

/// Operator string for every submarine contact.
pub const SUBMARINE_OPERATOR: &str = "Russian Navy";

/// Operator string for every drone contact.
pub const DRONE_OPERATOR: &str = "Baltic Air Wing";

// ---------------------------------------------------------------------------
// Submarine roster
// ---------------------------------------------------------------------------

/// One boat in the fixed submarine roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmarineRosterEntry {
    /// Boat name without the fleet prefix.
    pub name: &'static str,
    /// Boat class.
    pub class: &'static str,
    /// Hull designation.
    pub designation: &'static str,
}

/// The seven boats assigned to the Baltic patrol stations, in station
/// order.
pub const SUBMARINE_ROSTER: &[SubmarineRosterEntry] = &[
    SubmarineRosterEntry {
        name: "Krasnodar",
        class: "Kilo-class",
        designation: "B-265",
    },
    SubmarineRosterEntry {
        name: "Novorossiysk",
        class: "Kilo-class",
        designation: "B-261",
    },
    SubmarineRosterEntry {
        name: "Rostov-on-Don",
        class: "Kilo-class",
        designation: "B-237",
    },
    SubmarineRosterEntry {
        name: "Stary Oskol",
        class: "Kilo-class",
        designation: "B-262",
    },
    SubmarineRosterEntry {
        name: "Velikiy Novgorod",
        class: "Improved Kilo-class",
        designation: "B-268",
    },
    SubmarineRosterEntry {
        name: "Kolpino",
        class: "Improved Kilo-class",
        designation: "B-271",
    },
    SubmarineRosterEntry {
        name: "Sankt Peterburg",
        class: "Lada-class",
        designation: "B-585",
    },
];

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Pick one entry from a pool. Empty pools yield an empty string rather
/// than panicking; the pools above are all non-empty.
fn pick<'a>(pool: &[&'a str], rng: &mut impl Rng) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    let index = rng.random_range(0..pool.len());
    pool.get(index).copied().unwrap_or("")
}

/// Synthesize a vessel name from the affiliation's pools.
///
/// Style rolls are sequential: 30% of names pair a prefix with a suffix,
/// half of the remainder pair a prefix with a ship number, and the rest
/// are a single word from either pool.
pub fn vessel_name(russian: bool, rng: &mut impl Rng) -> String {
    let (prefixes, suffixes) = if russian {
        (RUSSIAN_PREFIXES, RUSSIAN_SUFFIXES)
    } else {
        (WESTERN_PREFIXES, WESTERN_SUFFIXES)
    };

    if rng.random_bool(0.3) {
        let prefix = pick(prefixes, rng);
        let suffix = pick(suffixes, rng);
        return format!("{prefix} {suffix}");
    }
    if rng.random_bool(0.5) {
        let prefix = pick(prefixes, rng);
        let number = pick(SHIP_NUMBERS, rng);
        return format!("{prefix} {number}");
    }
    if rng.random_bool(0.5) {
        pick(prefixes, rng).to_string()
    } else {
        pick(suffixes, rng).to_string()
    }
}

/// Full display name for a surface contact, with the fleet prefix for
/// Russian-affiliated combatants, open or covert.
pub fn display_name(kind: ContactKind, russian: bool, rng: &mut impl Rng) -> String {
    let base = vessel_name(russian, rng);
    let naval = kind == ContactKind::RussianFlagged || (kind == ContactKind::Military && russian);
    if naval {
        format!("RFS {base}")
    } else {
        base
    }
}

/// Operating company for a surface contact.
pub fn operator_name(russian: bool, rng: &mut impl Rng) -> String {
    if russian {
        pick(RUSSIAN_OPERATORS, rng).to_string()
    } else {
        pick(COMMERCIAL_OPERATORS, rng).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn roster_designations_are_unique() {
        let mut seen: Vec<&str> = SUBMARINE_ROSTER.iter().map(|b| b.designation).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SUBMARINE_ROSTER.len());
        assert_eq!(SUBMARINE_ROSTER.len(), 7);
    }

    #[test]
    fn names_are_never_empty() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(!vessel_name(true, &mut rng).is_empty());
            assert!(!vessel_name(false, &mut rng).is_empty());
        }
    }

    #[test]
    fn russian_combatants_carry_fleet_prefix() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let name = display_name(ContactKind::RussianFlagged, true, &mut rng);
            assert!(name.starts_with("RFS "), "{name}");
        }
        // A covert Russian operator marks a military hull the same way.
        let covert = display_name(ContactKind::Military, true, &mut rng);
        assert!(covert.starts_with("RFS "));
        let plain = display_name(ContactKind::Military, false, &mut rng);
        assert!(!plain.starts_with("RFS "));
        let merchant = display_name(ContactKind::Commercial, true, &mut rng);
        assert!(!merchant.starts_with("RFS "));
    }

    #[test]
    fn name_styles_vary_under_seeded_draws() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut with_space = 0_u32;
        let mut single = 0_u32;
        for _ in 0..300 {
            if vessel_name(false, &mut rng).contains(' ') {
                with_space = with_space.saturating_add(1);
            } else {
                single = single.saturating_add(1);
            }
        }
        // Both two-word and single-word styles should show up.
        assert!(with_space > 50);
        assert!(single > 50);
    }

    #[test]
    fn operators_come_from_the_right_pool() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let russian = operator_name(true, &mut rng);
            assert!(RUSSIAN_OPERATORS.contains(&russian.as_str()));
            let western = operator_name(false, &mut rng);
            assert!(COMMERCIAL_OPERATORS.contains(&western.as_str()));
        }
    }
}
