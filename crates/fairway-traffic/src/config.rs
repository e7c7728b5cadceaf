//! Typed fleet-composition settings.
//!
//! Mirrors the `fleet:` section of the engine configuration file. All
//! fields default to the standard Baltic picture of 300 surface
//! vessels, the full seven-boat submarine roster, and four drones per
//! airbase.

use serde::Deserialize;

/// Composition and placement settings for one generated fleet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FleetConfig {
    /// Number of surface vessels to place.
    #[serde(default = "default_surface_count")]
    pub surface_count: u32,

    /// Number of submarines to assign, drawn from the fixed roster in
    /// station order.
    #[serde(default = "default_submarine_count")]
    pub submarine_count: u32,

    /// Number of drones launched from each airbase.
    #[serde(default = "default_drones_per_base")]
    pub drones_per_base: u32,

    /// Minimum pairwise spacing in degrees for a placement to count as
    /// separated.
    #[serde(default = "default_min_spacing_deg")]
    pub min_spacing_deg: f64,

    /// Sampling attempts per vessel before spacing is relaxed.
    #[serde(default = "default_placement_attempts")]
    pub placement_attempts: u32,

    /// Chance that a vessel under a non-Russian flag still runs for a
    /// Russian operator.
    #[serde(default = "default_russian_operator_share")]
    pub russian_operator_share: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            surface_count: default_surface_count(),
            submarine_count: default_submarine_count(),
            drones_per_base: default_drones_per_base(),
            min_spacing_deg: default_min_spacing_deg(),
            placement_attempts: default_placement_attempts(),
            russian_operator_share: default_russian_operator_share(),
        }
    }
}

const fn default_surface_count() -> u32 {
    300
}

const fn default_submarine_count() -> u32 {
    7
}

const fn default_drones_per_base() -> u32 {
    4
}

const fn default_min_spacing_deg() -> f64 {
    0.2
}

const fn default_placement_attempts() -> u32 {
    300
}

const fn default_russian_operator_share() -> f64 {
    0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_standard_picture() {
        let config = FleetConfig::default();
        assert_eq!(config.surface_count, 300);
        assert_eq!(config.submarine_count, 7);
        assert_eq!(config.drones_per_base, 4);
        assert!(config.min_spacing_deg > 0.0);
        assert!(config.placement_attempts > 0);
    }
}
