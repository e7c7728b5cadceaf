//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `fairway-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and a loader that reads the file. Every field has
//! a default, so a missing file or a partial document still yields a
//! runnable setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use fairway_traffic::FleetConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `fairway-config.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the session generator; one seed fixes both the fleet
    /// and its trajectories.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Fleet composition and placement settings.
    #[serde(default)]
    pub fleet: FleetConfig,

    /// Clock settings.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Run-loop cadence and boundaries.
    #[serde(default)]
    pub run: RunConfig,

    /// Optional fleet snapshot output.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            fleet: FleetConfig::default(),
            clock: ClockConfig::default(),
            run: RunConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Clock configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClockConfig {
    /// Scale from wall seconds to simulation seconds.
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: default_speed_multiplier(),
        }
    }
}

/// Run-loop cadence and boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Stop after this many ticks (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Stop after this many wall-clock seconds (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,

    /// Delay between ticks in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Emit a fleet status report every N ticks (0 = never).
    #[serde(default = "default_report_every_ticks")]
    pub report_every_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: 0,
            max_real_time_seconds: 0,
            tick_interval_ms: default_tick_interval_ms(),
            report_every_ticks: default_report_every_ticks(),
        }
    }
}

/// Fleet snapshot output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnapshotConfig {
    /// Where to write the final fleet snapshot; `None` disables it.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

const fn default_seed() -> u64 {
    42
}

const fn default_speed_multiplier() -> f64 {
    1.0
}

const fn default_tick_interval_ms() -> u64 {
    5000
}

const fn default_report_every_ticks() -> u64 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_runnable() {
        let config = SimulationConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.fleet.surface_count, 300);
        assert_eq!(config.run.tick_interval_ms, 5000);
        assert!(config.snapshot.path.is_none());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
seed: 123

fleet:
  surface_count: 50
  submarine_count: 3
  drones_per_base: 2
  min_spacing_deg: 0.3
  placement_attempts: 100
  russian_operator_share: 0.1

clock:
  speed_multiplier: 2.5

run:
  max_ticks: 500
  max_real_time_seconds: 600
  tick_interval_ms: 1000
  report_every_ticks: 6

snapshot:
  path: fleet-snapshot.json
";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(SimulationConfig::default);

        assert_eq!(config.seed, 123);
        assert_eq!(config.fleet.surface_count, 50);
        assert_eq!(config.fleet.submarine_count, 3);
        assert!(config.clock.speed_multiplier > 2.0);
        assert_eq!(config.run.max_ticks, 500);
        assert_eq!(
            config.snapshot.path,
            Some(PathBuf::from("fleet-snapshot.json"))
        );
    }

    #[test]
    fn parse_minimal_yaml_keeps_defaults() {
        let yaml = "seed: 7\n";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(SimulationConfig::default);

        assert_eq!(config.seed, 7);
        assert_eq!(config.fleet.surface_count, 300);
        assert_eq!(config.run.report_every_ticks, 12);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let config = SimulationConfig::parse("fleet: [not, a, mapping]\n");
        assert!(config.is_err());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = SimulationConfig::from_file(Path::new("/nonexistent/fairway-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("fairway-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "failed to load project config: {config:?}");
        }
    }
}
