//! Traffic engine binary for the Baltic simulation.
//!
//! This is the main entry point that wires together the chart, the
//! population generator, the simulation clock, and operator controls.
//! It loads configuration, initializes all subsystems, and runs the
//! simulation loop until a termination condition is met.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `fairway-config.yaml`
//! 3. Build the Baltic chart (envelope, land rules, lanes, safe zones)
//! 4. Create the simulation clock
//! 5. Generate the starting population (surface fleet, submarines, drones)
//! 6. Create operator state from run bounds
//! 7. Run the simulation loop
//! 8. Write the final fleet snapshot and log the result

mod error;
mod report;
mod snapshot;

use std::path::Path;
use std::sync::Arc;

use fairway_chart::create_baltic_chart;
use fairway_core::clock::SimulationClock;
use fairway_core::config::SimulationConfig;
use fairway_core::operator::OperatorState;
use fairway_core::runner;
use fairway_core::tick::SimulationState;
use fairway_traffic::generate_population;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report::StatusReportCallback;

/// Application entry point for the traffic engine.
///
/// Initializes all subsystems and runs the simulation loop. Returns
/// an error code on failure.
///
/// # Errors
///
/// Returns an error if any initialization step or the simulation itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("fairway-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.seed,
        surface_count = config.fleet.surface_count,
        submarine_count = config.fleet.submarine_count,
        drones_per_base = config.fleet.drones_per_base,
        tick_interval_ms = config.run.tick_interval_ms,
        "Configuration loaded"
    );

    // 3. Build the chart.
    let chart = create_baltic_chart()?;
    info!(
        rules = chart.rules().len(),
        lanes = chart.lanes().len(),
        "Baltic chart built"
    );

    // 4. Create the simulation clock.
    let clock = SimulationClock::new(config.clock.speed_multiplier)?;
    info!(
        speed_multiplier = config.clock.speed_multiplier,
        "Simulation clock initialized"
    );

    // 5. Generate the starting population.
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let spawn = generate_population(&chart, &config.fleet, &mut rng)?;
    info!(
        contacts = spawn.fleet.len(),
        relaxed_spacing = spawn.relaxed_spacing,
        safe_fallbacks = spawn.safe_fallbacks,
        "Starting population generated"
    );

    // 6. Create operator state.
    let operator = Arc::new(OperatorState::new(&config.run));
    info!(
        max_ticks = operator.max_ticks(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Operator state initialized"
    );

    // 7. Run the simulation.
    let mut state = SimulationState::new(clock, chart, spawn.fleet, rng);
    let mut callback = StatusReportCallback::new(config.run.report_every_ticks);

    info!("Simulation state assembled, entering tick loop");

    let result = runner::run_simulation(&mut state, &operator, &mut callback).await?;

    // 8. Write the snapshot and log results.
    runner::log_simulation_end(&result);

    if let Some(ref path) = config.snapshot.path {
        snapshot::write_fleet_snapshot(path, state.fleet(), state.tick())?;
        info!(path = %path.display(), "Final fleet snapshot written");
    }

    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "fairway-engine shutdown complete"
    );

    Ok(())
}

/// Load the main simulation configuration from `fairway-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let config_path = Path::new("fairway-config.yaml");
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}
