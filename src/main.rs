use std::path::Path;

use clap::Parser;

use bac_simulator_rs::cli::{Cli, Command};
use bac_simulator_rs::config::SimulationConfig;
use bac_simulator_rs::data::{load_log, write_csv, write_json};
use bac_simulator_rs::engine::simulate;
use bac_simulator_rs::error::Result;
use bac_simulator_rs::interface::{display_series, display_summary};
use bac_simulator_rs::logging;
use bac_simulator_rs::models::BacSeries;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SimulationConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Simulate { csv, json } => {
            cmd_simulate(&cli.file, &config, csv.as_deref(), json.as_deref())
        }
        Command::Summary => cmd_summary(&cli.file, &config),
        Command::Check => cmd_check(&cli.file),
    }
}

/// Load the drink log and run the engine on it.
fn run_simulation(file: &Path, config: &SimulationConfig) -> Result<BacSeries> {
    let log = load_log(file)?;
    tracing::info!(file = ?file, intakes = log.intakes.len(), "loaded drink log");
    simulate(&log.profile, &log.intakes, &config.engine)
}

/// Print the full BAC table, optionally exporting it.
fn cmd_simulate(
    file: &Path,
    config: &SimulationConfig,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let series = run_simulation(file, config)?;
    let time_format = &config.report.time_format;

    display_series(&series, time_format);
    display_summary(&series, time_format);

    if let Some(path) = csv {
        write_csv(&series, path)?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = json {
        write_json(&series, path)?;
        println!("JSON written to {}", path.display());
    }

    Ok(())
}

/// Print only the peak and sober time.
fn cmd_summary(file: &Path, config: &SimulationConfig) -> Result<()> {
    let series = run_simulation(file, config)?;
    display_summary(&series, &config.report.time_format);
    Ok(())
}

/// Validate the drink log.
fn cmd_check(file: &Path) -> Result<()> {
    let log = load_log(file)?;

    println!(
        "Profile: {}, {} kg, {} cm, absorption {}/h, interval {} min",
        log.profile.sex(),
        log.profile.weight_kg(),
        log.profile.height_cm(),
        log.profile.absorption_rate(),
        log.profile.interval_minutes()
    );

    if log.intakes.is_empty() {
        println!("No intakes recorded.");
        return Ok(());
    }

    let total: f64 = log.intakes.iter().map(|i| i.grams).sum();
    println!("{} intakes, {:.1} g ethanol total", log.intakes.len(), total);
    Ok(())
}
