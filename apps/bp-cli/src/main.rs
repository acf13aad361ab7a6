mod error;
mod scenario;

use bp_sim::{BrakingRecord, FrictionPad, step};
use clap::{Parser, Subcommand};
use error::CliResult;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(about = "BrakePad CLI - friction pad thermal simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run a braking scenario and export its time history
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate a single step from the initial state
    Step {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            output,
        } => cmd_run(&scenario_path, output.as_deref()),
        Commands::Step { scenario_path } => cmd_step(&scenario_path),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = scenario::load_yaml(scenario_path)?;
    let params = scenario.validate()?;

    let pad = FrictionPad::new(params, scenario.initial_state())?;
    if let Some(limit) = pad.stability_limit(&scenario.inputs_at(0.0)) {
        println!("  Stability limit: {:.3e} s", limit.value);
        if pad.timestep().value > limit.value {
            warn!(
                dt = pad.timestep().value,
                limit = limit.value,
                "timestep exceeds the explicit stability limit"
            );
        }
    }
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_run(scenario_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let scenario = scenario::load_yaml(scenario_path)?;
    let params = scenario.validate()?;
    let mut pad = FrictionPad::new(params, scenario.initial_state())?;

    info!(scenario = %scenario.name, "running braking scenario");
    let record = bp_sim::run_braking(
        &mut pad,
        |t, _| scenario.inputs_at(t),
        &scenario.braking_options(),
    )?;

    let csv = to_csv(&record);
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} time points to {} ({} steps, {} cutbacks)",
            record.t.len(),
            path.display(),
            record.steps,
            record.cutbacks
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_step(scenario_path: &Path) -> CliResult<()> {
    let scenario = scenario::load_yaml(scenario_path)?;
    let params = scenario.validate()?;

    let (state, report) = step(&scenario.initial_state(), &params, &scenario.inputs_at(0.0))?;

    println!("Step report:");
    println!("  Converged:  {}", report.converged);
    println!("  Stop:       {:?}", report.stop_reason);
    println!("  Iterations: {}", report.iterations);
    println!("  Residual:   {:.3e}", report.final_residual);
    println!("\nPad state:");
    println!("  Temperature:      {:.6} K", state.temperature.value);
    println!("  Friction coeff.:  {:.6}", state.friction_coefficient);
    println!("  Friction force:   {:.6} N", state.friction_force.value);
    println!("  Heat rate pad:    {:.6} W", state.heat_rate_pad.value);
    println!("  Heat rate track:  {:.6} W", state.heat_rate_track.value);
    println!("  Convection:       {:.6} W", state.heat_rate_convection.value);
    println!("  Conduction:       {:.6} W", state.heat_rate_conduction.value);
    Ok(())
}

fn to_csv(record: &BrakingRecord) -> String {
    let mut csv = String::from(
        "time_s,temperature_k,friction_coefficient,friction_force_n,\
         heat_rate_pad_w,heat_rate_track_w,heat_rate_convection_w,heat_rate_conduction_w\n",
    );
    for (t, s) in record.t.iter().zip(&record.states) {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{}",
            t,
            s.temperature.value,
            s.friction_coefficient,
            s.friction_force.value,
            s.heat_rate_pad.value,
            s.heat_rate_track.value,
            s.heat_rate_convection.value,
            s.heat_rate_conduction.value
        );
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::units::k;
    use bp_sim::PadState;

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let record = BrakingRecord {
            t: vec![0.0, 0.01],
            states: vec![PadState::initial(k(320.0)), PadState::initial(k(321.0))],
            cutbacks: 0,
            steps: 1,
        };
        let csv = to_csv(&record);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time_s,temperature_k"));
        assert_eq!(lines[0].split(',').count(), 8);
        assert!(lines[2].starts_with("0.01,321,"));
    }
}
