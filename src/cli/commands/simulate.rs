//! Simulate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, OutputFormat, SimulateArgs};
use crate::simulate::{simulate, SimulationReport};

/// One-line summary printed after the table
pub fn format_summary(report: &SimulationReport) -> String {
    let last = report.last().map_or(report.initial_revealed, |row| row.revealed);
    format!(
        "{} iterations, {} growth events: {} → {} of {} samples revealed",
        report.iterations.len(),
        report.growth_events,
        report.initial_revealed,
        last,
        report.total_samples
    )
}

pub fn run_simulate(args: SimulateArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    if let Some(iterations) = args.iterations {
        spec.run.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        spec.run.seed = seed;
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Simulating {} iterations (threshold={}, step={}, thinning={}, seed={})",
            spec.run.iterations,
            spec.schedule.threshold,
            spec.schedule.step,
            spec.schedule.thinning,
            spec.run.seed
        ),
    );

    let report = simulate(&spec).map_err(|e| format!("Simulation failed: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            if level != LogLevel::Quiet {
                print!("{}", report.to_table());
            }
            log(level, LogLevel::Normal, &format_summary(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
