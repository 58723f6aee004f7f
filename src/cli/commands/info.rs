//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat};
use crate::schedule::reveal_fraction;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!(
                "Schedule: warm-up through iteration {}, growth every {} iterations",
                spec.schedule.threshold, spec.schedule.step
            );
            let first = reveal_fraction(0, spec.schedule.step)
                .map_err(|e| format!("Config error: {e}"))?;
            println!(
                "Reveal fraction per epoch: {first:.3} → 0.000 ({})",
                spec.schedule.thinning
            );
            println!("Acquisition: {:?}", spec.acquisition.shape);
            println!("Decimation: {}", spec.acquisition.decimation);
            println!("Iterations: {}", spec.run.iterations);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
