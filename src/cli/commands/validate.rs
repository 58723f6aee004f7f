//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, RevealSpec, ValidateArgs};

/// Format schedule configuration as a string
pub fn format_schedule_info(spec: &RevealSpec) -> String {
    let schedule = &spec.schedule;
    [
        format!("  Threshold: {}", schedule.threshold),
        format!("  Step: {}", schedule.step),
        format!("  Dilation iterations: {}", schedule.dilation_iterations),
        format!("  Thinning: {}", schedule.thinning),
    ]
    .join("\n")
}

/// Format acquisition configuration as a string
pub fn format_acquisition_info(spec: &RevealSpec) -> String {
    let samples: usize = spec.acquisition.shape.iter().product();
    [
        format!("  Shape: {:?} ({samples} samples)", spec.acquisition.shape),
        format!("  Decimation: {}", spec.acquisition.decimation),
    ]
    .join("\n")
}

/// Format run configuration as a string
pub fn format_run_info(spec: &RevealSpec) -> String {
    format!("  Iterations: {}\n  Seed: {}", spec.run.iterations, spec.run.seed)
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &RevealSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_schedule_info(spec));
    println!();
    println!("{}", format_acquisition_info(spec));
    println!();
    println!("{}", format_run_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    // load_config validates before returning
    let spec = load_config(&args.config).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&spec);
    }

    Ok(())
}
