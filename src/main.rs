//! Revelar CLI
//!
//! Inspect and simulate mask revelation schedules.
//!
//! # Usage
//!
//! ```bash
//! # Simulate a schedule
//! revelar simulate schedule.yaml
//!
//! # Simulate with overrides, JSON report
//! revelar simulate schedule.yaml --iterations 200 --seed 7 --format json
//!
//! # Validate config
//! revelar validate schedule.yaml --detailed
//!
//! # Show config info
//! revelar info schedule.yaml
//! ```

use clap::Parser;
use revelar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
