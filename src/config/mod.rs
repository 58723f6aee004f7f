//! Declarative run configuration
//!
//! A run is described by a YAML file holding the schedule parameters, the
//! synthetic acquisition the starting mask is drawn from, and the run length.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{Cli, Command, InfoArgs, OutputFormat, SimulateArgs, ValidateArgs};
pub use loader::{load_config, parse_config};
pub use schema::{AcquisitionSpec, RevealSpec, RunParams};
pub use validate::{validate_config, ValidationError};
