//! Loading run specifications from YAML

use super::schema::RevealSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse and validate a YAML run specification.
pub fn parse_config(yaml: &str) -> Result<RevealSpec> {
    let spec: RevealSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;
    validate_config(&spec)?;
    Ok(spec)
}

/// Load, parse and validate a YAML run specification from disk.
///
/// # Example
///
/// ```no_run
/// use revelar::config::load_config;
///
/// let spec = load_config("schedule.yaml")?;
/// println!("step = {}", spec.schedule.step);
/// # Ok::<(), revelar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RevealSpec> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading config file {}", path.display()), e))?;
    parse_config(&yaml)
}
