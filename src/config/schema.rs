//! YAML schema for declarative schedule configuration

use crate::schedule::ScheduleParams;
use serde::{Deserialize, Serialize};

fn default_iterations() -> usize {
    100
}

fn default_seed() -> u64 {
    42
}

/// Complete revelation run specification
///
/// ```yaml
/// schedule:
///   threshold: 10
///   step: 5
/// acquisition:
///   shape: [64, 32]
///   decimation: 0.5
/// run:
///   iterations: 40
///   seed: 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Growth schedule
    pub schedule: ScheduleParams,

    /// Synthetic acquisition the starting mask is drawn from
    pub acquisition: AcquisitionSpec,

    /// Simulation length and seed
    #[serde(default)]
    pub run: RunParams,
}

/// Acquisition geometry and trace decimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionSpec {
    /// Mask shape: `[time, traces]` or `[time, rows, columns]`
    pub shape: Vec<usize>,

    /// Fraction of traces deleted from the fully sampled acquisition
    #[serde(default)]
    pub decimation: f64,
}

/// Run length and random seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Number of outer-loop iterations, starting at 0
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Seed for trace deletion and thinning
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self { iterations: default_iterations(), seed: default_seed() }
    }
}
