//! Schedule simulation on a synthetic acquisition
//!
//! Stands in for a reconstruction loop: builds the starting mask from a fully
//! sampled acquisition, then calls the scheduler once per iteration and
//! records how many samples each mask reveals.

use crate::config::{validate_config, RevealSpec};
use crate::error::Result;
use crate::mask::{delete_random_traces, Mask};
use crate::schedule::{reveal_fraction, Phase, RevealScheduler, ScheduleParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::info;

/// Mask statistics for one iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    pub iteration: usize,
    /// Growth epoch after the update, 0 during warm-up
    pub epoch: usize,
    /// Position within the epoch, `None` during warm-up
    pub offset: Option<usize>,
    /// `None` during warm-up
    pub reveal_fraction: Option<f64>,
    /// Samples in the committed mask
    pub committed: usize,
    /// Samples in the grown target mask
    pub target: usize,
    /// Samples in the effective mask
    pub revealed: usize,
}

/// Result of a simulated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub shape: Vec<usize>,
    pub total_samples: usize,
    /// Samples revealed by the starting mask
    pub initial_revealed: usize,
    pub params: ScheduleParams,
    pub seed: u64,
    pub growth_events: usize,
    pub iterations: Vec<IterationStats>,
}

impl SimulationReport {
    /// Stats of the last iteration run.
    pub fn last(&self) -> Option<&IterationStats> {
        self.iterations.last()
    }

    /// Plain-text table of per-iteration counts.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>9}  {:>5}  {:>6}  {:>8}  {:>9}  {:>7}  {:>8}",
            "iteration", "epoch", "offset", "fraction", "committed", "target", "revealed"
        );
        for row in &self.iterations {
            let offset = row.offset.map_or_else(|| "-".to_string(), |o| o.to_string());
            let fraction =
                row.reveal_fraction.map_or_else(|| "-".to_string(), |f| format!("{f:.3}"));
            let _ = writeln!(
                out,
                "{:>9}  {:>5}  {:>6}  {:>8}  {:>9}  {:>7}  {:>8}",
                row.iteration, row.epoch, offset, fraction, row.committed, row.target, row.revealed
            );
        }
        out
    }
}

/// Run the schedule described by `spec`.
///
/// The same seeded generator draws the deleted traces and drives thinning, so
/// a given spec always produces the same report.
pub fn simulate(spec: &RevealSpec) -> Result<SimulationReport> {
    validate_config(spec)?;

    let mut rng = StdRng::seed_from_u64(spec.run.seed);
    let acquisition = Mask::full(&spec.acquisition.shape)?;
    let initial = delete_random_traces(&acquisition, spec.acquisition.decimation, &mut rng)?;
    let initial_revealed = initial.revealed();

    let mut scheduler = RevealScheduler::new(initial, spec.schedule)?;
    let mut iterations = Vec::with_capacity(spec.run.iterations);

    for iteration in 0..spec.run.iterations {
        let effective = scheduler.update(iteration, &mut rng)?;
        let (offset, fraction) = match scheduler.phase(iteration) {
            Phase::WarmUp => (None, None),
            Phase::Growing { offset, .. } => {
                (Some(offset), Some(reveal_fraction(offset, spec.schedule.step)?))
            }
        };
        iterations.push(IterationStats {
            iteration,
            epoch: scheduler.epoch(),
            offset,
            reveal_fraction: fraction,
            committed: scheduler.old_mask().revealed(),
            target: scheduler.new_mask().revealed(),
            revealed: effective.revealed(),
        });
    }

    info!(
        iterations = spec.run.iterations,
        growth_events = scheduler.growths(),
        initial = initial_revealed,
        committed = scheduler.old_mask().revealed(),
        "simulation finished"
    );

    Ok(SimulationReport {
        shape: spec.acquisition.shape.clone(),
        total_samples: acquisition.len(),
        initial_revealed,
        params: spec.schedule,
        seed: spec.run.seed,
        growth_events: scheduler.growths(),
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AcquisitionSpec, RunParams};

    fn spec(threshold: usize, step: usize, iterations: usize) -> RevealSpec {
        RevealSpec {
            schedule: ScheduleParams::new(threshold, step),
            acquisition: AcquisitionSpec { shape: vec![16, 48], decimation: 0.6 },
            run: RunParams { iterations, seed: 3 },
        }
    }

    #[test]
    fn test_simulate_reports_every_iteration() {
        let report = simulate(&spec(5, 4, 30)).unwrap();
        assert_eq!(report.iterations.len(), 30);
        assert_eq!(report.total_samples, 16 * 48);
        assert_eq!(report.last().unwrap().iteration, 29);
    }

    #[test]
    fn test_simulate_warm_up_rows() {
        let report = simulate(&spec(5, 4, 30)).unwrap();
        for row in &report.iterations[..=5] {
            assert_eq!(row.epoch, 0);
            assert_eq!(row.offset, None);
            assert_eq!(row.revealed, report.initial_revealed);
        }
        assert_eq!(report.iterations[6].epoch, 1);
    }

    #[test]
    fn test_simulate_counts_are_ordered() {
        let report = simulate(&spec(2, 3, 40)).unwrap();
        let mut previous_committed = report.initial_revealed;
        for row in &report.iterations {
            assert!(row.committed <= row.revealed);
            assert!(row.revealed <= row.target);
            assert!(row.committed >= previous_committed);
            previous_committed = row.committed;
        }
        assert_eq!(report.growth_events, report.last().unwrap().epoch);
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let a = simulate(&spec(3, 5, 25)).unwrap();
        let b = simulate(&spec(3, 5, 25)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulate_rejects_invalid_spec() {
        assert!(simulate(&spec(3, 0, 25)).is_err());
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let report = simulate(&spec(1, 2, 4)).unwrap();
        let table = report.to_table();
        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().next().unwrap().contains("revealed"));
    }
}
