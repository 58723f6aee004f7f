//! Schedule parameters and the pure timing functions behind them

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

fn default_dilation_iterations() -> usize {
    1
}

/// How the within-epoch reveal fraction is applied to newly grown samples.
///
/// Both conventions use the same fraction `1 - (offset + 1) / step`; they
/// differ in whether that number is the chance of keeping a candidate or of
/// dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinningMode {
    /// Drop each candidate with probability `reveal_fraction` (dropout
    /// convention): few candidates at the start of the epoch, nearly all of
    /// them by its end, so the next commit is a small step.
    #[default]
    Drop,
    /// Keep each candidate with probability `reveal_fraction`: the effective
    /// mask starts close to the grown mask and settles on the committed one
    /// by the end of the epoch.
    Keep,
}

impl ThinningMode {
    /// Probability handed to the thinner for a given reveal fraction.
    pub fn keep_probability(self, reveal_fraction: f64) -> f64 {
        match self {
            Self::Keep => reveal_fraction,
            Self::Drop => 1.0 - reveal_fraction,
        }
    }
}

impl std::str::FromStr for ThinningMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "drop" => Ok(Self::Drop),
            _ => Err(format!("Unknown thinning mode: {s}. Valid modes: keep, drop")),
        }
    }
}

impl std::fmt::Display for ThinningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// Timing parameters of a revelation schedule.
///
/// Iterations up to and including `threshold` are warm-up; after that a new
/// growth epoch starts every `step` iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// Last warm-up iteration
    pub threshold: usize,
    /// Iterations per growth epoch
    pub step: usize,
    /// Dilations applied at each growth event
    #[serde(default = "default_dilation_iterations")]
    pub dilation_iterations: usize,
    /// Reveal fraction convention
    #[serde(default)]
    pub thinning: ThinningMode,
}

impl ScheduleParams {
    /// Parameters with a single dilation per epoch and [`ThinningMode::Drop`].
    pub fn new(threshold: usize, step: usize) -> Self {
        Self {
            threshold,
            step,
            dilation_iterations: default_dilation_iterations(),
            thinning: ThinningMode::default(),
        }
    }

    /// Set the number of dilations per growth event
    #[must_use]
    pub fn with_dilation_iterations(mut self, iterations: usize) -> Self {
        self.dilation_iterations = iterations;
        self
    }

    /// Set the thinning convention
    #[must_use]
    pub fn with_thinning(mut self, thinning: ThinningMode) -> Self {
        self.thinning = thinning;
        self
    }

    /// Reject parameters that cannot drive a scheduler.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(Error::InvalidSchedule {
                message: "step must be positive".into(),
                suggestion: "Use step >= 1 (iterations per growth epoch)".into(),
            });
        }
        if self.dilation_iterations == 0 {
            return Err(Error::InvalidSchedule {
                message: "dilation_iterations must be positive".into(),
                suggestion: "Use dilation_iterations >= 1 or drop the field for the default".into(),
            });
        }
        Ok(())
    }
}

/// Where an iteration falls in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `iteration <= threshold`: the committed mask is returned untouched
    WarmUp,
    /// Inside growth epoch `epoch` (1-based), `offset` iterations after its start
    Growing { epoch: usize, offset: usize },
}

impl Phase {
    /// Epoch number, `0` during warm-up.
    pub fn epoch(self) -> usize {
        match self {
            Self::WarmUp => 0,
            Self::Growing { epoch, .. } => epoch,
        }
    }
}

/// Reveal fraction at `offset` iterations into an epoch of `step` iterations:
/// `1 - (offset + 1) / step`.
///
/// Falls from `1 - 1/step` at the first iteration of an epoch to exactly `0`
/// at its last.
///
/// # Errors
///
/// [`Error::InvalidSchedule`] if `step == 0` or `offset >= step`.
///
/// # Example
///
/// ```
/// use revelar::reveal_fraction;
///
/// assert!((reveal_fraction(0, 5)? - 0.8).abs() < 1e-12);
/// assert_eq!(reveal_fraction(4, 5)?, 0.0);
/// assert!(reveal_fraction(5, 5).is_err());
/// # Ok::<(), revelar::Error>(())
/// ```
pub fn reveal_fraction(offset: usize, step: usize) -> Result<f64> {
    if step == 0 {
        return Err(Error::InvalidSchedule {
            message: "step must be positive".into(),
            suggestion: "Use step >= 1 (iterations per growth epoch)".into(),
        });
    }
    if offset >= step {
        return Err(Error::InvalidSchedule {
            message: format!("offset {offset} lies outside an epoch of {step} iterations"),
            suggestion: format!("Use an offset in 0..{step}"),
        });
    }
    Ok(1.0 - (offset + 1) as f64 / step as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reveal_fraction_endpoints() {
        assert_relative_eq!(reveal_fraction(0, 5).unwrap(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(reveal_fraction(2, 5).unwrap(), 0.4, epsilon = 1e-12);
        assert_eq!(reveal_fraction(4, 5).unwrap(), 0.0);
        assert_eq!(reveal_fraction(0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_reveal_fraction_rejects_degenerate_input() {
        let err = reveal_fraction(0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidSchedule { .. }));
        assert!(err.to_string().contains("step must be positive"));

        for offset in [5, 6, usize::MAX] {
            let err = reveal_fraction(offset, 5).unwrap_err();
            assert!(matches!(err, Error::InvalidSchedule { .. }));
            assert!(err.to_string().contains("outside an epoch of 5"));
        }
    }

    #[test]
    fn test_reveal_fraction_decreases_within_epoch() {
        let step = 7;
        let fractions: Vec<f64> = (0..step).map(|o| reveal_fraction(o, step).unwrap()).collect();
        assert!(fractions.windows(2).all(|w| w[0] > w[1]));
        assert!(fractions.iter().all(|f| (0.0..1.0).contains(f)));
    }

    #[test]
    fn test_keep_probability_conventions() {
        assert_relative_eq!(ThinningMode::Keep.keep_probability(0.8), 0.8);
        assert_relative_eq!(ThinningMode::Drop.keep_probability(0.8), 0.2, epsilon = 1e-12);
        assert_eq!(ThinningMode::Drop.keep_probability(0.0), 1.0);
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let err = ScheduleParams::new(10, 0).validate().unwrap_err();
        assert!(err.to_string().contains("step must be positive"));
    }

    #[test]
    fn test_validate_rejects_zero_dilations() {
        let params = ScheduleParams::new(0, 3).with_dilation_iterations(0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_thinning_mode_parse_and_display() {
        assert_eq!("keep".parse::<ThinningMode>().unwrap(), ThinningMode::Keep);
        assert_eq!("DROP".parse::<ThinningMode>().unwrap(), ThinningMode::Drop);
        assert!("sometimes".parse::<ThinningMode>().is_err());
        assert_eq!(ThinningMode::Drop.to_string(), "drop");
    }

    #[test]
    fn test_params_yaml_defaults() {
        let params: ScheduleParams = serde_yaml::from_str("threshold: 10\nstep: 5\n").unwrap();
        assert_eq!(params, ScheduleParams::new(10, 5));
        assert_eq!(params.thinning, ThinningMode::Drop);

        let params: ScheduleParams =
            serde_yaml::from_str("threshold: 0\nstep: 2\ndilation_iterations: 3\nthinning: keep\n")
                .unwrap();
        assert_eq!(params.dilation_iterations, 3);
        assert_eq!(params.thinning, ThinningMode::Keep);
    }

    #[test]
    fn test_phase_epoch() {
        assert_eq!(Phase::WarmUp.epoch(), 0);
        assert_eq!(Phase::Growing { epoch: 3, offset: 1 }.epoch(), 3);
    }
}
