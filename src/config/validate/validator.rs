//! Configuration validation logic
//!
//! Validates run specifications before any mask is built.

use super::error::ValidationError;
use crate::config::schema::RevealSpec;

/// Validate a run specification
///
/// Checks:
/// - Schedule step and dilation count are positive
/// - Acquisition shape has 2 or 3 non-empty axes
/// - Decimation is a fraction
/// - At least one iteration is run
pub fn validate_config(spec: &RevealSpec) -> Result<(), ValidationError> {
    if spec.schedule.step == 0 {
        return Err(ValidationError::InvalidStep(spec.schedule.step));
    }

    if spec.schedule.dilation_iterations == 0 {
        return Err(ValidationError::InvalidDilationIterations(spec.schedule.dilation_iterations));
    }

    let shape = &spec.acquisition.shape;
    if !(2..=3).contains(&shape.len()) {
        return Err(ValidationError::InvalidRank(shape.len()));
    }
    if shape.contains(&0) {
        return Err(ValidationError::EmptyAxis(shape.clone()));
    }

    // NaN fails the range check too
    if !(0.0..=1.0).contains(&spec.acquisition.decimation) {
        return Err(ValidationError::InvalidDecimation(spec.acquisition.decimation));
    }

    if spec.run.iterations == 0 {
        return Err(ValidationError::InvalidIterations(spec.run.iterations));
    }

    Ok(())
}
