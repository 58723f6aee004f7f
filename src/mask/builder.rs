//! Starting mask construction by random trace deletion

use super::{check_fraction, Mask};
use crate::error::{Error, Result};
use ndarray::{Axis, Dimension, IxDyn};
use rand::Rng;
use tracing::debug;

/// Delete a random `perc` fraction of the recorded traces in `mask`.
///
/// The sensor layout is read from the first time slice: every position
/// revealed there is a candidate trace (a column for `(time, trace)` masks,
/// a `(row, column)` pair for `(time, row, column)` masks). Exactly
/// `floor(count * perc)` of them are drawn uniformly without replacement and
/// zeroed across all time samples. `mask` itself is left untouched.
///
/// # Errors
///
/// - [`Error::InvalidFraction`] if `perc` is NaN or outside `[0, 1]`
/// - [`Error::UnsupportedRank`] for rank-1 masks, which have no sensor axis
pub fn delete_random_traces<R: Rng + ?Sized>(mask: &Mask, perc: f64, rng: &mut R) -> Result<Mask> {
    let perc = check_fraction("perc", perc)?;
    if mask.ndim() < 2 {
        return Err(Error::UnsupportedRank(mask.ndim()));
    }
    if mask.shape()[0] == 0 {
        return Ok(mask.clone());
    }

    let layout = mask.as_array().index_axis(Axis(0), 0);
    let traces: Vec<IxDyn> =
        layout.indexed_iter().filter(|(_, recorded)| **recorded).map(|(pos, _)| pos).collect();

    let amount = (traces.len() as f64 * perc).floor() as usize;
    let chosen = rand::seq::index::sample(rng, traces.len(), amount.min(traces.len()));

    let mut data = mask.as_array().clone();
    for mut slice in data.axis_iter_mut(Axis(0)) {
        for i in chosen.iter() {
            slice[traces[i].slice()] = false;
        }
    }

    debug!(deleted = amount, recorded = traces.len(), perc, "deleted random traces");
    Ok(Mask::from_valid(data))
}
