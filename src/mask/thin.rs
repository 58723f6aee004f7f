//! Stochastic thinning of candidate samples

use super::{check_fraction, Mask};
use crate::error::Result;
use rand::Rng;

/// Keep each revealed sample of `delta` independently with probability
/// `reveal_fraction`; everything else comes back hidden.
///
/// The result is always a subset of `delta`. A fraction of `1.0` returns
/// `delta` unchanged and `0.0` returns an all-hidden mask, neither consuming
/// randomness.
///
/// # Errors
///
/// [`Error::InvalidFraction`](crate::Error::InvalidFraction) if
/// `reveal_fraction` is NaN or outside `[0, 1]`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use rand::{rngs::StdRng, SeedableRng};
/// use revelar::{thin, Mask};
///
/// let delta = Mask::from(array![true, false, true, true]);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let kept = thin(&delta, 0.5, &mut rng)?;
/// assert!(kept.is_subset_of(&delta)?);
/// assert_eq!(thin(&delta, 1.0, &mut rng)?, delta);
/// # Ok::<(), revelar::Error>(())
/// ```
pub fn thin<R: Rng + ?Sized>(delta: &Mask, reveal_fraction: f64, rng: &mut R) -> Result<Mask> {
    let p = check_fraction("reveal_fraction", reveal_fraction)?;

    if p >= 1.0 {
        return Ok(delta.clone());
    }
    if p <= 0.0 {
        return Mask::zeros(delta.shape());
    }

    let data = delta.as_array().mapv(|candidate| candidate && rng.random_bool(p));
    Ok(Mask::from_valid(data))
}
