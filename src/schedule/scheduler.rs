//! Progressive mask revelation scheduler

use super::params::{reveal_fraction, Phase, ScheduleParams};
use crate::error::Result;
use crate::mask::{grow_with, thin, Mask};
use rand::Rng;
use tracing::{debug, trace};

/// Decides, once per outer-loop iteration, which hidden samples the loss
/// may see.
///
/// The scheduler keeps two snapshots: the committed mask (`old`) and the
/// grown target of the current epoch (`new`), with `old ⊆ new` at all
/// times. When an iteration crosses into a later epoch, the target is
/// committed and grown once more. Within an epoch the newly grown samples are
/// thinned by [`reveal_fraction`] before being added to the committed mask.
///
/// `update` takes `&mut self`; sharing a scheduler across threads needs a
/// lock around the whole call.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use rand::{rngs::StdRng, SeedableRng};
/// use revelar::{Mask, RevealScheduler, ScheduleParams};
///
/// let initial = Mask::from(array![false, false, false, true, false, false, false, false]);
/// let mut scheduler = RevealScheduler::new(initial.clone(), ScheduleParams::new(10, 5))?;
/// let mut rng = StdRng::seed_from_u64(0);
///
/// assert_eq!(scheduler.update(10, &mut rng)?, initial);
/// scheduler.update(11, &mut rng)?;
/// assert_eq!(scheduler.epoch(), 1);
/// // last iteration of the epoch: every grown sample is revealed
/// assert_eq!(scheduler.update(14, &mut rng)?, *scheduler.new_mask());
/// # Ok::<(), revelar::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RevealScheduler {
    params: ScheduleParams,
    initial: Mask,
    old_mask: Mask,
    new_mask: Mask,
    /// Epoch of the last growth event, 0 before the first
    epoch: usize,
    /// Grower invocations so far
    growths: usize,
}

impl RevealScheduler {
    /// Create a scheduler starting from `initial`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSchedule`](crate::Error::InvalidSchedule) for `step == 0`
    /// or `dilation_iterations == 0`.
    pub fn new(initial: Mask, params: ScheduleParams) -> Result<Self> {
        params.validate()?;
        debug!(
            threshold = params.threshold,
            step = params.step,
            dilation_iterations = params.dilation_iterations,
            thinning = %params.thinning,
            shape = ?initial.shape(),
            revealed = initial.revealed(),
            "created reveal scheduler"
        );
        Ok(Self {
            params,
            old_mask: initial.clone(),
            new_mask: initial.clone(),
            initial,
            epoch: 0,
            growths: 0,
        })
    }

    /// Schedule parameters.
    pub fn params(&self) -> &ScheduleParams {
        &self.params
    }

    /// Committed mask: samples revealed unconditionally.
    pub fn old_mask(&self) -> &Mask {
        &self.old_mask
    }

    /// Grown target of the current epoch.
    pub fn new_mask(&self) -> &Mask {
        &self.new_mask
    }

    /// Number of the current growth epoch, `0` before growth starts.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// How many times the grower has run. Trails [`epoch`](Self::epoch) when
    /// iterations skip whole epochs.
    pub fn growths(&self) -> usize {
        self.growths
    }

    /// Classify `iteration` without touching state.
    pub fn phase(&self, iteration: usize) -> Phase {
        if iteration <= self.params.threshold {
            return Phase::WarmUp;
        }
        let elapsed = iteration - self.params.threshold;
        Phase::Growing { epoch: elapsed / self.params.step + 1, offset: elapsed % self.params.step }
    }

    /// Effective mask for `iteration`.
    ///
    /// During warm-up the committed mask is returned as is and no randomness
    /// is consumed. Otherwise a growth event fires if `iteration` lies in a
    /// later epoch than the last one seen, and the result is the committed
    /// mask plus a random share of the grown samples. The result is not
    /// stored: calling twice with the same iteration differs only by the
    /// thinner's randomness.
    pub fn update<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<Mask> {
        let (epoch, offset) = match self.phase(iteration) {
            Phase::WarmUp => {
                trace!(iteration, "warm-up");
                return Ok(self.old_mask.clone());
            }
            Phase::Growing { epoch, offset } => (epoch, offset),
        };

        if epoch > self.epoch {
            self.advance(epoch);
        }

        let fraction = reveal_fraction(offset, self.params.step)?;
        let keep = self.params.thinning.keep_probability(fraction);
        let delta = self.new_mask.difference(&self.old_mask)?;
        let revealed = thin(&delta, keep, rng)?;
        let effective = self.old_mask.union(&revealed)?;

        trace!(
            iteration,
            epoch,
            offset,
            reveal_fraction = fraction,
            candidates = delta.revealed(),
            admitted = revealed.revealed(),
            "updated effective mask"
        );
        Ok(effective)
    }

    /// Commit the current target and grow the next one.
    fn advance(&mut self, target_epoch: usize) {
        let grown = grow_with(&self.new_mask, self.params.dilation_iterations);
        self.old_mask = std::mem::replace(&mut self.new_mask, grown);
        if target_epoch > self.epoch + 1 {
            debug!(from = self.epoch, to = target_epoch, "skipped growth epochs");
        }
        self.epoch = target_epoch;
        self.growths += 1;

        debug!(
            epoch = self.epoch,
            committed = self.old_mask.revealed(),
            target = self.new_mask.revealed(),
            "growth event"
        );
    }

    /// Return to the initial mask and epoch 0.
    pub fn reset(&mut self) {
        self.old_mask = self.initial.clone();
        self.new_mask = self.initial.clone();
        self.epoch = 0;
        self.growths = 0;
    }
}
