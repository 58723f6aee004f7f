//! Progressive mask revelation
//!
//! The scheduler reveals hidden sensor samples to a reconstruction loss in
//! two phases:
//!
//! 1. Warm-up (`iteration <= threshold`): only the initial mask is used.
//! 2. Growth: every `step` iterations the revealed set is dilated once, and
//!    within each epoch the newly grown samples are admitted at random with a
//!    probability that moves linearly across the epoch, so the effective mask
//!    never jumps by a whole dilation at once.

mod params;
mod scheduler;


pub use params::{reveal_fraction, Phase, ScheduleParams, ThinningMode};
pub use scheduler::RevealScheduler;
