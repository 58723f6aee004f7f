//! Revelar: progressive mask revelation for sparse seismic reconstruction
//!
//! Self-supervised reconstruction of a sparsely sampled seismic gather trains
//! against a loss that is masked to the recorded samples. Revelar schedules
//! how that mask grows: after a warm-up period the revealed set is dilated
//! step by step, and each dilation is admitted gradually through random
//! thinning so the loss never sees a sudden jump in coverage.
//!
//! # Architecture
//!
//! - `mask`: the [`Mask`] type with growth, thinning and trace deletion
//! - `schedule`: [`RevealScheduler`] and its [`ScheduleParams`]
//! - `config`: YAML run specifications with validation
//! - `simulate`: run a schedule against a synthetic acquisition
//! - `cli`: command handlers for the `revelar` binary
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use revelar::{Mask, RevealScheduler, ScheduleParams};
//!
//! let mut line = Array2::from_elem((4, 8), false);
//! line.column_mut(3).fill(true);
//!
//! let mut scheduler = RevealScheduler::new(Mask::from(line), ScheduleParams::new(10, 5))?;
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let warm = scheduler.update(10, &mut rng)?;
//! assert_eq!(warm.revealed(), 4);
//!
//! let grown = scheduler.update(11, &mut rng)?;
//! assert!(grown.revealed() >= 4);
//! # Ok::<(), revelar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mask;
pub mod schedule;
pub mod simulate;

pub use error::{Error, Result};
pub use mask::{delete_random_traces, grow, grow_with, thin, Mask, STRUCTURING_ELEMENT};
pub use schedule::{reveal_fraction, Phase, RevealScheduler, ScheduleParams, ThinningMode};
pub use simulate::{simulate, IterationStats, SimulationReport};
