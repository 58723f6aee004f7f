//! Sensor masks and the operators that reshape them
//!
//! A [`Mask`] marks which samples of a seismic gather are revealed to the
//! reconstruction loss. The leading axis indexes time samples; the remaining
//! one or two axes index sensor positions:
//!
//! - rank 2: `(time, trace)`
//! - rank 3: `(time, row, column)`
//! - rank 1: a single line of samples, accepted for scheduling only
//!
//! Operators:
//! - [`grow`] / [`grow_with`]: 2×2 morphological dilation per time slice
//! - [`thin`]: independent Bernoulli subsampling of a candidate set
//! - [`delete_random_traces`]: random trace deletion for the starting mask

mod builder;
mod grow;
mod thin;


pub use builder::delete_random_traces;
pub use grow::{grow, grow_with, STRUCTURING_ELEMENT};
pub use thin::thin;

use crate::error::{Error, Result};
use ndarray::{Array, Array1, Array2, Array3, ArrayD, ArrayViewD, Dimension, IxDyn, Zip};

/// Highest supported mask rank.
pub const MAX_RANK: usize = 3;

/// Boolean sample mask, `true` where a sample is revealed.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use revelar::Mask;
///
/// let mask = Mask::from(array![[true, false], [false, false]]);
/// assert_eq!(mask.revealed(), 1);
/// assert_eq!(mask.shape(), &[2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    data: ArrayD<bool>,
}

impl Mask {
    /// Wrap a boolean array, rejecting rank 0 and ranks above [`MAX_RANK`].
    pub fn new<D: Dimension>(data: Array<bool, D>) -> Result<Self> {
        let rank = data.ndim();
        if rank == 0 || rank > MAX_RANK {
            return Err(Error::UnsupportedRank(rank));
        }
        Ok(Self { data: data.into_dyn() })
    }

    /// Rank and shape are already known to be valid.
    pub(crate) fn from_valid(data: ArrayD<bool>) -> Self {
        debug_assert!((1..=MAX_RANK).contains(&data.ndim()));
        Self { data }
    }

    /// Mask with every sample hidden.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::new(ArrayD::from_elem(IxDyn(shape), false))
    }

    /// Mask with every sample revealed (a fully sampled acquisition).
    pub fn full(shape: &[usize]) -> Result<Self> {
        Self::new(ArrayD::from_elem(IxDyn(shape), true))
    }

    /// Build from row-major values.
    pub fn from_shape_vec(shape: &[usize], values: Vec<bool>) -> Result<Self> {
        let actual = vec![values.len()];
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| {
            Error::ShapeMismatch { expected: shape.to_vec(), actual }
        })?;
        Self::new(data)
    }

    /// Mask of the samples that were actually recorded: `true` where `data`
    /// holds a number, `false` where it holds NaN.
    pub fn from_nan_data<D: Dimension>(data: &Array<f32, D>) -> Result<Self> {
        Self::new(data.mapv(|v| !v.is_nan()))
    }

    /// Complement of [`Mask::from_nan_data`]: `true` where samples are missing.
    pub fn from_nan_data_inverted<D: Dimension>(data: &Array<f32, D>) -> Result<Self> {
        Self::new(data.mapv(f32::is_nan))
    }

    /// Array shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of samples, revealed or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the mask holds no samples at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of revealed samples.
    pub fn revealed(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Fraction of samples revealed, `0.0` for an empty mask.
    pub fn coverage(&self) -> f64 {
        if self.data.is_empty() {
            0.0
        } else {
            self.revealed() as f64 / self.data.len() as f64
        }
    }

    /// Sample at `index`, `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<bool> {
        self.data.get(index).copied()
    }

    /// Read-only view of the underlying array.
    pub fn view(&self) -> ArrayViewD<'_, bool> {
        self.data.view()
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &ArrayD<bool> {
        &self.data
    }

    /// Unwrap into the underlying array.
    pub fn into_inner(self) -> ArrayD<bool> {
        self.data
    }

    /// Numeric `0`/`1` weights, e.g. to multiply into a loss.
    pub fn to_weights<T: From<u8>>(&self) -> ArrayD<T> {
        self.data.mapv(|v| T::from(u8::from(v)))
    }

    fn check_same_shape(&self, other: &Mask) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: self.shape().to_vec(),
                actual: other.shape().to_vec(),
            })
        }
    }

    /// Samples revealed in either mask.
    pub fn union(&self, other: &Mask) -> Result<Mask> {
        self.check_same_shape(other)?;
        let data = Zip::from(&self.data).and(&other.data).map_collect(|&a, &b| a || b);
        Ok(Self::from_valid(data))
    }

    /// Samples revealed here but not in `other` (`self AND NOT other`).
    pub fn difference(&self, other: &Mask) -> Result<Mask> {
        self.check_same_shape(other)?;
        let data = Zip::from(&self.data).and(&other.data).map_collect(|&a, &b| a && !b);
        Ok(Self::from_valid(data))
    }

    /// True if every sample revealed here is also revealed in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(Zip::from(&self.data).and(&other.data).all(|&a, &b| !a || b))
    }
}

impl From<Array1<bool>> for Mask {
    fn from(data: Array1<bool>) -> Self {
        Self { data: data.into_dyn() }
    }
}

impl From<Array2<bool>> for Mask {
    fn from(data: Array2<bool>) -> Self {
        Self { data: data.into_dyn() }
    }
}

impl From<Array3<bool>> for Mask {
    fn from(data: Array3<bool>) -> Self {
        Self { data: data.into_dyn() }
    }
}

impl TryFrom<ArrayD<bool>> for Mask {
    type Error = Error;

    fn try_from(data: ArrayD<bool>) -> Result<Self> {
        Self::new(data)
    }
}

/// Reject probabilities outside `[0, 1]`, NaN included.
pub(crate) fn check_fraction(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidFraction { name, value })
    }
}
