//! Morphological growth of a mask
//!
//! Binary dilation with a 2×2 all-ones structuring element, applied to each
//! time slice independently. The element is anchored at its centre cell
//! `(1, 1)`, so an output sample is revealed when the sample itself, its
//! predecessor along either plane axis, or its diagonal predecessor is
//! revealed. Samples outside the plane count as hidden.
//!
//! Plane layout by rank:
//! - rank 1: the whole mask is one `n × 1` plane
//! - rank 2: each time slice is a line of traces, dilated as `n × 1`
//! - rank 3: each time slice is a `rows × columns` plane; a trailing
//!   size-1 axis degenerates to the rank-2 case

use super::Mask;
use ndarray::{ArrayD, Dimension, IxDyn};

/// Shape of the structuring element (rows, columns).
pub const STRUCTURING_ELEMENT: (usize, usize) = (2, 2);

/// Backward offsets covered by the anchored 2×2 element.
const FOOTPRINT: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Axes of one dilation plane within the full mask.
#[derive(Debug, Clone, Copy)]
struct PlaneAxes {
    row: usize,
    column: Option<usize>,
}

impl PlaneAxes {
    fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self { row: 0, column: None },
            2 => Self { row: 1, column: None },
            _ => Self { row: 1, column: Some(2) },
        }
    }
}

/// Grow `mask` by one dilation.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use revelar::{grow, Mask};
///
/// let mask = Mask::from(array![false, false, true, false, false]);
/// let grown = grow(&mask);
/// assert_eq!(grown, Mask::from(array![false, false, true, true, false]));
/// ```
pub fn grow(mask: &Mask) -> Mask {
    grow_with(mask, 1)
}

/// Grow `mask` by `iterations` successive dilations. Zero iterations returns
/// an unchanged copy.
pub fn grow_with(mask: &Mask, iterations: usize) -> Mask {
    let axes = PlaneAxes::for_rank(mask.ndim());
    let mut current = mask.as_array().clone();
    for _ in 0..iterations {
        current = dilate_once(&current, axes);
    }
    Mask::from_valid(current)
}

#[cfg(not(feature = "parallel"))]
fn dilate_once(src: &ArrayD<bool>, axes: PlaneAxes) -> ArrayD<bool> {
    ArrayD::from_shape_fn(src.raw_dim(), |index| covered(src, &index, axes))
}

/// Dilates each time slice on its own rayon task.
#[cfg(feature = "parallel")]
fn dilate_once(src: &ArrayD<bool>, axes: PlaneAxes) -> ArrayD<bool> {
    use ndarray::parallel::prelude::*;
    use ndarray::Axis;

    let mut out = ArrayD::from_elem(src.raw_dim(), false);
    out.axis_iter_mut(Axis(0)).into_par_iter().enumerate().for_each(|(time, mut slice)| {
        let mut index = IxDyn(&vec![0; src.ndim()]);
        index[0] = time;
        for (position, cell) in slice.indexed_iter_mut() {
            for (axis, &value) in position.slice().iter().enumerate() {
                index[axis + 1] = value;
            }
            *cell = covered(src, &index, axes);
        }
    });
    out
}

fn covered(src: &ArrayD<bool>, index: &IxDyn, axes: PlaneAxes) -> bool {
    FOOTPRINT.iter().any(|&(back_row, back_column)| {
        let mut probe = index.clone();

        let row = index[axes.row];
        if row < back_row {
            return false;
        }
        probe[axes.row] = row - back_row;

        match axes.column {
            Some(axis) => {
                let column = index[axis];
                if column < back_column {
                    return false;
                }
                probe[axis] = column - back_column;
            }
            // Lines are n × 1 planes: the column predecessor is padding.
            None if back_column > 0 => return false,
            None => {}
        }

        src[probe.slice()]
    })
}
