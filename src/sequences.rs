//! Flatten many sequences sharing one x axis into a single pair of columns.
//!
//! Each sequence is followed by a NaN row so that line rendering breaks
//! between sequences instead of joining the end of one to the start of the
//! next.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::error::{RasterError, Result};

/// Columns produced by [`from_multiple_sequences`]
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceColumns {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

/// Combine `y_values` of shape `(n_sequences, len)` with `x_values` of
/// length `len` into two columns of length `n_sequences * (len + 1)`.
pub fn from_multiple_sequences(
    x_values: ArrayView1<'_, f64>,
    y_values: ArrayView2<'_, f64>,
) -> Result<SequenceColumns> {
    let len = x_values.len();
    if y_values.len_of(Axis(1)) != len {
        return Err(RasterError::ShapeMismatch {
            message: format!(
                "Sequences have length {} but x has {} values",
                y_values.len_of(Axis(1)),
                len
            ),
        });
    }

    let n = y_values.len_of(Axis(0));
    let mut x = Vec::with_capacity(n * (len + 1));
    let mut y = Vec::with_capacity(n * (len + 1));
    for sequence in y_values.outer_iter() {
        x.extend(x_values.iter().copied());
        x.push(f64::NAN);
        y.extend(sequence.iter().copied());
        y.push(f64::NAN);
    }

    Ok(SequenceColumns {
        x: Array1::from(x),
        y: Array1::from(y),
    })
}
