//! Bin-center coordinates for a target canvas.

use ndarray::Array1;

use super::Resolution;
use crate::error::{RasterError, Result};

/// Compute bin-center coordinates for a `width` x `height` grid spanning the
/// outer edges `x_range` and `y_range`.
///
/// The resolution is only consulted for its sign: x centers are reversed when
/// `res.x < 0` and y centers are reversed when `res.y > 0`, matching the
/// layout produced by [`orient_array`](super::orient_array).
pub fn compute_coords(
    width: usize,
    height: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    res: Resolution,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if width == 0 || height == 0 {
        return Err(RasterError::degenerate(format!(
            "Cannot compute coordinates for a {}x{} grid",
            width, height
        )));
    }

    let (x0, x1) = x_range;
    let (y0, y1) = y_range;
    let xd = (x1 - x0) / width as f64;
    let yd = (y1 - y0) / height as f64;
    let xpad = (xd / 2.0).abs();
    let ypad = (yd / 2.0).abs();

    let xs = Array1::linspace(x0 + xpad, x1 - xpad, width);
    let ys = Array1::linspace(y0 + ypad, y1 - ypad, height);

    let xs = if res.x < 0.0 { reversed(xs) } else { xs };
    let ys = if res.y > 0.0 { reversed(ys) } else { ys };
    Ok((xs, ys))
}

fn reversed(values: Array1<f64>) -> Array1<f64> {
    values.iter().rev().copied().collect()
}
