//! Canonical storage order for raster arrays.
//!
//! Flip rules, applied to the trailing two (spatial) axes:
//!
//! | resolution | action            |
//! |------------|-------------------|
//! | `x < 0`    | reverse columns   |
//! | `y > 0`    | reverse rows      |
//!
//! After normalization x increases along columns and y increases along rows,
//! whatever the native orientation of the source. The canonical resolution
//! is therefore `(+|xres|, -|yres|)`, and orienting an already canonical
//! array with that resolution leaves it unchanged.

use ndarray::{ArrayView, ArrayViewD, Axis, Dimension};
use tracing::debug;

use super::Resolution;
use crate::error::{RasterError, Result};
use crate::raster::Raster;

/// Reorient an array view according to the sign of the resolution.
///
/// Only strides change; no data is copied.
///
/// # Panics
///
/// Panics if the array has fewer than two dimensions.
pub fn orient_array<A, D: Dimension>(
    mut array: ArrayView<'_, A, D>,
    res: Resolution,
) -> ArrayView<'_, A, D> {
    let ndim = array.ndim();
    assert!(
        ndim >= 2,
        "orient_array needs at least 2 dimensions, got {}",
        ndim
    );
    if res.x < 0.0 {
        array.invert_axis(Axis(ndim - 1));
    }
    if res.y > 0.0 {
        array.invert_axis(Axis(ndim - 2));
    }
    array
}

/// Reorient a raster's data to canonical orientation.
///
/// When `res` is `None` the resolution is computed from the raster's
/// coordinates. `layer` is 1-based and selects a 2D slice of a 3D raster
/// before orientation.
pub fn orient_raster(
    raster: &Raster,
    res: Option<Resolution>,
    layer: Option<usize>,
) -> Result<ArrayViewD<'_, f64>> {
    let res = match res {
        Some(res) => res,
        None => raster.resolution()?,
    };

    let mut array = raster.data().view();
    if let Some(layer) = layer {
        if array.ndim() != 3 {
            return Err(RasterError::invalid(
                "layer",
                format!("Layer selection needs a 3D raster, got {}D", array.ndim()),
            ));
        }
        let layers = array.len_of(Axis(0));
        if layer == 0 || layer > layers {
            return Err(RasterError::invalid(
                "layer",
                format!("Layer {} out of range 1..={}", layer, layers),
            ));
        }
        array = array.index_axis_move(Axis(0), layer - 1);
    }

    debug!(
        operation = "orient_raster",
        xres = res.x,
        yres = res.y,
        layer = ?layer,
        flip_columns = res.x < 0.0,
        flip_rows = res.y > 0.0,
        "Orienting raster"
    );

    Ok(orient_array(array, res))
}
