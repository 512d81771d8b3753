//! Bounding box of a uniformly sampled raster.

use ndarray::{arr1, arr2};

use super::{BoundingBox, Resolution};

/// Calculate the bounding box (outer cell edges) of a raster.
///
/// Assumes uniform sampling so that a single affine transform in augmented
/// matrix form maps grid indices `(i, j, 1)` to coordinates. The transform is
/// applied to the four extreme index corners, then shifted by half a cell so
/// the box encloses the outer edges rather than the outer centers.
///
/// A zero resolution on either axis is a caller error and is not checked.
pub fn calc_bbox(xs: &[f64], ys: &[f64], res: Resolution) -> BoundingBox {
    let xbound = if res.x < 0.0 { max_of(xs) } else { min_of(xs) };
    let ybound = if res.y < 0.0 { min_of(ys) } else { max_of(ys) };

    let ab = arr2(&[
        [res.x, 0.0, xbound],
        [0.0, -res.y, ybound],
        [0.0, 0.0, 1.0],
    ]);

    let (w, h) = (xs.len() as f64, ys.len() as f64);
    let mut xmin = f64::INFINITY;
    let mut ymin = f64::INFINITY;
    let mut xmax = f64::NEG_INFINITY;
    let mut ymax = f64::NEG_INFINITY;

    for (i, j) in [(0.0, 0.0), (0.0, h), (w, 0.0), (w, h)] {
        let p = ab.dot(&arr1(&[i, j, 1.0]));
        let (x, y) = (p[0], p[1]);
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }

    let xpad = res.x / 2.0;
    let ypad = res.y / 2.0;
    BoundingBox {
        xmin: xmin - xpad,
        ymin: ymin + ypad,
        xmax: xmax - xpad,
        ymax: ymax + ypad,
    }
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
