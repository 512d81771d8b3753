//! Test data generation utilities.
//!
//! This module provides functions to build rasters with known data patterns
//! and to write them as JSON raster files for end-to-end tests.

use ndarray::{Array2, Array3};
use rastergeom::{Raster, RasterFile};
use std::path::Path;

/// Evenly spaced cell centers for `n` cells of size `step` starting at `origin`.
///
/// A negative `step` produces descending coordinates whose first cell is
/// centered half a cell below `origin`.
pub fn centers(origin: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| origin + (i as f64 + 0.5) * step).collect()
}

/// Creates a 2D raster whose value encodes its storage position.
///
/// Cell `(row, col)` holds `row * 100 + col`, so a flipped view is easy to
/// recognise.
///
/// # Arguments
///
/// * `size` - Grid dimensions `(width, height)`
/// * `res` - Signed cell size `(x, y)`; positive `y` means rows run north to south
pub fn create_index_raster(size: (usize, usize), res: (f64, f64)) -> Raster {
    let (width, height) = size;
    let (xres, yres) = res;

    let x = if xres > 0.0 {
        centers(0.0, xres, width)
    } else {
        centers(width as f64 * -xres, xres, width)
    };
    let y = if yres > 0.0 {
        centers(height as f64 * yres, -yres, height)
    } else {
        centers(0.0, -yres, height)
    };

    let data = Array2::from_shape_fn((height, width), |(r, c)| (r * 100 + c) as f64);
    Raster::new(data.into_dyn(), x, y).unwrap()
}

/// Creates a north-up 3D raster with `layers` layers, each filled with its
/// 1-based layer number.
pub fn create_layered_raster(layers: usize, size: (usize, usize)) -> Raster {
    let (width, height) = size;
    let x = centers(0.0, 1.0, width);
    let y = centers(height as f64, -1.0, height);
    let data = Array3::from_shape_fn((layers, height, width), |(l, _, _)| (l + 1) as f64);
    Raster::new(data.into_dyn(), x, y).unwrap()
}

/// Writes `raster` as a JSON raster file.
pub fn write_raster_file(path: &Path, raster: &Raster) -> std::io::Result<()> {
    let file = RasterFile::from(raster);
    let json = serde_json::to_string(&file)?;
    std::fs::write(path, json)
}
