//! Continuous coordinate interval to array index bounds.

use super::IndexRange;
use crate::error::{RasterError, Result};

/// Transform continuous `start` and `end` coordinates into array indices.
///
/// The interval is narrowed by half a cell on each side and scaled by
/// `len / span` over the coordinate span. That scale is `len / (len - 1)` cells
/// per resolution step, so the result approximates the cells whose centers
/// fall inside `[start, end]` and drifts on long axes. Indices truncate toward
/// zero and are not clamped to `[0, coords.len())`.
///
/// An inverted or sub-pixel interval collapses to `(start, start)` instead
/// of failing; callers that crop to a single cell depend on this.
pub fn get_indices(start: f64, end: f64, coords: &[f64], res: f64) -> Result<IndexRange> {
    let size = coords.len() as f64;
    let half = res.abs() / 2.0;
    let vmin = coords.iter().copied().fold(f64::INFINITY, f64::min);
    let vmax = coords.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = vmax - vmin;

    if !(span > 0.0) {
        return Err(RasterError::degenerate(format!(
            "Coordinate span must be positive to map indices, got {} over {} values",
            span,
            coords.len()
        )));
    }

    let start = start + half - vmin;
    let end = end - half - vmin;
    let sidx = ((start / span) * size) as i64;
    let eidx = ((end / span) * size) as i64;

    if eidx < sidx {
        return Ok(IndexRange::new(sidx, sidx));
    }
    Ok(IndexRange::new(sidx, eidx))
}
