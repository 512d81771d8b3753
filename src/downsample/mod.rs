//! Block downsampling of materialized aggregates.
//!
//! An aggregate is reduced by an integer factor along its first two (spatial)
//! axes. Trailing rows and columns that do not fill a complete block are
//! dropped before reducing. Any further axes are carried through unchanged.

pub mod reduce;

use ndarray::{Array, ArrayView, Axis, Dimension, Slice};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{RasterError, Result};

/// Names accepted by [`Reduction::from_str`]
pub const REDUCTION_NAMES: [&str; 7] = ["mean", "sum", "max", "min", "median", "std", "var"];

/// Statistic used to combine the cells of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    Mean,
    Sum,
    Max,
    Min,
    Median,
    Std,
    Var,
}

impl Reduction {
    /// Lower-case name of the reduction
    pub fn name(&self) -> &'static str {
        match self {
            Reduction::Mean => "mean",
            Reduction::Sum => "sum",
            Reduction::Max => "max",
            Reduction::Min => "min",
            Reduction::Median => "median",
            Reduction::Std => "std",
            Reduction::Var => "var",
        }
    }

    /// Reduce one group of values, ignoring NaN. The group buffer is reused
    /// scratch space and may be reordered or shortened.
    pub fn reduce(&self, group: &mut Vec<f64>) -> f64 {
        match self {
            Reduction::Mean => reduce::nan_mean(group),
            Reduction::Sum => reduce::nan_sum(group),
            Reduction::Max => reduce::nan_max(group),
            Reduction::Min => reduce::nan_min(group),
            Reduction::Median => reduce::nan_median(group),
            Reduction::Std => reduce::nan_std(group),
            Reduction::Var => reduce::nan_var(group),
        }
    }
}

impl FromStr for Reduction {
    type Err = RasterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            "max" => Ok(Reduction::Max),
            "min" => Ok(Reduction::Min),
            "median" => Ok(Reduction::Median),
            "std" => Ok(Reduction::Std),
            "var" => Ok(Reduction::Var),
            _ => Err(RasterError::invalid(
                "how",
                format!(
                    "Invalid downsample method: {}. Options: {}",
                    s,
                    REDUCTION_NAMES.join(", ")
                ),
            )),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Downsample an aggregate by `factor` along its first two axes.
///
/// The array is cropped to a multiple of `factor` on both axes, split into
/// the `factor * factor` interleaved sub-grids `[i::factor, j::factor]`, and
/// each output cell is the reduction of the matching cell across all
/// sub-grids.
pub fn downsample_aggregate<D: Dimension>(
    aggregate: ArrayView<'_, f64, D>,
    factor: usize,
    how: Reduction,
) -> Result<Array<f64, D>> {
    if factor == 0 {
        return Err(RasterError::invalid(
            "factor",
            "Downsample factor must be a positive integer",
        ));
    }
    if aggregate.ndim() < 2 {
        return Err(RasterError::invalid(
            "aggregate",
            format!(
                "Downsampling needs at least 2 dimensions, got {}",
                aggregate.ndim()
            ),
        ));
    }

    let rows = aggregate.len_of(Axis(0));
    let cols = aggregate.len_of(Axis(1));
    let mut cropped = aggregate.clone();
    cropped.slice_axis_inplace(Axis(0), Slice::from(..rows - rows % factor));
    cropped.slice_axis_inplace(Axis(1), Slice::from(..cols - cols % factor));

    let mut out_dim = aggregate.raw_dim();
    out_dim[0] = rows / factor;
    out_dim[1] = cols / factor;

    debug!(
        operation = "downsample_aggregate",
        input_shape = ?aggregate.shape(),
        output_shape = ?out_dim.slice(),
        factor = factor,
        how = how.name(),
        "Downsampling aggregate"
    );

    if out_dim.size() == 0 {
        return Ok(Array::from_shape_vec(out_dim, Vec::new())?);
    }

    let step = factor as isize;
    let mut blocks = Vec::with_capacity(factor * factor);
    for i in 0..factor {
        for j in 0..factor {
            let mut block = cropped.clone();
            block.slice_axis_inplace(Axis(0), Slice::new(i as isize, None, step));
            block.slice_axis_inplace(Axis(1), Slice::new(j as isize, None, step));
            blocks.push(block);
        }
    }

    // Every block has the output shape; walk them in lockstep
    let mut cursors: Vec<_> = blocks.iter().map(|block| block.iter()).collect();
    let mut group = Vec::with_capacity(cursors.len());
    let mut values = Vec::with_capacity(out_dim.size());
    for _ in 0..out_dim.size() {
        group.clear();
        group.extend(cursors.iter_mut().filter_map(|cursor| cursor.next().copied()));
        values.push(how.reduce(&mut group));
    }

    Ok(Array::from_shape_vec(out_dim, values)?)
}

/// Downsample using a reduction given by name
pub fn downsample_aggregate_by_name<D: Dimension>(
    aggregate: ArrayView<'_, f64, D>,
    factor: usize,
    how: &str,
) -> Result<Array<f64, D>> {
    downsample_aggregate(aggregate, factor, how.parse()?)
}
