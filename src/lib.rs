//! # rastergeom
//!
//! Geometry and resampling utilities for gridded rasters.
//!
//! This library derives a raster's geometry from its coordinate arrays and
//! provides the resampling primitives built on top of it.
//!
//! ## Key Features
//!
//! - **Geometry from coordinates**: signed resolution, outer-edge bounds and
//!   value-to-index mapping, all derived on demand
//! - **Canonical orientation**: flip any raster so x and y ascend with array index
//! - **Block downsampling**: NaN-aware mean, sum, extrema, median and spread
//! - **Pipeline helpers**: type dispatch, expression keys, memoization, mesh
//!   assembly, Web Mercator projection and value summaries
//!
//! ## Architecture
//!
//! - **Data Layer**: [`Raster`] holds the array and its coordinates
//! - **Geometry**: [`geometry`] computes resolution, bounds, indices and orientation
//! - **Processing**: [`downsample`] reduces oriented arrays block by block
//! - **Reporting**: [`GeometryReport`] combines both for the CLI

pub mod config;
pub mod dispatch;
pub mod downsample;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod logging;
pub mod memo;
pub mod mesh;
pub mod projection;
pub mod raster;
pub mod report;
pub mod sequences;
pub mod summary;

pub use config::Config;
pub use downsample::{downsample_aggregate, Reduction};
pub use error::{RasterError, Result};
pub use geometry::{
    calc_bbox, calc_res, compute_coords, get_indices, orient_array, orient_raster, BoundingBox,
    IndexRange, Resolution,
};
pub use logging::{
    generate_operation_id, init_tracing, log_error, log_operation_end, log_operation_start,
    log_timed_operation,
};
pub use raster::{Raster, RasterFile};
pub use report::{GeometryReport, ReportOptions};
