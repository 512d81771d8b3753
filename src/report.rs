//! Geometry report for a raster: the summary the CLI prints.
//!
//! The report pairs a canonically oriented array with the bin-center
//! coordinates that match its layout, before and after optional block
//! downsampling.

use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};
use serde::Serialize;
use tracing::debug;

use crate::downsample::{downsample_aggregate, Reduction};
use crate::error::Result;
use crate::geometry::{compute_coords, orient_raster, BoundingBox, Resolution};
use crate::raster::Raster;

/// Options controlling report generation
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub layer: Option<usize>,
    pub crop: Option<BoundingBox>,
    pub factor: usize,
    pub how: Reduction,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            layer: None,
            crop: None,
            factor: 1,
            how: Reduction::Mean,
        }
    }
}

/// Geometry of a raster in canonical orientation
#[derive(Debug, Clone, Serialize)]
pub struct GeometryReport {
    /// Shape of the (cropped) source raster
    pub shape: Vec<usize>,
    /// Resolution of the (cropped) source raster, sign included
    pub resolution: Resolution,
    pub bbox: BoundingBox,
    /// Column centers of the oriented array, ascending
    pub x_centers: Vec<f64>,
    /// Row centers of the oriented array, ascending
    pub y_centers: Vec<f64>,
    pub downsample: Option<DownsampleReport>,
}

/// Result of block downsampling the oriented array
#[derive(Debug, Clone, Serialize)]
pub struct DownsampleReport {
    pub factor: usize,
    pub how: Reduction,
    pub shape: Vec<usize>,
    pub x_centers: Vec<f64>,
    pub y_centers: Vec<f64>,
    /// Row-major values, `null` where every cell of a block was missing
    pub values: Vec<Option<f64>>,
}

impl GeometryReport {
    /// Build the report for `raster`
    pub fn build(raster: &Raster, options: &ReportOptions) -> Result<Self> {
        let cropped;
        let raster = match &options.crop {
            Some(bbox) => {
                cropped = raster.crop(bbox)?;
                &cropped
            }
            None => raster,
        };

        let res = raster.resolution()?;
        let bbox = raster.bbox()?;
        let canonical = Resolution::new(res.x.abs(), -res.y.abs());

        let (xs, ys) = compute_coords(
            raster.width(),
            raster.height(),
            (bbox.xmin, bbox.xmax),
            (bbox.ymin, bbox.ymax),
            canonical,
        )?;

        let oriented = orient_raster(raster, Some(res), options.layer)?;
        let downsample = if options.factor > 1 {
            Some(downsample_oriented(oriented, &bbox, canonical, options)?)
        } else {
            None
        };

        debug!(
            operation = "geometry_report",
            shape = ?raster.shape(),
            xres = res.x,
            yres = res.y,
            downsampled = downsample.is_some(),
            "Built geometry report"
        );

        Ok(Self {
            shape: raster.shape().to_vec(),
            resolution: res,
            bbox,
            x_centers: xs.to_vec(),
            y_centers: ys.to_vec(),
            downsample,
        })
    }
}

/// Downsample an oriented `(rows, cols)` or `(layer, rows, cols)` array.
///
/// Downsampling reduces the first two axes, so a layer axis is moved last for
/// the reduction and restored afterwards.
fn downsample_oriented(
    oriented: ArrayViewD<'_, f64>,
    bbox: &BoundingBox,
    canonical: Resolution,
    options: &ReportOptions,
) -> Result<DownsampleReport> {
    let factor = options.factor;
    let layered = oriented.ndim() == 3;

    let reduced: ArrayD<f64> = if layered {
        let spatial_first = oriented.permuted_axes(IxDyn(&[1, 2, 0]));
        downsample_aggregate(spatial_first, factor, options.how)?
            .permuted_axes(IxDyn(&[2, 0, 1]))
    } else {
        downsample_aggregate(oriented, factor, options.how)?
    };

    let ndim = reduced.ndim();
    let rows = reduced.len_of(Axis(ndim - 2));
    let cols = reduced.len_of(Axis(ndim - 1));

    // Oriented rows and columns ascend, so cropping drops the high edges
    let x_extent = (cols * factor) as f64 * canonical.x;
    let y_extent = (rows * factor) as f64 * -canonical.y;
    let (xs, ys) = if rows > 0 && cols > 0 {
        let (xs, ys) = compute_coords(
            cols,
            rows,
            (bbox.xmin, bbox.xmin + x_extent),
            (bbox.ymin, bbox.ymin + y_extent),
            canonical,
        )?;
        (xs.to_vec(), ys.to_vec())
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(DownsampleReport {
        factor,
        how: options.how,
        shape: reduced.shape().to_vec(),
        x_centers: xs,
        y_centers: ys,
        values: reduced
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use ndarray::{Array2, Array3};

    fn descending_raster() -> Raster {
        // x descends, y descends (north-up image)
        let x = vec![3.5, 2.5, 1.5, 0.5];
        let y = vec![3.5, 2.5, 1.5, 0.5];
        let data = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f64).into_dyn();
        Raster::new(data, x, y).unwrap()
    }

    #[test]
    fn test_report_without_downsample() {
        let options = ReportOptions::default();
        let report = GeometryReport::build(&descending_raster(), &options).unwrap();

        assert_eq!(report.shape, vec![4, 4]);
        assert_eq!(report.resolution, Resolution::new(-1.0, 1.0));
        assert_eq!(report.x_centers, vec![0.5, 1.5, 2.5, 3.5]);
        assert_eq!(report.y_centers, vec![0.5, 1.5, 2.5, 3.5]);
        assert!(report.downsample.is_none());
    }

    #[test]
    fn test_report_downsample_in_canonical_orientation() {
        let options = ReportOptions {
            factor: 2,
            how: Reduction::Max,
            ..Default::default()
        };
        let report = GeometryReport::build(&descending_raster(), &options).unwrap();
        let down = report.downsample.unwrap();

        assert_eq!(down.shape, vec![2, 2]);
        assert_eq!(down.x_centers, vec![1.0, 3.0]);
        assert_eq!(down.y_centers, vec![1.0, 3.0]);
        // Oriented row 0 is source row 3 (southern-most) and column 0 is
        // source column 3 (western-most), so the first block holds 15
        assert_eq!(down.values[0], Some(15.0));
    }

    #[test]
    fn test_report_layered_downsample() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![0.0, 1.0, 2.0];
        let data = Array3::from_shape_fn((2, 3, 5), |(l, _, _)| l as f64).into_dyn();
        let raster = Raster::new(data, x, y).unwrap();

        let options = ReportOptions {
            factor: 2,
            how: Reduction::Sum,
            ..Default::default()
        };
        let down = GeometryReport::build(&raster, &options)
            .unwrap()
            .downsample
            .unwrap();

        assert_eq!(down.shape, vec![2, 1, 2]);
        assert_eq!(down.values, vec![Some(0.0), Some(0.0), Some(4.0), Some(4.0)]);
        assert_eq!(down.x_centers, vec![0.5, 2.5]);
        assert_eq!(down.y_centers, vec![0.5]);
    }

    #[test]
    fn test_report_with_crop() {
        let options = ReportOptions {
            crop: Some(BoundingBox {
                xmin: 1.0,
                ymin: 0.0,
                xmax: 3.0,
                ymax: 4.0,
            }),
            ..Default::default()
        };
        let report = GeometryReport::build(&descending_raster(), &options).unwrap();

        assert_eq!(report.shape, vec![4, 2]);
        assert_eq!(report.x_centers, vec![1.5, 2.5]);
    }

    #[test]
    fn test_report_with_sub_cell_crop() {
        let options = ReportOptions {
            crop: Some(BoundingBox {
                xmin: 2.1,
                ymin: 2.1,
                xmax: 2.2,
                ymax: 2.2,
            }),
            ..Default::default()
        };
        let result = GeometryReport::build(&descending_raster(), &options);
        assert!(matches!(
            result,
            Err(RasterError::InvalidArgument { ref param, .. }) if param == "bbox"
        ));
    }
}
