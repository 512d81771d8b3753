//! Raster data model and loading.
//!
//! A raster is a 2D `(rows, cols)` or 3D `(layer, rows, cols)` array with one
//! coordinate array per spatial axis. Geometry (resolution, bounds) is always
//! derived on demand from the coordinates and never stored.

use ndarray::{ArrayD, Axis, IxDyn, Slice};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{RasterError, Result};
use crate::geometry::{self, BoundingBox, Resolution};

/// An N-dimensional numeric array with x and y coordinate arrays
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: ArrayD<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

/// On-disk JSON form of a raster. `null` values mark missing cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterFile {
    /// Array shape, `[rows, cols]` or `[layers, rows, cols]`
    pub shape: Vec<usize>,
    /// Row-major values
    pub values: Vec<Option<f64>>,
    /// Coordinate of each column
    pub x: Vec<f64>,
    /// Coordinate of each row
    pub y: Vec<f64>,
}

impl Raster {
    /// Create a raster, checking that the trailing two dimensions of `data`
    /// match the coordinate lengths.
    pub fn new(data: ArrayD<f64>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let ndim = data.ndim();
        if ndim != 2 && ndim != 3 {
            return Err(RasterError::ShapeMismatch {
                message: format!("Raster data must be 2D or 3D, got {}D", ndim),
            });
        }

        let rows = data.len_of(Axis(ndim - 2));
        let cols = data.len_of(Axis(ndim - 1));
        if rows != y.len() || cols != x.len() {
            return Err(RasterError::ShapeMismatch {
                message: format!(
                    "Data extent {}x{} does not match coordinates y={} x={}",
                    rows,
                    cols,
                    y.len(),
                    x.len()
                ),
            });
        }

        Ok(Self { data, x, y })
    }

    /// Load a raster from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RasterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let file: RasterFile = serde_json::from_str(&content)?;
        let raster = Self::try_from(file)?;

        info!(
            operation = "raster_load",
            file_path = %path.display(),
            shape = ?raster.shape(),
            "Raster loaded"
        );
        Ok(raster)
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.x.len()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.y.len()
    }

    /// Number of layers (1 for a 2D raster)
    pub fn layers(&self) -> usize {
        if self.data.ndim() == 3 {
            self.data.len_of(Axis(0))
        } else {
            1
        }
    }

    /// Cell size derived from the coordinates
    pub fn resolution(&self) -> Result<Resolution> {
        geometry::calc_res(&self.x, &self.y)
    }

    /// Outer-edge bounding box derived from the coordinates
    pub fn bbox(&self) -> Result<BoundingBox> {
        let res = self.resolution()?;
        debug!(xres = res.x, yres = res.y, "Computing raster bounds");
        Ok(geometry::calc_bbox(&self.x, &self.y, res))
    }

    /// Crop to the cells whose centers fall inside `bbox`, edges included.
    ///
    /// The result must keep at least two cells per axis so that its geometry
    /// can still be derived; a smaller selection is an `InvalidArgument`.
    pub fn crop(&self, bbox: &BoundingBox) -> Result<Raster> {
        let res = self.resolution()?;
        let (x0, x1) = axis_bounds("x", bbox.xmin, bbox.xmax, &self.x, res.x, res.x > 0.0)?;
        let (y0, y1) = axis_bounds("y", bbox.ymin, bbox.ymax, &self.y, res.y, res.y < 0.0)?;

        let ndim = self.data.ndim();
        let data = self
            .data
            .slice_axis(Axis(ndim - 1), Slice::from(x0..x1))
            .slice_axis(Axis(ndim - 2), Slice::from(y0..y1))
            .to_owned();

        debug!(
            operation = "crop",
            columns = ?(x0..x1),
            rows = ?(y0..y1),
            "Cropped raster"
        );

        Raster::new(data, self.x[x0..x1].to_vec(), self.y[y0..y1].to_vec())
    }
}

/// Slack, in cells, for centers lying exactly on a crop edge
const EDGE_TOLERANCE: f64 = 1e-9;

/// Storage index bounds `[start, end)` of the cells whose centers fall inside
/// `[lo, hi]` along one axis. Centers sit at `vmin + i * |res|` in ascending
/// order, so bounds on a descending axis are mirrored.
fn axis_bounds(
    axis: &str,
    lo: f64,
    hi: f64,
    coords: &[f64],
    res: f64,
    ascending: bool,
) -> Result<(usize, usize)> {
    let step = res.abs();
    let vmin = coords.iter().copied().fold(f64::INFINITY, f64::min);
    let last = coords.len() as i64 - 1;

    let first = ((lo - vmin) / step - EDGE_TOLERANCE).ceil().max(0.0);
    let final_ = ((hi - vmin) / step + EDGE_TOLERANCE).floor().min(last as f64);
    if !(final_ - first >= 1.0) {
        return Err(RasterError::invalid(
            "bbox",
            format!(
                "Crop [{}, {}] keeps fewer than 2 cells along {}; at least 2 are needed",
                lo, hi, axis
            ),
        ));
    }

    let (start, end) = (first as i64, final_ as i64);
    let (start, end) = if ascending {
        (start, end)
    } else {
        (last - end, last - start)
    };
    Ok((start as usize, end as usize + 1))
}

impl TryFrom<RasterFile> for Raster {
    type Error = RasterError;

    fn try_from(file: RasterFile) -> Result<Self> {
        let values = file
            .values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();
        let data = ArrayD::from_shape_vec(IxDyn(&file.shape), values)?;
        Raster::new(data, file.x, file.y)
    }
}

impl From<&Raster> for RasterFile {
    fn from(raster: &Raster) -> Self {
        Self {
            shape: raster.shape().to_vec(),
            values: raster
                .data
                .iter()
                .map(|&v| if v.is_nan() { None } else { Some(v) })
                .collect(),
            x: raster.x.clone(),
            y: raster.y.clone(),
        }
    }
}
