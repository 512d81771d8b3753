//! Raster geometry: resolution, bounds, index mapping and orientation.
//!
//! Resolution sign encodes axis direction relative to increasing array index.
//! A negative `x` resolution means x decreases along columns; a positive `y`
//! resolution means y decreases along rows (row 0 is the top of the image).
//! All values here are derived from a raster's coordinates on demand and are
//! never cached on the raster itself.

pub mod bbox;
pub mod coords;
pub mod indices;
pub mod orient;
pub mod resolution;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RasterError;

pub use bbox::calc_bbox;
pub use coords::compute_coords;
pub use indices::get_indices;
pub use orient::{orient_array, orient_raster};
pub use resolution::calc_res;

/// Signed per-axis cell size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub x: f64,
    pub y: f64,
}

impl Resolution {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Resolution {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Outer edges of the outermost cells of a raster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns true if the point lies strictly inside the box
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.xmin && x < self.xmax && y > self.ymin && y < self.ymax
    }
}

impl FromStr for BoundingBox {
    type Err = RasterError;

    /// Parse `"xmin,ymin,xmax,ymax"`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(RasterError::invalid(
                "bbox",
                "Bounding box must be in format 'xmin,ymin,xmax,ymax'",
            ));
        }

        let mut values = [0.0; 4];
        for (value, (part, name)) in values
            .iter_mut()
            .zip(parts.iter().zip(["xmin", "ymin", "xmax", "ymax"]))
        {
            *value = part
                .parse::<f64>()
                .map_err(|_| RasterError::invalid("bbox", format!("Invalid {}: {}", name, part)))?;
        }

        let [xmin, ymin, xmax, ymax] = values;
        if xmin > xmax || ymin > ymax {
            return Err(RasterError::invalid(
                "bbox",
                format!("Bounding box minimum exceeds maximum: {}", s),
            ));
        }

        Ok(BoundingBox {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }
}

/// Pair of array indices along one axis.
///
/// Indices are truncating conversions and are not clamped to the axis, so a
/// range computed for an interval outside the coordinates may hold
/// out-of-range values. Clamping is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: i64,
    pub end: i64,
}

impl IndexRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox: BoundingBox = "10.5, 20.5,30.5,40.5".parse().unwrap();
        assert_eq!(bbox.xmin, 10.5);
        assert_eq!(bbox.ymin, 20.5);
        assert_eq!(bbox.xmax, 30.5);
        assert_eq!(bbox.ymax, 40.5);
        assert_eq!(bbox.width(), 20.0);

        // Invalid format (too few parts)
        assert!("10.5,20.5,30.5".parse::<BoundingBox>().is_err());

        // Invalid numbers
        assert!("10.5,20.5,not_a_number,40.5".parse::<BoundingBox>().is_err());

        // Inverted axis
        assert!("10.5,40.5,30.5,20.5".parse::<BoundingBox>().is_err());
    }
}
