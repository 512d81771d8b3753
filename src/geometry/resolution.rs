//! Cell size derived from coordinate arrays.

use super::Resolution;
use crate::error::{RasterError, Result};

/// Calculate the (x, y) resolution of a raster from its coordinate arrays.
///
/// `xres = (x[last] - x[0]) / (width - 1)` and
/// `yres = (y[0] - y[last]) / (height - 1)`. Both axes need at least two
/// points.
pub fn calc_res(x: &[f64], y: &[f64]) -> Result<Resolution> {
    if x.len() < 2 || y.len() < 2 {
        return Err(RasterError::degenerate(format!(
            "Resolution needs at least 2 points per axis, got width={} height={}",
            x.len(),
            y.len()
        )));
    }

    let width = x.len();
    let height = y.len();
    let xres = (x[width - 1] - x[0]) / (width - 1) as f64;
    let yres = (y[0] - y[height - 1]) / (height - 1) as f64;

    Ok(Resolution::new(xres, yres))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_axes() {
        let res = calc_res(&[0.5, 1.5, 2.5, 3.5], &[10.0, 12.0, 14.0]).unwrap();
        assert_eq!(res.x, 1.0);
        // Ascending y means index 0 is the smallest value
        assert_eq!(res.y, -2.0);
    }

    #[test]
    fn test_descending_axes() {
        let res = calc_res(&[3.0, 2.0, 1.0], &[40.0, 30.0, 20.0, 10.0]).unwrap();
        assert_eq!(res.x, -1.0);
        assert_eq!(res.y, 10.0);
    }

    #[test]
    fn test_sign_follows_direction() {
        let asc: Vec<f64> = (0..7).map(|i| i as f64 * 0.25 - 3.0).collect();
        let desc: Vec<f64> = asc.iter().rev().copied().collect();

        assert!(calc_res(&asc, &asc).unwrap().x > 0.0);
        assert!(calc_res(&asc, &asc).unwrap().y < 0.0);
        assert!(calc_res(&desc, &desc).unwrap().x < 0.0);
        assert!(calc_res(&desc, &desc).unwrap().y > 0.0);
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            calc_res(&[1.0], &[1.0, 2.0]),
            Err(RasterError::DegenerateInput { .. })
        ));
        assert!(matches!(
            calc_res(&[1.0, 2.0], &[]),
            Err(RasterError::DegenerateInput { .. })
        ));
    }
}
