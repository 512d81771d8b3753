//! Web Mercator projection of longitude/latitude.

use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;

/// Half the circumference of the WGS84 equator, in meters
const ORIGIN_SHIFT: f64 = PI * 6378137.0;

/// Project a (longitude, latitude) pair in degrees into Web Mercator
/// coordinates: meters east of Greenwich and meters north of the equator.
pub fn lnglat_to_meters(longitude: f64, latitude: f64) -> (f64, f64) {
    let easting = longitude * ORIGIN_SHIFT / 180.0;
    let northing = ((90.0 + latitude) * PI / 360.0).tan().ln() * ORIGIN_SHIFT / PI;
    (easting, northing)
}

/// Array form of [`lnglat_to_meters`]
pub fn lnglat_to_meters_array(
    longitude: ArrayView1<'_, f64>,
    latitude: ArrayView1<'_, f64>,
) -> (Array1<f64>, Array1<f64>) {
    let easting = longitude.mapv(|lon| lon * ORIGIN_SHIFT / 180.0);
    let northing = latitude.mapv(|lat| lnglat_to_meters(0.0, lat).1);
    (easting, northing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_origin() {
        let (x, y) = lnglat_to_meters(0.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_known_point() {
        // New York City
        let (x, y) = lnglat_to_meters(-74.0, 40.71);
        assert!((x - -8237642.3).abs() < 1.0, "easting {}", x);
        assert!((y - 4969660.4).abs() < 1.0, "northing {}", y);
    }

    #[test]
    fn test_antimeridian() {
        let (x, _) = lnglat_to_meters(180.0, 0.0);
        assert!((x - ORIGIN_SHIFT).abs() < 1e-6);
    }

    #[test]
    fn test_array_matches_scalar() {
        let lon = array![-74.0, 0.0, 151.2];
        let lat = array![40.71, 0.0, -33.87];
        let (xs, ys) = lnglat_to_meters_array(lon.view(), lat.view());

        for i in 0..3 {
            let (x, y) = lnglat_to_meters(lon[i], lat[i]);
            assert_eq!(xs[i], x);
            assert_eq!(ys[i], y);
        }
    }
}
