use super::SpatialRef;
use crate::error::{ProjectionError, Result};
use crate::geodesy::{Ellipsoid, GeoPoint};
use crate::math::Point2;

/// Orthographic projection tangent at a feature's centroid.
///
/// The orthographic projection is defined on a sphere. Here the
/// ellipsoid's semi-major axis scales `x` and its semi-minor axis scales
/// `y`, standing in for the sphere radius in each direction. For a sphere
/// this is exact; on a flattened body the error grows with eccentricity
/// and with distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalOrthographic {
    center: GeoPoint,
    a: f64,
    b: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

/// Tolerance on the unit-disc boundary and the horizon.
const HORIZON_EPS: f64 = 1e-12;

impl LocalOrthographic {
    /// Centres a local plane on `center` using the axes of `ellipsoid`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::Singular` if `center` is not a finite
    /// position with `|lat| <= 90`.
    pub fn new(center: GeoPoint, ellipsoid: &Ellipsoid) -> Result<Self> {
        let (sin_lat0, cos_lat0) = center.lat.to_radians().sin_cos();
        let this = Self {
            center,
            a: ellipsoid.a,
            b: ellipsoid.b,
            sin_lat0,
            cos_lat0,
        };
        if !center.is_valid() {
            return Err(ProjectionError::Singular {
                reference: this.describe(),
                reason: format!("cannot centre a projection on {center:?}"),
            }
            .into());
        }
        Ok(this)
    }

    /// The tangent point.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.center
    }
}

impl SpatialRef for LocalOrthographic {
    fn describe(&self) -> String {
        format!(
            "+proj=ortho +lon_0={} +lat_0={} +a={} +b={}",
            self.center.lon, self.center.lat, self.a, self.b
        )
    }

    fn to_geographic(&self, point: Point2) -> Result<GeoPoint> {
        let x = point.x / self.a;
        let y = point.y / self.b;
        let rho = x.hypot(y);
        if !rho.is_finite() || rho > 1.0 + HORIZON_EPS {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("({}, {}) lies outside the projected disc", point.x, point.y),
            }
            .into());
        }
        if rho < f64::EPSILON {
            return Ok(self.center);
        }

        let (sin_c, cos_c) = rho.min(1.0).asin().sin_cos();
        let lat = (cos_c * self.sin_lat0 + y * sin_c * self.cos_lat0 / rho)
            .clamp(-1.0, 1.0)
            .asin();
        let dlon = (x * sin_c).atan2(rho * cos_c * self.cos_lat0 - y * sin_c * self.sin_lat0);
        Ok(GeoPoint::new(
            self.center.lon + dlon.to_degrees(),
            lat.to_degrees(),
        ))
    }

    fn from_geographic(&self, geo: GeoPoint) -> Result<Point2> {
        if !geo.is_valid() {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("invalid position {geo:?}"),
            }
            .into());
        }
        let (sin_lat, cos_lat) = geo.lat.to_radians().sin_cos();
        let (sin_dlon, cos_dlon) = (geo.lon - self.center.lon).to_radians().sin_cos();

        let cos_c = self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * cos_dlon;
        if cos_c < -HORIZON_EPS {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("{geo:?} is on the far side of the body"),
            }
            .into());
        }

        let x = self.a * cos_lat * sin_dlon;
        let y = self.b * (self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * cos_dlon);
        Ok(Point2::new(x, y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CaliperError;
    use crate::geodesy::{MARS, MOON};
    use approx::assert_relative_eq;

    #[test]
    fn center_maps_to_origin() {
        let local = LocalOrthographic::new(GeoPoint::new(137.4, -4.6), &MARS).unwrap();
        let p = local.from_geographic(GeoPoint::new(137.4, -4.6)).unwrap();
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6, "{p}");
        assert_eq!(local.to_geographic(Point2::origin()).unwrap(), local.center());
    }

    #[test]
    fn small_offsets_are_nearly_arc_length() {
        let local = LocalOrthographic::new(GeoPoint::new(0.0, 0.0), &MOON).unwrap();
        let p = local.from_geographic(GeoPoint::new(0.01, 0.0)).unwrap();
        assert_relative_eq!(p.x, MOON.a * 0.01_f64.to_radians(), max_relative = 1e-8);
        let q = local.from_geographic(GeoPoint::new(0.0, 0.01)).unwrap();
        assert_relative_eq!(q.y, MOON.b * 0.01_f64.to_radians(), max_relative = 1e-8);
    }

    #[test]
    fn round_trip_away_from_center() {
        let local = LocalOrthographic::new(GeoPoint::new(-75.0, 60.0), &MARS).unwrap();
        for &(lon, lat) in &[(-70.0, 62.0), (-80.0, 55.0), (105.0, 89.0), (-75.0, 0.5)] {
            let p = local.from_geographic(GeoPoint::new(lon, lat)).unwrap();
            let g = local.to_geographic(p).unwrap();
            assert_relative_eq!(g.lat, lat, epsilon = 1e-9);
            let dlon = GeoPoint::new(g.lon - lon, 0.0).lon_180();
            assert!(dlon.abs() < 1e-9, "lon {lon} -> {}", g.lon);
        }
    }

    #[test]
    fn polar_center_is_supported() {
        let local = LocalOrthographic::new(GeoPoint::new(0.0, 90.0), &MOON).unwrap();
        let p = local.from_geographic(GeoPoint::new(45.0, 89.0)).unwrap();
        let g = local.to_geographic(p).unwrap();
        assert_relative_eq!(g.lat, 89.0, epsilon = 1e-9);
        assert_relative_eq!(g.lon, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn far_side_is_out_of_domain() {
        let local = LocalOrthographic::new(GeoPoint::new(0.0, 0.0), &MOON).unwrap();
        let err = local.from_geographic(GeoPoint::new(180.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            CaliperError::Projection(ProjectionError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn outside_disc_is_out_of_domain() {
        let local = LocalOrthographic::new(GeoPoint::new(0.0, 0.0), &MOON).unwrap();
        assert!(local.to_geographic(Point2::new(2.0 * MOON.a, 0.0)).is_err());
    }

    #[test]
    fn invalid_center_is_singular() {
        let err = LocalOrthographic::new(GeoPoint::new(0.0, 95.0), &MOON).unwrap_err();
        match err {
            CaliperError::Projection(ProjectionError::Singular { reference, .. }) => {
                assert!(reference.starts_with("+proj=ortho"), "{reference}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
