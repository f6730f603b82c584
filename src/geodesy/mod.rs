//! Surface distances on a reference body.
//!
//! Two estimators are provided for cross-checking a planar measurement:
//! [`haversine`] on a sphere and [`geodesic_distance`] on the full
//! ellipsoid (Vincenty's inverse solution with a bounded iteration).

mod ellipsoid;
mod haversine;
mod vincenty;

pub use ellipsoid::{Ellipsoid, MARS, MOON, WGS84};
pub use haversine::{great_circle_angle, haversine};
pub use vincenty::{geodesic_distance, GeodesicDistance, GeodesicParams};

/// A geographic position in degrees.
///
/// Longitudes are not normalized; a 0–360 convention is as valid as
/// -180–180. Use [`GeoPoint::lon_180`] or [`GeoPoint::lon_360`] when a
/// specific range is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude wrapped into `[-180, 180)`.
    #[must_use]
    pub fn lon_180(&self) -> f64 {
        (self.lon + 180.0).rem_euclid(360.0) - 180.0
    }

    /// Longitude wrapped into `[0, 360)`.
    #[must_use]
    pub fn lon_360(&self) -> f64 {
        self.lon.rem_euclid(360.0)
    }

    /// `(lon, lat)` in radians.
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lon.to_radians(), self.lat.to_radians())
    }

    /// Builds a point from `(lon, lat)` in radians.
    #[must_use]
    pub fn from_radians(lon: f64, lat: f64) -> Self {
        Self {
            lon: lon.to_degrees(),
            lat: lat.to_degrees(),
        }
    }

    /// Whether both coordinates are finite and the latitude is within
    /// `[-90, 90]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite() && self.lat.abs() <= 90.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_wrapping() {
        let g = GeoPoint::new(-90.0, 10.0);
        assert!((g.lon_360() - 270.0).abs() < 1e-12);
        assert!((g.lon_180() + 90.0).abs() < 1e-12);

        let g = GeoPoint::new(270.0, 10.0);
        assert!((g.lon_180() + 90.0).abs() < 1e-12);
        assert!((GeoPoint::new(180.0, 0.0).lon_180() + 180.0).abs() < 1e-12);
        assert!(GeoPoint::new(720.0, 0.0).lon_360().abs() < 1e-12);
    }

    #[test]
    fn radians_round_trip() {
        let g = GeoPoint::new(137.5, -4.6);
        let (lon, lat) = g.to_radians();
        let back = GeoPoint::from_radians(lon, lat);
        assert!((back.lon - g.lon).abs() < 1e-12 && (back.lat - g.lat).abs() < 1e-12);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(400.0, 90.0).is_valid());
        assert!(!GeoPoint::new(0.0, 90.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
