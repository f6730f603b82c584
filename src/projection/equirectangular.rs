use super::SpatialRef;
use crate::error::{ProjectionError, Result};
use crate::geodesy::GeoPoint;
use crate::math::Point2;

/// Simple cylindrical (equidistant cylindrical) projection on a sphere.
///
/// `x = R (λ - λ0) cos φts`, `y = R φ`. This is the usual map frame of
/// planetary mosaics and the shapefiles digitized on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equirectangular {
    center_lon: f64,
    latitude_of_true_scale: f64,
    radius: f64,
    cos_ts: f64,
}

impl Equirectangular {
    /// # Errors
    ///
    /// Returns `ProjectionError::Singular` if the radius is not positive or
    /// the latitude of true scale is at a pole, where `cos φts = 0`.
    pub fn new(center_lon: f64, latitude_of_true_scale: f64, radius: f64) -> Result<Self> {
        let cos_ts = latitude_of_true_scale.to_radians().cos();
        let this = Self {
            center_lon,
            latitude_of_true_scale,
            radius,
            cos_ts,
        };
        if !(radius.is_finite() && radius > 0.0) || !center_lon.is_finite() {
            return Err(ProjectionError::Singular {
                reference: this.describe(),
                reason: "radius and central meridian must be finite, radius positive".to_string(),
            }
            .into());
        }
        if !(cos_ts.is_finite() && cos_ts > 1e-12) {
            return Err(ProjectionError::Singular {
                reference: this.describe(),
                reason: "latitude of true scale must lie strictly between the poles".to_string(),
            }
            .into());
        }
        Ok(this)
    }
}

impl SpatialRef for Equirectangular {
    fn describe(&self) -> String {
        format!(
            "+proj=eqc +lon_0={} +lat_ts={} +R={}",
            self.center_lon, self.latitude_of_true_scale, self.radius
        )
    }

    fn to_geographic(&self, point: Point2) -> Result<GeoPoint> {
        let lon = self.center_lon + (point.x / (self.radius * self.cos_ts)).to_degrees();
        let lat = (point.y / self.radius).to_degrees();
        let geo = GeoPoint::new(lon, lat);
        if !geo.is_valid() {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("({}, {}) maps beyond the poles", point.x, point.y),
            }
            .into());
        }
        Ok(geo)
    }

    fn from_geographic(&self, geo: GeoPoint) -> Result<Point2> {
        if !geo.is_valid() {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("invalid position {geo:?}"),
            }
            .into());
        }
        let x = self.radius * self.cos_ts * (geo.lon - self.center_lon).to_radians();
        let y = self.radius * geo.lat.to_radians();
        Ok(Point2::new(x, y))
    }
}
