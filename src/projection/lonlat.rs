use super::SpatialRef;
use crate::error::{ProjectionError, Result};
use crate::geodesy::GeoPoint;
use crate::math::Point2;

/// Geographic coordinates used directly as planar `(x, y) = (lon, lat)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LonLat;

impl SpatialRef for LonLat {
    fn describe(&self) -> String {
        "+proj=longlat".to_string()
    }

    fn to_geographic(&self, point: Point2) -> Result<GeoPoint> {
        let geo = GeoPoint::new(point.x, point.y);
        if !geo.is_valid() {
            return Err(ProjectionError::OutOfDomain {
                reference: self.describe(),
                reason: format!("({}, {}) is not a geographic position", point.x, point.y),
            }
            .into());
        }
        Ok(geo)
    }

    fn from_geographic(&self, geo: GeoPoint) -> Result<Point2> {
        self.to_geographic(Point2::new(geo.lon, geo.lat))
            .map(|g| Point2::new(g.lon, g.lat))
    }
}
