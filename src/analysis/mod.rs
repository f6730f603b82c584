//! Per-feature measurement: extent, area, hull diameter and the geodetic
//! cross-check of that diameter.

mod report;

pub use report::{format_coord, ReportFormat};

use crate::error::{GeometryError, Result};
use crate::geodesy::{
    geodesic_distance, haversine, Ellipsoid, GeoPoint, GeodesicDistance, GeodesicParams,
};
use crate::hull::{ConvexHull, Diameter};
use crate::math::{signed_area_2d, Point2};
use crate::projection::{
    centroid_and_envelope, local_to_geographic, reproject_ring, GeoExtent, LocalOrthographic,
    SpatialRef,
};

/// Everything measured for one feature.
///
/// Planar quantities (`hull`, `diameter`) are in metres of the local
/// orthographic plane centred on the feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport {
    pub extent: GeoExtent,
    pub area_km2: f64,
    pub hull: ConvexHull,
    pub diameter: Diameter,
    pub diameter_km: f64,
    /// The diameter endpoints in lon/lat.
    pub endpoints: (GeoPoint, GeoPoint),
    pub haversine_km: f64,
    pub geodesic: GeodesicDistance,
}

impl FeatureReport {
    #[must_use]
    pub fn geodesic_km(&self) -> f64 {
        self.geodesic.kilometers()
    }
}

/// Measures a single feature ring given in `source` coordinates.
///
/// The ring is reprojected into a [`LocalOrthographic`] plane tangent at
/// its centroid before hull, diameter and area are computed, and the
/// diameter endpoints are mapped back to lon/lat for the haversine and
/// ellipsoidal distances.
pub struct AnalyzeFeature<'a, S: SpatialRef + ?Sized> {
    ring: &'a [Point2],
    source: &'a S,
    ellipsoid: Ellipsoid,
    params: GeodesicParams,
    closed: bool,
}

impl<'a, S: SpatialRef + ?Sized> AnalyzeFeature<'a, S> {
    /// Creates a new `AnalyzeFeature` for a closed ring.
    #[must_use]
    pub fn new(ring: &'a [Point2], source: &'a S, ellipsoid: Ellipsoid) -> Self {
        Self {
            ring,
            source,
            ellipsoid,
            params: GeodesicParams::default(),
            closed: true,
        }
    }

    /// Sets the iteration controls of the ellipsoidal solver.
    #[must_use]
    pub fn with_geodesic_params(mut self, params: GeodesicParams) -> Self {
        self.params = params;
        self
    }

    /// Marks the geometry as a polygon ring (`true`) or polyline (`false`).
    /// Polylines report zero area and are centred on the length-weighted
    /// centroid of their segments.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Executes the measurement.
    ///
    /// # Errors
    ///
    /// - `GeometryError::EmptyGeometry` if the ring has no vertices.
    /// - `GeometryError::DegenerateHull` if all vertices coincide.
    /// - `ProjectionError` if any vertex cannot be moved into the local
    ///   plane or the diameter endpoints cannot be moved back.
    pub fn execute(&self) -> Result<FeatureReport> {
        if self.ring.is_empty() {
            return Err(GeometryError::EmptyGeometry.into());
        }

        let extent = centroid_and_envelope(self.ring, self.closed, self.source)?;
        let local = LocalOrthographic::new(extent.centroid, &self.ellipsoid)?;
        let local_ring = reproject_ring(self.ring, self.source, &local)?;

        let area_km2 = if self.closed {
            signed_area_2d(&local_ring).abs() / 1.0e6
        } else {
            0.0
        };

        let hull = ConvexHull::from_points(&local_ring)?;
        let diameter = hull.diameter()?;
        let (p, q) = diameter.pair;
        let endpoints = (
            local_to_geographic(p, &local)?,
            local_to_geographic(q, &local)?,
        );

        let haversine_km = haversine(&endpoints.0, &endpoints.1, self.ellipsoid.a) / 1000.0;
        let geodesic = geodesic_distance(&endpoints.0, &endpoints.1, &self.ellipsoid, &self.params);

        tracing::debug!(
            source = %self.source.describe(),
            vertices = self.ring.len(),
            hull = hull.len(),
            diameter_km = diameter.distance() / 1000.0,
            haversine_km,
            geodesic_km = geodesic.kilometers(),
            converged = geodesic.converged,
            "analyzed feature"
        );

        Ok(FeatureReport {
            extent,
            area_km2,
            diameter_km: diameter.distance() / 1000.0,
            hull,
            diameter,
            endpoints,
            haversine_km,
            geodesic,
        })
    }
}
