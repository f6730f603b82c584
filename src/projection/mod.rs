//! Moving feature geometry between spatial references.
//!
//! A [`SpatialRef`] maps its planar coordinates to geographic lon/lat and
//! back. The feature pipeline uses three of them: the source reference the
//! ring was digitized in, plain [`LonLat`], and a [`LocalOrthographic`]
//! plane centred on the feature so that hull, diameter and area are
//! measured with little distortion.

mod equirectangular;
mod lonlat;
mod orthographic;

pub use equirectangular::Equirectangular;
pub use lonlat::LonLat;
pub use orthographic::LocalOrthographic;

use crate::error::{GeometryError, Result};
use crate::geodesy::GeoPoint;
use crate::math::{centroid_2d, envelope_2d, polyline_centroid_2d, Point2};

/// A planar coordinate system that can be related to lon/lat.
///
/// Implement this to plug an external reprojection library into the
/// pipeline.
pub trait SpatialRef {
    /// Human-readable identification used in error messages.
    fn describe(&self) -> String;

    /// Planar coordinates to geographic degrees.
    ///
    /// # Errors
    ///
    /// Returns a `ProjectionError` if `point` has no geographic image.
    fn to_geographic(&self, point: Point2) -> Result<GeoPoint>;

    /// Geographic degrees to planar coordinates.
    ///
    /// # Errors
    ///
    /// Returns a `ProjectionError` if `geo` cannot be projected.
    fn from_geographic(&self, geo: GeoPoint) -> Result<Point2>;
}

/// Centroid and bounding box of a feature, in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    pub centroid: GeoPoint,
    /// Image of the source envelope's minimum corner.
    pub min: GeoPoint,
    /// Image of the source envelope's maximum corner.
    pub max: GeoPoint,
}

/// Maps one source point to lon/lat.
///
/// # Errors
///
/// Propagates the reference's `ProjectionError`.
pub fn to_geographic<S: SpatialRef + ?Sized>(point: Point2, source: &S) -> Result<GeoPoint> {
    source.to_geographic(point)
}

/// Computes centroid and envelope in source coordinates and maps them to
/// lon/lat.
///
/// A `closed` ring gets the area-weighted centroid; an open polyline gets
/// the length-weighted centroid of its segments.
///
/// # Errors
///
/// Returns `GeometryError::EmptyGeometry` for an empty ring and propagates
/// projection failures.
pub fn centroid_and_envelope<S: SpatialRef + ?Sized>(
    ring: &[Point2],
    closed: bool,
    source: &S,
) -> Result<GeoExtent> {
    let centroid = if closed {
        centroid_2d(ring)
    } else {
        polyline_centroid_2d(ring)
    }
    .ok_or(GeometryError::EmptyGeometry)?;
    let (min, max) = envelope_2d(ring).ok_or(GeometryError::EmptyGeometry)?;
    Ok(GeoExtent {
        centroid: source.to_geographic(centroid)?,
        min: source.to_geographic(min)?,
        max: source.to_geographic(max)?,
    })
}

/// Reprojects every vertex of `ring` from `source` into `local`.
///
/// # Errors
///
/// Fails on the first vertex either reference cannot map.
pub fn reproject_ring<S: SpatialRef + ?Sized>(
    ring: &[Point2],
    source: &S,
    local: &LocalOrthographic,
) -> Result<Vec<Point2>> {
    ring.iter()
        .map(|&p| local.from_geographic(source.to_geographic(p)?))
        .collect()
}

/// Maps a point of the local plane back to lon/lat.
///
/// # Errors
///
/// Returns a `ProjectionError` for points outside the projected disc.
pub fn local_to_geographic(point: Point2, local: &LocalOrthographic) -> Result<GeoPoint> {
    local.to_geographic(point)
}
