//! Diameter of planar features and its reconciliation with surface
//! distance on a reference ellipsoid.
//!
//! The pipeline is: vertex ring → [`hull::ConvexHull`] → rotating calipers
//! ([`hull::AntipodalPairs`]) → [`hull::Diameter`] → back to lon/lat via a
//! [`projection::LocalOrthographic`] plane → [`geodesy::haversine`] and
//! [`geodesy::geodesic_distance`]. [`analysis::AnalyzeFeature`] runs all of
//! it for one feature.

pub mod analysis;
pub mod error;
pub mod geodesy;
pub mod hull;
pub mod math;
pub mod projection;

pub use error::{CaliperError, Result};
