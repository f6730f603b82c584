use super::GeoPoint;

/// Central angle between two points on a sphere, in radians.
#[must_use]
pub fn great_circle_angle(p: &GeoPoint, q: &GeoPoint) -> f64 {
    let (lon1, lat1) = p.to_radians();
    let (lon2, lat2) = q.to_radians();
    let half_dlat = (lat2 - lat1) * 0.5;
    let half_dlon = (lon2 - lon1) * 0.5;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance on a sphere of `radius` (haversine formula).
///
/// The result is in the units of `radius`. Loses accuracy near antipodal
/// points and on strongly flattened bodies; see
/// [`super::geodesic_distance`] for the ellipsoidal solution.
#[must_use]
pub fn haversine(p: &GeoPoint, q: &GeoPoint, radius: f64) -> f64 {
    radius * great_circle_angle(p, q)
}
