use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing vertex contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let origin = points[0];
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i] - origin;
        let b = points[(i + 1) % n] - origin;
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Returns the axis-aligned envelope `(min, max)` of a point set.
#[must_use]
pub fn envelope_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Computes the centroid of a ring.
///
/// Area-weighted when the ring encloses a non-zero area. Otherwise the
/// vertices are treated as a polyline and the centroid is weighted by
/// segment length; a ring whose vertices all coincide yields its first
/// vertex. Returns `None` for an empty slice.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    let origin = *points.first()?;
    let n = points.len();

    // Accumulate relative to the first vertex; projected coordinates are
    // often large enough to lose precision in the cross products.
    let mut area2 = 0.0;
    let mut acc = Vector2::zeros();
    if n >= 3 {
        for i in 0..n {
            let a = points[i] - origin;
            let b = points[(i + 1) % n] - origin;
            let cross = a.x * b.y - b.x * a.y;
            area2 += cross;
            acc += (a + b) * cross;
        }
    }

    let (min, max) = envelope_2d(points)?;
    let extent = (max - min).norm();
    if area2.abs() > TOLERANCE * extent * extent {
        return Some(origin + acc / (3.0 * area2));
    }

    polyline_centroid_2d(points)
}

/// Computes the length-weighted centroid of an open polyline.
///
/// The last vertex is not joined back to the first. A polyline whose
/// vertices all coincide yields its first vertex. Returns `None` for an
/// empty slice.
#[must_use]
pub fn polyline_centroid_2d(points: &[Point2]) -> Option<Point2> {
    let origin = *points.first()?;
    let mut total = 0.0;
    let mut weighted = Vector2::zeros();
    for w in points.windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        let len = (b - a).norm();
        total += len;
        weighted += (a + b) * (0.5 * len);
    }
    if total > 0.0 {
        Some(origin + weighted / total)
    } else {
        Some(origin)
    }
}
