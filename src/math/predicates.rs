use std::cmp::Ordering;

use super::{Point2, Vector2};

/// Orientation of the triple `p -> q -> r`.
///
/// Positive if the turn is clockwise, negative if counter-clockwise and
/// zero if the three points are colinear.
#[must_use]
#[inline]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> f64 {
    (q.y - p.y) * (r.x - p.x) - (q.x - p.x) * (r.y - p.y)
}

/// Squared Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance_squared(p: &Point2, q: &Point2) -> f64 {
    let d: Vector2 = q - p;
    d.x * d.x + d.y * d.y
}

/// Orders points by `x`, breaking ties by `y`.
///
/// Uses the IEEE total order so the comparison never panics on NaN.
#[must_use]
pub fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
