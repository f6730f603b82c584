//! Convex hull of a planar point set, split into upper and lower chains.
//!
//! The chains are built by a Graham scan over the points sorted by x
//! (Andrew's variant) and are the input to the rotating calipers walk in
//! [`calipers`], which in turn feeds [`diameter`].

mod calipers;
mod diameter;

pub use calipers::AntipodalPairs;
pub use diameter::{diameter, diameter_of_points, Diameter};

use crate::error::{GeometryError, Result};
use crate::math::{lexicographic_cmp, orientation, Point2, TOLERANCE};

/// Convex hull as two chains sharing their endpoints.
///
/// Both chains start at the leftmost point (lowest x, then lowest y) and
/// end at the rightmost point. `upper` bends clockwise over the top of the
/// point set, `lower` counter-clockwise along the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    pub upper: Vec<Point2>,
    pub lower: Vec<Point2>,
}

impl ConvexHull {
    /// Builds the hull of `points`.
    ///
    /// Duplicates are kept as given and colinear input collapses to a
    /// segment hull.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyGeometry` if `points` is empty.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyGeometry.into());
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(lexicographic_cmp);

        let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
        let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
        for p in sorted {
            while upper.len() > 1
                && orientation(&upper[upper.len() - 2], &upper[upper.len() - 1], &p) <= 0.0
            {
                upper.pop();
            }
            while lower.len() > 1
                && orientation(&lower[lower.len() - 2], &lower[lower.len() - 1], &p) >= 0.0
            {
                lower.pop();
            }
            upper.push(p);
            lower.push(p);
        }

        tracing::debug!(
            input = points.len(),
            upper = upper.len(),
            lower = lower.len(),
            "built convex hull"
        );
        Ok(Self { upper, lower })
    }

    /// Number of distinct ring vertices (see [`ConvexHull::vertices`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len().saturating_sub(2)
    }

    /// `true` only for a hull assembled by hand with empty chains;
    /// [`ConvexHull::from_points`] never returns one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// The closed hull ring: `upper` followed by the interior of the
    /// reversed `lower` chain, so the shared endpoints appear once.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        let mut ring = Vec::with_capacity(self.len());
        ring.extend_from_slice(&self.upper);
        ring.extend(
            self.lower
                .iter()
                .rev()
                .skip(1)
                .take(self.lower.len().saturating_sub(2)),
        );
        ring
    }

    /// Whether `p` lies inside or on the boundary of the hull. A hull
    /// with empty chains contains nothing.
    ///
    /// The ring from [`ConvexHull::vertices`] runs clockwise, so interior
    /// points see every edge with a non-negative orientation.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let ring = self.vertices();
        let (Some(&a), Some(&b)) = (ring.first(), ring.last()) else {
            return false;
        };
        let scale = ring
            .iter()
            .map(|q| q.x.abs().max(q.y.abs()))
            .fold(p.x.abs().max(p.y.abs()), f64::max)
            .max(1.0);
        let eps = TOLERANCE * scale * scale;

        if ring.len() < 3 {
            let within = p.x >= a.x.min(b.x) - eps
                && p.x <= a.x.max(b.x) + eps
                && p.y >= a.y.min(b.y) - eps
                && p.y <= a.y.max(b.y) + eps;
            return within && orientation(&a, &b, p).abs() <= eps;
        }

        let n = ring.len();
        (0..n).all(|k| orientation(&ring[k], &ring[(k + 1) % n], p) >= -eps)
    }

    /// Walks the antipodal vertex pairs of this hull.
    #[must_use]
    pub fn antipodal_pairs(&self) -> AntipodalPairs<'_> {
        AntipodalPairs::new(&self.upper, &self.lower)
    }

    /// The farthest pair of hull vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateHull` if the hull is a single point.
    pub fn diameter(&self) -> Result<Diameter> {
        diameter(self.antipodal_pairs())
    }
}
