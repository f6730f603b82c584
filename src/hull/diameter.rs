use super::ConvexHull;
use crate::error::{GeometryError, Result};
use crate::math::{distance_squared, Point2};

/// The farthest pair of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diameter {
    /// The two endpoints, upper-chain vertex first.
    pub pair: (Point2, Point2),
    /// Squared distance between the endpoints.
    pub distance_squared: f64,
}

impl Diameter {
    /// Distance between the endpoints, in the units of the input points.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// Selects the pair with the largest squared distance.
///
/// Ties keep the first pair seen, so the result is deterministic for the
/// fixed order of [`super::AntipodalPairs`].
///
/// # Errors
///
/// Returns `GeometryError::DegenerateHull` if `pairs` is empty or every
/// pair coincides, i.e. the hull is a single point.
pub fn diameter<I>(pairs: I) -> Result<Diameter>
where
    I: IntoIterator<Item = (Point2, Point2)>,
{
    let mut best: Option<Diameter> = None;
    for (p, q) in pairs {
        let d2 = distance_squared(&p, &q);
        if best.is_none_or(|b| d2 > b.distance_squared) {
            best = Some(Diameter {
                pair: (p, q),
                distance_squared: d2,
            });
        }
    }

    match best {
        Some(d) if d.distance_squared > 0.0 => {
            tracing::debug!(distance = d.distance(), "found diameter");
            Ok(d)
        }
        Some(_) => {
            Err(GeometryError::DegenerateHull("all hull vertices coincide".to_string()).into())
        }
        None => Err(GeometryError::DegenerateHull(
            "hull has a single vertex, two are required".to_string(),
        )
        .into()),
    }
}

/// Builds the hull of `points` and returns its diameter.
///
/// # Errors
///
/// Returns `GeometryError::EmptyGeometry` for an empty slice and
/// `GeometryError::DegenerateHull` if all points coincide.
pub fn diameter_of_points(points: &[Point2]) -> Result<Diameter> {
    ConvexHull::from_points(points)?.diameter()
}
