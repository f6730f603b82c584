use crate::math::Point2;

/// Rotating calipers walk over the two chains of a [`super::ConvexHull`].
///
/// Yields `(upper[i], lower[j])` for every pair of vertices that can be
/// touched by two parallel supporting lines, starting from the leftmost
/// upper vertex and the rightmost lower vertex. The sequence has
/// `O(n)` entries, always contains the farthest pair, and its order is
/// fixed for a given hull. A single-point hull yields nothing.
#[derive(Debug, Clone)]
pub struct AntipodalPairs<'a> {
    upper: &'a [Point2],
    lower: &'a [Point2],
    i: usize,
    j: usize,
}

impl<'a> AntipodalPairs<'a> {
    pub(crate) fn new(upper: &'a [Point2], lower: &'a [Point2]) -> Self {
        Self {
            upper,
            lower,
            i: 0,
            j: lower.len().saturating_sub(1),
        }
    }

    /// Materializes the remaining pairs.
    #[must_use]
    pub fn collect_pairs(self) -> Vec<(Point2, Point2)> {
        self.collect()
    }

    fn finished(&self) -> bool {
        self.upper.is_empty()
            || self.lower.is_empty()
            || (self.i + 1 >= self.upper.len() && self.j == 0)
    }
}

impl Iterator for AntipodalPairs<'_> {
    type Item = (Point2, Point2);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished() {
            return None;
        }
        let (u, l) = (self.upper, self.lower);
        let (i, j) = (self.i, self.j);
        let item = (u[i], l[j]);

        if i == u.len() - 1 {
            // Upper chain exhausted, sweep the rest of the lower one.
            self.j -= 1;
        } else if j == 0 {
            self.i += 1;
        } else if (u[i + 1].y - u[i].y) * (l[j].x - l[j - 1].x)
            > (l[j].y - l[j - 1].y) * (u[i + 1].x - u[i].x)
        {
            // Slopes compared by cross-multiplying; vertical edges are fine.
            self.i += 1;
        } else {
            self.j -= 1;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished() {
            return (0, Some(0));
        }
        let remaining = (self.upper.len() - 1 - self.i) + self.j;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AntipodalPairs<'_> {}
