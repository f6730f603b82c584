use crate::error::{GeometryError, Result};

/// Reference ellipsoid of the measured body.
///
/// `a` is the semi-major (equatorial) axis and `b` the semi-minor (polar)
/// axis, both in metres. A sphere has `a == b` and an infinite
/// `inverse_flattening`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub b: f64,
    pub inverse_flattening: f64,
}

/// WGS 84.
pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6_378_137.0,
    b: 6_356_752.314_245_179,
    inverse_flattening: 298.257_223_563,
};

/// Mars, IAU 2000.
pub const MARS: Ellipsoid = Ellipsoid {
    a: 3_396_190.0,
    b: 3_376_200.0,
    inverse_flattening: 169.894_447_223_612,
};

/// The Moon, IAU 2000 sphere.
pub const MOON: Ellipsoid = Ellipsoid {
    a: 1_737_400.0,
    b: 1_737_400.0,
    inverse_flattening: f64::INFINITY,
};

impl Ellipsoid {
    /// Builds an ellipsoid from its semi-axes.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidEllipsoid` unless `a >= b > 0` and
    /// both are finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite()) || b <= 0.0 || b > a {
            return Err(GeometryError::InvalidEllipsoid { a, b }.into());
        }
        let inverse_flattening = if a > b { a / (a - b) } else { f64::INFINITY };
        Ok(Self {
            a,
            b,
            inverse_flattening,
        })
    }

    /// Builds an ellipsoid from its semi-major axis and inverse flattening.
    ///
    /// An inverse flattening of zero or infinity denotes a sphere.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidEllipsoid` for a non-positive axis or
    /// an inverse flattening in `(0, 1]`.
    pub fn from_inverse_flattening(a: f64, inverse_flattening: f64) -> Result<Self> {
        if inverse_flattening == 0.0 || inverse_flattening.is_infinite() {
            return Self::sphere(a);
        }
        if !inverse_flattening.is_finite() || inverse_flattening <= 1.0 {
            return Err(GeometryError::InvalidEllipsoid { a, b: f64::NAN }.into());
        }
        let b = a * (1.0 - 1.0 / inverse_flattening);
        let mut ellipsoid = Self::new(a, b)?;
        ellipsoid.inverse_flattening = inverse_flattening;
        Ok(ellipsoid)
    }

    /// Builds a sphere of the given radius.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidEllipsoid` for a non-positive radius.
    pub fn sphere(radius: f64) -> Result<Self> {
        Self::new(radius, radius)
    }

    /// Flattening `f = (a - b) / a`.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_sphere(&self) -> bool {
        self.a == self.b
    }

    /// Arithmetic mean radius `(2a + b) / 3`.
    #[must_use]
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.a + self.b) / 3.0
    }
}
