use std::f64::consts::{PI, TAU};

use super::{haversine, Ellipsoid, GeoPoint};

/// Iteration controls for the ellipsoidal inverse solution.
#[derive(Debug, Clone, Copy)]
pub struct GeodesicParams {
    /// Upper bound on longitude refinement steps.
    pub max_iterations: usize,
    /// Convergence threshold on the change in auxiliary longitude (radians).
    pub tolerance: f64,
}

impl Default for GeodesicParams {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-12,
        }
    }
}

/// Result of [`geodesic_distance`].
///
/// `converged == false` means the iteration hit its bound or a
/// near-antipodal degeneracy, and `meters` holds the great-circle
/// distance on a sphere of radius `a` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicDistance {
    pub meters: f64,
    pub converged: bool,
    /// Number of λ iterations performed, at most `max_iterations`; 0 on a
    /// sphere, where no iteration is needed.
    pub iterations: usize,
}

impl GeodesicDistance {
    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.meters / 1000.0
    }
}

/// Below this `sin σ` the two points are coincident or antipodal.
const SIN_SIGMA_EPS: f64 = 1e-15;

/// Shortest distance between `p` and `q` on `ellipsoid` (Vincenty 1975).
///
/// Spheres are solved exactly as a great circle. Coincident points return
/// zero. When the longitude iteration does not settle within
/// `params.max_iterations`, leaves `[-π, π]`, or meets an antipodal
/// degeneracy, the spherical approximation on the semi-major axis is
/// returned with `converged` cleared.
#[must_use]
pub fn geodesic_distance(
    p: &GeoPoint,
    q: &GeoPoint,
    ellipsoid: &Ellipsoid,
    params: &GeodesicParams,
) -> GeodesicDistance {
    if ellipsoid.is_sphere() {
        return GeodesicDistance {
            meters: haversine(p, q, ellipsoid.a),
            converged: true,
            iterations: 0,
        };
    }

    let a = ellipsoid.a;
    let b = ellipsoid.b;
    let f = ellipsoid.flattening();

    let (lon1, lat1) = p.to_radians();
    let (lon2, lat2) = q.to_radians();
    let l = wrap_pi(lon2 - lon1);

    let u1 = ((1.0 - f) * lat1.tan()).atan();
    let u2 = ((1.0 - f) * lat2.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;
    while iterations < params.max_iterations {
        iterations += 1;
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;

        if sin_sigma < SIN_SIGMA_EPS {
            if cos_sigma > 0.0 {
                return GeodesicDistance {
                    meters: 0.0,
                    converged: true,
                    iterations,
                };
            }
            break;
        }

        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

        // Equatorial lines have cos²α = 0.
        let cos_2sigma_m = if cos2_alpha > SIN_SIGMA_EPS {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let delta = (lambda - lambda_prev).abs();
        tracing::trace!(iterations, delta, "vincenty step");

        if lambda.abs() > PI {
            break;
        }

        if delta < params.tolerance {
            let u_sq = cos2_alpha * (a * a - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            return GeodesicDistance {
                meters: b * big_a * (sigma - delta_sigma),
                converged: true,
                iterations,
            };
        }
    }

    let meters = haversine(p, q, a);
    tracing::warn!(
        iterations,
        max_iterations = params.max_iterations,
        meters,
        "geodesic solution did not converge, using great-circle distance"
    );
    GeodesicDistance {
        meters,
        converged: false,
        iterations,
    }
}

/// Wraps an angle into `[-π, π)`.
fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}
