//! Newton's method solver for the Kepler equation.

use crate::orbit::OrbitError;
use crate::orbit::elements::OrbitalElements;

/// Eccentricities at or above this value are rejected as unsolvable.
pub const MAX_SOLVABLE_ECCENTRICITY: f64 = 0.98;

/// Below this eccentricity the first-order estimate is already within the
/// convergence tolerance, so Newton iteration is skipped.
pub const NEAR_CIRCULAR_ECCENTRICITY: f64 = 0.05;

/// Convergence tolerance between successive estimates, in radians.
const CONVERGENCE_TOLERANCE: f64 = 0.001;

/// Iteration cap; convergence normally lands in well under ten steps.
const MAX_ITERATIONS: usize = 50;

/// Solve Kepler's equation M = E - e*sin(E) for the eccentric anomaly E.
///
/// The mean anomaly is taken as-is, without normalization into [0, 2pi);
/// the solution then lands in the same revolution as the input.
///
/// # Arguments
/// * `eccentricity` - Orbital eccentricity, must be below 0.98
/// * `mean_anomaly` - Mean anomaly M in radians
///
/// # Returns
/// Eccentric anomaly E in radians, or an error for out-of-range
/// eccentricities and non-convergence.
///
/// TODO: admitting e >= 0.98 needs a near-parabolic formulation
/// (https://stjarnhimlen.se/comp/ppcomp.html) instead of plain Newton steps.
pub fn solve_eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> Result<f64, OrbitError> {
    if eccentricity >= MAX_SOLVABLE_ECCENTRICITY {
        return Err(OrbitError::EccentricityOutOfRange(eccentricity));
    }

    // First-order estimate in e, exact enough on its own near a circle
    let mut estimate = mean_anomaly
        + eccentricity * mean_anomaly.sin() * (1.0 + eccentricity * mean_anomaly.cos());

    if eccentricity < NEAR_CIRCULAR_ECCENTRICITY {
        return Ok(estimate);
    }

    for _ in 0..MAX_ITERATIONS {
        // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
        let refined = estimate
            - (estimate - eccentricity * estimate.sin() - mean_anomaly)
                / (1.0 - eccentricity * estimate.cos());

        // Convergence is judged on the step size; the pre-step estimate is
        // the returned value.
        if (estimate - refined).abs() <= CONVERGENCE_TOLERANCE {
            return Ok(estimate);
        }

        estimate = refined;
    }

    Err(OrbitError::SolverDidNotConverge {
        eccentricity,
        mean_anomaly,
        iterations: MAX_ITERATIONS,
    })
}

/// Derive the true anomaly and radial distance at a mean anomaly.
///
/// # Arguments
/// * `orbit` - Orbital elements, semi-major axis in AU
/// * `mean_anomaly` - Mean anomaly M in radians
///
/// # Returns
/// `(true_anomaly, distance)`: the true anomaly in radians and the distance
/// from the focus in AU.
pub fn compute_distance_and_true_anomaly(
    orbit: &OrbitalElements,
    mean_anomaly: f64,
) -> Result<(f64, f64), OrbitError> {
    let eccentric_anomaly = solve_eccentric_anomaly(orbit.eccentricity, mean_anomaly)?;

    // Orbital-plane coordinates with the focus at the origin
    let x = orbit.semi_major_axis * (eccentric_anomaly.cos() - orbit.eccentricity);
    let y = orbit.semi_major_axis
        * (1.0 - orbit.eccentricity * orbit.eccentricity).sqrt()
        * eccentric_anomaly.sin();

    let true_anomaly = y.atan2(x);
    let distance = (x * x + y * y).sqrt();

    Ok((true_anomaly, distance))
}
