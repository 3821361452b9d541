//! Property-based tests for the orbit engine using proptest.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::elements::OrbitalElements;
use super::projection::compute_position;
use super::sampling::sample_orbit;
use super::solver::{compute_distance_and_true_anomaly, solve_eccentric_anomaly};
use crate::types::ORBIT_SCALE;

fn elements(eccentricity: f64, semi_major_axis: f64, period: f64) -> OrbitalElements {
    OrbitalElements {
        eccentricity,
        semi_major_axis,
        inclination: 0.3,
        ascending_node: 0.8,
        periapsis_arg: 1.2,
        mean_anomaly_at_epoch: 0.5,
        period,
        orbiting_body: None,
        soi_radius: 0.0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Below the near-circular threshold the solver is the closed-form
    /// first-order estimate, bit for bit.
    #[test]
    fn prop_fast_path_is_exact(
        eccentricity in 0.0f64..0.05,
        mean_anomaly_turns in 0.0f64..1.0,
    ) {
        let m = mean_anomaly_turns * TAU;
        let expected = m + eccentricity * m.sin() * (1.0 + eccentricity * m.cos());
        let solved = solve_eccentric_anomaly(eccentricity, m).unwrap();
        prop_assert_eq!(solved, expected);
    }

    /// The converged Newton result is a fixed point of the iteration to
    /// within the convergence tolerance.
    #[test]
    fn prop_newton_result_is_fixed_point(
        eccentricity in 0.05f64..0.97,
        mean_anomaly_turns in 0.0f64..1.0,
    ) {
        let e = eccentricity;
        let m = mean_anomaly_turns * TAU;
        let solved = solve_eccentric_anomaly(e, m).unwrap();
        let next = solved - (solved - e * solved.sin() - m) / (1.0 - e * solved.cos());
        prop_assert!(
            (next - solved).abs() <= 0.001,
            "e={}, M={}, E={}, next={}",
            e, m, solved, next
        );
    }

    /// A circular orbit holds its radius at the semi-major axis for any
    /// mean anomaly.
    #[test]
    fn prop_circular_radius_is_constant(
        mean_anomaly_turns in 0.0f64..1.0,
        semi_major_axis in 0.1f64..40.0,
    ) {
        let m = mean_anomaly_turns * TAU;
        let orbit = elements(0.0, semi_major_axis, 365.25);
        let (_, distance) = compute_distance_and_true_anomaly(&orbit, m).unwrap();
        prop_assert!(
            (distance - semi_major_axis).abs() < 1e-9 * semi_major_axis,
            "radius {} drifted from {}",
            distance, semi_major_axis
        );
    }

    /// One period later a body is back where it started, to within the
    /// solver tolerance scaled by the orbit size.
    #[test]
    fn prop_position_is_periodic(
        eccentricity in 0.0f64..0.6,
        start_time_days in 0.0f64..3650.0,
        semi_major_axis in 0.2f64..30.0,
    ) {
        let orbit = elements(eccentricity, semi_major_axis, 365.25);
        let p0 = compute_position(&orbit, start_time_days).unwrap();
        let p1 = compute_position(&orbit, start_time_days + orbit.period).unwrap();
        let tolerance = 0.005 * semi_major_axis * ORBIT_SCALE;
        prop_assert!(
            (p1 - p0).length() < tolerance,
            "moved {} display units over one period",
            (p1 - p0).length()
        );
    }

    /// Sampling yields one more point than the sample count, for any count.
    #[test]
    fn prop_sample_count_off_by_one(
        sample_count in 1usize..512,
        eccentricity in 0.0f64..0.9,
    ) {
        let orbit = elements(eccentricity, 1.0, 365.25);
        let points = sample_orbit(&orbit, sample_count).unwrap();
        prop_assert_eq!(points.len(), sample_count + 1);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use crate::orbit::OrbitError;
    use std::f64::consts::PI;

    #[test]
    fn test_solver_handles_boundary_mean_anomalies() {
        for m in [0.0, PI, TAU - 0.001, TAU, -PI, 100.0] {
            let solved = solve_eccentric_anomaly(0.5, m).unwrap();
            assert!(solved.is_finite(), "E not finite at M={}", m);
        }
    }

    #[test]
    fn test_mean_anomaly_is_not_normalized() {
        // Inputs beyond one revolution stay in their own revolution
        let solved = solve_eccentric_anomaly(0.5, 50.0).unwrap();
        assert!(
            (solved - 50.0).abs() < 1.0,
            "E={} should track the un-normalized input",
            solved
        );
    }

    #[test]
    fn test_rejection_applies_at_both_ends_of_the_range() {
        assert!(solve_eccentric_anomaly(0.9799, 1.0).is_ok());
        assert_eq!(
            solve_eccentric_anomaly(0.98, 1.0),
            Err(OrbitError::EccentricityOutOfRange(0.98))
        );
    }
}
