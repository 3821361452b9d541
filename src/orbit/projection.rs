//! Projection of orbital elements into 3D display coordinates.

use bevy::math::DVec3;
use std::f64::consts::TAU;

use crate::orbit::OrbitError;
use crate::orbit::elements::OrbitalElements;
use crate::orbit::solver::compute_distance_and_true_anomaly;
use crate::types::ORBIT_SCALE;

/// Decimal places kept when clamping the mean anomaly, as a power of ten.
const MEAN_ANOMALY_PRECISION: f64 = 1.0e6;

/// Compute a body's position at a simulation time, relative to the body it
/// orbits.
///
/// The mean anomaly is floored to six decimal places before solving, so
/// times closer together than the resulting grid produce bit-identical
/// positions. Reference outputs assume exactly this clamp.
///
/// # Arguments
/// * `orbit` - Orbital elements with a resolved, non-zero period
/// * `time` - Simulation time in days since the scene epoch
///
/// # Returns
/// Position in display units (`ORBIT_SCALE` per AU), y-up, with the orbital
/// reference plane in x/z.
pub fn compute_position(orbit: &OrbitalElements, time: f64) -> Result<DVec3, OrbitError> {
    let raw_mean_anomaly = orbit.mean_anomaly_at_epoch + TAU * time / orbit.period;
    let mean_anomaly = (raw_mean_anomaly * MEAN_ANOMALY_PRECISION).floor() / MEAN_ANOMALY_PRECISION;

    let (true_anomaly, distance) = compute_distance_and_true_anomaly(orbit, mean_anomaly)?;

    // Rotate out of the orbital plane: argument of periapsis, inclination,
    // then longitude of the ascending node
    let angle = true_anomaly + orbit.periapsis_arg;
    let sin_node = orbit.ascending_node.sin();
    let cos_node = orbit.ascending_node.cos();
    let sin_angle = angle.sin();
    let cos_angle = angle.cos();
    let sin_inc = orbit.inclination.sin();
    let cos_inc = orbit.inclination.cos();

    let x = distance * (cos_node * cos_angle - sin_node * sin_angle * cos_inc);
    let z = distance * (sin_node * cos_angle + cos_node * sin_angle * cos_inc);
    let y = distance * (sin_angle * sin_inc);

    Ok(DVec3::new(x, y, z) * ORBIT_SCALE)
}
