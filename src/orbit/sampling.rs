//! Sampling of orbit paths for display.

use bevy::math::DVec3;

use crate::orbit::OrbitError;
use crate::orbit::elements::OrbitalElements;
use crate::orbit::projection::compute_position;

/// Default sample count for an orbit path.
pub const DEFAULT_SAMPLE_COUNT: usize = 128;

/// Sample count for the high-resolution path of a focused body.
pub const FINE_SAMPLE_COUNT: usize = 2048;

/// Sample one full revolution of an orbit at uniform time steps.
///
/// # Arguments
/// * `orbit` - Orbital elements with a resolved, non-zero period
/// * `sample_count` - Number of uniform steps, must be positive
///
/// # Returns
/// `sample_count + 1` positions in display units spanning exactly one
/// period. The path closes to within solver tolerance; the first and last
/// points are not forced equal.
pub fn sample_orbit(
    orbit: &OrbitalElements,
    sample_count: usize,
) -> Result<Vec<DVec3>, OrbitError> {
    if sample_count == 0 {
        return Err(OrbitError::NonPositiveSampleCount);
    }

    let dt = orbit.period / sample_count as f64;
    let mut points = Vec::with_capacity(sample_count + 1);
    for i in 0..=sample_count {
        points.push(compute_position(orbit, dt * i as f64)?);
    }

    Ok(points)
}
