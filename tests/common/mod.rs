//! Common test utilities for integration tests.

use orrery::catalog::{BodyRecord, OrbitRecord};
use orrery::orbit::OrbitalElements;
use orrery::types::{AU_TO_KM, G, SECOND_TO_DAY};
use std::f64::consts::TAU;

/// Orbital elements with zeroed angles, for geometry-independent checks.
pub fn plain_elements(eccentricity: f64, semi_major_axis: f64, period: f64) -> OrbitalElements {
    OrbitalElements {
        eccentricity,
        semi_major_axis,
        inclination: 0.0,
        ascending_node: 0.0,
        periapsis_arg: 0.0,
        mean_anomaly_at_epoch: 0.0,
        period,
        orbiting_body: None,
        soi_radius: 0.0,
    }
}

/// A minimal heliocentric body record.
pub fn planet_record(
    name: &str,
    mass: f64,
    semi_major_axis: f64,
    period: Option<f64>,
) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        mass,
        radius: 1000.0,
        axial_tilt: 0.0,
        revolution_period: Some(1.0),
        orbit: OrbitRecord {
            eccentricity: 0.01,
            semi_major_axis,
            inclination: 0.0,
            ascending_node: 0.0,
            periapsis_arg: 0.0,
            mean_anomaly_at_epoch: 0.0,
            period,
            orbiting_body: None,
            soi_radius: 0.0,
        },
        moons: vec![],
    }
}

/// Kepler's third law period in days, for cross-checking the resolver.
pub fn kepler_period_days(semi_major_axis_au: f64, parent_mass: f64) -> f64 {
    let semi_major_axis_m = semi_major_axis_au * AU_TO_KM * 1000.0;
    TAU * (semi_major_axis_m.powi(3) / (G * parent_mass)).sqrt() * SECOND_TO_DAY
}
