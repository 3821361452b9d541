//! Derivation of missing orbital and rotation periods.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::catalog::body::BodyRecord;
use crate::types::{AU_TO_KM, DEFAULT_SPIN_PERIOD, G, SECOND_TO_DAY, SUN_MASS};

/// Fill in missing periods across a body tree, in place.
///
/// Orbital periods follow Kepler's third law against the mass of the named
/// parent; an absent or unknown `orbiting_body` falls back to the central
/// star's mass. Rotation periods default to half a day. Values already
/// present are left untouched, so resolving twice is a no-op.
///
/// Runs before any record is converted to engine types; everything
/// downstream can assume non-zero periods.
pub fn resolve_periods(bodies: &mut [BodyRecord]) {
    let masses = collect_masses(bodies);
    for body in bodies.iter_mut() {
        resolve_body(body, &masses);
    }
}

/// Name-to-mass table over the whole tree, moons included.
/// Parent references are weak name lookups, so the table must be complete
/// before any period is derived.
fn collect_masses(bodies: &[BodyRecord]) -> HashMap<String, f64> {
    let mut masses = HashMap::new();
    let mut stack: Vec<&BodyRecord> = bodies.iter().collect();
    while let Some(body) = stack.pop() {
        masses.insert(body.name.clone(), body.mass);
        stack.extend(body.moons.iter());
    }
    masses
}

fn resolve_body(body: &mut BodyRecord, masses: &HashMap<String, f64>) {
    if body.orbit.period.is_none_or(|period| period == 0.0) {
        let parent_mass = body
            .orbit
            .orbiting_body
            .as_deref()
            .and_then(|name| masses.get(name).copied())
            .unwrap_or(SUN_MASS);
        body.orbit.period = Some(derive_period(body.orbit.semi_major_axis, parent_mass));
    }

    if body.revolution_period.is_none_or(|period| period == 0.0) {
        body.revolution_period = Some(DEFAULT_SPIN_PERIOD);
    }

    for moon in &mut body.moons {
        resolve_body(moon, masses);
    }
}

/// Kepler's third law: period in days for a semi-major axis in AU around a
/// parent mass in kilograms.
fn derive_period(semi_major_axis_au: f64, parent_mass: f64) -> f64 {
    let semi_major_axis_m = semi_major_axis_au * AU_TO_KM * 1000.0;
    TAU * (semi_major_axis_m.powi(3) / (G * parent_mass)).sqrt() * SECOND_TO_DAY
}
