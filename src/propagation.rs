//! Per-frame propagation of body state from the simulation clock.
//!
//! Positions stay parent-relative; a rendering consumer can parent its
//! scene nodes per the catalog hierarchy or query world positions from the
//! catalog directly.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::catalog::{BodyHandle, SolarSystem};
use crate::types::{BodyName, BodyPosition, SimulationClock, SimulationSet, SpinAngle};

/// Plugin spawning catalog bodies and keeping their state current.
pub struct PropagationPlugin;

impl Plugin for PropagationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>()
            .init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (SimulationSet::Tick, SimulationSet::Propagate).chain(),
            )
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (update_positions, update_spin).in_set(SimulationSet::Propagate),
            );
    }
}

/// Spawn one entity per catalog body and register the mapping.
fn spawn_bodies(mut commands: Commands, mut system: ResMut<SolarSystem>) {
    let handles: Vec<(BodyHandle, String)> = system
        .bodies()
        .map(|(handle, body)| (handle, body.name.clone()))
        .collect();

    for (handle, name) in handles {
        let entity = commands
            .spawn((
                handle,
                BodyName(name),
                BodyPosition::default(),
                SpinAngle::default(),
            ))
            .id();
        system.register(entity, handle);
    }
}

/// Recompute every body's parent-relative position at the clock time.
///
/// Runs paused or not, so scrubbing a paused clock still moves bodies.
/// On a solver error the previous position is kept and the failure is
/// logged once. Bodies are independent given the clock value, so the
/// iteration runs in parallel.
fn update_positions(
    system: Res<SolarSystem>,
    clock: Res<SimulationClock>,
    mut bodies: Query<(&BodyHandle, &mut BodyPosition)>,
) {
    let time = clock.elapsed;
    bodies
        .par_iter_mut()
        .for_each(|(handle, mut position)| match system.local_position(*handle, time) {
            Ok(updated) => position.0 = updated,
            Err(err) => {
                warn_once!(
                    "Orbit solve failed for {}: {}",
                    system.body(*handle).name,
                    err
                );
            }
        });
}

/// Track every body's accumulated spin angle.
///
/// The angle is a pure function of the clock, so scrubbing backwards also
/// rewinds rotation. Axial tilt stays static body data; consumers compose
/// it with this angle.
fn update_spin(
    system: Res<SolarSystem>,
    clock: Res<SimulationClock>,
    mut bodies: Query<(&BodyHandle, &mut SpinAngle)>,
) {
    for (handle, mut spin) in &mut bodies {
        let revolution_period = system.body(*handle).revolution_period;
        spin.0 = TAU * clock.elapsed / revolution_period;
    }
}
