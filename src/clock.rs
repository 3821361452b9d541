//! Simulation clock advancement.

use bevy::prelude::*;

use crate::types::{SimulationClock, SimulationSet};

/// Plugin ticking the simulation clock once per frame.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(SimulationSet::Tick));
    }
}

/// Advance the clock by the scaled frame delta.
///
/// Speed is simulated days per wall-clock second, so the default 0.25
/// plays one day out over four seconds. A paused clock holds its value;
/// scrubs applied elsewhere survive because nothing here resets `elapsed`.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    if clock.paused {
        return;
    }

    let dt = time.delta_secs_f64() * clock.speed;
    clock.elapsed += dt;
}
