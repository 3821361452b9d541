//! Core constants and shared types for the solar-system simulation.

use bevy::math::DVec3;
use bevy::prelude::*;

/// System sets for ordering the per-frame simulation pass.
///
/// The clock must tick before body states are recomputed so every body
/// sees the same frame time.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Clock advancement (runs first)
    Tick,
    /// Per-body orbital state updates (runs after the tick)
    Propagate,
}

/// Physical constants

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.6743e-11;

/// Astronomical unit in kilometers
pub const AU_TO_KM: f64 = 149_597_900.0;

/// Kilometers to AU
pub const KM_TO_AU: f64 = 1.0 / AU_TO_KM;

/// Mass of the central star in kilograms
pub const SUN_MASS: f64 = 1.9885e30;

/// Seconds to days factor (truncated).
/// Body data is calibrated against this exact value, not `1.0 / 86400.0`.
pub const SECOND_TO_DAY: f64 = 0.00001157407;

/// Degrees to radians factor for upstream ephemeris angles (truncated).
/// Body data is calibrated against this exact value, not `PI / 180.0`.
pub const DEG_TO_RAD: f64 = 0.01745329;

/// Display units per AU, applied uniformly to every projected position.
pub const ORBIT_SCALE: f64 = 1000.0;

/// Spin period fallback in days for bodies that ship without rotation data.
pub const DEFAULT_SPIN_PERIOD: f64 = 0.5;

/// Display name of a spawned body.
#[derive(Component, Clone, Debug)]
pub struct BodyName(pub String);

/// Position of a body relative to its parent's frame, in display units.
/// Uses f64 (DVec3) for accuracy over solar system scales.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BodyPosition(pub DVec3);

/// Accumulated axial rotation angle in radians.
/// Grows without wrapping; a negative spin period (retrograde rotation)
/// drives it backwards.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SpinAngle(pub f64);

/// Simulation clock resource tracking scene time.
///
/// One simulated time unit is one day: periods stored in days divide the
/// clock value directly.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated days elapsed since the scene epoch
    pub elapsed: f64,
    /// Simulated days per wall-clock second; may be negative to run backwards
    pub speed: f64,
    /// Whether the clock is frozen; scrubbing still takes effect while paused
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            speed: 0.25,
            paused: false,
        }
    }
}

impl SimulationClock {
    /// Jump the clock to an absolute simulated time in days.
    pub fn scrub_to(&mut self, days: f64) {
        self.elapsed = days;
    }

    /// Toggle the pause state.
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }
}
