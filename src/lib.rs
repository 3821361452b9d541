//! Orrery - Solar System Simulation Core
//!
//! Analytic Keplerian orbital mechanics for a solar-system scene: orbital
//! elements and their resolution, a Kepler equation solver, projection
//! into 3D display coordinates, and orbit-path sampling, plus the Bevy
//! plumbing that advances a simulation clock and keeps per-body state
//! current every frame.

pub mod catalog;
pub mod clock;
pub mod orbit;
pub mod propagation;
pub mod types;
