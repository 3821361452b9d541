//! Analytic Keplerian orbit engine.
//!
//! Runtime behavior:
//! - Mean anomaly advances linearly with simulation time (days) and is
//!   clamped to six decimal places before solving.
//! - Kepler's equation is solved iteratively per body per query.
//!
//! Coordinate frame:
//! - Y-up display frame with the orbital reference plane in x/z.
//! - Positions are relative to the orbited body and scaled by `ORBIT_SCALE`
//!   display units per AU.

pub mod elements;
pub mod projection;
pub mod sampling;
pub mod solver;

#[cfg(test)]
mod proptest_orbit;

pub use elements::OrbitalElements;
pub use projection::compute_position;
pub use sampling::{DEFAULT_SAMPLE_COUNT, FINE_SAMPLE_COUNT, sample_orbit};
pub use solver::{compute_distance_and_true_anomaly, solve_eccentric_anomaly};

/// Errors raised by the orbit engine.
///
/// All failures are synchronous and deterministic: retrying an identical
/// call yields an identical result, so callers decide fallback policy.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum OrbitError {
    #[error("eccentricity {0} out of solvable range (must be below 0.98)")]
    EccentricityOutOfRange(f64),

    #[error(
        "solver did not converge after {iterations} iterations (e = {eccentricity}, M = {mean_anomaly})"
    )]
    SolverDidNotConverge {
        eccentricity: f64,
        mean_anomaly: f64,
        iterations: usize,
    },

    #[error("sample count must be positive")]
    NonPositiveSampleCount,
}
