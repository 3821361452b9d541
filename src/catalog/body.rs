//! Body records and the conversion boundary into engine types.
//!
//! Records mirror the upstream ephemeris feed: camelCase JSON, angles in
//! degrees, periods optional. Conversion into [`CelestialBody`] moves
//! everything to radians and days exactly once, at ingestion.

use serde::{Deserialize, Serialize};

use crate::catalog::BodyHandle;
use crate::orbit::elements::OrbitalElements;
use crate::types::{DEFAULT_SPIN_PERIOD, DEG_TO_RAD};

/// One body as shipped by the upstream data, JSON-shaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub name: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Mean radius in kilometers
    pub radius: f64,
    /// Axial tilt in degrees
    #[serde(default)]
    pub axial_tilt: f64,
    /// Sidereal rotation period in days, negative for retrograde rotation.
    /// Missing or zero values get a default during resolution.
    #[serde(default)]
    pub revolution_period: Option<f64>,
    pub orbit: OrbitRecord,
    #[serde(default)]
    pub moons: Vec<BodyRecord>,
}

/// Orbit block of a body record, angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitRecord {
    pub eccentricity: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Inclination in degrees
    #[serde(default)]
    pub inclination: f64,
    /// Longitude of the ascending node in degrees
    #[serde(default)]
    pub ascending_node: f64,
    /// Argument of periapsis in degrees
    #[serde(default)]
    pub periapsis_arg: f64,
    /// Mean anomaly at epoch in degrees
    #[serde(default)]
    pub mean_anomaly_at_epoch: f64,
    /// Orbital period in days. Missing or zero values are derived from
    /// Kepler's third law during resolution.
    #[serde(default)]
    pub period: Option<f64>,
    /// Name of the orbited body, `None` for the central star
    #[serde(default)]
    pub orbiting_body: Option<String>,
    /// Sphere-of-influence radius, carried through untouched
    #[serde(default)]
    pub soi_radius: f64,
}

/// A fully resolved body: radians, days, and a linked parent handle.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    pub name: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Mean radius in kilometers
    pub radius: f64,
    /// Axial tilt in radians
    pub axial_tilt: f64,
    /// Sidereal rotation period in days, negative for retrograde rotation
    pub revolution_period: f64,
    pub orbit: OrbitalElements,
    /// Handle of the orbited body, `None` for bodies around the central
    /// star. Filled by the catalog once all names are indexed.
    pub parent: Option<BodyHandle>,
}

impl BodyRecord {
    /// Convert a record into a resolved body, degrees to radians.
    ///
    /// Precondition: periods were filled by the resolver. An unresolved
    /// record converts with a zero orbital period, which breaks the
    /// projection contract downstream.
    pub(crate) fn to_body(&self) -> CelestialBody {
        CelestialBody {
            name: self.name.clone(),
            mass: self.mass,
            radius: self.radius,
            axial_tilt: self.axial_tilt * DEG_TO_RAD,
            revolution_period: self.revolution_period.unwrap_or(DEFAULT_SPIN_PERIOD),
            orbit: OrbitalElements {
                eccentricity: self.orbit.eccentricity,
                semi_major_axis: self.orbit.semi_major_axis,
                inclination: self.orbit.inclination * DEG_TO_RAD,
                ascending_node: self.orbit.ascending_node * DEG_TO_RAD,
                periapsis_arg: self.orbit.periapsis_arg * DEG_TO_RAD,
                mean_anomaly_at_epoch: self.orbit.mean_anomaly_at_epoch * DEG_TO_RAD,
                period: self.orbit.period.unwrap_or(0.0),
                orbiting_body: self.orbit.orbiting_body.clone(),
                soi_radius: self.orbit.soi_radius,
            },
            parent: None,
        }
    }
}
