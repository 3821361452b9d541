//! Keplerian orbital elements.

/// Classical orbital elements of one body around its parent.
///
/// Angles are in radians, the semi-major axis in AU, the period in days.
/// Identity is deliberately not structural; two bodies with identical
/// elements stay distinct, so there is no `PartialEq` here.
#[derive(Clone, Debug)]
pub struct OrbitalElements {
    /// Eccentricity (dimensionless; the solver rejects values at or above 0.98)
    pub eccentricity: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Inclination against the reference plane in radians
    pub inclination: f64,
    /// Longitude of the ascending node in radians
    pub ascending_node: f64,
    /// Argument of periapsis in radians
    pub periapsis_arg: f64,
    /// Mean anomaly at the scene epoch in radians
    pub mean_anomaly_at_epoch: f64,
    /// Orbital period in days.
    /// The catalog resolves missing periods before elements reach this type;
    /// projection divides by this value and assumes it is non-zero.
    pub period: f64,
    /// Name of the orbited body, `None` for the central star.
    /// A weak reference resolved through the catalog index, not ownership.
    pub orbiting_body: Option<String>,
    /// Sphere-of-influence radius carried through for consumers; nothing in
    /// the engine reads it.
    pub soi_radius: f64,
}
