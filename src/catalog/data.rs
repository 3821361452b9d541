//! Built-in solar system body records (J2000 epoch).
//! Source: NASA JPL reference values, stored in degrees and AU exactly as
//! the upstream ephemeris feed ships them.

use crate::catalog::body::{BodyRecord, OrbitRecord};

/// Moon records carry no node or periapsis data upstream; those angles stay
/// zero and the resolver derives the missing periods.
fn moon(
    name: &str,
    orbiting_body: &str,
    mass: f64,
    radius: f64,
    eccentricity: f64,
    semi_major_axis: f64,
    inclination: f64,
) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        mass,
        radius,
        axial_tilt: 0.0,
        revolution_period: None,
        orbit: OrbitRecord {
            eccentricity,
            semi_major_axis,
            inclination,
            ascending_node: 0.0,
            periapsis_arg: 0.0,
            mean_anomaly_at_epoch: 0.0,
            period: None,
            orbiting_body: Some(orbiting_body.to_string()),
            soi_radius: 0.0,
        },
        moons: vec![],
    }
}

/// The built-in body tree: eight planets with their major moons.
///
/// Planets ship complete elements and periods; moons ship without periods
/// so resolution is exercised on every load. Masses are in kg, radii in km,
/// semi-major axes in AU, angles in degrees, periods in days.
pub fn solar_system() -> Vec<BodyRecord> {
    vec![
        BodyRecord {
            name: "Mercury".to_string(),
            mass: 3.3011e23,
            radius: 2439.7,
            axial_tilt: 0.034,
            revolution_period: Some(58.6462),
            orbit: OrbitRecord {
                eccentricity: 0.205630,
                semi_major_axis: 0.387098,
                inclination: 7.005,
                ascending_node: 48.331,
                periapsis_arg: 29.124,
                mean_anomaly_at_epoch: 174.796,
                period: Some(87.969),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![],
        },
        BodyRecord {
            name: "Venus".to_string(),
            mass: 4.8675e24,
            radius: 6051.8,
            axial_tilt: 177.36,
            // Retrograde rotation
            revolution_period: Some(-243.025),
            orbit: OrbitRecord {
                eccentricity: 0.006772,
                semi_major_axis: 0.723332,
                inclination: 3.39458,
                ascending_node: 76.680,
                periapsis_arg: 54.884,
                mean_anomaly_at_epoch: 50.115,
                period: Some(224.701),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![],
        },
        BodyRecord {
            name: "Earth".to_string(),
            mass: 5.97237e24,
            radius: 6371.0,
            axial_tilt: 23.4393,
            revolution_period: Some(0.99727),
            orbit: OrbitRecord {
                eccentricity: 0.0167086,
                semi_major_axis: 1.000003,
                inclination: 0.0,
                ascending_node: -11.26064,
                periapsis_arg: 114.20783,
                mean_anomaly_at_epoch: 358.617,
                period: Some(365.256),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![BodyRecord {
                axial_tilt: 6.687,
                // Tidally locked; spin matches the derived orbit closely
                revolution_period: Some(27.3217),
                ..moon("Moon", "Earth", 7.342e22, 1737.4, 0.0549, 0.00257, 5.145)
            }],
        },
        BodyRecord {
            name: "Mars".to_string(),
            mass: 6.4171e23,
            radius: 3389.5,
            axial_tilt: 25.19,
            revolution_period: Some(1.02595),
            orbit: OrbitRecord {
                eccentricity: 0.0934,
                semi_major_axis: 1.523679,
                inclination: 1.850,
                ascending_node: 49.558,
                periapsis_arg: 286.502,
                mean_anomaly_at_epoch: 19.412,
                period: Some(686.980),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![],
        },
        BodyRecord {
            name: "Jupiter".to_string(),
            mass: 1.8982e27,
            radius: 69911.0,
            axial_tilt: 3.13,
            revolution_period: Some(0.41354),
            orbit: OrbitRecord {
                eccentricity: 0.0489,
                semi_major_axis: 5.2044,
                inclination: 1.303,
                ascending_node: 100.464,
                periapsis_arg: 273.867,
                mean_anomaly_at_epoch: 20.020,
                period: Some(4332.59),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![
                moon("Io", "Jupiter", 8.9319e22, 1821.6, 0.0041, 0.002819, 0.05),
                moon("Europa", "Jupiter", 4.7998e22, 1560.8, 0.0090, 0.004486, 0.47),
                moon("Ganymede", "Jupiter", 1.4819e23, 2634.1, 0.0013, 0.007155, 0.20),
                moon("Callisto", "Jupiter", 1.0759e23, 2410.3, 0.0074, 0.012585, 0.192),
            ],
        },
        BodyRecord {
            name: "Saturn".to_string(),
            mass: 5.6834e26,
            radius: 58232.0,
            axial_tilt: 26.73,
            revolution_period: Some(0.44401),
            orbit: OrbitRecord {
                eccentricity: 0.0565,
                semi_major_axis: 9.5826,
                inclination: 2.485,
                ascending_node: 113.665,
                periapsis_arg: 339.392,
                mean_anomaly_at_epoch: 317.020,
                period: Some(10759.22),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![moon(
                "Titan", "Saturn", 1.3452e23, 2574.7, 0.0288, 0.008168, 0.34854,
            )],
        },
        BodyRecord {
            name: "Uranus".to_string(),
            mass: 8.6810e25,
            radius: 25362.0,
            axial_tilt: 97.77,
            // Retrograde rotation
            revolution_period: Some(-0.71833),
            orbit: OrbitRecord {
                eccentricity: 0.04717,
                semi_major_axis: 19.19126,
                inclination: 0.773,
                ascending_node: 74.006,
                periapsis_arg: 96.998857,
                mean_anomaly_at_epoch: 142.2386,
                period: Some(30688.5),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![],
        },
        BodyRecord {
            name: "Neptune".to_string(),
            mass: 1.02413e26,
            radius: 24622.0,
            axial_tilt: 28.32,
            revolution_period: Some(0.67125),
            orbit: OrbitRecord {
                eccentricity: 0.008678,
                semi_major_axis: 30.07,
                inclination: 1.770,
                ascending_node: 131.784,
                periapsis_arg: 276.336,
                mean_anomaly_at_epoch: 256.228,
                period: Some(60182.0),
                orbiting_body: None,
                soi_radius: 0.0,
            },
            moons: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::solver::MAX_SOLVABLE_ECCENTRICITY;

    fn walk(records: &[BodyRecord], visit: &mut impl FnMut(&BodyRecord)) {
        for record in records {
            visit(record);
            walk(&record.moons, visit);
        }
    }

    #[test]
    fn test_dataset_shape() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 8, "Eight planets, Pluto excluded");
        let moon_count: usize = bodies.iter().map(|planet| planet.moons.len()).sum();
        assert_eq!(moon_count, 6);
    }

    #[test]
    fn test_every_body_is_physically_plausible() {
        let bodies = solar_system();
        let mut checked = 0;
        walk(&bodies, &mut |body| {
            checked += 1;
            assert!(body.mass > 0.0, "{} mass", body.name);
            assert!(body.radius > 0.0, "{} radius", body.name);
            assert!(body.orbit.semi_major_axis > 0.0, "{} semi-major axis", body.name);
            assert!(
                (0.0..MAX_SOLVABLE_ECCENTRICITY).contains(&body.orbit.eccentricity),
                "{} eccentricity {} must be solvable",
                body.name,
                body.orbit.eccentricity
            );
        });
        assert_eq!(checked, 14);
    }

    #[test]
    fn test_planets_ship_with_periods_and_moons_without() {
        let bodies = solar_system();
        for planet in &bodies {
            assert!(
                planet.orbit.period.is_some_and(|period| period > 0.0),
                "{} should ship a period",
                planet.name
            );
            for moon in &planet.moons {
                assert_eq!(moon.orbit.period, None, "{} should exercise resolution", moon.name);
            }
        }
    }

    #[test]
    fn test_moon_parent_names_exist() {
        let bodies = solar_system();
        let planet_names: Vec<&str> = bodies.iter().map(|planet| planet.name.as_str()).collect();
        for planet in &bodies {
            for moon in &planet.moons {
                let parent = moon.orbit.orbiting_body.as_deref();
                assert!(
                    parent.is_some_and(|name| planet_names.contains(&name)),
                    "{} parent {:?} must name a planet",
                    moon.name,
                    parent
                );
            }
        }
    }
}
