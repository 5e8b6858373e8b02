//! Planetary positions from the VSOP87 development
//!
//! This module owns the body enumeration, the theory boundary trait shared
//! with the lunar and Pluto theories, and the VSOP87A evaluation. The
//! series themselves come from the `vsop87` crate, which carries the full
//! published coefficient tables; variant A yields heliocentric rectangular
//! coordinates on the dynamical ecliptic of J2000.

use nalgebra::Matrix3;
use once_cell::sync::Lazy;
use vsop87::{vsop87a, RectangularCoordinates};

use crate::coordinates::Cartesian3;
use crate::time::JulianDate;
use crate::{OrreryError, Result};

/// The solar system bodies known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// The body's name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

/// Capability shared by the three analytical theories (VSOP87, the lunar
/// series, PLUTO95): evaluate a body's rectangular coordinates at an instant
/// of TDB, and expose the theory's own fixed J2000 ecliptic-to-equator
/// rotation.
///
/// The rotation is a property of each theory's frame convention and must not
/// be confused with the runtime precession of the transform pipeline.
pub trait PerturbationTheory {
    /// Rectangular coordinates of `body` at `tdb`, in the theory's J2000
    /// frame and units.
    fn coordinates(&self, body: Body, tdb: &JulianDate) -> Result<Cartesian3>;

    /// The theory's fixed rotation from its native J2000 frame to the
    /// equatorial frame.
    fn equatorial_rotation(&self) -> &'static Matrix3<f64>;
}

/// Rotation from the VSOP87A dynamical ecliptic frame to the FK5 equator
/// and equinox of J2000.
pub static VSOP87_TO_FK5: Lazy<Matrix3<f64>> = Lazy::new(|| {
    Matrix3::new(
        1.0,
        0.000000440360,
        -0.000000190919,
        -0.000000479966,
        0.917482137087,
        -0.397776982902,
        0.0,
        0.397776982902,
        0.917482137087,
    )
});

/// The VSOP87 planetary theory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vsop87;

impl Vsop87 {
    fn evaluate(body: Body, jde: f64) -> Result<RectangularCoordinates> {
        match body {
            Body::Mercury => Ok(vsop87a::mercury(jde)),
            Body::Venus => Ok(vsop87a::venus(jde)),
            Body::Earth => Ok(vsop87a::earth(jde)),
            Body::Mars => Ok(vsop87a::mars(jde)),
            Body::Jupiter => Ok(vsop87a::jupiter(jde)),
            Body::Saturn => Ok(vsop87a::saturn(jde)),
            Body::Uranus => Ok(vsop87a::uranus(jde)),
            Body::Neptune => Ok(vsop87a::neptune(jde)),
            other => Err(OrreryError::InvalidPlanet(format!(
                "{} is not covered by the VSOP87 development",
                other.name()
            ))),
        }
    }
}

impl PerturbationTheory for Vsop87 {
    /// Heliocentric rectangular coordinates in AU, dynamical ecliptic and
    /// equinox of J2000. Valid for Mercury through Neptune; Earth is
    /// included so callers can difference to geocentric positions.
    fn coordinates(&self, body: Body, tdb: &JulianDate) -> Result<Cartesian3> {
        let pos = Self::evaluate(body, tdb.value())?;
        Ok(Cartesian3::new(pos.x, pos.y, pos.z))
    }

    fn equatorial_rotation(&self) -> &'static Matrix3<f64> {
        &VSOP87_TO_FK5
    }
}

/// Convenience wrapper for [`Vsop87::coordinates`].
pub fn vsop87_coordinates(planet: Body, tdb: &JulianDate) -> Result<Cartesian3> {
    Vsop87.coordinates(planet, tdb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DAYS_PER_MILLENNIUM, J2000_EPOCH, TWO_PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    fn j2000() -> JulianDate {
        JulianDate::new(J2000_EPOCH, 0.0)
    }

    #[test]
    fn test_rejects_non_vsop_bodies() {
        for body in [Body::Sun, Body::Moon, Body::Pluto] {
            let err = vsop87_coordinates(body, &j2000()).unwrap_err();
            assert!(matches!(err, OrreryError::InvalidPlanet(_)));
        }
    }

    #[test]
    fn test_earth_at_j2000() {
        // Earth was a few days from perihelion at J2000.0; reference
        // values from the published VSOP87A tables.
        let pos = vsop87_coordinates(Body::Earth, &j2000()).unwrap();
        assert_relative_eq!(pos.x, -0.177_135_458_6, max_relative = 1e-7);
        assert_relative_eq!(pos.y, 0.967_241_623_7, max_relative = 1e-7);
        assert_relative_eq!(pos.magnitude(), 0.983_327_7, max_relative = 1e-6);
    }

    #[rstest]
    #[case(Body::Mercury, -0.130_093_4, -0.447_287_7, -0.024_598_4, 3e-6)]
    #[case(Body::Venus, -0.718_302_3, -0.032_654_7, 0.041_014_3, 4e-6)]
    #[case(Body::Earth, -0.177_135_5, 0.967_241_6, -0.000_003_9, 5e-6)]
    #[case(Body::Mars, 1.390_715_9, -0.013_415_7, -0.034_467_8, 7e-6)]
    #[case(Body::Jupiter, 4.001_174_0, 2.938_581_0, -0.101_783_8, 3e-5)]
    #[case(Body::Saturn, 6.406_406_9, 6.569_992_9, -0.369_076_8, 5e-5)]
    #[case(Body::Uranus, 14.431_893_4, -13.734_316_3, -0.238_142_2, 1e-4)]
    #[case(Body::Neptune, 16.812_111_7, -24.991_663_1, 0.127_219_0, 2e-4)]
    fn test_reference_positions_at_j2000(
        #[case] body: Body,
        #[case] x: f64,
        #[case] y: f64,
        #[case] z: f64,
        #[case] eps: f64,
    ) {
        // VSOP87A check values at JD 2451545.0; the tolerance is about an
        // arcsecond at each planet's heliocentric distance.
        let pos = vsop87_coordinates(body, &j2000()).unwrap();
        assert_abs_diff_eq!(pos.x, x, epsilon = eps);
        assert_abs_diff_eq!(pos.y, y, epsilon = eps);
        assert_abs_diff_eq!(pos.z, z, epsilon = eps);
    }

    #[rstest]
    #[case(Body::Mercury, 0.3075, 0.4667)]
    #[case(Body::Venus, 0.718, 0.729)]
    #[case(Body::Earth, 0.983, 1.017)]
    #[case(Body::Mars, 1.381, 1.667)]
    #[case(Body::Jupiter, 4.95, 5.46)]
    #[case(Body::Saturn, 9.0, 10.13)]
    #[case(Body::Uranus, 18.28, 20.10)]
    #[case(Body::Neptune, 29.8, 30.34)]
    fn test_radius_within_apsides(#[case] body: Body, #[case] q: f64, #[case] ap: f64) {
        // Sample a century each way from J2000. The osculating apsides
        // themselves wander a little, hence the 5e-4 slack.
        for i in -20..=20 {
            let tdb = j2000() + i as f64 * 5.0 * 365.25;
            let r = vsop87_coordinates(body, &tdb).unwrap().magnitude();
            assert!(
                r > q * 0.9995 && r < ap * 1.0005,
                "{} radius {} outside [{}, {}]",
                body.name(),
                r,
                q,
                ap
            );
        }
    }

    #[test]
    fn test_earth_longitude_advances_one_revolution_per_year() {
        let p0 = vsop87_coordinates(Body::Earth, &j2000()).unwrap();
        let p1 = vsop87_coordinates(Body::Earth, &(j2000() + 365.25636)).unwrap();
        // After one sidereal year the heliocentric direction repeats, up
        // to the lunar wobble and the periodic planetary terms.
        let angle = p0.angular_distance(&p1);
        assert!(angle < 5e-5 * TWO_PI, "direction drifted by {} rad", angle);
    }

    #[test]
    fn test_planets_stay_near_ecliptic() {
        // Inclinations are a few degrees at most, so |z| << r.
        for body in [Body::Venus, Body::Earth, Body::Jupiter, Body::Neptune] {
            let tdb = j2000() + 0.03 * DAYS_PER_MILLENNIUM;
            let pos = vsop87_coordinates(body, &tdb).unwrap();
            assert!(pos.z.abs() < 0.15 * pos.magnitude());
        }
    }

    #[test]
    fn test_fk5_rotation_is_orthonormal() {
        let m = *VSOP87_TO_FK5;
        let should_be_identity = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(
                    should_be_identity[(i, j)],
                    expect,
                    epsilon = 1e-6,
                    max_relative = 1e-6
                );
            }
        }
    }
}
