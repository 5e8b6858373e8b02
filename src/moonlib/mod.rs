//! Geocentric lunar positions
//!
//! An abridged rendition of the ELP2000-82B lunar theory: the main-problem
//! series in the Delaunay arguments plus the leading planetary additive
//! terms, good to roughly ten arcseconds in longitude and a few kilometres
//! in distance. Unlike the planetary theories the result is geocentric and
//! in kilometres.

use nalgebra::Matrix3;
use once_cell::sync::Lazy;

use crate::constants::{reduce_angle, ACS_TO_RAD, DEG_TO_RAD, TWO_PI};
use crate::coordinates::{spherical_to_rectangular, Cartesian3};
use crate::fundargs::{fundamental_argument, FundamentalArgument};
use crate::planetlib::{Body, PerturbationTheory};
use crate::time::JulianDate;
use crate::{OrreryError, Result};

pub mod series;

/// Rotation from the J2000 mean ecliptic to the J2000 mean equator, using
/// the IAU2006 obliquity at epoch (84381.406 arcseconds).
pub static ECLIPTIC_TO_EQUATOR_J2000: Lazy<Matrix3<f64>> = Lazy::new(|| {
    let (so, co) = (84381.406 * ACS_TO_RAD).sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, co, -so, 0.0, so, co)
});

/// The abridged lunar theory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elp82b;

impl PerturbationTheory for Elp82b {
    /// Geocentric rectangular coordinates of the Moon in kilometres,
    /// ecliptic and equinox of J2000. Only [`Body::Moon`] is accepted.
    fn coordinates(&self, body: Body, tdb: &JulianDate) -> Result<Cartesian3> {
        if body != Body::Moon {
            return Err(OrreryError::InvalidPlanet(format!(
                "the lunar theory has no series for {}",
                body.name()
            )));
        }
        Ok(elp82b_coordinates(tdb))
    }

    fn equatorial_rotation(&self) -> &'static Matrix3<f64> {
        &ECLIPTIC_TO_EQUATOR_J2000
    }
}

/// Calculates the Moon's geocentric rectangular coordinates in kilometres,
/// referred to the ecliptic and equinox of J2000.
///
/// The lunar theory is defined for all practical epochs, so there is no
/// failure mode.
pub fn elp82b_coordinates(tdb: &JulianDate) -> Cartesian3 {
    let t = tdb.julian_centuries();
    let (lon_of_date, lat, dist) = ecliptic_of_date(t);

    // The series produce the mean equinox of date; remove the accumulated
    // general precession to refer the longitude to J2000.
    let precession = fundamental_argument(FundamentalArgument::Precession, t);
    let lon = reduce_angle(lon_of_date - precession, TWO_PI);

    spherical_to_rectangular(lon, lat, dist)
}

/// The Moon's ecliptic longitude (mean equinox of date), latitude and
/// distance in km at `t` Julian centuries TDB since J2000.
fn ecliptic_of_date(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, anomalies and argument of latitude
    // (degrees), plus the planetary perturbation arguments.
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;

    let a1 = (119.75 + 131.849 * t) * DEG_TO_RAD;
    let a2 = (53.09 + 479264.290 * t) * DEG_TO_RAD;
    let a3 = (313.45 + 481266.484 * t) * DEG_TO_RAD;

    // Eccentricity damping for terms in the solar anomaly
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let e_pow = [1.0, e, e * e];

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in series::LON_DIST {
        let damp = e_pow[term.m.unsigned_abs() as usize];
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f)
            * DEG_TO_RAD;
        sum_l += term.l * damp * arg.sin();
        sum_r += term.r * damp * arg.cos();
    }
    sum_l += 3958.0 * a1.sin() + 1962.0 * ((lp - f) * DEG_TO_RAD).sin() + 318.0 * a2.sin();

    let mut sum_b = 0.0;
    for term in series::LATITUDE {
        let damp = e_pow[term.m.unsigned_abs() as usize];
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f)
            * DEG_TO_RAD;
        sum_b += term.b * damp * arg.sin();
    }
    sum_b += -2235.0 * (lp * DEG_TO_RAD).sin()
        + 382.0 * a3.sin()
        + 175.0 * ((a1 - f * DEG_TO_RAD).sin() + (a1 + f * DEG_TO_RAD).sin())
        + 127.0 * ((lp - mp) * DEG_TO_RAD).sin()
        - 115.0 * ((lp + mp) * DEG_TO_RAD).sin();

    let lon = reduce_angle((lp + sum_l / 1e6) * DEG_TO_RAD, TWO_PI);
    let lat = sum_b / 1e6 * DEG_TO_RAD;
    let dist = 385000.56 + sum_r / 1e3;

    (lon, lat, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000_EPOCH;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_position_1992_april() {
        // 1992 April 12.0 TD, a standard worked example for this series.
        let t = -0.077221081451;
        let (lon, lat, dist) = ecliptic_of_date(t);
        assert_relative_eq!(lon, 133.162655 * DEG_TO_RAD, max_relative = 1e-7);
        assert_relative_eq!(lat, -3.229126 * DEG_TO_RAD, max_relative = 1e-6);
        assert_relative_eq!(dist, 368409.7, max_relative = 1e-7);
    }

    #[test]
    fn test_position_at_j2000() {
        let (lon, lat, dist) = ecliptic_of_date(0.0);
        assert_relative_eq!(lon, 223.318711 * DEG_TO_RAD, max_relative = 1e-7);
        assert_relative_eq!(lat, 5.171280 * DEG_TO_RAD, max_relative = 1e-6);
        assert_relative_eq!(dist, 402444.81, max_relative = 1e-7);

        // At the reference epoch the precession reduction is a no-op, so
        // the rectangular output must agree with the of-date angles.
        let rec = elp82b_coordinates(&JulianDate::new(J2000_EPOCH, 0.0));
        assert_relative_eq!(rec.magnitude(), dist, max_relative = 1e-12);
    }

    #[test]
    fn test_distance_stays_within_orbit_bounds() {
        // Perigee can approach 356,400 km and apogee 406,700 km.
        for i in -240..=240 {
            let tdb = JulianDate::new(J2000_EPOCH, i as f64 * 15.2);
            let dist = elp82b_coordinates(&tdb).magnitude();
            assert!(
                (356_000.0..407_000.0).contains(&dist),
                "lunar distance {} out of range at {:?}",
                dist,
                tdb
            );
        }
    }

    #[test]
    fn test_stays_near_ecliptic() {
        // Orbital inclination is ~5.1 degrees.
        for i in 0..100 {
            let tdb = JulianDate::new(J2000_EPOCH, i as f64 * 11.3);
            let pos = elp82b_coordinates(&tdb);
            let sin_lat = pos.z / pos.magnitude();
            assert!(sin_lat.abs() < (5.6f64 * DEG_TO_RAD).sin());
        }
    }

    #[test]
    fn test_sidereal_month_period() {
        // The Moon returns to roughly the same direction after 27.32 days.
        let t0 = JulianDate::new(J2000_EPOCH, 0.0);
        let t1 = JulianDate::new(J2000_EPOCH, 27.321662);
        let p0 = elp82b_coordinates(&t0);
        let p1 = elp82b_coordinates(&t1);
        let angle = p0.angular_distance(&p1);
        assert!(angle < 0.06, "direction moved {} rad after one month", angle);
    }

    #[test]
    fn test_rejects_non_moon_bodies() {
        let err = Elp82b
            .coordinates(Body::Mars, &JulianDate::new(J2000_EPOCH, 0.0))
            .unwrap_err();
        assert!(matches!(err, OrreryError::InvalidPlanet(_)));
    }

    #[test]
    fn test_equator_rotation_is_orthonormal() {
        let m = *ECLIPTIC_TO_EQUATOR_J2000;
        let id = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(id[(i, j)], expect, epsilon = 1e-12);
            }
        }
    }
}
