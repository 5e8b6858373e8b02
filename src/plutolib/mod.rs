//! Heliocentric positions of Pluto
//!
//! The PLUTO95 analytical theory of Chapront and Francou, fitted to the
//! DE200 numerical ephemeris. Unlike the VSOP87 development, the theory
//! has a hard validity window (1700-01-01 through 2100-01-24) and its
//! native frame is already the equator and equinox of J2000, so the
//! associated equatorial rotation is the identity.

use nalgebra::Matrix3;
use once_cell::sync::Lazy;

use crate::coordinates::Cartesian3;
use crate::planetlib::{Body, PerturbationTheory};
use crate::time::JulianDate;
use crate::{OrreryError, Result};

pub mod series;

/// First Julian date covered by the theory (1700-01-01 TDB).
pub const PLUTO_MIN_DATE: f64 = 2_341_972.5;

/// First Julian date past the end of the theory (2100-01-24 TDB).
pub const PLUTO_MAX_DATE: f64 = 2_488_092.5;

/// The theory is built on the J2000 equator, so no frame change is needed.
static IDENTITY: Lazy<Matrix3<f64>> = Lazy::new(Matrix3::identity);

/// The PLUTO95 theory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pluto95;

impl PerturbationTheory for Pluto95 {
    /// Heliocentric rectangular coordinates of Pluto in AU, equator and
    /// equinox of J2000. Only [`Body::Pluto`] is accepted.
    fn coordinates(&self, body: Body, tdb: &JulianDate) -> Result<Cartesian3> {
        if body != Body::Pluto {
            return Err(OrreryError::InvalidPlanet(format!(
                "the Pluto theory has no series for {}",
                body.name()
            )));
        }

        pluto_coordinates(tdb)
    }

    fn equatorial_rotation(&self) -> &'static Matrix3<f64> {
        &IDENTITY
    }
}

/// Calculates the heliocentric rectangular coordinates of Pluto in AU,
/// referred to the equator and equinox of J2000.
///
/// Fails with [`OrreryError::InvalidDate`] outside the theory's validity
/// window of 1700-01-01 (inclusive) to 2100-01-24 (exclusive).
pub fn pluto_coordinates(tdb: &JulianDate) -> Result<Cartesian3> {
    let t = tdb.value();
    if !(PLUTO_MIN_DATE..PLUTO_MAX_DATE).contains(&t) {
        return Err(OrreryError::InvalidDate(format!(
            "JD {} is outside the 1700-2100 range of the Pluto theory",
            t
        )));
    }

    // Powers of the time variable, normalized to [-1, 1] over the window
    let x1 = (t - PLUTO_MIN_DATE) / 73_060.0 - 1.0;
    let x = [1.0, x1, x1 * x1, x1 * x1 * x1];

    // Phase argument for the periodic terms, in days from mid-window
    let fx = t - PLUTO_MIN_DATE - 73_060.0;

    let mut sec = Cartesian3::ZERO;
    for i in 0..4 {
        sec.x += series::SECULAR_X[i] * x[i];
        sec.y += series::SECULAR_Y[i] * x[i];
        sec.z += series::SECULAR_Z[i] * x[i];
    }

    let mut per = Cartesian3::ZERO;
    let mut j = 0;
    for i in 0..106 {
        // The tail of the table holds Poisson terms: first order in time
        // from index 82 and second order from index 101.
        if i == 82 {
            j = 1;
        }
        if i == 101 {
            j = 2;
        }

        let (sn, cs) = (series::FREQUENCY[i] * fx).sin_cos();
        per.x += (series::COS_X[i] * cs + series::SIN_X[i] * sn) * x[j];
        per.y += (series::COS_Y[i] * cs + series::SIN_Y[i] * sn) * x[j];
        per.z += (series::COS_Z[i] * cs + series::SIN_Z[i] * sn) * x[j];
    }

    Ok((per + sec) / 1e10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000_EPOCH;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_at_j2000() {
        // Pluto passed perihelion in 1989, so its J2000 radius is close
        // to the minimum of ~29.7 AU.
        let pos = pluto_coordinates(&JulianDate::new(J2000_EPOCH, 0.0)).unwrap();
        assert_relative_eq!(pos.x, -9.876002506, max_relative = 1e-9);
        assert_relative_eq!(pos.y, -27.979189687, max_relative = 1e-9);
        assert_relative_eq!(pos.z, -5.753682193, max_relative = 1e-9);
        assert_relative_eq!(pos.magnitude(), 30.223754562, max_relative = 1e-9);
    }

    #[test]
    fn test_window_boundaries() {
        // The opening instant is in range, the closing instant is not.
        assert!(pluto_coordinates(&JulianDate::new(PLUTO_MIN_DATE, 0.0)).is_ok());

        let err = pluto_coordinates(&JulianDate::new(PLUTO_MAX_DATE, 0.0)).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidDate(_)));

        let err = pluto_coordinates(&JulianDate::new(PLUTO_MIN_DATE, -1.0)).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidDate(_)));
    }

    #[test]
    fn test_radius_within_apsides() {
        // Perihelion 29.66 AU, aphelion 49.3 AU; one orbit is 248 years so
        // the 400-year window sees both extremes.
        for i in 0..100 {
            let t = PLUTO_MIN_DATE + i as f64 * 1_460.0;
            let r = pluto_coordinates(&JulianDate::new(t, 0.0))
                .unwrap()
                .magnitude();
            assert!(
                (29.0..50.0).contains(&r),
                "radius {} out of bounds at JD {}",
                r,
                t
            );
        }
    }

    #[test]
    fn test_rejects_non_pluto_bodies() {
        let err = Pluto95
            .coordinates(Body::Neptune, &JulianDate::new(J2000_EPOCH, 0.0))
            .unwrap_err();
        assert!(matches!(err, OrreryError::InvalidPlanet(_)));
    }

    #[test]
    fn test_equatorial_rotation_is_identity() {
        assert_eq!(*Pluto95.equatorial_rotation(), Matrix3::identity());
    }
}
