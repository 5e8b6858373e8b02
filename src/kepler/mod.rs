//! Orbital elements and Kepler's equation
//!
//! The anomaly solvers use the Laguerre-Conway method, which converges for
//! essentially any starting guess and eccentricity, with a bounded iteration
//! count as a backstop. Barker's equation covers the parabolic boundary case
//! directly, with no iteration.

use serde::{Deserialize, Serialize};

use crate::constants::{reduce_angle, GAUSS_GRAV_CONSTANT, TWO_PI};
use crate::coordinates::Cartesian3;
use crate::time::JulianDate;
use crate::{OrreryError, Result};

/// Maximum number of Laguerre-Conway iterations before giving up.
pub const KEPLER_MAX_ITER: u32 = 25;

/// Convergence tolerance for the anomaly, in radians.
pub const KEPLER_PRECISION: f64 = 1e-12;

/// Laguerre method degree parameter.
const N: f64 = 6.0;

/// Osculating orbital elements sufficient to reconstruct a body's position
/// at any nearby epoch through two-body motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Epoch of osculation
    pub epoch: JulianDate,
    /// Mean anomaly at epoch, radians
    pub mean_anomaly: f64,
    /// Mean motion, radians per day
    pub daily_motion: f64,
    /// Perihelion distance, AU
    pub perihelion: f64,
    /// Eccentricity (>= 0)
    pub eccentricity: f64,
    /// Argument of perihelion, radians
    pub arg_perihelion: f64,
    /// Longitude of the ascending node, radians
    pub lon_asc_node: f64,
    /// Inclination to the ecliptic, radians
    pub inclination: f64,
}

/// Solves Kepler's equation `M = E - e*sin(E)` for elliptic orbits and
/// returns the eccentric anomaly in radians.
///
/// `ecc` must be in `[0, 1)`; convergence is quadratic-plus under the
/// Laguerre-Conway iteration and failure to converge within
/// [`KEPLER_MAX_ITER`] steps is reported rather than looped on.
pub fn eccentric_anomaly(mean_ano: f64, ecc: f64) -> Result<f64> {
    let mut ea = mean_ano + ecc * mean_ano.sin();

    for _ in 0..KEPLER_MAX_ITER {
        let (s_ea, c_ea) = ea.sin_cos();

        let mut dea = N * (mean_ano - ea + ecc * s_ea);
        let x = 1.0 - ecc * c_ea;
        let y = ((N - 1.0) * ((N - 1.0) * x * x + ecc * s_ea * dea))
            .abs()
            .sqrt();

        dea /= if (x + y).abs() > (x - y).abs() {
            x + y
        } else {
            x - y
        };

        ea += dea;
        if dea.abs() < KEPLER_PRECISION {
            return Ok(ea);
        }
    }

    Err(OrreryError::Convergence {
        iterations: KEPLER_MAX_ITER,
    })
}

/// Solves Kepler's equation `M = e*sinh(H) - H` for hyperbolic orbits and
/// returns the hyperbolic anomaly.
pub fn hyperbolic_anomaly(mean_ano: f64, ecc: f64) -> Result<f64> {
    let mut ha = mean_ano;

    for _ in 0..KEPLER_MAX_ITER {
        let mut dha = N * (mean_ano + ha - ecc * ha.sinh());
        let x = ecc * ha.cosh() - 1.0;
        let y = ((N - 1.0) * ((N - 1.0) * x * x + dha * ecc * ha.sinh()))
            .abs()
            .sqrt();

        dha /= if (x + y).abs() > (x - y).abs() {
            x + y
        } else {
            x - y
        };

        ha += dha;
        if dha.abs() < KEPLER_PRECISION {
            return Ok(ha);
        }
    }

    Err(OrreryError::Convergence {
        iterations: KEPLER_MAX_ITER,
    })
}

/// Calculates a body's heliocentric rectangular coordinates from its
/// osculating orbital elements.
///
/// The mean anomaly is advanced from the element epoch to `tt` using the
/// daily motion, the appropriate anomaly equation is solved for the orbit
/// class, and the result is reduced to AU in the equinox and ecliptic of
/// J2000. A negative eccentricity is rejected before any iteration.
pub fn elements_to_ephemeris(tt: &JulianDate, elt: &OrbitalElements) -> Result<Cartesian3> {
    let t = (tt.date1 - elt.epoch.date1) + (tt.date2 - elt.epoch.date2);
    let ecc = elt.eccentricity;

    let (r, ta) = if ecc < 0.0 {
        return Err(OrreryError::InvalidEccentricity(ecc));
    } else if ecc == 0.0 {
        // Circular orbit: the true anomaly is the mean anomaly
        (elt.perihelion, elt.mean_anomaly + elt.daily_motion * t)
    } else if ecc < 1.0 {
        let ma = reduce_angle(elt.mean_anomaly + elt.daily_motion * t, TWO_PI);
        let ea = eccentric_anomaly(ma, ecc)?;

        let (x, y) = (ea / 2.0).sin_cos();
        let r = elt.perihelion * (1.0 - ecc * (y * y - x * x)) / (1.0 - ecc);
        let ta = 2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * x).atan2(y);
        (r, ta)
    } else if ecc == 1.0 {
        // Barker's equation for parabolic orbits, solved in closed form.
        // The time since perihelion scales with q^(3/2).
        let w = 1.5 * GAUSS_GRAV_CONSTANT * t / (2.0f64.sqrt() * elt.perihelion.powf(1.5));
        let y = (w + (w * w + 1.0).sqrt()).cbrt();
        let x = y - 1.0 / y;

        (elt.perihelion * (x * x + 1.0), 2.0 * x.atan())
    } else {
        let ma = reduce_angle(elt.mean_anomaly + elt.daily_motion * t, TWO_PI);
        let ha = hyperbolic_anomaly(ma, ecc)?;

        let r = elt.perihelion * (1.0 - ecc * ha.cosh()) / (1.0 - ecc);
        let ta = ((ecc * ecc - 1.0).sqrt() * ha.sinh()).atan2(ecc - ha.cosh());
        (r, ta)
    };

    let (a, b) = (ta + elt.arg_perihelion).sin_cos();
    let (c, d) = elt.lon_asc_node.sin_cos();
    let (x, y) = elt.inclination.sin_cos();

    Ok(Cartesian3::new(
        r * (d * b - c * a * y),
        r * (c * b + d * a * y),
        r * a * x,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000_EPOCH;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    #[test]
    fn test_circular_orbit_identity() {
        // For e = 0 the eccentric anomaly equals the mean anomaly.
        for i in 0..64 {
            let m = i as f64 * TWO_PI / 64.0;
            let e = eccentric_anomaly(m, 0.0).unwrap();
            assert_abs_diff_eq!(e, m, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_elliptic_residual_earth_like() {
        let ecc = 0.0167;
        for i in 0..360 {
            let m = i as f64 * TWO_PI / 360.0;
            let ea = eccentric_anomaly(m, ecc).unwrap();
            assert_abs_diff_eq!(m, ea - ecc * ea.sin(), epsilon = 1e-11);
        }
    }

    #[rstest]
    #[case(0.4)]
    #[case(0.9)]
    #[case(0.99)]
    fn test_elliptic_residual_high_eccentricity(#[case] ecc: f64) {
        for i in 0..90 {
            let m = i as f64 * TWO_PI / 90.0;
            let ea = eccentric_anomaly(m, ecc).unwrap();
            assert_abs_diff_eq!(m, ea - ecc * ea.sin(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_hyperbolic_residual() {
        for ecc in [1.1, 1.5, 3.0] {
            for i in -20..20 {
                let m = i as f64 * 0.25;
                let ha = hyperbolic_anomaly(m, ecc).unwrap();
                assert_abs_diff_eq!(m, ecc * ha.sinh() - ha, epsilon = 1e-9);
            }
        }
    }

    fn earth_like_elements() -> OrbitalElements {
        OrbitalElements {
            epoch: JulianDate::new(J2000_EPOCH, 0.0),
            mean_anomaly: 0.0,
            daily_motion: TWO_PI / 365.25636,
            perihelion: 1.0 * (1.0 - 0.0167),
            eccentricity: 0.0167,
            arg_perihelion: 1.99,
            lon_asc_node: 0.0,
            inclination: 0.0,
        }
    }

    #[test]
    fn test_rejects_negative_eccentricity() {
        let mut elt = earth_like_elements();
        elt.eccentricity = -0.1;
        let err = elements_to_ephemeris(&elt.epoch, &elt).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidEccentricity(e) if e < 0.0));
    }

    #[test]
    fn test_elliptic_radius_stays_within_apsides() {
        let elt = earth_like_elements();
        let a = elt.perihelion / (1.0 - elt.eccentricity);
        let (q, ap) = (a * (1.0 - elt.eccentricity), a * (1.0 + elt.eccentricity));

        for day in 0..366 {
            let tt = elt.epoch + day as f64;
            let pos = elements_to_ephemeris(&tt, &elt).unwrap();
            let r = pos.magnitude();
            assert!(
                r >= q - 1e-9 && r <= ap + 1e-9,
                "radius {} outside [{}, {}]",
                r,
                q,
                ap
            );
        }
    }

    #[test]
    fn test_perihelion_at_epoch_with_zero_anomaly() {
        // M = 0 at epoch means the body sits at perihelion distance.
        let elt = earth_like_elements();
        let pos = elements_to_ephemeris(&elt.epoch, &elt).unwrap();
        assert_relative_eq!(pos.magnitude(), elt.perihelion, max_relative = 1e-9);
    }

    #[test]
    fn test_orbit_period_closes() {
        let elt = earth_like_elements();
        let p0 = elements_to_ephemeris(&elt.epoch, &elt).unwrap();
        let one_period = elt.epoch + 365.25636;
        let p1 = elements_to_ephemeris(&one_period, &elt).unwrap();
        assert_abs_diff_eq!(p0.x, p1.x, epsilon = 1e-6);
        assert_abs_diff_eq!(p0.y, p1.y, epsilon = 1e-6);
    }

    #[test]
    fn test_circular_orbit_constant_radius() {
        let mut elt = earth_like_elements();
        elt.eccentricity = 0.0;
        elt.perihelion = 2.5;
        for day in [0.0, 100.0, 333.3] {
            let pos = elements_to_ephemeris(&(elt.epoch + day), &elt).unwrap();
            assert_relative_eq!(pos.magnitude(), 2.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_parabolic_orbit_at_perihelion() {
        let mut elt = earth_like_elements();
        elt.eccentricity = 1.0;
        elt.perihelion = 0.5;
        // At the perihelion passage epoch, Barker's equation gives r = q.
        let pos = elements_to_ephemeris(&elt.epoch, &elt).unwrap();
        assert_relative_eq!(pos.magnitude(), 0.5, max_relative = 1e-12);

        // Away from perihelion the comet recedes.
        let later = elements_to_ephemeris(&(elt.epoch + 200.0), &elt).unwrap();
        assert!(later.magnitude() > 0.5);
    }

    #[test]
    fn test_parabolic_orbit_away_from_perihelion() {
        // Barker's equation at q = 0.5 AU, 30 days after perihelion:
        // w = 3k t / (2 sqrt(2) q^1.5) = 1.548189, whose cubic root gives
        // r = 0.850121 AU. Checked by inverting Barker's equation,
        // t = sqrt(2 q^3)/k * (s + s^3/3) with s = tan(nu/2).
        let mut elt = earth_like_elements();
        elt.eccentricity = 1.0;
        elt.perihelion = 0.5;
        elt.arg_perihelion = 0.0;
        elt.inclination = 0.0;

        let pos = elements_to_ephemeris(&(elt.epoch + 30.0), &elt).unwrap();
        assert_relative_eq!(pos.magnitude(), 0.850_120_696, max_relative = 1e-8);

        let nu = pos.y.atan2(pos.x);
        assert_relative_eq!(nu, 1.393_566_413, max_relative = 1e-8);
    }

    #[rstest]
    #[case(0.25, 10.0)]
    #[case(0.25, 80.0)]
    #[case(4.0, 365.0)]
    fn test_parabolic_orbit_perihelion_scaling(#[case] q: f64, #[case] t: f64) {
        // Shrinking the perihelion distance by a factor f compresses the
        // time axis by f^1.5 and the radius by f, so (q, t) and
        // (1, t/q^1.5) describe similar orbits.
        let mut elt = earth_like_elements();
        elt.eccentricity = 1.0;

        elt.perihelion = q;
        let scaled = elements_to_ephemeris(&(elt.epoch + t), &elt).unwrap();

        elt.perihelion = 1.0;
        let unit = elements_to_ephemeris(&(elt.epoch + t / q.powf(1.5)), &elt).unwrap();

        assert_relative_eq!(scaled.magnitude() / q, unit.magnitude(), max_relative = 1e-10);
    }

    #[test]
    fn test_hyperbolic_orbit_radius_positive_and_receding() {
        let mut elt = earth_like_elements();
        elt.eccentricity = 1.5;
        elt.perihelion = 1.2;
        elt.mean_anomaly = 0.0;
        elt.daily_motion = GAUSS_GRAV_CONSTANT; // arbitrary positive motion

        let r0 = elements_to_ephemeris(&elt.epoch, &elt)
            .unwrap()
            .magnitude();
        assert_relative_eq!(r0, 1.2, max_relative = 1e-9);

        let r1 = elements_to_ephemeris(&(elt.epoch + 30.0), &elt)
            .unwrap()
            .magnitude();
        assert!(r1 > r0);
    }

    #[test]
    fn test_inclined_orbit_leaves_plane() {
        let mut elt = earth_like_elements();
        elt.inclination = 0.3;
        let mut max_z: f64 = 0.0;
        for day in 0..366 {
            let pos = elements_to_ephemeris(&(elt.epoch + day as f64), &elt).unwrap();
            max_z = max_z.max(pos.z.abs());
        }
        // Peak distance from the ecliptic is roughly a*sin(i).
        assert_relative_eq!(max_z, 0.3f64.sin(), max_relative = 0.05);
    }
}
