//! Coordinate value types and the pure transform pipeline
//!
//! All angles are in radians. Every conversion is a pure function returning a
//! new value; callers that want in-place semantics assign over the original.
//! Frames and epochs (mean vs. true equinox) are implicit: these functions
//! apply exactly the stated rotation or reduction and nothing else.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::constants::{reduce_angle, TWO_PI};

pub mod cartesian;

pub use cartesian::Cartesian3;

/// Geocentric equatorial coordinates: right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in radians, `[0, 2*PI)`
    pub right_ascension: f64,
    /// Declination in radians, `[-PI/2, PI/2]`
    pub declination: f64,
}

/// Ecliptic coordinates: longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    /// Ecliptic longitude in radians, `[0, 2*PI)`
    pub longitude: f64,
    /// Ecliptic latitude in radians, `[-PI/2, PI/2]`
    pub latitude: f64,
}

/// Horizontal coordinates for a topocentric observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth in radians, measured westward from the south, `[0, 2*PI)`
    pub azimuth: f64,
    /// Altitude above the horizon in radians
    pub altitude: f64,
}

/// Converts a body's heliocentric rectangular coordinates to geocentric
/// spherical coordinates by differencing against the Earth's heliocentric
/// position. No rotation is involved, so the result stays in the reference
/// frame of the inputs: the pair reads as (longitude, latitude) for ecliptic
/// inputs and (right ascension, declination) for equatorial inputs. Returns
/// `(lon, lat, distance)` with the distance in the input units.
pub fn rectangular_to_spherical(body: &Cartesian3, earth: &Cartesian3) -> (f64, f64, f64) {
    let g = *body - *earth;

    let lon = reduce_angle(g.y.atan2(g.x), TWO_PI);
    let lat = g.z.atan2((g.x * g.x + g.y * g.y).sqrt());

    (lon, lat, g.magnitude())
}

/// Converts spherical coordinates back to rectangular coordinates with the
/// same origin and reference plane.
pub fn spherical_to_rectangular(lon: f64, lat: f64, rad: f64) -> Cartesian3 {
    let (sr, cr) = lon.sin_cos();
    let (sd, cd) = lat.sin_cos();

    Cartesian3::new(rad * cr * cd, rad * sr * cd, rad * sd)
}

/// Converts geocentric equatorial coordinates to ecliptic coordinates, given
/// the obliquity of the ecliptic.
pub fn equatorial_to_ecliptic(equ: &Equatorial, obl: f64) -> Ecliptic {
    let (sd, cd) = equ.declination.sin_cos();
    let (sr, cr) = equ.right_ascension.sin_cos();
    let (so, co) = obl.sin_cos();

    Ecliptic {
        longitude: reduce_angle((sr * cd * co + sd * so).atan2(cr * cd), TWO_PI),
        latitude: (sd * co - sr * cd * so).asin(),
    }
}

/// Converts geocentric ecliptic coordinates to equatorial coordinates, given
/// the obliquity of the ecliptic.
pub fn ecliptic_to_equatorial(ecl: &Ecliptic, obl: f64) -> Equatorial {
    let (sg, cg) = ecl.longitude.sin_cos();
    let (st, ct) = ecl.latitude.sin_cos();
    let (so, co) = obl.sin_cos();

    Equatorial {
        right_ascension: reduce_angle((sg * ct * co - st * so).atan2(cg * ct), TWO_PI),
        declination: (st * co + sg * ct * so).asin(),
    }
}

/// Converts equatorial coordinates to horizontal coordinates for an observer
/// at geographic latitude `lat`, given the body's local hour angle.
pub fn equatorial_to_horizontal(ha: f64, decl: f64, lat: f64) -> Horizontal {
    let (sd, cd) = decl.sin_cos();
    let (sh, ch) = ha.sin_cos();
    let (st, ct) = lat.sin_cos();

    Horizontal {
        azimuth: reduce_angle((cd * sh).atan2(cd * st * ch - sd * ct), TWO_PI),
        altitude: (sd * st + cd * ct * ch).asin(),
    }
}

/// Converts horizontal coordinates back to the body's local hour angle and
/// declination.
pub fn horizontal_to_equatorial(hor: &Horizontal, lat: f64) -> (f64, f64) {
    let (sa, ca) = hor.altitude.sin_cos();
    let (sz, cz) = hor.azimuth.sin_cos();
    let (st, ct) = lat.sin_cos();

    let ha = reduce_angle((sz * ca).atan2(cz * ca * st + sa * ct), TWO_PI);
    let decl = (sa * st - cz * ca * ct).asin();

    (ha, decl)
}

/// Applies a rotation matrix to rectangular coordinates.
pub fn rotate_rectangular(mat: &Matrix3<f64>, pos: &Cartesian3) -> Cartesian3 {
    Cartesian3::from_vector3(mat * pos.to_vector3())
}

/// Applies a rotation matrix to equatorial coordinates by way of a unit
/// vector. Suitable for applying the precession/nutation matrices directly
/// to (RA, Dec) pairs.
pub fn rotate_equatorial(mat: &Matrix3<f64>, pos: &Equatorial) -> Equatorial {
    let rec = spherical_to_rectangular(pos.right_ascension, pos.declination, 1.0);
    let rot = rotate_rectangular(mat, &rec);

    Equatorial {
        right_ascension: reduce_angle(rot.y.atan2(rot.x), TWO_PI),
        declination: rot.z.asin(),
    }
}

/// Rotates rectangular coordinates from the ecliptic frame to the equatorial
/// frame about the common x axis.
pub fn rotate_ecliptic_to_equator(obl: f64, pos: &Cartesian3) -> Cartesian3 {
    let (so, co) = obl.sin_cos();

    Cartesian3::new(pos.x, pos.y * co - pos.z * so, pos.y * so + pos.z * co)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    const OBL_J2000: f64 = 0.4090926006; // 23.4392911 degrees

    #[test]
    fn test_rectangular_to_spherical_differences_origin() {
        let body = Cartesian3::new(2.0, 0.0, 0.0);
        let earth = Cartesian3::new(1.0, 0.0, 0.0);
        let (lon, lat, dist) = rectangular_to_spherical(&body, &earth);
        assert_abs_diff_eq!(lon, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(lat, 0.0, epsilon = 1e-15);
        assert_relative_eq!(dist, 1.0);

        // A body "behind" the Earth sits at longitude PI
        let (lon, _, _) = rectangular_to_spherical(&Cartesian3::ZERO, &earth);
        assert_relative_eq!(lon, PI, max_relative = 1e-15);
    }

    #[test]
    fn test_spherical_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let lon = rng.gen_range(0.0..TWO_PI);
            let lat = rng.gen_range(-1.5..1.5);
            let rad = rng.gen_range(0.1..40.0);

            let rec = spherical_to_rectangular(lon, lat, rad);
            let (lon2, lat2, dist) = rectangular_to_spherical(&rec, &Cartesian3::ZERO);
            assert_relative_eq!(lon2, lon, max_relative = 1e-10);
            assert_relative_eq!(lat2, lat, max_relative = 1e-10);
            assert_relative_eq!(dist, rad, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_ecliptic_equatorial_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let ecl = Ecliptic {
                longitude: rng.gen_range(0.0..TWO_PI),
                latitude: rng.gen_range(-1.5..1.5),
            };
            let equ = ecliptic_to_equatorial(&ecl, OBL_J2000);
            let back = equatorial_to_ecliptic(&equ, OBL_J2000);
            assert_relative_eq!(back.longitude, ecl.longitude, max_relative = 1e-10);
            assert_abs_diff_eq!(back.latitude, ecl.latitude, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equinox_is_shared_by_both_frames() {
        // The vernal equinox direction has zero coordinates in both frames.
        let ecl = Ecliptic {
            longitude: 0.0,
            latitude: 0.0,
        };
        let equ = ecliptic_to_equatorial(&ecl, OBL_J2000);
        assert_abs_diff_eq!(equ.right_ascension, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(equ.declination, 0.0, epsilon = 1e-15);

        // The north ecliptic pole sits at declination 90 deg - obliquity.
        let pole = Ecliptic {
            longitude: 0.0,
            latitude: FRAC_PI_2,
        };
        let equ = ecliptic_to_equatorial(&pole, OBL_J2000);
        assert_relative_eq!(
            equ.declination,
            FRAC_PI_2 - OBL_J2000,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_horizontal_round_trip() {
        let lat = 0.9; // mid-northern observer
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let ha = rng.gen_range(0.0..TWO_PI);
            let decl = rng.gen_range(-1.4..1.4);

            let hor = equatorial_to_horizontal(ha, decl, lat);
            let (ha2, decl2) = horizontal_to_equatorial(&hor, lat);
            assert_relative_eq!(ha2, ha, max_relative = 1e-10);
            assert_abs_diff_eq!(decl2, decl, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_body_on_meridian_altitude() {
        // At upper transit (hour angle 0) the altitude is 90 - |lat - dec|.
        let lat: f64 = 0.7;
        let decl: f64 = 0.2;
        let hor = equatorial_to_horizontal(0.0, decl, lat);
        assert_relative_eq!(
            hor.altitude,
            FRAC_PI_2 - (lat - decl),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rotations_preserve_length() {
        let rot = Matrix3::new(
            OBL_J2000.cos(),
            -OBL_J2000.sin(),
            0.0,
            OBL_J2000.sin(),
            OBL_J2000.cos(),
            0.0,
            0.0,
            0.0,
            1.0,
        );
        let v = Cartesian3::new(1.0, 2.0, -3.0);
        let r = rotate_rectangular(&rot, &v);
        assert_relative_eq!(r.magnitude(), v.magnitude(), max_relative = 1e-12);
    }

    #[test]
    fn test_rotate_ecliptic_to_equator_matches_angle_form() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let ecl = Ecliptic {
                longitude: rng.gen_range(0.0..TWO_PI),
                latitude: rng.gen_range(-1.5..1.5),
            };
            let rec = spherical_to_rectangular(ecl.longitude, ecl.latitude, 1.0);
            let rot = rotate_ecliptic_to_equator(OBL_J2000, &rec);

            let equ = ecliptic_to_equatorial(&ecl, OBL_J2000);
            let expect =
                spherical_to_rectangular(equ.right_ascension, equ.declination, 1.0);
            assert_abs_diff_eq!(rot.x, expect.x, epsilon = 1e-12);
            assert_abs_diff_eq!(rot.y, expect.y, epsilon = 1e-12);
            assert_abs_diff_eq!(rot.z, expect.z, epsilon = 1e-12);
        }
    }
}
