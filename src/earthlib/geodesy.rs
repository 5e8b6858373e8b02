//! Geodesics on the reference ellipsoid
//!
//! Vincenty's inverse and direct formulae on the same oblate figure used
//! for parallax. The inverse problem fails to converge for nearly
//! antipodal points; that surfaces as an error rather than a hang.

use log::debug;

use crate::constants::{EARTH_EQU_RADIUS, EARTH_FLATTENING, EARTH_POL_RADIUS};
use crate::{OrreryError, Result};

const GEODESIC_MAX_ITER: u32 = 200;
const GEODESIC_PRECISION: f64 = 1e-12;

/// Calculates the geodesic distance in meters between two points on the
/// Earth's surface, along with the initial and final bearings in radians,
/// using Vincenty's inverse formula.
///
/// Longitudes are positive east, latitudes positive north, all in radians.
/// Nearly antipodal points make the iteration diverge, which is reported
/// as [`OrreryError::Algorithm`].
pub fn great_circle_distance(
    lon1: f64,
    lat1: f64,
    lon2: f64,
    lat2: f64,
) -> Result<(f64, f64, f64)> {
    let a = EARTH_EQU_RADIUS;
    let b = EARTH_POL_RADIUS;
    let f = EARTH_FLATTENING;

    let big_l = lon2 - lon1;
    let (su1, cu1) = ((1.0 - f) * lat1.tan()).atan().sin_cos();
    let (su2, cu2) = ((1.0 - f) * lat2.tan()).atan().sin_cos();

    let mut lambda = big_l;
    let mut converged = false;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut sin_alpha = 0.0;
    let mut cos2_alpha = 0.0;
    let mut cos_2sm = 0.0;

    for _ in 0..GEODESIC_MAX_ITER {
        let (sl, cl) = lambda.sin_cos();
        sin_sigma = (cu2 * sl).hypot(cu1 * su2 - su1 * cu2 * cl);
        if sin_sigma == 0.0 {
            // Coincident points
            return Ok((0.0, 0.0, 0.0));
        }

        cos_sigma = su1 * su2 + cu1 * cu2 * cl;
        sigma = sin_sigma.atan2(cos_sigma);
        sin_alpha = cu1 * cu2 * sl / sin_sigma;
        cos2_alpha = 1.0 - sin_alpha * sin_alpha;
        cos_2sm = if cos2_alpha != 0.0 {
            cos_sigma - 2.0 * su1 * su2 / cos2_alpha
        } else {
            // Both points on the equator
            0.0
        };

        let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
        let prev = lambda;
        lambda = big_l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sm + c * cos_sigma * (2.0 * cos_2sm * cos_2sm - 1.0)));

        if (lambda - prev).abs() < GEODESIC_PRECISION {
            converged = true;
            break;
        }
    }

    if !converged {
        debug!(
            "geodesic iteration diverged for ({}, {}) -> ({}, {})",
            lon1, lat1, lon2, lat2
        );
        return Err(OrreryError::Algorithm(
            "geodesic did not converge; the points are nearly antipodal".into(),
        ));
    }

    let u2 = cos2_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u2 / 16384.0 * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
    let big_b = u2 / 1024.0 * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));

    let d_sigma = big_b
        * sin_sigma
        * (cos_2sm
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)
                    - big_b / 6.0
                        * cos_2sm
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sm * cos_2sm)));

    let distance = b * big_a * (sigma - d_sigma);
    let (sl, cl) = lambda.sin_cos();
    let bearing1 = (cu2 * sl).atan2(cu1 * su2 - su1 * cu2 * cl);
    let bearing2 = (cu1 * sl).atan2(-su1 * cu2 + cu1 * su2 * cl);

    Ok((distance, bearing1, bearing2))
}

/// Calculates the destination reached by travelling `distance` meters from
/// `(lon1, lat1)` on the initial bearing given, using Vincenty's direct
/// formula. Returns `(lon2, lat2, final_bearing)` in radians.
///
/// The direct iteration is contractive, so this always converges.
pub fn great_circle_destination(
    lon1: f64,
    lat1: f64,
    bearing1: f64,
    distance: f64,
) -> (f64, f64, f64) {
    let a = EARTH_EQU_RADIUS;
    let b = EARTH_POL_RADIUS;
    let f = EARTH_FLATTENING;

    let tu1 = (1.0 - f) * lat1.tan();
    let cu1 = 1.0 / (1.0 + tu1 * tu1).sqrt();
    let su1 = tu1 * cu1;

    let (sb1, cb1) = bearing1.sin_cos();
    let sigma1 = tu1.atan2(cb1);
    let sin_alpha = cu1 * sb1;
    let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

    let u2 = cos2_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u2 / 16384.0 * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
    let big_b = u2 / 1024.0 * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));

    let mut sigma = distance / (b * big_a);
    let mut cos_2sm = (2.0 * sigma1 + sigma).cos();
    for _ in 0..GEODESIC_MAX_ITER {
        cos_2sm = (2.0 * sigma1 + sigma).cos();
        let (ss, cs) = sigma.sin_cos();
        let d_sigma = big_b
            * ss
            * (cos_2sm
                + big_b / 4.0
                    * (cs * (-1.0 + 2.0 * cos_2sm * cos_2sm)
                        - big_b / 6.0
                            * cos_2sm
                            * (-3.0 + 4.0 * ss * ss)
                            * (-3.0 + 4.0 * cos_2sm * cos_2sm)));

        let prev = sigma;
        sigma = distance / (b * big_a) + d_sigma;
        if (sigma - prev).abs() < GEODESIC_PRECISION {
            break;
        }
    }

    let (ss, cs) = sigma.sin_cos();
    let lat2 = (su1 * cs + cu1 * ss * cb1)
        .atan2((1.0 - f) * sin_alpha.hypot(su1 * ss - cu1 * cs * cb1));
    let lambda = (ss * sb1).atan2(cu1 * cs - su1 * ss * cb1);
    let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
    let big_l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * ss * (cos_2sm + c * cs * (-1.0 + 2.0 * cos_2sm * cos_2sm)));
    let bearing2 = sin_alpha.atan2(-(su1 * ss - cu1 * cs * cb1));

    (lon1 + big_l, lat2, bearing2)
}
