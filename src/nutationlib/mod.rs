//! IAU 2000 nutation
//!
//! Nutation in longitude and obliquity from the leading lunisolar and
//! planetary terms of the IAU 2000A series. Accuracy is about a
//! milliarcsecond over a few centuries around J2000.

use nalgebra::Matrix3;

use crate::constants::{ACS_TO_RAD, UAS_TO_RAD};
use crate::fundargs::{fundamental_argument, FundamentalArgument};
use crate::time::JulianDate;

pub mod series;

/// Calculates the mean obliquity of the ecliptic in radians using the
/// IAU 2000 polynomial.
pub fn mean_obliquity(tdb: &JulianDate) -> f64 {
    let t = tdb.julian_centuries();

    (84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 - 0.0000000434 * t) * t) * t) * t)
            * t)
        * ACS_TO_RAD
}

/// Calculates the nutation in longitude and obliquity, both in radians,
/// returned as `(d_psi, d_epsilon)`.
pub fn nutation_angles(tdb: &JulianDate) -> (f64, f64) {
    let t = tdb.julian_centuries();

    let (psi_ls, eps_ls) = lunisolar_terms(t);
    let (psi_pl, eps_pl) = planetary_terms(t);

    // Series units are 0.1 microarcseconds
    (
        (psi_ls + psi_pl) * 0.1 * UAS_TO_RAD,
        (eps_ls + eps_pl) * 0.1 * UAS_TO_RAD,
    )
}

/// Sums the lunisolar series at `t` centuries TDB, in 0.1 µas.
fn lunisolar_terms(t: f64) -> (f64, f64) {
    let l = fundamental_argument(FundamentalArgument::AnomalyMoon, t);
    let lp = fundamental_argument(FundamentalArgument::AnomalySun, t);
    let f = fundamental_argument(FundamentalArgument::LatitudeMoon, t);
    let d = fundamental_argument(FundamentalArgument::ElongationMoon, t);
    let om = fundamental_argument(FundamentalArgument::LongitudeNode, t);

    let mut psi = 0.0;
    let mut eps = 0.0;
    // Smallest terms first so the large leading terms do not swamp them
    for term in series::LUNISOLAR.iter().rev() {
        let arg = f64::from(term.l) * l
            + f64::from(term.lp) * lp
            + f64::from(term.f) * f
            + f64::from(term.d) * d
            + f64::from(term.om) * om;
        let (sn, cs) = arg.sin_cos();

        psi += (term.ps + term.psd * t) * sn + term.pcp * cs;
        eps += (term.ec + term.ecd * t) * cs + term.esp * sn;
    }
    (psi, eps)
}

/// Sums the planetary series at `t` centuries TDB, in 0.1 µas. The
/// arguments are the eight mean planetary longitudes, the accumulated
/// general precession and the Delaunay arguments.
fn planetary_terms(t: f64) -> (f64, f64) {
    let me = fundamental_argument(FundamentalArgument::LongitudeMercury, t);
    let ve = fundamental_argument(FundamentalArgument::LongitudeVenus, t);
    let ea = fundamental_argument(FundamentalArgument::LongitudeEarth, t);
    let ma = fundamental_argument(FundamentalArgument::LongitudeMars, t);
    let ju = fundamental_argument(FundamentalArgument::LongitudeJupiter, t);
    let sa = fundamental_argument(FundamentalArgument::LongitudeSaturn, t);
    let ur = fundamental_argument(FundamentalArgument::LongitudeUranus, t);
    let ne = fundamental_argument(FundamentalArgument::LongitudeNeptune, t);
    let pa = fundamental_argument(FundamentalArgument::Precession, t);
    let l = fundamental_argument(FundamentalArgument::AnomalyMoon, t);
    let lp = fundamental_argument(FundamentalArgument::AnomalySun, t);
    let f = fundamental_argument(FundamentalArgument::LatitudeMoon, t);
    let d = fundamental_argument(FundamentalArgument::ElongationMoon, t);
    let om = fundamental_argument(FundamentalArgument::LongitudeNode, t);

    let mut psi = 0.0;
    let mut eps = 0.0;
    for term in series::PLANETARY.iter().rev() {
        let arg = f64::from(term.me) * me
            + f64::from(term.ve) * ve
            + f64::from(term.ea) * ea
            + f64::from(term.ma) * ma
            + f64::from(term.ju) * ju
            + f64::from(term.sa) * sa
            + f64::from(term.ur) * ur
            + f64::from(term.ne) * ne
            + f64::from(term.pa) * pa
            + f64::from(term.l) * l
            + f64::from(term.lp) * lp
            + f64::from(term.f) * f
            + f64::from(term.d) * d
            + f64::from(term.om) * om;
        let (sn, cs) = arg.sin_cos();

        psi += term.ps * sn + term.pcp * cs;
        eps += term.ec * cs + term.esp * sn;
    }
    (psi, eps)
}

/// Calculates the nutation matrix, which rotates equatorial rectangular
/// coordinates from the mean equator and equinox of date to the true
/// equator and equinox of date.
pub fn nutation_matrix(tdb: &JulianDate) -> Matrix3<f64> {
    let epsilon = mean_obliquity(tdb);
    let (d_psi, d_epsilon) = nutation_angles(tdb);

    let (s1, c1) = epsilon.sin_cos();
    let (s2, c2) = d_psi.sin_cos();
    let s2 = -s2;
    let (s3, c3) = (epsilon + d_epsilon).sin_cos();
    let s3 = -s3;

    Matrix3::new(
        c2,
        s2 * c1,
        s2 * s1,
        -(s2 * c3),
        c3 * c2 * c1 - s1 * s3,
        c3 * c2 * s1 + c1 * s3,
        s2 * s3,
        -(s3 * c2 * c1) - s1 * c3,
        -(s3 * c2 * s1) + c3 * c1,
    )
}
