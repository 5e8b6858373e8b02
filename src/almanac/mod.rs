//! Timing events: sidereal time, rise/transit/set, eclipses, lunar phases
//! and the seasons
//!
//! Sidereal time follows USNO Circular 179 (Earth rotation angle plus the
//! GMST polynomial) with the IERS (2003) complementary series for the
//! equation of the equinoxes. The event finders are modified versions of
//! the classical Meeus algorithms, using Lagrange interpolation over
//! sampled positions where the book uses three-point schemes.

use crate::constants::{reduce_angle, ACS_TO_RAD, DEG_TO_RAD, J2000_EPOCH, TWO_PI, UAS_TO_RAD};
use crate::fundargs::{fundamental_argument, FundamentalArgument};
use crate::nutationlib::{mean_obliquity, nutation_angles};
use crate::time::JulianDate;

pub mod events;
pub mod series;

pub use events::{
    eclipse, equinox_solstice, moon_illumination, moon_phase, EclipseKind, MoonPhase,
};

/// Which flavor of sidereal time to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiderealKind {
    /// Referred to the mean equinox of date.
    Mean,
    /// Referred to the true equinox of date (adds the equation of the
    /// equinoxes).
    Apparent,
}

/// Calculates the local sidereal time in radians, in `[0, 2*PI)`.
///
/// `ut1` drives the Earth rotation angle while `tdb` drives the precession
/// and nutation terms; `longitude` is positive east of Greenwich.
pub fn sidereal_time(
    kind: SiderealKind,
    ut1: &JulianDate,
    tdb: &JulianDate,
    longitude: f64,
) -> f64 {
    let mst = mean_sidereal_time(ut1, tdb, longitude);

    match kind {
        SiderealKind::Mean => mst,
        SiderealKind::Apparent => {
            reduce_angle(mst + equation_of_the_equinoxes(tdb), TWO_PI)
        }
    }
}

fn mean_sidereal_time(ut1: &JulianDate, tdb: &JulianDate, longitude: f64) -> f64 {
    let dut = (ut1.date1 - J2000_EPOCH) + ut1.date2;
    let t = tdb.julian_centuries();

    // Earth rotation angle; the fractional parts are kept separate so the
    // full precision of the two-part date survives.
    let era = (0.779_057_273_264_0
        + 0.002_737_811_911_354_48 * dut
        + ut1.date1.fract()
        + ut1.date2.fract())
        * TWO_PI;

    let mst = era
        + (0.014506
            + (4612.156534
                + (1.3915817
                    + (-0.00000044 + (-0.000029956 - 0.0000000368 * t) * t) * t)
                    * t)
                * t)
            * ACS_TO_RAD;

    reduce_angle(mst + longitude, TWO_PI)
}

/// Calculates the equation of the equinoxes in radians: the offset between
/// mean and apparent sidereal time caused by nutation.
pub fn equation_of_the_equinoxes(tdb: &JulianDate) -> f64 {
    let t = tdb.julian_centuries();

    let l = fundamental_argument(FundamentalArgument::AnomalyMoon, t);
    let lp = fundamental_argument(FundamentalArgument::AnomalySun, t);
    let f = fundamental_argument(FundamentalArgument::LatitudeMoon, t);
    let d = fundamental_argument(FundamentalArgument::ElongationMoon, t);
    let om = fundamental_argument(FundamentalArgument::LongitudeNode, t);
    let l_ve = fundamental_argument(FundamentalArgument::LongitudeVenus, t);
    let l_ea = fundamental_argument(FundamentalArgument::LongitudeEarth, t);
    let pre = fundamental_argument(FundamentalArgument::Precession, t);

    let mut eqe = 0.0;
    for term in &series::EQUINOX {
        let phi = f64::from(term.l) * l
            + f64::from(term.lp) * lp
            + f64::from(term.f) * f
            + f64::from(term.d) * d
            + f64::from(term.om) * om
            + f64::from(term.l_ve) * l_ve
            + f64::from(term.l_ea) * l_ea
            + f64::from(term.pre) * pre;

        eqe += term.si * phi.sin() + term.ci * phi.cos();
    }
    // The single secular complementary term
    eqe -= 0.87 * t * om.sin();
    let eqe = eqe * UAS_TO_RAD;

    let (d_psi, _) = nutation_angles(tdb);
    eqe + d_psi * mean_obliquity(tdb).cos()
}

/// Interpolates using Lagrange's formula over the full set of samples.
/// `xs` and `ys` must have the same length.
pub fn interpolate(xs: &[f64], ys: &[f64], xint: f64) -> f64 {
    let mut yint = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let mut weight = 1.0;
        for (j, x) in xs.iter().enumerate() {
            if i != j {
                weight *= (xint - x) / (xs[i] - x);
            }
        }
        yint += weight * y;
    }

    yint
}

/// Calculates rise, transit and set times for a body from its sampled
/// equatorial positions over one day.
///
/// `df` holds the sampled day fractions in `[0, 1]` with `ra` and `dec`
/// the matching coordinates in radians; a 6-hour sampling is adequate for
/// the planets, finer for the Moon. `gast` is the Greenwich apparent
/// sidereal time at `df[0]`, `delta_t` is in seconds and `h0` is the
/// altitude correction for refraction (and semidiameter) in radians.
///
/// Returns `[rise, transit, set]` as UTC day fractions. The transit slot
/// is always computed; rise and set are `-1.0` for bodies that never cross
/// the horizon during the day (circumpolar or never visible).
pub fn rise_transit_set(
    df: &[f64],
    ra: &[f64],
    dec: &[f64],
    gast: f64,
    lon: f64,
    lat: f64,
    delta_t: f64,
    h0: f64,
) -> [f64; 3] {
    let mut rts = [-1.0, -1.0, -1.0];

    let ch0 = (h0.sin() - lat.sin() * dec[0].sin()) / (lat.cos() * dec[0].cos());
    let crosses_horizon = (-1.0..=1.0).contains(&ch0);
    let ch0 = if crosses_horizon { ch0.acos() } else { 0.0 };

    for (i, slot) in rts.iter_mut().enumerate() {
        if !crosses_horizon && i != 1 {
            continue;
        }

        let mut m = (ra[0] - lon - gast) / TWO_PI;
        if i == 0 {
            m -= ch0 / TWO_PI;
        } else if i == 2 {
            m += ch0 / TWO_PI;
        }

        for _ in 0..10 {
            let n = m + delta_t / 86_400.0;
            let r = interpolate(df, ra, n);
            let d = interpolate(df, dec, n);

            let t0 = gast + 360.985647 * DEG_TO_RAD * m;
            let hour_angle = t0 + lon - r;
            let altitude =
                (lat.sin() * d.sin() + lat.cos() * d.cos() * hour_angle.cos()).asin();

            let dm = if i == 1 {
                -hour_angle / TWO_PI
            } else {
                (altitude - h0) / (TWO_PI * d.cos() * lat.cos() * hour_angle.sin())
            };

            m += dm;
            if dm.abs() <= 1e-5 {
                break;
            }
        }
        *slot = m;
    }

    rts
}
