//! Eclipse, lunar phase and season finders
//!
//! All of these follow Meeus, "Astronomical Algorithms", chapters 47-54:
//! truncated periodic developments around a mean lunation index `k`. They
//! locate the first event at or after the given date; walking `k` forward
//! from each result enumerates subsequent events.

use crate::constants::{reduce_angle, C_AUDAY, DEG_TO_RAD, J2000_EPOCH, TWO_PI};
use crate::coordinates::{equatorial_to_ecliptic, rectangular_to_spherical, Cartesian3, Equatorial};
use crate::framelib::heliocentric_equatorial;
use crate::nutationlib::{mean_obliquity, nutation_angles};
use crate::planetlib::Body;
use crate::precessionlib::{precession_matrix, PrecessionDirection};
use crate::time::JulianDate;
use crate::{OrreryError, Result};

use super::interpolate;

/// Which kind of eclipse to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EclipseKind {
    Solar,
    Lunar,
}

/// The principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

/// Lunation index of the first mean New Moon at or after `tdb`, relative
/// to the New Moon of 2000-01-06.
fn lunation_index(tdb: &JulianDate) -> f64 {
    ((tdb.value() - J2000_EPOCH) * 12.3685 / 365.25).round()
}

/// Finds the syzygy nearest an eclipse at or after `tdb`.
///
/// Returns `(time, gamma, u)`: the TDB Julian date of maximum eclipse, the
/// least distance of the shadow axis from the Earth's centre (solar) or of
/// the Moon from the shadow axis (lunar) in Earth radii, and the penumbral
/// radius parameter `u` in Earth radii.
///
/// This reports the first syzygy close enough to a node for an eclipse to
/// be geometrically possible; `|gamma|` above about 1.55 (solar) or 1.57
/// (lunar) means the shadow misses and the caller should advance to the
/// next lunation.
pub fn eclipse(tdb: &JulianDate, kind: EclipseKind) -> (f64, f64, f64) {
    let mut k = lunation_index(tdb);
    if kind == EclipseKind::Lunar {
        k += 0.5;
    }

    // Advance to a syzygy near enough a node: |sin F| <= 0.36.
    let mut t;
    let mut f;
    loop {
        t = k / 1236.85;
        f = (160.7108
            + 390.670_502_84 * k
            + (-0.0016118 + (-2.27e-6 + 1.1e-8 * t) * t) * t * t)
            * DEG_TO_RAD;
        if f.sin().abs() <= 0.36 {
            break;
        }
        k += 1.0;
    }

    let mut jde = 2_451_550.097_66
        + 29.530_588_861 * k
        + (1.5437e-4 + (-1.50e-7 + 7.3e-10 * t) * t) * t * t;
    let e = 1.0 - (2.516e-3 + 7.4e-6 * t) * t;
    let m = (2.5534 + 29.105_356_70 * k - (1.4e-6 + 1.1e-7 * t) * t * t) * DEG_TO_RAD;
    let n = (201.5643
        + 385.816_935_28 * k
        + (0.0107582 + (1.238e-5 - 5.8e-8 * t) * t) * t * t)
        * DEG_TO_RAD;
    let o = (124.7746 - 1.563_755_88 * k + (2.0672e-3 + 2.15e-6 * t) * t * t) * DEG_TO_RAD;
    f -= 0.02665 * o.sin() * DEG_TO_RAD;
    let a = (299.77 + 0.107408 * k - 9.173e-3 * t * t) * DEG_TO_RAD;

    let (c_n, c_m) = match kind {
        EclipseKind::Solar => (-0.4075, 0.1721),
        EclipseKind::Lunar => (-0.4065, 0.1727),
    };

    jde += c_n * n.sin()
        + c_m * e * m.sin()
        + 0.0161 * (2.0 * n).sin()
        - 9.7e-3 * (2.0 * f).sin()
        + 7.3e-3 * e * (n - m).sin()
        - 5.0e-3 * e * (n + m).sin()
        - 2.3e-3 * (n - 2.0 * f).sin()
        + 2.1e-3 * e * (2.0 * m).sin()
        + 1.2e-3 * (n + 2.0 * f).sin()
        + 6e-4 * e * (2.0 * n + m).sin()
        - 4e-4 * (3.0 * n).sin()
        - 3e-4 * (e * (m + 2.0 * f).sin() - a.sin())
        - 2e-4 * (e * (m - 2.0 * f).sin() + e * (2.0 * n - m).sin() + o.sin());

    let p = 0.2070 * e * m.sin() + 2.4e-3 * e * (2.0 * m).sin() - 0.0392 * n.sin()
        + 0.0116 * (2.0 * n).sin()
        - 7.3e-3 * e * (n + m).sin()
        + 6.7e-3 * e * (n - m).sin()
        + 0.0118 * (2.0 * f).sin();
    let q = 5.2207 - 4.8e-3 * e * m.cos() + 2.0e-3 * e * (2.0 * m).cos() - 0.3299 * n.cos()
        - 6.0e-3 * e * (n + m).cos()
        + 4.1e-3 * e * (n - m).cos();

    let gamma = (p * f.cos() + q * f.sin()) * (1.0 - 4.8e-3 * f.cos().abs());
    let u = 5.9e-3 + 4.6e-3 * e * m.cos() - 0.0182 * n.cos() + 4e-4 * (2.0 * n).cos()
        - 5e-4 * (m + n).cos();

    (jde, gamma, u)
}

/// Mean longitudes and amplitudes of the fourteen planetary perturbation
/// terms of the lunar phase development, in degrees and millionths of a
/// day. The first longitude carries an extra secular term applied at
/// evaluation time.
#[rustfmt::skip]
static PHASE_A0: [f64; 14] = [
    299.77, 251.88, 251.83, 349.42, 84.66, 141.74, 207.14,
    154.84, 34.52, 207.19, 291.34, 161.72, 239.56, 331.55,
];
#[rustfmt::skip]
static PHASE_A1: [f64; 14] = [
    0.107408, 0.016321, 26.651886, 36.412478, 18.206239, 53.303771, 2.453732,
    7.306860, 27.261239, 0.121824, 1.844379, 24.198154, 25.513099, 3.592518,
];
#[rustfmt::skip]
static PHASE_AMPLITUDE: [f64; 14] = [
    325.0, 165.0, 164.0, 126.0, 110.0, 62.0, 60.0,
    56.0, 47.0, 42.0, 40.0, 37.0, 35.0, 23.0,
];

/// Calculates the TDB Julian date of the first occurrence of `phase` at or
/// after `tdb`. The result is accurate to a few seconds over several
/// centuries around J2000.
pub fn moon_phase(tdb: &JulianDate, phase: MoonPhase) -> f64 {
    let k = lunation_index(tdb)
        + match phase {
            MoonPhase::New => 0.0,
            MoonPhase::FirstQuarter => 0.25,
            MoonPhase::Full => 0.5,
            MoonPhase::LastQuarter => 0.75,
        };
    let t = k / 1236.85;

    let jde = 2_451_550.097_66
        + 29.530_588_861 * k
        + (1.5437e-4 + (-1.50e-7 + 7.3e-10 * t) * t) * t * t;
    let e = 1.0 - (2.516e-3 + 7.4e-6 * t) * t;
    let m = (2.5534 + 29.105_356_70 * k - (1.4e-6 + 1.1e-7 * t) * t * t) * DEG_TO_RAD;
    let n = (201.5643
        + 385.816_935_28 * k
        + (0.0107582 + (1.238e-5 - 5.8e-8 * t) * t) * t * t)
        * DEG_TO_RAD;
    let f = (160.7108
        + 390.670_502_84 * k
        + (-0.0016118 + (-2.27e-6 + 1.1e-8 * t) * t) * t * t)
        * DEG_TO_RAD;
    let o = (124.7746 - 1.563_755_88 * k + (0.0020672 + 2.15e-6 * t) * t * t) * DEG_TO_RAD;

    let c1 = match phase {
        MoonPhase::New | MoonPhase::Full => {
            let (cn, cm, c2n, c2f, cnm, cnpm, c2m) = match phase {
                MoonPhase::New => {
                    (-0.40720, 0.17241, 0.01608, 0.01039, 7.39e-3, -5.14e-3, 2.08e-3)
                }
                _ => (-0.40614, 0.17302, 0.01614, 0.01043, 7.34e-3, -5.15e-3, 2.09e-3),
            };

            cn * n.sin()
                + cm * e * m.sin()
                + c2n * (2.0 * n).sin()
                + c2f * (2.0 * f).sin()
                + cnm * e * (n - m).sin()
                + cnpm * e * (n + m).sin()
                + c2m * e * e * (2.0 * m).sin()
                - 1.11e-3 * (n - 2.0 * f).sin()
                - 5.7e-4 * (n + 2.0 * f).sin()
                + 5.6e-4 * e * (2.0 * n + m).sin()
                - 4.2e-4 * (3.0 * n).sin()
                + (4.2e-4 * (m + 2.0 * f).sin() + 3.8e-4 * (m - 2.0 * f).sin()
                    - 2.4e-4 * (2.0 * n - m).sin())
                    * e
                - 1.7e-4 * o.sin()
                - 7e-5 * (n + 2.0 * m).sin()
                + 4e-5 * ((2.0 * n - 2.0 * f).sin() + (3.0 * m).sin())
                + 3e-5
                    * ((n + m - 2.0 * f).sin() + (2.0 * n + 2.0 * f).sin()
                        - (n + m + 2.0 * f).sin()
                        + (n - m + 2.0 * f).sin())
                - 2e-5
                    * ((n - m - 2.0 * f).sin() + (3.0 * n + m).sin() - (4.0 * n).sin())
        }
        _ => {
            -0.62801 * n.sin()
                + (0.17172 * m.sin() - 0.01183 * (n + m).sin()) * e
                + 8.62e-3 * (2.0 * n).sin()
                + 8.04e-3 * (2.0 * f).sin()
                + (4.54e-3 * (n - m).sin() + 2.04e-3 * e * (2.0 * m).sin()) * e
                - 1.8e-3 * (n - 2.0 * f).sin()
                - 7e-4 * (n + 2.0 * f).sin()
                - 4e-4 * (3.0 * n).sin()
                + (-3.4e-4 * (2.0 * n - m).sin()
                    + 3.2e-4 * (m + 2.0 * f).sin()
                    + 3.2e-4 * (m - 2.0 * f).sin()
                    - 2.8e-4 * e * (n + 2.0 * m).sin()
                    + 2.7e-4 * (2.0 * n + m).sin())
                    * e
                - 1.7e-4 * o.sin()
                - 5e-5 * (n - m - 2.0 * f).sin()
                + 4e-5
                    * ((2.0 * n + 2.0 * f).sin() - (n + m + 2.0 * f).sin()
                        + (n - 2.0 * m).sin())
                + 3e-5 * ((n + m - 2.0 * f).sin() + (3.0 * m).sin())
                + 2e-5
                    * ((2.0 * n - 2.0 * f).sin() + (n - m + 2.0 * f).sin()
                        - (3.0 * n + m).sin())
        }
    };

    let c2 = match phase {
        MoonPhase::New | MoonPhase::Full => 0.0,
        _ => {
            let w = 3.06e-3 - 3.8e-4 * e * m.cos() + 2.6e-4 * n.cos()
                - 2e-5 * ((n - m).cos() - (n + m).cos() - (2.0 * f).cos());
            match phase {
                MoonPhase::FirstQuarter => w,
                _ => -w,
            }
        }
    };

    let mut c3 = 0.0;
    for i in 0..14 {
        let mut a0 = PHASE_A0[i];
        if i == 0 {
            a0 -= 9.173e-3 * t * t;
        }
        c3 += ((a0 + PHASE_A1[i] * k) * DEG_TO_RAD).sin() * PHASE_AMPLITUDE[i];
    }
    c3 /= 1e6;

    jde + c1 + c2 + c3
}

/// Calculates the illuminated fraction of the Moon's disk at `tdb`, in
/// `[0, 1]`, rounded to two decimals.
pub fn moon_illumination(tdb: &JulianDate) -> f64 {
    let t = tdb.julian_centuries();

    let d = 297.850_192_1
        + (445_267.111_403_4
            + (-0.0018819 + (1.0 / 545_868.0 - 1.0 / 113_065_000.0 * t) * t) * t)
            * t;
    let m = 357.529_109_2 + (35_999.050_290_9 + (-0.0001536 + 1.0 / 24_490_000.0 * t) * t) * t;
    let n = 134.963_396_4
        + (477_198.867_505_5 + (0.0087414 + (1.0 / 69_699.0 - 1.0 / 14_712_000.0 * t) * t) * t)
            * t;

    let (d, m, n) = (d * DEG_TO_RAD, m * DEG_TO_RAD, n * DEG_TO_RAD);
    let i = std::f64::consts::PI - d
        + (-6.289 * n.sin() + 2.100 * m.sin()
            - 1.274 * (2.0 * d - n).sin()
            - 0.658 * (2.0 * d).sin()
            - 0.214 * (2.0 * n).sin()
            - 0.110 * d.sin())
            * DEG_TO_RAD;

    ((1.0 + i.cos()) * 50.0).round() / 100.0
}

/// Calculates the TDB Julian date of an equinox or solstice.
///
/// `month` selects the event: 3 for the March equinox, 6 for the June
/// solstice, 9 for the September equinox, 12 for the December solstice.
/// The event is found by sampling the Sun's apparent ecliptic longitude
/// over the day starting on the 20th and inverse-interpolating to the
/// target longitude.
pub fn equinox_solstice(year: i32, month: u32) -> Result<JulianDate> {
    let target = match month {
        3 => TWO_PI,
        6 => TWO_PI / 4.0,
        9 => TWO_PI / 2.0,
        12 => 3.0 * TWO_PI / 4.0,
        _ => {
            return Err(OrreryError::InvalidDate(format!(
                "month {} does not hold an equinox or solstice",
                month
            )))
        }
    };

    let jd0 = JulianDate::from_calendar(year, month, 20.0)?;
    let df: Vec<f64> = (0..5).map(|i| i as f64 * 0.25).collect();
    let mut lon = Vec::with_capacity(df.len());

    for frac in &df {
        let jd = jd0 + *frac;

        // Apparent direction: antedate the Earth for light travel time.
        let mut earth = heliocentric_equatorial(Body::Earth, &jd)?;
        for _ in 0..3 {
            let delay = earth.magnitude() / C_AUDAY;
            earth = heliocentric_equatorial(Body::Earth, &(jd - delay))?;
        }

        let mat = precession_matrix(&jd, PrecessionDirection::FromJ2000);
        let earth = Cartesian3::from_vector3(mat * earth.to_vector3());

        let (ra, dec, _) = rectangular_to_spherical(&Cartesian3::ZERO, &earth);
        let (nut_lon, nut_obl) = nutation_angles(&jd);
        let ecl = equatorial_to_ecliptic(
            &Equatorial {
                right_ascension: ra,
                declination: dec,
            },
            mean_obliquity(&jd) + nut_obl,
        );
        lon.push(reduce_angle(ecl.longitude + nut_lon, TWO_PI));
    }

    // Unwrap the March crossing, where the longitude jumps from just
    // under 2*PI back to zero.
    let mut wrap = 0.0;
    for i in 1..lon.len() {
        if lon[i - 1] > 1.5 * std::f64::consts::PI && lon[i] < 0.5 * std::f64::consts::PI {
            wrap = TWO_PI;
        }
        lon[i] += wrap;
    }

    Ok(jd0 + interpolate(&lon, &df, target))
}
