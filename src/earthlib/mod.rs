//! The Earth as an observing platform
//!
//! The oblate figure of the Earth, geocentric parallax for topocentric
//! observers, the Ron-Vondrak theory of annual aberration, and geodesics
//! on the reference ellipsoid.

use crate::constants::{
    ACS_TO_RAD, EARTH_EQU_RADIUS, EARTH_FLATTENING, EARTH_POL_RADIUS,
};
use crate::coordinates::{Cartesian3, Equatorial};
use crate::fundargs::{fundamental_argument, FundamentalArgument};
use crate::time::JulianDate;

pub mod geodesy;
pub mod series;

pub use geodesy::{great_circle_destination, great_circle_distance};

/// The Earth's velocity in 1e-8 AU/day, for scaling the aberration series.
const C_LIGHT_SERIES: f64 = 17_314_463_348.4;

/// Calculates the observer's geocentric latitude in radians and geocentric
/// radius as a fraction of the Earth's equatorial radius, accounting for
/// the oblateness of the Earth.
///
/// `geog_lat` is the geographic latitude in radians and `height_msl` the
/// height above mean sea level in meters.
pub fn earth_figure_values(geog_lat: f64, height_msl: f64) -> (f64, f64) {
    let (sg, cg) = geog_lat.sin_cos();
    let x = (EARTH_POL_RADIUS * sg).atan2(EARTH_EQU_RADIUS * cg);
    let (s, c) = x.sin_cos();

    let c = c + (height_msl / EARTH_EQU_RADIUS) * cg;
    let s = (1.0 - EARTH_FLATTENING) * s + (height_msl / EARTH_EQU_RADIUS) * sg;

    (s.atan2(c), (c * c + s * s).sqrt())
}

/// Calculates the geocentric parallax in the equatorial coordinates of a
/// body, returned as `(d_ra, d_decl)` in radians.
///
/// `hr_ang` is the body's local hour angle, `decl` its declination, and
/// `distance` its distance from the Earth in AU. The observer is at
/// geographic latitude `geog_lat` and `height_msl` meters above sea level.
pub fn geocentric_parallax(
    hr_ang: f64,
    decl: f64,
    distance: f64,
    geog_lat: f64,
    height_msl: f64,
) -> (f64, f64) {
    let (gc_lat, gc_radius) = earth_figure_values(geog_lat, height_msl);

    // Equatorial horizontal parallax of the body
    let hpx = (8.794 * ACS_TO_RAD).sin() / distance;

    let (sh, ch) = hr_ang.sin_cos();
    let (sd, cd) = decl.sin_cos();
    let (sl, cl) = gc_lat.sin_cos();

    let d_ra = (-gc_radius * cl * hpx * sh).atan2(cd - gc_radius * cl * hpx * ch);
    let d_decl = ((sd - gc_radius * sl * hpx) * d_ra.cos())
        .atan2(cd - gc_radius * cl * hpx * ch)
        - decl;

    (d_ra, d_decl)
}

/// Calculates the Earth's velocity components in 1e-8 AU/day using the
/// Ron-Vondrak trigonometric expansions. The reference frame is the
/// equator and equinox of J2000.
pub fn earth_velocity(tdb: &JulianDate) -> Cartesian3 {
    let t = tdb.julian_centuries();

    let me = fundamental_argument(FundamentalArgument::LongitudeMercury, t);
    let ve = fundamental_argument(FundamentalArgument::LongitudeVenus, t);
    let ea = fundamental_argument(FundamentalArgument::LongitudeEarth, t);
    let ma = fundamental_argument(FundamentalArgument::LongitudeMars, t);
    let ju = fundamental_argument(FundamentalArgument::LongitudeJupiter, t);
    let sa = fundamental_argument(FundamentalArgument::LongitudeSaturn, t);
    let ur = fundamental_argument(FundamentalArgument::LongitudeUranus, t);
    let ne = fundamental_argument(FundamentalArgument::LongitudeNeptune, t);
    let l = fundamental_argument(FundamentalArgument::AnomalyMoon, t);
    let lp = fundamental_argument(FundamentalArgument::AnomalySun, t);
    let f = fundamental_argument(FundamentalArgument::LatitudeMoon, t);
    let d = fundamental_argument(FundamentalArgument::ElongationMoon, t);
    let w = fundamental_argument(FundamentalArgument::LongitudeMoon, t);

    // Each series is summed smallest terms first to limit rounding loss.
    let mut v1 = Cartesian3::ZERO;
    for term in series::EMB_HARMONIC.iter().rev() {
        let phi = f64::from(term.me) * me
            + f64::from(term.ve) * ve
            + f64::from(term.ea) * ea
            + f64::from(term.ma) * ma
            + f64::from(term.ju) * ju
            + f64::from(term.sa) * sa;
        let (s_phi, c_phi) = phi.sin_cos();

        v1.x += term.x_sin * s_phi + term.x_cos * c_phi;
        v1.y += term.y_sin * s_phi + term.y_cos * c_phi;
        v1.z += term.z_sin * s_phi + term.z_cos * c_phi;
    }

    for term in series::EMB_MAIN.iter().rev() {
        let (s_phi, c_phi) = (f64::from(term.l_ea) * ea).sin_cos();

        v1.x += (term.x_sin + term.x_sin_t * t) * s_phi;
        v1.x += (term.x_cos + (term.x_cos_t + term.x_cos_t2 * t) * t) * c_phi;

        v1.y += (term.y_sin + (term.y_sin_t + term.y_sin_t2 * t) * t) * s_phi;
        v1.y += (term.y_cos + term.y_cos_t * t) * c_phi;

        v1.z += (term.z_sin + (term.z_sin_t + term.z_sin_t2 * t) * t) * s_phi;
        v1.z += (term.z_cos + term.z_cos_t * t) * c_phi;
    }

    let mut v2 = Cartesian3::ZERO;
    for term in series::SUN_BARYCENTER.iter().rev() {
        let phi = f64::from(term.ve) * ve
            + f64::from(term.ea) * ea
            + f64::from(term.ju) * ju
            + f64::from(term.sa) * sa
            + f64::from(term.ur) * ur
            + f64::from(term.ne) * ne;
        let (s_phi, c_phi) = phi.sin_cos();

        v2.x += term.x_sin * s_phi + term.x_cos * c_phi;
        v2.y += term.y_sin * s_phi + term.y_cos * c_phi;
        v2.z += term.z_sin * s_phi + term.z_cos * c_phi;
    }

    let mut v3 = Cartesian3::ZERO;
    for term in series::EARTH_EMB.iter().rev() {
        let phi = f64::from(term.w) * w
            + f64::from(term.d) * d
            + f64::from(term.lp) * lp
            + f64::from(term.l) * l
            + f64::from(term.f) * f;
        let (s_phi, c_phi) = phi.sin_cos();

        v3.x += term.x_sin * s_phi;
        v3.y += term.y_cos * c_phi;
        v3.z += term.z_cos * c_phi;
    }

    v1 + v2 + v3
}

/// Calculates the annual aberration in right ascension and declination,
/// returned as `(d_ra, d_dec)` in radians.
pub fn annual_aberration(tdb: &JulianDate, equ: &Equatorial) -> (f64, f64) {
    let v = earth_velocity(tdb);

    let (sra, cra) = equ.right_ascension.sin_cos();
    let (sdec, cdec) = equ.declination.sin_cos();

    let d_ra = (v.y * cra - v.x * sra) / (C_LIGHT_SERIES * cdec);
    let d_dec = (v.z * cdec - (v.x * cra + v.y * sra) * sdec) / C_LIGHT_SERIES;

    (d_ra, d_dec)
}
