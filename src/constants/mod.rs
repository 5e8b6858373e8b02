//! Constants shared across the ephemeris engine

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers
pub const AU_KM: f64 = 149_597_870.691;
/// Astronomical Unit in meters
pub const AU_M: f64 = AU_KM * 1000.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000_EPOCH: f64 = 2_451_545.0;
/// Offset between Julian date and modified Julian date
pub const MJD_EPOCH: f64 = 2_400_000.5;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / PI;
/// Arcseconds to radians conversion factor
pub const ACS_TO_RAD: f64 = 4.848_136_811_095_359_9e-6;
/// Milliarcseconds to radians conversion factor
pub const MAS_TO_RAD: f64 = 4.848_136_811_095_359_9e-9;
/// Microarcseconds to radians conversion factor
pub const UAS_TO_RAD: f64 = 4.848_136_811_095_359_9e-12;
/// Tau (2*PI) for full circle
pub const TWO_PI: f64 = 2.0 * PI;

// Physics
/// Speed of light in m/s
pub const C: f64 = 299_792_458.0;
/// Speed of light in AU/day
pub const C_AUDAY: f64 = C * DAY_S / AU_M;
/// Gaussian gravitational constant (AU^1.5/day for unit solar mass)
pub const GAUSS_GRAV_CONSTANT: f64 = 0.017_202_098_95;

// Earth figure
/// Earth's equatorial radius in meters
pub const EARTH_EQU_RADIUS: f64 = 6_378_136.6;
/// Earth's flattening (IERS-class value)
pub const EARTH_FLATTENING: f64 = 1.0 / 298.25642;
/// Earth's polar radius in meters
pub const EARTH_POL_RADIUS: f64 = EARTH_EQU_RADIUS * (1.0 - EARTH_FLATTENING);

/// Reduces an angle to the range `[0, limit)`.
pub fn reduce_angle(angle: f64, limit: f64) -> f64 {
    let mut a = angle % limit;
    if a < 0.0 {
        a += limit;
    }
    a
}
