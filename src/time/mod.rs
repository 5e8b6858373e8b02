//! Time scales and Julian date handling
//!
//! Epochs are carried as a two-part Julian date so that the large day number
//! and the small day fraction never fight for the same mantissa bits. The
//! time scale (UT1, TT or TDB) is tagged by the calling context; the engine
//! only ever converts between scales through [`delta_t`].
//!
//! Calendar conversions use the proleptic Gregorian calendar with
//! astronomical year numbering and take no account of the calendar reform.
//! Dates before January 1, 4800 BC are not supported.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_EPOCH, MJD_EPOCH};
use crate::{OrreryError, Result};

/// An instant expressed as a two-part Julian date.
///
/// The value of the instant is `date1 + date2`. By convention `date1` holds
/// the large part (often [`MJD_EPOCH`] or a whole Julian day number) and
/// `date2` the remainder, but any split that sums to the same instant is
/// equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    /// Major part of the Julian date
    pub date1: f64,
    /// Minor part of the Julian date
    pub date2: f64,
}

impl JulianDate {
    /// Creates a Julian date from its two parts.
    pub fn new(date1: f64, date2: f64) -> Self {
        Self { date1, date2 }
    }

    /// Creates a Julian date from a date in the proleptic Gregorian calendar.
    ///
    /// `year` uses astronomical reckoning (1 BC = 0, 2 BC = -1, ...) and must
    /// be on or after 4800 BC. `day` may carry a fraction; midnight starts
    /// the day.
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Result<Self> {
        let whole_day = day.floor() as i64;
        let month_days: i64 = match month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(year) => 29,
            2 => 28,
            _ => 31,
        };
        if year < -4799 || !(1..=12).contains(&month) || !(1..=month_days).contains(&whole_day) {
            return Err(OrreryError::InvalidDate(format!(
                "{}-{}-{} is not a supported proleptic Gregorian date",
                year, month, day
            )));
        }

        let y = year as i64;
        let m = month as i64;
        // Month pivot: January and February count as months 13/14 of the
        // previous year.
        let mm: i64 = if m >= 3 { 0 } else { -1 };

        let jdn = whole_day
            + (1461 * (y + 4800 + mm)) / 4
            + (367 * (m - 2 - mm * 12)) / 12
            - (3 * ((y + 4900 + mm) / 100)) / 4
            - 2_432_076;

        Ok(Self {
            date1: MJD_EPOCH,
            date2: jdn as f64 + day.fract(),
        })
    }

    /// Converts this Julian date to a proleptic Gregorian calendar date.
    ///
    /// Returns `(year, month, day, day_fraction)` with the day fraction in
    /// `[0, 1)` and zero meaning midnight.
    pub fn to_calendar(&self) -> Result<(i32, u32, u32, f64)> {
        let j = self.date1 + self.date2;
        if j < -32_044.5 {
            return Err(OrreryError::InvalidDate(format!(
                "JD {} is before 4800 BC",
                j
            )));
        }

        let jj = j + 32_044.5;
        let g = (jj / 146_097.0) as i64;
        let dg = (jj % 146_097.0) as i64;
        let c = ((dg / 36_524 + 1) * 3) / 4;
        let dc = dg - c * 36_524;
        let b = dc / 1461;
        let db = dc % 1461;
        let a = ((db / 365 + 1) * 3) / 4;
        let da = db - a * 365;
        let y = g * 400 + c * 100 + b * 4 + a;
        let m = (da * 5 + 308) / 153 - 2;
        let d = da - ((m + 4) * 153) / 5 + 122;

        let year = (y - 4800 + (m + 2) / 12) as i32;
        let month = ((m + 2) % 12 + 1) as u32;
        let day = (d + 1) as u32;
        let day_fraction = (j + 0.5).rem_euclid(1.0);

        Ok((year, month, day, day_fraction))
    }

    /// The full Julian date as a single (precision-losing) value.
    pub fn value(&self) -> f64 {
        self.date1 + self.date2
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        ((self.date1 - J2000_EPOCH) + self.date2) / DAYS_PER_CENTURY
    }

    /// Julian millennia elapsed since J2000.0.
    pub fn julian_millennia(&self) -> f64 {
        ((self.date1 - J2000_EPOCH) + self.date2) / DAYS_PER_MILLENNIUM
    }
}

/// Gregorian leap-year rule, valid for astronomical year numbering
/// (year 0 is a leap year).
fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    /// Offsets the instant by a number of days.
    fn add(self, days: f64) -> JulianDate {
        JulianDate::new(self.date1, self.date2 + days)
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> JulianDate {
        JulianDate::new(self.date1, self.date2 - days)
    }
}

impl Sub for JulianDate {
    type Output = f64;

    /// Difference between two instants, in days.
    fn sub(self, other: JulianDate) -> f64 {
        (self.date1 - other.date1) + (self.date2 - other.date2)
    }
}

/// Approximates Delta-T (TT - UT1) for years 2000 BC through 3000 AD.
///
/// Uses the NASA polynomial fits published alongside the five-millennium
/// eclipse canon. Returns the approximation in seconds together with a
/// correction term, also in seconds, that applies when the value is used
/// against that canon for years before 1955 or after 2005 (zero otherwise).
pub fn delta_t(year: i32, month: u32) -> Result<(f64, f64)> {
    if year < -1999 || year > 3000 || !(1..=12).contains(&month) {
        return Err(OrreryError::InvalidDate(format!(
            "Delta-T is only modeled for 2000 BC..3000 AD, got {}-{}",
            year, month
        )));
    }

    let y = year as f64 + (month as f64 - 0.5) / 12.0;

    let dt = if year < -500 {
        let u = (year as f64 - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if year < 500 {
        let u = y / 100.0;
        10583.6
            + (-1014.41
                + (33.78311
                    + (-5.952053
                        + (-0.1798452 + (0.022174192 + 0.0090316521 * u) * u) * u)
                        * u)
                    * u)
                * u
    } else if year < 1600 {
        let u = (y - 1000.0) / 100.0;
        1574.2
            + (-556.01
                + (71.23472
                    + (0.319781
                        + (-0.8503463 + (-0.005050998 + 0.0083572073 * u) * u) * u)
                        * u)
                    * u)
                * u
    } else if year < 1700 {
        let u = y - 1600.0;
        120.0 + (-0.9808 + (-0.01532 + u / 7129.0) * u) * u
    } else if year < 1800 {
        let u = y - 1700.0;
        8.83 + (0.1603 + (-0.0059285 + (0.00013336 - u / 1_174_000.0) * u) * u) * u
    } else if year < 1860 {
        let u = y - 1800.0;
        13.72
            + (-0.332447
                + (0.0068612
                    + (0.0041116
                        + (-0.00037436
                            + (0.0000121272 + (-0.0000001699 + 0.000000000875 * u) * u) * u)
                            * u)
                        * u)
                    * u)
                * u
    } else if year < 1900 {
        let u = y - 1860.0;
        7.62 + (0.5737 + (-0.251754 + (0.01680668 + (-0.0004473624 + u / 233_174.0) * u) * u) * u) * u
    } else if year < 1920 {
        let u = y - 1900.0;
        -2.79 + (1.494119 + (-0.0598939 + (0.0061966 - 0.000197 * u) * u) * u) * u
    } else if year < 1941 {
        let u = y - 1920.0;
        21.20 + (0.84493 + (-0.076100 + 0.0020936 * u) * u) * u
    } else if year < 1961 {
        let u = y - 1950.0;
        29.07 + (0.407 + (-1.0 / 233.0 + u / 2547.0) * u) * u
    } else if year < 1986 {
        let u = y - 1975.0;
        45.45 + (1.067 + (-1.0 / 260.0 - u / 718.0) * u) * u
    } else if year < 2005 {
        let u = y - 2000.0;
        63.86 + (0.3345 + (-0.060374 + (0.0017275 + (0.000651814 + 0.00002373599 * u) * u) * u) * u) * u
    } else if year < 2050 {
        let u = y - 2000.0;
        62.92 + (0.32217 + 0.005589 * u) * u
    } else if year < 2150 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (year as f64 - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    let correction = if !(1955..=2005).contains(&year) {
        -0.000012932 * (y - 1955.0) * (y - 1955.0)
    } else {
        0.0
    };

    Ok((dt, correction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(2000, 1, 1.5, 2_451_545.0)] // J2000.0
    #[case(1999, 1, 1.0, 2_451_179.5)]
    #[case(1987, 1, 27.0, 2_446_822.5)]
    #[case(1600, 1, 1.0, 2_305_447.5)]
    #[case(-1000, 7, 12.5, 1_356_010.0)] // proleptic Gregorian, not Julian-calendar reckoning
    fn test_known_julian_dates(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: f64,
        #[case] expected: f64,
    ) {
        let jd = JulianDate::from_calendar(year, month, day).unwrap();
        assert_relative_eq!(jd.value(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range_dates() {
        assert!(JulianDate::from_calendar(-4800, 1, 1.0).is_err());
        assert!(JulianDate::from_calendar(2000, 13, 1.0).is_err());
        assert!(JulianDate::from_calendar(2000, 0, 1.0).is_err());
        assert!(JulianDate::from_calendar(2000, 1, 0.5).is_err());
        assert!(JulianDate::from_calendar(-4799, 1, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_days_past_the_end_of_the_month() {
        // 2000-02-31 is not a date and must not alias to early March.
        assert!(JulianDate::from_calendar(2000, 2, 31.0).is_err());
        assert!(JulianDate::from_calendar(2000, 4, 31.0).is_err());
        assert!(JulianDate::from_calendar(2023, 2, 29.0).is_err());
        // Century years are leap only when divisible by 400.
        assert!(JulianDate::from_calendar(1900, 2, 29.0).is_err());
        assert!(JulianDate::from_calendar(2000, 2, 29.0).is_ok());
        // Year 0 (1 BC) is a leap year in astronomical numbering.
        assert!(JulianDate::from_calendar(0, 2, 29.0).is_ok());

        let jd = JulianDate::from_calendar(2000, 2, 29.5).unwrap();
        let (y, m, d, frac) = jd.to_calendar().unwrap();
        assert_eq!((y, m, d), (2000, 2, 29));
        assert_abs_diff_eq!(frac, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_calendar_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let year = rng.gen_range(-4799..=3000);
            let month = rng.gen_range(1..=12u32);
            let day = rng.gen_range(1..=28u32);

            let jd = JulianDate::from_calendar(year, month, day as f64).unwrap();
            let (y, m, d, frac) = jd.to_calendar().unwrap();
            assert_eq!((y, m, d), (year, month, day));
            assert_abs_diff_eq!(frac, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_day_fraction_survives_round_trip() {
        let jd = JulianDate::from_calendar(2024, 6, 15.75).unwrap();
        let (y, m, d, frac) = jd.to_calendar().unwrap();
        assert_eq!((y, m, d), (2024, 6, 15));
        assert_abs_diff_eq!(frac, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_julian_centuries_at_j2000() {
        let jd = JulianDate::new(J2000_EPOCH, 0.0);
        assert_abs_diff_eq!(jd.julian_centuries(), 0.0);
        let later = jd + DAYS_PER_CENTURY;
        assert_relative_eq!(later.julian_centuries(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(later.julian_millennia(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn test_date_arithmetic() {
        let a = JulianDate::new(2_451_545.0, 0.25);
        let b = a + 10.0;
        assert_relative_eq!(b - a, 10.0, max_relative = 1e-12);
        let c = b - 10.0;
        assert_relative_eq!(c - a, 0.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(2004, 62.0, 68.0)] // observed ~64.6s
    #[case(1900, -5.0, 0.0)] // observed ~-2.7s
    #[case(1650, 40.0, 60.0)]
    fn test_delta_t_in_plausible_range(#[case] year: i32, #[case] lo: f64, #[case] hi: f64) {
        let (dt, _) = delta_t(year, 6).unwrap();
        assert!(dt > lo && dt < hi, "delta_t({}) = {}", year, dt);
    }

    #[test]
    fn test_delta_t_correction_term() {
        let (_, corr) = delta_t(1980, 6).unwrap();
        assert_abs_diff_eq!(corr, 0.0);

        let (_, corr) = delta_t(1900, 6).unwrap();
        let y = 1900.0 + 5.5 / 12.0;
        assert_relative_eq!(corr, -0.000012932 * (y - 1955.0) * (y - 1955.0));
    }

    #[test]
    fn test_delta_t_domain() {
        assert!(delta_t(-2000, 6).is_err());
        assert!(delta_t(3001, 1).is_err());
        assert!(delta_t(-1999, 1).is_ok());
        assert!(delta_t(3000, 12).is_ok());
    }
}
