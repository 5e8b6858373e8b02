//! Fundamental planetary and lunisolar arguments
//!
//! These are the mean angles that drive the planetary, lunar, precession and
//! nutation models (USNO Circular 179). Each is a low-degree polynomial in
//! Julian centuries of TDB since J2000.0; TT may be substituted for all but
//! the most exacting applications.

use crate::constants::{reduce_angle, ACS_TO_RAD, TWO_PI};

/// The fundamental arguments known to the engine.
///
/// The enum is exhaustive, so an unsupported argument is a compile-time
/// impossibility rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundamentalArgument {
    /// Heliocentric ecliptic longitude of Mercury
    LongitudeMercury,
    /// Heliocentric ecliptic longitude of Venus
    LongitudeVenus,
    /// Heliocentric ecliptic longitude of Earth
    LongitudeEarth,
    /// Heliocentric ecliptic longitude of Mars
    LongitudeMars,
    /// Heliocentric ecliptic longitude of Jupiter
    LongitudeJupiter,
    /// Heliocentric ecliptic longitude of Saturn
    LongitudeSaturn,
    /// Heliocentric ecliptic longitude of Uranus
    LongitudeUranus,
    /// Heliocentric ecliptic longitude of Neptune
    LongitudeNeptune,
    /// General precession in longitude
    Precession,
    /// Mean anomaly of the Moon (l)
    AnomalyMoon,
    /// Mean anomaly of the Sun (l')
    AnomalySun,
    /// Mean argument of latitude of the Moon (F)
    LatitudeMoon,
    /// Mean elongation of the Moon from the Sun (D)
    ElongationMoon,
    /// Mean longitude of the Moon's ascending node (Omega)
    LongitudeNode,
    /// Mean longitude of the Moon (W)
    LongitudeMoon,
}

/// Evaluates a fundamental argument at `t` Julian centuries of TDB since
/// J2000.0, returning radians in `[0, 2*PI)`.
pub fn fundamental_argument(arg: FundamentalArgument, t: f64) -> f64 {
    use FundamentalArgument::*;

    let val = match arg {
        LongitudeMercury => 4.402608842 + 2608.7903141574 * t,
        LongitudeVenus => 3.176146697 + 1021.3285546211 * t,
        LongitudeEarth => 1.753470314 + 628.3075849991 * t,
        LongitudeMars => 6.203480913 + 334.0612426700 * t,
        LongitudeJupiter => 0.599546497 + 52.9690962641 * t,
        LongitudeSaturn => 0.874016757 + 21.3299104960 * t,
        LongitudeUranus => 5.481293872 + 7.4781598567 * t,
        LongitudeNeptune => 5.311886287 + 3.8133035638 * t,
        Precession => (0.024381750 + 0.00000538691 * t) * t,
        AnomalyMoon => {
            (485868.249036
                + (1717915923.2178 + (31.8792 + (0.051635 - 0.00024470 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
        AnomalySun => {
            (1287104.79305
                + (129596581.0481 + (-0.5532 + (0.000136 - 0.00001149 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
        LatitudeMoon => {
            (335779.526232
                + (1739527262.8478 + (-12.7512 + (-0.001037 + 0.00000417 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
        ElongationMoon => {
            (1072260.70369
                + (1602961601.2090 + (-6.3706 + (0.006593 - 0.00003169 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
        LongitudeNode => {
            (450160.398036
                + (-6962890.5431 + (7.4722 + (0.007702 - 0.00005939 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
        LongitudeMoon => {
            (785939.95571
                + (1732559343.73604 + (-5.8883 + (0.006604 - 0.00003169 * t) * t) * t) * t)
                * ACS_TO_RAD
        }
    };

    reduce_angle(val, TWO_PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACS_TO_RAD, DEG_TO_RAD, TWO_PI};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_values_at_j2000() {
        // At t = 0 the polynomials collapse to their constant terms.
        assert_abs_diff_eq!(
            fundamental_argument(FundamentalArgument::LongitudeEarth, 0.0),
            1.753470314,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            fundamental_argument(FundamentalArgument::Precession, 0.0),
            0.0,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            fundamental_argument(FundamentalArgument::AnomalyMoon, 0.0),
            485868.249036 * ACS_TO_RAD,
            epsilon = 1e-12
        );
    }

    #[rstest]
    #[case(FundamentalArgument::LongitudeMercury)]
    #[case(FundamentalArgument::LongitudeNeptune)]
    #[case(FundamentalArgument::AnomalySun)]
    #[case(FundamentalArgument::LatitudeMoon)]
    #[case(FundamentalArgument::ElongationMoon)]
    #[case(FundamentalArgument::LongitudeNode)]
    #[case(FundamentalArgument::LongitudeMoon)]
    fn test_reduced_range(#[case] arg: FundamentalArgument) {
        for i in -20..=20 {
            let v = fundamental_argument(arg, i as f64 * 0.5);
            assert!((0.0..TWO_PI).contains(&v), "{:?} out of range: {}", arg, v);
        }
    }

    #[test]
    fn test_earth_longitude_annual_rate() {
        // Earth's mean longitude advances ~360 degrees per Julian year.
        let t = 0.01; // one year in centuries
        let l0 = fundamental_argument(FundamentalArgument::LongitudeEarth, 0.0);
        let l1 = fundamental_argument(FundamentalArgument::LongitudeEarth, t);
        let advance = (l1 - l0).rem_euclid(TWO_PI);
        // 628.30758 rad/century * 0.01 = 6.2830758 rad, within a degree of 2*PI
        assert!((advance - TWO_PI).abs() < DEG_TO_RAD || advance < DEG_TO_RAD);
    }

    #[test]
    fn test_node_regresses() {
        // The lunar node moves backwards; over a decade it loses longitude.
        let l0 = fundamental_argument(FundamentalArgument::LongitudeNode, 0.0);
        let l1 = fundamental_argument(FundamentalArgument::LongitudeNode, 0.01);
        let motion = (l1 - l0 + TWO_PI / 2.0).rem_euclid(TWO_PI) - TWO_PI / 2.0;
        assert!(motion < 0.0);
    }
}
