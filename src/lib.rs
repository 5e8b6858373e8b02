//! Orrery: a solar-system ephemeris engine
//!
//! This crate computes positions, motions and timing events of solar-system
//! bodies (Sun, Moon, planets, Pluto, minor planets and comets) to
//! arc-second-class accuracy: time-scale handling, Kepler propagation,
//! periodic-series planetary/lunar/Pluto theories, IAU2006/2000A
//! precession-nutation reduction, the coordinate transform chain, and the
//! almanac event finders (rise/set, eclipses, moon phases, seasons).

use thiserror::Error;

pub mod almanac;
pub mod catalogs;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod framelib;
pub mod fundargs;
pub mod kepler;
pub mod moonlib;
pub mod nutationlib;
pub mod planetlib;
pub mod plutolib;
pub mod precessionlib;
pub mod time;

// Re-export commonly used types
pub use coordinates::{Cartesian3, Ecliptic, Equatorial, Horizontal};
pub use kepler::OrbitalElements;
pub use planetlib::Body;
pub use time::JulianDate;

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid planet: {0}")]
    InvalidPlanet(String),

    #[error("Invalid eccentricity: {0}")]
    InvalidEccentricity(f64),

    #[error("Solver failed to converge after {iterations} iterations")]
    Convergence { iterations: u32 },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm failure: {0}")]
    Algorithm(String),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planetlib::PerturbationTheory;

    #[test]
    fn test_error_display() {
        let err = OrreryError::InvalidPlanet("Moon has no heliocentric series".to_string());
        assert!(err.to_string().contains("Moon"));

        let err = OrreryError::Convergence { iterations: 25 };
        assert!(err.to_string().contains("25"));
    }

    /// End-to-end smoke test: geocentric solar distance at J2000 is ~0.983 AU
    /// (Earth was near perihelion in early January).
    #[test]
    fn test_sun_distance_at_j2000() {
        let tdb = JulianDate::new(constants::J2000_EPOCH, 0.0);
        let earth = planetlib::Vsop87
            .coordinates(Body::Earth, &tdb)
            .expect("Earth ephemeris");
        let r = earth.magnitude();
        assert!((0.98..0.99).contains(&r), "unexpected distance {}", r);
    }
}
