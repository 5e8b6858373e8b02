//! Minor planet and comet catalogs
//!
//! Parsing for the Minor Planet Center's Orbit Database export formats,
//! plus the apparent-magnitude models that go with them: Bowell's (H, G)
//! system for minor planets and the standard (H, G) power law for comets.

use serde::{Deserialize, Serialize};

use crate::coordinates::Cartesian3;
use crate::framelib::phase_angle;
use crate::kepler::OrbitalElements;

pub mod mpc;

pub use mpc::{comet_record, minor_planet_record};

/// The classes of body catalogued in the MPC Orbit Database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyClass {
    MinorPlanet,
    LongPeriodComet,
    ShortPeriodComet,
    DefunctComet,
    UncertainComet,
}

/// One catalogued minor body: identity, photometric parameters, osculating
/// elements and the heliocentric position computed from them. Positions
/// are referred to the equinox and ecliptic of J2000, in AU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinorBodyRecord {
    /// Permanent number or unpacked provisional designation.
    pub id: String,
    /// The body's name, when the catalog line carries one.
    pub name: Option<String>,
    pub class: BodyClass,
    /// Mean absolute visual magnitude, H.
    pub absolute_magnitude: f64,
    /// Magnitude slope parameter, G.
    pub slope_parameter: f64,
    pub elements: OrbitalElements,
    pub position: Cartesian3,
}

/// Calculates the apparent magnitude of a minor planet from Bowell's
/// two-parameter phase function (Marsden, IAU Symposium 156).
///
/// `body` and `earth` are heliocentric positions in AU, in any common
/// frame. `abs_mag` and `slope` are the H and G parameters from the
/// catalog.
pub fn minor_planet_magnitude(
    body: &Cartesian3,
    earth: &Cartesian3,
    abs_mag: f64,
    slope: f64,
) -> f64 {
    let sun_dist = body.magnitude();
    let earth_dist = (*body - *earth).magnitude();
    let half_pa = phase_angle(body, earth) / 2.0;

    let phi1 = (-3.33 * half_pa.tan().powf(0.63)).exp();
    let phi2 = (-1.87 * half_pa.tan().powf(1.22)).exp();

    abs_mag + 5.0 * (sun_dist * earth_dist).log10()
        - 2.5 * (phi1 + (phi2 - phi1) * slope).log10()
}

/// Calculates the apparent magnitude of a comet from its total magnitude
/// H and activity slope G.
pub fn comet_magnitude(body: &Cartesian3, earth: &Cartesian3, abs_mag: f64, slope: f64) -> f64 {
    let sun_dist = body.magnitude();
    let earth_dist = (*body - *earth).magnitude();

    abs_mag + 5.0 * earth_dist.log10() + 2.5 * slope * sun_dist.log10()
}
