//! Frame assembly across the analytical theories
//!
//! Each theory reports positions in its own frame and units: VSOP87 in the
//! dynamical ecliptic in AU, the lunar series geocentric in kilometres,
//! PLUTO95 on the J2000 equator in AU. This module dispatches on the body
//! and normalizes everything to heliocentric equatorial J2000 coordinates
//! in AU, then layers light-time correction and the phase angle on top.

use crate::constants::{AU_KM, C_AUDAY};
use crate::coordinates::{rotate_rectangular, Cartesian3};
use crate::moonlib::Elp82b;
use crate::planetlib::{Body, PerturbationTheory, Vsop87};
use crate::plutolib::Pluto95;
use crate::time::JulianDate;
use crate::Result;

/// Calculates the heliocentric rectangular coordinates of `body` in AU,
/// referred to the equator and equinox of J2000, dispatching to whichever
/// analytical theory covers the body.
///
/// The Sun is the origin of the frame. The Moon's geocentric position is
/// re-based on the Earth's heliocentric one.
pub fn heliocentric_equatorial(body: Body, tdb: &JulianDate) -> Result<Cartesian3> {
    match body {
        Body::Sun => Ok(Cartesian3::ZERO),
        Body::Moon => {
            let earth = heliocentric_equatorial(Body::Earth, tdb)?;
            let theory = Elp82b;
            let geocentric = rotate_rectangular(
                theory.equatorial_rotation(),
                &theory.coordinates(Body::Moon, tdb)?,
            );
            Ok(earth + geocentric / AU_KM)
        }
        Body::Pluto => {
            let theory = Pluto95;
            let pos = theory.coordinates(Body::Pluto, tdb)?;
            Ok(rotate_rectangular(theory.equatorial_rotation(), &pos))
        }
        planet => {
            let theory = Vsop87;
            let pos = theory.coordinates(planet, tdb)?;
            Ok(rotate_rectangular(theory.equatorial_rotation(), &pos))
        }
    }
}

/// Antedates the position of `body` for light travel time: the theory is
/// re-evaluated at `t - distance/c` over three fixed iterations, which is
/// ample for solar system distances. Returns the body's heliocentric
/// equatorial J2000 position in AU as seen from the Earth at `tdb`.
///
/// When `correct_earth` is set the Earth is antedated along with the body,
/// which is the convention for planetary aberration.
pub fn light_time_correction(
    body: Body,
    tdb: &JulianDate,
    correct_earth: bool,
) -> Result<Cartesian3> {
    let earth_now = heliocentric_equatorial(Body::Earth, tdb)?;

    let mut body_pos = heliocentric_equatorial(body, tdb)?;
    let mut earth_pos = earth_now;

    for _ in 0..3 {
        let delay = (body_pos - earth_pos).magnitude() / C_AUDAY;
        let antedated = *tdb - delay;

        body_pos = heliocentric_equatorial(body, &antedated)?;
        if correct_earth {
            earth_pos = heliocentric_equatorial(Body::Earth, &antedated)?;
        }
    }

    Ok(body_pos)
}

/// Calculates the phase angle of a body: the angle at the body between the
/// directions to the Sun and to the Earth, in radians.
///
/// Both positions are heliocentric; a body between the Earth and the Sun
/// shows a phase angle near pi, one at opposition near zero.
pub fn phase_angle(body: &Cartesian3, earth: &Cartesian3) -> f64 {
    let to_sun = -*body;
    let to_earth = *earth - *body;

    to_sun.angular_distance(&to_earth)
}
