//! IAU 2006 precession
//!
//! The full four-angle formulation from USNO Circular 179: the equatorial
//! precession angles psi and omega, the planetary precession chi, and the
//! J2000 obliquity, composed into a single rotation matrix.

use nalgebra::Matrix3;

use crate::constants::ACS_TO_RAD;
use crate::time::JulianDate;

/// Obliquity of the ecliptic at J2000 in radians (84381.406 arcseconds).
pub const OBLIQUITY_J2000: f64 = 84_381.406 * ACS_TO_RAD;

/// Direction of a precession rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecessionDirection {
    /// From the J2000 equator and equinox to the mean equator of date.
    FromJ2000,
    /// From the mean equator of date back to J2000.
    ToJ2000,
}

/// Calculates the IAU 2006 precession matrix between J2000 and the epoch
/// `tdb`, in the direction given. The matrix rotates rectangular equatorial
/// coordinates and can be fed to the rotation helpers in
/// [`crate::coordinates`].
pub fn precession_matrix(tdb: &JulianDate, dir: PrecessionDirection) -> Matrix3<f64> {
    let t = tdb.julian_centuries();

    let psi = (5038.481507
        + (-1.0790069 + (-0.00114045 + (0.000132851 - 0.0000000951 * t) * t) * t) * t)
        * t
        * ACS_TO_RAD;

    let omega = OBLIQUITY_J2000
        + (-0.025754
            + (0.0512623 + (-0.00772503 + (-0.000000467 + 0.0000003337 * t) * t) * t) * t)
            * t
            * ACS_TO_RAD;

    let chi = (10.556403
        + (-2.3814292 + (-0.00121197 + (0.000170663 - 0.0000000560 * t) * t) * t) * t)
        * t
        * ACS_TO_RAD;

    let (s1, c1) = OBLIQUITY_J2000.sin_cos();
    let (s2, c2) = psi.sin_cos();
    let s2 = -s2;
    let (s3, c3) = omega.sin_cos();
    let s3 = -s3;
    let (s4, c4) = chi.sin_cos();

    let mat = Matrix3::new(
        c4 * c2 - s2 * s4 * c3,
        c4 * s2 * c1 + s4 * c3 * c2 * c1 - s1 * s4 * s3,
        c4 * s2 * s1 + s4 * c3 * c2 * s1 + c1 * s4 * s3,
        -(s4 * c2) - s2 * c4 * c3,
        -(s4 * s2 * c1) + c4 * c3 * c2 * c1 - s1 * c4 * s3,
        -(s4 * s2 * s1) + c4 * c3 * c2 * s1 + c1 * c4 * s3,
        s2 * s3,
        -(s3 * c2 * c1) - s1 * c3,
        -(s3 * c2 * s1) + c3 * c1,
    );

    match dir {
        PrecessionDirection::FromJ2000 => mat,
        PrecessionDirection::ToJ2000 => mat.transpose(),
    }
}
