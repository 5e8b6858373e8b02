//! Trigonometric series for the Ron-Vondrak aberration theory.
//!
//! Four groups of terms: the main elliptic terms of the Earth-Moon
//! barycenter's heliocentric motion, its planetary harmonics, the Sun's
//! motion about the solar system barycenter, and the Earth's motion about
//! the EMB. Velocity coefficients are in units of 1e-8 AU/day.

/// Elliptic terms in multiples of the Earth's mean longitude, with
/// time-dependent coefficients.
pub(super) struct EmbMainTerm {
    pub l_ea: i8,
    pub x_sin: f64,
    pub x_sin_t: f64,
    pub x_cos: f64,
    pub x_cos_t: f64,
    pub x_cos_t2: f64,
    pub y_sin: f64,
    pub y_sin_t: f64,
    pub y_sin_t2: f64,
    pub y_cos: f64,
    pub y_cos_t: f64,
    pub z_sin: f64,
    pub z_sin_t: f64,
    pub z_sin_t2: f64,
    pub z_cos: f64,
    pub z_cos_t: f64,
}

/// Harmonics in the mean longitudes of Mercury through Saturn.
pub(super) struct PlanetaryTerm {
    pub me: i8,
    pub ve: i8,
    pub ea: i8,
    pub ma: i8,
    pub ju: i8,
    pub sa: i8,
    pub x_sin: f64,
    pub x_cos: f64,
    pub y_sin: f64,
    pub y_cos: f64,
    pub z_sin: f64,
    pub z_cos: f64,
}

/// Harmonics in the mean longitudes of Venus through Neptune for the Sun's
/// barycentric motion.
pub(super) struct PlanetaryTerm2 {
    pub ve: i8,
    pub ea: i8,
    pub ju: i8,
    pub sa: i8,
    pub ur: i8,
    pub ne: i8,
    pub x_sin: f64,
    pub x_cos: f64,
    pub y_sin: f64,
    pub y_cos: f64,
    pub z_sin: f64,
    pub z_cos: f64,
}

/// Harmonics in the lunar arguments for the Earth's motion about the EMB.
pub(super) struct LunarTerm {
    pub w: i8,
    pub d: i8,
    pub lp: i8,
    pub l: i8,
    pub f: i8,
    pub x_sin: f64,
    pub y_cos: f64,
    pub z_cos: f64,
}

#[rustfmt::skip]
pub(super) static EMB_MAIN: [EmbMainTerm; 3] = [
    EmbMainTerm { l_ea: 1, x_sin: -1719919.0, x_sin_t: -2.0, x_cos: -25.0, x_cos_t: 0.0, x_cos_t2: 0.0, y_sin: 25.0, y_sin_t: -13.0, y_sin_t2: -1.0, y_cos: 1578094.0, y_cos_t: 156.0, z_sin: 10.0, z_sin_t: 32.0, z_sin_t2: 1.0, z_cos: 684187.0, z_cos_t: -358.0 },
    EmbMainTerm { l_ea: 2, x_sin: 6434.0, x_sin_t: 141.0, x_cos: 28007.0, x_cos_t: -107.0, x_cos_t2: -1.0, y_sin: 25697.0, y_sin_t: -95.0, y_sin_t2: -1.0, y_cos: -5904.0, y_cos_t: -130.0, z_sin: 11141.0, z_sin_t: -48.0, z_sin_t2: 0.0, z_cos: -2559.0, z_cos_t: -55.0 },
    EmbMainTerm { l_ea: 3, x_sin: 486.0, x_sin_t: -5.0, x_cos: -236.0, x_cos_t: -4.0, x_cos_t2: 0.0, y_sin: -216.0, y_sin_t: -4.0, y_sin_t2: 0.0, y_cos: -446.0, y_cos_t: 5.0, z_sin: -94.0, z_sin_t: -2.0, z_sin_t2: 0.0, z_cos: -193.0, z_cos_t: 2.0 },
];

#[rustfmt::skip]
pub(super) static EMB_HARMONIC: [PlanetaryTerm; 77] = [
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: -1, sa: 0, x_sin: 31.0, x_cos: 1.0, y_sin: 1.0, y_cos: -28.0, z_sin: 0.0, z_cos: -12.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: -8, ju: 3, sa: 0, x_sin: 8.0, x_cos: -28.0, y_sin: 25.0, y_cos: 8.0, z_sin: 11.0, z_cos: 3.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 5, ma: -8, ju: 3, sa: 0, x_sin: 8.0, x_cos: -28.0, y_sin: -25.0, y_cos: -8.0, z_sin: -11.0, z_cos: -3.0 },
    PlanetaryTerm { me: 0, ve: 1, ea: 0, ma: 0, ju: 0, sa: 0, x_sin: -25.0, x_cos: 0.0, y_sin: 0.0, y_cos: 23.0, z_sin: 0.0, z_cos: 10.0 },
    PlanetaryTerm { me: 0, ve: 2, ea: -1, ma: 0, ju: 0, sa: 0, x_sin: 21.0, x_cos: 0.0, y_sin: 0.0, y_cos: -19.0, z_sin: 0.0, z_cos: -8.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: -2, sa: 0, x_sin: 16.0, x_cos: 0.0, y_sin: 0.0, y_cos: 15.0, z_sin: 1.0, z_cos: 7.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: 1, sa: 0, x_sin: 11.0, x_cos: -1.0, y_sin: -1.0, y_cos: -10.0, z_sin: -1.0, z_cos: -5.0 },
    PlanetaryTerm { me: 0, ve: 2, ea: -2, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -11.0, y_sin: -10.0, y_cos: 0.0, z_sin: -4.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: -1, sa: 0, x_sin: -11.0, x_cos: -2.0, y_sin: -2.0, y_cos: 9.0, z_sin: -1.0, z_cos: 4.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 4, ma: 0, ju: 0, sa: 0, x_sin: -7.0, x_cos: -8.0, y_sin: -8.0, y_cos: 6.0, z_sin: -3.0, z_cos: 3.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: 0, ju: -2, sa: 0, x_sin: -10.0, x_cos: 0.0, y_sin: 0.0, y_cos: 9.0, z_sin: 0.0, z_cos: 4.0 },
    PlanetaryTerm { me: 0, ve: 1, ea: -2, ma: 0, ju: 0, sa: 0, x_sin: -9.0, x_cos: 0.0, y_sin: 0.0, y_cos: -9.0, z_sin: 0.0, z_cos: -4.0 },
    PlanetaryTerm { me: 0, ve: 2, ea: -3, ma: 0, ju: 0, sa: 0, x_sin: -9.0, x_cos: 0.0, y_sin: 0.0, y_cos: -8.0, z_sin: 0.0, z_cos: -4.0 },
    PlanetaryTerm { me: 0, ve: 2, ea: -3, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -9.0, y_sin: 8.0, y_cos: 0.0, z_sin: 3.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: -2, ju: 0, sa: 0, x_sin: 8.0, x_cos: 0.0, y_sin: 0.0, y_cos: -8.0, z_sin: 0.0, z_cos: -3.0 },
    PlanetaryTerm { me: 0, ve: 8, ea: -12, ma: 0, ju: 0, sa: 0, x_sin: -4.0, x_cos: -7.0, y_sin: -6.0, y_cos: 4.0, z_sin: -3.0, z_cos: 2.0 },
    PlanetaryTerm { me: 0, ve: 8, ea: -14, ma: 0, ju: 0, sa: 0, x_sin: -4.0, x_cos: -7.0, y_sin: 6.0, y_cos: -4.0, z_sin: 3.0, z_cos: -2.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 0, ma: 2, ju: 0, sa: 0, x_sin: -6.0, x_cos: -5.0, y_sin: -4.0, y_cos: 5.0, z_sin: -2.0, z_cos: 2.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -4, ma: 0, ju: 0, sa: 0, x_sin: -1.0, x_cos: -1.0, y_sin: -2.0, y_cos: -7.0, z_sin: 1.0, z_cos: -4.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: -2, sa: 0, x_sin: 4.0, x_cos: -6.0, y_sin: -5.0, y_cos: -4.0, z_sin: -2.0, z_cos: -2.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -3, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -7.0, y_sin: -6.0, y_cos: 0.0, z_sin: -3.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: -2, ju: 0, sa: 0, x_sin: 5.0, x_cos: -5.0, y_sin: -4.0, y_cos: -5.0, z_sin: -2.0, z_cos: -2.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -6, ma: 0, ju: 0, sa: 0, x_sin: 4.0, x_cos: -1.0, y_sin: 1.0, y_cos: 4.0, z_sin: 0.0, z_cos: 2.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 0, ma: 0, ju: 1, sa: 0, x_sin: -4.0, x_cos: 0.0, y_sin: 0.0, y_cos: 3.0, z_sin: 0.0, z_cos: 1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 9, ma: -16, ju: 4, sa: 5, x_sin: -1.0, x_cos: -3.0, y_sin: -3.0, y_cos: 1.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 7, ma: -16, ju: 4, sa: 5, x_sin: -1.0, x_cos: -3.0, y_sin: 3.0, y_cos: -1.0, z_sin: 1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: -3, sa: 0, x_sin: 3.0, x_cos: 1.0, y_sin: 0.0, y_cos: 3.0, z_sin: 0.0, z_cos: 1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: -3, sa: 0, x_sin: 3.0, x_cos: -1.0, y_sin: -1.0, y_cos: 1.0, z_sin: 0.0, z_cos: 1.0 },
    PlanetaryTerm { me: 0, ve: 4, ea: -5, ma: 0, ju: 0, sa: 0, x_sin: -2.0, x_cos: 0.0, y_sin: 0.0, y_cos: -3.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: -4, ju: 0, sa: 0, x_sin: 1.0, x_cos: -2.0, y_sin: 2.0, y_cos: 1.0, z_sin: 1.0, z_cos: 1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: 0, ju: -3, sa: 0, x_sin: -2.0, x_cos: -1.0, y_sin: 0.0, y_cos: 2.0, z_sin: 0.0, z_cos: 1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: -4, ju: 0, sa: 0, x_sin: 1.0, x_cos: -2.0, y_sin: -2.0, y_cos: -1.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -2, ma: 0, ju: 0, sa: 0, x_sin: 2.0, x_cos: 0.0, y_sin: 0.0, y_cos: -2.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 4, ma: -4, ju: 0, sa: 0, x_sin: 2.0, x_cos: -1.0, y_sin: -1.0, y_cos: -2.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: 0, sa: -1, x_sin: 2.0, x_cos: 0.0, y_sin: 0.0, y_cos: -2.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: -3, ju: 0, sa: 0, x_sin: 2.0, x_cos: -1.0, y_sin: -1.0, y_cos: -1.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: 0, ju: -1, sa: 0, x_sin: 0.0, x_cos: -2.0, y_sin: -1.0, y_cos: 0.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: 0, sa: 1, x_sin: 0.0, x_cos: -1.0, y_sin: -1.0, y_cos: 0.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 0, ma: 0, ju: 2, sa: 0, x_sin: -1.0, x_cos: -1.0, y_sin: -1.0, y_cos: 1.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: -1, ju: 0, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: 0, sa: -1, x_sin: 0.0, x_cos: -1.0, y_sin: -1.0, y_cos: 0.0, z_sin: -1.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 5, ea: -6, ma: 0, ju: 0, sa: 0, x_sin: -2.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: -3, ju: 0, sa: 0, x_sin: 1.0, x_cos: -1.0, y_sin: 1.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -6, ma: 4, ju: 0, sa: 0, x_sin: -1.0, x_cos: 1.0, y_sin: 1.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -8, ma: 4, ju: 0, sa: 0, x_sin: -1.0, x_cos: 1.0, y_sin: -1.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 4, ma: -5, ju: 0, sa: 0, x_sin: 1.0, x_cos: -1.0, y_sin: -1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 1, ea: 1, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 1.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 3, ea: -5, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -1.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 6, ea: -7, ma: 0, ju: 0, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 10, ea: -9, ma: 0, ju: 0, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: -8, ju: 3, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 6, ma: -8, ju: 3, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: -2, ju: 0, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 9, ma: -15, ju: 0, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: -2, sa: 5, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: 2, sa: -5, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 1, ma: 0, ju: 0, sa: -2, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 0, ma: 1, ju: 0, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 7, ma: -15, ju: 0, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 2, ea: 0, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -1.0, y_sin: -1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: 2, sa: -5, x_sin: 0.0, x_cos: 1.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 2, ve: 0, ea: -2, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 1.0, y_sin: -1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 9, ma: -19, ju: 0, sa: 3, x_sin: 0.0, x_cos: 1.0, y_sin: -1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 11, ma: -19, ju: 0, sa: 3, x_sin: 0.0, x_cos: 1.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: -5, ju: 0, sa: 0, x_sin: 0.0, x_cos: -1.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 5, ea: -9, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 1.0, y_sin: -1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 11, ea: -10, ma: 0, ju: 0, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 4, ea: -4, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 1.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 2, ma: 0, ju: -4, sa: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 5, ma: -6, ju: 0, sa: 0, x_sin: 0.0, x_cos: -1.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 5, ea: -5, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 1.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 4, ma: 0, ju: -3, sa: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 4, ea: -6, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: -1.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 5, ea: -7, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 0.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 4, ma: 0, ju: -2, sa: 0, x_sin: 0.0, x_cos: 0.0, y_sin: 1.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 0, ea: 3, ma: 0, ju: -4, sa: 0, x_sin: 0.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm { me: 0, ve: 7, ea: -8, ma: 0, ju: 0, sa: 0, x_sin: 0.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
];

#[rustfmt::skip]
pub(super) static SUN_BARYCENTER: [PlanetaryTerm2; 17] = [
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 1, sa: 0, ur: 0, ne: 0, x_sin: 719.0, x_cos: 0.0, y_sin: 6.0, y_cos: -660.0, z_sin: -15.0, z_cos: -283.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 1, ur: 0, ne: 0, x_sin: 159.0, x_cos: 0.0, y_sin: 2.0, y_cos: -147.0, z_sin: -6.0, z_cos: -61.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 2, sa: 0, ur: 0, ne: 0, x_sin: 34.0, x_cos: -9.0, y_sin: -8.0, y_cos: -31.0, z_sin: -4.0, z_cos: -13.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 0, ur: 1, ne: 0, x_sin: 17.0, x_cos: 0.0, y_sin: 0.0, y_cos: -16.0, z_sin: 0.0, z_cos: -7.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 0, ur: 0, ne: 1, x_sin: 16.0, x_cos: 0.0, y_sin: 1.0, y_cos: -15.0, z_sin: -3.0, z_cos: -6.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 2, ur: 0, ne: 0, x_sin: 0.0, x_cos: -9.0, y_sin: -8.0, y_cos: 0.0, z_sin: -3.0, z_cos: 1.0 },
    PlanetaryTerm2 { ve: 1, ea: 0, ju: 0, sa: 0, ur: 0, ne: 0, x_sin: 6.0, x_cos: 0.0, y_sin: 0.0, y_cos: -6.0, z_sin: 0.0, z_cos: -2.0 },
    PlanetaryTerm2 { ve: 0, ea: 1, ju: 0, sa: 0, ur: 0, ne: 0, x_sin: 5.0, x_cos: 0.0, y_sin: 0.0, y_cos: -5.0, z_sin: 0.0, z_cos: -2.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 3, sa: 0, ur: 0, ne: 0, x_sin: 2.0, x_cos: -1.0, y_sin: -1.0, y_cos: -2.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 1, sa: -5, ur: 0, ne: 0, x_sin: -2.0, x_cos: 0.0, y_sin: 0.0, y_cos: -2.0, z_sin: 0.0, z_cos: -1.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 3, sa: -5, ur: 0, ne: 0, x_sin: -2.0, x_cos: 0.0, y_sin: 0.0, y_cos: 2.0, z_sin: 0.0, z_cos: 1.0 },
    PlanetaryTerm2 { ve: 1, ea: 0, ju: 0, sa: 0, ur: 0, ne: -2, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 3, ur: 0, ne: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 2, sa: -6, ur: 0, ne: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 2, sa: -4, ur: 0, ne: 0, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: -1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 0, sa: 0, ur: 2, ne: 0, x_sin: -1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 1.0, z_sin: 0.0, z_cos: 0.0 },
    PlanetaryTerm2 { ve: 0, ea: 0, ju: 1, sa: 0, ur: 0, ne: -2, x_sin: 1.0, x_cos: 0.0, y_sin: 0.0, y_cos: 0.0, z_sin: 0.0, z_cos: 0.0 },
];

#[rustfmt::skip]
pub(super) static EARTH_EMB: [LunarTerm; 17] = [
    LunarTerm { w: 1, d: 0, lp: 0, l: 0, f: 0, x_sin: 715.0, y_cos: -656.0, z_cos: -285.0 },
    LunarTerm { w: 0, d: 0, lp: 0, l: 0, f: 1, x_sin: 0.0, y_cos: 26.0, z_cos: -59.0 },
    LunarTerm { w: 1, d: 0, lp: 0, l: 1, f: 0, x_sin: 39.0, y_cos: -36.0, z_cos: -16.0 },
    LunarTerm { w: 1, d: 2, lp: 0, l: -1, f: 0, x_sin: 8.0, y_cos: -7.0, z_cos: -3.0 },
    LunarTerm { w: 1, d: -2, lp: 0, l: 0, f: 0, x_sin: 5.0, y_cos: -5.0, z_cos: -2.0 },
    LunarTerm { w: 1, d: 2, lp: 0, l: 0, f: 0, x_sin: 4.0, y_cos: -4.0, z_cos: -2.0 },
    LunarTerm { w: 0, d: 0, lp: 0, l: 1, f: 1, x_sin: 0.0, y_cos: 1.0, z_cos: -3.0 },
    LunarTerm { w: 1, d: -2, lp: 0, l: 1, f: 0, x_sin: -2.0, y_cos: 2.0, z_cos: 1.0 },
    LunarTerm { w: 1, d: 0, lp: 0, l: 2, f: 0, x_sin: 2.0, y_cos: -2.0, z_cos: -1.0 },
    LunarTerm { w: 0, d: 2, lp: 0, l: 0, f: -1, x_sin: 0.0, y_cos: 1.0, z_cos: -2.0 },
    LunarTerm { w: 1, d: 0, lp: 0, l: 0, f: -2, x_sin: -1.0, y_cos: 1.0, z_cos: 1.0 },
    LunarTerm { w: 1, d: 0, lp: 1, l: 0, f: 0, x_sin: -1.0, y_cos: 1.0, z_cos: 0.0 },
    LunarTerm { w: 1, d: 0, lp: -1, l: 0, f: 0, x_sin: 1.0, y_cos: -1.0, z_cos: 0.0 },
    LunarTerm { w: 1, d: 4, lp: 0, l: -2, f: 0, x_sin: 1.0, y_cos: -1.0, z_cos: 0.0 },
    LunarTerm { w: 1, d: -2, lp: 0, l: 2, f: 0, x_sin: -1.0, y_cos: 1.0, z_cos: 0.0 },
    LunarTerm { w: 1, d: 2, lp: 0, l: 1, f: 0, x_sin: 1.0, y_cos: 0.0, z_cos: 0.0 },
    LunarTerm { w: 0, d: 2, lp: 0, l: -1, f: 1, x_sin: 0.0, y_cos: 0.0, z_cos: -1.0 },
];
