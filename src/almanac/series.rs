//! Series for the equation of the equinoxes.
//!
//! The complementary terms from the IERS Conventions (2003), in units of
//! microarcseconds. Multipliers apply to the Delaunay arguments, the mean
//! longitudes of Venus and the Earth, and the general precession.

pub(super) struct EquinoxTerm {
    pub si: f64,
    pub ci: f64,
    pub l: i8,
    pub lp: i8,
    pub f: i8,
    pub d: i8,
    pub om: i8,
    pub l_ve: i8,
    pub l_ea: i8,
    pub pre: i8,
}

#[rustfmt::skip]
pub(super) static EQUINOX: [EquinoxTerm; 33] = [
    EquinoxTerm { si: 2640.96, ci: -0.39, l: 0, lp: 0, f: 0, d: 0, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 63.52, ci: -0.02, l: 0, lp: 0, f: 0, d: 0, om: 2, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 11.75, ci: 0.01, l: 0, lp: 0, f: 2, d: -2, om: 3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 11.21, ci: 0.01, l: 0, lp: 0, f: 2, d: -2, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -4.55, ci: 0.00, l: 0, lp: 0, f: 2, d: -2, om: 2, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 2.02, ci: 0.00, l: 0, lp: 0, f: 2, d: 0, om: 3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 1.98, ci: 0.00, l: 0, lp: 0, f: 2, d: 0, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -1.72, ci: 0.00, l: 0, lp: 0, f: 0, d: 0, om: 3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -1.41, ci: -0.01, l: 0, lp: 1, f: 0, d: 0, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -1.26, ci: -0.01, l: 0, lp: 1, f: 0, d: 0, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.63, ci: 0.00, l: 1, lp: 0, f: 0, d: 0, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.63, ci: 0.00, l: 1, lp: 0, f: 0, d: 0, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.46, ci: 0.00, l: 0, lp: 1, f: 2, d: -2, om: 3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.45, ci: 0.00, l: 0, lp: 1, f: 2, d: -2, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.36, ci: 0.00, l: 0, lp: 0, f: 4, d: -4, om: 4, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.24, ci: -0.12, l: 0, lp: 0, f: 1, d: -1, om: 1, l_ve: -8, l_ea: 12, pre: 0 },
    EquinoxTerm { si: 0.32, ci: 0.00, l: 0, lp: 0, f: 2, d: 0, om: 0, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.28, ci: 0.00, l: 0, lp: 0, f: 2, d: 0, om: 2, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.27, ci: 0.00, l: 1, lp: 0, f: 2, d: 0, om: 3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.26, ci: 0.00, l: 1, lp: 0, f: 2, d: 0, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.21, ci: 0.00, l: 0, lp: 0, f: 2, d: -2, om: 0, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.19, ci: 0.00, l: 0, lp: 1, f: -2, d: 2, om: -3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.18, ci: 0.00, l: 0, lp: 1, f: -2, d: 2, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.10, ci: 0.05, l: 0, lp: 0, f: 0, d: 0, om: 0, l_ve: 8, l_ea: -13, pre: -1 },
    EquinoxTerm { si: 0.15, ci: 0.00, l: 0, lp: 0, f: 0, d: 2, om: 0, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.14, ci: 0.00, l: 2, lp: 0, f: -2, d: 0, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.14, ci: 0.00, l: 1, lp: 0, f: 0, d: -2, om: 1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.14, ci: 0.00, l: 0, lp: 1, f: 2, d: -2, om: 2, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.14, ci: 0.00, l: 1, lp: 0, f: 0, d: -2, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.13, ci: 0.00, l: 0, lp: 0, f: 4, d: -2, om: 4, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: -0.11, ci: 0.00, l: 0, lp: 0, f: 2, d: -2, om: 4, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.11, ci: 0.00, l: 1, lp: 0, f: -2, d: 0, om: -3, l_ve: 0, l_ea: 0, pre: 0 },
    EquinoxTerm { si: 0.11, ci: 0.00, l: 1, lp: 0, f: -2, d: 0, om: -1, l_ve: 0, l_ea: 0, pre: 0 },
];
