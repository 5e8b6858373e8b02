//! Nutation series tables.
//!
//! The leading terms of the IAU 2000A lunisolar and planetary
//! developments, in units of 0.1 microarcseconds. Lunisolar multipliers
//! apply to the Delaunay arguments (l, l', F, D, Omega); planetary
//! multipliers additionally cover the eight mean planetary longitudes and
//! the accumulated general precession. The lunisolar table is truncated
//! at 20 terms, which keeps nutation in longitude within about ten
//! milliarcseconds of the full model; the planetary table carries the
//! terms above roughly a microarcsecond.

/// One lunisolar term: argument multipliers plus the in-phase,
/// time-varying and out-of-phase coefficients for longitude and obliquity.
pub(super) struct LunisolarTerm {
    pub l: i8,
    pub lp: i8,
    pub f: i8,
    pub d: i8,
    pub om: i8,
    pub ps: f64,
    pub psd: f64,
    pub pcp: f64,
    pub ec: f64,
    pub ecd: f64,
    pub esp: f64,
}

#[rustfmt::skip]
pub(super) static LUNISOLAR: [LunisolarTerm; 20] = [
    LunisolarTerm { l:  0, lp:  0, f: 0, d:  0, om: 1, ps: -172064161.0, psd: -174666.0, pcp:  33386.0, ec: 92052331.0, ecd:  9086.0, esp: 15377.0 },
    LunisolarTerm { l:  0, lp:  0, f: 2, d: -2, om: 2, ps:  -13170906.0, psd:   -1675.0, pcp: -13696.0, ec:  5730336.0, ecd: -3015.0, esp: -4587.0 },
    LunisolarTerm { l:  0, lp:  0, f: 2, d:  0, om: 2, ps:   -2276413.0, psd:    -234.0, pcp:   2796.0, ec:   978459.0, ecd:  -485.0, esp:  1374.0 },
    LunisolarTerm { l:  0, lp:  0, f: 0, d:  0, om: 2, ps:    2074554.0, psd:     207.0, pcp:   -698.0, ec:  -897492.0, ecd:   470.0, esp:  -291.0 },
    LunisolarTerm { l:  0, lp:  1, f: 0, d:  0, om: 0, ps:    1475877.0, psd:   -3633.0, pcp:  11817.0, ec:    73871.0, ecd:  -184.0, esp: -1924.0 },
    LunisolarTerm { l:  0, lp:  1, f: 2, d: -2, om: 2, ps:    -516821.0, psd:    1226.0, pcp:   -524.0, ec:   224386.0, ecd:  -677.0, esp:  -174.0 },
    LunisolarTerm { l:  1, lp:  0, f: 0, d:  0, om: 0, ps:     711159.0, psd:      73.0, pcp:   -872.0, ec:    -6750.0, ecd:     0.0, esp:   358.0 },
    LunisolarTerm { l:  0, lp:  0, f: 2, d:  0, om: 1, ps:    -387298.0, psd:    -367.0, pcp:    380.0, ec:   200728.0, ecd:    18.0, esp:   318.0 },
    LunisolarTerm { l:  1, lp:  0, f: 2, d:  0, om: 2, ps:    -301461.0, psd:     -36.0, pcp:    816.0, ec:   129025.0, ecd:   -63.0, esp:   367.0 },
    LunisolarTerm { l:  0, lp: -1, f: 2, d: -2, om: 2, ps:     215829.0, psd:    -494.0, pcp:    111.0, ec:   -95929.0, ecd:   299.0, esp:   132.0 },
    LunisolarTerm { l:  0, lp:  0, f: 2, d: -2, om: 1, ps:     128227.0, psd:     137.0, pcp:    181.0, ec:   -68982.0, ecd:    -9.0, esp:    39.0 },
    LunisolarTerm { l: -1, lp:  0, f: 2, d:  0, om: 2, ps:     123457.0, psd:      11.0, pcp:     19.0, ec:   -53311.0, ecd:    32.0, esp:    -4.0 },
    LunisolarTerm { l: -1, lp:  0, f: 0, d:  2, om: 0, ps:     156994.0, psd:      10.0, pcp:   -168.0, ec:    -1235.0, ecd:     0.0, esp:    82.0 },
    LunisolarTerm { l:  1, lp:  0, f: 0, d:  0, om: 1, ps:      63110.0, psd:      63.0, pcp:     27.0, ec:   -33228.0, ecd:     0.0, esp:    -9.0 },
    LunisolarTerm { l: -1, lp:  0, f: 0, d:  0, om: 1, ps:     -57976.0, psd:     -63.0, pcp:   -189.0, ec:    31429.0, ecd:     0.0, esp:   -75.0 },
    LunisolarTerm { l: -1, lp:  0, f: 2, d:  2, om: 2, ps:     -59641.0, psd:     -11.0, pcp:    149.0, ec:    25543.0, ecd:   -11.0, esp:    66.0 },
    LunisolarTerm { l:  1, lp:  0, f: 2, d:  0, om: 1, ps:     -51613.0, psd:     -42.0, pcp:    129.0, ec:    26366.0, ecd:     0.0, esp:    78.0 },
    LunisolarTerm { l: -2, lp:  0, f: 2, d:  0, om: 1, ps:      45893.0, psd:      50.0, pcp:     31.0, ec:   -24236.0, ecd:   -10.0, esp:    20.0 },
    LunisolarTerm { l:  0, lp:  0, f: 0, d:  2, om: 0, ps:      63384.0, psd:      11.0, pcp:   -150.0, ec:    -1220.0, ecd:     0.0, esp:    29.0 },
    LunisolarTerm { l:  0, lp:  0, f: 2, d:  2, om: 2, ps:     -38571.0, psd:      -1.0, pcp:    158.0, ec:    16452.0, ecd:   -11.0, esp:    68.0 },
];

/// One planetary term: multipliers for the eight mean planetary
/// longitudes, the accumulated precession and the Delaunay arguments,
/// plus in-phase and out-of-phase coefficients. The planetary
/// coefficients carry no time dependence.
pub(super) struct PlanetaryTerm {
    pub me: i8,
    pub ve: i8,
    pub ea: i8,
    pub ma: i8,
    pub ju: i8,
    pub sa: i8,
    pub ur: i8,
    pub ne: i8,
    pub pa: i8,
    pub l: i8,
    pub lp: i8,
    pub f: i8,
    pub d: i8,
    pub om: i8,
    pub ps: f64,
    pub pcp: f64,
    pub ec: f64,
    pub esp: f64,
}

#[rustfmt::skip]
pub(super) static PLANETARY: [PlanetaryTerm; 10] = [
    PlanetaryTerm { me: 0, ve: -2, ea:  2, ma:   0, ju:  0, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps: -462.0, pcp: 1604.0, ec:   0.0, esp:   0.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  8, ma: -16, ju:  4, sa:  5, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps: 1440.0, pcp:    0.0, ec:   0.0, esp:   0.0 },
    PlanetaryTerm { me: 0, ve: -1, ea:  1, ma:   0, ju:  0, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps: -219.0, pcp:   89.0, ec:   0.0, esp:   0.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  8, ma: -16, ju:  4, sa:  5, ur: 0, ne: 0, pa: -2, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:  125.0, pcp:  -43.0, ec:   0.0, esp: -54.0 },
    PlanetaryTerm { me: 0, ve:  0, ea: -8, ma:  16, ju: -4, sa: -5, ur: 0, ne: 0, pa:  2, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:   56.0, pcp: -117.0, ec: -42.0, esp: -40.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  1, ma:   0, ju: -1, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps: -114.0, pcp:    0.0, ec:   0.0, esp:  61.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  2, ma:   0, ju: -2, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:   99.0, pcp:    0.0, ec:   0.0, esp: -53.0 },
    PlanetaryTerm { me: 0, ve: -3, ea:  3, ma:   0, ju:  0, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:   46.0, pcp:   -5.0, ec:   0.0, esp:   0.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  1, ma:   0, ju:  0, sa: -1, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:  -38.0, pcp:    0.0, ec:   0.0, esp:  19.0 },
    PlanetaryTerm { me: 0, ve:  0, ea:  1, ma:  -1, ju:  0, sa:  0, ur: 0, ne: 0, pa:  0, l: 0, lp: 0, f: 0, d: 0, om: 0, ps:   14.0, pcp:    0.0, ec:   0.0, esp:  -7.0 },
];
