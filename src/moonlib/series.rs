//! Abridged lunar main-problem series
//!
//! Periodic terms for the Moon's longitude, latitude and distance in the
//! Delaunay arguments D (mean elongation), M (solar mean anomaly), M' (lunar
//! mean anomaly) and F (argument of latitude). Longitude coefficients are in
//! 1e-6 degree, distance coefficients in 1e-3 km, latitude coefficients in
//! 1e-6 degree. Terms involving M are damped by powers of the eccentricity
//! factor E at evaluation time.

/// One longitude/distance term: multiples of (D, M, M', F) with sine
/// amplitude `l` and cosine amplitude `r`.
#[derive(Debug, Clone, Copy)]
pub struct LonDistTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    pub l: f64,
    pub r: f64,
}

/// One latitude term: multiples of (D, M, M', F) with sine amplitude `b`.
#[derive(Debug, Clone, Copy)]
pub struct LatTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    pub b: f64,
}

pub static LON_DIST: &[LonDistTerm] = &[
    LonDistTerm { d: 0, m: 0, mp: 1, f: 0, l: 6288774.0, r: -20905355.0 },
    LonDistTerm { d: 2, m: 0, mp: -1, f: 0, l: 1274027.0, r: -3699111.0 },
    LonDistTerm { d: 2, m: 0, mp: 0, f: 0, l: 658314.0, r: -2955968.0 },
    LonDistTerm { d: 0, m: 0, mp: 2, f: 0, l: 213618.0, r: -569925.0 },
    LonDistTerm { d: 0, m: 1, mp: 0, f: 0, l: -185116.0, r: 48888.0 },
    LonDistTerm { d: 0, m: 0, mp: 0, f: 2, l: -114332.0, r: -3149.0 },
    LonDistTerm { d: 2, m: 0, mp: -2, f: 0, l: 58793.0, r: 246158.0 },
    LonDistTerm { d: 2, m: -1, mp: -1, f: 0, l: 57066.0, r: -152138.0 },
    LonDistTerm { d: 2, m: 0, mp: 1, f: 0, l: 53322.0, r: -170733.0 },
    LonDistTerm { d: 2, m: -1, mp: 0, f: 0, l: 45758.0, r: -204586.0 },
    LonDistTerm { d: 0, m: 1, mp: -1, f: 0, l: -40923.0, r: -129620.0 },
    LonDistTerm { d: 1, m: 0, mp: 0, f: 0, l: -34720.0, r: 108743.0 },
    LonDistTerm { d: 0, m: 1, mp: 1, f: 0, l: -30383.0, r: 104755.0 },
    LonDistTerm { d: 2, m: 0, mp: 0, f: -2, l: 15327.0, r: 10321.0 },
    LonDistTerm { d: 0, m: 0, mp: 1, f: 2, l: -12528.0, r: 0.0 },
    LonDistTerm { d: 0, m: 0, mp: 1, f: -2, l: 10980.0, r: 79661.0 },
    LonDistTerm { d: 4, m: 0, mp: -1, f: 0, l: 10675.0, r: -34782.0 },
    LonDistTerm { d: 0, m: 0, mp: 3, f: 0, l: 10034.0, r: -23210.0 },
    LonDistTerm { d: 4, m: 0, mp: -2, f: 0, l: 8548.0, r: -21636.0 },
    LonDistTerm { d: 2, m: 1, mp: -1, f: 0, l: -7888.0, r: 24208.0 },
    LonDistTerm { d: 2, m: 1, mp: 0, f: 0, l: -6766.0, r: 30824.0 },
    LonDistTerm { d: 1, m: 0, mp: -1, f: 0, l: -5163.0, r: -8379.0 },
    LonDistTerm { d: 1, m: 1, mp: 0, f: 0, l: 4987.0, r: -16675.0 },
    LonDistTerm { d: 2, m: -1, mp: 1, f: 0, l: 4036.0, r: -12831.0 },
    LonDistTerm { d: 2, m: 0, mp: 2, f: 0, l: 3994.0, r: -10445.0 },
    LonDistTerm { d: 4, m: 0, mp: 0, f: 0, l: 3861.0, r: -11650.0 },
    LonDistTerm { d: 2, m: 0, mp: -3, f: 0, l: 3665.0, r: 14403.0 },
    LonDistTerm { d: 0, m: 1, mp: -2, f: 0, l: -2689.0, r: -7003.0 },
    LonDistTerm { d: 2, m: 0, mp: -1, f: 2, l: -2602.0, r: 0.0 },
    LonDistTerm { d: 2, m: -1, mp: -2, f: 0, l: 2390.0, r: 10056.0 },
    LonDistTerm { d: 1, m: 0, mp: 1, f: 0, l: -2348.0, r: 6322.0 },
    LonDistTerm { d: 2, m: -2, mp: 0, f: 0, l: 2236.0, r: -9884.0 },
    LonDistTerm { d: 0, m: 1, mp: 2, f: 0, l: -2120.0, r: 5751.0 },
    LonDistTerm { d: 0, m: 2, mp: 0, f: 0, l: -2069.0, r: 0.0 },
    LonDistTerm { d: 2, m: -2, mp: -1, f: 0, l: 2048.0, r: -4950.0 },
    LonDistTerm { d: 2, m: 0, mp: 1, f: -2, l: -1773.0, r: 4130.0 },
    LonDistTerm { d: 2, m: 0, mp: 0, f: 2, l: -1595.0, r: 0.0 },
    LonDistTerm { d: 4, m: -1, mp: -1, f: 0, l: 1215.0, r: -3958.0 },
    LonDistTerm { d: 0, m: 0, mp: 2, f: 2, l: -1110.0, r: 0.0 },
    LonDistTerm { d: 3, m: 0, mp: -1, f: 0, l: -892.0, r: 3258.0 },
    LonDistTerm { d: 2, m: 1, mp: 1, f: 0, l: -810.0, r: 2616.0 },
    LonDistTerm { d: 4, m: -1, mp: -2, f: 0, l: 759.0, r: -1897.0 },
    LonDistTerm { d: 0, m: 2, mp: -1, f: 0, l: -713.0, r: -2117.0 },
    LonDistTerm { d: 2, m: 2, mp: -1, f: 0, l: -700.0, r: 2354.0 },
    LonDistTerm { d: 2, m: 1, mp: -2, f: 0, l: 691.0, r: 0.0 },
    LonDistTerm { d: 2, m: -1, mp: 0, f: -2, l: 596.0, r: 0.0 },
    LonDistTerm { d: 4, m: 0, mp: 1, f: 0, l: 549.0, r: -1423.0 },
    LonDistTerm { d: 0, m: 0, mp: 4, f: 0, l: 537.0, r: -1117.0 },
    LonDistTerm { d: 4, m: -1, mp: 0, f: 0, l: 520.0, r: -1571.0 },
    LonDistTerm { d: 1, m: 0, mp: -2, f: 0, l: -487.0, r: -1739.0 },
    LonDistTerm { d: 2, m: 1, mp: 0, f: -2, l: -399.0, r: 0.0 },
    LonDistTerm { d: 0, m: 0, mp: 2, f: -2, l: -381.0, r: -4421.0 },
    LonDistTerm { d: 1, m: 1, mp: 1, f: 0, l: 351.0, r: 0.0 },
    LonDistTerm { d: 3, m: 0, mp: -2, f: 0, l: -340.0, r: 0.0 },
    LonDistTerm { d: 4, m: 0, mp: -3, f: 0, l: 330.0, r: 0.0 },
    LonDistTerm { d: 2, m: -1, mp: 2, f: 0, l: 327.0, r: 0.0 },
    LonDistTerm { d: 0, m: 2, mp: 1, f: 0, l: -323.0, r: 1165.0 },
    LonDistTerm { d: 1, m: 1, mp: -1, f: 0, l: 299.0, r: 0.0 },
    LonDistTerm { d: 2, m: 0, mp: 3, f: 0, l: 294.0, r: 0.0 },
    LonDistTerm { d: 2, m: 0, mp: -1, f: -2, l: 0.0, r: 8752.0 },
];

pub static LATITUDE: &[LatTerm] = &[
    LatTerm { d: 0, m: 0, mp: 0, f: 1, b: 5128122.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: 1, b: 280602.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: -1, b: 277693.0 },
    LatTerm { d: 2, m: 0, mp: 0, f: -1, b: 173237.0 },
    LatTerm { d: 2, m: 0, mp: -1, f: 1, b: 55413.0 },
    LatTerm { d: 2, m: 0, mp: -1, f: -1, b: 46271.0 },
    LatTerm { d: 2, m: 0, mp: 0, f: 1, b: 32573.0 },
    LatTerm { d: 0, m: 0, mp: 2, f: 1, b: 17198.0 },
    LatTerm { d: 2, m: 0, mp: 1, f: -1, b: 9266.0 },
    LatTerm { d: 0, m: 0, mp: 2, f: -1, b: 8822.0 },
    LatTerm { d: 2, m: -1, mp: 0, f: -1, b: 8216.0 },
    LatTerm { d: 2, m: 0, mp: -2, f: -1, b: 4324.0 },
    LatTerm { d: 2, m: 0, mp: 1, f: 1, b: 4200.0 },
    LatTerm { d: 2, m: 1, mp: 0, f: -1, b: -3359.0 },
    LatTerm { d: 2, m: -1, mp: -1, f: 1, b: 2463.0 },
    LatTerm { d: 2, m: -1, mp: 0, f: 1, b: 2211.0 },
    LatTerm { d: 2, m: -1, mp: -1, f: -1, b: 2065.0 },
    LatTerm { d: 0, m: 1, mp: -1, f: -1, b: -1870.0 },
    LatTerm { d: 4, m: 0, mp: -1, f: -1, b: 1828.0 },
    LatTerm { d: 0, m: 1, mp: 0, f: 1, b: -1794.0 },
    LatTerm { d: 0, m: 0, mp: 0, f: 3, b: -1749.0 },
    LatTerm { d: 0, m: 1, mp: -1, f: 1, b: -1565.0 },
    LatTerm { d: 1, m: 0, mp: 0, f: 1, b: -1491.0 },
    LatTerm { d: 0, m: 1, mp: 1, f: 1, b: -1475.0 },
    LatTerm { d: 0, m: 1, mp: 1, f: -1, b: -1410.0 },
    LatTerm { d: 0, m: 1, mp: 0, f: -1, b: -1344.0 },
    LatTerm { d: 1, m: 0, mp: 0, f: -1, b: -1335.0 },
    LatTerm { d: 0, m: 0, mp: 3, f: 1, b: 1107.0 },
    LatTerm { d: 4, m: 0, mp: 0, f: -1, b: 1021.0 },
    LatTerm { d: 4, m: 0, mp: -1, f: 1, b: 833.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: -3, b: 777.0 },
    LatTerm { d: 4, m: 0, mp: -2, f: 1, b: 671.0 },
    LatTerm { d: 2, m: 0, mp: 0, f: -3, b: 607.0 },
    LatTerm { d: 2, m: 0, mp: 2, f: -1, b: 596.0 },
    LatTerm { d: 2, m: -1, mp: 1, f: -1, b: 491.0 },
    LatTerm { d: 2, m: 0, mp: -2, f: 1, b: -451.0 },
    LatTerm { d: 0, m: 0, mp: 3, f: -1, b: 439.0 },
    LatTerm { d: 2, m: 0, mp: 2, f: 1, b: 422.0 },
    LatTerm { d: 2, m: 0, mp: -3, f: -1, b: 421.0 },
    LatTerm { d: 2, m: 1, mp: -1, f: 1, b: -366.0 },
    LatTerm { d: 2, m: 1, mp: 0, f: 1, b: -351.0 },
    LatTerm { d: 4, m: 0, mp: 0, f: 1, b: 331.0 },
    LatTerm { d: 2, m: -1, mp: 1, f: 1, b: 315.0 },
    LatTerm { d: 2, m: -2, mp: 0, f: -1, b: 302.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: 3, b: -283.0 },
    LatTerm { d: 2, m: 1, mp: 1, f: -1, b: -229.0 },
    LatTerm { d: 1, m: 1, mp: 0, f: -1, b: 223.0 },
    LatTerm { d: 1, m: 1, mp: 0, f: 1, b: 223.0 },
    LatTerm { d: 0, m: 1, mp: -2, f: -1, b: -220.0 },
    LatTerm { d: 2, m: 1, mp: -1, f: -1, b: -220.0 },
    LatTerm { d: 1, m: 0, mp: 1, f: 1, b: -185.0 },
    LatTerm { d: 2, m: -1, mp: -2, f: -1, b: 181.0 },
    LatTerm { d: 0, m: 1, mp: 2, f: 1, b: -177.0 },
    LatTerm { d: 4, m: 0, mp: -2, f: -1, b: 176.0 },
    LatTerm { d: 4, m: -1, mp: -1, f: -1, b: 166.0 },
    LatTerm { d: 1, m: 0, mp: 1, f: -1, b: -164.0 },
    LatTerm { d: 4, m: 0, mp: 1, f: -1, b: 132.0 },
    LatTerm { d: 1, m: 0, mp: -1, f: -1, b: -119.0 },
    LatTerm { d: 4, m: -1, mp: 0, f: -1, b: 115.0 },
    LatTerm { d: 2, m: -2, mp: 0, f: 1, b: 107.0 },
];
