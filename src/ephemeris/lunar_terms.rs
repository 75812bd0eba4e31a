//! Periodic terms of the lunar theory (Meeus, Astronomical Algorithms, ch. 47),
//! truncated to the major terms.
//!
//! Each term is (D, M, M', F, coefficient): multipliers of the mean elongation,
//! Sun mean anomaly, Moon mean anomaly and Moon argument of latitude.

/// Periodic term: multipliers of (D, M, M', F) and coefficient
pub(crate) type LunarTerm = (i8, i8, i8, i8, f64);

/// Table 47.A: longitude terms (1E-6 deg, sine series)
pub(crate) const LONGITUDE_TERMS: [LunarTerm; 24] = [
    (0, 0, 1, 0, 6288774.0),
    (2, 0, -1, 0, 1274027.0),
    (2, 0, 0, 0, 658314.0),
    (0, 0, 2, 0, 213618.0),
    (0, 1, 0, 0, -185116.0),
    (0, 0, 0, 2, -114332.0),
    (2, 0, -2, 0, 58793.0),
    (2, -1, -1, 0, 57066.0),
    (2, 0, 1, 0, 53322.0),
    (2, -1, 0, 0, 45758.0),
    (0, 1, -1, 0, -40923.0),
    (1, 0, 0, 0, -34720.0),
    (0, 1, 1, 0, -30383.0),
    (2, 0, 0, -2, 15327.0),
    (0, 0, 1, 2, -12528.0),
    (0, 0, 1, -2, 10980.0),
    (4, 0, -1, 0, 10675.0),
    (0, 0, 3, 0, 10034.0),
    (4, 0, -2, 0, 8548.0),
    (2, 1, -1, 0, -7888.0),
    (2, 1, 0, 0, -6766.0),
    (1, 0, -1, 0, -5163.0),
    (1, 1, 0, 0, 4987.0),
    (2, -1, 1, 0, 4036.0),
];

/// Table 47.A: distance terms (meters, cosine series)
pub(crate) const DISTANCE_TERMS: [LunarTerm; 23] = [
    (0, 0, 1, 0, -20905355.0),
    (2, 0, -1, 0, -3699111.0),
    (2, 0, 0, 0, -2955968.0),
    (0, 0, 2, 0, -569925.0),
    (0, 1, 0, 0, 48888.0),
    (0, 0, 0, 2, -3149.0),
    (2, 0, -2, 0, 246158.0),
    (2, -1, -1, 0, -152138.0),
    (2, 0, 1, 0, -170733.0),
    (2, -1, 0, 0, -204586.0),
    (0, 1, -1, 0, -129620.0),
    (1, 0, 0, 0, 108743.0),
    (0, 1, 1, 0, 104755.0),
    (2, 0, 0, -2, 10321.0),
    (0, 0, 1, -2, 79661.0),
    (4, 0, -1, 0, -34782.0),
    (0, 0, 3, 0, -23210.0),
    (4, 0, -2, 0, -21636.0),
    (2, 1, -1, 0, 24208.0),
    (2, 1, 0, 0, 30824.0),
    (1, 0, -1, 0, -8379.0),
    (1, 1, 0, 0, -16675.0),
    (2, -1, 1, 0, -12831.0),
];

/// Table 47.B: latitude terms (1E-6 deg, sine series)
pub(crate) const LATITUDE_TERMS: [LunarTerm; 18] = [
    (0, 0, 0, 1, 5128122.0),
    (0, 0, 1, 1, 280602.0),
    (0, 0, 1, -1, 277693.0),
    (2, 0, 0, -1, 173237.0),
    (2, 0, -1, 1, 55413.0),
    (2, 0, -1, -1, 46271.0),
    (2, 0, 0, 1, 32573.0),
    (0, 0, 2, 1, 17198.0),
    (2, 0, 1, -1, 9266.0),
    (0, 0, 2, -1, 8822.0),
    (2, -1, 0, -1, 8216.0),
    (2, 0, -2, -1, 4324.0),
    (2, 0, 1, 1, 4200.0),
    (2, 1, 0, -1, -3359.0),
    (2, -1, -1, 1, 2463.0),
    (2, -1, 0, 1, 2211.0),
    (2, -1, -1, -1, 2065.0),
    (0, 1, -1, -1, -1870.0),
];
