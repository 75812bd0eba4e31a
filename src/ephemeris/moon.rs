use crate::{
    constants::Constants,
    ephemeris::{
        lunar_terms::{LunarTerm, DISTANCE_TERMS, LATITUDE_TERMS, LONGITUDE_TERMS},
        EclipticPosition, EphemerisSource,
    },
    prelude::{Epoch, Vector3},
    time::{julian_centuries, EarthOrientation},
};

/// Mean Earth-Moon distance of the lunar theory (kilometers)
const MEAN_DISTANCE_KM: f64 = 385000.56;

/// Fundamental arguments of the lunar theory, in radians.
#[derive(Debug, Copy, Clone)]
struct FundamentalArguments {
    /// Moon mean longitude L'
    mean_longitude: f64,
    /// Mean elongation D
    elongation: f64,
    /// Sun mean anomaly M
    sun_anomaly: f64,
    /// Moon mean anomaly M'
    moon_anomaly: f64,
    /// Moon argument of latitude F
    latitude_argument: f64,
    /// Earth orbit eccentricity decrease factor E
    eccentricity_factor: f64,
}

impl FundamentalArguments {
    fn new(t: f64) -> Self {
        let (t2, t3) = (t.powi(2), t.powi(3));

        let mean_longitude =
            218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0;
        let elongation = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0;
        let moon_anomaly = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0;
        let sun_anomaly = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2;
        let latitude_argument =
            93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0;

        Self {
            mean_longitude: mean_longitude.rem_euclid(360.0).to_radians(),
            elongation: elongation.rem_euclid(360.0).to_radians(),
            sun_anomaly: sun_anomaly.rem_euclid(360.0).to_radians(),
            moon_anomaly: moon_anomaly.rem_euclid(360.0).to_radians(),
            latitude_argument: latitude_argument.rem_euclid(360.0).to_radians(),
            eccentricity_factor: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }

    /// Sums a periodic series. Terms depending on the Sun mean anomaly are
    /// weighted by E^|M|.
    fn series(&self, terms: &[LunarTerm], trig: fn(f64) -> f64) -> f64 {
        terms
            .iter()
            .map(|&(d, m, mp, f, coeff)| {
                let arg = d as f64 * self.elongation
                    + m as f64 * self.sun_anomaly
                    + mp as f64 * self.moon_anomaly
                    + f as f64 * self.latitude_argument;
                coeff * self.eccentricity_factor.powi(m.abs() as i32) * trig(arg)
            })
            .sum()
    }
}

/// Truncated lunar ephemeris (Meeus, Astronomical Algorithms, ch. 47):
/// 24 longitude, 23 distance and 18 latitude terms.
/// ~0.1° in position and ~200 km in distance.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Moon;

impl Moon {
    /// Geocentric ecliptic coordinates of the [Moon] at [Epoch].
    pub fn ecliptic(t: Epoch) -> EclipticPosition {
        Self::ecliptic_at(julian_centuries(t))
    }

    pub(crate) fn ecliptic_at(t: f64) -> EclipticPosition {
        let args = FundamentalArguments::new(t);

        let mut sum_l = args.series(&LONGITUDE_TERMS, f64::sin);
        let sum_r = args.series(&DISTANCE_TERMS, f64::cos);
        let mut sum_b = args.series(&LATITUDE_TERMS, f64::sin);

        // additive terms: action of Venus (A1), Jupiter (A2) and Earth flattening
        let a1 = (119.75 + 131.849 * t).rem_euclid(360.0).to_radians();
        let a2 = (53.09 + 479264.290 * t).rem_euclid(360.0).to_radians();
        let a3 = (313.45 + 481266.484 * t).rem_euclid(360.0).to_radians();

        let (lp, mp, f) = (args.mean_longitude, args.moon_anomaly, args.latitude_argument);

        sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

        sum_b += -2235.0 * lp.sin()
            + 382.0 * a3.sin()
            + 175.0 * (a1 - f).sin()
            + 175.0 * (a1 + f).sin()
            + 127.0 * (lp - mp).sin()
            - 115.0 * (lp + mp).sin();

        EclipticPosition {
            longitude_rad: lp + (sum_l / 1.0E6).to_radians(),
            latitude_rad: (sum_b / 1.0E6).to_radians(),
            distance_m: (MEAN_DISTANCE_KM + sum_r / 1.0E3) * 1.0E3,
        }
    }
}

impl EphemerisSource for Moon {
    fn gm_m3_s2(&self) -> f64 {
        Constants::MOON_GRAVITATION_MU_M3_S2
    }

    fn position_ecef_in(&self, orientation: &EarthOrientation) -> Vector3<f64> {
        Self::ecliptic_at(orientation.julian_centuries).to_ecef_in(orientation)
    }
}
