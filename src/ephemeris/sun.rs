use crate::{
    constants::Constants,
    ephemeris::{EclipticPosition, EphemerisSource},
    prelude::{Epoch, Vector3},
    time::{julian_centuries, EarthOrientation},
};

/// Semi-major axis of the Earth orbit (AU)
const SEMI_MAJOR_AXIS_AU: f64 = 1.000001018;

/// Low precision solar ephemeris (Meeus, Astronomical Algorithms, ch. 25):
/// ~1' in ecliptic longitude.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Sun;

impl Sun {
    /// Geocentric ecliptic coordinates of the [Sun] at [Epoch].
    /// Solar latitude never exceeds 1.2" and is neglected.
    pub fn ecliptic(t: Epoch) -> EclipticPosition {
        Self::ecliptic_at(julian_centuries(t))
    }

    pub(crate) fn ecliptic_at(t: f64) -> EclipticPosition {
        // geometric mean longitude and mean anomaly (deg)
        let l0 = (280.46646 + 36000.76983 * t + 0.0003032 * t.powi(2)).rem_euclid(360.0);
        let m = (357.52911 + 35999.05029 * t - 0.0001537 * t.powi(2)).rem_euclid(360.0);
        let m_rad = m.to_radians();

        // equation of center (deg)
        let c = (1.914602 - 0.004817 * t - 0.000014 * t.powi(2)) * m_rad.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
            + 0.000289 * (3.0 * m_rad).sin();

        let longitude_rad = (l0 + c).rem_euclid(360.0).to_radians();

        let e = 0.016708634 - 0.000042037 * t;
        let true_anomaly = (m + c).rem_euclid(360.0).to_radians();

        let distance_m = Constants::ASTRONOMICAL_UNIT_M * SEMI_MAJOR_AXIS_AU * (1.0 - e.powi(2))
            / (1.0 + e * true_anomaly.cos());

        EclipticPosition {
            longitude_rad,
            latitude_rad: 0.0,
            distance_m,
        }
    }
}

impl EphemerisSource for Sun {
    fn gm_m3_s2(&self) -> f64 {
        Constants::SUN_GRAVITATION_MU_M3_S2
    }

    fn position_ecef_in(&self, orientation: &EarthOrientation) -> Vector3<f64> {
        Self::ecliptic_at(orientation.julian_centuries).to_ecef_in(orientation)
    }
}
