//! Low precision Sun and Moon ephemerides (truncated series, after Meeus).
use crate::{
    constants::Constants,
    prelude::{Epoch, Vector3},
    time::EarthOrientation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod lunar_terms;
mod moon;
mod sun;

pub use moon::Moon;
pub use sun::Sun;

/// Geocentric ecliptic coordinates, referred to the mean equinox of date.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticPosition {
    /// Ecliptic longitude (radians)
    pub longitude_rad: f64,
    /// Ecliptic latitude (radians)
    pub latitude_rad: f64,
    /// Geocentric distance (meters)
    pub distance_m: f64,
}

impl EclipticPosition {
    /// Rotates this position into the equatorial inertial frame (ECI), in meters,
    /// using the mean obliquity `eps_rad`.
    pub fn to_eci(&self, eps_rad: f64) -> Vector3<f64> {
        let (sin_beta, cos_beta) = self.latitude_rad.sin_cos();
        let (sin_lambda, cos_lambda) = self.longitude_rad.sin_cos();
        let (sin_eps, cos_eps) = eps_rad.sin_cos();

        let r = self.distance_m;

        Vector3::new(
            r * cos_beta * cos_lambda,
            r * (cos_beta * sin_lambda * cos_eps - sin_beta * sin_eps),
            r * (cos_beta * sin_lambda * sin_eps + sin_beta * cos_eps),
        )
    }

    /// Converts this position to ECEF coordinates (meters) at [Epoch].
    pub fn to_ecef(&self, t: Epoch) -> Vector3<f64> {
        self.to_ecef_in(&EarthOrientation::new(t))
    }

    /// Converts this position to ECEF coordinates (meters), with
    /// time arguments already resolved.
    pub fn to_ecef_in(&self, orientation: &EarthOrientation) -> Vector3<f64> {
        let eps = mean_obliquity_rad(orientation.julian_centuries);
        orientation.eci_to_ecef(self.to_eci(eps))
    }
}

/// Mean obliquity of the ecliptic (radians), linear in Julian centuries.
pub fn mean_obliquity_rad(t_centuries: f64) -> f64 {
    (Constants::OBLIQUITY_J2000_DEG - 0.013004 * t_centuries).to_radians()
}

/// [EphemerisSource] describes a perturbing body: its gravitational parameter
/// and its geocentric position in the Earth fixed frame, at any [Epoch].
/// Several bodies evaluated at the same instant share one [EarthOrientation].
pub trait EphemerisSource {
    /// Gravitational parameter (m^3 s-2)
    fn gm_m3_s2(&self) -> f64;

    /// Geocentric ECEF position (meters), time arguments already resolved.
    fn position_ecef_in(&self, orientation: &EarthOrientation) -> Vector3<f64>;

    /// Geocentric ECEF position (meters) at [Epoch]
    fn position_ecef_m(&self, t: Epoch) -> Vector3<f64> {
        self.position_ecef_in(&EarthOrientation::new(t))
    }
}

/// Sun position in ECEF coordinates (meters).
pub fn sun_position_ecef(t: Epoch) -> Vector3<f64> {
    Sun.position_ecef_m(t)
}

/// Moon position in ECEF coordinates (meters).
pub fn moon_position_ecef(t: Epoch) -> Vector3<f64> {
    Moon.position_ecef_m(t)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ecliptic_to_equatorial() {
        let eps = mean_obliquity_rad(0.0);
        assert!((eps.to_degrees() - 23.439291).abs() < 1.0E-12);

        // vernal point stays on the x axis
        let pos = EclipticPosition {
            longitude_rad: 0.0,
            latitude_rad: 0.0,
            distance_m: 1.0,
        };
        let eci = pos.to_eci(eps);
        assert!((eci - Vector3::new(1.0, 0.0, 0.0)).norm() < 1.0E-15);

        // summer solstice point reaches +ε declination
        let pos = EclipticPosition {
            longitude_rad: std::f64::consts::FRAC_PI_2,
            latitude_rad: 0.0,
            distance_m: 1.0,
        };
        let eci = pos.to_eci(eps);
        assert!((eci[2].asin() - eps).abs() < 1.0E-12);

        // ecliptic pole
        let pos = EclipticPosition {
            longitude_rad: 0.0,
            latitude_rad: std::f64::consts::FRAC_PI_2,
            distance_m: 1.0,
        };
        let eci = pos.to_eci(eps);
        assert!((eci - Vector3::new(0.0, -eps.sin(), eps.cos())).norm() < 1.0E-12);
    }
}
