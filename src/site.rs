//! Gravity sensing [Site]: combines normal gravity and the lunar and solar
//! tides, projected onto the sensor measurement axis.
use log::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    cfg::{Config, Sampling},
    constants::Constants,
    enu::EnuBasis,
    ephemeris::{EphemerisSource, Moon, Sun},
    error::Error,
    gravity::normal_gravity,
    position::Position,
    prelude::{Epoch, Vector3},
    solutions::{TidalSample, Timeseries},
    tides::tidal_acceleration,
    time::EarthOrientation,
};

/// Altitude range (meters) the closed form models were validated for.
const VALIDATED_ALTITUDE_M: f64 = 50_000.0;

/// [Site] describes a gravity sensor: its [Position] on or above the ellipsoid
/// and the orientation of its measurement axis. Everything that does not depend
/// on time (ECEF position, measurement axis, static gravity) is resolved once.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Site {
    /// [Position] of the sensor
    position: Position,
    /// Local [EnuBasis]
    basis: EnuBasis,
    /// Zenith angle of the measurement axis (deg)
    zenith_deg: f64,
    /// Azimuth of the measurement axis (deg), clockwise from North
    azimuth_deg: f64,
    /// Measurement axis (ECEF unit vector)
    axis: Vector3<f64>,
    /// Normal gravity projected onto the measurement axis (m s-2)
    g_static: f64,
}

impl Site {
    /// Builds a new [Site] with a vertical measurement axis.
    /// - latitude [deg]
    /// - longitude [deg]
    /// - altitude above the GRS80 ellipsoid [m]
    pub fn new(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self::from_position(Position::from_geodetic(lat_deg, lon_deg, alt_m))
    }

    /// Builds a new [Site] at [Position], with a vertical measurement axis.
    pub fn from_position(position: Position) -> Self {
        if position.altitude_m().abs() > VALIDATED_ALTITUDE_M {
            warn!(
                "altitude {:.1} m is outside validated envelope: degraded accuracy",
                position.altitude_m()
            );
        }

        let basis = position.enu_basis();
        let mut s = Self {
            position,
            basis,
            zenith_deg: 0.0,
            azimuth_deg: 0.0,
            axis: basis.up,
            g_static: 0.0,
        };
        s.g_static = s.static_projection();
        s
    }

    /// Copies and returns [Site] with a tilted measurement axis.
    /// - zenith angle [deg]: 0 = vertical (Up), 90 = horizontal
    /// - azimuth [deg]: clockwise from North
    pub fn with_axis(&self, zenith_deg: f64, azimuth_deg: f64) -> Self {
        let mut s = *self;
        s.zenith_deg = zenith_deg;
        s.azimuth_deg = azimuth_deg;
        s.axis = s.basis.measurement_axis(zenith_deg, azimuth_deg);
        s.g_static = s.static_projection();
        s
    }

    /// Normal gravity acts along the local vertical only.
    fn static_projection(&self) -> f64 {
        let g0 = normal_gravity(self.position.latitude_deg(), self.position.altitude_m());
        g0 * self.basis.up.dot(&self.axis)
    }

    /// [Position] of this [Site]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Local [EnuBasis]
    pub fn enu_basis(&self) -> EnuBasis {
        self.basis
    }

    /// Measurement axis (ECEF unit vector)
    pub fn measurement_axis(&self) -> Vector3<f64> {
        self.axis
    }

    /// Measurement axis (zenith, azimuth) angles, in degrees
    pub fn axis_angles_deg(&self) -> (f64, f64) {
        (self.zenith_deg, self.azimuth_deg)
    }

    /// Static gravity projected onto the measurement axis (m s-2)
    pub fn g_static(&self) -> f64 {
        self.g_static
    }

    /// Rigid Earth tidal acceleration vector (ECEF, m s-2) caused by this body.
    pub fn rigid_tidal_acceleration<E: EphemerisSource>(&self, body: &E, t: Epoch) -> Vector3<f64> {
        self.rigid_tidal_acceleration_in(body, &EarthOrientation::new(t))
    }

    fn rigid_tidal_acceleration_in<E: EphemerisSource>(
        &self,
        body: &E,
        orientation: &EarthOrientation,
    ) -> Vector3<f64> {
        tidal_acceleration(
            self.position.ecef(),
            body.position_ecef_in(orientation),
            body.gm_m3_s2(),
        )
    }

    /// Elastic Earth tidal acceleration vector (ECEF, m s-2) caused by this body:
    /// rigid Earth value amplified by the gravimetric factor.
    pub fn tidal_acceleration_from<E: EphemerisSource>(&self, body: &E, t: Epoch) -> Vector3<f64> {
        self.tidal_acceleration_in(body, &EarthOrientation::new(t))
    }

    fn tidal_acceleration_in<E: EphemerisSource>(
        &self,
        body: &E,
        orientation: &EarthOrientation,
    ) -> Vector3<f64> {
        Constants::GRAVIMETRIC_FACTOR * self.rigid_tidal_acceleration_in(body, orientation)
    }

    /// Computes g(t) on the measurement axis, at [Epoch].
    pub fn compute_g(&self, t: Epoch) -> TidalSample {
        let orientation = EarthOrientation::new(t);
        let g_moon = self.tidal_acceleration_in(&Moon, &orientation).dot(&self.axis);
        let g_sun = self.tidal_acceleration_in(&Sun, &orientation).dot(&self.axis);
        let sample = TidalSample::new(self.g_static, g_moon, g_sun);
        trace!("{} - {}", t, sample);
        sample
    }

    /// Computes g(t) between `start` and `end`, sampled as described by [Config].
    pub fn compute_timeseries(
        &self,
        start: Epoch,
        end: Epoch,
        cfg: &Config,
    ) -> Result<Timeseries, Error> {
        let sampling = cfg.sampling()?;
        self.compute_timeseries_with(start, end, sampling)
    }

    /// Computes g(t) between `start` and `end`, with this [Sampling] strategy.
    pub fn compute_timeseries_with(
        &self,
        start: Epoch,
        end: Epoch,
        sampling: Sampling,
    ) -> Result<Timeseries, Error> {
        let epochs = sampling.epochs(start, end)?;

        debug!(
            "{} - {}: {} ({} epochs) g_static={:.8} m.s⁻²",
            start,
            end,
            sampling,
            epochs.len(),
            self.g_static
        );

        #[cfg(feature = "parallel")]
        let series = epochs
            .par_iter()
            .map(|t| (*t, self.compute_g(*t)))
            .collect::<Vec<_>>();

        #[cfg(not(feature = "parallel"))]
        let series = epochs
            .iter()
            .map(|t| (*t, self.compute_g(*t)))
            .collect::<Vec<_>>();

        Ok(series.into_iter().collect())
    }
}

/// Computes g(t) on a measurement axis, at [Epoch] and given geodetic coordinates.
/// See [Site::compute_g].
pub fn compute_g(
    t: Epoch,
    lat_deg: f64,
    lon_deg: f64,
    alt_m: f64,
    zenith_deg: f64,
    azimuth_deg: f64,
) -> TidalSample {
    Site::new(lat_deg, lon_deg, alt_m)
        .with_axis(zenith_deg, azimuth_deg)
        .compute_g(t)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vertical_by_default() {
        let site = Site::new(48.14, 11.58, 500.0);
        assert_eq!(site.measurement_axis(), site.enu_basis().up);
        assert_eq!(site.axis_angles_deg(), (0.0, 0.0));
        assert!((site.g_static() - normal_gravity(48.14, 500.0)).abs() < 1.0E-14);
    }

    #[test]
    fn tilted_static_projection() {
        let site = Site::new(48.14, 11.58, 500.0).with_axis(60.0, 45.0);
        let expected = normal_gravity(48.14, 500.0) * 60.0_f64.to_radians().cos();
        assert!((site.g_static() - expected).abs() < 1.0E-12);

        let vertical = site.with_axis(0.0, 0.0);
        assert_eq!(vertical, Site::new(48.14, 11.58, 500.0));
    }

    #[test]
    fn free_function() {
        let t = Epoch::from_gregorian_utc_at_noon(2025, 3, 20);
        let site = Site::new(48.14, 11.58, 500.0).with_axis(30.0, 120.0);
        assert_eq!(compute_g(t, 48.14, 11.58, 500.0, 30.0, 120.0), site.compute_g(t));
    }

    #[test]
    fn shared_orientation_matches_per_body_evaluation() {
        let t = Epoch::from_gregorian_utc_hms(2025, 3, 20, 17, 40, 0);
        let site = Site::new(48.14, 11.58, 500.0).with_axis(25.0, 300.0);
        let sample = site.compute_g(t);

        let g_moon = site.tidal_acceleration_from(&Moon, t).dot(&site.measurement_axis());
        let g_sun = site.tidal_acceleration_from(&Sun, t).dot(&site.measurement_axis());
        assert_eq!(sample.g_tidal_moon, g_moon);
        assert_eq!(sample.g_tidal_sun, g_sun);
    }
}
