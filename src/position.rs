//! Geodetic (GRS80) and Earth fixed (ECEF) coordinates.
use crate::{
    constants::Constants,
    enu::EnuBasis,
    prelude::Vector3,
};

use map_3d::{deg2rad, ecef2geodetic, geodetic2ecef, rad2deg, Ellipsoid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts geodetic coordinates to ECEF coordinates (meters).
/// - latitude [deg]
/// - longitude [deg], east positive
/// - altitude above the GRS80 ellipsoid [m]
pub fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Vector3<f64> {
    let (x, y, z) = geodetic2ecef(deg2rad(lat_deg), deg2rad(lon_deg), alt_m, Ellipsoid::GRS80);
    Vector3::new(x, y, z)
}

/// Converts ECEF coordinates (meters) to geodetic coordinates
/// (latitude [deg], longitude [deg] within ]-180, 180], altitude [m]).
pub fn ecef_to_geodetic(ecef: Vector3<f64>) -> (f64, f64, f64) {
    let (x, y, z) = (ecef[0], ecef[1], ecef[2]);

    if x.hypot(y) < 1.0E-9 {
        // polar axis: latitude is ±90°, longitude is arbitrary
        let lat = if z < 0.0 { -90.0 } else { 90.0 };
        return (lat, 0.0, z.abs() - Constants::GRS80_SEMI_MINOR_AXIS_M);
    }

    let (lat, lon, alt) = ecef2geodetic(x, y, z, Ellipsoid::GRS80);
    (rad2deg(lat), rad2deg(lon), alt)
}

/// Wraps a longitude into ]-180, 180].
pub(crate) fn wrap_longitude_deg(lon_deg: f64) -> f64 {
    let wrapped = lon_deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// [Position] on or above the GRS80 ellipsoid, expressed
/// both in geodetic and ECEF coordinates.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// ECEF coordinates in meters
    pub(crate) ecef: Vector3<f64>,
    /// Geodetic coordinates: latitude [deg], longitude [deg], altitude [m]
    pub(crate) geodetic: Vector3<f64>,
}

impl Position {
    /// Builds new [Position] from geodetic coordinates
    /// - latitude [deg]
    /// - longitude [deg], any value (wrapped into ]-180, 180])
    /// - altitude above the ellipsoid [m], may be negative
    pub fn from_geodetic(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            ecef: geodetic_to_ecef(lat_deg, lon_deg, alt_m),
            geodetic: Vector3::new(lat_deg, wrap_longitude_deg(lon_deg), alt_m),
        }
    }

    /// Builds new [Position] from ECEF coordinates expressed in meters.
    pub fn from_ecef(ecef: Vector3<f64>) -> Self {
        let (lat, lon, alt) = ecef_to_geodetic(ecef);
        Self {
            ecef,
            geodetic: Vector3::new(lat, lon, alt),
        }
    }

    /// Returns ECEF coordinates in meters.
    pub fn ecef(&self) -> Vector3<f64> {
        self.ecef
    }

    /// Returns geodetic coordinates
    /// - latitude [deg]
    /// - longitude [deg]
    /// - altitude above the ellipsoid [m]
    pub fn geodetic(&self) -> Vector3<f64> {
        self.geodetic
    }

    /// Latitude in degrees
    pub fn latitude_deg(&self) -> f64 {
        self.geodetic[0]
    }

    /// Longitude in degrees
    pub fn longitude_deg(&self) -> f64 {
        self.geodetic[1]
    }

    /// Altitude above the ellipsoid in meters
    pub fn altitude_m(&self) -> f64 {
        self.geodetic[2]
    }

    /// Local East North Up [EnuBasis] at this [Position].
    pub fn enu_basis(&self) -> EnuBasis {
        EnuBasis::new(self.latitude_deg(), self.longitude_deg())
    }
}
