//! Local East North Up frame and sensor measurement axis.
use crate::prelude::Vector3;

/// Local topocentric East North Up (ENU) frame, expressed
/// as three orthonormal ECEF unit vectors. East x North = Up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EnuBasis {
    /// Local East unit vector
    pub east: Vector3<f64>,
    /// Local North unit vector
    pub north: Vector3<f64>,
    /// Local Up unit vector (ellipsoid normal)
    pub up: Vector3<f64>,
}

impl EnuBasis {
    /// Builds the [EnuBasis] at given geodetic latitude and longitude (degrees).
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        let (sin_phi, cos_phi) = lat_deg.to_radians().sin_cos();
        let (sin_lambda, cos_lambda) = lon_deg.to_radians().sin_cos();

        Self {
            east: Vector3::new(-sin_lambda, cos_lambda, 0.0),
            north: Vector3::new(-sin_phi * cos_lambda, -sin_phi * sin_lambda, cos_phi),
            up: Vector3::new(cos_phi * cos_lambda, cos_phi * sin_lambda, sin_phi),
        }
    }

    /// Measurement axis unit vector (ECEF), for a sensor tilted by `zenith_deg` from
    /// the local vertical (0° = Up, 90° = horizontal), whose horizontal projection
    /// points toward `azimuth_deg`, counted clockwise from North (90° = East).
    pub fn measurement_axis(&self, zenith_deg: f64, azimuth_deg: f64) -> Vector3<f64> {
        let (sin_zen, cos_zen) = zenith_deg.to_radians().sin_cos();
        let (sin_azi, cos_azi) = azimuth_deg.to_radians().sin_cos();
        cos_zen * self.up + sin_zen * (cos_azi * self.north + sin_azi * self.east)
    }

    /// Projects an ECEF vector onto this frame,
    /// returning its (east, north, up) components.
    pub fn to_enu(&self, ecef: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.east.dot(&ecef),
            self.north.dot(&ecef),
            self.up.dot(&ecef),
        )
    }
}

/// Returns (East, North, Up) unit vectors at given geodetic coordinates (degrees).
pub fn enu_basis(lat_deg: f64, lon_deg: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let basis = EnuBasis::new(lat_deg, lon_deg);
    (basis.east, basis.north, basis.up)
}

/// Measurement axis unit vector (ECEF) at given geodetic coordinates.
/// See [EnuBasis::measurement_axis].
pub fn measurement_axis(
    lat_deg: f64,
    lon_deg: f64,
    zenith_deg: f64,
    azimuth_deg: f64,
) -> Vector3<f64> {
    EnuBasis::new(lat_deg, lon_deg).measurement_axis(zenith_deg, azimuth_deg)
}
