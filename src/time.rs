//! UTC [Epoch] to Julian Date, Julian centuries and sidereal time.
use crate::{
    constants::Constants,
    prelude::{Epoch, Vector3},
};

/// Converts UTC [Epoch] to Julian Date (Meeus, Astronomical Algorithms, ch. 7).
/// January and February are counted as months 13 and 14 of the previous year,
/// so the Gregorian century correction applies to the right year.
pub fn julian_date(t: Epoch) -> f64 {
    let (year, month, day, hours, minutes, seconds, nanos) = t.to_gregorian_utc();

    let (y, m) = match month {
        1 | 2 => (year - 1, month as i32 + 12),
        _ => (year, month as i32),
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let jd = (365.25 * (y + 4716) as f64).trunc()
        + (30.6001 * (m + 1) as f64).trunc()
        + day as f64
        + b as f64
        - 1524.5;

    let seconds = seconds as f64 + nanos as f64 * 1.0E-9;
    jd + (hours as f64 + minutes as f64 / 60.0 + seconds / 3600.0) / 24.0
}

/// Julian centuries elapsed since J2000.0
pub fn julian_centuries(t: Epoch) -> f64 {
    centuries_since_j2000(julian_date(t))
}

fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - Constants::J2000_JD) / Constants::DAYS_PER_JULIAN_CENTURY
}

/// Greenwich Mean Sidereal Time in radians, within [0, 2π[.
pub fn gmst_rad(t: Epoch) -> f64 {
    EarthOrientation::new(t).gmst_rad
}

fn gmst_from_julian_date(jd: f64) -> f64 {
    let t_c = centuries_since_j2000(jd);

    let gmst_deg = 280.46061837
        + 360.98564736629 * (jd - Constants::J2000_JD)
        + 0.000387933 * t_c.powi(2)
        - t_c.powi(3) / 38710000.0;

    gmst_deg.rem_euclid(360.0).to_radians()
}

/// Rotates an inertial (ECI) vector into the Earth fixed frame (ECEF),
/// by -GMST about the polar axis.
pub fn eci_to_ecef(eci: Vector3<f64>, t: Epoch) -> Vector3<f64> {
    EarthOrientation::new(t).eci_to_ecef(eci)
}

/// Time arguments resolved once per [Epoch] and shared by every body
/// evaluated at that instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EarthOrientation {
    /// UTC [Epoch]
    pub epoch: Epoch,
    /// Julian Date
    pub julian_date: f64,
    /// Julian centuries since J2000.0
    pub julian_centuries: f64,
    /// Greenwich Mean Sidereal Time (radians)
    pub gmst_rad: f64,
}

impl EarthOrientation {
    pub fn new(t: Epoch) -> Self {
        let jd = julian_date(t);
        Self {
            epoch: t,
            julian_date: jd,
            julian_centuries: centuries_since_j2000(jd),
            gmst_rad: gmst_from_julian_date(jd),
        }
    }

    /// Rotates an inertial (ECI) vector into the Earth fixed frame (ECEF).
    pub fn eci_to_ecef(&self, eci: Vector3<f64>) -> Vector3<f64> {
        let (sin_theta, cos_theta) = self.gmst_rad.sin_cos();
        Vector3::new(
            cos_theta * eci[0] + sin_theta * eci[1],
            -sin_theta * eci[0] + cos_theta * eci[1],
            eci[2],
        )
    }
}
