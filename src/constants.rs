//! Physical constants shared by every model of this crate.

/// Physical [Constants]: GRS80 ellipsoid, gravitational parameters,
/// astronomical and elastic Earth parameters.
pub struct Constants;

impl Constants {
    /// Moon gravitational constant (m^3 s-2, DE430)
    pub const MOON_GRAVITATION_MU_M3_S2: f64 = 4.9028695E12;

    /// Sun gravitational constant (m^3 s-2, DE430)
    pub const SUN_GRAVITATION_MU_M3_S2: f64 = 1.32712440018E20;

    /// Earth gravitational constant (m^3 s-2, GRS80)
    pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

    /// Earth angular velocity (rad/s)
    pub const EARTH_ANGULAR_VEL_RAD_S: f64 = 7.292115E-5;

    /// GRS80 semi-major axis (meters)
    pub const GRS80_SEMI_MAJOR_AXIS_M: f64 = 6378137.0;

    /// GRS80 flattening
    pub const GRS80_FLATTENING: f64 = 1.0 / 298.257222101;

    /// GRS80 semi-minor axis (meters)
    pub const GRS80_SEMI_MINOR_AXIS_M: f64 =
        Self::GRS80_SEMI_MAJOR_AXIS_M * (1.0 - Self::GRS80_FLATTENING);

    /// GRS80 first eccentricity squared
    pub const GRS80_ECCENTRICITY_SQUARED: f64 =
        2.0 * Self::GRS80_FLATTENING - Self::GRS80_FLATTENING * Self::GRS80_FLATTENING;

    /// Normal gravity on the equator (m s-2)
    pub const EQUATORIAL_GRAVITY_M_S2: f64 = 9.7803253141;

    /// Normal gravity at the poles (m s-2)
    pub const POLAR_GRAVITY_M_S2: f64 = 9.8321849378;

    /// Somigliana constant k = (b.γp)/(a.γe) - 1
    pub const SOMIGLIANA_K: f64 = (Self::GRS80_SEMI_MINOR_AXIS_M * Self::POLAR_GRAVITY_M_S2)
        / (Self::GRS80_SEMI_MAJOR_AXIS_M * Self::EQUATORIAL_GRAVITY_M_S2)
        - 1.0;

    /// Centrifugal to gravitational ratio on the equator, m = ω².a².b/GM
    pub const GRAVITY_RATIO_M: f64 = Self::EARTH_ANGULAR_VEL_RAD_S
        * Self::EARTH_ANGULAR_VEL_RAD_S
        * Self::GRS80_SEMI_MAJOR_AXIS_M
        * Self::GRS80_SEMI_MAJOR_AXIS_M
        * Self::GRS80_SEMI_MINOR_AXIS_M
        / Self::EARTH_GRAVITATION_MU_M3_S2;

    /// Astronomical unit (meters)
    pub const ASTRONOMICAL_UNIT_M: f64 = 1.495978707E11;

    /// Mean obliquity of the ecliptic at J2000 (degrees)
    pub const OBLIQUITY_J2000_DEG: f64 = 23.439291;

    /// Julian Date of the J2000.0 epoch
    pub const J2000_JD: f64 = 2451545.0;

    /// Days per Julian century
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

    /// Love degree^2 term (h2, IERS 2010)
    pub const LOVE_DEGREE2: f64 = 0.6078;

    /// Potential Love degree^2 term (k2, IERS 2010)
    pub const POTENTIAL_LOVE_DEGREE2: f64 = 0.2980;

    /// Gravimetric factor δ = 1 + h2 - 3/2 k2, amplification
    /// of the tidal gravity signal by an elastic Earth.
    pub const GRAVIMETRIC_FACTOR: f64 =
        1.0 + Self::LOVE_DEGREE2 - 1.5 * Self::POTENTIAL_LOVE_DEGREE2;
}
