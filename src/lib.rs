#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

pub mod cfg;
pub mod constants;
pub mod enu;
pub mod ephemeris;
pub mod gravity;
pub mod position;
pub mod site;
pub mod solutions;
pub mod tides;
pub mod time;

mod error;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Sampling};
    pub use crate::constants::Constants;
    pub use crate::enu::{enu_basis, measurement_axis, EnuBasis};
    pub use crate::ephemeris::{
        moon_position_ecef, sun_position_ecef, EclipticPosition, EphemerisSource, Moon, Sun,
    };
    pub use crate::error::Error;
    pub use crate::gravity::normal_gravity;
    pub use crate::position::{ecef_to_geodetic, geodetic_to_ecef, Position};
    pub use crate::site::{compute_g, Site};
    pub use crate::solutions::{TidalSample, Timeseries};
    pub use crate::tides::tidal_acceleration;
    pub use crate::time::{eci_to_ecef, gmst_rad, julian_centuries, julian_date, EarthOrientation};
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
