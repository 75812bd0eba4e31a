mod spectral;

use crate::prelude::{Epoch, Site};

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference site (48.14°N, 11.58°E, 500 m), vertical axis
pub const REFERENCE_COORDS_GEO: (f64, f64, f64) = (48.14, 11.58, 500.0);

/// Reference [Site], vertical measurement axis
pub fn reference_site() -> Site {
    let (lat, lon, alt) = REFERENCE_COORDS_GEO;
    Site::new(lat, lon, alt)
}

/// Reference [Epoch]: 2025 March equinox, 12:00 UTC
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2025, 3, 20, 12, 0, 0)
}
