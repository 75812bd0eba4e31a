use crate::prelude::Vector3;

/// Exact Newtonian tidal acceleration (m s-2) exerted by a perturbing body
/// on an observer, relative to the Earth center:
///
///   GM [ (R - r) / |R - r|³ - R / |R|³ ]
///
/// - `observer_ecef_m`: observer position r (ECEF, meters)
/// - `body_ecef_m`: perturbing body position R (ECEF, meters)
/// - `gm_m3_s2`: body gravitational parameter
///
/// No multipole expansion is involved: this holds at any distance,
/// as long as |R - r| and |R| are not zero.
pub fn tidal_acceleration(
    observer_ecef_m: Vector3<f64>,
    body_ecef_m: Vector3<f64>,
    gm_m3_s2: f64,
) -> Vector3<f64> {
    let d = body_ecef_m - observer_ecef_m;
    gm_m3_s2 * (d / d.norm().powi(3) - body_ecef_m / body_ecef_m.norm().powi(3))
}
