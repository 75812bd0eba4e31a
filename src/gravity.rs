//! Normal (static) gravity of the GRS80 ellipsoid.
use crate::constants::Constants;

/// GRS80 normal gravity (m s-2) at geodetic latitude `lat_deg` and altitude `alt_m`
/// above the ellipsoid. Somigliana closed form on the ellipsoid, followed by a
/// second order free-air correction (Taylor expansion in h/a).
pub fn normal_gravity(lat_deg: f64, alt_m: f64) -> f64 {
    let a = Constants::GRS80_SEMI_MAJOR_AXIS_M;
    let f = Constants::GRS80_FLATTENING;
    let m = Constants::GRAVITY_RATIO_M;

    let sin2_phi = lat_deg.to_radians().sin().powi(2);

    let gamma_0 = Constants::EQUATORIAL_GRAVITY_M_S2 * (1.0 + Constants::SOMIGLIANA_K * sin2_phi)
        / (1.0 - Constants::GRS80_ECCENTRICITY_SQUARED * sin2_phi).sqrt();

    let fac = 1.0 + f + m - 2.0 * f * sin2_phi;

    gamma_0 * (1.0 - 2.0 * fac * alt_m / a + 3.0 * alt_m.powi(2) / a.powi(2))
}

#[cfg(test)]
mod test {
    use super::normal_gravity;
    use rstest::*;

    #[test]
    fn equator_sea_level() {
        assert!((normal_gravity(0.0, 0.0) - 9.7803).abs() < 1.0E-3);
    }

    #[rstest]
    #[case(90.0)]
    #[case(-90.0)]
    fn poles_sea_level(#[case] lat_deg: f64) {
        assert!((normal_gravity(lat_deg, 0.0) - 9.8322).abs() < 1.0E-3);
    }

    #[test]
    fn somigliana_reference_values() {
        assert!((normal_gravity(0.0, 0.0) - 9.7803253141).abs() < 1.0E-9);
        assert!((normal_gravity(90.0, 0.0) - 9.8321849378).abs() < 1.0E-9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(500.0)]
    #[case(10_000.0)]
    fn latitude_monotonic(#[case] alt_m: f64) {
        let g = (0..=90)
            .step_by(5)
            .map(|lat| normal_gravity(lat as f64, alt_m))
            .collect::<Vec<_>>();

        for pair in g.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(45.0)]
    #[case(-70.0)]
    fn altitude_monotonic(#[case] lat_deg: f64) {
        let g = [-400.0, 0.0, 1.0, 500.0, 1000.0, 5000.0, 10_000.0]
            .iter()
            .map(|h| normal_gravity(lat_deg, *h))
            .collect::<Vec<_>>();

        for pair in g.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn free_air_gradient() {
        let g0 = normal_gravity(45.0, 0.0);
        let g1 = normal_gravity(45.0, 1.0);
        let gradient = (g1 - g0) * 1.0E6; // µm.s⁻² per meter
        assert!((gradient - -3.086).abs() < 0.05, "gradient={}", gradient);
    }

    #[test]
    fn hemispheric_symmetry() {
        for lat in [10.0, 33.3, 60.0, 89.0] {
            assert_eq!(normal_gravity(lat, 100.0), normal_gravity(-lat, 100.0));
        }
    }
}
