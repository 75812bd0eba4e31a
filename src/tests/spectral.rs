use crate::{
    prelude::{Config, Epoch},
    tests::{init_logger, reference_site},
};

use std::f64::consts::PI;

/// One sided power spectrum |X_k|², k = 0..=n/2, direct DFT
fn power_spectrum(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    (0..=n / 2)
        .map(|k| {
            let (re, im) = signal
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(re, im), (j, x)| {
                    let phase = 2.0 * PI * (j * k) as f64 / n as f64;
                    (re + x * phase.cos(), im - x * phase.sin())
                });
            re.powi(2) + im.powi(2)
        })
        .collect()
}

#[test]
fn tidal_power_in_diurnal_bands() {
    init_logger();

    let start = Epoch::from_gregorian_utc_at_midnight(2025, 3, 20);
    let end = Epoch::from_gregorian_utc_at_midnight(2025, 3, 27);
    let dt_s = 600.0;

    let series = reference_site()
        .compute_timeseries(start, end, &Config::default())
        .unwrap();

    let g_tidal = series.g_tidal();
    let n = g_tidal.len();
    assert_eq!(n, 7 * 144 + 1);

    let mean = g_tidal.iter().sum::<f64>() / n as f64;
    let signal = g_tidal.iter().map(|g| g - mean).collect::<Vec<_>>();

    let power = power_spectrum(&signal);

    let (mut semidiurnal, mut diurnal, mut total) = (0.0, 0.0, 0.0);

    for (k, p) in power.iter().enumerate().skip(1) {
        let period_h = n as f64 * dt_s / k as f64 / 3600.0;
        if period_h > 11.0 && period_h < 13.0 {
            semidiurnal += p;
        } else if period_h > 23.0 && period_h < 26.0 {
            diurnal += p;
        }
        total += p;
    }

    let ratio = (semidiurnal + diurnal) / total;
    assert!(ratio > 0.5, "tidal band power ratio: {}", ratio);
}
