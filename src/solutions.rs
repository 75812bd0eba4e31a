//! g(t) samples and timeseries.
use crate::prelude::Epoch;

use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [TidalSample] is the gravitational acceleration projected onto the
/// measurement axis at one instant, and its decomposition. All values in m s-2.
/// g_total = g_static + g_tidal and g_tidal = g_tidal_moon + g_tidal_sun.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TidalSample {
    /// Total acceleration on the measurement axis
    pub g_total: f64,
    /// Normal gravity contribution
    pub g_static: f64,
    /// Elastic Earth tidal perturbation (Moon + Sun)
    pub g_tidal: f64,
    /// Lunar tidal contribution
    pub g_tidal_moon: f64,
    /// Solar tidal contribution
    pub g_tidal_sun: f64,
}

impl TidalSample {
    pub(crate) fn new(g_static: f64, g_tidal_moon: f64, g_tidal_sun: f64) -> Self {
        let g_tidal = g_tidal_moon + g_tidal_sun;
        Self {
            g_total: g_static + g_tidal,
            g_static,
            g_tidal,
            g_tidal_moon,
            g_tidal_sun,
        }
    }
}

impl std::fmt::Display for TidalSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "g={:.10} m.s⁻² (tidal={:.4} µm.s⁻², moon={:.4} µm.s⁻², sun={:.4} µm.s⁻²)",
            self.g_total,
            self.g_tidal * 1.0E6,
            self.g_tidal_moon * 1.0E6,
            self.g_tidal_sun * 1.0E6,
        )
    }
}

/// Chronologically ordered [TidalSample]s at a fixed site.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timeseries {
    samples: Vec<(Epoch, TidalSample)>,
}

impl FromIterator<(Epoch, TidalSample)> for Timeseries {
    fn from_iter<I: IntoIterator<Item = (Epoch, TidalSample)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Timeseries {
    type Item = (Epoch, TidalSample);
    type IntoIter = std::vec::IntoIter<(Epoch, TidalSample)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeseries {
    type Item = &'a (Epoch, TidalSample);
    type IntoIter = std::slice::Iter<'a, (Epoch, TidalSample)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl Timeseries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if this [Timeseries] holds no sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates (instant, sample) pairs chronologically
    pub fn iter(&self) -> std::slice::Iter<'_, (Epoch, TidalSample)> {
        self.samples.iter()
    }

    /// Sampling instants
    pub fn epochs(&self) -> Vec<Epoch> {
        self.samples.iter().map(|(t, _)| *t).collect()
    }

    /// Total acceleration column (m s-2)
    pub fn g_total(&self) -> Vec<f64> {
        self.column(|s| s.g_total)
    }

    /// Tidal perturbation column (m s-2)
    pub fn g_tidal(&self) -> Vec<f64> {
        self.column(|s| s.g_tidal)
    }

    /// Lunar tidal column (m s-2)
    pub fn g_tidal_moon(&self) -> Vec<f64> {
        self.column(|s| s.g_tidal_moon)
    }

    /// Solar tidal column (m s-2)
    pub fn g_tidal_sun(&self) -> Vec<f64> {
        self.column(|s| s.g_tidal_sun)
    }

    /// Static gravity on the measurement axis, common to all samples.
    pub fn g_static(&self) -> Option<f64> {
        self.samples.first().map(|(_, s)| s.g_static)
    }

    /// Peak to peak amplitude of the tidal perturbation (m s-2)
    pub fn tidal_peak_to_peak(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|(_, s)| s.g_tidal)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .map(|(min, max)| max - min)
    }

    /// Standard deviation of the tidal perturbation (m s-2)
    pub fn tidal_rms(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let n = self.samples.len() as f64;
        let mean = self.samples.iter().map(|(_, s)| s.g_tidal).sum::<f64>() / n;
        let var = self
            .samples
            .iter()
            .map(|(_, s)| (s.g_tidal - mean).powi(2))
            .sum::<f64>()
            / n;
        Some(var.sqrt())
    }

    /// (min, max) of the total acceleration (m s-2)
    pub fn g_total_range(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .map(|(_, s)| s.g_total)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }

    fn column<F: Fn(&TidalSample) -> f64>(&self, f: F) -> Vec<f64> {
        self.samples.iter().map(|(_, s)| f(s)).collect()
    }
}
