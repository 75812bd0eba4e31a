//! Timeseries generation settings.
use crate::{
    error::Error,
    prelude::{Duration, Epoch, Unit},
};

use hifitime::TimeSeries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_interval_minutes() -> f64 {
    10.0
}

fn default_n_samples() -> Option<usize> {
    None
}

/// Timeseries [Config]uration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Sampling period, in minutes. Ignored when `n_samples` is defined.
    #[cfg_attr(feature = "serde", serde(default = "default_interval_minutes"))]
    pub interval_minutes: f64,

    /// Number of evenly spaced samples, start and end instants included.
    /// When defined, overrides `interval_minutes`.
    #[cfg_attr(feature = "serde", serde(default = "default_n_samples"))]
    pub n_samples: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
            n_samples: default_n_samples(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with fixed cadence sampling.
    pub fn with_interval_minutes(&self, interval_minutes: f64) -> Self {
        let mut s = *self;
        s.interval_minutes = interval_minutes;
        s.n_samples = None;
        s
    }

    /// Copies and returns [Config] with a fixed number of evenly spaced samples.
    pub fn with_n_samples(&self, n_samples: usize) -> Self {
        let mut s = *self;
        s.n_samples = Some(n_samples);
        s
    }

    /// Resolves the [Sampling] strategy described by this [Config].
    pub fn sampling(&self) -> Result<Sampling, Error> {
        match self.n_samples {
            Some(0) => Err(Error::InvalidSampleCount),
            Some(n) => Ok(Sampling::Samples(n)),
            None => {
                if !self.interval_minutes.is_finite() || self.interval_minutes <= 0.0 {
                    return Err(Error::InvalidInterval);
                }
                Ok(Sampling::Interval(self.interval_minutes * Unit::Minute))
            },
        }
    }
}

/// Timeseries [Sampling] strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    /// Fixed cadence, from start up to the last instant prior or equal to end.
    Interval(Duration),
    /// Exactly n evenly spaced instants, start and end included.
    Samples(usize),
}

impl std::fmt::Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interval(dt) => write!(f, "every {}", dt),
            Self::Samples(n) => write!(f, "{} samples", n),
        }
    }
}

impl Sampling {
    /// Generates the sampling instants, in chronological order.
    pub fn epochs(&self, start: Epoch, end: Epoch) -> Result<Vec<Epoch>, Error> {
        if end < start {
            return Err(Error::InvalidTimeSpan);
        }

        match *self {
            Self::Interval(dt) => {
                if dt <= Duration::ZERO {
                    return Err(Error::InvalidInterval);
                }
                Ok(TimeSeries::inclusive(start, end, dt).collect())
            },
            Self::Samples(0) => Err(Error::InvalidSampleCount),
            Self::Samples(1) => Ok(vec![start]),
            Self::Samples(n) => {
                let step_s = (end - start).to_seconds() / (n - 1) as f64;
                Ok((0..n)
                    .map(|i| start + Duration::from_seconds(i as f64 * step_s))
                    .collect())
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    #[fixture]
    fn start() -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(2025, 3, 20)
    }

    #[rstest]
    fn hourly_day(start: Epoch) {
        let end = start + 1.0 * Unit::Day;
        let sampling = Config::default().with_interval_minutes(60.0).sampling().unwrap();
        let epochs = sampling.epochs(start, end).unwrap();
        assert_eq!(epochs.len(), 25);
        assert_eq!(epochs[0], start);
        assert_eq!(epochs[24], end);
    }

    #[rstest]
    fn last_instant_prior_end(start: Epoch) {
        let end = start + 65.0 * Unit::Minute;
        let epochs = Config::default().sampling().unwrap().epochs(start, end).unwrap();
        assert_eq!(epochs.len(), 7);
        assert_eq!(*epochs.last().unwrap(), start + 60.0 * Unit::Minute);
    }

    #[rstest]
    fn single_instant_span(start: Epoch) {
        let epochs = Config::default().sampling().unwrap().epochs(start, start).unwrap();
        assert_eq!(epochs, vec![start]);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(5, 5)]
    #[case(97, 97)]
    fn evenly_spaced(start: Epoch, #[case] n: usize, #[case] expected: usize) {
        let end = start + 2.0 * Unit::Day;
        let sampling = Config::default().with_n_samples(n).sampling().unwrap();
        let epochs = sampling.epochs(start, end).unwrap();

        assert_eq!(epochs.len(), expected);
        assert_eq!(epochs[0], start);

        if n > 1 {
            let last = *epochs.last().unwrap();
            assert!((last - end).abs() < 1.0 * Unit::Microsecond);
        }

        for pair in epochs.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn zero_samples() {
        let cfg = Config::default().with_n_samples(0);
        assert_eq!(cfg.sampling(), Err(Error::InvalidSampleCount));

        let start = Epoch::from_gregorian_utc_at_midnight(2025, 3, 20);
        assert_eq!(
            Sampling::Samples(0).epochs(start, start),
            Err(Error::InvalidSampleCount)
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn invalid_interval(#[case] minutes: f64) {
        let cfg = Config::default().with_interval_minutes(minutes);
        assert_eq!(cfg.sampling(), Err(Error::InvalidInterval));
    }

    #[rstest]
    fn reversed_span(start: Epoch) {
        let end = start - 1.0 * Unit::Hour;
        for sampling in [Sampling::Interval(1.0 * Unit::Minute), Sampling::Samples(10)] {
            assert_eq!(sampling.epochs(start, end), Err(Error::InvalidTimeSpan));
        }
    }

    #[test]
    fn n_samples_overrides_interval() {
        let cfg = Config {
            interval_minutes: -1.0,
            n_samples: Some(3),
        };
        assert_eq!(cfg.sampling(), Ok(Sampling::Samples(3)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());

        let cfg: Config = serde_json::from_str(r#"{"n_samples": 12}"#).unwrap();
        assert_eq!(cfg.n_samples, Some(12));
        assert_eq!(cfg.interval_minutes, 10.0);
    }
}
