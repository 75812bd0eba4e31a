use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Evenly spaced timeseries require at least one sample.
    #[error("invalid sample count: n_samples must be >= 1")]
    InvalidSampleCount,

    /// Timeseries end instant is prior its start instant.
    #[error("invalid time span: end is prior start")]
    InvalidTimeSpan,

    /// Fixed cadence sampling requires a strictly positive (and finite) interval,
    /// otherwise the series would never terminate.
    #[error("invalid sampling interval: must be strictly positive")]
    InvalidInterval,
}
