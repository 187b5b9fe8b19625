use crate::provider::error::ProviderError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindChillError {
    #[error("Forecast horizon of {horizon} hours is outside the accepted range {min}..={max}")]
    InvalidHorizon {
        horizon: usize,
        min: usize,
        max: usize,
    },

    #[error("Alert threshold {threshold} °C is outside the accepted range {min}..={max}")]
    InvalidThreshold { threshold: f64, min: f64, max: f64 },

    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("Location '{0}' is defined more than once")]
    DuplicateLocation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Failed to write export file '{0}'")]
    ExportIo(PathBuf, #[source] std::io::Error),
}
