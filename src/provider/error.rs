use serde::Serialize;
use thiserror::Error;

/// How a failed per-location fetch is reported to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// Network error, timeout or non-2xx response.
    ProviderUnavailable,
    /// The response did not have the expected shape.
    MalformedPayload,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse forecast payload from {url}")]
    MalformedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Hourly arrays differ in length: time={times}, temperature_2m={temperatures}, windspeed_10m={wind_speeds}")]
    LengthMismatch {
        times: usize,
        temperatures: usize,
        wind_speeds: usize,
    },

    #[error("Hourly time at index {index} ('{time}') is not a valid timestamp")]
    InvalidTime { index: usize, time: String },

    #[error("Hourly times are not in ascending order at index {index} ('{time}')")]
    UnorderedTimes { index: usize, time: String },
}

impl ProviderError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProviderError::ClientBuild(_)
            | ProviderError::NetworkRequest(..)
            | ProviderError::HttpStatus { .. } => FailureKind::ProviderUnavailable,
            ProviderError::MalformedPayload { .. }
            | ProviderError::LengthMismatch { .. }
            | ProviderError::InvalidTime { .. }
            | ProviderError::UnorderedTimes { .. } => FailureKind::MalformedPayload,
        }
    }
}
