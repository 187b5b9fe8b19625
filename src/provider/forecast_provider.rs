//! The provider seam: raw hourly payloads and the trait that fetches them.

use crate::provider::error::ProviderError;
use crate::types::location::{LatLon, Location};
use crate::types::sample::{parse_provider_time, ForecastSeries, HourlySample};
use serde::Deserialize;
use std::future::Future;

/// The `hourly` block of a forecast response: parallel arrays, one entry per hour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyForecast {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub windspeed_10m: Vec<f64>,
}

/// A forecast response as delivered by the provider, before any derivation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecast {
    pub hourly: HourlyForecast,
}

impl RawForecast {
    /// Checks that the parallel arrays have equal length and that times are valid
    /// timestamps in strictly ascending order.
    ///
    /// # Errors
    ///
    /// [`ProviderError::LengthMismatch`] if the arrays differ in length,
    /// [`ProviderError::InvalidTime`] for an unparseable timestamp,
    /// [`ProviderError::UnorderedTimes`] if times are not strictly ascending.
    pub fn validate(&self) -> Result<(), ProviderError> {
        let hourly = &self.hourly;
        if hourly.time.len() != hourly.temperature_2m.len()
            || hourly.time.len() != hourly.windspeed_10m.len()
        {
            return Err(ProviderError::LengthMismatch {
                times: hourly.time.len(),
                temperatures: hourly.temperature_2m.len(),
                wind_speeds: hourly.windspeed_10m.len(),
            });
        }

        let mut previous = None;
        for (index, time) in hourly.time.iter().enumerate() {
            let parsed = parse_provider_time(time).ok_or_else(|| ProviderError::InvalidTime {
                index,
                time: time.clone(),
            })?;
            if previous.is_some_and(|p| p >= parsed) {
                return Err(ProviderError::UnorderedTimes {
                    index,
                    time: time.clone(),
                });
            }
            previous = Some(parsed);
        }
        Ok(())
    }

    /// Validates the payload, keeps the first `horizon` hours and derives wind
    /// chill for each of them.
    ///
    /// Fewer hours than `horizon` are kept as-is; nothing is padded.
    ///
    /// # Errors
    ///
    /// See [`RawForecast::validate`].
    pub fn into_series(
        self,
        location: Location,
        horizon: usize,
    ) -> Result<ForecastSeries, ProviderError> {
        self.validate()?;
        let HourlyForecast {
            time,
            temperature_2m,
            windspeed_10m,
        } = self.hourly;

        let samples = time
            .into_iter()
            .zip(temperature_2m)
            .zip(windspeed_10m)
            .take(horizon)
            .map(|((time, temperature), wind_speed)| {
                HourlySample::new(time, temperature, wind_speed)
            })
            .collect();

        Ok(ForecastSeries::new(location, samples))
    }
}

/// Source of hourly forecasts for a coordinate.
///
/// [`crate::OpenMeteoProvider`] is the production implementation; tests plug in
/// in-memory providers.
pub trait ForecastProvider {
    /// Fetches the hourly temperature and wind-speed forecast at `lat_lon`.
    /// A single attempt; no retries.
    fn hourly_forecast(
        &self,
        lat_lon: LatLon,
    ) -> impl Future<Output = Result<RawForecast, ProviderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(times: &[&str], temps: &[f64], winds: &[f64]) -> RawForecast {
        RawForecast {
            hourly: HourlyForecast {
                time: times.iter().map(|t| t.to_string()).collect(),
                temperature_2m: temps.to_vec(),
                windspeed_10m: winds.to_vec(),
            },
        }
    }

    fn oslo() -> Location {
        Location::new("Oslo", LatLon(59.91, 10.75))
    }

    #[test]
    fn test_truncates_to_horizon() {
        let payload = raw(
            &["2025-01-10T00:00", "2025-01-10T01:00", "2025-01-10T02:00"],
            &[-1.0, -2.0, -3.0],
            &[10.0, 12.0, 14.0],
        );
        let series = payload.into_series(oslo(), 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples[1].time, "2025-01-10T01:00");
    }

    #[test]
    fn test_short_payload_is_not_padded() {
        let payload = raw(&["2025-01-10T00:00"], &[-1.0], &[10.0]);
        let series = payload.into_series(oslo(), 24).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let payload = raw(
            &["2025-01-10T00:00", "2025-01-10T01:00"],
            &[-1.0, -2.0],
            &[10.0],
        );
        let err = payload.into_series(oslo(), 24).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::LengthMismatch {
                times: 2,
                temperatures: 2,
                wind_speeds: 1
            }
        ));
    }

    #[test]
    fn test_unordered_times_are_rejected() {
        let payload = raw(
            &["2025-01-10T01:00", "2025-01-10T00:00"],
            &[-1.0, -2.0],
            &[10.0, 10.0],
        );
        let err = payload.into_series(oslo(), 24).unwrap_err();
        assert!(matches!(err, ProviderError::UnorderedTimes { index: 1, .. }));
    }

    #[test]
    fn test_times_are_compared_chronologically() {
        // Ascending as strings, but the same instant.
        let payload = raw(
            &["2025-01-10T00:00", "2025-01-10T00:00:00"],
            &[-1.0, -2.0],
            &[10.0, 10.0],
        );
        let err = payload.validate().unwrap_err();
        assert!(matches!(err, ProviderError::UnorderedTimes { index: 1, .. }));

        let mixed = raw(
            &["2025-01-10T00:00", "2025-01-10T00:30:00", "2025-01-10T01:00"],
            &[-1.0, -2.0, -3.0],
            &[10.0, 10.0, 10.0],
        );
        assert!(mixed.validate().is_ok());
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let payload = raw(&["2025-01-10T00:00", "tomorrow"], &[-1.0, -2.0], &[10.0, 10.0]);
        let err = payload.into_series(oslo(), 24).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidTime { index: 1, ref time } if time == "tomorrow"
        ));
        assert_eq!(err.kind(), crate::FailureKind::MalformedPayload);
    }

    #[test]
    fn test_deserializes_provider_shape() {
        let json = r#"{
            "latitude": 59.9,
            "longitude": 10.75,
            "timezone": "Europe/Oslo",
            "hourly_units": {"time": "iso8601", "temperature_2m": "°C", "windspeed_10m": "km/h"},
            "hourly": {
                "time": ["2025-01-10T00:00", "2025-01-10T01:00"],
                "temperature_2m": [-4.2, -5.0],
                "windspeed_10m": [11.5, 13.0]
            }
        }"#;
        let payload: RawForecast = serde_json::from_str(json).unwrap();
        assert_eq!(payload.hourly.time.len(), 2);
        assert_eq!(payload.hourly.windspeed_10m[1], 13.0);
    }
}
