//! Hourly samples and the per-location forecast series built from them.

use crate::types::forecast_config::ReferenceHour;
use crate::types::location::Location;
use crate::wind_chill::wind_chill;
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::Serialize;

/// Timestamp layout used by the forecast provider (`timezone=auto`, no offset).
pub const PROVIDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One forecast hour for one location.
///
/// `wind_chill` is derived from `temperature` and `wind_speed` when the sample
/// is constructed and is always defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySample {
    /// ISO-8601 local time as delivered by the provider, e.g. `2025-01-10T14:00`.
    pub time: String,
    /// Air temperature at 2 m (°C).
    pub temperature: f64,
    /// Wind speed at 10 m (km/h).
    pub wind_speed: f64,
    /// Apparent temperature (°C).
    pub wind_chill: f64,
}

impl HourlySample {
    pub fn new(time: impl Into<String>, temperature: f64, wind_speed: f64) -> Self {
        Self {
            time: time.into(),
            temperature,
            wind_speed,
            wind_chill: wind_chill(temperature, wind_speed),
        }
    }

    /// [`Self::time`] as a naive local datetime, see [`parse_provider_time`].
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        parse_provider_time(&self.time)
    }
}

/// Parses a provider timestamp as a naive local datetime. Accepts
/// [`PROVIDER_TIME_FORMAT`] and the same layout with seconds.
pub fn parse_provider_time(time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time, PROVIDER_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// The ordered hourly forecast for one [`Location`], truncated to the requested horizon.
///
/// Samples are in ascending time order. A series is rebuilt from scratch on every
/// refresh cycle and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    pub location: Location,
    pub samples: Vec<HourlySample>,
}

impl ForecastSeries {
    pub fn new(location: Location, samples: Vec<HourlySample>) -> Self {
        Self { location, samples }
    }

    pub fn name(&self) -> &str {
        &self.location.name
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample at the given reference hour, or `None` for an empty series.
    pub fn at(&self, reference: ReferenceHour) -> Option<&HourlySample> {
        match reference {
            ReferenceHour::First => self.samples.first(),
            ReferenceHour::Last => self.samples.last(),
        }
    }

    /// Lowest wind chill anywhere in the series.
    pub fn min_wind_chill(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.wind_chill)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Converts the series into a `DataFrame` with the columns
    /// `time`, `temperature`, `wind_speed`, `wind_chill`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let times: Vec<&str> = self.samples.iter().map(|s| s.time.as_str()).collect();
        let temperatures: Vec<f64> = self.samples.iter().map(|s| s.temperature).collect();
        let wind_speeds: Vec<f64> = self.samples.iter().map(|s| s.wind_speed).collect();
        let wind_chills: Vec<f64> = self.samples.iter().map(|s| s.wind_chill).collect();

        df!(
            "time" => times,
            "temperature" => temperatures,
            "wind_speed" => wind_speeds,
            "wind_chill" => wind_chills,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::LatLon;

    fn series(values: &[(f64, f64)]) -> ForecastSeries {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, (t, v))| HourlySample::new(format!("2025-01-10T{i:02}:00"), *t, *v))
            .collect();
        ForecastSeries::new(Location::new("Bodø", LatLon(67.282, 14.375)), samples)
    }

    #[test]
    fn test_sample_derives_wind_chill() {
        let warm = HourlySample::new("2025-01-10T00:00", 12.0, 30.0);
        assert_eq!(warm.wind_chill, 12.0);

        let cold = HourlySample::new("2025-01-10T01:00", -10.0, 20.0);
        assert!((cold.wind_chill - wind_chill(-10.0, 20.0)).abs() < 1e-12);
    }

    #[test]
    fn test_sample_datetime_parsing() {
        let sample = HourlySample::new("2025-01-10T14:00", 0.0, 0.0);
        let dt = sample.datetime().unwrap();
        assert_eq!(dt.to_string(), "2025-01-10 14:00:00");

        let bad = HourlySample::new("yesterday", 0.0, 0.0);
        assert!(bad.datetime().is_none());
    }

    #[test]
    fn test_reference_hours_and_minimum() {
        let s = series(&[(-2.0, 10.0), (-8.0, 30.0), (1.0, 2.0)]);
        assert_eq!(s.at(ReferenceHour::First).unwrap().time, "2025-01-10T00:00");
        assert_eq!(s.at(ReferenceHour::Last).unwrap().time, "2025-01-10T02:00");
        assert_eq!(s.min_wind_chill(), Some(wind_chill(-8.0, 30.0)));

        let empty = series(&[]);
        assert!(empty.at(ReferenceHour::Last).is_none());
        assert!(empty.min_wind_chill().is_none());
    }

    #[test]
    fn test_to_frame_columns() -> Result<(), PolarsError> {
        let df = series(&[(-2.0, 10.0), (-8.0, 30.0)]).to_frame()?;
        assert_eq!(df.shape(), (2, 4));
        assert_eq!(
            df.get_column_names(),
            ["time", "temperature", "wind_speed", "wind_chill"]
        );
        assert_eq!(df.column("temperature")?.f64()?.get(1), Some(-8.0));
        Ok(())
    }
}
