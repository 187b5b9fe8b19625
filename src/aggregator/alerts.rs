//! Extreme-cold alert evaluation and the notifier seam.

use crate::types::sample::ForecastSeries;
use log::warn;
use serde::Serialize;

/// Names of the locations whose wind chill reaches the threshold at any hour of
/// the horizon, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSet {
    pub threshold: f64,
    pub locations: Vec<String>,
}

impl AlertSet {
    /// A location is included when its minimum wind chill is `<= threshold`.
    pub fn evaluate(series: &[ForecastSeries], threshold: f64) -> Self {
        let locations = series
            .iter()
            .filter(|s| s.min_wind_chill().is_some_and(|min| min <= threshold))
            .map(|s| s.name().to_string())
            .collect();
        Self {
            threshold,
            locations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }
}

/// Delivers extreme-cold alerts somewhere (a log, an inbox, a chat).
///
/// Only called with a non-empty [`AlertSet`]. Delivery failures are the
/// notifier's own concern and never affect the forecast cycle.
pub trait AlertNotifier {
    fn notify(&self, alerts: &AlertSet);
}

/// Writes alerts to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl AlertNotifier for LogNotifier {
    fn notify(&self, alerts: &AlertSet) {
        warn!(
            "Extreme cold alert (wind chill <= {} °C) in: {}",
            alerts.threshold,
            alerts.locations.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::location::{LatLon, Location};
    use crate::types::sample::HourlySample;

    fn series(name: &str, temperatures: &[f64]) -> ForecastSeries {
        let samples = temperatures
            .iter()
            .enumerate()
            .map(|(i, t)| HourlySample::new(format!("2025-01-10T{i:02}:00"), *t, 0.0))
            .collect();
        ForecastSeries::new(Location::new(name, LatLon(60.0, 10.0)), samples)
    }

    #[test]
    fn test_any_hour_triggers() {
        // Only the middle hour is cold enough; the latest sample is mild.
        let input = [series("Alta", &[-5.0, -25.0, -2.0]), series("Oslo", &[-5.0, -6.0])];
        let alerts = AlertSet::evaluate(&input, -20.0);
        assert_eq!(alerts.locations, ["Alta"]);
        assert!(alerts.contains("Alta"));
        assert!(!alerts.contains("Oslo"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let input = [series("Namsos", &[-19.0, -20.0]), series("Levanger", &[-19.99])];
        let alerts = AlertSet::evaluate(&input, -20.0);
        assert_eq!(alerts.locations, ["Namsos"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(AlertSet::evaluate(&[], -20.0).is_empty());
        let alerts = AlertSet::evaluate(&[series("Voss", &[])], 100.0);
        assert!(alerts.is_empty());
    }
}
