//! Per-cycle forecast settings and their validation.

use crate::error::WindChillError;
use bon::Builder;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Hours of forecast requested when nothing else is configured.
pub const DEFAULT_HORIZON_HOURS: usize = 24;
/// Accepted forecast horizons, in hours.
pub const HORIZON_RANGE: RangeInclusive<usize> = 12..=72;
/// Default extreme-cold threshold (°C).
pub const DEFAULT_ALERT_THRESHOLD: f64 = -20.0;
/// Accepted alert thresholds (°C).
pub const ALERT_THRESHOLD_RANGE: RangeInclusive<f64> = -80.0..=20.0;

/// Which hour of each series a ranking (or a map marker) is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ReferenceHour {
    /// The first hour of the horizon ("now").
    First,
    /// The last hour of the horizon.
    #[default]
    Last,
}

/// Sort direction of a ranking by wind chill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RankingOrder {
    /// Coldest first.
    #[default]
    Ascending,
    /// Warmest first.
    Descending,
}

/// Settings for one refresh cycle.
///
/// Built with a builder; unset fields take their defaults.
///
/// # Examples
///
/// ```
/// use windchill::{ForecastConfig, ReferenceHour};
///
/// let config = ForecastConfig::builder()
///     .horizon_hours(48)
///     .alert_threshold(-15.0)
///     .ranking_reference(ReferenceHour::First)
///     .build();
/// assert!(config.validate().is_ok());
///
/// let too_long = ForecastConfig::builder().horizon_hours(500).build();
/// assert!(too_long.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize)]
pub struct ForecastConfig {
    /// Number of hourly samples kept per location.
    #[builder(default = DEFAULT_HORIZON_HOURS)]
    pub horizon_hours: usize,
    /// A location alerts when its wind chill reaches this value (°C, inclusive).
    #[builder(default = DEFAULT_ALERT_THRESHOLD)]
    pub alert_threshold: f64,
    #[builder(default)]
    pub ranking_reference: ReferenceHour,
    #[builder(default)]
    pub ranking_order: RankingOrder,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ForecastConfig {
    /// Checks horizon and threshold against their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`WindChillError::InvalidHorizon`] or [`WindChillError::InvalidThreshold`].
    pub fn validate(&self) -> Result<(), WindChillError> {
        if !HORIZON_RANGE.contains(&self.horizon_hours) {
            return Err(WindChillError::InvalidHorizon {
                horizon: self.horizon_hours,
                min: *HORIZON_RANGE.start(),
                max: *HORIZON_RANGE.end(),
            });
        }
        // NaN fails `contains`, which is what we want.
        if !ALERT_THRESHOLD_RANGE.contains(&self.alert_threshold) {
            return Err(WindChillError::InvalidThreshold {
                threshold: self.alert_threshold,
                min: *ALERT_THRESHOLD_RANGE.start(),
                max: *ALERT_THRESHOLD_RANGE.end(),
            });
        }
        Ok(())
    }
}
