//! The result of one refresh cycle and the views derived from it.

use crate::aggregator::alerts::{AlertNotifier, AlertSet};
use crate::aggregator::comparison_table::ComparisonTable;
use crate::aggregator::heatmap::WindChillMatrix;
use crate::aggregator::ranking::{map_markers, rank, MapMarker, RankingEntry};
use crate::error::WindChillError;
use crate::provider::error::{FailureKind, ProviderError};
use crate::types::forecast_config::{ForecastConfig, RankingOrder, ReferenceHour};
use crate::types::sample::ForecastSeries;
use serde::Serialize;
use std::error::Error;

/// A location that was dropped from a cycle because its fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchWarning {
    pub location: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchWarning {
    pub fn new(location: &str, error: &ProviderError) -> Self {
        let message = match error.source() {
            Some(source) => format!("{error}: {source}"),
            None => error.to_string(),
        };
        Self {
            location: location.to_string(),
            kind: error.kind(),
            message,
        }
    }
}

/// Everything one refresh cycle produced.
///
/// `series` holds one entry per successfully fetched location, in selection order.
/// The derived views are computed from `series` on demand and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub cycle: u64,
    pub config: ForecastConfig,
    pub series: Vec<ForecastSeries>,
    pub warnings: Vec<FetchWarning>,
}

impl ForecastReport {
    /// True when no location produced data (including an empty selection).
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_for(&self, location: &str) -> Option<&ForecastSeries> {
        self.series.iter().find(|s| s.name() == location)
    }

    /// Full outer join of all series on timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`WindChillError::DataFrame`] if polars fails to build the join.
    pub fn comparison_table(&self) -> Result<ComparisonTable, WindChillError> {
        Ok(ComparisonTable::build(&self.series)?)
    }

    /// Ranking at the configured reference hour and order.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.ranking_with(self.config.ranking_reference, self.config.ranking_order)
    }

    pub fn ranking_with(&self, reference: ReferenceHour, order: RankingOrder) -> Vec<RankingEntry> {
        rank(&self.series, reference, order)
    }

    pub fn alert_set(&self) -> AlertSet {
        AlertSet::evaluate(&self.series, self.config.alert_threshold)
    }

    pub fn wind_chill_matrix(&self) -> WindChillMatrix {
        WindChillMatrix::from_series(&self.series)
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        map_markers(&self.series, self.config.ranking_reference)
    }

    /// Hands the alert set to `notifier` if it is non-empty. Returns whether the
    /// notifier was called.
    pub fn notify_alerts(&self, notifier: &impl AlertNotifier) -> bool {
        let alerts = self.alert_set();
        if alerts.is_empty() {
            return false;
        }
        notifier.notify(&alerts);
        true
    }
}

/// How a call to [`crate::ForecastAggregator::refresh`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The cycle ran to completion and its report was published.
    Completed(ForecastReport),
    /// A newer cycle started before this one finished; its results were discarded.
    Superseded { cycle: u64 },
}

impl RefreshOutcome {
    pub fn report(&self) -> Option<&ForecastReport> {
        match self {
            RefreshOutcome::Completed(report) => Some(report),
            RefreshOutcome::Superseded { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<ForecastReport> {
        match self {
            RefreshOutcome::Completed(report) => Some(report),
            RefreshOutcome::Superseded { .. } => None,
        }
    }
}
