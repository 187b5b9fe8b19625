mod aggregator;
mod error;
mod export;
mod locations;
mod provider;
mod types;
mod views;
mod wind_chill;

pub use error::WindChillError;
pub use wind_chill::{wind_chill, MAX_WIND_CHILL_TEMPERATURE, MIN_WIND_CHILL_SPEED};

pub use types::cold_band::ColdBand;
pub use types::forecast_config::*;
pub use types::location::{LatLon, Location};
pub use types::sample::{parse_provider_time, ForecastSeries, HourlySample, PROVIDER_TIME_FORMAT};

pub use locations::registry::LocationRegistry;

pub use provider::error::{FailureKind, ProviderError};
pub use provider::forecast_provider::{ForecastProvider, HourlyForecast, RawForecast};
pub use provider::open_meteo::OpenMeteoProvider;
pub use provider::response_cache::ResponseCache;

pub use aggregator::alerts::{AlertNotifier, AlertSet, LogNotifier};
pub use aggregator::comparison_table::{temperature_column, wind_chill_column, ComparisonTable};
pub use aggregator::forecast_aggregator::ForecastAggregator;
pub use aggregator::heatmap::{MatrixRow, WindChillMatrix};
pub use aggregator::ranking::{map_markers, rank, MapMarker, RankingEntry};
pub use aggregator::report::{FetchWarning, ForecastReport, RefreshOutcome};

pub use views::*;
