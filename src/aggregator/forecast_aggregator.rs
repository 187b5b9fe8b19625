//! Runs refresh cycles: fetch every selected location, derive wind chill, publish.

use crate::aggregator::report::{FetchWarning, ForecastReport, RefreshOutcome};
use crate::error::WindChillError;
use crate::provider::error::ProviderError;
use crate::provider::forecast_provider::ForecastProvider;
use crate::provider::response_cache::{ResponseCache, DEFAULT_TTL};
use crate::types::forecast_config::ForecastConfig;
use crate::types::location::Location;
use crate::types::sample::ForecastSeries;
use bon::bon;
use futures_util::future::join_all;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Orchestrates forecast retrieval for a selection of locations.
///
/// Every call to [`ForecastAggregator::refresh`] is an independent cycle that starts
/// from an empty working set. Only provider responses are reused across cycles,
/// through a read-through [`ResponseCache`].
///
/// Starting a cycle supersedes any cycle still in flight: the older one stops
/// waiting on its fetches and returns [`RefreshOutcome::Superseded`]. A report is
/// only published if no newer cycle has published first, so [`Self::latest`]
/// never goes back in time.
///
/// # Examples
///
/// ```no_run
/// # use windchill::{ForecastAggregator, ForecastConfig, LocationRegistry, OpenMeteoProvider, WindChillError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WindChillError> {
/// let aggregator = ForecastAggregator::builder()
///     .provider(OpenMeteoProvider::builder().build()?)
///     .build();
/// let selection = LocationRegistry::norway().select(["Oslo", "Tromsø"])?;
///
/// let outcome = aggregator.refresh(&selection, &ForecastConfig::default()).await?;
/// if let Some(report) = outcome.report() {
///     for entry in report.ranking() {
///         println!("{}: {:.1} °C", entry.location, entry.wind_chill);
///     }
///     for warning in &report.warnings {
///         eprintln!("{} skipped: {}", warning.location, warning.message);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ForecastAggregator<P> {
    provider: P,
    cache: ResponseCache,
    cycle: AtomicU64,
    in_flight: Mutex<CancellationToken>,
    latest: Mutex<Option<ForecastReport>>,
}

#[bon]
impl<P: ForecastProvider> ForecastAggregator<P> {
    /// * `.provider(P)`: **Required.** Where forecasts come from.
    /// * `.cache_ttl(Duration)`: Optional. How long provider responses are reused,
    ///   defaults to 15 minutes.
    #[builder]
    pub fn new(provider: P, cache_ttl: Option<Duration>) -> Self {
        Self {
            provider,
            cache: ResponseCache::new(cache_ttl.unwrap_or(DEFAULT_TTL)),
            cycle: AtomicU64::new(0),
            in_flight: Mutex::new(CancellationToken::new()),
            latest: Mutex::new(None),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Runs one refresh cycle for `locations`.
    ///
    /// Locations are fetched concurrently. A location whose fetch fails is left out
    /// of every view and reported in [`ForecastReport::warnings`]; the others are
    /// unaffected. Repeated names are fetched once, at their first position.
    ///
    /// # Errors
    ///
    /// Only configuration errors ([`WindChillError::InvalidHorizon`],
    /// [`WindChillError::InvalidThreshold`]), raised before anything is fetched.
    pub async fn refresh(
        &self,
        locations: &[Location],
        config: &ForecastConfig,
    ) -> Result<RefreshOutcome, WindChillError> {
        config.validate()?;

        // The last token installed always belongs to the highest cycle id.
        let token = CancellationToken::new();
        let cycle = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight.cancel();
            *in_flight = token.clone();
            self.cycle.fetch_add(1, Ordering::SeqCst) + 1
        };

        let evicted = self.cache.evict_expired().await;
        if evicted > 0 {
            debug!("Evicted {} expired forecasts before cycle {}", evicted, cycle);
        }

        let mut selection: Vec<&Location> = Vec::with_capacity(locations.len());
        for location in locations {
            if !selection.iter().any(|l| l.name == location.name) {
                selection.push(location);
            }
        }

        let fetches = selection
            .iter()
            .map(|location| self.fetch_series(location, config.horizon_hours));

        let results = tokio::select! {
            biased;
            _ = token.cancelled() => {
                info!("Refresh cycle {} superseded while fetching", cycle);
                return Ok(RefreshOutcome::Superseded { cycle });
            }
            results = join_all(fetches) => results,
        };

        let mut series = Vec::with_capacity(results.len());
        let mut warnings = Vec::new();
        for (location, result) in selection.iter().zip(results) {
            match result {
                Ok(s) => series.push(s),
                Err(e) => {
                    warn!("Dropping {} from cycle {}: {}", location.name, cycle, e);
                    warnings.push(FetchWarning::new(&location.name, &e));
                }
            }
        }

        let report = ForecastReport {
            cycle,
            config: *config,
            series,
            warnings,
        };

        if token.is_cancelled() || !self.publish(&report).await {
            info!("Refresh cycle {} finished after a newer one, discarding", cycle);
            return Ok(RefreshOutcome::Superseded { cycle });
        }

        info!(
            "Refresh cycle {} completed: {} locations, {} warnings",
            cycle,
            report.series.len(),
            report.warnings.len()
        );
        Ok(RefreshOutcome::Completed(report))
    }

    /// The most recently published report, if any cycle has completed.
    pub async fn latest(&self) -> Option<ForecastReport> {
        self.latest.lock().await.clone()
    }

    async fn publish(&self, report: &ForecastReport) -> bool {
        let mut latest = self.latest.lock().await;
        if latest.as_ref().is_some_and(|current| current.cycle > report.cycle) {
            return false;
        }
        *latest = Some(report.clone());
        true
    }

    async fn fetch_series(
        &self,
        location: &Location,
        horizon: usize,
    ) -> Result<ForecastSeries, ProviderError> {
        let lat_lon = location.lat_lon;
        let raw = self
            .cache
            .get_or_fetch(lat_lon, move || async move {
                let raw = self.provider.hourly_forecast(lat_lon).await?;
                // Reject bad payloads before they are cached.
                raw.validate()?;
                Ok(raw)
            })
            .await?;
        raw.into_series(location.clone(), horizon)
    }
}
