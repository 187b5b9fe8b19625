//! Read-through cache of provider responses keyed by coordinate.

use crate::provider::error::ProviderError;
use crate::provider::forecast_provider::RawForecast;
use crate::types::location::LatLon;
use log::{debug, info};
use ordered_float::OrderedFloat;
use std::collections::{hash_map::Entry, HashMap};
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// How long a cached response stays fresh when nothing else is configured.
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

type CacheKey = (OrderedFloat<f64>, OrderedFloat<f64>);

struct CachedResponse {
    fetched_at: Instant,
    forecast: RawForecast,
}

/// Keeps successful provider responses for a fixed time-to-live.
///
/// Failures are never cached, so a failed location is retried on the next
/// refresh cycle.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CachedResponse>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(lat_lon: LatLon) -> CacheKey {
        (OrderedFloat(lat_lon.0), OrderedFloat(lat_lon.1))
    }

    fn is_fresh(&self, entry: &CachedResponse, now: Instant) -> bool {
        now.duration_since(entry.fetched_at) < self.ttl
    }

    /// Returns the cached response for `lat_lon` if it is still fresh, otherwise
    /// runs `fetch` and caches its successful result.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        lat_lon: LatLon,
        fetch: F,
    ) -> Result<RawForecast, ProviderError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<RawForecast, ProviderError>>,
    {
        let key = Self::key(lat_lon);

        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&key) {
                if self.is_fresh(entry, Instant::now()) {
                    debug!("Cache hit for forecast at {:?}", lat_lon);
                    return Ok(entry.forecast.clone());
                }
            }
        }

        info!("Cache miss for forecast at {:?}, fetching", lat_lon);
        // Fetch outside the lock so other coordinates are not blocked.
        let forecast = fetch().await?;

        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        match entries.entry(key) {
            Entry::Occupied(mut entry) => {
                // A concurrent fetch for the same coordinate may have landed first.
                if self.is_fresh(entry.get(), now) {
                    return Ok(entry.get().forecast.clone());
                }
                entry.insert(CachedResponse {
                    fetched_at: now,
                    forecast: forecast.clone(),
                });
                Ok(forecast)
            }
            Entry::Vacant(entry) => {
                entry.insert(CachedResponse {
                    fetched_at: now,
                    forecast: forecast.clone(),
                });
                Ok(forecast)
            }
        }
    }

    /// Drops entries whose time-to-live has passed.
    pub async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.fetched_at) < self.ttl);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
