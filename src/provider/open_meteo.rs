//! HTTP client for the Open-Meteo hourly forecast endpoint.

use crate::provider::error::ProviderError;
use crate::provider::forecast_provider::{ForecastProvider, RawForecast};
use crate::types::location::LatLon;
use bon::bon;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const HOURLY_VARIABLES: &str = "temperature_2m,windspeed_10m";

/// Fetches hourly forecasts from Open-Meteo (no API key required).
///
/// Requests use `timezone=auto`, so timestamps are local to the location.
/// TLS certificates are always verified.
///
/// # Examples
///
/// ```no_run
/// # use windchill::{OpenMeteoProvider, ForecastProvider, LatLon, ProviderError};
/// # use std::time::Duration;
/// # #[tokio::main]
/// # async fn main() -> Result<(), ProviderError> {
/// let provider = OpenMeteoProvider::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// let raw = provider.hourly_forecast(LatLon(69.65, 18.96)).await?;
/// println!("{} hours for Tromsø", raw.hourly.time.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    client: Client,
    base_url: String,
}

#[bon]
impl OpenMeteoProvider {
    /// Creates a provider.
    ///
    /// * `.base_url(String)`: Optional. Forecast endpoint, defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout(Duration)`: Optional. Whole-request timeout, defaults to 15 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ProviderError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn forecast_url(&self, lat_lon: LatLon) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone=auto",
            self.base_url,
            lat_lon.latitude(),
            lat_lon.longitude(),
            HOURLY_VARIABLES
        )
    }
}

impl ForecastProvider for OpenMeteoProvider {
    async fn hourly_forecast(&self, lat_lon: LatLon) -> Result<RawForecast, ProviderError> {
        let url = self.forecast_url(lat_lon);
        debug!("Requesting forecast from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        serde_json::from_slice::<RawForecast>(&body)
            .map_err(|source| ProviderError::MalformedPayload { url, source })
    }
}
