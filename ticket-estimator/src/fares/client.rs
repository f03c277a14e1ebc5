//! Pricing service HTTP client.
//!
//! Fetches the unadjusted base fare for a route and departure time.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::pricing::FareProvider;

use super::error::FareApiError;
use super::types::PriceResponse;

/// Default base URL for the pricing service.
const DEFAULT_BASE_URL: &str = "https://sncftrenitaliadb.com";

/// Path of the price estimate endpoint, relative to the base URL.
const PRICE_PATH: &str = "/api/train/estimate/price";

/// Configuration for the pricing client.
#[derive(Debug, Clone)]
pub struct FareClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FareClientConfig {
    /// Create a config pointing at the production pricing service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FareClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the base fare pricing service.
#[derive(Debug, Clone)]
pub struct FareClient {
    http: reqwest::Client,
    base_url: String,
}

impl FareClient {
    /// Create a new pricing client.
    pub fn new(config: FareClientConfig) -> Result<Self, FareApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the base fare for a route departing at `departure`.
    ///
    /// The date is sent as an ISO 8601 local date-time.
    pub async fn fetch_price(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDateTime,
    ) -> Result<f64, FareApiError> {
        let url = format!("{}{}", self.base_url, PRICE_PATH);
        let date = departure.format("%Y-%m-%dT%H:%M:%S").to_string();

        debug!(origin, destination, date = %date, "fetching base fare");

        let response = self
            .http
            .get(&url)
            .query(&[("from", origin), ("to", destination), ("date", date.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "pricing service returned error status");
            return Err(FareApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PriceResponse =
            serde_json::from_str(&body).map_err(|e| FareApiError::Json {
                message: e.to_string(),
            })?;

        parsed.base_fare()
    }
}

impl FareProvider for FareClient {
    async fn base_fare(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDateTime,
    ) -> Result<f64, FareApiError> {
        self.fetch_price(origin, destination, departure).await
    }
}
