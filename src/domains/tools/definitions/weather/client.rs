//! HTTP client for the Linnanmaa weather station feed.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument};

use super::reading::WeatherReading;
use crate::core::config::WeatherConfig;
use crate::domains::tools::error::ToolError;

/// Why a fetch did not produce a reading.
///
/// The Display text is what the tool returns to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherFetchError {
    /// Connection failure, timeout or non-success HTTP status.
    #[error("Error fetching weather data from Linnanmaa station: {0}")]
    Network(String),

    /// The body was not a station payload.
    #[error("Unexpected error: {0}")]
    Decode(String),
}

/// Fetches snapshots from the station endpoint, one GET per call.
#[derive(Debug, Clone)]
pub struct LinnanmaaClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

/// Client builder with the configured timeout and user agent.
pub fn http_builder(config: &WeatherConfig) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
}

impl LinnanmaaClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, ToolError> {
        let http = http_builder(config)
            .build()
            .map_err(|e| ToolError::internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(http, config))
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, config: &WeatherConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode one snapshot.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<WeatherReading, WeatherFetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.network_error(&e))?;

        let response = response
            .error_for_status()
            .map_err(|e| self.network_error(&e))?;

        let body = response.text().await.map_err(|e| self.network_error(&e))?;
        debug!("Received {} bytes from weather station", body.len());

        WeatherReading::from_json(&body).map_err(|e| WeatherFetchError::Decode(e.to_string()))
    }

    fn network_error(&self, err: &reqwest::Error) -> WeatherFetchError {
        if err.is_timeout() {
            return WeatherFetchError::Network(format!(
                "request timed out after {} ms",
                self.timeout.as_millis()
            ));
        }

        let mut detail = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        WeatherFetchError::Network(detail)
    }
}
