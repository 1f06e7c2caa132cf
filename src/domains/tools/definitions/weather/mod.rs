//! Linnanmaa weather tool.
//!
//! Fetches the live snapshot from the University of Oulu campus weather
//! station (operated by VTT and Vaisala) and renders it as a text report.
//! Network and decoding problems are reported as ordinary output text so the
//! caller always receives a readable answer.

pub mod client;
pub mod compass;
pub mod reading;

use tracing::{info, instrument, warn};

pub use client::{LinnanmaaClient, WeatherFetchError};
pub use compass::compass_point;
pub use reading::WeatherReading;

use crate::core::config::WeatherConfig;
use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};
use crate::domains::tools::params::NoParams;

/// Weather tool - current conditions at Linnanmaa, Oulu.
pub struct WeatherTool {
    client: LinnanmaaClient,
}

impl WeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_linnanmaa_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch current weather from Linnanmaa Weather Station, Oulu, Finland. Returns real-time temperature, humidity, pressure, wind speed/direction, precipitation and solar radiation from the University of Oulu campus station.";

    pub fn new(config: &WeatherConfig) -> Result<Self, ToolError> {
        Ok(Self::with_client(LinnanmaaClient::new(config)?))
    }

    pub fn with_client(client: LinnanmaaClient) -> Self {
        Self { client }
    }

    /// Fetch a snapshot and render the report, or the failure description.
    #[instrument(skip_all)]
    pub async fn execute(&self) -> String {
        info!("Fetching weather from {}", self.client.endpoint());
        match self.client.fetch().await {
            Ok(reading) => reading.render_report(),
            Err(e) => {
                warn!("Weather fetch failed: {}", e);
                e.to_string()
            }
        }
    }

    pub fn descriptor(config: &WeatherConfig) -> Result<ToolDescriptor, ToolError> {
        Ok(ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::new(config)?))
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherTool {
    type Params = NoParams;

    async fn call(&self, _params: NoParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(self.execute().await)
    }
}
