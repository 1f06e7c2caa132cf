//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use std::time::Duration;

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default station endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://weather.willab.fi/weather.json";

/// Default upper bound for one station fetch.
pub const DEFAULT_WEATHER_TIMEOUT_MS: u64 = 10_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Weather station integration.
    pub weather: WeatherConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Weather station configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// JSON endpoint of the station feed.
    pub endpoint: String,

    /// Request timeout in milliseconds, covering connect and body read.
    pub timeout_ms: u64,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_URL.to_string(),
            timeout_ms: DEFAULT_WEATHER_TIMEOUT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Logs nothing, so it can run before the subscriber is installed.
    pub fn from_env() -> Self {
        let mut logging = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tata-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_WEATHER_URL`.
    /// Overrides and rejected values are logged, so install the subscriber
    /// first (see [`LoggingConfig::from_env`]).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_WEATHER_URL") {
            info!("Weather endpoint overridden: {}", url);
            config.weather.endpoint = url;
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) if ms > 0 => config.weather.timeout_ms = ms,
                _ => warn!(
                    "Ignoring invalid MCP_WEATHER_TIMEOUT_MS={:?}, using {} ms",
                    timeout, config.weather.timeout_ms
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_weather_defaults() {
        let config = Config::default();
        assert_eq!(config.weather.endpoint, "https://weather.willab.fi/weather.json");
        assert_eq!(config.weather.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_weather_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WEATHER_URL", "http://127.0.0.1:9999/w.json");
            std::env::set_var("MCP_WEATHER_TIMEOUT_MS", "250");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.endpoint, "http://127.0.0.1:9999/w.json");
        assert_eq!(config.weather.timeout_ms, 250);
        unsafe {
            std::env::remove_var("MCP_WEATHER_URL");
            std::env::remove_var("MCP_WEATHER_TIMEOUT_MS");
        }
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WEATHER_TIMEOUT_MS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.timeout_ms, DEFAULT_WEATHER_TIMEOUT_MS);
        unsafe {
            std::env::remove_var("MCP_WEATHER_TIMEOUT_MS");
        }
    }

    #[test]
    fn test_log_timestamps_toggle() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env();
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_timeout_warning_reaches_subscriber() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        unsafe {
            std::env::set_var("MCP_WEATHER_TIMEOUT_MS", "-5");
        }
        let config = tracing::subscriber::with_default(subscriber, Config::from_env);
        unsafe {
            std::env::remove_var("MCP_WEATHER_TIMEOUT_MS");
        }

        assert_eq!(config.weather.timeout_ms, DEFAULT_WEATHER_TIMEOUT_MS);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("MCP_WEATHER_TIMEOUT_MS"));
    }

    #[test]
    fn test_logging_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let logging = LoggingConfig::from_env();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(logging.level, "debug");
        assert!(logging.with_timestamps);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["weather"]["timeout_ms"], 10_000);
        assert_eq!(json["server"]["name"], "tata-mcp-server");
    }
}
