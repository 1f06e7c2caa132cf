//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the tool catalog and
//! runs the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use tata_mcp_server::core::{Config, LoggingConfig, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so configuration warnings are not lost
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env());

    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Weather endpoint: {} (timeout {} ms)",
        config.weather.endpoint, config.weather.timeout_ms
    );

    let server = McpServer::new(config.clone())?;

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
