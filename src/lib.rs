//! Tata MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a small fixed catalog of
//! utility tools plus a live weather report from the Linnanmaa weather
//! station (University of Oulu).
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and the
//!   STDIO / TCP / HTTP transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool catalog, the dispatcher and the tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use tata_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::tools::{Dispatcher, InvocationResult, ToolCatalog};
