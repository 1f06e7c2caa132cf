//! STDIO transport implementation.
//!
//! One MCP session over stdin/stdout. Logs go to stderr so they never
//! interleave with protocol frames.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!("{} ready on stdin/stdout", name);

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
