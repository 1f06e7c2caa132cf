//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP. Every accepted connection gets its
//! own MCP session on its own task; sessions share only the read-only catalog.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed accept so a persistent error does not spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);
        let active = Arc::new(AtomicUsize::new(0));

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            let server = server.clone();
            let active = active.clone();
            let open = active.fetch_add(1, Ordering::SeqCst) + 1;
            info!("Accepted connection from {} ({} open)", peer, open);

            tokio::spawn(
                async move {
                    serve_connection(server, stream, peer).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                }
                .instrument(info_span!("tcp_session", %peer)),
            );
        }
    }
}

/// Run one MCP session until the peer disconnects.
async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let running = match server.serve(stream).await {
        Ok(running) => running,
        Err(e) => {
            warn!("Failed to initialize session for {}: {}", peer, e);
            return;
        }
    };

    match running.waiting().await {
        Ok(reason) => info!("Client {} disconnected: {:?}", peer, reason),
        Err(e) => warn!("Session task for {} failed: {}", peer, e),
    }
}
