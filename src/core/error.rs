//! Error types and handling for the MCP server.
//!
//! This module defines the unified error type returned while building and
//! running the server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::duplicate("tata").into();
        assert_eq!(err.to_string(), "Tool error: Duplicate tool name: tata");
    }

    #[test]
    fn test_transport_error_converts() {
        let err: Error = crate::core::transport::TransportError::init("stdin closed").into();
        assert!(err.to_string().starts_with("Transport error: "));
    }
}
