//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that stop a transport from serving.
///
/// Per-request problems never show up here: the dispatcher turns them into
/// tool results and the HTTP layer into JSON-RPC error objects.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// MCP session could not be established.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// HTTP server failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The rmcp service ended with an error.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_mentions_address() {
        let err = TransportError::bind(
            "0.0.0.0:8000",
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to bind to 0.0.0.0:8000: address in use"
        );
    }
}
