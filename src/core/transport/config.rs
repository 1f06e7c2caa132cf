//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport.
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

/// All interfaces.
#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8000;

#[cfg(feature = "http")]
fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(var: &str, fallback: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(fallback)
}

impl Default for TransportConfig {
    /// HTTP when compiled in, otherwise STDIO, otherwise TCP.
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "http"), not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create a TCP transport config.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` selects `stdio`, `tcp` or `http`; unset or unknown
    /// values fall back to [`TransportConfig::default`].
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();
        Self::from_name(&transport)
    }

    fn from_name(transport: &str) -> Self {
        match transport {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: env_port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host()),
            }),
            #[cfg(feature = "http")]
            "http" | "" => Self::Http(HttpConfig {
                port: env_port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host()),
                rpc_path: std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path()),
                enable_cors: std::env::var("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true),
            }),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "http")]
    #[test]
    fn test_default_is_http_on_all_interfaces() {
        match TransportConfig::default() {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.port, 8000);
                assert_eq!(cfg.rpc_path, "/mcp");
            }
            #[allow(unreachable_patterns)]
            other => panic!("unexpected default transport: {:?}", other),
        }
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_by_name() {
        assert!(TransportConfig::from_name("stdio").is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        let cfg = TransportConfig::http(9000, "127.0.0.1");
        assert_eq!(cfg.description(), "HTTP on 127.0.0.1:9000/mcp");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_config_deserializes_with_defaults() {
        let cfg: TransportConfig = serde_json::from_str(r#"{"type": "http"}"#).unwrap();
        assert!(matches!(cfg, TransportConfig::Http(ref h) if h.port == 8000));
    }
}
