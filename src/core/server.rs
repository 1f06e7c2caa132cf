//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the shared
//! [`Dispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered once in `ToolCatalog::builtin`. STDIO and TCP reach them
//! through the `ServerHandler` impl below, HTTP through [`McpServer::invoke_tool`];
//! both end in the same `Dispatcher::invoke`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{Dispatcher, ToolCatalog};

const INSTRUCTIONS: &str = "Utility tools (greeting, repetition, arithmetic, list and data \
formatting) plus live weather from the Linnanmaa station in Oulu. Call `allatools` for the \
tool list.";

/// The main MCP server handler.
///
/// Cheap to clone: the configuration and the tool catalog are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the immutable tool catalog.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the tool catalog; fails only if the catalog cannot be built.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);
        let catalog = ToolCatalog::builtin(&config)?;
        info!("Registered {} tools: {}", catalog.len(), catalog.list().join(", "));

        Ok(Self {
            dispatcher: Dispatcher::new(Arc::new(catalog)),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Server instructions sent on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn tool_listing(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .catalog()
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn invoke_tool(&self, name: &str, arguments: &JsonObject) -> CallToolResult {
        self.dispatcher.invoke(name, arguments).await.into()
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult::with_all_items(
            self.dispatcher.catalog().tools(),
        ))
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.invoke_tool(&request.name, &arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_capabilities_expose_tools_only() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_tool_listing_has_schemas() {
        let listing = server().tool_listing();
        assert_eq!(listing.len(), 8);
        let calculate = listing
            .iter()
            .find(|t| t["name"] == "calculate")
            .unwrap();
        let required = calculate["inputSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        for name in ["operation", "a", "b"] {
            assert!(required.contains(&json!(name)));
        }
    }

    #[tokio::test]
    async fn test_invoke_tool_unknown_is_error_result() {
        let result = server().invoke_tool("missing", &JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_invoke_tool_success() {
        let mut args = JsonObject::new();
        args.insert("value".to_string(), json!("x"));
        let result = server().invoke_tool("universal", &args).await;
        assert_ne!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, vec!["x"; 10].join("****")),
            _ => panic!("Expected text content"),
        }
    }
}
