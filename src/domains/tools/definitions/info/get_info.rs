//! Category information tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};

const SERVER_INFO: &str = "MCP server running on Rust (rmcp) with STDIO, TCP and HTTP transports";
const MCP_INFO: &str =
    "Model Context Protocol - A protocol for communication between AI models and tools";

/// Parameters for the get info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetInfoParams {
    #[schemars(description = "Category to get info about (server, tools, mcp, allatools)")]
    pub category: String,
}

/// Get info tool - static descriptions keyed by category.
pub struct GetInfoTool;

impl GetInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get information about different categories (server, tools, mcp, allatools)";

    /// Look up the description for `category` (case-insensitive).
    pub fn execute(category: &str, tool_names: &[&str]) -> String {
        let tool_list = tool_names.join(", ");
        match category.to_lowercase().as_str() {
            "server" => SERVER_INFO.to_string(),
            "tools" => format!("This server provides: {}", tool_list),
            "mcp" => MCP_INFO.to_string(),
            "allatools" => tool_list,
            _ => format!("No information available for category: {}", category),
        }
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetInfoTool {
    type Params = GetInfoParams;

    async fn call(&self, params: GetInfoParams, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute(&params.category, &ctx.tool_names()))
    }
}
