//! List formatting tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};

pub const DEFAULT_SEPARATOR: &str = ", ";

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Parameters for the list items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListItemsParams {
    #[schemars(description = "List of items to format")]
    pub items: Vec<String>,

    #[schemars(description = "Separator to use between items (default: \", \")")]
    #[serde(default = "default_separator")]
    pub separator: String,
}

/// List items tool - joins a list of strings with a separator.
pub struct ListItemsTool;

impl ListItemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_items";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Format a list of items with a custom separator";

    pub fn execute(items: &[String], separator: &str) -> String {
        items.join(separator)
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListItemsTool {
    type Params = ListItemsParams;

    async fn call(&self, params: ListItemsParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute(&params.items, &params.separator))
    }
}
