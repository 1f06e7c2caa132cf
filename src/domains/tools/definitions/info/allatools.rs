//! Tool listing tool.

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};
use crate::domains::tools::params::NoParams;

/// Alla tools - comma-separated names of every registered tool.
pub struct AllaToolsTool;

impl AllaToolsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "allatools";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns a comma-separated list of all available tool names";

    pub fn execute(tool_names: &[&str]) -> String {
        tool_names.join(", ")
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for AllaToolsTool {
    type Params = NoParams;

    async fn call(&self, _params: NoParams, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute(&ctx.tool_names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::catalog::ToolCatalog;

    #[tokio::test]
    async fn test_lists_builtin_catalog() {
        let catalog = ToolCatalog::builtin(&Config::default()).unwrap();
        let out = AllaToolsTool
            .call(NoParams::default(), ToolContext::new(&catalog))
            .await
            .unwrap();
        assert_eq!(
            out,
            "tata, universal, calculate, get_info, list_items, format_data, \
             get_linnanmaa_weather, allatools"
        );
    }
}
