//! Greeting tool.

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};
use crate::domains::tools::params::NoParams;

/// Greeting tool - returns a fixed Finnish greeting.
pub struct TataTool;

impl TataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tata";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns 'terve Maailma' greeting";

    pub const GREETING: &'static str = "terve Maailma";

    pub fn execute() -> String {
        Self::GREETING.to_string()
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for TataTool {
    type Params = NoParams;

    async fn call(&self, _params: NoParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute())
    }
}
