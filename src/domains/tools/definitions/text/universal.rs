//! Repetition tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};

const REPEAT_COUNT: usize = 10;
const SEPARATOR: &str = "****";

/// Parameters for the universal tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UniversalParams {
    #[schemars(description = "The specific value to repeat")]
    pub value: String,
}

/// Universal tool - repeats a value ten times with `****` between occurrences.
pub struct UniversalTool;

impl UniversalTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "universal";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Universal tool that repeats a given value 10 times with '****' between each occurrence";

    pub fn execute(value: &str) -> String {
        vec![value; REPEAT_COUNT].join(SEPARATOR)
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for UniversalTool {
    type Params = UniversalParams;

    async fn call(&self, params: UniversalParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute(&params.value))
    }
}
