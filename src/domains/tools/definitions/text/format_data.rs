//! Mapping formatting tool.
//!
//! Renders a string-to-string mapping as pretty JSON, `key: value` lines or
//! `- key = value` lines. Entries keep the order the caller sent them in.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};
use crate::domains::tools::params::string_pairs;

pub const UNKNOWN_FORMAT: &str = "Error: Unknown format type";

fn default_format_type() -> String {
    "json".to_string()
}

/// Parameters for the format data tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormatDataParams {
    #[schemars(description = "Dictionary data to format")]
    #[schemars(with = "BTreeMap<String, String>")]
    #[serde(deserialize_with = "string_pairs")]
    pub data: Vec<(String, String)>,

    #[schemars(description = "Output format (json, text, list)")]
    #[serde(default = "default_format_type")]
    pub format_type: String,
}

/// Output format selected by `format_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Text,
    List,
}

impl DataFormat {
    /// Parse a format name. Matching is exact.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// Format data tool - renders a mapping in one of several layouts.
pub struct FormatDataTool;

impl FormatDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "format_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Format dictionary data in different formats (json, text, list)";

    /// Render `data` in the requested format.
    ///
    /// Unknown format names produce [`UNKNOWN_FORMAT`] as ordinary output.
    pub fn execute(data: &[(String, String)], format_type: &str) -> Result<String, ToolError> {
        let Some(format) = DataFormat::parse(format_type) else {
            return Ok(UNKNOWN_FORMAT.to_string());
        };

        let rendered = match format {
            DataFormat::Json => {
                let map: Map<String, Value> = data
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                let pretty = serde_json::to_string_pretty(&map)
                    .map_err(|e| ToolError::execution_failed(e.to_string()))?;
                escape_non_ascii(&pretty)
            }
            DataFormat::Text => data
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("\n"),
            DataFormat::List => data
                .iter()
                .map(|(k, v)| format!("- {} = {}", k, v))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        Ok(rendered)
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

/// Replace every non-ASCII character with `\uXXXX` escapes (UTF-16 units,
/// lowercase hex). Valid in JSON output, where such characters only occur
/// inside strings.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

#[async_trait::async_trait]
impl ToolHandler for FormatDataTool {
    type Params = FormatDataParams;

    async fn call(&self, params: FormatDataParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Self::execute(&params.data, &params.format_type)
    }
}
