//! Arithmetic tool.
//!
//! Domain errors (division by zero, unknown operation) are part of the
//! rendered output rather than tool failures, e.g.
//! `divide(1.0, 0.0) = Error: Division by zero`.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::catalog::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler};
use crate::domains::tools::params::number_or_numeric_string;

pub const DIVISION_BY_ZERO: &str = "Error: Division by zero";
pub const UNKNOWN_OPERATION: &str = "Error: Unknown operation";

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operation name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operation. Division by zero yields `None`.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

/// Parameters for the calculate tool. Numbers may also arrive as numeric
/// strings.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    #[schemars(description = "The operation to perform (add, subtract, multiply, divide)")]
    pub operation: String,

    #[schemars(description = "First number")]
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub a: f64,

    #[schemars(description = "Second number")]
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub b: f64,
}

/// Calculate tool - basic arithmetic on two numbers.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform basic mathematical operations (add, subtract, multiply, divide)";

    /// Compute and render `operation(a, b) = result`.
    pub fn execute(operation: &str, a: f64, b: f64) -> String {
        let result = match Operation::parse(operation) {
            Some(op) => match op.apply(a, b) {
                Some(value) => format_number(value),
                None => DIVISION_BY_ZERO.to_string(),
            },
            None => UNKNOWN_OPERATION.to_string(),
        };

        format!(
            "{}({}, {}) = {}",
            operation,
            format_number(a),
            format_number(b),
            result
        )
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for CalculateTool {
    type Params = CalculateParams;

    async fn call(&self, params: CalculateParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
        Ok(Self::execute(&params.operation, params.a, params.b))
    }
}

/// Render a float the way callers of this server expect: integral values keep
/// a trailing `.0`, magnitudes outside `[1e-4, 1e16)` switch to exponent form
/// with a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if value != 0.0 {
        let sci = format!("{:e}", value);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                if !(-4..16).contains(&exp) {
                    let sign = if exp < 0 { '-' } else { '+' };
                    return format!("{}e{}{:02}", mantissa, sign, exp.abs());
                }
            }
        }
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}
