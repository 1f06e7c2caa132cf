//! Tool handler contract.
//!
//! Every tool implements [`ToolHandler`] with a typed `Params` struct. The
//! catalog stores handlers behind the object-safe [`BoundHandler`], which
//! decodes raw JSON arguments into `Params` before the call is started, so
//! argument problems surface before any handler code runs.

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::catalog::ToolCatalog;
use super::dispatcher::validate_arguments;
use super::error::ToolError;

// ============================================================================
// Context
// ============================================================================

/// Read-only view of the server handed to every handler call.
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    catalog: &'a ToolCatalog,
}

impl<'a> ToolContext<'a> {
    pub fn new(catalog: &'a ToolCatalog) -> Self {
        Self { catalog }
    }

    /// Names of all registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<&'a str> {
        self.catalog.list()
    }
}

// ============================================================================
// Handler trait
// ============================================================================

/// Uniform "decoded parameters in, text or error out" contract.
///
/// Domain problems that callers are expected to read (division by zero, an
/// unreachable weather station) are returned as `Ok` text. `Err` is reserved
/// for faults the dispatcher reports through the failure channel.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + 'static {
    /// Parameter struct; its JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    async fn call(&self, params: Self::Params, ctx: ToolContext<'_>) -> Result<String, ToolError>;
}

/// Type-erased handler held by the catalog.
pub trait BoundHandler: Send + Sync {
    /// Decode `arguments` and return the pending call.
    fn bind<'a>(
        &'a self,
        arguments: &JsonObject,
        ctx: ToolContext<'a>,
    ) -> Result<BoxFuture<'a, Result<String, ToolError>>, ToolError>;
}

/// Adapts a typed [`ToolHandler`] to [`BoundHandler`].
pub(crate) struct Typed<H>(pub(crate) H);

impl<H: ToolHandler> BoundHandler for Typed<H> {
    fn bind<'a>(
        &'a self,
        arguments: &JsonObject,
        ctx: ToolContext<'a>,
    ) -> Result<BoxFuture<'a, Result<String, ToolError>>, ToolError> {
        let params = validate_arguments::<H::Params>(arguments)?;
        Ok(self.0.call(params, ctx))
    }
}

// ============================================================================
// Invocation result
// ============================================================================

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum InvocationResult {
    Success(String),
    Failure(String),
}

impl InvocationResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The payload text, whichever channel it travelled on.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

impl From<InvocationResult> for CallToolResult {
    fn from(result: InvocationResult) -> Self {
        match result {
            InvocationResult::Success(text) => CallToolResult::success(vec![Content::text(text)]),
            InvocationResult::Failure(message) => {
                CallToolResult::error(vec![Content::text(message)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    struct Echo;

    #[derive(Deserialize, JsonSchema)]
    struct EchoParams {
        word: String,
    }

    #[async_trait::async_trait]
    impl ToolHandler for Echo {
        type Params = EchoParams;

        async fn call(&self, params: EchoParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
            Ok(params.word)
        }
    }

    #[tokio::test]
    async fn test_bind_decodes_then_calls() {
        let catalog = ToolCatalog::new();
        let handler = Typed(Echo);
        let mut args = JsonObject::new();
        args.insert("word".to_string(), serde_json::json!("hei"));

        let call = handler.bind(&args, ToolContext::new(&catalog)).unwrap();
        assert_eq!(call.await.unwrap(), "hei");
    }

    #[test]
    fn test_bind_rejects_before_calling() {
        let catalog = ToolCatalog::new();
        let handler = Typed(Echo);
        let result = handler.bind(&JsonObject::new(), ToolContext::new(&catalog));
        assert!(matches!(
            result,
            Err(ToolError::MissingArgument(name)) if name == "word"
        ));
    }

    #[test]
    fn test_failure_maps_to_error_result() {
        let result: CallToolResult = InvocationResult::failure("Tool not found: nope").into();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Tool not found: nope"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_success_maps_to_success_result() {
        let result: CallToolResult =
            InvocationResult::success("divide(1.0, 0.0) = Error: Division by zero").into();
        assert_ne!(result.is_error, Some(true));
    }
}
